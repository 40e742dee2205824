use common::model::{NewReading, Reading};
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_hooks::use_interval;

use crate::{csv, request, state::Selection, stats, utils};

const REFRESH_MS: u32 = 15_000;

#[derive(Clone, PartialEq)]
enum LoadState {
    Idle,
    Loading,
    Loaded(Vec<Reading>),
    Error(String),
}

fn input_value(e: &Event) -> Option<String> {
    e.target()
        .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.value())
}

#[function_component(SensorDetail)]
pub fn sensor_detail() -> Html {
    let selection = use_context::<Selection>().expect("Selection context no disponible");
    let state = use_state(|| LoadState::Idle);
    let desde = use_state(String::new);
    let hasta = use_state(String::new);
    let auto_refresh = use_state(|| true);
    let nuevo_valor = use_state(String::new);
    let load_seq = use_mut_ref(|| 0u32);

    // Every trigger bumps the generation; a response only lands if no newer
    // trigger superseded it in the meantime.
    let load = {
        let state = state.clone();
        let load_seq = load_seq.clone();
        move |sensor_id: i32, desde: Option<String>, hasta: Option<String>| {
            *load_seq.borrow_mut() += 1;
            let seq = *load_seq.borrow();
            state.set(LoadState::Loading);
            let state = state.clone();
            let load_seq = load_seq.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let res = request::readings(sensor_id, desde.as_deref(), hasta.as_deref()).await;
                if *load_seq.borrow() != seq {
                    return;
                }
                match res {
                    Ok(mut readings) => {
                        readings.sort_by_key(|r| std::cmp::Reverse(r.timestamp));
                        state.set(LoadState::Loaded(readings));
                    }
                    Err(err) => {
                        log::error!("error cargando lecturas: {err:?}");
                        state.set(LoadState::Error("Error al cargar las lecturas".to_owned()));
                    }
                }
            });
        }
    };

    // fresh load on every selection change (and on mount when one is set)
    {
        let load = load.clone();
        let desde = desde.clone();
        let hasta = hasta.clone();
        let state = state.clone();
        use_effect_with(selection.sensor.clone(), move |sensor| {
            match sensor {
                Some(sensor) => {
                    desde.set(String::new());
                    hasta.set(String::new());
                    load(sensor.id, None, None);
                }
                None => state.set(LoadState::Idle),
            }
            || ()
        });
    }

    // periodic unfiltered refresh while the toggle is on; 0 pauses the timer
    {
        let load = load.clone();
        let sensor = selection.sensor.clone();
        let millis = if *auto_refresh && sensor.is_some() {
            REFRESH_MS
        } else {
            0
        };
        use_interval(
            move || {
                if let Some(sensor) = &sensor {
                    load(sensor.id, None, None);
                }
            },
            millis,
        );
    }

    let on_desde = {
        let desde = desde.clone();
        Callback::from(move |e: Event| {
            if let Some(valor) = input_value(&e) {
                desde.set(valor);
            }
        })
    };
    let on_hasta = {
        let hasta = hasta.clone();
        Callback::from(move |e: Event| {
            if let Some(valor) = input_value(&e) {
                hasta.set(valor);
            }
        })
    };

    let on_apply = {
        let load = load.clone();
        let sensor = selection.sensor.clone();
        let desde = desde.clone();
        let hasta = hasta.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(sensor) = &sensor {
                let d = (!desde.is_empty()).then(|| (*desde).clone());
                let h = (!hasta.is_empty()).then(|| (*hasta).clone());
                load(sensor.id, d, h);
            }
        })
    };

    let on_clear = {
        let load = load.clone();
        let sensor = selection.sensor.clone();
        let desde = desde.clone();
        let hasta = hasta.clone();
        Callback::from(move |_: MouseEvent| {
            desde.set(String::new());
            hasta.set(String::new());
            if let Some(sensor) = &sensor {
                load(sensor.id, None, None);
            }
        })
    };

    let on_toggle = {
        let auto_refresh = auto_refresh.clone();
        Callback::from(move |_: Event| auto_refresh.set(!*auto_refresh))
    };

    let on_export = {
        let sensor = selection.sensor.clone();
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(sensor) = &sensor else { return };
            let readings = match &*state {
                LoadState::Loaded(readings) if !readings.is_empty() => readings,
                _ => {
                    utils::alert("No hay datos para exportar");
                    return;
                }
            };
            let contenido = csv::build(sensor, readings);
            let nombre = csv::file_name(&sensor.name, utils::today());
            if let Err(err) = utils::download_csv(&nombre, &contenido) {
                log::error!("error exportando CSV: {err:?}");
            }
        })
    };

    let on_nuevo_valor = {
        let nuevo_valor = nuevo_valor.clone();
        Callback::from(move |e: Event| {
            if let Some(valor) = input_value(&e) {
                nuevo_valor.set(valor);
            }
        })
    };

    let on_create = {
        let load = load.clone();
        let sensor = selection.sensor.clone();
        let nuevo_valor = nuevo_valor.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(sensor) = &sensor else { return };
            let Ok(value) = nuevo_valor.parse::<f64>() else {
                utils::alert("Valor inválido");
                return;
            };
            let new = NewReading {
                sensor_id: sensor.id,
                value,
                timestamp: None,
            };
            let load = load.clone();
            let sensor_id = sensor.id;
            let nuevo_valor = nuevo_valor.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match request::create_reading(&new).await {
                    Ok(_) => {
                        nuevo_valor.set(String::new());
                        load(sensor_id, None, None);
                    }
                    Err(err) => {
                        log::error!("error registrando lectura: {err:?}");
                        utils::alert("No se pudo registrar la lectura");
                    }
                }
            });
        })
    };

    let Some(sensor) = selection.sensor.clone() else {
        return html! {
            <div class="panel panel-default">
                <div class="panel-body">{"Selecciona un sensor para ver sus lecturas"}</div>
            </div>
        };
    };
    let unidad = utils::unit_for(&sensor.kind);

    let cuerpo = match &*state {
        LoadState::Idle | LoadState::Loading => html! { <p>{"Cargando lecturas..."}</p> },
        LoadState::Error(mensaje) => {
            html! { <div class="alert alert-danger">{mensaje.clone()}</div> }
        }
        LoadState::Loaded(readings) => {
            let ultima = match stats::latest(readings) {
                Some(r) => format!("{} {}", r.value, unidad),
                None => "N/A".to_owned(),
            };
            let tiles = [
                ("Última lectura", ultima),
                ("Promedio", format!("{} {}", stats::average(readings), unidad)),
                ("Máximo", format!("{} {}", stats::max_value(readings), unidad)),
                ("Mínimo", format!("{} {}", stats::min_value(readings), unidad)),
            ];
            html! {
                <>
                    <div class="row">
                        { for tiles.iter().map(|(titulo, valor)| html! {
                            <div class="col-md-3">
                                <div class="panel panel-default stat-tile">
                                    <div class="panel-heading">{*titulo}</div>
                                    <div class="panel-body">{valor.clone()}</div>
                                </div>
                            </div>
                        }) }
                    </div>
                    <table class="table table-hover">
                        <thead>
                            <tr><th>{"Fecha/Hora"}</th><th>{"Valor"}</th></tr>
                        </thead>
                        <tbody>
                            { for readings.iter().map(|r| html! {
                                <tr key={r.id}>
                                    <td>{utils::format_timestamp(&r.timestamp)}</td>
                                    <td>{format!("{} {}", r.value, unidad)}</td>
                                </tr>
                            }) }
                        </tbody>
                    </table>
                </>
            }
        }
    };

    html! {
        <div class="panel panel-default">
            <div class="panel-heading">
                <h3 class="panel-title">
                    {utils::icon_for(&sensor.kind)}
                    {" "}
                    {sensor.name.clone()}
                    {" - "}
                    {sensor.location.clone()}
                </h3>
            </div>
            <div class="panel-body">
                <div class="form-inline filtro-fechas">
                    <label>{"Desde "}
                        <input type="date" class="form-control" onchange={on_desde} value={(*desde).clone()} />
                    </label>
                    {" "}
                    <label>{"Hasta "}
                        <input type="date" class="form-control" onchange={on_hasta} value={(*hasta).clone()} />
                    </label>
                    {" "}
                    <button class="btn btn-primary" onclick={on_apply}>{"Aplicar filtro"}</button>
                    {" "}
                    <button class="btn btn-default" onclick={on_clear}>{"Limpiar"}</button>
                </div>
                <div class="form-inline">
                    <label>
                        <input type="checkbox" onchange={on_toggle} checked={*auto_refresh} />
                        {" Actualizar cada 15 s"}
                    </label>
                    {" "}
                    <button class="btn btn-default" onclick={on_export}>{"Exportar CSV"}</button>
                </div>
                <div class="form-inline nueva-lectura">
                    <label>{"Nueva lectura "}
                        <input type="number" step="any" class="form-control"
                            onchange={on_nuevo_valor} value={(*nuevo_valor).clone()} />
                    </label>
                    {" "}
                    <button class="btn btn-default" onclick={on_create}>{"Registrar"}</button>
                </div>
                {cuerpo}
            </div>
        </div>
    }
}
