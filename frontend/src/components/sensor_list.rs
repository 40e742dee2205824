use common::model::Sensor;
use yew::prelude::*;

use crate::{request, state::Selection, utils};

#[function_component(SensorList)]
pub fn sensor_list() -> Html {
    let selection = use_context::<Selection>().expect("Selection context no disponible");
    let sensors = use_state(|| None::<Vec<Sensor>>);
    let error = use_state(|| None::<String>);

    {
        let sensors = sensors.clone();
        let error = error.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match request::sensors().await {
                    Ok(list) => sensors.set(Some(list)),
                    Err(err) => {
                        log::error!("error cargando sensores: {err:?}");
                        error.set(Some("Error al cargar los sensores".to_owned()));
                    }
                }
            });
            || ()
        });
    }

    if let Some(mensaje) = error.as_ref() {
        return html! { <div class="alert alert-danger">{mensaje.clone()}</div> };
    }

    let Some(sensors) = sensors.as_ref() else {
        return html! { <p>{"Cargando sensores..."}</p> };
    };

    let selected_id = selection.sensor.as_ref().map(|s| s.id);
    let items: Vec<Html> = sensors
        .iter()
        .map(|sensor| {
            let on_select = selection.on_select.clone();
            let seleccionado = sensor.clone();
            let onclick = Callback::from(move |_: MouseEvent| on_select.emit(seleccionado.clone()));
            let class = if selected_id == Some(sensor.id) {
                "list-group-item active"
            } else {
                "list-group-item"
            };
            html! {
                <a {class} {onclick}>
                    <span class="sensor-icon">{utils::icon_for(&sensor.kind)}</span>
                    {" "}
                    <strong>{sensor.name.clone()}</strong>
                    <br/>
                    <small>{sensor.location.clone()}</small>
                </a>
            }
        })
        .collect();

    html! {
        <div class="panel panel-default">
            <div class="panel-heading">
                <h3 class="panel-title">{"Sensores"}</h3>
            </div>
            <div class="list-group">
                {items}
            </div>
        </div>
    }
}
