mod components;
mod csv;
mod request;
mod state;
mod stats;
mod utils;

use common::model::Sensor;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::state::Selection;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[function_component(PageDashboard)]
pub fn page_dashboard() -> Html {
    let selected = use_state(|| None::<Sensor>);
    let on_select = {
        let selected = selected.clone();
        Callback::from(move |sensor: Sensor| selected.set(Some(sensor)))
    };
    let selection = Selection {
        sensor: (*selected).clone(),
        on_select,
    };

    html! {
        <ContextProvider<Selection> context={selection}>
            <div class="container-fluid">
                <h1 class="page-header">{"Panel de Sensores"}</h1>
                <div class="row">
                    <div class="col-md-4">
                        <components::sensor_list::SensorList />
                    </div>
                    <div class="col-md-8">
                        <components::sensor_detail::SensorDetail />
                    </div>
                </div>
            </div>
        </ContextProvider<Selection>>
    }
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <PageDashboard/> },
        Route::NotFound => html! { <h1>{ "404" }</h1> },
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}
