mod bindings;
mod browser;
mod components;
mod imports;
mod types;

use crate::components::*;
use crate::imports::*;
use crate::types::*;

#[function_component(EmbedPage)]
fn embed_page_component() -> Html {
    let query = use_location()
        .and_then(|l| l.query::<EmbedQuery>().map_err(|e| error!("Invalid embed query: {}", e)).ok())
        .unwrap_or_default();
    html! {
        <TransitousWidget from={query.from} to={query.to}/>
    }
}

#[function_component(TimePage)]
fn time_page_component() -> Html {
    let query = use_location()
        .and_then(|l| l.query::<TimeQuery>().map_err(|e| error!("Invalid time query: {}", e)).ok())
        .unwrap_or_default();
    match query.utc {
        Some(utc) => html! {
            <p class="lead">
                <StopTime {utc} stop_time_zone={query.tz}/>
            </p>
        },
        None => html! {
            <p>
                { "Add a " }
                <code>{ "utc" }</code>
                { " query parameter, and optionally a " }
                <code>{ "tz" }</code>
                { " parameter with the stop's time zone." }
            </p>
        },
    }
}

fn not_found_html() -> Html {
    html! { <>
        <h1>{ "Page not found" }</h1>
        <p>
            <Link<Route> to={Route::Embed}>{ "Go to the journey planner" }</Link<Route>>
        </p>
    </> }
}

fn switch_route(route: &Route) -> Html {
    match route {
        Route::Embed => html! { <EmbedPage/> },
        Route::Time => html! { <TimePage/> },
        Route::NotFound => not_found_html(),
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={Switch::render(switch_route)}/>
        </BrowserRouter>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::start_app::<App>();
}
