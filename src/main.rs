use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod animation;
mod components;
mod config;
mod hooks;
mod pages;

use components::nav::Nav;
use pages::landing::Landing;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Landing page");
            html! { <Landing /> }
        }
        Route::NotFound => {
            // Single page site: unknown paths still get the landing page.
            info!("Unknown route, rendering Landing page");
            html! { <Landing /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::Route;
    use yew_router::Routable;

    #[test]
    fn root_path_is_the_landing_route() {
        assert_eq!(Route::recognize("/"), Some(Route::Home));
        assert_eq!(Route::Home.to_path(), "/");
    }
}
