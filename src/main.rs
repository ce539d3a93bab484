use log::{info, Level};
use yew::prelude::*;
use yew_router::prelude::*;

mod animation;
mod config;
mod content;
mod state;
mod components {
    pub mod collaborate;
    pub mod footer;
    pub mod header;
}
mod pages {
    pub mod home;
    pub mod not_found;
}
mod sections {
    pub mod achievements;
    pub mod brand;
    pub mod customer_stories;
    pub mod faq;
    pub mod hero;
    pub mod innovation;
    pub mod online_presence;
    pub mod solutions;
    pub mod web_result;
}

use components::{footer::Footer, header::Header};
use pages::{home::Home, not_found::NotFound};

#[derive(Clone, Routable, PartialEq)]
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
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Header />
            <Switch<Route> render={switch} />
            <Footer />
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting Ronminco site");
    yew::Renderer::<App>::new().render();
}
