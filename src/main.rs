use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod data;
mod error;
mod motion {
    pub mod reveal;
    pub mod selection;
    pub mod stagger;
    pub mod viewport;
}
mod forms {
    pub mod submit;
}
mod components {
    pub mod animated;
    pub mod feedback;
    pub mod nav;
    pub mod newsletter;
    pub mod variant;
}
mod pages {
    pub mod challenges;
    pub mod contact;
    pub mod footer;
    pub mod hero;
    pub mod how_it_works;
    pub mod landing;
    pub mod not_found;
    pub mod recommendations;
    pub mod stories;
}
mod counselor {
    pub mod charts;
    pub mod chat;
    pub mod dashboard;
    pub mod panels;
}

use components::animated::SITE_CSS;
use components::nav::SiteHeader;
use counselor::dashboard::CounselorDashboard;
use pages::{landing::Landing, not_found::NotFound};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/counselor")]
    Counselor,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Landing /> }
        }
        Route::Counselor => {
            info!("Rendering Counselor page");
            html! { <CounselorDashboard /> }
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
            <style>{ SITE_CSS }</style>
            <SiteHeader />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
