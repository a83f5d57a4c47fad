use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <main class="section not-found">
            <div class="container section-header">
                <span class="eyebrow">{"404"}</span>
                <h2>{"This page does not exist"}</h2>
                <p>{"The link may be broken or the page may have moved."}</p>
                <Link<Route> to={Route::Home} classes="button">{"Back to home"}</Link<Route>>
            </div>
        </main>
    }
}
