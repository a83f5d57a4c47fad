use yew::prelude::*;

use crate::pages::{
    challenges::Challenges, contact::Contact, footer::Footer, hero::Hero,
    how_it_works::HowItWorks, recommendations::Recommendations, stories::Stories,
};

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <main>
            <Hero />
            <HowItWorks />
            <Recommendations />
            <Stories />
            <Challenges />
            <Contact />
            <Footer />
        </main>
    }
}
