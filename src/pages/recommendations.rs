use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::animated::Animated;
use crate::data::{CareerPath, CAREER_PATHS};
use crate::motion::reveal::RevealOptions;
use crate::motion::stagger::StaggerSchedule;
use crate::motion::viewport::use_reveal;
use crate::Route;

const CARD_SCHEDULE: StaggerSchedule = StaggerSchedule::new(300, 150);

fn career_card(career: &CareerPath, visible: bool, delay_ms: u32) -> Html {
    html! {
        <Animated {visible} {delay_ms} class={classes!("card", "career-card", career.accent.surface_class())}>
            <div class="career-card-head">
                <h3>{ career.title }</h3>
                <span class={classes!("career-dot", career.accent.fill_class())}></span>
            </div>
            <p>{ career.description }</p>
            <Link<Route> to={Route::Counselor} classes={classes!("button", "wide", career.accent.fill_class())}>
                { "Learn the details ‹" }
            </Link<Route>>
        </Animated>
    }
}

#[function_component(Recommendations)]
pub fn recommendations() -> Html {
    let section_ref = use_node_ref();
    let visible = use_reveal(section_ref.clone(), RevealOptions::at_viewport_edge(0.15));

    html! {
        <section id="recommendations" class="section recommendations" ref={section_ref}
            aria-label="Featured career paths">
            <style>{ RECOMMENDATIONS_CSS }</style>
            <div class="container">
                <Animated {visible} class={classes!("section-header")}>
                    <span class="eyebrow">{"Featured career paths"}</span>
                    <h2>{"Discover fields worth your attention!"}</h2>
                    <p>{"A few of the career paths set to be most in demand."}</p>
                </Animated>

                <div class="card-grid">
                    { for CAREER_PATHS.iter().enumerate().map(|(index, career)| {
                        career_card(career, visible, CARD_SCHEDULE.delay(index))
                    }) }
                </div>

                <Animated {visible} delay_ms={550} class={classes!("recommendations-cta")}>
                    <Link<Route> to={Route::Counselor} classes="button">{"Explore every career path"}</Link<Route>>
                    <p>{"More than 50 career paths to explore"}</p>
                </Animated>
            </div>
        </section>
    }
}

const RECOMMENDATIONS_CSS: &str = r#"
    .recommendations {
        background: white;
    }
    .career-card {
        border: 1px solid #dbeafe;
    }
    .career-card-head {
        display: flex;
        justify-content: space-between;
        align-items: flex-start;
        margin-bottom: 1.5rem;
    }
    .career-card-head h3 {
        margin: 0;
    }
    .career-dot {
        width: 3rem;
        height: 3rem;
        border-radius: 9999px;
    }
    .button.wide {
        width: 100%;
        justify-content: center;
    }
    .recommendations-cta {
        margin-top: 3rem;
        text-align: center;
        color: #2563eb;
        font-size: 0.875rem;
    }
"#;
