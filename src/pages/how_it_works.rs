use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::animated::Animated;
use crate::data::{Step, Testimonial, FEATURES, STATS, STEPS, TESTIMONIALS};
use crate::motion::reveal::RevealOptions;
use crate::motion::stagger::StaggerSchedule;
use crate::motion::viewport::use_reveal;
use crate::Route;

const SECTION_THRESHOLD: f64 = 0.15;
const STEP_SCHEDULE: StaggerSchedule = StaggerSchedule::new(300, 150);

fn step_card(step: &Step, visible: bool, delay_ms: u32) -> Html {
    html! {
        <Animated {visible} {delay_ms} class={classes!("card", "step-card")}>
            <div class="step-number">{ step.number }</div>
            <h3>{ step.title }</h3>
            <p>{ step.description }</p>
        </Animated>
    }
}

fn testimonial_card(testimonial: &Testimonial) -> Html {
    let initial = testimonial.name.chars().next().unwrap_or('?');
    html! {
        <div class="card testimonial">
            <div class="stars" aria-label={format!("{} out of 5", testimonial.rating)}>
                { for (0..5u8).map(|i| html! {
                    <span class={if i < testimonial.rating { "star filled" } else { "star" }}>{"★"}</span>
                }) }
            </div>
            <p class="quote">{ format!("\"{}\"", testimonial.content) }</p>
            <div class="author">
                <div class="avatar">{ initial }</div>
                <div>
                    <p class="author-name">{ testimonial.name }</p>
                    <p class="author-role">{ testimonial.role }</p>
                </div>
            </div>
        </div>
    }
}

#[function_component(HowItWorks)]
pub fn how_it_works() -> Html {
    let section_ref = use_node_ref();
    let visible = use_reveal(
        section_ref.clone(),
        RevealOptions::at_viewport_edge(SECTION_THRESHOLD),
    );

    html! {
        <section id="how-it-works" class="section how-it-works" ref={section_ref}>
            <style>{ HOW_IT_WORKS_CSS }</style>
            <div class="container">
                <Animated {visible} class={classes!("section-header")}>
                    <span class="eyebrow">{"Simple steps"}</span>
                    <h2>{"How does it work?"}</h2>
                    <p>{"Guidance matched to your interests, in three straightforward steps:"}</p>
                </Animated>

                <div class="card-grid steps">
                    { for STEPS.iter().enumerate().map(|(index, step)| {
                        step_card(step, visible, STEP_SCHEDULE.delay(index))
                    }) }
                </div>

                <Animated {visible} delay_ms={500} class={classes!("block")}>
                    <h3 class="block-title">{"What the test offers"}</h3>
                    <div class="two-column">
                        { for FEATURES.iter().map(|feature| html! {
                            <div class="card feature">
                                <h4>{ feature.title }</h4>
                                <p>{ feature.description }</p>
                            </div>
                        }) }
                    </div>
                </Animated>

                <Animated {visible} delay_ms={550} class={classes!("block")}>
                    <h3 class="block-title">{"What users say"}</h3>
                    <div class="two-column">
                        { for TESTIMONIALS.iter().map(testimonial_card) }
                    </div>
                </Animated>

                <Animated {visible} delay_ms={600} class={classes!("cta")}>
                    <Link<Route> to={Route::Counselor} classes="button">{"Take the interest test now"}</Link<Route>>
                    <p class="cta-note">{"The test takes only 10 minutes and results are instant."}</p>
                    <div class="stats">
                        { for STATS.iter().map(|stat| html! {
                            <div class="stat">
                                <span class="stat-value">{ stat.value }</span>
                                <span class="stat-label">{ stat.label }</span>
                            </div>
                        }) }
                    </div>
                </Animated>
            </div>
        </section>
    }
}

const HOW_IT_WORKS_CSS: &str = r#"
    .how-it-works {
        background: white;
    }
    .step-card {
        background: #eff6ff;
        border: 1px solid #dbeafe;
    }
    .step-number {
        width: 3rem;
        height: 3rem;
        border-radius: 9999px;
        background: #3b82f6;
        color: white;
        font-weight: 700;
        display: flex;
        align-items: center;
        justify-content: center;
        margin-bottom: 1rem;
    }
    .block {
        margin-top: 4rem;
    }
    .block-title {
        text-align: center;
        font-size: 1.5rem;
        margin-bottom: 2rem;
    }
    .two-column {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
        gap: 1.5rem;
    }
    .feature, .testimonial {
        background: #eff6ff;
    }
    .stars {
        color: #bfdbfe;
    }
    .star.filled {
        color: #fbbf24;
    }
    .quote {
        font-style: italic;
        color: #1d4ed8;
    }
    .author {
        display: flex;
        align-items: center;
        gap: 0.5rem;
    }
    .avatar {
        width: 2.5rem;
        height: 2.5rem;
        border-radius: 9999px;
        background: #dbeafe;
        display: flex;
        align-items: center;
        justify-content: center;
        font-weight: 700;
    }
    .author-name {
        margin: 0;
        font-weight: 600;
    }
    .author-role {
        margin: 0;
        font-size: 0.875rem;
        color: #2563eb;
    }
    .cta {
        margin-top: 4rem;
        text-align: center;
    }
    .cta-note {
        color: #2563eb;
        font-size: 0.875rem;
    }
    .stats {
        display: flex;
        flex-wrap: wrap;
        justify-content: center;
        gap: 1.5rem;
        margin-top: 2.5rem;
    }
    .stat {
        display: flex;
        flex-direction: column;
        align-items: center;
        padding: 1rem;
        background: #eff6ff;
        border-radius: 0.5rem;
    }
    .stat-value {
        font-size: 1.5rem;
        font-weight: 700;
    }
    .stat-label {
        font-size: 0.875rem;
        color: #2563eb;
    }
"#;
