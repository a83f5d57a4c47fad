use yew::prelude::*;

use crate::components::animated::Animated;
use crate::data::{Story, SUCCESS_STORIES};
use crate::motion::reveal::RevealOptions;
use crate::motion::stagger::StaggerSchedule;
use crate::motion::viewport::use_reveal;

const STORY_SCHEDULE: StaggerSchedule = StaggerSchedule::new(100, 100);

fn story_card(story: &Story, visible: bool, delay_ms: u32) -> Html {
    let name_id = format!("story-{}-name", story.id);
    html! {
        <Animated {visible} {delay_ms} class={classes!("card", story.accent.surface_class())}>
            <article tabindex="0" aria-labelledby={name_id.clone()}>
                <div class="story-head">
                    <span class={classes!("story-icon", story.accent.fill_class())}></span>
                    <div>
                        <div id={name_id} class="story-name">{ story.name }</div>
                        <div class="story-title">{ story.title }</div>
                    </div>
                </div>
                <p class="story-body">{ story.description }</p>
            </article>
        </Animated>
    }
}

#[function_component(Stories)]
pub fn stories() -> Html {
    let section_ref = use_node_ref();
    let visible = use_reveal(section_ref.clone(), RevealOptions::default());

    html! {
        <section id="stories" class="section stories" ref={section_ref}
            aria-labelledby="stories-heading">
            <style>{ STORIES_CSS }</style>
            <div class="container">
                <Animated {visible} class={classes!("section-header")}>
                    <span class="eyebrow">{"Success stories"}</span>
                    <h2 id="stories-heading">{"Real success stories"}</h2>
                    <p>{"How young people like you reached their career goals with the platform."}</p>
                </Animated>

                <div class="card-grid">
                    { for SUCCESS_STORIES.iter().enumerate().map(|(index, story)| {
                        story_card(story, visible, STORY_SCHEDULE.delay(index))
                    }) }
                </div>

                <Animated {visible} delay_ms={400} class={classes!("stories-cta")}>
                    <a href="#challenges" class="button">{"Write the next story"}</a>
                    <p>{"Find out how the next story could be yours"}</p>
                </Animated>
            </div>
        </section>
    }
}

const STORIES_CSS: &str = r#"
    .stories {
        background: white;
    }
    .story-head {
        display: flex;
        justify-content: space-between;
        align-items: flex-start;
        margin-bottom: 1rem;
    }
    .story-icon {
        width: 3rem;
        height: 3rem;
        border-radius: 9999px;
    }
    .story-name {
        font-size: 1.25rem;
        font-weight: 700;
        text-align: right;
    }
    .story-title {
        font-size: 0.875rem;
        color: #1d4ed8;
        text-align: right;
    }
    .story-body {
        font-size: 0.875rem;
        line-height: 1.6;
    }
    .stories-cta {
        margin-top: 2.5rem;
        text-align: center;
        color: #2563eb;
        font-size: 0.875rem;
    }
"#;
