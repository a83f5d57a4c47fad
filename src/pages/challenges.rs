use yew::prelude::*;

use crate::components::animated::Animated;
use crate::components::newsletter::{NewsletterForm, NewsletterPlacement};
use crate::components::variant::{Accent, Badge};
use crate::data::{Challenge, BENEFITS, UPCOMING_CHALLENGES};
use crate::motion::reveal::RevealOptions;
use crate::motion::selection::use_exclusive_selection;
use crate::motion::stagger::StaggerSchedule;
use crate::motion::viewport::use_reveal;

const ALL_FILTER: &str = "all";

const FILTERS: &[(&str, &str)] = &[
    (ALL_FILTER, "All"),
    ("beginner", "Beginner"),
    ("intermediate", "Intermediate"),
    ("advanced", "Advanced"),
];

const CARD_SCHEDULE: StaggerSchedule = StaggerSchedule::new(100, 100);

/// Challenges shown under the filter tab `key`; `"all"` keeps every one.
pub fn filter_challenges(key: &str) -> impl Iterator<Item = &'static Challenge> + '_ {
    UPCOMING_CHALLENGES
        .iter()
        .filter(move |c| key == ALL_FILTER || c.difficulty.filter_key() == key)
}

fn challenge_card(challenge: &Challenge, visible: bool, delay_ms: u32) -> Html {
    html! {
        <Animated {visible} {delay_ms} class={classes!("card", "challenge-card", challenge.accent.surface_class())}>
            <div class="challenge-head">
                <span class={classes!("challenge-icon", challenge.accent.fill_class())}></span>
                <Badge text={challenge.difficulty.label()} accent={challenge.difficulty.accent()} />
            </div>
            <h3>{ challenge.title }</h3>
            <p class="challenge-body">{ challenge.description }</p>
            <ul class="challenge-meta">
                <li>{ format!("Starts {}", challenge.start_date) }</li>
                <li>{ format!("Duration: {}", challenge.duration) }</li>
                <li>{ format!("{} participants", challenge.participants) }</li>
            </ul>
            <button class={classes!("button", "wide", challenge.accent.fill_class())}>{"Join the challenge"}</button>
        </Animated>
    }
}

#[function_component(Challenges)]
pub fn challenges() -> Html {
    let section_ref = use_node_ref();
    let visible = use_reveal(section_ref.clone(), RevealOptions::default());
    let filter = use_exclusive_selection::<&'static str>();
    let active = filter.active_or(ALL_FILTER);

    html! {
        <section id="challenges" class="section challenges" ref={section_ref}
            aria-labelledby="challenges-heading">
            <style>{ CHALLENGES_CSS }</style>
            <div class="container">
                <Animated {visible} class={classes!("section-header")}>
                    <span class="eyebrow">{"Upcoming challenges"}</span>
                    <h2 id="challenges-heading">{"Test your skills on real projects"}</h2>
                    <p>{"Join practical challenges, build your portfolio and get noticed by employers."}</p>
                </Animated>

                <Animated {visible} delay_ms={200} class={classes!("filter-tabs")}>
                    <div role="tablist" aria-label="Filter by difficulty">
                        { for FILTERS.iter().map(|&(key, label)| {
                            let selected = active == key;
                            html! {
                                <button role="tab" id={format!("tab-{}", key)}
                                    class={Accent::Blue.tab_class(selected)}
                                    aria-selected={selected.to_string()}
                                    aria-controls={format!("challenges-{}", key)}
                                    onclick={filter.select_callback(key)}>
                                    { label }
                                </button>
                            }
                        }) }
                    </div>
                </Animated>

                <div class="card-grid" id={format!("challenges-{}", active)} role="tabpanel"
                    aria-labelledby={format!("tab-{}", active)}>
                    { for filter_challenges(active).enumerate().map(|(index, challenge)| {
                        challenge_card(challenge, visible, CARD_SCHEDULE.delay(index))
                    }) }
                </div>

                <Animated {visible} delay_ms={300} class={classes!("benefits")}>
                    <h3>{"Why take part?"}</h3>
                    <div class="card-grid">
                        { for BENEFITS.iter().map(|benefit| html! {
                            <div class="benefit">
                                <h4>{ benefit.title }</h4>
                                <p>{ benefit.description }</p>
                            </div>
                        }) }
                    </div>
                </Animated>

                <Animated {visible} delay_ms={400} class={classes!("challenge-newsletter")}>
                    <h3>{"Hear about new challenges first"}</h3>
                    <p>{"Subscribe and we will email you when a challenge opens."}</p>
                    <NewsletterForm placement={NewsletterPlacement::Challenges} />
                </Animated>
            </div>
        </section>
    }
}

const CHALLENGES_CSS: &str = r#"
    .challenges {
        background: white;
    }
    .filter-tabs {
        display: flex;
        justify-content: center;
        margin-bottom: 2rem;
    }
    .filter-tabs [role="tablist"] {
        display: flex;
        flex-wrap: wrap;
        gap: 0.5rem;
    }
    .challenge-head {
        display: flex;
        justify-content: space-between;
        align-items: center;
        margin-bottom: 1rem;
    }
    .challenge-icon {
        width: 2.5rem;
        height: 2.5rem;
        border-radius: 9999px;
    }
    .challenge-body {
        font-size: 0.875rem;
    }
    .challenge-meta {
        list-style: none;
        padding: 0;
        font-size: 0.8rem;
        color: #1d4ed8;
    }
    .benefits {
        margin-top: 3rem;
        padding: 2rem;
        border-radius: 0.75rem;
        background: #eff6ff;
    }
    .benefit h4 {
        margin-bottom: 0.25rem;
    }
    .challenge-newsletter {
        margin-top: 3rem;
        padding: 2rem;
        border-radius: 0.75rem;
        background: linear-gradient(to right, #3b82f6, #2563eb);
        color: white;
        text-align: center;
    }
    .newsletter-form {
        display: flex;
        gap: 0.75rem;
        max-width: 32rem;
        margin: 0 auto;
    }
    .newsletter-form input {
        flex: 1;
        padding: 0.5rem 1rem;
        border: none;
        border-radius: 0.5rem;
    }
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::variant::Difficulty;

    #[test]
    fn all_filter_keeps_every_challenge() {
        assert_eq!(filter_challenges(ALL_FILTER).count(), UPCOMING_CHALLENGES.len());
    }

    #[test]
    fn difficulty_filter_keeps_only_matching_challenges() {
        let intermediate: Vec<_> = filter_challenges("intermediate").collect();
        assert_eq!(intermediate.len(), 2);
        assert!(intermediate
            .iter()
            .all(|c| c.difficulty == Difficulty::Intermediate));
        assert_eq!(filter_challenges("advanced").count(), 1);
    }

    #[test]
    fn unknown_filter_shows_nothing() {
        assert_eq!(filter_challenges("expert").count(), 0);
    }

    #[test]
    fn every_filter_key_is_a_difficulty_or_all() {
        for &(key, _) in FILTERS {
            let known = key == ALL_FILTER
                || [Difficulty::Beginner, Difficulty::Intermediate, Difficulty::Advanced]
                    .iter()
                    .any(|d| d.filter_key() == key);
            assert!(known, "{key}");
        }
    }
}
