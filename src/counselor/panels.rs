use gloo_timers::callback::Timeout;
use log::debug;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::variant::{Accent, Badge};
use crate::config;
use crate::counselor::chat::canned_reply;
use crate::data::{
    Career, Course, ScoredItem, DEVELOPMENT_AREAS, EVENTS, FUTURE_SKILLS, JOBS, LEARNING_PATH,
    MARKET_SKILLS, NOTIFICATIONS, OVERALL_PROGRESS, PROFILE, STRENGTHS, VIDEOS, WEEKLY_ACTIVITIES,
};
use crate::motion::selection::{use_exclusive_selection, SelectionHandle};

fn progress_bar(percent: u32, accent: Accent) -> Html {
    html! {
        <div class="progress">
            <div class={accent.fill_class()} style={format!("width: {}%;", percent.min(100))}></div>
        </div>
    }
}

/// Five-star strip with `rating` rounded to the nearest whole star.
fn star_rating(rating: f32) -> Html {
    let filled = rating.round().clamp(0.0, 5.0) as u8;
    html! {
        <span class="stars" aria-label={format!("rated {:.1}", rating)}>
            { for (0..5u8).map(|i| html! {
                <span class={if i < filled { "star filled" } else { "star" }}>{"★"}</span>
            }) }
            <span class="rating-value">{ format!("{:.1}", rating) }</span>
        </span>
    }
}

/// Hover highlight shared by list rows: entering a row selects it,
/// leaving clears every row.
fn hover_handlers<K: PartialEq + Clone + 'static>(
    rows: &SelectionHandle<K>,
    key: K,
) -> (Callback<MouseEvent>, Callback<MouseEvent>) {
    let enter = {
        let rows = rows.clone();
        Callback::from(move |_: MouseEvent| {
            if !rows.is_active(&key) {
                rows.select(key.clone());
            }
        })
    };
    (enter, rows.close_callback())
}

fn course_row(course: &Course) -> Html {
    html! {
        <li class="course">
            <a href={course.url}>{ course.name }</a>
            <span class="course-meta">{ format!("{} · {}", course.provider, course.duration) }</span>
            { star_rating(course.rating) }
        </li>
    }
}

/// Avatar text: first letter of the first two words, upper-cased.
fn initials(name: &str) -> String {
    name.split_whitespace()
        .take(2)
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

#[function_component(ProfileSummary)]
pub fn profile_summary() -> Html {
    html! {
        <div class="card panel">
            <div class="panel-head">
                <h3>{"Profile summary"}</h3>
                <a class="text-link" href="#">{"Edit profile ↗"}</a>
            </div>
            <div class="profile">
                <div class="profile-identity">
                    <span class="avatar">{ initials(PROFILE.name) }</span>
                    <div>
                        <h4>{ PROFILE.name }</h4>
                        <p class="row-meta">{ PROFILE.headline }</p>
                        <div class="skill-tags">
                            { for PROFILE.traits.iter().map(|&(text, accent)| html! {
                                <Badge {text} {accent} />
                            }) }
                        </div>
                    </div>
                </div>
                <div class="profile-tiles">
                    { for PROFILE.tiles.iter().map(|tile| html! {
                        <div class={classes!("profile-tile", tile.accent.surface_class())}>
                            <h5>{ tile.title }</h5>
                            <p>{ tile.items.join(", ") }</p>
                        </div>
                    }) }
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct CareerCardProps {
    pub career: &'static Career,
    pub expanded: bool,
    pub on_toggle: Callback<MouseEvent>,
}

#[function_component(CareerCard)]
pub fn career_card(props: &CareerCardProps) -> Html {
    let career = props.career;
    html! {
        <div class={classes!("card", "career", props.expanded.then(|| "expanded"))}>
            <button class="career-summary" aria-expanded={props.expanded.to_string()}
                onclick={props.on_toggle.clone()}>
                <div>
                    <h4>{ career.title }</h4>
                    <p>{ career.description }</p>
                </div>
                <div class="career-match">
                    <Badge text={format!("{}% match", career.match_pct)} />
                    <span class={classes!("chevron", props.expanded.then(|| "rotated"))}>{"▾"}</span>
                </div>
            </button>
            { progress_bar(career.match_pct, Accent::Emerald) }
            if props.expanded {
                <div class="career-details fade-in">
                    <p class="career-salary">
                        { format!("{} - {} {} a year · {}% growth", career.salary_min, career.salary_max, career.currency, career.growth) }
                    </p>
                    <h5>{"Key skills"}</h5>
                    <div class="skill-tags">
                        { for career.skills.iter().map(|skill| html! {
                            <Badge text={*skill} accent={Accent::Gray} />
                        }) }
                    </div>
                    <h5>{"Recommended courses"}</h5>
                    <ul class="courses">{ for career.courses.iter().map(course_row) }</ul>
                </div>
            }
        </div>
    }
}

#[function_component(JobPostings)]
pub fn job_postings() -> Html {
    let hovered = use_exclusive_selection::<u32>();

    html! {
        <div class="card panel">
            <h3>{"Jobs that match you"}</h3>
            { for JOBS.iter().map(|job| {
                let (onmouseenter, onmouseleave) = hover_handlers(&hovered, job.id);
                html! {
                    <div class={classes!("row", hovered.is_active(&job.id).then(|| "hovered"))}
                        {onmouseenter} {onmouseleave}>
                        <span class="logo">{ job.logo }</span>
                        <div class="row-main">
                            <h4>{ job.title }</h4>
                            <p>{ format!("{} · {}", job.company, job.location) }</p>
                            <p class="row-meta">{ format!("{} · {}", job.kind, job.salary) }</p>
                        </div>
                        <span class="row-time">{ job.posted }</span>
                    </div>
                }
            }) }
        </div>
    }
}

#[function_component(MarketAnalysis)]
pub fn market_analysis() -> Html {
    let selected = use_exclusive_selection::<&'static str>();
    let spinning = use_state_eq(|| false);
    let spin_timer = use_mut_ref(|| None::<Timeout>);

    let refresh = {
        let spinning = spinning.clone();
        let spin_timer = spin_timer.clone();
        Callback::from(move |_: MouseEvent| {
            debug!("refreshing market analysis");
            spinning.set(true);
            let spinning = spinning.clone();
            // Replacing an older timer cancels it.
            *spin_timer.borrow_mut() = Some(Timeout::new(config::REFRESH_SPIN_MS, move || {
                spinning.set(false);
            }));
        })
    };

    html! {
        <div class="card panel">
            <div class="panel-head">
                <h3>{"Job market analysis"}</h3>
                <button class={classes!("icon-button", (*spinning).then(|| "spinning"))}
                    aria-label="Refresh market data" onclick={refresh}>{"⟳"}</button>
            </div>

            <h4>{"Most in-demand skills "}<Badge text="Live" /></h4>
            { for MARKET_SKILLS.iter().map(|skill| {
                let open = selected.is_active(&skill.name);
                html! {
                    <div class={classes!("market-skill", skill.accent.surface_class(), open.then(|| "selected"))}
                        onclick={selected.select_callback(skill.name)}>
                        <div class="market-skill-head">
                            <span>{ skill.name }</span>
                            <span>
                                <Badge text={format!("+{}% growth", skill.growth)} accent={skill.accent} />
                                <Badge text={skill.demand} accent={Accent::Gray} />
                            </span>
                        </div>
                        { progress_bar(skill.level, skill.accent) }
                        <span class="row-meta">{ format!("Demand level: {}%", skill.level) }</span>
                        if open {
                            <div class="market-skill-details fade-in">
                                <div><p>{"Average salary"}</p><p>{"15,000 - 25,000 SAR"}</p></div>
                                <div><p>{"Open positions"}</p><p>{"120+ jobs"}</p></div>
                            </div>
                        }
                    </div>
                }
            }) }
        </div>
    }
}

#[function_component(FutureSkills)]
pub fn future_skills() -> Html {
    html! {
        <div class="card panel">
            <h3>{"Emerging skills "}<Badge text="2024 outlook" accent={Accent::Indigo} /></h3>
            { for FUTURE_SKILLS.iter().map(|skill| html! {
                <div class="future-skill">
                    <h4>{ skill.name }</h4>
                    <p class="row-meta">{ format!("Within {} · {} impact", skill.timing, skill.impact) }</p>
                    { progress_bar(skill.readiness, Accent::Indigo) }
                    <p class="row-meta">{ format!("Market readiness: {}%", skill.readiness) }</p>
                    <div class="skill-tags">
                        { for skill.companies.iter().map(|company| html! {
                            <span class="company">{ *company }</span>
                        }) }
                    </div>
                </div>
            }) }
        </div>
    }
}

const ASSESSMENT_TABS: &[(&str, &str, Accent)] = &[
    ("strengths", "Strengths", Accent::Emerald),
    ("development", "Areas to develop", Accent::Blue),
    ("overview", "Overall", Accent::Indigo),
];

fn scored_list(items: &[ScoredItem], accent: Accent) -> Html {
    html! {
        <ul class="scored">
            { for items.iter().map(|item| html! {
                <li>
                    <span>{ format!("{} {}", item.icon, item.text) }</span>
                    { progress_bar(item.score, accent) }
                    <span class="row-meta">{ format!("{}%", item.score) }</span>
                </li>
            }) }
        </ul>
    }
}

#[function_component(Assessment)]
pub fn assessment() -> Html {
    let tabs = use_exclusive_selection::<&'static str>();
    let active = tabs.active_or("strengths");

    let body = match active {
        "development" => scored_list(DEVELOPMENT_AREAS, Accent::Blue),
        "overview" => html! {
            <div class="overview">
                <p>{"Overall readiness"}</p>
                { progress_bar(OVERALL_PROGRESS, Accent::Indigo) }
                <p class="row-meta">{ format!("{}% ready for your recommended path", OVERALL_PROGRESS) }</p>
            </div>
        },
        _ => scored_list(STRENGTHS, Accent::Emerald),
    };

    html! {
        <div class="card panel">
            <h3>{"Personal assessment results"}</h3>
            <div class="tab-strip">
                { for ASSESSMENT_TABS.iter().map(|&(key, label, accent)| html! {
                    <button class={accent.tab_class(active == key)}
                        aria-pressed={(active == key).to_string()}
                        onclick={tabs.select_callback(key)}>
                        { label }
                    </button>
                }) }
            </div>
            <div class="fade-in">{ body }</div>
        </div>
    }
}

#[function_component(Events)]
pub fn events() -> Html {
    let hovered = use_exclusive_selection::<u32>();

    html! {
        <div class="card panel">
            <h3>{"Upcoming events"}</h3>
            { for EVENTS.iter().map(|event| {
                let (onmouseenter, onmouseleave) = hover_handlers(&hovered, event.id);
                html! {
                    <div class={classes!("row", hovered.is_active(&event.id).then(|| "hovered"))}
                        {onmouseenter} {onmouseleave}>
                        <div class="date">
                            <span class="day">{ event.day }</span>
                            <span class="month">{ event.month }</span>
                        </div>
                        <div class="row-main">
                            <h4>{ event.title }</h4>
                            <p class="row-meta">{ event.time }</p>
                        </div>
                        <Badge text={if event.online { "Online" } else { "In person" }}
                            accent={if event.online { Accent::Blue } else { Accent::Amber }} />
                        <span class="row-time">{ format!("{} spots left", event.spots) }</span>
                    </div>
                }
            }) }
        </div>
    }
}

#[function_component(Notifications)]
pub fn notifications() -> Html {
    let visible = use_state(|| NOTIFICATIONS.iter().map(|n| n.id).collect::<Vec<u32>>());

    let dismiss = |id: u32| {
        let visible = visible.clone();
        Callback::from(move |_: MouseEvent| {
            visible.set(visible.iter().copied().filter(|&v| v != id).collect());
        })
    };

    html! {
        <div class="card panel">
            <div class="panel-head">
                <h3>{"Notifications"}</h3>
                <Badge text={visible.len().to_string()} accent={Accent::Red} />
            </div>
            if visible.is_empty() {
                <p class="row-meta">{"You are all caught up."}</p>
            }
            { for NOTIFICATIONS.iter().filter(|n| visible.contains(&n.id)).map(|n| html! {
                <div class="row fade-in">
                    <span>{ n.icon }</span>
                    <div class="row-main">
                        <h4>{ n.title }</h4>
                        <p class="row-meta">{ n.time }</p>
                    </div>
                    <button class="icon-button" aria-label="Dismiss" onclick={dismiss(n.id)}>{"✕"}</button>
                </div>
            }) }
        </div>
    }
}

#[function_component(TimeInvestment)]
pub fn time_investment() -> Html {
    let hovered = use_exclusive_selection::<&'static str>();
    let total: u32 = WEEKLY_ACTIVITIES.iter().map(|a| a.hours).sum();

    html! {
        <div class="card panel">
            <h3>{"Weekly time plan"}</h3>
            { for WEEKLY_ACTIVITIES.iter().map(|activity| {
                let (onmouseenter, onmouseleave) = hover_handlers(&hovered, activity.name);
                html! {
                    <div class={classes!("activity", hovered.is_active(&activity.name).then(|| "hovered"))}
                        {onmouseenter} {onmouseleave}>
                        <div class="activity-head">
                            <span>{ format!("{} {}", activity.icon, activity.name) }</span>
                            <span class="row-meta">{ format!("{} h", activity.hours) }</span>
                        </div>
                        { progress_bar(activity.percentage, activity.accent) }
                    </div>
                }
            }) }
            <p class="row-meta">{ format!("{} hours a week in total", total) }</p>
        </div>
    }
}

#[function_component(LearningPath)]
pub fn learning_path() -> Html {
    let done = LEARNING_PATH.iter().filter(|s| s.completed).count();

    html! {
        <div class="card panel">
            <div class="panel-head">
                <h3>{"Your learning path"}</h3>
                <span class="row-meta">{ format!("{} of {} steps done", done, LEARNING_PATH.len()) }</span>
            </div>
            <ol class="learning-path">
                { for LEARNING_PATH.iter().map(|step| html! {
                    <li class={classes!("learning-step", step.completed.then(|| "completed"))}>
                        <span class="marker">{ if step.completed { "✓".to_string() } else { step.id.to_string() } }</span>
                        <div class="row-main">
                            <h4>{ step.title }</h4>
                            <p class="row-meta">{ step.duration }</p>
                        </div>
                    </li>
                }) }
            </ol>
        </div>
    }
}

#[function_component(VideoRecommendations)]
pub fn video_recommendations() -> Html {
    html! {
        <div class="card panel">
            <h3>{"Suggested videos"}</h3>
            <div class="videos">
                { for VIDEOS.iter().map(|video| html! {
                    <div class="video">
                        <div class={classes!("video-thumb", video.accent.fill_class())}>
                            <span class="video-play" aria-hidden="true">{"▶"}</span>
                        </div>
                        <h4>{ video.title }</h4>
                        <p class="row-meta">{ format!("{} · {} min", video.channel, video.duration) }</p>
                    </div>
                }) }
            </div>
            <button class="text-link">{"More videos"}</button>
        </div>
    }
}

#[function_component(ChatPanel)]
pub fn chat_panel() -> Html {
    let question = use_state(String::new);
    let reply = use_state(|| None::<&'static str>);

    let oninput = {
        let question = question.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            question.set(input.value());
        })
    };

    let onsubmit = {
        let question = question.clone();
        let reply = reply.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if let Some(answer) = canned_reply(&question) {
                reply.set(Some(answer));
                question.set(String::new());
            }
        })
    };

    html! {
        <div class="card panel chat">
            <h3>{"Virtual career advisor"}</h3>
            { reply.map(|answer| html! {
                <div class="chat-reply fade-in"><p>{ answer }</p></div>
            }).unwrap_or_default() }
            <form class="chat-form" {onsubmit}>
                <input type="text" placeholder="Ask about your recommendations..."
                    value={(*question).clone()} {oninput} />
                <button type="submit" class="button">{"Ask"}</button>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_take_the_first_two_words() {
        assert_eq!(initials("Ayoub Mohammed"), "AM");
        assert_eq!(initials("  sara  al amri "), "SA");
        assert_eq!(initials("Lina"), "L");
        assert_eq!(initials(""), "");
    }
}
