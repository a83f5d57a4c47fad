use web_sys::{KeyboardEvent, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

use crate::components::animated::Animated;
use crate::motion::stagger::{use_prefers_reduced_motion, StaggerSchedule};
use crate::Route;

// Heading enters at 0; copy, stats, buttons and the video cue follow at
// 300, 500, 700 and 900 ms.
const HERO_ENTRANCE: StaggerSchedule = StaggerSchedule::new(100, 200);

const HERO_STATS: &[(&str, &str)] = &[
    ("5000+", "successful graduates"),
    ("200+", "career paths"),
    ("98%", "satisfaction rate"),
];

const BACKGROUND_URL: &str = "https://plus.unsplash.com/premium_photo-1661783512537-95fd8d054fa7?q=80&w=1487&auto=format&fit=crop";

fn scroll_to_next_section() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let top = window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

#[derive(Properties, PartialEq)]
struct VideoModalProps {
    on_close: Callback<()>,
}

#[function_component(VideoModal)]
fn video_modal(props: &VideoModalProps) -> Html {
    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="video-backdrop fade-in" onclick={close.clone()}>
            <div class="video-dialog" role="dialog" aria-modal="true" onclick={keep_open}>
                <div class="video-dialog-header">
                    <h3>{"How the platform helps you"}</h3>
                    <button class="video-close" aria-label="Close video" onclick={close}>{"✕"}</button>
                </div>
                <div class="video-placeholder">
                    <p>{"Platform walkthrough video"}</p>
                </div>
            </div>
        </div>
    }
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let loaded = use_state_eq(|| false);
    let video_open = use_state_eq(|| false);
    let reduced_motion = use_prefers_reduced_motion();

    {
        let loaded = loaded.clone();
        use_effect_with_deps(
            move |_| {
                loaded.set(true);
                || ()
            },
            (),
        );
    }

    {
        let video_open = video_open.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if e.key() == "Escape" && *video_open {
                video_open.set(false);
            }
        });
    }

    let open_video = {
        let video_open = video_open.clone();
        Callback::from(move |_: MouseEvent| video_open.set(true))
    };
    let close_video = {
        let video_open = video_open.clone();
        Callback::from(move |_: ()| video_open.set(false))
    };

    let shown = *loaded || reduced_motion;
    let delay = |index: usize| if reduced_motion { 0 } else { HERO_ENTRANCE.delay(index) };

    html! {
        <section class="hero">
            <style>{ HERO_CSS }</style>
            <img src={BACKGROUND_URL} alt="Young people working in different fields"
                class={classes!("hero-background", shown.then(|| "loaded"))} loading="lazy" />
            <div class="hero-overlay"></div>

            <div class="hero-content">
                <Animated visible={shown}>
                    <h1>
                        <span>{"Discover your future career,"}</span>
                        <span class="hero-highlight">{"choose your path with passion and purpose!"}</span>
                    </h1>
                </Animated>
                <Animated visible={shown} delay_ms={delay(1)}>
                    <p class="hero-lead">
                        {"Smart guidance that helps you find the skills that set you apart and the opportunities that suit you."}
                    </p>
                </Animated>
                <Animated visible={shown} delay_ms={delay(2)} class={classes!("hero-stats")}>
                    { for HERO_STATS.iter().map(|(value, label)| html! {
                        <div class="hero-stat">
                            <div class="hero-stat-value">{ *value }</div>
                            <div class="hero-stat-label">{ *label }</div>
                        </div>
                    }) }
                </Animated>
                <Animated visible={shown} delay_ms={delay(3)} class={classes!("hero-actions")}>
                    <Link<Route> to={Route::Counselor} classes="button">{"Start now →"}</Link<Route>>
                    <a href="#how-it-works" class="button ghost">{"Learn more"}</a>
                </Animated>
            </div>

            <Animated visible={shown} delay_ms={delay(4)} class={classes!("hero-video-cue")}>
                <button class="button" onclick={open_video}>{"▶ See how the platform helps"}</button>
            </Animated>

            <button class="scroll-cue" aria-label="Scroll to next section"
                onclick={Callback::from(|_: MouseEvent| scroll_to_next_section())}>
                {"⌄"}
            </button>

            if *video_open {
                <VideoModal on_close={close_video} />
            }
        </section>
    }
}

const HERO_CSS: &str = r#"
    .hero {
        position: relative;
        height: 100vh;
        width: 100%;
        overflow: hidden;
        color: white;
    }
    .hero-background {
        position: absolute;
        inset: 0;
        width: 100%;
        height: 100%;
        object-fit: cover;
        opacity: 0;
        transition: opacity 1s ease;
    }
    .hero-background.loaded {
        opacity: 1;
    }
    .hero-overlay {
        position: absolute;
        inset: 0;
        background: linear-gradient(to right, rgba(30, 58, 138, 0.8), rgba(0, 0, 0, 0.6));
    }
    .hero-content {
        position: relative;
        z-index: 10;
        max-width: 56rem;
        height: 100%;
        margin: 0 auto;
        padding: 0 1rem;
        display: flex;
        flex-direction: column;
        justify-content: center;
    }
    .hero h1 {
        font-size: clamp(2rem, 5vw, 3.75rem);
        margin: 0 0 1.5rem;
    }
    .hero h1 span {
        display: block;
    }
    .hero-highlight {
        color: #93c5fd;
    }
    .hero-lead {
        font-size: 1.25rem;
        color: #e5e7eb;
        line-height: 1.6;
    }
    .hero-stats {
        display: flex;
        justify-content: space-between;
        margin: 2rem 0;
        text-align: center;
    }
    .hero-stat-value {
        color: #93c5fd;
        font-size: 2rem;
        font-weight: 700;
    }
    .hero-stat-label {
        color: #d1d5db;
        font-size: 0.875rem;
    }
    .hero-actions {
        display: flex;
        flex-wrap: wrap;
        gap: 1rem;
    }
    .hero-video-cue {
        position: absolute;
        bottom: 4rem;
        right: 3rem;
        z-index: 10;
    }
    .scroll-cue {
        position: absolute;
        bottom: 1.5rem;
        left: 50%;
        transform: translateX(-50%);
        background: none;
        border: none;
        color: rgba(255, 255, 255, 0.8);
        font-size: 2rem;
        cursor: pointer;
        z-index: 10;
    }
    .video-backdrop {
        position: fixed;
        inset: 0;
        z-index: 70;
        display: flex;
        align-items: center;
        justify-content: center;
        background: rgba(0, 0, 0, 0.75);
        backdrop-filter: blur(4px);
    }
    .video-dialog {
        background: white;
        color: #111827;
        border-radius: 0.5rem;
        overflow: hidden;
        max-width: 48rem;
        width: 100%;
        margin: 0 1rem;
    }
    .video-dialog-header {
        display: flex;
        justify-content: space-between;
        align-items: center;
        padding: 1rem;
        background: #f3f4f6;
    }
    .video-close {
        background: none;
        border: none;
        font-size: 1.25rem;
        cursor: pointer;
    }
    .video-placeholder {
        margin: 1rem;
        height: 16rem;
        display: flex;
        align-items: center;
        justify-content: center;
        background: #e5e7eb;
        color: #6b7280;
    }
"#;
