use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

/// `base_ms + index * step_ms`, saturating instead of wrapping.
pub fn reveal_delay(index: usize, base_ms: u32, step_ms: u32) -> u32 {
    let index = u32::try_from(index).unwrap_or(u32::MAX);
    base_ms.saturating_add(index.saturating_mul(step_ms))
}

/// Linear entrance schedule for the children of a revealed section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaggerSchedule {
    pub base_ms: u32,
    pub step_ms: u32,
}

impl StaggerSchedule {
    pub const fn new(base_ms: u32, step_ms: u32) -> Self {
        Self { base_ms, step_ms }
    }

    pub fn delay(&self, index: usize) -> u32 {
        reveal_delay(index, self.base_ms, self.step_ms)
    }
}

pub fn transition_delay(ms: u32) -> String {
    format!("transition-delay: {}ms;", ms)
}

pub fn reveal_class(visible: bool) -> &'static str {
    if visible {
        "reveal revealed"
    } else {
        "reveal"
    }
}

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// Tracks the user's reduced-motion preference. Sections that see `true`
/// render in their final state without transitions.
#[hook]
pub fn use_prefers_reduced_motion() -> bool {
    let reduced = use_state_eq(|| false);

    {
        let reduced = reduced.clone();
        use_effect_with_deps(
            move |_| {
                let query = web_sys::window()
                    .and_then(|w| w.match_media(REDUCED_MOTION_QUERY).ok().flatten());

                let listener = query.map(|query| {
                    reduced.set(query.matches());
                    let on_change = {
                        let query = query.clone();
                        Closure::<dyn Fn()>::new(move || reduced.set(query.matches()))
                    };
                    if query
                        .add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())
                        .is_err()
                    {
                        log::warn!("could not watch {}", REDUCED_MOTION_QUERY);
                    }
                    (query, on_change)
                });

                move || {
                    if let Some((query, on_change)) = listener {
                        let _ = query.remove_event_listener_with_callback(
                            "change",
                            on_change.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    *reduced
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn five_items_stagger_by_step() {
        let schedule = StaggerSchedule::new(200, 150);
        let delays: Vec<u32> = (0..5).map(|i| schedule.delay(i)).collect();
        assert_eq!(delays, vec![200, 350, 500, 650, 800]);
    }

    #[test]
    fn style_carries_the_delay() {
        let schedule = StaggerSchedule::new(300, 150);
        assert_eq!(transition_delay(schedule.delay(2)), "transition-delay: 600ms;");
    }

    #[test]
    fn huge_indices_saturate() {
        assert_eq!(reveal_delay(usize::MAX, 10, 10), u32::MAX);
    }

    #[test]
    fn class_follows_latch() {
        assert_eq!(reveal_class(false), "reveal");
        assert_eq!(reveal_class(true), "reveal revealed");
    }

    proptest! {
        #[test]
        fn delay_is_linear(base in 0u32..10_000, step in 0u32..1_000, i in 0usize..1_000) {
            prop_assert_eq!(reveal_delay(0, base, step), base);
            prop_assert_eq!(reveal_delay(i + 1, base, step) - reveal_delay(i, base, step), step);
        }
    }
}
