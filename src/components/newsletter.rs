use log::debug;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::feedback::FormFeedback;
use crate::forms::submit::{use_submit_form, SubmitConfig};

/// Where the signup box sits. Each placement has its own copy and timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewsletterPlacement {
    Challenges,
    Footer,
}

impl NewsletterPlacement {
    fn config(self) -> SubmitConfig {
        match self {
            NewsletterPlacement::Challenges => SubmitConfig::challenge_newsletter(),
            NewsletterPlacement::Footer => SubmitConfig::footer_newsletter(),
        }
    }

    fn button_label(self) -> &'static str {
        match self {
            NewsletterPlacement::Challenges => "Subscribe",
            NewsletterPlacement::Footer => "Join",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct NewsletterFormProps {
    pub placement: NewsletterPlacement,
}

#[function_component(NewsletterForm)]
pub fn newsletter_form(props: &NewsletterFormProps) -> Html {
    let placement = props.placement;
    let form = use_submit_form(placement.config());
    let email = use_state(String::new);

    let oninput = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let onsubmit = {
        let form = form.clone();
        let email = email.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let clear = email.clone();
            if let Err(err) = form.submit(&email, move || clear.set(String::new())) {
                debug!("newsletter submit ignored: {}", err);
            }
        })
    };

    let submitting = form.is_submitting();

    html! {
        <div class="newsletter">
            // The simulated service decides what counts as an address.
            <form class="newsletter-form" novalidate=true {onsubmit}>
                <input
                    type="email"
                    placeholder="Your email address"
                    value={(*email).clone()}
                    {oninput}
                    disabled={submitting}
                    required=true
                />
                <button type="submit" class="button" disabled={submitting}>
                    if submitting {
                        <span class="spinner" aria-hidden="true"></span>
                        {"Sending..."}
                    } else {
                        { placement.button_label() }
                    }
                </button>
            </form>
            <FormFeedback outcome={form.outcome().cloned()} />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_placements_turn_away_a_non_address() {
        for placement in [NewsletterPlacement::Challenges, NewsletterPlacement::Footer] {
            let config = placement.config();
            assert!((config.rejects)("not an email"));
            assert!(!(config.rejects)("reader@example.com"));
        }
    }

    #[test]
    fn only_the_footer_auto_clears() {
        assert_eq!(NewsletterPlacement::Challenges.config().clear_success_after_ms, None);
        assert!(NewsletterPlacement::Footer.config().clear_success_after_ms.is_some());
    }
}
