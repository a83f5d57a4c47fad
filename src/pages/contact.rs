use log::debug;
use web_sys::HtmlTextAreaElement;
use yew::prelude::*;

use crate::components::animated::Animated;
use crate::components::feedback::FormFeedback;
use crate::data::{Expert, EXPERTS};
use crate::forms::submit::{use_submit_form, SubmitConfig};
use crate::motion::reveal::RevealOptions;
use crate::motion::stagger::StaggerSchedule;
use crate::motion::viewport::use_reveal;

const EXPERT_SCHEDULE: StaggerSchedule = StaggerSchedule::new(300, 100);

fn expert_card(expert: &Expert, visible: bool, delay_ms: u32) -> Html {
    html! {
        <Animated {visible} {delay_ms} class={classes!("card", "expert-card")}>
            <img src={expert.image_url} alt={expert.name} loading="lazy" />
            <div>
                <h4>{ expert.name }</h4>
                <p class="expert-title">{ expert.title }</p>
                <p class="expert-field">{ expert.specialization }</p>
                <p class="expert-status">
                    <span class="dot"></span>{ expert.availability }
                    <span class="expert-response">{ expert.response_time }</span>
                </p>
            </div>
        </Animated>
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let section_ref = use_node_ref();
    let visible = use_reveal(section_ref.clone(), RevealOptions::default());
    let form = use_submit_form(SubmitConfig::inquiry());
    let inquiry = use_state(String::new);

    let oninput = {
        let inquiry = inquiry.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            inquiry.set(area.value());
        })
    };

    let onsubmit = {
        let form = form.clone();
        let inquiry = inquiry.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let clear = inquiry.clone();
            if let Err(err) = form.submit(&inquiry, move || clear.set(String::new())) {
                debug!("inquiry submit ignored: {}", err);
            }
        })
    };

    let submitting = form.is_submitting();

    html! {
        <section id="contact-experts" class="section contact" ref={section_ref}
            aria-labelledby="contact-heading">
            <style>{ CONTACT_CSS }</style>
            <div class="container">
                <Animated {visible} class={classes!("section-header")}>
                    <span class="eyebrow">{"Expert advice"}</span>
                    <h2 id="contact-heading">{"Talk to a career expert"}</h2>
                    <p>{"Ask anything about your career path and a specialist will get back to you."}</p>
                </Animated>

                <div class="contact-grid">
                    <Animated {visible} delay_ms={100} class={classes!("card", "inquiry")}>
                        <h3>{"Send your question"}</h3>
                        <form {onsubmit}>
                            <label for="inquiry">{"Write your question here:"}</label>
                            <textarea
                                id="inquiry"
                                value={(*inquiry).clone()}
                                {oninput}
                                placeholder="What career advice do you need?"
                                required=true
                                disabled={submitting}
                            />
                            <div class="inquiry-footer">
                                <p>{"You will get a reply within 24 hours"}</p>
                                <button type="submit" class="button" disabled={submitting}>
                                    { if submitting { "Sending..." } else { "Send" } }
                                </button>
                            </div>
                            <FormFeedback outcome={form.outcome().cloned()} />
                        </form>
                    </Animated>

                    <Animated {visible} delay_ms={200} class={classes!("experts")}>
                        <h3>{"Experts available now"}</h3>
                        { for EXPERTS.iter().enumerate().map(|(index, expert)| {
                            expert_card(expert, visible, EXPERT_SCHEDULE.delay(index))
                        }) }
                    </Animated>
                </div>
            </div>
        </section>
    }
}

const CONTACT_CSS: &str = r#"
    .contact {
        background: #eff6ff;
    }
    .contact-grid {
        display: grid;
        grid-template-columns: 2fr 1fr;
        gap: 1.5rem;
        max-width: 64rem;
        margin: 0 auto;
    }
    @media (max-width: 1024px) {
        .contact-grid {
            grid-template-columns: 1fr;
        }
    }
    .inquiry label {
        display: block;
        font-weight: 500;
        margin-bottom: 0.5rem;
    }
    .inquiry textarea {
        width: 100%;
        min-height: 8rem;
        padding: 0.75rem;
        border: 1px solid #bfdbfe;
        border-radius: 0.5rem;
        resize: none;
    }
    .inquiry-footer {
        display: flex;
        justify-content: space-between;
        align-items: center;
        font-size: 0.875rem;
        color: #2563eb;
    }
    .experts {
        display: flex;
        flex-direction: column;
        gap: 0.75rem;
    }
    .expert-card {
        display: flex;
        gap: 1rem;
        padding: 1rem;
    }
    .expert-card img {
        width: 4rem;
        height: 4rem;
        border-radius: 9999px;
        object-fit: cover;
    }
    .expert-card h4, .expert-card p {
        margin: 0;
    }
    .expert-title {
        font-size: 0.875rem;
        color: #2563eb;
    }
    .expert-field {
        font-size: 0.8rem;
        color: #6b7280;
    }
    .expert-status {
        font-size: 0.75rem;
        color: #15803d;
    }
    .expert-status .dot {
        display: inline-block;
        width: 0.5rem;
        height: 0.5rem;
        margin-right: 0.25rem;
        border-radius: 9999px;
        background: #22c55e;
    }
    .expert-response {
        margin-left: 0.5rem;
        color: #6b7280;
    }
"#;
