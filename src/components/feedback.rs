use yew::prelude::*;

use crate::forms::submit::{OutcomeKind, SubmitOutcome};

#[derive(Properties, PartialEq)]
pub struct FormFeedbackProps {
    pub outcome: Option<SubmitOutcome>,
}

/// Inline result line under a form. Failure is styled apart from success;
/// nothing else about the page changes.
#[function_component(FormFeedback)]
pub fn form_feedback(props: &FormFeedbackProps) -> Html {
    let Some(outcome) = &props.outcome else {
        return html! {};
    };
    let class = match outcome.kind {
        OutcomeKind::Success => "form-feedback success fade-in",
        OutcomeKind::Failure => "form-feedback failure fade-in",
    };
    html! {
        <div {class} role="status">{ outcome.message }</div>
    }
}
