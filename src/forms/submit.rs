use std::cell::{Cell, RefCell};
use std::future::Future;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use log::debug;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config;
use crate::error::SubmitError;

pub trait Timer {
    type Delay: Future<Output = ()> + 'static;

    fn delay(&self, ms: u32) -> Self::Delay;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTimer;

impl Timer for GlooTimer {
    type Delay = TimeoutFuture;

    fn delay(&self, ms: u32) -> TimeoutFuture {
        TimeoutFuture::new(ms)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeKind {
    Success,
    Failure,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub kind: OutcomeKind,
    pub message: &'static str,
}

impl SubmitOutcome {
    pub fn is_success(&self) -> bool {
        self.kind == OutcomeKind::Success
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    Pending,
    Done(SubmitOutcome),
}

pub fn never_rejects(_payload: &str) -> bool {
    false
}

/// The simulated mail service turns away anything that is not an address.
pub fn rejects_malformed_email(payload: &str) -> bool {
    !payload.contains('@')
}

#[derive(Clone, Copy)]
pub struct SubmitConfig {
    pub latency_ms: u32,
    pub success_message: &'static str,
    pub failure_message: &'static str,
    /// Hide a success message after this long. Failures, and every result
    /// when this is `None`, stay until the next submission.
    pub clear_success_after_ms: Option<u32>,
    pub rejects: fn(&str) -> bool,
}

const FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

impl SubmitConfig {
    pub fn inquiry() -> Self {
        Self {
            latency_ms: config::submit_latency_ms(),
            success_message: "Your question is on its way! An expert will get back to you soon.",
            failure_message: FAILURE_MESSAGE,
            clear_success_after_ms: None,
            rejects: never_rejects,
        }
    }

    pub fn challenge_newsletter() -> Self {
        Self {
            latency_ms: config::submit_latency_ms(),
            success_message: "You're subscribed!",
            failure_message: FAILURE_MESSAGE,
            clear_success_after_ms: None,
            rejects: rejects_malformed_email,
        }
    }

    pub fn footer_newsletter() -> Self {
        Self {
            latency_ms: config::submit_latency_ms(),
            success_message: "We've got your email, thanks!",
            failure_message: FAILURE_MESSAGE,
            clear_success_after_ms: Some(config::FEEDBACK_CLEAR_MS),
            rejects: rejects_malformed_email,
        }
    }

    /// How long `outcome` stays on screen before the form resets itself.
    pub fn clear_delay(&self, outcome: &SubmitOutcome) -> Option<u32> {
        self.clear_success_after_ms.filter(|_| outcome.is_success())
    }
}

/// Fake "send to the server" flow: `Idle -> Pending -> Done -> Idle`.
pub struct SubmitForm<T: Timer> {
    timer: T,
    config: SubmitConfig,
    state: Rc<RefCell<SubmitState>>,
    attempt: Cell<u32>,
}

impl<T: Timer> SubmitForm<T> {
    pub fn new(timer: T, config: SubmitConfig) -> Self {
        Self {
            timer,
            config,
            state: Rc::new(RefCell::new(SubmitState::Idle)),
            attempt: Cell::new(0),
        }
    }

    pub fn config(&self) -> &SubmitConfig {
        &self.config
    }

    pub fn state(&self) -> SubmitState {
        self.state.borrow().clone()
    }

    pub fn is_submitting(&self) -> bool {
        matches!(*self.state.borrow(), SubmitState::Pending)
    }

    pub fn attempt(&self) -> u32 {
        self.attempt.get()
    }

    /// Validates synchronously, enters `Pending`, and hands back the
    /// latency future. The future always resolves; there is no abort.
    pub fn submit(
        &self,
        payload: &str,
    ) -> Result<impl Future<Output = SubmitOutcome> + 'static, SubmitError> {
        let payload = payload.trim();
        if payload.is_empty() {
            return Err(SubmitError::EmptyInput);
        }
        if self.is_submitting() {
            return Err(SubmitError::AlreadySubmitting);
        }

        *self.state.borrow_mut() = SubmitState::Pending;
        self.attempt.set(self.attempt.get().wrapping_add(1));
        debug!("submit #{} pending", self.attempt.get());

        let outcome = if (self.config.rejects)(payload) {
            SubmitOutcome {
                kind: OutcomeKind::Failure,
                message: self.config.failure_message,
            }
        } else {
            SubmitOutcome {
                kind: OutcomeKind::Success,
                message: self.config.success_message,
            }
        };
        let delay = self.timer.delay(self.config.latency_ms);
        let state = self.state.clone();

        Ok(async move {
            delay.await;
            debug!("submit resolved: {:?}", outcome.kind);
            *state.borrow_mut() = SubmitState::Done(outcome.clone());
            outcome
        })
    }

    /// Back to `Idle`, but only if `attempt` is still the latest one and it
    /// has finished.
    pub fn clear_attempt(&self, attempt: u32) -> bool {
        let mut state = self.state.borrow_mut();
        if attempt != self.attempt.get() || !matches!(*state, SubmitState::Done(_)) {
            return false;
        }
        *state = SubmitState::Idle;
        true
    }
}

#[derive(Clone)]
pub struct SubmitHandle {
    form: Rc<SubmitForm<GlooTimer>>,
    state: UseStateHandle<SubmitState>,
}

impl SubmitHandle {
    pub fn is_submitting(&self) -> bool {
        matches!(*self.state, SubmitState::Pending)
    }

    pub fn outcome(&self) -> Option<&SubmitOutcome> {
        match &*self.state {
            SubmitState::Done(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// `on_success` runs once the simulated backend accepts, e.g. to empty
    /// the input field.
    pub fn submit(&self, payload: &str, on_success: impl FnOnce() + 'static) -> Result<(), SubmitError> {
        let pending = self.form.submit(payload)?;
        self.state.set(SubmitState::Pending);

        let form = self.form.clone();
        let state = self.state.clone();
        let attempt = form.attempt();
        spawn_local(async move {
            let outcome = pending.await;
            if outcome.is_success() {
                on_success();
            }
            let clear_delay = form.config().clear_delay(&outcome);
            state.set(form.state());

            if let Some(ms) = clear_delay {
                TimeoutFuture::new(ms).await;
                if form.clear_attempt(attempt) {
                    state.set(SubmitState::Idle);
                }
            }
        });
        Ok(())
    }
}

#[hook]
pub fn use_submit_form(config: SubmitConfig) -> SubmitHandle {
    let form = use_memo(move |_| SubmitForm::new(GlooTimer, config), ());
    let state = use_state_eq(SubmitState::default);
    SubmitHandle { form, state }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use proptest::prelude::*;

    #[derive(Clone, Default)]
    struct InstantTimer {
        requested: Rc<RefCell<Vec<u32>>>,
    }

    impl Timer for InstantTimer {
        type Delay = std::future::Ready<()>;

        fn delay(&self, ms: u32) -> Self::Delay {
            self.requested.borrow_mut().push(ms);
            std::future::ready(())
        }
    }

    fn new_form(config: SubmitConfig) -> (SubmitForm<InstantTimer>, InstantTimer) {
        let timer = InstantTimer::default();
        (SubmitForm::new(timer.clone(), config), timer)
    }

    #[test]
    fn blank_input_never_goes_pending() {
        let (form, timer) = new_form(SubmitConfig::inquiry());
        assert_eq!(form.submit("").err(), Some(SubmitError::EmptyInput));
        assert_eq!(form.submit("   \n\t").err(), Some(SubmitError::EmptyInput));
        assert!(!form.is_submitting());
        assert_eq!(form.state(), SubmitState::Idle);
        assert!(timer.requested.borrow().is_empty());
    }

    #[test]
    fn success_path_goes_pending_then_done() {
        let (form, timer) = new_form(SubmitConfig::inquiry());
        let pending = form.submit("hello").expect("valid payload");
        assert!(form.is_submitting());
        assert_eq!(form.state(), SubmitState::Pending);

        let outcome = block_on(pending);
        assert!(outcome.is_success());
        assert!(!outcome.message.is_empty());
        assert!(!form.is_submitting());
        assert_eq!(form.state(), SubmitState::Done(outcome));
        assert_eq!(*timer.requested.borrow(), vec![config::submit_latency_ms()]);
    }

    #[test]
    fn second_submit_while_pending_is_refused() {
        let (form, _) = new_form(SubmitConfig::inquiry());
        let first = form.submit("first").expect("valid payload");
        assert_eq!(form.submit("second").err(), Some(SubmitError::AlreadySubmitting));
        block_on(first);
        assert!(form.submit("second").is_ok());
    }

    #[test]
    fn newsletter_rejects_non_address() {
        let (form, _) = new_form(SubmitConfig::challenge_newsletter());
        let outcome = block_on(form.submit("not an email").expect("non-empty"));
        assert_eq!(outcome.kind, OutcomeKind::Failure);
        assert_ne!(outcome.message, SubmitConfig::challenge_newsletter().success_message);
        assert!(!form.is_submitting());

        let retry = block_on(form.submit("reader@example.com").expect("non-empty"));
        assert!(retry.is_success());
    }

    #[test]
    fn stale_clear_does_not_hide_newer_result() {
        let (form, _) = new_form(SubmitConfig::footer_newsletter());
        block_on(form.submit("a@example.com").expect("non-empty"));
        let first = form.attempt();
        block_on(form.submit("b@example.com").expect("non-empty"));

        assert!(!form.clear_attempt(first));
        assert!(matches!(form.state(), SubmitState::Done(_)));
        assert!(form.clear_attempt(form.attempt()));
        assert_eq!(form.state(), SubmitState::Idle);
    }

    #[test]
    fn footer_hides_success_but_keeps_failure() {
        let footer = SubmitConfig::footer_newsletter();
        let (form, _) = new_form(footer);

        let failure = block_on(form.submit("no-at-sign").expect("non-empty"));
        assert_eq!(failure.kind, OutcomeKind::Failure);
        assert_eq!(footer.clear_delay(&failure), None);

        let success = block_on(form.submit("reader@example.com").expect("non-empty"));
        assert_eq!(footer.clear_delay(&success), Some(config::FEEDBACK_CLEAR_MS));
    }

    #[test]
    fn inquiry_never_auto_clears() {
        let inquiry = SubmitConfig::inquiry();
        let (form, _) = new_form(inquiry);
        let outcome = block_on(form.submit("hello").expect("non-empty"));
        assert_eq!(inquiry.clear_delay(&outcome), None);
    }

    #[test]
    fn clear_leaves_pending_alone() {
        let (form, _) = new_form(SubmitConfig::inquiry());
        let _pending = form.submit("hello").expect("valid payload");
        assert!(!form.clear_attempt(form.attempt()));
        assert!(form.is_submitting());
    }

    proptest! {
        #[test]
        fn whitespace_only_is_always_refused(blank in "[ \t\n\r]{0,16}") {
            let (form, _) = new_form(SubmitConfig::footer_newsletter());
            prop_assert_eq!(form.submit(&blank).err(), Some(SubmitError::EmptyInput));
            prop_assert!(!form.is_submitting());
        }
    }
}
