use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, warn};

use crate::config;
use crate::error::RevealError;

#[derive(Debug, Clone, PartialEq)]
pub struct RevealOptions {
    /// Fraction of the target that must be on screen.
    pub threshold: f64,
    /// CSS margin grown around the viewport before testing.
    pub root_margin: String,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: config::REVEAL_THRESHOLD,
            root_margin: config::REVEAL_ROOT_MARGIN.to_string(),
        }
    }
}

impl RevealOptions {
    /// No margin: `threshold` of the target has to be inside the viewport
    /// proper.
    pub fn at_viewport_edge(threshold: f64) -> Self {
        Self::default()
            .with_threshold(threshold)
            .with_root_margin("0px")
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_root_margin(mut self, root_margin: impl Into<String>) -> Self {
        self.root_margin = root_margin.into();
        self
    }
}

/// A live viewport subscription. Disconnecting releases it.
pub trait Observation {
    fn disconnect(&mut self);
}

/// Supplies "is this region on screen" events. Each delivered `bool` is
/// the event's intersecting flag, in platform order.
pub trait IntersectionSource {
    type Target: ?Sized;
    type Handle: Observation + 'static;

    fn observe(
        &self,
        target: &Self::Target,
        options: &RevealOptions,
        on_event: Box<dyn FnMut(bool)>,
    ) -> Result<Self::Handle, RevealError>;
}

struct Latch {
    visible: bool,
    triggered: bool,
    disposed: bool,
    handle: Option<Box<dyn Observation>>,
    // Disconnected handles stay alive until the controller drops: the
    // platform callback that disconnected them may still be on the stack.
    retired: Option<Box<dyn Observation>>,
    on_reveal: Option<Box<dyn FnOnce()>>,
}

impl Latch {
    fn trigger(latch: &RefCell<Latch>) {
        let (handle, on_reveal) = {
            let mut state = latch.borrow_mut();
            if state.triggered || state.disposed {
                return;
            }
            state.triggered = true;
            state.visible = true;
            (state.handle.take(), state.on_reveal.take())
        };
        // Borrow released: both calls may re-enter the controller.
        if let Some(mut handle) = handle {
            handle.disconnect();
            latch.borrow_mut().retired = Some(handle);
        }
        if let Some(on_reveal) = on_reveal {
            on_reveal();
        }
    }
}

/// One-shot "has this region been seen" latch over an [`IntersectionSource`].
///
/// The first intersecting event flips `visible` for good and disconnects the
/// observation. If the source cannot observe at all, the controller fails
/// open and reports visible straight away.
#[derive(Clone)]
pub struct RevealController {
    latch: Rc<RefCell<Latch>>,
}

impl RevealController {
    pub fn attach<S: IntersectionSource>(
        source: &S,
        target: &S::Target,
        options: &RevealOptions,
        on_reveal: impl FnOnce() + 'static,
    ) -> Self {
        let latch = Rc::new(RefCell::new(Latch {
            visible: false,
            triggered: false,
            disposed: false,
            handle: None,
            retired: None,
            on_reveal: Some(Box::new(on_reveal)),
        }));

        let weak = Rc::downgrade(&latch);
        let on_event = Box::new(move |is_intersecting: bool| {
            if !is_intersecting {
                return;
            }
            if let Some(latch) = weak.upgrade() {
                Latch::trigger(&latch);
            }
        });

        match source.observe(target, options, on_event) {
            Ok(handle) => {
                let mut handle: Box<dyn Observation> = Box::new(handle);
                let settled = {
                    let state = latch.borrow();
                    state.triggered || state.disposed
                };
                if settled {
                    // Fired synchronously while observe() was still running.
                    handle.disconnect();
                    latch.borrow_mut().retired = Some(handle);
                } else {
                    latch.borrow_mut().handle = Some(handle);
                    debug!(
                        "reveal observing (threshold {}, margin {})",
                        options.threshold, options.root_margin
                    );
                }
            }
            Err(err) => {
                warn!("reveal failing open: {}", err);
                Latch::trigger(&latch);
            }
        }

        Self { latch }
    }

    pub fn is_visible(&self) -> bool {
        self.latch.borrow().visible
    }

    /// Releases the observation if it is still live. Safe to call any number
    /// of times, before or after the trigger.
    pub fn dispose(&self) {
        let handle = {
            let mut state = self.latch.borrow_mut();
            if state.disposed {
                return;
            }
            state.disposed = true;
            state.on_reveal = None;
            state.handle.take()
        };
        if let Some(mut handle) = handle {
            debug!("reveal disposed before trigger");
            handle.disconnect();
            self.latch.borrow_mut().retired = Some(handle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::cell::Cell;

    /// Stand-in for the browser's IntersectionObserver.
    #[derive(Default)]
    struct MockIntersectionSource {
        pub unavailable: bool,
        pub emit_on_observe: Option<bool>,
        pub disconnects: Rc<Cell<usize>>,
        sink: RefCell<Option<Box<dyn FnMut(bool)>>>,
    }

    struct MockObservation {
        disconnects: Rc<Cell<usize>>,
    }

    impl Observation for MockObservation {
        fn disconnect(&mut self) {
            self.disconnects.set(self.disconnects.get() + 1);
        }
    }

    impl IntersectionSource for MockIntersectionSource {
        type Target = ();
        type Handle = MockObservation;

        fn observe(
            &self,
            _target: &(),
            _options: &RevealOptions,
            mut on_event: Box<dyn FnMut(bool)>,
        ) -> Result<MockObservation, RevealError> {
            if self.unavailable {
                return Err(RevealError::ObserverUnavailable);
            }
            if let Some(flag) = self.emit_on_observe {
                on_event(flag);
            }
            *self.sink.borrow_mut() = Some(on_event);
            Ok(MockObservation {
                disconnects: self.disconnects.clone(),
            })
        }
    }

    impl MockIntersectionSource {
        pub fn emit(&self, is_intersecting: bool) {
            if let Some(sink) = self.sink.borrow_mut().as_mut() {
                sink(is_intersecting);
            }
        }
    }

    fn attach_counting(source: &MockIntersectionSource) -> (RevealController, Rc<Cell<usize>>) {
        let reveals = Rc::new(Cell::new(0));
        let counter = reveals.clone();
        let controller = RevealController::attach(source, &(), &RevealOptions::default(), move || {
            counter.set(counter.get() + 1)
        });
        (controller, reveals)
    }

    #[test]
    fn defaults_match_site_config() {
        let options = RevealOptions::default();
        assert_eq!(options.threshold, 0.1);
        assert_eq!(options.root_margin, "50px");
        assert_eq!(options.with_threshold(0.15).threshold, 0.15);
    }

    #[test]
    fn edge_options_drop_the_margin() {
        let options = RevealOptions::at_viewport_edge(0.15);
        assert_eq!(options.threshold, 0.15);
        assert_eq!(options.root_margin, "0px");
    }

    #[test]
    fn hidden_until_first_intersection() {
        let source = MockIntersectionSource::default();
        let (controller, reveals) = attach_counting(&source);
        assert!(!controller.is_visible());

        source.emit(false);
        assert!(!controller.is_visible());

        source.emit(true);
        assert!(controller.is_visible());
        assert_eq!(reveals.get(), 1);
        assert_eq!(source.disconnects.get(), 1);
    }

    #[test]
    fn back_to_back_triggers_disconnect_once() {
        let source = MockIntersectionSource::default();
        let (controller, reveals) = attach_counting(&source);
        source.emit(true);
        source.emit(true);
        source.emit(true);
        controller.dispose();
        controller.dispose();
        assert_eq!(source.disconnects.get(), 1);
        assert_eq!(reveals.get(), 1);
    }

    #[test]
    fn missing_observer_fails_open() {
        let source = MockIntersectionSource {
            unavailable: true,
            ..Default::default()
        };
        let (controller, reveals) = attach_counting(&source);
        assert!(controller.is_visible());
        assert_eq!(reveals.get(), 1);
        controller.dispose();
        assert_eq!(source.disconnects.get(), 0);
    }

    #[test]
    fn dispose_before_trigger_releases_and_silences() {
        let source = MockIntersectionSource::default();
        let (controller, reveals) = attach_counting(&source);
        controller.dispose();
        assert_eq!(source.disconnects.get(), 1);

        source.emit(true);
        assert!(!controller.is_visible());
        assert_eq!(reveals.get(), 0);
        controller.dispose();
        assert_eq!(source.disconnects.get(), 1);
    }

    #[test]
    fn synchronous_trigger_during_observe_still_disconnects() {
        let source = MockIntersectionSource {
            emit_on_observe: Some(true),
            ..Default::default()
        };
        let (controller, reveals) = attach_counting(&source);
        assert!(controller.is_visible());
        assert_eq!(reveals.get(), 1);
        assert_eq!(source.disconnects.get(), 1);
    }

    #[test]
    fn events_after_controller_dropped_are_ignored() {
        let source = MockIntersectionSource::default();
        let (controller, reveals) = attach_counting(&source);
        drop(controller);
        source.emit(true);
        assert_eq!(reveals.get(), 0);
    }

    proptest! {
        #[test]
        fn visibility_never_goes_back(events in proptest::collection::vec(any::<bool>(), 0..64)) {
            let source = MockIntersectionSource::default();
            let (controller, _) = attach_counting(&source);
            let mut seen = false;
            for event in events {
                source.emit(event);
                seen |= event;
                prop_assert_eq!(controller.is_visible(), seen);
            }
        }

        #[test]
        fn disconnects_at_most_once(events in proptest::collection::vec(any::<bool>(), 0..64)) {
            let source = MockIntersectionSource::default();
            let (controller, reveals) = attach_counting(&source);
            let any_true = events.iter().any(|e| *e);
            for event in events {
                source.emit(event);
            }
            prop_assert_eq!(source.disconnects.get(), usize::from(any_true));
            prop_assert_eq!(reveals.get(), usize::from(any_true));
            controller.dispose();
            prop_assert_eq!(source.disconnects.get(), 1);
        }
    }
}
