use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::error::RevealError;
use crate::motion::reveal::{IntersectionSource, Observation, RevealController, RevealOptions};
use crate::motion::stagger::use_prefers_reduced_motion;

/// The browser's `IntersectionObserver`.
pub struct DomIntersectionSource;

pub struct DomObservation {
    observer: IntersectionObserver,
    _on_entries: Closure<dyn FnMut(js_sys::Array)>,
}

impl Observation for DomObservation {
    fn disconnect(&mut self) {
        self.observer.disconnect();
    }
}

impl IntersectionSource for DomIntersectionSource {
    type Target = Element;
    type Handle = DomObservation;

    fn observe(
        &self,
        target: &Element,
        options: &RevealOptions,
        mut on_event: Box<dyn FnMut(bool)>,
    ) -> Result<DomObservation, RevealError> {
        let window = web_sys::window().ok_or(RevealError::ObserverUnavailable)?;
        let supported = js_sys::Reflect::has(window.as_ref(), &JsValue::from_str("IntersectionObserver"))
            .unwrap_or(false);
        if !supported {
            return Err(RevealError::ObserverUnavailable);
        }

        let on_entries = Closure::<dyn FnMut(js_sys::Array)>::new(move |entries: js_sys::Array| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                    on_event(entry.is_intersecting());
                }
            }
        });

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(&options.root_margin);

        let observer =
            IntersectionObserver::new_with_options(on_entries.as_ref().unchecked_ref(), &init)
                .map_err(|err| RevealError::ObserverRejected(format!("{:?}", err)))?;
        observer.observe(target);

        Ok(DomObservation {
            observer,
            _on_entries: on_entries,
        })
    }
}

/// True once the element behind `node` has scrolled into view (or right
/// away when the user prefers reduced motion). Observation is released on
/// first sight or on unmount, whichever comes first.
#[hook]
pub fn use_reveal(node: NodeRef, options: RevealOptions) -> bool {
    let visible = use_state_eq(|| false);
    let reduced_motion = use_prefers_reduced_motion();

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |(node, options)| {
                let controller = match node.cast::<Element>() {
                    Some(target) => Some(RevealController::attach(
                        &DomIntersectionSource,
                        &target,
                        options,
                        move || visible.set(true),
                    )),
                    None => {
                        warn!("reveal failing open: {}", RevealError::TargetMissing);
                        visible.set(true);
                        None
                    }
                };

                move || {
                    if let Some(controller) = controller {
                        if !controller.is_visible() {
                            debug!("reveal target unmounted before it was seen");
                        }
                        controller.dispose();
                    }
                }
            },
            (node, options),
        );
    }

    *visible || reduced_motion
}
