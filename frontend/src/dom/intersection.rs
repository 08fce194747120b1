use std::cell::Cell;
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// An `IntersectionObserver` on one element, reporting its visible fraction.
/// Dropping the binding disconnects the observer; reports still queued by the
/// browser after that are discarded.
pub struct IntersectionBinding {
    observer: IntersectionObserver,
    active: Rc<Cell<bool>>,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl IntersectionBinding {
    pub fn observe<F>(element: &Element, thresholds: &[f64], mut on_change: F) -> Result<Self, JsValue>
    where
        F: FnMut(f64) + 'static,
    {
        let active = Rc::new(Cell::new(true));
        let callback = {
            let active = active.clone();
            Closure::wrap(Box::new(move |entries: Array, _observer: IntersectionObserver| {
                if !active.get() {
                    return;
                }
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    let fraction = if entry.is_intersecting() { entry.intersection_ratio() } else { 0.0 };
                    on_change(fraction);
                }
            }) as Box<dyn FnMut(Array, IntersectionObserver)>)
        };

        let threshold: Array = thresholds.iter().map(|value| JsValue::from_f64(*value)).collect();
        let init = IntersectionObserverInit::new();
        init.set_threshold(&threshold);

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        observer.observe(element);
        debug!("intersection observer attached ({} thresholds)", thresholds.len());

        Ok(Self {
            observer,
            active,
            _callback: callback,
        })
    }
}

impl Drop for IntersectionBinding {
    fn drop(&mut self) {
        self.active.set(false);
        self.observer.disconnect();
    }
}

/// Logs and swallows observer creation errors for callers that fall back.
pub fn observe_or_warn<F>(element: &Element, thresholds: &[f64], on_change: F) -> Option<IntersectionBinding>
where
    F: FnMut(f64) + 'static,
{
    match IntersectionBinding::observe(element, thresholds, on_change) {
        Ok(binding) => Some(binding),
        Err(err) => {
            warn!("IntersectionObserver unavailable: {:?}", err);
            None
        }
    }
}
