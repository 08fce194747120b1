use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Frames further apart than this (a background tab, a debugger pause) are
/// treated as one ordinary frame so animations don't jump to their end.
const LAG_THRESHOLD_SECS: f64 = 0.5;
const LAG_FRAME_SECS: f64 = 1.0 / 30.0;

struct FrameState {
    request: Cell<Option<i32>>,
    last_timestamp: Cell<Option<f64>>,
    callback: RefCell<Option<Closure<dyn FnMut(f64)>>>,
}

impl FrameState {
    fn schedule(&self) {
        if self.request.get().is_some() {
            return;
        }
        let Some(window) = web_sys::window() else {
            return;
        };
        let callback = self.callback.borrow();
        let Some(callback) = callback.as_ref() else {
            return;
        };
        match window.request_animation_frame(callback.as_ref().unchecked_ref()) {
            Ok(id) => self.request.set(Some(id)),
            Err(err) => warn!("requestAnimationFrame failed: {:?}", err),
        }
    }

    fn cancel(&self) {
        if let Some(id) = self.request.take() {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
        self.last_timestamp.set(None);
    }
}

/// Drives a per-frame callback with `requestAnimationFrame`.
///
/// The callback gets the seconds elapsed since the previous frame (0 on the
/// first one) and returns whether it wants another frame. Dropping the loop
/// cancels any pending frame.
pub struct FrameLoop {
    state: Rc<FrameState>,
}

impl FrameLoop {
    pub fn new<F>(mut on_frame: F) -> Self
    where
        F: FnMut(f64) -> bool + 'static,
    {
        let state = Rc::new(FrameState {
            request: Cell::new(None),
            last_timestamp: Cell::new(None),
            callback: RefCell::new(None),
        });

        let weak: Weak<FrameState> = Rc::downgrade(&state);
        let callback = Closure::wrap(Box::new(move |timestamp: f64| {
            let Some(state) = weak.upgrade() else {
                return;
            };
            state.request.set(None);
            let dt = match state.last_timestamp.get() {
                Some(last) => frame_delta(last, timestamp),
                None => 0.0,
            };
            state.last_timestamp.set(Some(timestamp));
            if on_frame(dt) {
                state.schedule();
            } else {
                state.last_timestamp.set(None);
            }
        }) as Box<dyn FnMut(f64)>);
        *state.callback.borrow_mut() = Some(callback);

        Self { state }
    }

    /// Requests a frame unless one is already pending.
    pub fn start(&self) {
        self.state.schedule();
    }

    pub fn stop(&self) {
        self.state.cancel();
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.state.cancel();
        self.state.callback.borrow_mut().take();
    }
}

fn frame_delta(last: f64, now: f64) -> f64 {
    let dt = ((now - last) / 1000.0).max(0.0);
    if dt > LAG_THRESHOLD_SECS {
        LAG_FRAME_SECS
    } else {
        dt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delta_is_in_seconds() {
        assert!((frame_delta(1000.0, 1016.0) - 0.016).abs() < 1e-9);
    }

    #[test]
    fn long_gaps_count_as_one_frame() {
        assert_eq!(frame_delta(0.0, 5000.0), LAG_FRAME_SECS);
    }

    #[test]
    fn clock_going_backwards_is_zero() {
        assert_eq!(frame_delta(1000.0, 900.0), 0.0);
    }
}
