use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

use log::debug;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

/// Pixel thresholds the page layout switches on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Breakpoints {
    pub mobile_width: f64,
    pub scrolled_offset: f64,
    /// How far before the bottom of the hero the navbar counts as past it.
    pub hero_clearance: f64,
    /// Height of the fixed header, subtracted from in-page scroll targets.
    pub header_offset: f64,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            mobile_width: 768.0,
            scrolled_offset: 50.0,
            hero_clearance: 100.0,
            header_offset: 100.0,
        }
    }
}

impl Breakpoints {
    pub fn is_mobile(&self, viewport: Viewport) -> bool {
        viewport.width < self.mobile_width
    }

    pub fn is_scrolled(&self, scroll_y: f64) -> bool {
        scroll_y > self.scrolled_offset
    }

    /// `hero_height` is `None` when the page has no hero, in which case one
    /// viewport height stands in for it.
    pub fn is_past_hero(&self, scroll_y: f64, hero_height: Option<f64>, viewport: Viewport) -> bool {
        let height = hero_height.unwrap_or(viewport.height);
        scroll_y > height - self.hero_clearance
    }

    pub fn scroll_target(&self, element_top: f64, scroll_y: f64) -> f64 {
        (element_top + scroll_y - self.header_offset).max(0.0)
    }
}

/// How far a pinned section has been scrolled through: 0 while its top is at
/// or below the viewport top, 1 once its bottom reaches the viewport bottom.
pub fn scroll_progress(section_top: f64, section_height: f64, viewport_height: f64) -> f64 {
    let track = section_height - viewport_height;
    if track <= 0.0 {
        return if section_top <= 0.0 { 1.0 } else { 0.0 };
    }
    (-section_top / track).clamp(0.0, 1.0)
}

pub const GALLERY_START_PERCENT: f64 = 1.0;
pub const GALLERY_END_PERCENT: f64 = -400.0;

/// Horizontal offset of the use-case strip, in percent of its width.
pub fn gallery_offset(progress: f64) -> f64 {
    let progress = progress.clamp(0.0, 1.0);
    GALLERY_START_PERCENT + (GALLERY_END_PERCENT - GALLERY_START_PERCENT) * progress
}

type Observer = Rc<RefCell<Box<dyn FnMut(Viewport)>>>;

#[derive(Default)]
struct Registry {
    next_id: usize,
    observers: BTreeMap<usize, Observer>,
}

/// Fans one stream of resize notifications out to any number of observers.
#[derive(Clone)]
pub struct ResizeBridge {
    registry: Rc<RefCell<Registry>>,
    current: Rc<Cell<Viewport>>,
}

impl ResizeBridge {
    pub fn new(initial: Viewport) -> Self {
        Self {
            registry: Rc::new(RefCell::new(Registry::default())),
            current: Rc::new(Cell::new(initial)),
        }
    }

    pub fn current(&self) -> Viewport {
        self.current.get()
    }

    /// Calls `observer` right away with the current viewport and then on every
    /// notification until the returned subscription is dropped.
    pub fn observe<F>(&self, observer: F) -> Subscription
    where
        F: FnMut(Viewport) + 'static,
    {
        let observer: Observer = Rc::new(RefCell::new(Box::new(observer)));
        let id = {
            let mut registry = self.registry.borrow_mut();
            let id = registry.next_id;
            registry.next_id += 1;
            registry.observers.insert(id, observer.clone());
            id
        };
        (observer.borrow_mut())(self.current());

        Subscription {
            id,
            registry: Rc::downgrade(&self.registry),
        }
    }

    pub fn notify(&self, viewport: Viewport) {
        self.current.set(viewport);
        // Observers may subscribe or unsubscribe while being called.
        let observers: Vec<Observer> = self.registry.borrow().observers.values().cloned().collect();
        debug!(
            "viewport {}x{}, {} observers",
            viewport.width,
            viewport.height,
            observers.len()
        );
        for observer in observers {
            (observer.borrow_mut())(viewport);
        }
    }

    #[cfg(test)]
    pub fn observer_count(&self) -> usize {
        self.registry.borrow().observers.len()
    }
}

#[must_use = "dropping a subscription unsubscribes it"]
pub struct Subscription {
    id: usize,
    registry: Weak<RefCell<Registry>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.borrow_mut().observers.remove(&self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport(width: f64) -> Viewport {
        Viewport { width, height: 800.0 }
    }

    #[test]
    fn mobile_breakpoint_is_exclusive() {
        let breakpoints = Breakpoints::default();
        assert!(breakpoints.is_mobile(viewport(767.0)));
        assert!(!breakpoints.is_mobile(viewport(768.0)));
    }

    #[test]
    fn scrolled_after_fifty_pixels() {
        let breakpoints = Breakpoints::default();
        assert!(!breakpoints.is_scrolled(49.0));
        assert!(!breakpoints.is_scrolled(50.0));
        assert!(breakpoints.is_scrolled(51.0));
    }

    #[test]
    fn past_hero_uses_hero_height_or_viewport() {
        let breakpoints = Breakpoints::default();
        assert!(!breakpoints.is_past_hero(600.0, Some(700.0), viewport(1280.0)));
        assert!(breakpoints.is_past_hero(601.0, Some(700.0), viewport(1280.0)));
        assert!(breakpoints.is_past_hero(701.0, None, viewport(1280.0)));
    }

    #[test]
    fn scroll_target_leaves_room_for_header() {
        let breakpoints = Breakpoints::default();
        assert_eq!(breakpoints.scroll_target(400.0, 1000.0), 1300.0);
        assert_eq!(breakpoints.scroll_target(20.0, 0.0), 0.0);
    }

    #[test]
    fn gallery_runs_from_start_to_end() {
        assert_eq!(gallery_offset(0.0), 1.0);
        assert_eq!(gallery_offset(1.0), -400.0);
        assert_eq!(gallery_offset(2.0), -400.0);
        assert!((gallery_offset(0.5) - -199.5).abs() < 1e-9);
    }

    #[test]
    fn progress_through_pinned_section() {
        // 300vh section in an 800px viewport has 1600px of track.
        assert_eq!(scroll_progress(100.0, 2400.0, 800.0), 0.0);
        assert_eq!(scroll_progress(-800.0, 2400.0, 800.0), 0.5);
        assert_eq!(scroll_progress(-5000.0, 2400.0, 800.0), 1.0);
        assert_eq!(scroll_progress(10.0, 500.0, 800.0), 0.0);
    }

    #[test]
    fn observe_runs_immediately_and_on_notify() {
        let bridge = ResizeBridge::new(viewport(1024.0));
        let breakpoints = Breakpoints::default();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let _subscription = {
            let seen = seen.clone();
            bridge.observe(move |viewport| seen.borrow_mut().push(breakpoints.is_mobile(viewport)))
        };
        bridge.notify(viewport(500.0));
        bridge.notify(viewport(900.0));

        assert_eq!(*seen.borrow(), vec![false, true, false]);
        assert_eq!(bridge.current(), viewport(900.0));
    }

    #[test]
    fn dropping_subscription_unsubscribes() {
        let bridge = ResizeBridge::new(viewport(1024.0));
        let calls = Rc::new(Cell::new(0));

        let subscription = {
            let calls = calls.clone();
            bridge.observe(move |_| calls.set(calls.get() + 1))
        };
        assert_eq!(bridge.observer_count(), 1);
        drop(subscription);
        assert_eq!(bridge.observer_count(), 0);

        bridge.notify(viewport(400.0));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn subscription_outliving_bridge_is_harmless() {
        let bridge = ResizeBridge::new(viewport(1024.0));
        let subscription = bridge.observe(|_| {});
        drop(bridge);
        drop(subscription);
    }
}
