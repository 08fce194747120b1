use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, info, warn};
use web_sys::{Element, HtmlElement};

use super::frame::FrameLoop;
use super::intersection::{observe_or_warn, IntersectionBinding};
use super::style::ScopedResolver;
use crate::animation::hover::{HoverConfig, HoverInteraction};
use crate::animation::properties::PropertySet;
use crate::animation::section::SectionController;
use crate::animation::step::AnimationStep;
use crate::animation::timeline::{compose, Advance, Direction, Timeline};
use crate::animation::trigger::TriggerConfig;

/// A mounted scroll-animated section: its timeline, the frame loop driving it
/// and the observer arming it. Dropping it releases all three.
pub struct ScrollSection {
    label: &'static str,
    controller: Rc<RefCell<SectionController<HtmlElement>>>,
    frames: Rc<FrameLoop>,
    binding: Option<IntersectionBinding>,
}

impl ScrollSection {
    pub fn mount(
        label: &'static str,
        root: &HtmlElement,
        steps: Vec<AnimationStep<HtmlElement>>,
        config: TriggerConfig,
    ) -> Self {
        let root: Element = root.clone().into();
        let timeline = compose(steps, &ScopedResolver::new(root.clone()));
        let duration = timeline.duration();
        let controller = Rc::new(RefCell::new(SectionController::new(timeline, config)));

        let frames = {
            let controller = Rc::downgrade(&controller);
            Rc::new(FrameLoop::new(move |dt| {
                let Some(controller) = controller.upgrade() else {
                    return false;
                };
                let running = controller.borrow_mut().advance(dt);
                running
            }))
        };

        controller.borrow_mut().arm();
        let binding = {
            let controller = Rc::downgrade(&controller);
            let frames = Rc::downgrade(&frames);
            observe_or_warn(&root, &config.observer_thresholds(), move |fraction| {
                let (Some(controller), Some(frames)) = (controller.upgrade(), frames.upgrade()) else {
                    return;
                };
                let event = controller.borrow_mut().on_intersection(fraction);
                if let Some(event) = event {
                    debug!("{} section {:?} at {:.2}", label, event, fraction);
                    frames.start();
                }
            })
        };

        if binding.is_none() {
            warn!("{} section shown without scroll animation", label);
            let mut controller = controller.borrow_mut();
            controller.finish();
            controller.teardown();
        } else {
            info!("{} section armed ({:.2}s timeline)", label, duration);
        }

        Self {
            label,
            controller,
            frames,
            binding,
        }
    }
}

impl Drop for ScrollSection {
    fn drop(&mut self) {
        self.binding.take();
        self.frames.stop();
        let mut controller = self.controller.borrow_mut();
        controller.teardown();
        debug!("{} section torn down at {:.0}%", self.label, controller.progress() * 100.0);
    }
}

/// Plays a one-off timeline on animation frames, reporting each completion.
pub struct TimelinePlayer {
    timeline: Rc<RefCell<Timeline<HtmlElement>>>,
    frames: FrameLoop,
}

impl TimelinePlayer {
    pub fn new<F>(timeline: Timeline<HtmlElement>, mut on_complete: F) -> Self
    where
        F: FnMut(Direction) + 'static,
    {
        let timeline = Rc::new(RefCell::new(timeline));
        let frames = {
            let timeline = Rc::downgrade(&timeline);
            FrameLoop::new(move |dt| {
                let Some(timeline) = timeline.upgrade() else {
                    return false;
                };
                let advance = timeline.borrow_mut().advance(dt);
                match advance {
                    Advance::Running => true,
                    Advance::Completed(direction) => {
                        on_complete(direction);
                        false
                    }
                    Advance::Idle => false,
                }
            })
        };
        Self { timeline, frames }
    }

    pub fn play(&self) {
        self.timeline.borrow_mut().play();
        self.frames.start();
    }

    pub fn reverse(&self) {
        self.timeline.borrow_mut().reverse();
        self.frames.start();
    }
}

impl Drop for TimelinePlayer {
    fn drop(&mut self) {
        self.frames.stop();
        self.timeline.borrow_mut().pause();
    }
}

/// A [`HoverInteraction`] on a real element, advanced on animation frames.
pub struct HoverDriver {
    interaction: Rc<RefCell<HoverInteraction<HtmlElement>>>,
    frames: FrameLoop,
}

impl HoverDriver {
    pub fn attach(element: HtmlElement, to: PropertySet, config: &HoverConfig) -> Self {
        let interaction = Rc::new(RefCell::new(HoverInteraction::attach(element, to, config)));
        let frames = {
            let interaction = Rc::downgrade(&interaction);
            FrameLoop::new(move |dt| {
                let Some(interaction) = interaction.upgrade() else {
                    return false;
                };
                let running = interaction.borrow_mut().advance(dt);
                running
            })
        };
        Self { interaction, frames }
    }

    pub fn enter(&self) {
        self.interaction.borrow_mut().pointer_enter();
        self.frames.start();
    }

    pub fn leave(&self) {
        self.interaction.borrow_mut().pointer_leave();
        self.frames.start();
    }
}

impl Drop for HoverDriver {
    fn drop(&mut self) {
        self.frames.stop();
        self.interaction.borrow_mut().dispose();
    }
}
