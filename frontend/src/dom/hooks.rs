use std::cell::RefCell;
use std::rc::Rc;

use log::warn;
use web_sys::{HtmlElement, MouseEvent};
use yew::prelude::*;

use super::section::{HoverDriver, ScrollSection};
use super::style::html_element;
use crate::animation::hover::HoverConfig;
use crate::animation::properties::PropertySet;
use crate::animation::step::AnimationStep;
use crate::animation::trigger::TriggerConfig;

/// Mounts a [`ScrollSection`] on `root` once it is rendered.
///
/// `build` gets the root element and returns the steps, or `None` when a
/// required child is missing; the section then keeps its static CSS.
#[hook]
pub fn use_scroll_section<F>(label: &'static str, root: NodeRef, config: TriggerConfig, build: F)
where
    F: FnOnce(&HtmlElement) -> Option<Vec<AnimationStep<HtmlElement>>> + 'static,
{
    use_effect_with_deps(
        move |root: &NodeRef| {
            let section = match html_element(root) {
                Some(element) => match build(&element) {
                    Some(steps) => Some(ScrollSection::mount(label, &element, steps, config)),
                    None => {
                        warn!("{} section is missing elements, not animated", label);
                        None
                    }
                },
                None => {
                    warn!("{} section root not rendered", label);
                    None
                }
            };
            move || drop(section)
        },
        root,
    );
}

#[derive(Clone, PartialEq)]
pub struct HoverHandlers {
    pub enter: Callback<MouseEvent>,
    pub leave: Callback<MouseEvent>,
}

/// A hover timeline on `node`, from its rest values to `to`.
#[hook]
pub fn use_hover(node: NodeRef, to: PropertySet, config: HoverConfig) -> HoverHandlers {
    let driver: Rc<RefCell<Option<HoverDriver>>> = use_mut_ref(|| None);

    {
        let driver = driver.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                match html_element(node) {
                    Some(element) => *driver.borrow_mut() = Some(HoverDriver::attach(element, to, &config)),
                    None => warn!("hover target not rendered"),
                }
                move || {
                    driver.borrow_mut().take();
                }
            },
            node,
        );
    }

    let enter = {
        let driver = driver.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(driver) = driver.borrow().as_ref() {
                driver.enter();
            }
        })
    };
    let leave = Callback::from(move |_: MouseEvent| {
        if let Some(driver) = driver.borrow().as_ref() {
            driver.leave();
        }
    });

    HoverHandlers { enter, leave }
}

/// Tap feedback: `enter` is the press, `leave` the release. Wire `leave` to
/// both mouse-up and mouse-leave.
#[hook]
pub fn use_press(node: NodeRef, scale: f64) -> HoverHandlers {
    use_hover(node, PropertySet::new().scale(scale), HoverConfig::press())
}
