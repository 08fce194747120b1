use log::warn;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};
use yew::NodeRef;

use crate::animation::properties::PropertySet;
use crate::animation::timeline::{Animatable, TargetResolver};

impl Animatable for HtmlElement {
    fn apply(&self, values: &PropertySet) {
        let style = self.style();
        for (name, value) in values.style_declarations() {
            if let Err(err) = style.set_property(name, &value) {
                warn!("failed to set {}: {:?}", name, err);
            }
        }
    }
}

/// Resolves step selectors inside one section root, in document order.
pub struct ScopedResolver {
    root: Element,
}

impl ScopedResolver {
    pub fn new(root: Element) -> Self {
        Self { root }
    }
}

impl TargetResolver<HtmlElement> for ScopedResolver {
    fn resolve(&self, selector: &str) -> Vec<HtmlElement> {
        let nodes = match self.root.query_selector_all(selector) {
            Ok(nodes) => nodes,
            Err(err) => {
                warn!("bad selector `{}`: {:?}", selector, err);
                return Vec::new();
            }
        };
        (0..nodes.length())
            .filter_map(|index| nodes.item(index))
            .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
            .collect()
    }
}

pub fn html_element(node: &NodeRef) -> Option<HtmlElement> {
    node.cast::<HtmlElement>()
}

/// Every element child of `parent`, skipping text nodes.
pub fn element_children(parent: &Element) -> Vec<HtmlElement> {
    let children = parent.children();
    (0..children.length())
        .filter_map(|index| children.item(index))
        .filter_map(|child| child.dyn_into::<HtmlElement>().ok())
        .collect()
}

/// Sets one plain style property, logging failures.
pub fn set_style(element: &HtmlElement, name: &str, value: &str) {
    if let Err(err) = element.style().set_property(name, value) {
        warn!("failed to set {}: {:?}", name, err);
    }
}
