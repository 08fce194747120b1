use web_sys::MouseEvent;
use yew::prelude::*;

use crate::animation::hover::HoverConfig;
use crate::animation::properties::PropertySet;
use crate::dom::hooks::{use_hover, use_press};

const PRESS_SCALE: f64 = 0.95;

#[derive(Properties, PartialEq)]
pub struct AnimatedButtonProps {
    #[prop_or_default]
    pub class: Classes,
    /// Renders an external link instead of a button.
    #[prop_or_default]
    pub href: Option<AttrValue>,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
    pub hover: PropertySet,
    #[prop_or_default]
    pub hover_config: HoverConfig,
    #[prop_or_default]
    pub children: Children,
}

/// A button with a hover timeline and tap feedback. The press scale lives on
/// the wrapper so it composes with the hover scale on the button itself.
#[function_component(AnimatedButton)]
pub fn animated_button(props: &AnimatedButtonProps) -> Html {
    let wrapper = use_node_ref();
    let inner = use_node_ref();
    let hover = use_hover(inner.clone(), props.hover.clone(), props.hover_config.clone());
    let press = use_press(wrapper.clone(), PRESS_SCALE);

    let content = match &props.href {
        Some(href) => html! {
            <a
                ref={inner}
                class={props.class.clone()}
                href={href.clone()}
                target="_blank"
                rel="noopener noreferrer"
                onclick={props.onclick.clone()}
                onmouseenter={hover.enter}
                onmouseleave={hover.leave}
            >
                { for props.children.iter() }
            </a>
        },
        None => html! {
            <button
                ref={inner}
                class={props.class.clone()}
                onclick={props.onclick.clone()}
                onmouseenter={hover.enter}
                onmouseleave={hover.leave}
            >
                { for props.children.iter() }
            </button>
        },
    };

    html! {
        <span
            ref={wrapper}
            class="press-wrap"
            onmousedown={press.enter}
            onmouseup={press.leave.clone()}
            onmouseleave={press.leave}
        >
            { content }
        </span>
    }
}
