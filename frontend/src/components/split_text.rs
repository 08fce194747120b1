use yew::prelude::*;

use crate::animation::text::{split_text, TextToken, UnitKind};

#[derive(Properties, PartialEq)]
pub struct SplitTextProps {
    pub text: AttrValue,
    #[prop_or(UnitKind::Word)]
    pub unit: UnitKind,
}

/// Renders `text` with every word (or character) in its own
/// span, classed `word` or `char`, so timelines can target the units.
#[function_component(SplitText)]
pub fn split_text_component(props: &SplitTextProps) -> Html {
    let split = split_text(&props.text, props.unit);
    let class = props.unit.class();

    html! {
        <>
            { for split.tokens().iter().map(|token| match token {
                TextToken::Unit(text) => html! {
                    <span class={class}>{ text.clone() }</span>
                },
                TextToken::Separator(text) => html! { { text.clone() } },
            }) }
        </>
    }
}
