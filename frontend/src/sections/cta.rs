use yew::prelude::*;

use crate::animation::ease::{Ease, EaseDirection};
use crate::animation::hover::HoverConfig;
use crate::animation::properties::{PropertySet, Rgba};
use crate::animation::step::{AnimationStep, Stagger};
use crate::components::button::AnimatedButton;
use crate::config;
use crate::dom::hooks::use_scroll_section;
use crate::dom::scroll::scroll_to_anchor;
use crate::dom::style::{element_children, html_element};
use crate::store::use_ui_store;

const POWER4_OUT: Ease = Ease::Power(4, EaseDirection::Out);

#[function_component(CtaSection)]
pub fn cta_section() -> Html {
    let store = use_ui_store();
    let section_ref = use_node_ref();
    let background_ref = use_node_ref();
    let first_line_ref = use_node_ref();
    let second_line_ref = use_node_ref();
    let actions_ref = use_node_ref();

    {
        let background_ref = background_ref.clone();
        let first_line_ref = first_line_ref.clone();
        let second_line_ref = second_line_ref.clone();
        let actions_ref = actions_ref.clone();
        use_scroll_section("cta", section_ref.clone(), config::site().triggers.cta, move |_| {
            let hidden_line = PropertySet::new().opacity(0.0).y(100.0).skew_y(7.0);
            let shown_line = PropertySet::new().opacity(1.0).y(0.0).skew_y(0.0);
            let actions = actions_ref.cast::<web_sys::Element>()?;

            Some(vec![
                AnimationStep::node(Some(html_element(&background_ref)?))
                    .from(PropertySet::new().opacity(0.0).scale(1.1))
                    .to(PropertySet::new().opacity(1.0).scale(1.0))
                    .duration(1.5)
                    .ease(Ease::POWER3_OUT),
                AnimationStep::node(Some(html_element(&first_line_ref)?))
                    .from(hidden_line.clone())
                    .to(shown_line.clone())
                    .duration(1.2)
                    .ease(POWER4_OUT)
                    .overlap(1.0),
                AnimationStep::node(Some(html_element(&second_line_ref)?))
                    .from(hidden_line)
                    .to(shown_line)
                    .duration(1.2)
                    .ease(POWER4_OUT)
                    .overlap(0.8),
                AnimationStep::nodes(element_children(&actions))
                    .from(PropertySet::new().opacity(0.0).y(50.0).scale(0.8))
                    .to(PropertySet::new().opacity(1.0).y(0.0).scale(1.0))
                    .duration(0.8)
                    .stagger(Stagger::Each(0.2))
                    .ease(Ease::BACK_OUT)
                    .overlap(0.5),
            ])
        });
    }

    let learn_more = Callback::from(|_: MouseEvent| {
        scroll_to_anchor("#products", &config::site().breakpoints);
    });
    let translucent_white = Rgba::WHITE.with_alpha(0.8);

    html! {
        <section class="cta" ref={section_ref}>
            <style>
                {r#"
                .cta {
                    position: relative;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    overflow: hidden;
                    padding: 5rem 0;
                }
                .cta-background {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to bottom right, #f9fafb, white, #f3f4f6);
                }
                .cta-content {
                    position: relative;
                    z-index: 10;
                    max-width: 64rem;
                    margin: 0 auto;
                    padding: 0 1rem;
                    text-align: center;
                    animation: cta-float 3s ease-in-out infinite alternate;
                }
                @keyframes cta-float {
                    from { translate: 0 0; }
                    to { translate: 0 -10px; }
                }
                .cta-lines {
                    margin-bottom: 3rem;
                }
                .cta-lines h1 {
                    margin-bottom: 1rem;
                    font-size: clamp(2.25rem, 6vw, 4.5rem);
                    font-weight: 700;
                    line-height: 1.25;
                    letter-spacing: -0.025em;
                    color: #111827;
                }
                .cta-actions {
                    display: flex;
                    flex-wrap: wrap;
                    align-items: center;
                    justify-content: center;
                    gap: 1.5rem;
                }
                .cta-download, .cta-learn {
                    min-width: 160px;
                    border-radius: 1rem;
                    padding: 1.25rem 2.5rem;
                    font-size: 1.125rem;
                    font-weight: 600;
                    cursor: pointer;
                }
                .cta-download {
                    border: none;
                    background: #1e293b;
                    color: white;
                }
                .cta-learn {
                    border: 2px solid #e5e7eb;
                    background: rgba(255, 255, 255, 0.8);
                    color: #1f2937;
                    backdrop-filter: blur(4px);
                }
                .cta-dot {
                    position: absolute;
                    border-radius: 9999px;
                    animation: cta-pulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite;
                }
                @keyframes cta-pulse {
                    50% { opacity: 0.2; }
                }
                @media (max-width: 767px) {
                    .cta { padding: 2.5rem 0; }
                }
                "#}
            </style>
            <div class="cta-background" ref={background_ref}></div>
            <div class="cta-content">
                <div class="cta-lines">
                    <h1 ref={first_line_ref}>{"DECENTRALIZE YOUR PRESENCE."}</h1>
                    <h1 ref={second_line_ref}>{"OWN YOUR FRONTEND."}</h1>
                </div>
                <div class="cta-actions" ref={actions_ref}>
                    <div class="cta-action">
                        <AnimatedButton
                            class="cta-download"
                            onclick={store.open_popup_callback()}
                            hover={PropertySet::new().scale(1.1).shadow(10.0, 30.0, 0.3)}
                        >
                            {"Download"}
                        </AnimatedButton>
                    </div>
                    <div class="cta-action">
                        <AnimatedButton
                            class="cta-learn"
                            onclick={learn_more}
                            hover={PropertySet::new().scale(1.05).background(Rgba::rgb(0xf3, 0xf4, 0xf6))}
                            hover_config={HoverConfig::default()
                                .with_rest(PropertySet::new().background(translucent_white))}
                        >
                            {"Learn More"}
                        </AnimatedButton>
                    </div>
                </div>
            </div>
            <div class="cta-dot" style="top: 5rem; left: 5rem; width: 0.5rem; height: 0.5rem; background: #94a3b8; opacity: 0.6;"></div>
            <div class="cta-dot" style="right: 8rem; bottom: 8rem; width: 0.75rem; height: 0.75rem; background: #cbd5e1; opacity: 0.4; animation-delay: 1s;"></div>
            <div class="cta-dot" style="top: 50%; left: 2.5rem; width: 0.25rem; height: 0.25rem; background: #64748b; opacity: 0.5; animation-delay: 2s;"></div>
        </section>
    }
}
