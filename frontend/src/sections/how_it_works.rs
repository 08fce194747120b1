use yew::prelude::*;

use crate::animation::ease::{Ease, EaseDirection};
use crate::animation::properties::PropertySet;
use crate::animation::step::{AnimationStep, Offset, Stagger};
use crate::components::button::AnimatedButton;
use crate::config;
use crate::dom::hooks::use_scroll_section;
use crate::dom::style::html_element;
use crate::store::use_ui_store;

struct Step {
    id: &'static str,
    title: &'static str,
    description: [&'static str; 2],
    color: &'static str,
    icon: &'static str,
    icon_alt: &'static str,
}

const STEPS: [Step; 5] = [
    Step {
        id: "download",
        title: "DOWNLOAD WALPRESS",
        description: [
            "Get started instantly with our local-first builder.",
            "No signups. No tracking. Just a clean starter kit that runs on your device, giving you full \
control from the very first click.",
        ],
        color: "#73E2A3",
        icon: "/download.png",
        icon_alt: "Download WalPress",
    },
    Step {
        id: "create",
        title: "CREATE YOUR SITE",
        description: [
            "Design your page your way.",
            "Use the visual editor for hands-on control, or prompt our AI to generate layouts, write copy, \
or build entire pages. Every part of the site is customizable and it all happens offline.",
        ],
        color: "#FDA29B",
        icon: "/erroe.png",
        icon_alt: "Create your site",
    },
    Step {
        id: "domain",
        title: "CLAIM YOUR DOMAIN",
        description: [
            "Claim your identity on the decentralized web.",
            "With just your wallet, register a .sui domain. No middlemen, no KYC, no hidden renewals. \
It's fully yours and fully on-chain.",
        ],
        color: "#D6BBFB",
        icon: "/globe.png",
        icon_alt: "Claim your domain",
    },
    Step {
        id: "connect",
        title: "CONNECT & SHARE",
        description: [
            "Link your creations to the world.",
            "Seamlessly connect your local site to your domain and share it with anyone. Your content stays \
under your control while being accessible globally.",
        ],
        color: "#84CAFF",
        icon: "/link.png",
        icon_alt: "Connect and share",
    },
    Step {
        id: "launch",
        title: "LAUNCH & THRIVE",
        description: [
            "Go live with confidence.",
            "Deploy your site to the decentralized web with one click. No hosting fees, no downtime, \
no restrictions. Just your content, your way, forever.",
        ],
        color: "#FDE272",
        icon: "/star.png",
        icon_alt: "Launch and thrive",
    },
];

/// Each card sticks a little lower than the one before it, in `vh`.
const STICKY_STEP_VH: usize = 13;

#[function_component(HowItWorks)]
pub fn how_it_works() -> Html {
    html! {
        <section class="how-it-works" aria-labelledby="how-it-works-title">
            <style>
                {r#"
                .how-it-works {
                    position: relative;
                    display: flex;
                    width: 100%;
                    max-width: 1500px;
                    flex-direction: column;
                    align-items: center;
                    margin: 0 auto 9rem;
                }
                .how-it-works-header {
                    width: 100%;
                    padding: 2rem 5rem;
                }
                .how-it-works-header h2 {
                    margin-bottom: 2rem;
                    font-size: clamp(2.25rem, 5vw, 3.75rem);
                    font-weight: 700;
                    color: #111827;
                }
                .how-it-works-header p {
                    max-width: 48rem;
                    font-size: 1.25rem;
                    line-height: 1.625;
                    color: #1f2937;
                }
                .step-card {
                    position: sticky;
                    display: flex;
                    width: 100%;
                    justify-content: center;
                }
                .step-card article {
                    display: flex;
                    width: 100%;
                    min-height: 500px;
                    flex-direction: column;
                    padding: 2.5rem 5rem;
                    transition: box-shadow 0.3s;
                }
                .step-card article:hover {
                    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                }
                .step-icon img {
                    width: 80px;
                    height: 80px;
                    transition: transform 0.3s;
                }
                .step-icon img:hover {
                    transform: scale(1.1);
                }
                .step-text h3 {
                    margin: 2rem 0 1.5rem;
                    font-size: clamp(1.5rem, 3vw, 2.25rem);
                    font-weight: 900;
                    color: black;
                }
                .step-paragraph {
                    margin-bottom: 0.75rem;
                    font-size: 1.25rem;
                    color: black;
                }
                .step-download {
                    margin-top: 1.25rem;
                    border: none;
                    border-radius: 0.75rem;
                    background: #1e293b;
                    padding: 1rem 2rem;
                    font-size: 1.125rem;
                    font-weight: 600;
                    color: white;
                    cursor: pointer;
                }
                .sr-only {
                    position: absolute;
                    width: 1px;
                    height: 1px;
                    overflow: hidden;
                    clip: rect(0, 0, 0, 0);
                }
                @media (max-width: 767px) {
                    .how-it-works-header, .step-card article {
                        padding: 2rem 1.25rem;
                    }
                }
                "#}
            </style>
            <div class="how-it-works-header">
                <h2>{"HOW WALPRESS WORKS"}</h2>
                <p>
                    {"Walpress gives you all the tools to build, own, and publish your Web3 presence. \
No extra platforms, no middlemen, no compromises."}
                </p>
            </div>
            <div class="sr-only">
                <h2 id="how-it-works-title">{"How WalPress Works - Step by Step Guide"}</h2>
            </div>
            { for STEPS.iter().enumerate().map(|(index, step)| html! {
                <StepCard
                    key={step.id}
                    index={index}
                    title={step.title}
                    first_line={step.description[0]}
                    second_line={step.description[1]}
                    color={step.color}
                    icon={step.icon}
                    icon_alt={step.icon_alt}
                />
            }) }
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct StepCardProps {
    pub index: usize,
    pub title: AttrValue,
    pub first_line: AttrValue,
    pub second_line: AttrValue,
    pub color: AttrValue,
    pub icon: AttrValue,
    pub icon_alt: AttrValue,
}

/// One sticky card with its own once-only reveal.
#[function_component(StepCard)]
pub fn step_card(props: &StepCardProps) -> Html {
    let store = use_ui_store();
    let card_ref = use_node_ref();
    let article_ref = use_node_ref();
    let icon_ref = use_node_ref();
    let text_ref = use_node_ref();

    {
        let article_ref = article_ref.clone();
        let icon_ref = icon_ref.clone();
        let text_ref = text_ref.clone();
        use_scroll_section(
            "how-it-works card",
            card_ref.clone(),
            config::site().triggers.how_it_works,
            move |_| {
                Some(vec![
                    AnimationStep::node(Some(html_element(&article_ref)?))
                        .from(PropertySet::new().opacity(0.0).y(100.0).scale(0.95))
                        .to(PropertySet::new().opacity(1.0).y(0.0).scale(1.0))
                        .duration(0.8)
                        .ease(Ease::Power(1, EaseDirection::Out)),
                    AnimationStep::node(Some(html_element(&icon_ref)?))
                        .from(PropertySet::new().scale(0.0).rotation(-180.0))
                        .to(PropertySet::new().scale(1.0).rotation(0.0))
                        .duration(0.6)
                        .ease(Ease::BACK_OUT)
                        .offset(Offset::Absolute(0.2)),
                    AnimationStep::node(Some(html_element(&text_ref)?))
                        .from(PropertySet::new().opacity(0.0).y(20.0))
                        .to(PropertySet::new().opacity(1.0).y(0.0))
                        .duration(0.6)
                        .ease(Ease::Power(1, EaseDirection::Out))
                        .offset(Offset::Absolute(0.3)),
                    AnimationStep::selector(".step-paragraph")
                        .from(PropertySet::new().opacity(0.0).y(10.0))
                        .to(PropertySet::new().opacity(1.0).y(0.0))
                        .duration(0.5)
                        .stagger(Stagger::Each(0.1))
                        .offset(Offset::Absolute(0.4)),
                ])
            },
        );
    }

    html! {
        <div
            class="step-card"
            ref={card_ref}
            style={format!("top: {}vh;", props.index * STICKY_STEP_VH)}
        >
            <article ref={article_ref} style={format!("background-color: {};", props.color)}>
                <div class="step-icon" ref={icon_ref}>
                    <img src={props.icon.clone()} alt={props.icon_alt.clone()} width="80" height="80" />
                </div>
                <div class="step-text" ref={text_ref}>
                    <h3>{ props.title.clone() }</h3>
                    <p class="step-paragraph">{ props.first_line.clone() }</p>
                    <p class="step-paragraph">{ props.second_line.clone() }</p>
                    if props.index == 0 {
                        <AnimatedButton
                            class="step-download"
                            onclick={store.open_popup_callback()}
                            hover={PropertySet::new().scale(1.05).shadow(10.0, 30.0, 0.3)}
                        >
                            {"Download"}
                        </AnimatedButton>
                    }
                </div>
            </article>
        </div>
    }
}
