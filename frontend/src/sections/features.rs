use web_sys::MouseEvent;
use yew::prelude::*;

use crate::animation::ease::Ease;
use crate::animation::properties::PropertySet;
use crate::animation::step::{AnimationStep, Stagger};
use crate::config;
use crate::dom::hooks::{use_hover, use_scroll_section};
use crate::dom::style::html_element;

struct Feature {
    title: &'static str,
    description: &'static str,
    color: &'static str,
}

const FEATURES: [Feature; 6] = [
    Feature {
        title: "Local-First Site Builder",
        description: "Build websites directly on your device with no internet connection or account needed. \
Use a visual editor or code by hand. It's flexible, fast, and yours.",
        color: "#0D0D0D",
    },
    Feature {
        title: "Wallet-Owned Domains",
        description: "Claim your own .sui domain effortlessly with your wallet. Forget about registrars, \
KYC hassles, and renewal worries and enjoy true ownership on-chain with SuiNS.",
        color: "#FAC515",
    },
    Feature {
        title: "Decentralized Deployment",
        description: "Publish to Walrus, a censorship-resistant, decentralized storage network. No AWS or \
Vercel: your content lives across global nodes and can't be taken down.",
        color: "#53B1FD",
    },
    Feature {
        title: "AI-Powered Tools",
        description: "Effortlessly create stunning websites, craft engaging content, and design unique \
visuals using our integrated AI tools. Accelerate your launch while maintaining your vision.",
        color: "#9B8AFB",
    },
    Feature {
        title: "Modular Plugin System",
        description: "Extend your site with plugins, smart contracts, and UI components. Access a growing \
marketplace of tools tailored for all kinds of creators.",
        color: "#F97066",
    },
    Feature {
        title: "Transparent & Friendly Pricing",
        description: "Build for free. Pay only when you publish. AI and plugin utilities are available via \
microtransactions. No subscriptions, no hidden fees.",
        color: "#3CCB7F",
    },
];

#[function_component(FeaturesSection)]
pub fn features_section() -> Html {
    let section_ref = use_node_ref();
    let heading_ref = use_node_ref();
    let subtitle_ref = use_node_ref();

    {
        let heading_ref = heading_ref.clone();
        let subtitle_ref = subtitle_ref.clone();
        use_scroll_section(
            "features",
            section_ref.clone(),
            config::site().triggers.features,
            move |_| {
                Some(vec![
                    AnimationStep::node(Some(html_element(&heading_ref)?))
                        .from(PropertySet::new().opacity(0.0).y(50.0))
                        .to(PropertySet::new().opacity(1.0).y(0.0))
                        .duration(1.0)
                        .ease(Ease::POWER3_OUT),
                    AnimationStep::node(Some(html_element(&subtitle_ref)?))
                        .from(PropertySet::new().opacity(0.0).y(30.0))
                        .to(PropertySet::new().opacity(1.0).y(0.0))
                        .duration(0.8)
                        .ease(Ease::POWER3_OUT)
                        .overlap(0.5),
                    AnimationStep::selector(".feature-card")
                        .from(PropertySet::new().opacity(0.0).y(60.0).scale(0.9))
                        .to(PropertySet::new().opacity(1.0).y(0.0).scale(1.0))
                        .duration(0.8)
                        .ease(Ease::POWER3_OUT)
                        .stagger(Stagger::Amount(0.6))
                        .overlap(0.3),
                ])
            },
        );
    }

    html! {
        <section id="products" class="features" ref={section_ref}>
            <style>
                {r#"
                .features {
                    background: #f9fafb;
                    padding: 6rem 2rem;
                }
                .features-inner {
                    max-width: 80rem;
                    margin: 0 auto;
                }
                .features-header {
                    margin-bottom: 4rem;
                    text-align: center;
                }
                .features-header h2 {
                    margin-bottom: 1.5rem;
                    font-size: clamp(2.25rem, 5vw, 3.75rem);
                    font-weight: 700;
                    letter-spacing: -0.025em;
                    color: #111827;
                }
                .features-header p {
                    max-width: 56rem;
                    margin: 0 auto;
                    font-size: 1.25rem;
                    line-height: 1.625;
                    color: #374151;
                }
                .features-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(18rem, 1fr));
                    gap: 2rem;
                }
                .feature-card-body {
                    display: flex;
                    height: 100%;
                    flex-direction: column;
                    align-items: flex-start;
                    border-radius: 1rem;
                    padding: 2rem;
                    cursor: pointer;
                }
                .feature-icon {
                    width: 4rem;
                    height: 4rem;
                    margin-bottom: 1.5rem;
                }
                .feature-card-body h3 {
                    margin-bottom: 1rem;
                    font-size: 1.25rem;
                    font-weight: 600;
                    color: white;
                }
                .feature-card-body p {
                    line-height: 1.625;
                    color: white;
                }
                "#}
            </style>
            <div class="features-inner">
                <div class="features-header">
                    <h2 ref={heading_ref}>{"WE HAVE EVERYTHING YOU NEED"}</h2>
                    <p ref={subtitle_ref}>
                        {"Walpress gives you all the tools to build, own, and publish your Web3 presence. \
No extra platforms, no middlemen, no compromises."}
                    </p>
                </div>
                <div class="features-grid">
                    { for FEATURES.iter().enumerate().map(|(index, feature)| html! {
                        <FeatureCard
                            key={index}
                            index={index}
                            title={feature.title}
                            description={feature.description}
                            color={feature.color}
                        />
                    }) }
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct FeatureCardProps {
    pub index: usize,
    pub title: AttrValue,
    pub description: AttrValue,
    pub color: AttrValue,
}

/// The outer element belongs to the scroll reveal, the body to the hover
/// lift, so the two timelines never write the same transform.
#[function_component(FeatureCard)]
pub fn feature_card(props: &FeatureCardProps) -> Html {
    let body_ref = use_node_ref();
    let icon_ref = use_node_ref();
    let lift = use_hover(body_ref.clone(), PropertySet::new().y(-8.0).scale(1.02), Default::default());
    let icon = use_hover(icon_ref.clone(), PropertySet::new().scale(1.1).rotation(5.0), Default::default());

    let onmouseenter = {
        let (lift, icon) = (lift.enter, icon.enter);
        Callback::from(move |e: MouseEvent| {
            lift.emit(e.clone());
            icon.emit(e);
        })
    };
    let onmouseleave = {
        let (lift, icon) = (lift.leave, icon.leave);
        Callback::from(move |e: MouseEvent| {
            lift.emit(e.clone());
            icon.emit(e);
        })
    };

    html! {
        <div class="feature-card">
            <div
                class="feature-card-body"
                style={format!("background-color: {};", props.color)}
                ref={body_ref}
                {onmouseenter}
                {onmouseleave}
            >
                <img
                    class="feature-icon"
                    ref={icon_ref}
                    src={format!("/cad{}.png", props.index + 1)}
                    alt={props.title.clone()}
                    width="64"
                    height="64"
                />
                <h3>{ props.title.clone() }</h3>
                <p>{ props.description.clone() }</p>
            </div>
        </div>
    }
}
