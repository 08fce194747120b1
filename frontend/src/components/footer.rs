use yew::prelude::*;

use crate::animation::ease::{Ease, EaseDirection};
use crate::animation::hover::HoverConfig;
use crate::animation::properties::{PropertySet, Rgba};
use crate::animation::step::{AnimationStep, Stagger};
use crate::animation::text::UnitKind;
use crate::components::button::AnimatedButton;
use crate::components::split_text::SplitText;
use crate::config;
use crate::dom::hooks::use_scroll_section;
use crate::dom::style::{element_children, html_element};
use crate::sections::hero::GITHUB_ICON;

const TAGLINE: &str = "Empowering creators to own their digital presence without intermediaries.";

const LOGO_EASE: Ease = Ease::ElasticOut { amplitude: 1.0, period: 0.5 };

const TWITTER_ICON: &str = "M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6 2.2.1 4.4-.6 6-2C3 15.5.5 9.6 3 5c2.2 2.6 5.6 \
4.1 9 4-.9-4.2 4-6.6 7-3.8 1.1 0 3-1.2 3-1.2z";
const YOUTUBE_ICON: &str = "M2.5 17a24.12 24.12 0 0 1 0-10 2 2 0 0 1 1.4-1.4 49.56 49.56 0 0 1 16.2 0A2 2 0 0 1 \
21.5 7a24.12 24.12 0 0 1 0 10 2 2 0 0 1-1.4 1.4 49.55 49.55 0 0 1-16.2 0A2 2 0 0 1 2.5 17M10 15l5-3-5-3z";

struct Social {
    label: &'static str,
    href: String,
    icon: &'static str,
    rotation: f64,
    color: Rgba,
}

fn socials() -> [Social; 3] {
    let links = &config::site().links;
    [
        Social {
            label: "Twitter",
            href: links.twitter.clone(),
            icon: TWITTER_ICON,
            rotation: 10.0,
            color: Rgba::rgb(0x1d, 0xa1, 0xf2),
        },
        Social {
            label: "GitHub",
            href: links.github.clone(),
            icon: GITHUB_ICON,
            rotation: -10.0,
            color: Rgba::rgb(0x33, 0x33, 0x33),
        },
        Social {
            label: "YouTube",
            href: links.youtube.clone(),
            icon: YOUTUBE_ICON,
            rotation: 5.0,
            color: Rgba::rgb(0xff, 0x00, 0x00),
        },
    ]
}

/// Fixed positions for the drifting background dots.
const DOTS: [(u8, u8, f32); 5] = [(12, 20, 3.4), (78, 15, 4.1), (35, 70, 3.0), (88, 60, 4.6), (55, 35, 3.8)];

#[function_component(Footer)]
pub fn footer() -> Html {
    let footer_ref = use_node_ref();
    let logo_ref = use_node_ref();
    let social_ref = use_node_ref();
    let copyright_ref = use_node_ref();

    {
        let logo_ref = logo_ref.clone();
        let social_ref = social_ref.clone();
        let copyright_ref = copyright_ref.clone();
        use_scroll_section("footer", footer_ref.clone(), config::site().triggers.footer, move |_| {
            let social = social_ref.cast::<web_sys::Element>()?;

            Some(vec![
                AnimationStep::node(Some(html_element(&logo_ref)?))
                    .from(PropertySet::new().opacity(0.0).scale(0.0).rotation(-360.0))
                    .to(PropertySet::new().opacity(1.0).scale(1.0).rotation(0.0))
                    .duration(1.2)
                    .ease(LOGO_EASE),
                AnimationStep::selector(".footer-tagline .char")
                    .from(PropertySet::new().opacity(0.0).y(50.0).rotation(15.0))
                    .to(PropertySet::new().opacity(1.0).y(0.0).rotation(0.0))
                    .duration(0.05)
                    .stagger(Stagger::Each(0.02))
                    .ease(Ease::POWER2_OUT)
                    .overlap(0.6),
                AnimationStep::nodes(element_children(&social))
                    .from(PropertySet::new().opacity(0.0).scale(0.0).y(30.0))
                    .to(PropertySet::new().opacity(1.0).scale(1.0).y(0.0))
                    .duration(0.6)
                    .stagger(Stagger::Each(0.15))
                    .ease(Ease::Back(EaseDirection::Out, 2.0))
                    .overlap(0.4),
                AnimationStep::node(Some(html_element(&copyright_ref)?))
                    .from(PropertySet::new().opacity(0.0).y(30.0).skew_y(5.0))
                    .to(PropertySet::new().opacity(1.0).y(0.0).skew_y(0.0))
                    .duration(0.8)
                    .ease(Ease::POWER3_OUT)
                    .overlap(0.3),
            ])
        });
    }

    html! {
        <footer class="site-footer" ref={footer_ref}>
            <style>
                {r#"
                .site-footer {
                    position: relative;
                    overflow: hidden;
                    background: linear-gradient(to bottom, #f9fafb, #f3f4f6);
                    padding: 5rem 1rem;
                }
                .footer-dot {
                    position: absolute;
                    width: 0.5rem;
                    height: 0.5rem;
                    border-radius: 9999px;
                    background: #e2e8f0;
                    opacity: 0.3;
                    animation: footer-drift ease-in-out infinite alternate;
                }
                @keyframes footer-drift {
                    to { translate: 10px -20px; }
                }
                .footer-content {
                    position: relative;
                    z-index: 10;
                    display: flex;
                    max-width: 42rem;
                    margin: 0 auto;
                    flex-direction: column;
                    gap: 2.5rem;
                    text-align: center;
                }
                .footer-logo {
                    display: flex;
                    justify-content: center;
                }
                .footer-tagline {
                    max-width: 32rem;
                    margin: 0 auto;
                    font-size: 1.25rem;
                    font-weight: 500;
                    line-height: 1.625;
                    color: #4b5563;
                }
                .footer-social {
                    display: flex;
                    justify-content: center;
                    gap: 2rem;
                }
                .footer-social-link {
                    display: flex;
                    width: 3.5rem;
                    height: 3.5rem;
                    align-items: center;
                    justify-content: center;
                    border: 1px solid #f3f4f6;
                    border-radius: 9999px;
                    background: white;
                    color: #374151;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                }
                .footer-copyright {
                    font-size: 0.875rem;
                    font-weight: 600;
                    letter-spacing: 0.05em;
                    color: #6b7280;
                }
                "#}
            </style>
            <div class="footer-background">
                { for DOTS.iter().map(|&(left, top, duration)| html! {
                    <div
                        class="footer-dot"
                        style={format!("left: {left}%; top: {top}%; animation-duration: {duration}s;")}
                    ></div>
                }) }
            </div>
            <div class="footer-content">
                <div class="footer-logo" ref={logo_ref}>
                    <img src="/footer_logo.png" alt="Walpress" width="80" height="80" />
                </div>
                <p class="footer-tagline">
                    <SplitText text={TAGLINE} unit={UnitKind::Char} />
                </p>
                <div class="footer-social" ref={social_ref}>
                    { for socials().into_iter().map(|social| html! {
                        <div class="footer-social-item" key={social.label}>
                            <AnimatedButton
                                class="footer-social-link"
                                href={AttrValue::from(social.href)}
                                hover={PropertySet::new()
                                    .scale(1.3)
                                    .rotation(social.rotation)
                                    .background(social.color)}
                                hover_config={HoverConfig::default()
                                    .with_rest(PropertySet::new().background(Rgba::WHITE))}
                            >
                                <svg width="24" height="24" viewBox="0 0 24 24" fill="none"
                                    stroke="currentColor" stroke-width="2" aria-label={social.label}>
                                    <path d={social.icon} />
                                </svg>
                            </AnimatedButton>
                        </div>
                    }) }
                </div>
                <p class="footer-copyright" ref={copyright_ref}>
                    {"\u{a9} WALPRESS 2025. ALL RIGHTS RESERVED."}
                </p>
            </div>
        </footer>
    }
}
