use yew::prelude::*;

use crate::animation::ease::Ease;
use crate::animation::properties::PropertySet;
use crate::animation::step::{AnimationStep, Stagger};
use crate::animation::text::UnitKind;
use crate::components::button::AnimatedButton;
use crate::components::split_text::SplitText;
use crate::config;
use crate::dom::hooks::use_scroll_section;
use crate::dom::style::{element_children, html_element};
use crate::store::use_ui_store;

const HEADING: &str = "BUILD, HOST & LAUNCH DECENTRALIZED SITES";
const TAGLINE: &str = "Build locally, connect a SuiNS domain, and publish to Walrus, a \
censorship-resistant network. Walpress gives creators, DAOs, and developers the power to launch fast.";

/// The intro reveal. `actions` are the children of the actions row, which
/// include the hint, so the hint's own step only carries it the rest of the way.
pub fn reveal_steps<T>(hero: T, content: T, actions: Vec<T>, hint: T) -> Vec<AnimationStep<T>> {
    vec![
        AnimationStep::node(Some(hero))
            .from(PropertySet::new().opacity(0.0).scale(1.1))
            .to(PropertySet::new().opacity(1.0).scale(1.0))
            .duration(1.2)
            .ease(Ease::POWER3_OUT),
        AnimationStep::node(Some(content))
            .from(PropertySet::new().opacity(0.0).y(50.0))
            .to(PropertySet::new().opacity(1.0).y(0.0))
            .duration(0.8)
            .ease(Ease::POWER3_OUT)
            .overlap(0.8),
        AnimationStep::selector(".hero-heading .word")
            .from(PropertySet::new().opacity(0.0).y(50.0).rotation_x(-90.0))
            .to(PropertySet::new().opacity(1.0).y(0.0).rotation_x(0.0))
            .duration(0.8)
            .stagger(Stagger::Each(0.1))
            .ease(Ease::BACK_OUT)
            .overlap(0.6),
        AnimationStep::selector(".hero-tagline .word")
            .from(PropertySet::new().opacity(0.0).y(30.0))
            .to(PropertySet::new().opacity(1.0).y(0.0))
            .duration(0.6)
            .stagger(Stagger::Each(0.02))
            .ease(Ease::POWER2_OUT)
            .overlap(0.4),
        AnimationStep::nodes(actions)
            .from(PropertySet::new().opacity(0.0).y(30.0).scale(0.8))
            .to(PropertySet::new().opacity(1.0).y(0.0).scale(1.0))
            .duration(0.6)
            .stagger(Stagger::Each(0.1))
            .ease(Ease::BACK_OUT)
            .overlap(0.3),
        AnimationStep::node(Some(hint))
            .to(PropertySet::new().opacity(1.0).y(0.0))
            .duration(0.6)
            .ease(Ease::POWER2_OUT)
            .overlap(0.2),
    ]
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let store = use_ui_store();
    let site = config::site();
    let hero_ref = use_node_ref();
    let content_ref = use_node_ref();
    let actions_ref = use_node_ref();
    let hint_ref = use_node_ref();

    {
        let content_ref = content_ref.clone();
        let actions_ref = actions_ref.clone();
        let hint_ref = hint_ref.clone();
        use_scroll_section("hero", hero_ref.clone(), site.triggers.hero, move |hero| {
            let content = html_element(&content_ref)?;
            let actions = actions_ref.cast::<web_sys::Element>()?;
            let hint = html_element(&hint_ref)?;

            Some(reveal_steps(hero.clone(), content, element_children(&actions), hint))
        });
    }

    html! {
        <section id="hero" class="hero" ref={hero_ref}>
            <style>
                {r#"
                .hero {
                    position: relative;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    min-height: 100vh;
                    width: 100%;
                    overflow: hidden;
                    background: url('/hero.png') center / cover no-repeat;
                }
                .hero-content {
                    position: relative;
                    z-index: 10;
                    max-width: 56rem;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    text-align: center;
                }
                .hero-float {
                    animation: hero-float 3s ease-in-out infinite alternate;
                }
                @keyframes hero-float {
                    from { transform: translateY(0); }
                    to { transform: translateY(-10px); }
                }
                .hero-heading {
                    margin-bottom: 2rem;
                    font-size: clamp(2.25rem, 6vw, 4.5rem);
                    font-weight: 900;
                    color: #101828;
                    perspective: 600px;
                }
                .hero-tagline {
                    max-width: 56rem;
                    margin: 0 auto 3rem;
                    font-size: clamp(1.125rem, 2.2vw, 1.5rem);
                    font-weight: 500;
                    color: #1D2939;
                }
                .hero-actions {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 1.5rem;
                }
                .hero-buttons {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 1.5rem;
                }
                .hero-download {
                    border: none;
                    border-radius: 0.75rem;
                    background: #1e293b;
                    padding: 1rem 2rem;
                    font-size: 1.125rem;
                    font-weight: 600;
                    color: white;
                    cursor: pointer;
                }
                .hero-download:hover {
                    background: #334155;
                }
                .hero-github {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    border: 2px solid #d1d5db;
                    border-radius: 0.75rem;
                    background: white;
                    padding: 1rem 2rem;
                    font-size: 1.125rem;
                    font-weight: 600;
                    color: #374151;
                    text-decoration: none;
                }
                .hero-github svg {
                    width: 1.5rem;
                    height: 1.5rem;
                }
                .hero-hint {
                    position: relative;
                    z-index: 10;
                    font-size: 0.875rem;
                    color: #1D2939;
                    cursor: pointer;
                }
                "#}
            </style>
            <div class="hero-content" ref={content_ref}>
                <div class="hero-float">
                    <h2 class="hero-heading"><SplitText text={HEADING} /></h2>
                    <p class="hero-tagline"><SplitText text={TAGLINE} unit={UnitKind::Word} /></p>
                    <div class="hero-actions" ref={actions_ref}>
                        <div class="hero-buttons">
                            <AnimatedButton
                                class="hero-download"
                                onclick={store.open_popup_callback()}
                                hover={PropertySet::new().scale(1.05).shadow(10.0, 30.0, 0.3)}
                            >
                                {"Download"}
                            </AnimatedButton>
                            <AnimatedButton
                                class="hero-github"
                                href={site.links.github.clone()}
                                hover={PropertySet::new().scale(1.05).shadow(5.0, 20.0, 0.1)}
                            >
                                <svg viewBox="0 0 24 24" fill="currentColor" aria-hidden="true">
                                    <path d={GITHUB_ICON} />
                                </svg>
                                {"GITHUB"}
                            </AnimatedButton>
                        </div>
                        <p class="hero-hint" ref={hint_ref} onclick={store.open_popup_callback()}>
                            {"Download for MacOS (Silicon Chip)"}
                        </p>
                    </div>
                </div>
            </div>
        </section>
    }
}

pub const GITHUB_ICON: &str = "M12 0c-6.626 0-12 5.373-12 12 0 5.302 3.438 9.8 8.207 11.387.599.111.793-.261.793-.577v-2.234c-3.338.726-4.033-1.416-4.033-1.416-.546-1.387-1.333-1.756-1.333-1.756-1.089-.745.083-.729.083-.729 1.205.084 1.839 1.237 1.839 1.237 1.07 1.834 2.807 1.304 3.492.997.107-.775.418-1.305.762-1.604-2.665-.305-5.467-1.334-5.467-5.931 0-1.311.469-2.381 1.236-3.221-.124-.303-.535-1.524.117-3.176 0 0 1.008-.322 3.301 1.23.957-.266 1.983-.399 3.003-.404 1.02.005 2.047.138 3.006.404 2.291-1.552 3.297-1.23 3.297-1.23.653 1.653.242 2.874.118 3.176.77.84 1.235 1.911 1.235 3.221 0 4.609-2.807 5.624-5.479 5.921.43.372.823 1.102.823 2.222v3.293c0 .319.192.694.801.576 4.765-1.589 8.199-6.086 8.199-11.386 0-6.627-5.373-12-12-12z";
