use web_sys::{Element, HtmlElement};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::animation::ease::{Ease, EaseDirection};
use crate::animation::properties::PropertySet;
use crate::animation::step::{AnimationStep, Offset};
use crate::animation::timeline::compose;
use crate::dom::resize::window_viewport;
use crate::dom::section::TimelinePlayer;
use crate::dom::style::html_element;
use crate::viewport::{gallery_offset, scroll_progress};

struct UseCase {
    title: &'static str,
    description: &'static str,
    image: &'static str,
}

const USE_CASES: [UseCase; 5] = [
    UseCase {
        title: "Meme Creators",
        description: "Create viral meme pages that can't be banned or taken down. Go live fast and stay \
online forever, even when the internet tries to cancel you.",
        image: "/use1.png",
    },
    UseCase {
        title: "INDEPENDENT JOURNALISTS",
        description: "Publish stories, reports, or leaks without fear of takedowns. Host your words on \
censorship-resistant infrastructure, and link it all to a self-owned domain.",
        image: "/use2.png",
    },
    UseCase {
        title: "Hobby Writers & Bloggers",
        description: "Write what you want, how you want. Walpress gives you a simple way to create personal \
blogs that aren't subject to platform rules or algorithm shifts.",
        image: "/use3.png",
    },
    UseCase {
        title: "Researchers & Academics",
        description: "Distribute whitepapers, findings, and data without the red tape. Use Walpress to \
preserve your work on decentralized infrastructure, immutable and permanent.",
        image: "/use4.png",
    },
    UseCase {
        title: "DAOs & Token Projects",
        description: "Launch clean, fast landing pages for tokens, DAOs, or governance hubs, all without \
centralized hosting or registrar lock-in. Own your frontend like you own your smart contracts.",
        image: "/use2.png",
    },
];

/// A 300vh track with a pinned strip of cards that slides left as the track
/// scrolls past.
#[function_component(UseCaseSection)]
pub fn use_case_section() -> Html {
    let track_ref = use_node_ref();
    // Re-render on every scroll so the strip follows.
    let _scroll = use_window_scroll();

    let offset = track_ref
        .cast::<Element>()
        .zip(window_viewport())
        .map(|(track, viewport)| {
            let rect = track.get_bounding_client_rect();
            gallery_offset(scroll_progress(rect.top(), rect.height(), viewport.height))
        })
        .unwrap_or_else(|| gallery_offset(0.0));

    html! {
        <section id="use-case" class="use-case">
            <style>
                {r#"
                .use-case {
                    position: relative;
                    width: 100%;
                    max-width: 1500px;
                    margin: 0 auto;
                }
                .use-case-header {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    padding: 0 1rem;
                    text-align: center;
                }
                .use-case-header h2 {
                    margin-bottom: 2rem;
                    font-size: clamp(2.25rem, 5vw, 3.75rem);
                    font-weight: 700;
                    color: #111827;
                }
                .use-case-header p {
                    max-width: 48rem;
                    font-size: 1.25rem;
                    line-height: 1.625;
                    color: #1f2937;
                }
                .use-case-track {
                    position: relative;
                    height: 300vh;
                }
                .use-case-pin {
                    position: sticky;
                    top: 0;
                    display: flex;
                    height: 100vh;
                    align-items: center;
                    overflow: hidden;
                }
                .use-case-strip {
                    display: flex;
                    width: 100%;
                }
                .use-case-card {
                    display: flex;
                    min-width: 1440px;
                    overflow: hidden;
                }
                .use-case-copy {
                    display: flex;
                    flex: 1;
                    flex-direction: column;
                    justify-content: center;
                    padding: 3rem;
                }
                .use-case-copy h2 {
                    margin-bottom: 1.5rem;
                    font-size: clamp(1.5rem, 3vw, 2.25rem);
                    font-weight: 700;
                    color: #111827;
                }
                .use-case-copy p {
                    font-size: 1.125rem;
                    line-height: 1.625;
                    color: #4b5563;
                }
                .use-case-image {
                    display: flex;
                    flex: 1;
                    min-height: 420px;
                    align-items: center;
                    justify-content: center;
                }
                .use-case-image img {
                    max-width: 100%;
                    object-fit: cover;
                }
                @media (max-width: 1023px) {
                    .use-case-card { min-width: 680px; flex-direction: column; }
                }
                @media (max-width: 767px) {
                    .use-case-card { min-width: 380px; }
                }
                "#}
            </style>
            <div class="use-case-header">
                <h2>{"Use case"}</h2>
                <p>
                    {"Walpress is designed for creators, communities, and developers who need freedom, speed, \
and full control. Whether you're launching a meme token or publishing independent research, Walpress \
keeps your site truly yours."}
                </p>
            </div>
            <div class="use-case-track" ref={track_ref}>
                <div class="use-case-pin">
                    <div class="use-case-strip" style={format!("transform: translateX({offset}%);")}>
                        { for USE_CASES.iter().map(|case| html! {
                            <UseCaseCard
                                key={case.title}
                                title={case.title}
                                description={case.description}
                                image={case.image}
                            />
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct UseCaseCardProps {
    pub title: AttrValue,
    pub description: AttrValue,
    pub image: AttrValue,
}

/// Plays its entrance once, as soon as it is mounted.
#[function_component(UseCaseCard)]
pub fn use_case_card(props: &UseCaseCardProps) -> Html {
    let card_ref = use_node_ref();
    let copy_ref = use_node_ref();
    let title_ref = use_node_ref();
    let description_ref = use_node_ref();
    let image_ref = use_node_ref();

    {
        let refs = [
            card_ref.clone(),
            copy_ref.clone(),
            title_ref.clone(),
            description_ref.clone(),
            image_ref.clone(),
        ];
        use_effect_with_deps(
            move |refs: &[NodeRef; 5]| {
                let [card, copy, title, description, image] = refs;
                let ease = Ease::Power(1, EaseDirection::Out);
                let entrance = |node: &NodeRef, from: PropertySet, to: PropertySet, at: f64| {
                    AnimationStep::node(html_element(node))
                        .from(from)
                        .to(to)
                        .duration(0.6)
                        .ease(ease)
                        .offset(Offset::Absolute(at))
                };
                let steps = vec![
                    entrance(card, PropertySet::new().opacity(0.0).y(50.0), PropertySet::new().opacity(1.0).y(0.0), 0.0),
                    entrance(copy, PropertySet::new().opacity(0.0).x(-30.0), PropertySet::new().opacity(1.0).x(0.0), 0.2),
                    entrance(title, PropertySet::new().opacity(0.0).y(20.0), PropertySet::new().opacity(1.0).y(0.0), 0.3),
                    entrance(
                        description,
                        PropertySet::new().opacity(0.0).y(20.0),
                        PropertySet::new().opacity(1.0).y(0.0),
                        0.4,
                    ),
                    entrance(image, PropertySet::new().opacity(0.0).x(30.0), PropertySet::new().opacity(1.0).x(0.0), 0.2),
                ];
                let player = TimelinePlayer::new(compose(steps, &|_: &str| Vec::<HtmlElement>::new()), |_| {});
                player.play();
                move || drop(player)
            },
            refs,
        );
    }

    html! {
        <div class="use-case-card" ref={card_ref}>
            <div class="use-case-copy" ref={copy_ref}>
                <h2 ref={title_ref}>{ props.title.clone() }</h2>
                <p ref={description_ref}>{ props.description.clone() }</p>
            </div>
            <div class="use-case-image" ref={image_ref}>
                <img src={props.image.clone()} alt="illustration" width="688" height="420" loading="lazy" />
            </div>
        </div>
    }
}
