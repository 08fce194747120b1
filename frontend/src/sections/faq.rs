use std::collections::BTreeSet;

use web_sys::HtmlElement;
use yew::prelude::*;

use crate::animation::ease::Ease;
use crate::animation::properties::PropertySet;
use crate::animation::step::{AnimationStep, Offset, Stagger};
use crate::components::button::AnimatedButton;
use crate::config;
use crate::dom::hooks::{use_hover, use_scroll_section};
use crate::dom::style::element_children;

struct Faq {
    question: &'static str,
    answer: &'static str,
}

const FAQS: [Faq; 7] = [
    Faq {
        question: "WHAT IS WALPRESS?",
        answer: "Walpress is a decentralized website builder that lets you build your frontend locally, connect \
a wallet-owned SuiNS domain, and deploy censorship-resistant content to the Walrus storage network. It's like \
WordPress, but for Web3.",
    },
    Faq {
        question: "DO I NEED TO KNOW HOW TO CODE?",
        answer: "No coding knowledge is required! Walpress provides an intuitive drag-and-drop interface that makes \
it easy for anyone to create professional websites. However, if you do know how to code, you can customize your \
site further with custom HTML, CSS, and JavaScript.",
    },
    Faq {
        question: "WHAT KIND OF SITES CAN I BUILD WITH WALPRESS?",
        answer: "You can build any type of website including blogs, portfolios, business websites, e-commerce \
stores, landing pages, and more. Walpress supports all the features you need for modern web development while \
maintaining decentralization.",
    },
    Faq {
        question: "WHAT IS SUINS?",
        answer: "SuiNS (Sui Name Service) is a decentralized domain name system built on the Sui blockchain. It \
allows you to register human-readable domain names that you truly own, without relying on traditional DNS \
providers.",
    },
    Faq {
        question: "IS THERE A COST TO USE WALPRESS?",
        answer: "Walpress itself is free to use. You only pay for blockchain transaction fees when registering \
domains or deploying content. These costs are minimal and much lower than traditional hosting services.",
    },
    Faq {
        question: "WHAT IS WALRUS?",
        answer: "Walrus is a decentralized storage network that provides censorship-resistant, permanent storage \
for your website content. It ensures your site remains accessible even if traditional hosting providers fail or \
censor content.",
    },
    Faq {
        question: "HOW IS THIS DIFFERENT FROM USING NETLIFY, VERCEL, OR AWS?",
        answer: "Unlike traditional hosting providers, Walpress offers true ownership and censorship resistance. \
Your content is stored on a decentralized network, you own your domain through blockchain technology, and no \
single entity can take down your site.",
    },
];

/// Which accordion items are expanded. Any number can be open at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenItems(BTreeSet<usize>);

impl Default for OpenItems {
    fn default() -> Self {
        Self(BTreeSet::from([0]))
    }
}

impl OpenItems {
    pub fn is_open(&self, index: usize) -> bool {
        self.0.contains(&index)
    }

    pub fn toggled(&self, index: usize) -> Self {
        let mut items = self.0.clone();
        if !items.remove(&index) {
            items.insert(index);
        }
        Self(items)
    }
}

/// Container fades up, then its children follow one by one.
fn cascade(container: &HtmlElement) -> Vec<AnimationStep<HtmlElement>> {
    vec![
        AnimationStep::node(Some(container.clone()))
            .from(PropertySet::new().opacity(0.0).y(50.0))
            .to(PropertySet::new().opacity(1.0).y(0.0))
            .duration(0.6),
        AnimationStep::nodes(element_children(container))
            .from(PropertySet::new().opacity(0.0).y(30.0))
            .to(PropertySet::new().opacity(1.0).y(0.0))
            .duration(0.5)
            .stagger(Stagger::Each(0.1))
            .offset(Offset::WithPrevious),
    ]
}

#[function_component(FaqSection)]
pub fn faq_section() -> Html {
    let open = use_state(OpenItems::default);
    let header_ref = use_node_ref();
    let list_ref = use_node_ref();
    let contact_ref = use_node_ref();
    let trigger = config::site().triggers.faq;

    use_scroll_section("faq header", header_ref.clone(), trigger, |header| Some(cascade(header)));
    use_scroll_section("faq list", list_ref.clone(), trigger, |list| Some(cascade(list)));
    use_scroll_section("faq contact", contact_ref.clone(), trigger, |contact| {
        let mut steps = cascade(contact);
        steps.push(
            AnimationStep::selector(".faq-avatar")
                .from(PropertySet::new().opacity(0.0).scale(0.0))
                .to(PropertySet::new().opacity(1.0).scale(1.0))
                .duration(0.5)
                .stagger(Stagger::Each(0.1))
                .ease(Ease::BACK_OUT)
                .offset(Offset::Absolute(0.1)),
        );
        Some(steps)
    });

    html! {
        <section id="resources" class="faq">
            <style>
                {r#"
                .faq {
                    background: #F6F5F0;
                    padding: 5rem 1rem;
                }
                .faq-inner {
                    max-width: 80rem;
                    margin: 0 auto;
                }
                .faq-header {
                    margin-bottom: 4rem;
                    text-align: center;
                }
                .faq-header h2 {
                    margin-bottom: 1rem;
                    font-size: clamp(2.25rem, 4vw, 3rem);
                    font-weight: 700;
                    color: #111827;
                }
                .faq-header p {
                    max-width: 42rem;
                    margin: 0 auto;
                    font-size: 1.125rem;
                    color: #4b5563;
                }
                .faq-list {
                    max-width: 56rem;
                    margin: 0 auto 5rem;
                }
                .faq-item {
                    border-bottom: 1px solid #e5e7eb;
                }
                .faq-item:last-child {
                    border-bottom: none;
                }
                .faq-question {
                    display: flex;
                    width: 100%;
                    align-items: center;
                    justify-content: space-between;
                    border: none;
                    background: none;
                    padding: 2rem 0;
                    text-align: left;
                    cursor: pointer;
                    transition: background-color 0.2s;
                }
                .faq-question:hover {
                    background: rgba(249, 250, 251, 0.5);
                }
                .faq-question:active {
                    transform: scale(0.99);
                }
                .faq-question span {
                    padding-right: 1rem;
                    font-size: 1.125rem;
                    font-weight: 600;
                    color: #111827;
                }
                .faq-sign {
                    font-size: 1.5rem;
                    color: #4b5563;
                }
                .faq-answer {
                    max-width: 48rem;
                    padding-bottom: 2rem;
                    line-height: 1.625;
                    color: #4b5563;
                    animation: faq-open 0.3s ease-out;
                }
                @keyframes faq-open {
                    from { opacity: 0; transform: translateY(-10px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                .faq-contact {
                    border-radius: 1rem;
                    background: white;
                    padding: 3rem;
                    text-align: center;
                    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                }
                .faq-avatars {
                    display: flex;
                    justify-content: center;
                    margin-bottom: 2rem;
                }
                .faq-avatar {
                    position: relative;
                    margin-left: -1rem;
                }
                .faq-avatar img {
                    border-radius: 9999px;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                }
                .faq-contact h3 {
                    margin-bottom: 1rem;
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: #111827;
                }
                .faq-contact p {
                    max-width: 28rem;
                    margin: 0 auto 2rem;
                    color: #4b5563;
                }
                .faq-contact-button {
                    border: none;
                    border-radius: 0.5rem;
                    background: #213B4D;
                    padding: 1rem 2rem;
                    font-weight: 600;
                    color: white;
                    cursor: pointer;
                }
                "#}
            </style>
            <div class="faq-inner">
                <div class="faq-header" ref={header_ref}>
                    <h2>{"FREQUENTLY ASKED QUESTIONS"}</h2>
                    <p>{"Everything you need to know about the product and billing."}</p>
                </div>
                <div class="faq-list" ref={list_ref}>
                    { for FAQS.iter().enumerate().map(|(index, faq)| {
                        let is_open = open.is_open(index);
                        let onclick = {
                            let open = open.clone();
                            Callback::from(move |_: MouseEvent| open.set(open.toggled(index)))
                        };
                        html! {
                            <div class="faq-item" key={index}>
                                <button class="faq-question" {onclick} aria-expanded={is_open.to_string()}>
                                    <span>{ faq.question }</span>
                                    <span class="faq-sign">{ if is_open { "\u{2212}" } else { "+" } }</span>
                                </button>
                                if is_open {
                                    <div class="faq-answer">{ faq.answer }</div>
                                }
                            </div>
                        }
                    }) }
                </div>
                <div class="faq-contact" ref={contact_ref}>
                    <div class="faq-avatars">
                        <Avatar src="/sfs.png" />
                        <Avatar src="/cus.png" />
                        <Avatar src="/cd.png" />
                    </div>
                    <h3>{"STILL HAVE QUESTIONS?"}</h3>
                    <p>{"Can't find the answer you're looking for? Please chat to our friendly team."}</p>
                    <AnimatedButton class="faq-contact-button" hover={PropertySet::new().scale(1.05)}>
                        {"Get in touch"}
                    </AnimatedButton>
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct AvatarProps {
    src: AttrValue,
}

#[function_component(Avatar)]
fn avatar(props: &AvatarProps) -> Html {
    let image_ref = use_node_ref();
    let hover = use_hover(image_ref.clone(), PropertySet::new().scale(1.1), Default::default());

    html! {
        <div class="faq-avatar">
            <img
                ref={image_ref}
                src={props.src.clone()}
                alt="Team member"
                width="60"
                height="60"
                onmouseenter={hover.enter}
                onmouseleave={hover.leave}
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_item_open_by_default() {
        let open = OpenItems::default();
        assert!(open.is_open(0));
        assert!(!open.is_open(1));
    }

    #[test]
    fn toggling_is_independent_per_item() {
        let open = OpenItems::default().toggled(2).toggled(0);
        assert!(!open.is_open(0));
        assert!(open.is_open(2));
        assert_eq!(open.toggled(2).toggled(2), open);
    }
}
