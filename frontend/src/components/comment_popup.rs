use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, Node};
use yew::prelude::*;

use crate::animation::ease::{Ease, EaseDirection};
use crate::animation::properties::PropertySet;
use crate::animation::step::AnimationStep;
use crate::animation::timeline::{compose, Direction};
use crate::config;
use crate::dom::listener::EventListener;
use crate::dom::section::TimelinePlayer;
use crate::dom::style::{html_element, set_style};
use crate::store::use_ui_store;

/// Delay before an outside click may close the popup, so the click that
/// opened it doesn't.
const OUTSIDE_CLICK_ARM_MS: u32 = 100;

fn card_hidden() -> PropertySet {
    PropertySet::new().opacity(0.0).scale(0.7).x(50.0).y(50.0)
}

fn card_shown() -> PropertySet {
    PropertySet::new().opacity(1.0).scale(1.0).x(0.0).y(0.0)
}

/// The transition for opening (`open`) or closing the popup. On mobile the
/// content is a bottom sheet, on desktop a corner card.
pub fn popup_steps<T: Clone>(open: bool, mobile: bool, overlay: &T, content: &T) -> Vec<AnimationStep<T>> {
    let overlay_opacity = if mobile { 1.0 } else { 0.3 };
    let overlay_shown = PropertySet::new().opacity(overlay_opacity);
    let overlay_hidden = PropertySet::new().opacity(0.0);

    match (open, mobile) {
        (true, true) => vec![
            AnimationStep::node(Some(overlay.clone()))
                .from(overlay_hidden)
                .to(overlay_shown)
                .duration(0.3)
                .ease(Ease::POWER2_OUT),
            AnimationStep::node(Some(content.clone()))
                .from(PropertySet::new().y_percent(100.0))
                .to(PropertySet::new().y_percent(0.0))
                .duration(0.5)
                .ease(Ease::POWER3_OUT)
                .overlap(0.2),
        ],
        (true, false) => vec![
            AnimationStep::node(Some(overlay.clone()))
                .from(overlay_hidden)
                .to(overlay_shown)
                .duration(0.3)
                .ease(Ease::POWER2_OUT),
            AnimationStep::node(Some(content.clone()))
                .from(card_hidden())
                .to(card_shown())
                .duration(0.5)
                .ease(Ease::BACK_OUT)
                .overlap(0.2),
        ],
        (false, true) => vec![
            AnimationStep::node(Some(content.clone()))
                .from(PropertySet::new().y_percent(0.0))
                .to(PropertySet::new().y_percent(100.0))
                .duration(0.4)
                .ease(Ease::POWER3_IN),
            AnimationStep::node(Some(overlay.clone()))
                .from(overlay_shown)
                .to(overlay_hidden)
                .duration(0.3)
                .overlap(0.2),
        ],
        (false, false) => vec![
            AnimationStep::node(Some(content.clone()))
                .from(card_shown())
                .to(card_hidden())
                .duration(0.3)
                .ease(Ease::POWER3_IN),
            AnimationStep::node(Some(overlay.clone()))
                .from(overlay_shown)
                .to(overlay_hidden)
                .duration(0.2)
                .overlap(0.2),
        ],
    }
}

fn download_press(button: HtmlElement) -> Vec<AnimationStep<HtmlElement>> {
    vec![
        AnimationStep::node(Some(button.clone()))
            .from(PropertySet::new().scale(1.0))
            .to(PropertySet::new().scale(0.95))
            .duration(0.1)
            .ease(Ease::POWER2_OUT),
        AnimationStep::node(Some(button))
            .from(PropertySet::new().scale(0.95))
            .to(PropertySet::new().scale(1.0))
            .duration(0.1)
            .ease(Ease::Power(2, EaseDirection::In)),
    ]
}

fn no_selectors(_: &str) -> Vec<HtmlElement> {
    Vec::new()
}

#[function_component(CommentPopup)]
pub fn comment_popup() -> Html {
    let store = use_ui_store();
    let popup_ref = use_node_ref();
    let overlay_ref = use_node_ref();
    let content_ref = use_node_ref();
    let download_ref = use_node_ref();
    let player: Rc<RefCell<Option<TimelinePlayer>>> = use_mut_ref(|| None);
    let press: Rc<RefCell<Option<TimelinePlayer>>> = use_mut_ref(|| None);
    // The closing transition only makes sense after the popup has been shown.
    let shown_once = use_mut_ref(|| false);

    {
        let deps = (store.popup_open(), store.is_mobile());
        let store = store.clone();
        let popup_ref = popup_ref.clone();
        let overlay_ref = overlay_ref.clone();
        let content_ref = content_ref.clone();
        use_effect_with_deps(
            move |&(open, mobile): &(bool, bool)| {
                let elements = (html_element(&popup_ref), html_element(&overlay_ref), html_element(&content_ref));
                let mut arming = None;
                let outside_click: Rc<RefCell<Option<EventListener>>> = Rc::new(RefCell::new(None));

                match elements {
                    (Some(popup), Some(overlay), Some(content)) => {
                        if open {
                            *shown_once.borrow_mut() = true;
                            set_style(&popup, "visibility", "visible");
                        }
                        if open || *shown_once.borrow() {
                            let timeline = compose(popup_steps(open, mobile, &overlay, &content), &no_selectors);
                            let next = TimelinePlayer::new(timeline, move |direction| {
                                if !open && direction == Direction::Forward {
                                    set_style(&popup, "visibility", "hidden");
                                }
                            });
                            next.play();
                            *player.borrow_mut() = Some(next);
                        }

                        if open {
                            let outside_click = outside_click.clone();
                            arming = Some(Timeout::new(OUTSIDE_CLICK_ARM_MS, move || {
                                let content: Node = content.into();
                                *outside_click.borrow_mut() = EventListener::on_document("mousedown", move |event| {
                                    let inside = event
                                        .target()
                                        .and_then(|target| target.dyn_into::<Node>().ok())
                                        .map_or(false, |target| content.contains(Some(&target)));
                                    if !inside {
                                        store.close_popup();
                                    }
                                });
                            }));
                        }
                    }
                    _ => warn!("comment popup not rendered"),
                }

                move || {
                    drop(arming);
                    outside_click.borrow_mut().take();
                }
            },
            deps,
        );
    }

    let on_download = {
        let download_ref = download_ref.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(button) = html_element(&download_ref) {
                let next = TimelinePlayer::new(compose(download_press(button), &no_selectors), |_| {});
                next.play();
                *press.borrow_mut() = Some(next);
            }
            info!("Starting download...");
            let url = &config::site().links.download;
            if let Some(window) = web_sys::window() {
                if let Err(err) = window.open_with_url_and_target(url, "_blank") {
                    warn!("failed to open {}: {:?}", url, err);
                }
            }
        })
    };

    html! {
        <div
            class={classes!("comment-popup", store.is_mobile().then_some("mobile"))}
            ref={popup_ref}
        >
            <style>
                {r#"
                .comment-popup {
                    position: fixed;
                    inset: 0;
                    z-index: 50;
                    display: flex;
                    align-items: flex-end;
                    justify-content: flex-end;
                    padding: 1.5rem;
                    visibility: hidden;
                    pointer-events: none;
                }
                .comment-popup.mobile {
                    justify-content: flex-start;
                    padding: 0;
                }
                .comment-popup-overlay {
                    position: absolute;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.5);
                    opacity: 0;
                }
                .comment-popup-content {
                    position: relative;
                    z-index: 10;
                    width: 24rem;
                    border-radius: 1rem;
                    background: white;
                    color: #111827;
                    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                    pointer-events: auto;
                }
                .comment-popup.mobile .comment-popup-content {
                    width: 100%;
                    max-width: 28rem;
                    border-radius: 1rem 1rem 0 0;
                }
                .comment-popup-head {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    border-bottom: 1px solid #374151;
                    padding: 1rem;
                }
                .comment-popup-head h3 {
                    font-size: 1.125rem;
                    font-weight: 600;
                }
                .comment-popup-head button {
                    border: none;
                    border-radius: 0.5rem;
                    background: none;
                    padding: 0.375rem;
                    cursor: pointer;
                    transition: background-color 0.2s;
                }
                .comment-popup-head button:hover {
                    background: #374151;
                }
                .comment-popup-body {
                    padding: 1rem;
                    font-size: 0.875rem;
                    line-height: 1.625;
                    color: #1f2937;
                }
                .comment-popup-body p + p {
                    margin-top: 0.75rem;
                }
                .comment-popup-foot {
                    border-top: 1px solid #374151;
                    padding: 1rem;
                }
                .download-button {
                    display: flex;
                    width: 100%;
                    align-items: center;
                    justify-content: center;
                    gap: 0.5rem;
                    border: none;
                    border-radius: 0.5rem;
                    background: #1D2939;
                    padding: 0.75rem 1rem;
                    font-weight: 600;
                    color: white;
                    cursor: pointer;
                    transition: background-color 0.2s;
                }
                .download-button:hover {
                    background: #1d4ed8;
                }
                "#}
            </style>
            <div class="comment-popup-overlay" ref={overlay_ref}></div>
            <div class="comment-popup-content" ref={content_ref}>
                <div class="comment-popup-head">
                    <h3>{"Comment"}</h3>
                    <div>
                        <button aria-label="Minimize" onclick={store.close_popup_callback()}>{"\u{2013}"}</button>
                        <button aria-label="Close" onclick={store.close_popup_callback()}>{"\u{2715}"}</button>
                    </div>
                </div>
                <div class="comment-popup-body">
                    <p>
                        {"This app is currently in its "}
                        <strong>{"Proof of Concept (POC)"}</strong>
                        {" stage. Things might break, behave unexpectedly, or change without notice. We're actively \
                          testing and improving, thanks for your patience!"}
                    </p>
                    <p>{"Continue to download the latest desktop build."}</p>
                </div>
                <div class="comment-popup-foot">
                    <button class="download-button" ref={download_ref} onclick={on_download}>
                        {"Continue to Download"}
                    </button>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::properties::Property;
    use crate::animation::timeline::tests::Recorder;
    use crate::animation::timeline::Advance;

    fn run(open: bool, mobile: bool, overlay: &Recorder, content: &Recorder) -> f64 {
        let steps = popup_steps(open, mobile, overlay, content);
        let mut timeline = compose(steps, &|_: &str| Vec::<Recorder>::new());
        let duration = timeline.duration();
        timeline.play();
        while timeline.advance(1.0 / 60.0) == Advance::Running {}
        duration
    }

    #[test]
    fn mobile_sheet_slides_up_and_back_down() {
        let overlay = Recorder::new("overlay");
        let content = Recorder::new("content");

        let opening = run(true, true, &overlay, &content);
        assert!((opening - 0.6).abs() < 1e-9);
        assert_eq!(overlay.get(Property::Opacity), Some(1.0));
        assert_eq!(content.get(Property::YPercent), Some(0.0));

        run(false, true, &overlay, &content);
        assert_eq!(overlay.get(Property::Opacity), Some(0.0));
        assert_eq!(content.get(Property::YPercent), Some(100.0));
    }

    #[test]
    fn desktop_card_dims_page_lightly() {
        let overlay = Recorder::new("overlay");
        let content = Recorder::new("content");

        run(true, false, &overlay, &content);
        assert_eq!(overlay.get(Property::Opacity), Some(0.3));
        assert_eq!(content.get(Property::Scale), Some(1.0));
        assert_eq!(content.get(Property::X), Some(0.0));

        let closing = run(false, false, &overlay, &content);
        assert!((closing - 0.3).abs() < 1e-9);
        assert_eq!(content.get(Property::Scale), Some(0.7));
        assert_eq!(content.get(Property::Opacity), Some(0.0));
    }

    #[test]
    fn opening_starts_from_hidden_state() {
        let overlay = Recorder::new("overlay");
        let content = Recorder::new("content");
        let _timeline = compose(popup_steps(true, false, &overlay, &content), &|_: &str| Vec::<Recorder>::new());

        assert_eq!(overlay.get(Property::Opacity), Some(0.0));
        assert_eq!(content.get(Property::Scale), Some(0.7));
        assert_eq!(content.get(Property::Y), Some(50.0));
    }
}
