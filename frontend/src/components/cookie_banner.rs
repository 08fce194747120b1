use gloo_timers::callback::Timeout;
use log::info;
use yew::prelude::*;

use crate::config;
use crate::consent::{load_consent, should_show_banner, store_consent, ConsentStatus};

#[function_component(CookieBanner)]
pub fn cookie_banner() -> Html {
    let visible = use_state(|| should_show_banner(load_consent()));
    let slid_in = use_state(|| false);

    {
        let slid_in = slid_in.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(config::site().consent.banner_delay_ms, move || slid_in.set(true));
                move || drop(timeout)
            },
            (),
        );
    }

    let answer = |status: ConsentStatus| {
        let visible = visible.clone();
        Callback::from(move |_: MouseEvent| {
            store_consent(status, &config::site().consent);
            info!("cookie consent {}", status);
            visible.set(false);
        })
    };

    if !*visible {
        return html! {};
    }

    html! {
        <div class={classes!("cookie-banner", slid_in.then_some("loaded"))}>
            <style>
                {r#"
                .cookie-banner {
                    position: fixed;
                    bottom: 1.25rem;
                    left: 50%;
                    z-index: 99999;
                    display: flex;
                    width: 100%;
                    max-width: 90%;
                    align-items: center;
                    justify-content: space-between;
                    gap: 1rem;
                    border-radius: 1.5rem;
                    background: #111827;
                    padding: 1.5rem 2rem;
                    color: white;
                    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.5);
                    opacity: 0;
                    transform: translate(-50%, 300px);
                    transition: all 0.3s;
                }
                .cookie-banner.loaded {
                    opacity: 1;
                    transform: translate(-50%, 0);
                    transition-duration: 0.7s;
                }
                .cookie-banner p {
                    font-size: 0.875rem;
                    font-weight: 300;
                    color: #e5e7eb;
                }
                .cookie-banner-actions {
                    display: flex;
                    flex-shrink: 0;
                    gap: 0.5rem;
                }
                .cookie-banner-actions button {
                    border-radius: 1.5rem;
                    padding: 0.75rem 2rem;
                    font-size: 0.875rem;
                    cursor: pointer;
                }
                .cookie-decline {
                    border: 1px solid #9ca3af;
                    background: transparent;
                    color: #e5e7eb;
                }
                .cookie-decline:hover {
                    background: #1f2937;
                    color: white;
                }
                .cookie-accept {
                    border: none;
                    background: #f3f4f6;
                    color: #111827;
                }
                .cookie-accept:hover {
                    background: white;
                }
                @media (max-width: 639px) {
                    .cookie-banner {
                        max-width: 95%;
                        flex-direction: column;
                        border-radius: 1rem;
                        padding: 0.75rem 1rem;
                    }
                    .cookie-banner p {
                        font-size: 10px;
                    }
                }
                "#}
            </style>
            <p>
                {"We use cookies and similar technologies to enhance your experience, improve functionality, \
                  analyze performance, and deliver targeted advertisements. Learn more by reviewing our terms \
                  and policies."}
            </p>
            <div class="cookie-banner-actions">
                <button class="cookie-decline" onclick={answer(ConsentStatus::Declined)}>{"Decline"}</button>
                <button class="cookie-accept" onclick={answer(ConsentStatus::Accepted)}>{"Accept"}</button>
            </div>
        </div>
    }
}
