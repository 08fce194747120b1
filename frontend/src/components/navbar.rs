use wasm_bindgen::JsCast;
use web_sys::HtmlElement;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;
use crate::dom::resize::window_viewport;
use crate::dom::scroll::{lock_body_scroll, scroll_to_anchor};
use crate::store::use_ui_store;
use crate::viewport::Viewport;

const NAV_ITEMS: [(&str, &str); 4] = [
    ("#hero", "Home"),
    ("#products", "Products"),
    ("#use-case", "Use Case"),
    ("#resources", "Resources"),
];

fn hero_height() -> Option<f64> {
    let hero = web_sys::window()?.document()?.get_element_by_id("hero")?;
    let hero = hero.dyn_into::<HtmlElement>().ok()?;
    Some(f64::from(hero.offset_height()))
}

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let store = use_ui_store();
    let menu_open = use_state(|| false);
    let (_, scroll_y) = use_window_scroll();

    let breakpoints = config::site().breakpoints;
    let viewport = window_viewport().unwrap_or(Viewport { width: 0.0, height: 0.0 });
    let is_scrolled = breakpoints.is_scrolled(scroll_y);
    let is_past_hero = breakpoints.is_past_hero(scroll_y, hero_height(), viewport);

    use_effect_with_deps(
        |open: &bool| {
            lock_body_scroll(*open);
            || lock_body_scroll(false)
        },
        *menu_open,
    );

    let nav_link = |href: &'static str, label: &'static str, index: usize| {
        let menu_open = menu_open.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            scroll_to_anchor(href, &config::site().breakpoints);
            menu_open.set(false);
        });
        html! {
            <a key={href} class="nav-link" {href} {onclick} style={format!("--nav-index: {index};")}>
                { label }
            </a>
        }
    };

    let open_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(true))
    };
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };
    let get_started = {
        let store = store.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            store.open_popup();
        })
    };

    html! {
        <>
            <style>
                {r#"
                .nav-bar {
                    position: fixed;
                    top: 0;
                    right: 0;
                    left: 0;
                    z-index: 50;
                    display: flex;
                    justify-content: center;
                    padding: 0 1rem;
                }
                .nav-header {
                    display: flex;
                    width: 100%;
                    max-width: 1500px;
                    height: 80px;
                    align-items: center;
                    justify-content: space-between;
                    padding: 0.5rem 80px;
                    transition: all 1s;
                }
                .nav-header.scrolled {
                    max-width: 48rem;
                    height: 60px;
                    margin-top: 1.5rem;
                    border-radius: 9999px;
                    padding: 1.5rem 2rem;
                    background: rgba(255, 255, 255, 0.1);
                    backdrop-filter: blur(12px);
                }
                .nav-header.scrolled.past-hero {
                    background: white;
                    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                }
                .nav-brand {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                }
                .nav-brand img {
                    border-radius: 0.5rem;
                }
                .nav-brand span {
                    font-size: 1.25rem;
                    font-weight: 600;
                    color: #213B4D;
                    animation: nav-fade 0.2s;
                }
                @keyframes nav-fade {
                    from { opacity: 0; transform: translateY(10px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                .nav-links {
                    display: flex;
                    align-items: center;
                    gap: 2rem;
                }
                .nav-links .nav-link {
                    font-size: 1.125rem;
                    font-weight: 500;
                    color: #213B4D;
                    text-decoration: none;
                    transition: transform 0.2s;
                }
                .nav-links .nav-link:hover {
                    transform: translateY(-2px);
                }
                .nav-cta {
                    display: inline-flex;
                    height: 44px;
                    align-items: center;
                    border-radius: 9999px;
                    padding: 0 1.5rem;
                    background: white;
                    font-size: 16px;
                    color: black;
                    text-decoration: none;
                    transition: all 0.5s ease-in-out;
                }
                .nav-cta.dark {
                    height: 36px;
                    background: #213B4D;
                    font-size: 14px;
                    color: white;
                }
                .nav-burger {
                    display: none;
                    border: none;
                    background: none;
                    font-size: 1.5rem;
                    color: #111827;
                    cursor: pointer;
                }
                .nav-overlay {
                    position: fixed;
                    inset: 0;
                    z-index: 50;
                    background: rgba(0, 0, 0, 0.5);
                    animation: nav-overlay-in 0.3s;
                }
                @keyframes nav-overlay-in {
                    from { opacity: 0; }
                }
                .nav-drawer {
                    position: fixed;
                    top: 0;
                    right: 0;
                    bottom: 0;
                    z-index: 50;
                    display: flex;
                    width: 80%;
                    max-width: 24rem;
                    flex-direction: column;
                    background: white;
                    color: #111827;
                    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1);
                    animation: nav-drawer-in 0.5s cubic-bezier(0.22, 1, 0.36, 1);
                }
                @keyframes nav-drawer-in {
                    from { transform: translateX(100%); }
                }
                .nav-drawer-head {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    border-bottom: 1px solid #f3f4f6;
                    padding: 1rem;
                }
                .nav-drawer-close {
                    border: none;
                    border-radius: 9999px;
                    background: none;
                    padding: 0.5rem;
                    font-size: 1.5rem;
                    cursor: pointer;
                    transition: transform 0.2s;
                }
                .nav-drawer-close:hover {
                    transform: rotate(90deg);
                }
                .nav-drawer nav {
                    display: flex;
                    flex: 1;
                    flex-direction: column;
                    overflow-y: auto;
                    padding: 1rem;
                }
                .nav-drawer .nav-link {
                    border-bottom: 1px solid #e5e7eb;
                    padding: 1rem 0;
                    color: inherit;
                    text-decoration: none;
                    animation: nav-item-in 0.3s both;
                    animation-delay: calc(var(--nav-index) * 0.1s);
                    transition: transform 0.2s;
                }
                .nav-drawer .nav-link:hover {
                    color: #2563eb;
                    transform: translateX(10px);
                }
                @keyframes nav-item-in {
                    from { opacity: 0; transform: translateX(20px); }
                }
                .nav-drawer-footer {
                    border-top: 1px solid #f3f4f6;
                    padding: 1rem;
                    animation: nav-fade 0.3s 0.5s both;
                }
                .nav-drawer-footer .nav-cta {
                    width: 100%;
                    justify-content: center;
                    background: black;
                    color: white;
                }
                @media (max-width: 767px) {
                    .nav-links, .nav-header > .nav-actions .nav-cta {
                        display: none;
                    }
                    .nav-burger {
                        display: block;
                    }
                    .nav-header {
                        padding: 0.5rem 0;
                    }
                }
                "#}
            </style>
            <div class="nav-bar">
                <header class={classes!(
                    "nav-header",
                    is_scrolled.then_some("scrolled"),
                    is_past_hero.then_some("past-hero"),
                )}>
                    <div class="nav-brand">
                        <img src="/logo.png" alt="Walpress" width="40" height="40" />
                        if !is_scrolled {
                            <span>{"WallPress"}</span>
                        }
                    </div>
                    <nav class="nav-links">
                        { for NAV_ITEMS.iter().enumerate().map(|(index, &(href, label))| nav_link(href, label, index)) }
                    </nav>
                    <div class="nav-actions">
                        <a
                            href="#"
                            class={classes!("nav-cta", (is_scrolled || is_past_hero).then_some("dark"))}
                            onclick={get_started.clone()}
                        >
                            {"Get started"}
                        </a>
                        <button class="nav-burger" aria-label="Open menu" onclick={open_menu}>
                            {"\u{2630}"}
                        </button>
                    </div>
                </header>
            </div>
            if *menu_open {
                <div class="nav-overlay" onclick={close_menu.clone()}></div>
                <div class="nav-drawer">
                    <div class="nav-drawer-head">
                        <div class="nav-brand">
                            <img src="/logo.png" alt="Walpress" width="40" height="40" />
                            <span>{"WallPress"}</span>
                        </div>
                        <button class="nav-drawer-close" aria-label="Close menu" onclick={close_menu}>
                            {"\u{2715}"}
                        </button>
                    </div>
                    <nav>
                        { for NAV_ITEMS.iter().enumerate().map(|(index, &(href, label))| nav_link(href, label, index)) }
                    </nav>
                    <div class="nav-drawer-footer">
                        <a href="#" class="nav-cta" onclick={get_started}>{"Get started"}</a>
                    </div>
                </div>
            }
        </>
    }
}
