use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, KeyboardEvent, MouseEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::data::{NavItem, NAV_ITEMS};
use crate::motion::selection::{move_focus, use_exclusive_selection, FocusStep, SelectionHandle};
use crate::Route;

const MENU_ITEM_SELECTOR: &str = "[role=\"menuitem\"]";

fn set_body_overflow(value: &str) {
    if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
        let _ = body.style().set_property("overflow", value);
    }
}

fn dropdown_keydown(e: KeyboardEvent) {
    let Some(step) = FocusStep::from_key(&e.key()) else {
        return;
    };
    let menu = e.current_target().and_then(|t| t.dyn_into::<Element>().ok());
    if let Some(menu) = menu {
        e.prevent_default();
        move_focus(&menu, MENU_ITEM_SELECTOR, step);
    }
}

fn nav_entry(
    item: &'static NavItem,
    dropdowns: &SelectionHandle<&'static str>,
    on_navigate: &Callback<MouseEvent>,
    mobile: bool,
) -> Html {
    if item.children.is_empty() {
        let class = if mobile { "mobile-link" } else { "nav-link" };
        return html! {
            <a href={item.href} {class} onclick={on_navigate.clone()}>{ item.label }</a>
        };
    }

    let open = dropdowns.is_active(&item.label);
    let chevron = classes!("chevron", open.then(|| "rotated"));
    let links = item.children.iter().map(|child| {
        html! {
            <a href={child.href} role="menuitem" class="dropdown-link" onclick={on_navigate.clone()}>
                { child.label }
            </a>
        }
    });

    if mobile {
        html! {
            <div class="mobile-entry">
                <button class="mobile-link" aria-expanded={open.to_string()}
                    onclick={dropdowns.select_callback(item.label)}>
                    { item.label }
                    <span class={chevron}>{"▾"}</span>
                </button>
                if open {
                    <div class="mobile-children" role="menu">{ for links }</div>
                }
            </div>
        }
    } else {
        html! {
            <div class="nav-entry">
                <button class="nav-link" aria-haspopup="true" aria-expanded={open.to_string()}
                    onclick={dropdowns.select_callback(item.label)}>
                    { item.label }
                    <span class={chevron}>{"▾"}</span>
                </button>
                <div class={classes!("dropdown", open.then(|| "open"))} role="menu"
                    onkeydown={Callback::from(dropdown_keydown)}>
                    { for links }
                </div>
            </div>
        }
    }
}

#[function_component(SiteHeader)]
pub fn site_header() -> Html {
    let menu_open = use_state_eq(|| false);
    let is_scrolled = use_state_eq(|| false);
    let dropdowns = use_exclusive_selection::<&'static str>();
    let nav_ref = use_node_ref();

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let listener = window.map(|window| {
                    let scroll_callback = {
                        let window = window.clone();
                        Closure::wrap(Box::new(move || {
                            let offset = window.scroll_y().unwrap_or(0.0);
                            is_scrolled.set(offset > config::SCROLLED_NAV_OFFSET);
                        }) as Box<dyn FnMut()>)
                    };
                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                    (window, scroll_callback)
                });

                move || {
                    if let Some((window, scroll_callback)) = listener {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let close_menu = {
        let menu_open = menu_open.clone();
        let dropdowns = dropdowns.clone();
        Callback::from(move |_: ()| {
            menu_open.set(false);
            dropdowns.close_all();
        })
    };

    {
        let close_menu = close_menu.clone();
        use_click_away(nav_ref.clone(), move |_: Event| close_menu.emit(()));
    }

    {
        let close_menu = close_menu.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                close_menu.emit(());
            }
        });
    }

    // Lock page scrolling behind the mobile menu.
    use_effect_with_deps(
        |open| {
            set_body_overflow(if *open { "hidden" } else { "auto" });
            || set_body_overflow("auto")
        },
        *menu_open,
    );

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let on_navigate = {
        let close_menu = close_menu.clone();
        Callback::from(move |_: MouseEvent| close_menu.emit(()))
    };

    let header_class = classes!("site-header", (*is_scrolled).then(|| "scrolled"));
    let mobile_class = classes!("mobile-menu", (*menu_open).then(|| "open"));

    html! {
        <header class={header_class}>
            <style>{ NAV_CSS }</style>
            <nav id="main-nav" ref={nav_ref} class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">{"Tawjih"}</Link<Route>>

                <div class="nav-links">
                    { for NAV_ITEMS.iter().map(|item| nav_entry(item, &dropdowns, &on_navigate, false)) }
                </div>

                <div class="nav-actions">
                    <Link<Route> to={Route::Counselor} classes="nav-cta">{"My Dashboard"}</Link<Route>>
                </div>

                <button class="burger-menu" onclick={toggle_menu}
                    aria-label={if *menu_open { "Close menu" } else { "Open menu" }}
                    aria-expanded={menu_open.to_string()}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>

                <div class={mobile_class} aria-hidden={(!*menu_open).to_string()}>
                    { for NAV_ITEMS.iter().map(|item| nav_entry(item, &dropdowns, &on_navigate, true)) }
                    <div onclick={on_navigate.clone()}>
                        <Link<Route> to={Route::Counselor} classes="nav-cta mobile-cta">{"My Dashboard"}</Link<Route>>
                    </div>
                </div>
            </nav>
        </header>
    }
}

const NAV_CSS: &str = r#"
    .site-header {
        position: fixed;
        top: 0;
        left: 0;
        right: 0;
        z-index: 50;
        padding: 1rem 0;
        background: transparent;
        transition: all 0.3s ease;
    }
    .site-header.scrolled {
        padding: 0.5rem 0;
        background: rgba(236, 253, 245, 0.85);
        backdrop-filter: blur(10px);
        box-shadow: 0 2px 8px rgba(0, 0, 0, 0.08);
    }
    .nav-content {
        max-width: 1200px;
        margin: 0 auto;
        padding: 0 1rem;
        display: flex;
        align-items: center;
        justify-content: space-between;
    }
    .nav-logo {
        font-size: 1.5rem;
        font-weight: 700;
        color: #059669;
        text-decoration: none;
    }
    .nav-links {
        display: flex;
        gap: 2rem;
    }
    .nav-entry {
        position: relative;
    }
    .nav-link {
        background: none;
        border: none;
        color: #047857;
        font-weight: 800;
        cursor: pointer;
        text-decoration: none;
        padding: 0.5rem;
    }
    .chevron {
        display: inline-block;
        margin-left: 0.25rem;
        transition: transform 0.2s ease;
    }
    .chevron.rotated {
        transform: rotate(180deg);
    }
    .dropdown {
        position: absolute;
        top: 100%;
        left: 0;
        width: 12rem;
        padding: 0.5rem 0;
        background: rgba(236, 253, 245, 0.95);
        border-radius: 0.5rem;
        box-shadow: 0 8px 16px rgba(0, 0, 0, 0.1);
        opacity: 0;
        transform: translateY(-0.5rem);
        pointer-events: none;
        transition: all 0.3s ease;
    }
    .dropdown.open {
        opacity: 1;
        transform: translateY(0);
        pointer-events: auto;
    }
    .dropdown-link {
        display: block;
        padding: 0.5rem 1rem;
        color: #374151;
        text-decoration: none;
    }
    .dropdown-link:hover, .dropdown-link:focus {
        background: #d1fae5;
        color: #047857;
    }
    .nav-cta {
        background: #059669;
        color: white;
        padding: 0.5rem 1rem;
        border-radius: 0.5rem;
        text-decoration: none;
    }
    .burger-menu {
        display: none;
        flex-direction: column;
        gap: 4px;
        background: none;
        border: none;
        cursor: pointer;
    }
    .burger-menu span {
        width: 24px;
        height: 2px;
        background: #374151;
    }
    .mobile-menu {
        position: fixed;
        inset: 0;
        padding: 5rem 1rem 1rem;
        background: rgba(236, 253, 245, 0.97);
        transform: translateX(100%);
        transition: transform 0.3s ease;
        overflow-y: auto;
    }
    .mobile-menu.open {
        transform: translateX(0);
    }
    .mobile-link {
        display: flex;
        justify-content: space-between;
        width: 100%;
        padding: 0.75rem;
        background: none;
        border: none;
        color: #374151;
        text-decoration: none;
        font-size: 1rem;
    }
    .mobile-children {
        padding-left: 1rem;
        border-left: 2px solid #a7f3d0;
    }
    @media (max-width: 1024px) {
        .nav-links, .nav-actions {
            display: none;
        }
        .burger-menu {
            display: flex;
            z-index: 60;
        }
    }
    @media (min-width: 1025px) {
        .mobile-menu {
            display: none;
        }
    }
"#;
