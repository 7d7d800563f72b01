use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config;
use crate::state::{header_style, HeaderStyle, PresentationHandle};

const SECTIONS: &[(&str, &str)] = &[
    ("#home", "Home"),
    ("#about", "About"),
    ("#services", "Services"),
    ("#skills", "Skills"),
    ("#portfolio", "Portfolio"),
    ("#blog", "Blog"),
    ("#contact", "Contact"),
];

#[function_component(Nav)]
pub fn nav() -> Html {
    let handle = use_context::<PresentationHandle>().expect("presentation context missing");
    let state = &handle.state;

    let solid = header_style(state.scroll_offset, config::HEADER_SCROLL_THRESHOLD)
        == HeaderStyle::Solid;

    let toggle_menu = {
        let controller = handle.controller.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            controller.toggle_menu();
        })
    };

    let close_menu = {
        let controller = handle.controller.clone();
        Callback::from(move |_: MouseEvent| controller.close_menu())
    };

    let toggle_theme = {
        let controller = handle.controller.clone();
        Callback::from(move |_: MouseEvent| controller.toggle_theme())
    };

    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <>
        <header class={classes!("top-nav", solid.then(|| "scrolled"))}>
            <a href="#home" class="nav-logo">{"ARUSH"}</a>
            <nav class="nav-links">
                {
                    for SECTIONS.iter().map(|(href, label)| html! {
                        <a href={*href}>{*label}</a>
                    })
                }
            </nav>
            <div class="nav-actions">
                <button class="theme-toggle" onclick={toggle_theme.clone()} aria-label="Toggle dark mode">
                    { if state.dark_mode { "☀" } else { "☾" } }
                </button>
                <button class="burger-menu" onclick={toggle_menu} aria-label="Menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>
        </header>
        {
            if state.menu_open {
                html! {
                    <div class="menu-overlay" onclick={close_menu.clone()}>
                        <div class="menu-panel" onclick={keep_open}>
                            <div class="menu-panel-header">
                                <button class="theme-toggle" onclick={toggle_theme} aria-label="Toggle dark mode">
                                    { if state.dark_mode { "☀" } else { "☾" } }
                                </button>
                                <button class="menu-close" onclick={close_menu.clone()} aria-label="Close menu">
                                    {"✕"}
                                </button>
                            </div>
                            <nav class="menu-panel-links">
                                {
                                    for SECTIONS.iter().map(|(href, label)| html! {
                                        <a href={*href} onclick={close_menu.clone()}>{*label}</a>
                                    })
                                }
                            </nav>
                        </div>
                    </div>
                }
            } else {
                html! {}
            }
        }
        <style>
            {r#"
            .top-nav {
                position: fixed;
                top: 0;
                left: 0;
                width: 100%;
                display: flex;
                justify-content: space-between;
                align-items: center;
                padding: 1rem 2rem;
                z-index: 10;
                background: transparent;
                transition: background 0.3s ease, box-shadow 0.3s ease;
                box-sizing: border-box;
            }
            .top-nav.scrolled {
                background: var(--card);
                box-shadow: 0 2px 12px rgba(0, 0, 0, 0.15);
            }
            .nav-logo {
                font-weight: 700;
                font-size: 1.25rem;
                letter-spacing: 0.2em;
                color: var(--accent);
                text-decoration: none;
            }
            .nav-links {
                display: flex;
                gap: 1.5rem;
            }
            .nav-links a {
                color: var(--text);
                text-decoration: none;
                transition: color 0.2s ease;
            }
            .nav-links a:hover {
                color: var(--accent);
            }
            .nav-actions {
                display: flex;
                align-items: center;
                gap: 1rem;
            }
            .theme-toggle {
                background: none;
                border: none;
                cursor: pointer;
                font-size: 1.25rem;
                color: var(--text);
            }
            .burger-menu {
                display: none;
                flex-direction: column;
                gap: 5px;
                background: none;
                border: none;
                cursor: pointer;
                padding: 4px;
            }
            .burger-menu span {
                width: 26px;
                height: 2px;
                border-radius: 1px;
                background: var(--text);
            }
            .menu-overlay {
                position: fixed;
                inset: 0;
                z-index: 50;
                background: rgba(0, 0, 0, 0.5);
            }
            .menu-panel {
                width: 16rem;
                height: 100%;
                background: var(--card);
                padding: 1.5rem;
                box-sizing: border-box;
            }
            .menu-panel-header {
                display: flex;
                justify-content: space-between;
                align-items: center;
                margin-bottom: 1.5rem;
            }
            .menu-close {
                background: none;
                border: none;
                cursor: pointer;
                font-size: 1.25rem;
                color: var(--text);
            }
            .menu-panel-links {
                display: flex;
                flex-direction: column;
                gap: 1rem;
            }
            .menu-panel-links a {
                color: var(--text);
                text-decoration: none;
            }
            .menu-panel-links a:hover {
                color: var(--accent);
            }
            @media (max-width: 768px) {
                .nav-links {
                    display: none;
                }
                .burger-menu {
                    display: flex;
                }
            }
            "#}
        </style>
        </>
    }
}
