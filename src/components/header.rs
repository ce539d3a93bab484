use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::animation::dom::scroll_y;
use crate::state::{HeaderAction, HeaderState};
use crate::Route;

pub const NAV_LINKS: [(&str, &str); 4] = [
    ("About us", "/#aboutus"),
    ("Services", "/#services"),
    ("Work", "/#work"),
    ("Contact", "/#contact"),
];

/// Unmatched paths have not been routed yet and count as home.
fn is_home(route: Option<Route>) -> bool {
    matches!(route, Some(Route::Home) | None)
}

#[function_component(Header)]
pub fn header() -> Html {
    let state = use_reducer(HeaderState::default);
    let route = use_route::<Route>();
    let on_home = is_home(route);

    {
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let scroll_state = state.clone();
                let scroll_callback = Closure::wrap(Box::new(move || {
                    scroll_state.dispatch(HeaderAction::Scrolled(scroll_y()));
                }) as Box<dyn FnMut()>);

                if let Some(window) = &window {
                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                }
                // Initial check, for a page restored mid-scroll
                state.dispatch(HeaderAction::Scrolled(scroll_y()));

                move || {
                    if let Some(window) = window {
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

    let toggle_menu = {
        let state = state.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            state.dispatch(HeaderAction::ToggleMenu);
        })
    };

    let close_menu = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            state.dispatch(HeaderAction::CloseMenu);
        })
    };

    html! {
        <header class={classes!("site-header", (!state.visible(on_home)).then(|| "hidden"))}>
            <nav class={classes!("top-nav", state.sticky.then(|| "sticky"))}>
                <Link<Route> to={Route::Home} classes="nav-logo">
                    <img src="/logos/Logo_dark.png" alt="Ronminco Logo" />
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={classes!("nav-right", state.menu_open.then(|| "mobile-menu-open"))}>
                    { for NAV_LINKS.iter().map(|(label, href)| html! {
                        <a href={*href} class="nav-link" onclick={close_menu.clone()}>{*label}</a>
                    }) }
                </div>
            </nav>
            <style>
                {r#"
                .site-header {
                    position: fixed;
                    top: 0;
                    width: 100%;
                    z-index: 40;
                    padding: 0.75rem;
                    box-sizing: border-box;
                    transition: transform 0.3s;
                }
                .site-header.hidden {
                    transform: translateY(-100%);
                }
                .top-nav {
                    max-width: 80rem;
                    margin: 0 auto;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    padding: 0.75rem 1rem;
                }
                .top-nav.sticky {
                    border-radius: 9999px;
                    background: #1b1d1e;
                    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                }
                .nav-logo img {
                    height: 40px;
                    width: auto;
                }
                .nav-right {
                    display: flex;
                    gap: 1.5rem;
                }
                .nav-link {
                    color: #fff;
                    text-decoration: none;
                }
                .nav-link:hover {
                    color: #34d399;
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
                    background: #fff;
                }
                @media (max-width: 768px) {
                    .burger-menu {
                        display: flex;
                    }
                    .nav-right {
                        display: none;
                    }
                    .nav-right.mobile-menu-open {
                        display: flex;
                        flex-direction: column;
                        position: absolute;
                        top: 100%;
                        left: 0.75rem;
                        right: 0.75rem;
                        padding: 1.5rem;
                        border-radius: 1.5rem;
                        background: #1b1d1e;
                    }
                }
                "#}
            </style>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_and_unrouted_paths_count_as_home() {
        assert!(is_home(Some(Route::Home)));
        assert!(is_home(None));
        assert!(!is_home(Some(Route::NotFound)));
    }

    #[test]
    fn a_page_restored_mid_scroll_shows_the_header_on_first_check() {
        let state = HeaderState::default();
        assert!(!state.visible(true));
        let state = state.apply(HeaderAction::Scrolled(1200.0));
        assert!(state.visible(true));
    }
}
