use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config;

const SCROLLED_THRESHOLD_PX: f64 = 40.0;

pub struct NavLink {
    pub label: &'static str,
    pub href: String,
}

pub fn nav_links() -> Vec<NavLink> {
    vec![
        NavLink { label: "About us", href: "#about".to_string() },
        NavLink { label: "Pricing", href: "#pricing".to_string() },
        NavLink { label: "Integrations", href: config::app_link("integrations") },
    ]
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let scroll_callback = {
                    let window = window.clone();
                    Closure::wrap(Box::new(move || {
                        let scroll_y = window.as_ref().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0);
                        is_scrolled.set(scroll_y > SCROLLED_THRESHOLD_PX);
                    }) as Box<dyn FnMut()>)
                };

                if let Some(window) = &window {
                    if let Err(err) = window.add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    ) {
                        warn!("Failed to attach nav scroll listener: {:?}", err);
                    }
                }

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
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    html! {
        <header class={classes!("top-nav", (*is_scrolled).then_some("scrolled"))}>
            <div class="nav-content">
                <div class="nav-brand">
                    <a href={config::SITE_URL} target="_blank" rel="noreferrer" class="nav-logo-mark">
                        <img src="/assets/logo.svg" alt="Logo" />
                    </a>
                    <div class="nav-brand-text">
                        <span class="nav-brand-name">{"Explified Labs"}</span>
                        <a href={config::SITE_URL} target="_blank" rel="noreferrer" class="nav-brand-by">
                            {"by Explified"}
                        </a>
                    </div>
                </div>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>

                <nav class={classes!("nav-links", (*menu_open).then_some("mobile-menu-open"))}>
                    {
                        nav_links().into_iter().map(|link| html! {
                            <a href={link.href} class="nav-link" onclick={close_menu.clone()}>
                                { link.label }
                            </a>
                        }).collect::<Html>()
                    }
                    <a href={config::app_link("flowsense/explified")} class="nav-coming-soon" onclick={close_menu.clone()}>
                        {"Coming soon"}
                    </a>
                </nav>
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::nav_links;

    #[test]
    fn in_page_links_point_at_section_anchors() {
        let links = nav_links();
        assert_eq!(links[0].href, "#about");
        assert_eq!(links[1].href, "#pricing");
        assert_eq!(links[2].href, "https://app.explified.com/integrations");
    }
}
