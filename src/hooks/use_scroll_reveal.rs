use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, Element, HtmlElement};
use yew::prelude::*;

use crate::animation::disposer::Disposers;
use crate::animation::dom::{clear_motion, hold_at, play_from};
use crate::animation::reveal::{RevealConfig, RevealTracker};

const REVEALED_CLASS: &str = "is-revealed";

fn viewport_height() -> Option<f64> {
    window()?.inner_height().ok()?.as_f64()
}

fn mark_revealed(el: &Element) {
    let classes = el.class_name();
    if !classes.split_whitespace().any(|class| class == REVEALED_CLASS) {
        el.set_class_name(&format!("{} {}", classes, REVEALED_CLASS));
    }
}

/// Hides each section and reveals it the first time its top edge crosses
/// the trigger line. Sections never hide again.
#[hook]
pub fn use_scroll_reveal(sections: Vec<NodeRef>) {
    use_effect_with_deps(
        move |_| {
            let mut disposers = Disposers::new();
            let reveal = RevealConfig::default();

            for section in &sections {
                if let Some(el) = section.cast::<HtmlElement>() {
                    hold_at(&el, &reveal.from);
                    disposers.push(move || clear_motion(&el));
                }
            }

            let tracker = Rc::new(RefCell::new(RevealTracker::new(
                sections.len(),
                reveal.trigger_fraction,
            )));
            let check = move || {
                let Some(height) = viewport_height() else { return };
                let tops: Vec<Option<f64>> = {
                    let tracker = tracker.borrow();
                    sections
                        .iter()
                        .enumerate()
                        .map(|(idx, section)| {
                            if tracker.is_revealed(idx) {
                                return None;
                            }
                            section
                                .cast::<Element>()
                                .map(|el| el.get_bounding_client_rect().top())
                        })
                        .collect()
                };
                let step = reveal.step();
                let fresh = tracker.borrow_mut().crossings(&tops, height);
                for idx in &fresh {
                    if let Some(el) = sections[*idx].cast::<HtmlElement>() {
                        debug!("Revealing section {}", idx);
                        play_from(&el, &step);
                        mark_revealed(&el);
                    }
                }
                if !fresh.is_empty() && tracker.borrow().all_revealed() {
                    debug!("All {} sections revealed", sections.len());
                }
            };

            // Sections already on screen at mount reveal right away.
            check();

            if let Some(window) = window() {
                let on_scroll = Closure::wrap(Box::new(check) as Box<dyn FnMut()>);
                match window
                    .add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())
                {
                    Ok(()) => disposers.push(move || {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            on_scroll.as_ref().unchecked_ref(),
                        );
                    }),
                    Err(err) => warn!("Failed to attach scroll reveal listener: {:?}", err),
                }
            }

            move || disposers.dispose()
        },
        (),
    );
}
