//! Inline-style plumbing shared by the animation hooks.

use log::warn;
use web_sys::{window, HtmlElement};

use super::timeline::{Keyframe, Step};

const MOTION_PROPERTIES: [&str; 3] = ["transition", "transform", "opacity"];

/// Seconds on the same clock `requestAnimationFrame` timestamps use.
pub fn now_secs() -> f64 {
    window()
        .and_then(|window| window.performance())
        .map(|performance| performance.now() / 1000.0)
        .unwrap_or(0.0)
}

pub fn set_style(el: &HtmlElement, property: &str, value: &str) {
    if let Err(err) = el.style().set_property(property, value) {
        warn!("Failed to set {} on animated element: {:?}", property, err);
    }
}

/// Pins the element at `from` with no transition running.
pub fn hold_at(el: &HtmlElement, from: &Keyframe) {
    set_style(el, "transition", "none");
    set_style(el, "transform", &from.transform_css());
    set_style(el, "opacity", &from.opacity.to_string());
}

/// Transitions a held element back to its natural pose.
pub fn release<T>(el: &HtmlElement, step: &Step<T>) {
    set_style(el, "transition", &step.transition_css());
    set_style(el, "transform", &Keyframe::NATURAL.transform_css());
    set_style(el, "opacity", "1");
}

pub fn play_from<T>(el: &HtmlElement, step: &Step<T>) {
    hold_at(el, &step.from);
    // Reading layout commits the held pose, otherwise the browser merges
    // both writes and nothing animates.
    let _ = el.offset_height();
    release(el, step);
}

/// Drops every inline property the animators may have written.
pub fn clear_motion(el: &HtmlElement) {
    let style = el.style();
    for property in MOTION_PROPERTIES {
        let _ = style.remove_property(property);
    }
}
