use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use super::style::StyleState;
use super::trigger::Bounds;

const ANIMATED_PROPERTIES: [&str; 4] = ["opacity", "transform", "clip-path", "filter"];

pub fn now_seconds() -> f64 {
    web_sys::js_sys::Date::now() / 1000.0
}

pub fn viewport_height() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0)
}

pub fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|w| w.as_f64())
        .unwrap_or(0.0)
}

pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

pub fn bounds_of(element: &Element) -> Bounds {
    let rect = element.get_bounding_client_rect();
    Bounds::new(rect.left(), rect.top(), rect.width(), rect.height())
}

pub fn apply_style(element: &HtmlElement, state: &StyleState) {
    let style = element.style();
    for (property, value) in state.declarations() {
        let _ = style.set_property(property, &value);
    }
}

pub fn clear_style(element: &HtmlElement) {
    let style = element.style();
    for property in ANIMATED_PROPERTIES {
        let _ = style.remove_property(property);
    }
}

/// Sets a single inline property, leaving the rest of the style alone.
pub fn set_property(element: &HtmlElement, property: &str, value: &str) {
    let _ = element.style().set_property(property, value);
}

/// Every `HtmlElement` under `root` matching `selector`, in document order.
pub fn query_all(root: &Element, selector: &str) -> Vec<HtmlElement> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

pub fn query_one(root: &Element, selector: &str) -> Option<HtmlElement> {
    root.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}
