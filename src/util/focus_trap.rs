//! Keyboard focus trap for dialogs.
//!
//! TRADE-OFFS
//! ==========
//! Focusable descendants are collected on each Tab press rather than once at
//! install time, so buttons added or removed while the dialog is open are
//! still part of the cycle. Dialogs are small; the query is cheap.

#[cfg(test)]
#[path = "focus_trap_test.rs"]
mod focus_trap_test;

#[cfg(feature = "hydrate")]
use crate::util::dom::{document, warn_js};

/// Interactive descendants that take part in the cycle.
pub const FOCUSABLE_SELECTOR: &str =
    r#"a[href], button, textarea, input, select, [tabindex]:not([tabindex="-1"])"#;

/// What to do with a Tab press inside the trap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TabDecision {
    /// Let the browser move focus normally.
    PassThrough,
    /// Cancel the default and focus the focusable at this index.
    FocusIndex(usize),
}

pub fn is_tab_key(key: &str) -> bool {
    key == "Tab"
}

/// Decide how a Tab press wraps, given `count` focusables and the index of
/// the one currently focused (if it is one of them).
pub fn tab_decision(count: usize, active: Option<usize>, shift: bool) -> TabDecision {
    let Some(last) = count.checked_sub(1) else {
        return TabDecision::PassThrough;
    };
    match (active, shift) {
        (Some(0), true) => TabDecision::FocusIndex(last),
        (Some(i), false) if i == last => TabDecision::FocusIndex(0),
        _ => TabDecision::PassThrough,
    }
}

/// Handle a keydown raised inside `container`. Returns `true` when focus was
/// wrapped and the default action cancelled.
#[cfg(feature = "hydrate")]
pub fn trap_focus_keydown(container: &web_sys::Element, ev: &web_sys::KeyboardEvent) -> bool {
    if !is_tab_key(&ev.key()) {
        return false;
    }
    let focusables = focusable_elements(container);
    let active_index = document().and_then(|d| d.active_element()).and_then(|active| {
        focusables
            .iter()
            .position(|el| el.is_same_node(Some(&*active)))
    });

    match tab_decision(focusables.len(), active_index, ev.shift_key()) {
        TabDecision::PassThrough => false,
        TabDecision::FocusIndex(index) => {
            ev.prevent_default();
            if let Some(target) = focusables.get(index) {
                if let Err(err) = target.focus() {
                    warn_js("focus trap", &err);
                }
            }
            true
        }
    }
}

/// Focus the first focusable descendant, if any.
#[cfg(feature = "hydrate")]
pub fn focus_first(container: &web_sys::Element) {
    if let Some(first) = focusable_elements(container).first() {
        if let Err(err) = first.focus() {
            warn_js("focus first", &err);
        }
    }
}

#[cfg(feature = "hydrate")]
fn focusable_elements(container: &web_sys::Element) -> Vec<web_sys::HtmlElement> {
    use wasm_bindgen::JsCast;

    let list = match container.query_selector_all(FOCUSABLE_SELECTOR) {
        Ok(list) => list,
        Err(err) => {
            warn_js("focusable query", &err);
            return Vec::new();
        }
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_ref::<web_sys::HtmlElement>().cloned())
        .collect()
}
