//! Busy-state toggling for arbitrary elements.
//!
//! Looks the target up by id on every call. A missing element is not an
//! error; the call does nothing.

#[cfg(test)]
#[path = "loading_test.rs"]
mod loading_test;

#[cfg(feature = "hydrate")]
use crate::consts::LOADING_CLASS;
#[cfg(feature = "hydrate")]
use crate::util::dom::{element_by_id, warn_js};

/// `aria-busy` value for a loading flag.
pub fn busy_attr(loading: bool) -> &'static str {
    if loading { "true" } else { "false" }
}

/// Add or remove the `loading` class and set `aria-busy` on `element_id`.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub fn set_loading(element_id: &str, loading: bool) {
    #[cfg(feature = "hydrate")]
    {
        let Some(el) = element_by_id(element_id) else {
            return;
        };
        let classes = el.class_list();
        let toggled = if loading {
            classes.add_1(LOADING_CLASS)
        } else {
            classes.remove_1(LOADING_CLASS)
        };
        if let Err(err) = toggled {
            warn_js("loading class", &err);
        }
        if let Err(err) = el.set_attribute("aria-busy", busy_attr(loading)) {
            warn_js("aria-busy", &err);
        }
    }
}

pub fn show_loading(element_id: &str) {
    set_loading(element_id, true);
}

pub fn hide_loading(element_id: &str) {
    set_loading(element_id, false);
}
