#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn busy_attr_maps_flag_to_aria_value() {
    assert_eq!(busy_attr(true), "true");
    assert_eq!(busy_attr(false), "false");
}

#[test]
fn set_loading_without_dom_is_noop() {
    set_loading("uploadBtn", true);
    set_loading("missing", false);
    show_loading("uploadBtn");
    hide_loading("uploadBtn");
}
