//! Browser-facing helpers for the upload page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each helper keeps its decision logic in plain functions and gates the
//! web-sys calls behind the `hydrate` feature, so server builds and native
//! tests compile the same module without a DOM.

pub mod dom;
pub mod drag_drop;
pub mod focus_trap;
pub mod loading;
pub mod upload;
