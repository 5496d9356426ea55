//! # leaveportal
//!
//! Leptos + WASM frontend for the employee leave-management portal.
//! Employees submit leave requests against typed balances, managers and
//! admins review them, and admins configure leave types and employee
//! records.
//!
//! This crate contains pages, components, application state, network types,
//! and the REST client layer. Authentication state lives in a
//! context-provided signal restored from browser storage; route guards
//! derive access from the session's role set on every navigation.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs panic/log hooks and hydrates the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
