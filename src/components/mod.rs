//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared chrome (guards, badges, the stats panel) while
//! reading state from Leptos context providers where needed.

pub mod admin_stats;
pub mod route_guard;
pub mod status_badge;
