//! Shared Dioxus components for the census dashboard.
//!
//! This crate provides:
//! - `state`: reactive `AppState` holding the session behind Dioxus Signals
//! - `components`: the sidebar filters, chart panels and status boxes

pub mod components;
pub mod state;
