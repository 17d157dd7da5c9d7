//! Eco Management System frontend: Dioxus pages over the `eco_core` site state.

pub mod app;
pub mod choices;
pub mod form_flow;
pub mod platform;
pub mod screens;
pub mod theme;
pub mod widgets;
