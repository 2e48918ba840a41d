//! # Connector Layer
//!
//! External integrations implementing application interfaces:
//! - Prediction clients (Gemini over HTTP, offline mock)
//! - Terminal front end (ratatui + crossterm)
//! - Command wiring (container, router, controllers)

pub mod adapter;
pub mod api;
pub mod tui;

pub use adapter::*;
pub use api::*;
