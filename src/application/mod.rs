//! # Application Layer
//!
//! Ports the connectors implement, and the use cases and view controller that
//! orchestrate them.

pub mod interfaces;
pub mod use_cases;

pub use interfaces::*;
pub use use_cases::*;
