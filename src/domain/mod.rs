//! # Domain Layer
//!
//! Prediction records, the view state they are rendered from, and the error
//! taxonomy shared by every layer. Independent of HTTP and terminal concerns.

pub mod error;
pub mod models;

pub use error::*;
pub use models::*;
