//! Shared types and domain logic for the AgroSense agricultural advisor
//!
//! This crate contains the pure, I/O-free pieces shared between the backend
//! server and the browser client (via WASM): fixture data models, the
//! rule-based price forecast, language detection and localized names.

pub mod forecast;
pub mod language;
pub mod models;
pub mod translation;
pub mod types;
pub mod validation;

pub use forecast::*;
pub use language::*;
pub use models::*;
pub use translation::*;
pub use types::*;
pub use validation::*;
