//! Shared types and models for the AutoParts Manager dashboard
//!
//! This crate contains types shared between the inventory engine, the
//! frontend (via WASM), and other components of the system.

pub mod models;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;
