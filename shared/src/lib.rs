//! Shared types and models for the Maize Yield Predictor
//!
//! This crate contains types shared between the backend, the browser
//! form (via WASM), and other components of the system.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::*;
