//! Domain models for the Maize Yield Predictor

mod farm;
mod features;
mod prediction;

pub use farm::*;
pub use features::*;
pub use prediction::*;
