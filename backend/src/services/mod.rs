//! Business logic services

pub mod prediction;
