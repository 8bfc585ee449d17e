// Fitness metrics and prediction engine.
// The UI layer hands in plain data and gets plain data (or a typed error) back.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod services;

pub use error::{FitnessError, FitnessResult};
