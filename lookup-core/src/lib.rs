//! Core library for the weather lookup client.
//!
//! This crate defines:
//! - The stored weather record model shared with the backend
//! - The backend client and its error taxonomy
//! - Submission logic that folds every fetch result into a displayable outcome
//! - Configuration handling
//!
//! It is used by `lookup-cli`, but can also be reused by other binaries or services.

pub mod client;
pub mod config;
pub mod identifier;
pub mod lookup;
pub mod model;

pub use client::{HttpWeatherStore, LookupError, WeatherStore};
pub use config::{Config, DEFAULT_BACKEND_URL};
pub use lookup::{LookupOutcome, submit_lookup};
pub use model::WeatherRecord;
