//! Ad Targeting - targeted ad-serving service
//!
//! This library loads user profiles and advertisements once at startup and
//! serves one randomly chosen ad whose age range and interests match a user.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{TargetingEngine, select_ad, matches_targeting};
pub use crate::models::{UserProfile, Advertisement, Targeting, AgeRange, ServeAdResponse, AdLookupResponse};
pub use crate::services::{DataStore, DataLoadError};
