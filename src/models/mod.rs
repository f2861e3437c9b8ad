// Model exports
pub mod domain;
pub mod responses;

pub use domain::{UserProfile, AgeRange, Targeting, Advertisement};
pub use responses::{ServedAd, ServeAdResponse, AdLookupResponse, HealthResponse};
