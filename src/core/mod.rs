// Core algorithm exports
pub mod engine;
pub mod filters;
pub mod matcher;

pub use engine::{TargetingEngine, Resolution};
pub use filters::{matches_age, matches_interests, matches_targeting, shared_interests};
pub use matcher::{candidates, select_ad};
