use serde::{Deserialize, Serialize};
use crate::models::domain::{Advertisement, UserProfile};

/// Category and message of the served ad
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServedAd {
    pub category: String,
    pub message: String,
}

impl From<&Advertisement> for ServedAd {
    fn from(ad: &Advertisement) -> Self {
        Self {
            category: ad.category.clone(),
            message: ad.message.clone(),
        }
    }
}

/// Response for the serve_ad endpoint
///
/// When nothing matches, `ad_served` carries empty strings. Use
/// [`AdLookupResponse`] to tell "no ad" apart from an ad with blank fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServeAdResponse {
    pub user_data: UserProfile,
    pub ad_served: ServedAd,
}

/// Response for the versioned ad lookup endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdLookupResponse {
    pub user_data: UserProfile,
    pub ad_served: Option<ServedAd>,
    pub shared_interests: Vec<String>,
    pub known_user: bool,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub users: usize,
    pub ads: usize,
}
