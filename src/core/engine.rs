use std::sync::Arc;
use rand::Rng;
use crate::core::filters::shared_interests;
use crate::core::matcher::select_ad;
use crate::models::{UserProfile, Advertisement, ServedAd, ServeAdResponse, AdLookupResponse};
use crate::services::DataStore;

/// Outcome of resolving a user and selecting an ad
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution<'a> {
    pub profile: UserProfile,
    pub known_user: bool,
    pub ad: Option<&'a Advertisement>,
}

/// Targeting engine - resolves a user, filters ads and picks one
///
/// Holds the frozen data store; cloning shares the same store.
#[derive(Debug, Clone)]
pub struct TargetingEngine {
    store: Arc<DataStore>,
}

impl TargetingEngine {
    pub fn new(store: DataStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    pub fn store(&self) -> &DataStore {
        &self.store
    }

    /// Resolve the profile for `user_id` and select a matching ad
    pub fn resolve<R>(&self, user_id: &str, rng: &mut R) -> Resolution<'_>
    where
        R: Rng + ?Sized,
    {
        let found = self.store.get_user(user_id);
        let known_user = found.is_some();
        let profile = found.cloned().unwrap_or_default();
        let ad = select_ad(&profile, self.store.ads(), rng);

        tracing::debug!(
            "Resolved user {} (known: {}): {}",
            user_id,
            known_user,
            ad.map(|a| a.category.as_str()).unwrap_or("no matching ad")
        );

        Resolution {
            profile,
            known_user,
            ad,
        }
    }

    /// Serve an ad using the thread-local RNG
    pub fn serve_ad(&self, user_id: &str) -> ServeAdResponse {
        self.serve_ad_with(user_id, &mut rand::thread_rng())
    }

    /// Serve an ad with an injected RNG
    ///
    /// No match yields empty category and message strings.
    pub fn serve_ad_with<R>(&self, user_id: &str, rng: &mut R) -> ServeAdResponse
    where
        R: Rng + ?Sized,
    {
        let resolution = self.resolve(user_id, rng);

        ServeAdResponse {
            ad_served: resolution.ad.map(ServedAd::from).unwrap_or_default(),
            user_data: resolution.profile,
        }
    }

    /// Look up an ad, reporting "no ad" as `None` instead of blank fields
    pub fn lookup_ad_with<R>(&self, user_id: &str, rng: &mut R) -> AdLookupResponse
    where
        R: Rng + ?Sized,
    {
        let resolution = self.resolve(user_id, rng);

        let shared = resolution
            .ad
            .map(|ad| shared_interests(&resolution.profile, &ad.targeting))
            .unwrap_or_default();

        AdLookupResponse {
            ad_served: resolution.ad.map(ServedAd::from),
            shared_interests: shared,
            user_data: resolution.profile,
            known_user: resolution.known_user,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AgeRange, Targeting};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashMap;

    fn create_engine() -> TargetingEngine {
        let mut users = HashMap::new();
        users.insert("alice".to_string(), UserProfile::new(25, &["sports", "tech"]));
        users.insert("kid".to_string(), UserProfile::new(10, &["toys"]));

        let ads = vec![Advertisement {
            category: "shoes".to_string(),
            message: "Buy now".to_string(),
            targeting: Targeting {
                age_range: AgeRange(18, 35),
                interests: vec!["sports".to_string(), "fashion".to_string()],
            },
        }];

        TargetingEngine::new(DataStore::from_parts(users, ads).unwrap())
    }

    #[test]
    fn test_serve_matching_user() {
        let engine = create_engine();
        let mut rng = StdRng::seed_from_u64(3);

        let response = engine.serve_ad_with("alice", &mut rng);

        assert_eq!(response.user_data, UserProfile::new(25, &["sports", "tech"]));
        assert_eq!(response.ad_served.category, "shoes");
        assert_eq!(response.ad_served.message, "Buy now");
    }

    #[test]
    fn test_serve_no_match_gives_empty_strings() {
        let engine = create_engine();

        let response = engine.serve_ad("kid");

        assert_eq!(response.user_data, UserProfile::new(10, &["toys"]));
        assert_eq!(response.ad_served, ServedAd::default());
    }

    #[test]
    fn test_serve_unknown_user() {
        let engine = create_engine();

        let response = engine.serve_ad("ghost");

        assert_eq!(response.user_data, UserProfile::default());
        assert_eq!(response.ad_served, ServedAd::default());
    }

    #[test]
    fn test_lookup_distinguishes_no_ad() {
        let engine = create_engine();
        let mut rng = StdRng::seed_from_u64(3);

        let hit = engine.lookup_ad_with("alice", &mut rng);
        assert!(hit.known_user);
        assert_eq!(hit.shared_interests, vec!["sports"]);
        assert_eq!(hit.ad_served.unwrap().category, "shoes");

        let miss = engine.lookup_ad_with("ghost", &mut rng);
        assert!(!miss.known_user);
        assert!(miss.ad_served.is_none());
        assert!(miss.shared_interests.is_empty());
    }

    #[test]
    fn test_resolve_stored_empty_profile_is_known() {
        let mut users = HashMap::new();
        users.insert("blank".to_string(), UserProfile::default());
        let engine = TargetingEngine::new(DataStore::from_parts(users, vec![]).unwrap());
        let mut rng = StdRng::seed_from_u64(5);

        let stored = engine.resolve("blank", &mut rng);
        assert!(stored.known_user);
        assert_eq!(stored.profile, UserProfile::default());

        let missing = engine.resolve("ghost", &mut rng);
        assert!(!missing.known_user);
        assert_eq!(missing.profile, UserProfile::default());
    }

    #[test]
    fn test_clones_share_store() {
        let engine = create_engine();
        let other = engine.clone();

        assert!(std::ptr::eq(engine.store(), other.store()));
    }
}
