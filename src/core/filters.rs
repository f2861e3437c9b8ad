use crate::models::{UserProfile, Targeting};

/// Check whether the profile's age falls inside the ad's inclusive age range
#[inline]
pub fn matches_age(profile: &UserProfile, targeting: &Targeting) -> bool {
    targeting.age_range.contains(profile.age)
}

/// Check whether the profile shares at least one interest with the ad
///
/// An ad with no target interests never matches.
#[inline]
pub fn matches_interests(profile: &UserProfile, targeting: &Targeting) -> bool {
    targeting
        .interests
        .iter()
        .any(|tag| profile.has_interest(tag))
}

/// Interests the profile and the ad have in common, in the ad's order
pub fn shared_interests(profile: &UserProfile, targeting: &Targeting) -> Vec<String> {
    let mut shared = Vec::new();
    for tag in &targeting.interests {
        if profile.has_interest(tag) && !shared.contains(tag) {
            shared.push(tag.clone());
        }
    }
    shared
}

/// Full targeting predicate: age in range AND at least one shared interest
#[inline]
pub fn matches_targeting(profile: &UserProfile, targeting: &Targeting) -> bool {
    matches_age(profile, targeting) && matches_interests(profile, targeting)
}
