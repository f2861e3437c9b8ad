use rand::seq::SliceRandom;
use rand::Rng;
use crate::models::{UserProfile, Advertisement};
use crate::core::filters::matches_targeting;

/// All ads whose targeting matches the profile, in storage order
pub fn candidates<'a>(profile: &UserProfile, ads: &'a [Advertisement]) -> Vec<&'a Advertisement> {
    ads.iter()
        .filter(|ad| matches_targeting(profile, &ad.targeting))
        .collect()
}

/// Select one matching ad uniformly at random
///
/// # Pipeline Stages
/// 1. Filter ads through the targeting predicate
/// 2. Pick one candidate with equal probability
///
/// Returns `None` without touching `rng` when no ad matches.
pub fn select_ad<'a, R>(
    profile: &UserProfile,
    ads: &'a [Advertisement],
    rng: &mut R,
) -> Option<&'a Advertisement>
where
    R: Rng + ?Sized,
{
    let matching = candidates(profile, ads);

    if matching.is_empty() {
        return None;
    }

    matching.choose(rng).copied()
}
