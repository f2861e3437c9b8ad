use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use validator::{Validate, ValidationError, ValidationErrors};

/// User profile used for targeting
///
/// Both fields default when absent from the source data, so a profile of
/// `{}` loads as age 0 with no interests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub age: u32,
    /// Interest tags in source order; matching treats them as a set.
    #[serde(default)]
    pub interests: Vec<String>,
}

impl UserProfile {
    pub fn new(age: u32, interests: &[&str]) -> Self {
        Self {
            age,
            interests: interests.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn has_interest(&self, tag: &str) -> bool {
        self.interests.iter().any(|i| i == tag)
    }
}

/// Inclusive age bounds, serialized as a `[lower, upper]` pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeRange(pub u32, pub u32);

impl AgeRange {
    pub fn lower(&self) -> u32 {
        self.0
    }

    pub fn upper(&self) -> u32 {
        self.1
    }

    #[inline]
    pub fn contains(&self, age: u32) -> bool {
        self.0 <= age && age <= self.1
    }
}

/// Targeting criteria attached to an advertisement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Targeting {
    pub age_range: AgeRange,
    pub interests: Vec<String>,
}

impl Validate for Targeting {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if self.age_range.lower() > self.age_range.upper() {
            let mut err = ValidationError::new("age_range_order");
            err.message = Some(Cow::from("age_range lower bound exceeds upper bound"));
            err.add_param(Cow::from("lower"), &self.age_range.lower());
            err.add_param(Cow::from("upper"), &self.age_range.upper());
            errors.add("age_range", err);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Advertisement record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advertisement {
    pub category: String,
    pub message: String,
    pub targeting: Targeting,
}
