use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use serde::de::DeserializeOwned;
use thiserror::Error;
use validator::{Validate, ValidationErrors};
use crate::models::{UserProfile, Advertisement};

/// Errors that can occur while loading the data store
///
/// All of these are fatal at startup.
#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid ad #{index} ({category}): {source}")]
    InvalidAd {
        index: usize,
        category: String,
        #[source]
        source: ValidationErrors,
    },
}

/// Read-only store of user profiles and advertisements
///
/// Populated once before serving and never mutated afterwards, so it can be
/// shared across workers behind an `Arc` without locking.
#[derive(Debug, Clone, Default)]
pub struct DataStore {
    users: HashMap<String, UserProfile>,
    ads: Vec<Advertisement>,
}

impl DataStore {
    /// Load users (object of id -> profile) and ads (array) from JSON files
    pub fn load<P, Q>(users_path: P, ads_path: Q) -> Result<Self, DataLoadError>
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
    {
        let users: HashMap<String, UserProfile> = read_json(users_path.as_ref())?;
        let ads: Vec<Advertisement> = read_json(ads_path.as_ref())?;

        let store = Self::from_parts(users, ads)?;

        tracing::info!(
            "Loaded {} users from {} and {} ads from {}",
            store.user_count(),
            users_path.as_ref().display(),
            store.ad_count(),
            ads_path.as_ref().display()
        );

        Ok(store)
    }

    /// Build a store from in-memory collections, validating every ad
    pub fn from_parts(
        users: HashMap<String, UserProfile>,
        ads: Vec<Advertisement>,
    ) -> Result<Self, DataLoadError> {
        for (index, ad) in ads.iter().enumerate() {
            ad.targeting
                .validate()
                .map_err(|source| DataLoadError::InvalidAd {
                    index,
                    category: ad.category.clone(),
                    source,
                })?;
        }

        Ok(Self { users, ads })
    }

    /// Look up a stored profile
    pub fn get_user(&self, user_id: &str) -> Option<&UserProfile> {
        self.users.get(user_id)
    }

    /// Stored profile, or the zero profile (age 0, no interests) for unknown users
    pub fn user_or_default(&self, user_id: &str) -> UserProfile {
        self.get_user(user_id).cloned().unwrap_or_default()
    }

    pub fn ads(&self) -> &[Advertisement] {
        &self.ads
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    pub fn ad_count(&self) -> usize {
        self.ads.len()
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, DataLoadError> {
    let content = fs::read_to_string(path).map_err(|source| DataLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| DataLoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
