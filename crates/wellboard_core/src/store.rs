//! Persistence seam between the workflow and whatever backs it.
//!
//! The workflow only talks to [`SessionStore`]; the storage crate decides how
//! values are encoded and where they live. Every method is infallible from
//! the caller's side: storage problems are logged and treated as "no data".

use serde::{Deserialize, Serialize};

use crate::model::{Profile, Tip};
use crate::workflow::WorkflowStep;

/// Substring shared by every key the application writes.
pub const NAMESPACE: &str = "wellness";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
    UserProfile,
    Favorites,
    AppState,
}

impl StorageKey {
    pub const ALL: [StorageKey; 3] = [StorageKey::UserProfile, StorageKey::Favorites, StorageKey::AppState];

    pub fn as_str(&self) -> &'static str {
        match self {
            StorageKey::UserProfile => "wellness-user-profile",
            StorageKey::Favorites => "wellness-favorites",
            StorageKey::AppState => "wellness-app-state",
        }
    }
}

/// Shape written under [`StorageKey::AppState`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateSnapshot {
    pub user_profile: Option<Profile>,
    pub favorite_tips: Vec<Tip>,
    pub current_step: WorkflowStep,
}

pub trait SessionStore: Send + Sync {
    fn load_profile(&self) -> Option<Profile>;
    fn load_favorites(&self) -> Vec<Tip>;
    fn load_snapshot(&self) -> Option<StateSnapshot>;
    fn save_profile(&self, profile: &Profile);
    fn save_favorites(&self, favorites: &[Tip]);
    fn save_snapshot(&self, snapshot: &StateSnapshot);
    /// Remove the given keys.
    fn forget(&self, keys: &[StorageKey]);
    /// Remove every fixed key plus anything else inside the namespace.
    fn erase_all(&self);
}

/// Store that keeps nothing. Sessions built on it start empty every time.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullStore;

impl SessionStore for NullStore {
    fn load_profile(&self) -> Option<Profile> {
        None
    }
    fn load_favorites(&self) -> Vec<Tip> {
        Vec::new()
    }
    fn load_snapshot(&self) -> Option<StateSnapshot> {
        None
    }
    fn save_profile(&self, _profile: &Profile) {}
    fn save_favorites(&self, _favorites: &[Tip]) {}
    fn save_snapshot(&self, _snapshot: &StateSnapshot) {}
    fn forget(&self, _keys: &[StorageKey]) {}
    fn erase_all(&self) {}
}
