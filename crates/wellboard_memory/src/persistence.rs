//! Persistence adapter: typed values over a [`KeyValueStore`].
//!
//! Nothing here ever returns an error to the caller. Failed reads and
//! malformed payloads are logged and reported as "absent"; failed writes are
//! logged and dropped.

use serde::de::DeserializeOwned;
use serde::Serialize;
use wellboard_core::{Profile, SessionStore, StateSnapshot, StorageKey, Tip};

use crate::kv::KeyValueStore;

pub struct Persistence<S> {
    store: S,
    namespace: String,
}

impl<S: KeyValueStore> Persistence<S> {
    pub fn new(store: S) -> Self {
        Self::with_namespace(store, wellboard_core::store::NAMESPACE)
    }

    pub fn with_namespace(store: S, namespace: &str) -> Self {
        Self {
            store,
            namespace: namespace.to_string(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn load<T: DeserializeOwned>(&self, key: StorageKey) -> Option<T> {
        let raw = match self.store.get(key.as_str()) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!("Failed to read {}: {}", key.as_str(), e);
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("Discarding malformed {}: {}", key.as_str(), e);
                None
            }
        }
    }

    pub fn save<T: Serialize + ?Sized>(&self, key: StorageKey, value: &T) {
        let encoded = match serde_json::to_string(value) {
            Ok(encoded) => encoded,
            Err(e) => {
                tracing::warn!("Failed to encode {}: {}", key.as_str(), e);
                return;
            }
        };
        if let Err(e) = self.store.set(key.as_str(), &encoded) {
            tracing::warn!("Failed to write {}: {}", key.as_str(), e);
        }
    }

    pub fn remove_all(&self, keys: &[StorageKey]) {
        for key in keys {
            if let Err(e) = self.store.remove(key.as_str()) {
                tracing::warn!("Failed to remove {}: {}", key.as_str(), e);
            }
        }
    }

    /// Remove every stored key containing the namespace substring.
    pub fn sweep_namespace(&self) {
        let keys = match self.store.keys() {
            Ok(keys) => keys,
            Err(e) => {
                tracing::warn!("Failed to list stored keys: {}", e);
                return;
            }
        };
        for key in keys.iter().filter(|k| k.contains(&self.namespace)) {
            tracing::debug!("Sweeping stored key {}", key);
            if let Err(e) = self.store.remove(key) {
                tracing::warn!("Failed to remove {}: {}", key, e);
            }
        }
    }
}

impl<S: KeyValueStore> SessionStore for Persistence<S> {
    fn load_profile(&self) -> Option<Profile> {
        self.load(StorageKey::UserProfile)
    }

    fn load_favorites(&self) -> Vec<Tip> {
        self.load(StorageKey::Favorites).unwrap_or_default()
    }

    fn load_snapshot(&self) -> Option<StateSnapshot> {
        self.load(StorageKey::AppState)
    }

    fn save_profile(&self, profile: &Profile) {
        self.save(StorageKey::UserProfile, profile);
    }

    fn save_favorites(&self, favorites: &[Tip]) {
        self.save(StorageKey::Favorites, favorites);
    }

    fn save_snapshot(&self, snapshot: &StateSnapshot) {
        self.save(StorageKey::AppState, snapshot);
    }

    fn forget(&self, keys: &[StorageKey]) {
        self.remove_all(keys);
    }

    fn erase_all(&self) {
        self.remove_all(&StorageKey::ALL);
        self.sweep_namespace();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::MemoryStore;
    use wellboard_core::{find_goal, Gender};

    fn profile() -> Profile {
        Profile::new(30, Gender::Female, vec![find_goal("better-sleep").unwrap()]).unwrap()
    }

    #[test]
    fn test_profile_roundtrip_keeps_timestamps() {
        let p = Persistence::new(MemoryStore::new());
        let original = profile();
        p.save_profile(&original);

        let loaded = p.load_profile().unwrap();
        assert_eq!(loaded, original);
        assert_eq!(loaded.created_at, original.created_at);
    }

    #[test]
    fn test_malformed_payload_is_absent() {
        let p = Persistence::new(MemoryStore::new());
        p.store().set(StorageKey::UserProfile.as_str(), "{not json").unwrap();
        p.store().set(StorageKey::Favorites.as_str(), r#"{"shape":"wrong"}"#).unwrap();
        assert!(p.load_profile().is_none());
        assert!(p.load_favorites().is_empty());
    }

    #[test]
    fn test_erase_all_sweeps_namespace() {
        let p = Persistence::new(MemoryStore::new());
        p.save_profile(&profile());
        p.save_favorites(&[]);
        p.store().set("ai-wellness-legacy-cache", "x").unwrap();
        p.store().set("unrelated", "keep").unwrap();

        p.erase_all();

        for key in StorageKey::ALL {
            assert!(p.load::<serde_json::Value>(key).is_none());
        }
        assert_eq!(p.store().keys().unwrap(), vec!["unrelated".to_string()]);
    }
}
