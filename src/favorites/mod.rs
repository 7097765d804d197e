pub mod storage;

pub use storage::{FavoritesStorage, FileStorage, MemoryStorage};

use crate::error::StorageError;
use indexmap::IndexSet;
use tracing::{debug, warn};

/// Storage slot holding the JSON array of favorite ids
pub const FAVORITES_KEY: &str = "favorites";

type CountListener = Box<dyn FnMut(usize) + Send>;

/// The user's favorite property ids, mirrored into a storage slot.
///
/// Ids keep the order they were first added in, so toggling an id on and
/// off again writes back exactly what the slot held before.
/// Every toggle rewrites the whole slot before returning, so a later
/// `is_favorite` or query always sees it. Mutation needs `&mut self`;
/// callers sharing a store across threads wrap it in a mutex.
pub struct FavoritesStore<S: FavoritesStorage> {
    ids: IndexSet<String>,
    storage: S,
    on_change: Option<CountListener>,
}

impl<S: FavoritesStorage> FavoritesStore<S> {
    /// Open the store, restoring whatever the slot holds
    pub fn open(storage: S) -> Self {
        let ids = load(&storage);
        debug!("Restored {} favorites", ids.len());
        Self {
            ids,
            storage,
            on_change: None,
        }
    }

    /// Register the size display. It is told the current size right away
    /// and again after every toggle.
    pub fn set_counter(&mut self, mut listener: impl FnMut(usize) + Send + 'static) {
        listener(self.ids.len());
        self.on_change = Some(Box::new(listener));
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Flip membership of `id`, persist, and return the new membership
    pub fn toggle(&mut self, id: &str) -> bool {
        let now_favorite = if self.ids.shift_remove(id) {
            false
        } else {
            self.ids.insert(id.to_string());
            true
        };

        if let Err(e) = self.save() {
            warn!("Failed to save favorites: {}", e);
        }
        if let Some(listener) = self.on_change.as_mut() {
            listener(self.ids.len());
        }
        now_favorite
    }

    pub fn size(&self) -> usize {
        self.ids.len()
    }

    pub fn ids(&self) -> &IndexSet<String> {
        &self.ids
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn save(&mut self) -> Result<(), StorageError> {
        let encoded = serde_json::to_string(&self.ids)?;
        self.storage.write(FAVORITES_KEY, &encoded)
    }
}

/// Rebuild the favorites set from storage. A missing, unreadable or
/// malformed slot gives an empty set.
pub fn load<S: FavoritesStorage>(storage: &S) -> IndexSet<String> {
    let raw = match storage.read(FAVORITES_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return IndexSet::new(),
        Err(e) => {
            warn!("Failed to read favorites: {}", e);
            return IndexSet::new();
        }
    };

    if raw.trim().is_empty() {
        return IndexSet::new();
    }

    match serde_json::from_str::<Vec<String>>(&raw) {
        Ok(ids) => ids.into_iter().collect(),
        Err(e) => {
            warn!("Ignoring malformed favorites: {}", e);
            IndexSet::new()
        }
    }
}
