//! In-memory implementation of the favorites store.
//!
//! The app keeps favorites for the lifetime of the process; no persistence
//! layer sits behind this store. The lock keeps the one-entry-per-id
//! invariant intact even when several screens toggle favorites concurrently.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::FavoriteEntry;
use crate::domain::value_objects::Category;
use crate::errors::DomainResult;

use super::trait_::FavoritesStore;

/// Favorites store backed by a shared in-memory map
pub struct InMemoryFavoritesStore {
    entries: Arc<RwLock<HashMap<String, FavoriteEntry>>>,
}

impl InMemoryFavoritesStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for InMemoryFavoritesStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FavoritesStore for InMemoryFavoritesStore {
    async fn is_favorite(&self, id: &str) -> DomainResult<bool> {
        let entries = self.entries.read().await;
        Ok(entries.contains_key(id))
    }

    async fn add(&self, entry: FavoriteEntry) -> DomainResult<()> {
        let mut entries = self.entries.write().await;
        entries.insert(entry.id.clone(), entry);
        Ok(())
    }

    async fn remove(&self, id: &str) -> DomainResult<bool> {
        let mut entries = self.entries.write().await;
        Ok(entries.remove(id).is_some())
    }

    async fn list(&self, category: Option<Category>) -> DomainResult<Vec<FavoriteEntry>> {
        let entries = self.entries.read().await;
        let mut favorites: Vec<FavoriteEntry> = entries
            .values()
            .filter(|entry| category.map_or(true, |c| entry.category == c))
            .cloned()
            .collect();
        favorites.sort_by(|a, b| b.added_at.cmp(&a.added_at));
        Ok(favorites)
    }
}
