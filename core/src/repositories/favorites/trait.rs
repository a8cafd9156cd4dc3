//! Favorites store trait defining the boundary listing screens call.
//!
//! The workflow and the search filter never touch favorites; listing screens
//! toggle and read them through this trait. Implementations must keep at
//! most one entry per listing id.

use async_trait::async_trait;

use crate::domain::entities::FavoriteEntry;
use crate::domain::value_objects::Category;
use crate::errors::DomainResult;

/// Store for the user's favorite listings
///
/// The id is the dedup key across every operation. Implementations map
/// storage failures to `DomainError::Internal`; a missing entry is never an
/// error.
///
/// # Example Implementation
/// ```no_run
/// use async_trait::async_trait;
/// use be_core::repositories::FavoritesStore;
/// use be_core::domain::entities::FavoriteEntry;
/// use be_core::domain::value_objects::Category;
/// use be_core::errors::DomainResult;
///
/// struct SqliteFavoritesStore {
///     // connection handle
/// }
///
/// #[async_trait]
/// impl FavoritesStore for SqliteFavoritesStore {
///     async fn is_favorite(&self, _id: &str) -> DomainResult<bool> {
///         Ok(false)
///     }
///
///     async fn add(&self, _entry: FavoriteEntry) -> DomainResult<()> {
///         Ok(())
///     }
///
///     async fn remove(&self, _id: &str) -> DomainResult<bool> {
///         Ok(false)
///     }
///
///     async fn list(&self, _category: Option<Category>) -> DomainResult<Vec<FavoriteEntry>> {
///         Ok(Vec::new())
///     }
/// }
/// ```
#[async_trait]
pub trait FavoritesStore: Send + Sync {
    /// Checks whether a listing is currently favorited
    async fn is_favorite(&self, id: &str) -> DomainResult<bool>;

    /// Adds an entry, replacing any previous entry with the same id
    async fn add(&self, entry: FavoriteEntry) -> DomainResult<()>;

    /// Removes the entry for an id
    ///
    /// # Returns
    /// * `Ok(true)` - An entry existed and was removed
    /// * `Ok(false)` - Nothing was stored under the id; not an error
    async fn remove(&self, id: &str) -> DomainResult<bool>;

    /// Lists favorites, most recently added first
    ///
    /// # Arguments
    /// * `category` - When set, only entries of that category are returned
    async fn list(&self, category: Option<Category>) -> DomainResult<Vec<FavoriteEntry>>;
}
