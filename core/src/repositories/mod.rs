pub mod favorites;

pub use favorites::{FavoritesStore, InMemoryFavoritesStore};
