pub mod config;
pub mod favorites;
pub mod filter;
pub mod models;
pub mod session;
pub mod text;

mod memory;
pub use memory::MemorySessionStorage;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local_storage::LocalStorage;

pub use config::{CategoryRoute, RecipeRealmConfig};
pub use favorites::FavoritesSet;
pub use filter::{FetchScope, RecipeFilter};
pub use models::{
    Author, Category, CategoryId, CategoryStyle, RecipeDraft, RecipeFields, Recipe, RecipeId,
    UserId,
};
pub use session::{Session, SessionHandle, SessionStorage};
pub use text::ListText;
