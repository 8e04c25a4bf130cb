mod layout;
pub use layout::AppLayout;

mod lists;
pub use lists::{AllRecipes, AuthorRecipes, CategoryPage, Home, Search};

mod recipe_detail;
pub use recipe_detail::RecipeDetail;

mod profile;
pub use profile::Profile;

mod login;
pub use login::Login;

mod registration;
pub use registration::Registration;

pub(crate) fn make_session() -> store::SessionHandle {
    #[cfg(target_arch = "wasm32")]
    {
        store::SessionHandle::new(store::LocalStorage::new())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        store::SessionHandle::new(store::MemorySessionStorage::new())
    }
}
