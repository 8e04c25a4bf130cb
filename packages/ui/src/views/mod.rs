mod recipe_list;
pub use recipe_list::RecipeListView;

mod recipe_detail;
pub use recipe_detail::RecipeDetailView;

mod profile;
pub use profile::ProfileView;
