//! # List filters
//!
//! A [`RecipeFilter`] is what a list page is parametrized with: everything, one
//! category, a title search, or one author's recipes. Each filter has two
//! parts:
//!
//! - a [`FetchScope`], the collection that has to be fetched from the server.
//!   Only category filters narrow the request (`?categoryId=`); search and
//!   author filters work on the full collection.
//! - a predicate, applied client-side to whatever the server returned. It is
//!   pure and keeps the server's order, so changing a search query re-derives
//!   the visible subset without another request.

use crate::models::{CategoryId, Recipe, UserId};

/// Predicate a recipe list view is configured with.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum RecipeFilter {
    #[default]
    All,
    Category(CategoryId),
    /// Case-insensitive substring match on the title
    Search(String),
    Author(UserId),
}

/// The collection that must be fetched to evaluate a filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FetchScope {
    All,
    Category(CategoryId),
}

impl FetchScope {
    /// Category id to pass to the server, if any.
    pub fn category(&self) -> Option<CategoryId> {
        match self {
            FetchScope::All => None,
            FetchScope::Category(id) => Some(*id),
        }
    }
}

impl RecipeFilter {
    pub fn scope(&self) -> FetchScope {
        match self {
            RecipeFilter::Category(id) => FetchScope::Category(*id),
            RecipeFilter::All | RecipeFilter::Search(_) | RecipeFilter::Author(_) => {
                FetchScope::All
            }
        }
    }

    pub fn matches(&self, recipe: &Recipe) -> bool {
        match self {
            RecipeFilter::All => true,
            RecipeFilter::Category(id) => recipe.category_id == Some(*id),
            RecipeFilter::Search(query) => recipe
                .title
                .to_lowercase()
                .contains(&query.to_lowercase()),
            RecipeFilter::Author(id) => recipe.author_id() == Some(*id),
        }
    }

    /// The matching recipes, in their original relative order.
    pub fn apply(&self, recipes: &[Recipe]) -> Vec<Recipe> {
        recipes
            .iter()
            .filter(|recipe| self.matches(recipe))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Author;
    use crate::text::ListText;

    fn recipe(id: i64, title: &str, category_id: i64, author_id: i64) -> Recipe {
        Recipe {
            id,
            title: title.to_string(),
            description: String::new(),
            ingredients: ListText::default(),
            steps: ListText::default(),
            category_id: Some(category_id),
            author: Some(Author {
                id: author_id,
                name: format!("user{author_id}"),
            }),
            author_id: None,
            created_at: None,
        }
    }

    fn ids(recipes: &[Recipe]) -> Vec<i64> {
        recipes.iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_category_filter_exact_match() {
        let all = vec![recipe(1, "Omelette", 1, 1), recipe(2, "Steak", 3, 1)];
        assert_eq!(ids(&RecipeFilter::Category(1).apply(&all)), vec![1]);
    }

    #[test]
    fn test_category_filter_keeps_order() {
        let all = vec![
            recipe(9, "a", 2, 1),
            recipe(3, "b", 5, 1),
            recipe(7, "c", 2, 1),
            recipe(1, "d", 2, 1),
        ];
        assert_eq!(ids(&RecipeFilter::Category(2).apply(&all)), vec![9, 7, 1]);
        assert!(RecipeFilter::Category(4).apply(&all).is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let all = vec![recipe(1, "Chocolate Cake", 6, 1), recipe(2, "Bread", 1, 1)];
        let found = RecipeFilter::Search("cake".to_string()).apply(&all);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "Chocolate Cake");

        let found = RecipeFilter::Search("READ".to_string()).apply(&all);
        assert_eq!(ids(&found), vec![2]);
    }

    #[test]
    fn test_author_filter_uses_author_id_fallback() {
        let mut bare = recipe(4, "Soup", 3, 0);
        bare.author = None;
        bare.author_id = Some(8);
        let all = vec![recipe(1, "Tea", 4, 8), recipe(2, "Pie", 6, 2), bare];
        assert_eq!(ids(&RecipeFilter::Author(8).apply(&all)), vec![1, 4]);
    }

    #[test]
    fn test_scopes() {
        assert_eq!(RecipeFilter::All.scope(), FetchScope::All);
        assert_eq!(RecipeFilter::Category(5).scope(), FetchScope::Category(5));
        assert_eq!(RecipeFilter::Search("x".into()).scope(), FetchScope::All);
        assert_eq!(RecipeFilter::Author(2).scope().category(), None);
        assert_eq!(FetchScope::Category(5).category(), Some(5));
    }
}
