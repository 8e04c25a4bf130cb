//! # Domain models for recipes and categories
//!
//! Defines the data structures exchanged with the recipe backend. Every type is
//! `Serialize + Deserialize` and uses the backend's camelCase field names so the
//! same structs can be decoded straight from a response body and encoded into a
//! request body.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`Recipe`] | A recipe as the backend returns it. Carries the server-assigned `id`, the text fields, the `categoryId` foreign key, an embedded [`Author`] snapshot and the creation timestamp. |
//! | [`Author`] | The denormalised `{id, name}` author snapshot embedded in a recipe. |
//! | [`Category`] | A classification tag (`{id, name}`) fetched once per view. |
//! | [`RecipeFields`] | The create/update payload sent to `POST /recipes` and `PUT /recipes/{id}`. |
//! | [`RecipeDraft`] | Editable form state. The category is optional until the user picks one; validation turns a draft into [`RecipeFields`]. |
//!
//! ## Free-text lists
//!
//! `ingredients` and `steps` travel as free text. Some listings send them as JSON
//! arrays instead; both shapes decode into [`ListText`], which splits only the
//! text form.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::text::{list_text_or_null, ListText};

pub type RecipeId = i64;
pub type CategoryId = i64;
pub type UserId = i64;

/// Author snapshot embedded in a recipe.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: UserId,
    #[serde(default)]
    pub name: String,
}

/// A recipe as held by the client (a read-through copy of the backend row).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: RecipeId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Comma-delimited (or newline-delimited) ingredient text
    #[serde(default, deserialize_with = "list_text_or_null")]
    pub ingredients: ListText,
    /// Period-delimited (or newline-delimited) step text
    #[serde(default, deserialize_with = "list_text_or_null")]
    pub steps: ListText,
    #[serde(default)]
    pub category_id: Option<CategoryId>,
    #[serde(default)]
    pub author: Option<Author>,
    /// Present on listings that do not embed the author
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_id: Option<UserId>,
    /// Raw creation timestamp as sent by the backend
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Recipe {
    /// The author's id, from the embedded snapshot or the bare `authorId`.
    pub fn author_id(&self) -> Option<UserId> {
        self.author.as_ref().map(|a| a.id).or(self.author_id)
    }

    /// Author display name, empty when the listing carries no snapshot.
    pub fn author_name(&self) -> &str {
        self.author.as_ref().map(|a| a.name.as_str()).unwrap_or("")
    }

    /// Whether the given user wrote this recipe.
    pub fn is_authored_by(&self, user_id: UserId) -> bool {
        self.author_id() == Some(user_id)
    }

    pub fn ingredient_list(&self) -> Vec<String> {
        self.ingredients.entries(',')
    }

    pub fn step_list(&self) -> Vec<String> {
        self.steps.entries('.')
    }

    /// Calendar date of creation.
    ///
    /// Accepts RFC 3339 timestamps and falls back to a leading `YYYY-MM-DD`,
    /// which covers the SQL-style timestamps some backends emit.
    pub fn created_date(&self) -> Option<NaiveDate> {
        let raw = self.created_at.as_deref()?.trim();
        if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
            return Some(ts.with_timezone(&Utc).date_naive());
        }
        raw.get(..10)
            .and_then(|day| NaiveDate::parse_from_str(day, "%Y-%m-%d").ok())
    }

    /// Creation date formatted for display ("Mar 4, 2024"), empty if unknown.
    pub fn formatted_date(&self) -> String {
        self.created_date()
            .map(|d| d.format("%b %-d, %Y").to_string())
            .unwrap_or_default()
    }
}

/// A classification tag for recipes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}

/// Visual grouping for a category, chosen by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CategoryStyle {
    Breakfast,
    Lunch,
    Dinner,
    Drinks,
    Pasta,
    Dessert,
    Default,
}

impl CategoryStyle {
    pub fn css_class(&self) -> &'static str {
        match self {
            CategoryStyle::Breakfast => "category-breakfast",
            CategoryStyle::Lunch => "category-lunch",
            CategoryStyle::Dinner => "category-dinner",
            CategoryStyle::Drinks => "category-drinks",
            CategoryStyle::Pasta => "category-pasta",
            CategoryStyle::Dessert => "category-dessert",
            CategoryStyle::Default => "category-default",
        }
    }
}

impl Category {
    /// Derive the display style from the category name.
    ///
    /// The seeded backend names its categories in Croatian, so both spellings
    /// are recognised.
    pub fn style(&self) -> CategoryStyle {
        match self.name.trim().to_lowercase().as_str() {
            "breakfast" | "doručak" => CategoryStyle::Breakfast,
            "lunch" | "ručak" => CategoryStyle::Lunch,
            "dinner" | "večera" => CategoryStyle::Dinner,
            "drink" | "drinks" | "pice" | "piće" => CategoryStyle::Drinks,
            "pasta" => CategoryStyle::Pasta,
            "dessert" | "desert" => CategoryStyle::Dessert,
            _ => CategoryStyle::Default,
        }
    }
}

/// Payload for creating or updating a recipe.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeFields {
    pub title: String,
    pub description: String,
    pub ingredients: String,
    pub steps: String,
    pub category_id: CategoryId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_id: Option<UserId>,
}

/// Form state for the add/edit recipe dialog.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecipeDraft {
    pub title: String,
    pub description: String,
    pub ingredients: String,
    pub steps: String,
    pub category_id: Option<CategoryId>,
}

impl From<&Recipe> for RecipeDraft {
    fn from(recipe: &Recipe) -> Self {
        Self {
            title: recipe.title.clone(),
            description: recipe.description.clone(),
            ingredients: recipe.ingredients.to_text(),
            steps: recipe.steps.to_text(),
            category_id: recipe.category_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_listing_row() {
        let recipe: Recipe = serde_json::from_str(
            r#"{
                "id": 7,
                "title": "Pancakes",
                "description": "Fluffy",
                "ingredients": "flour, milk, eggs",
                "steps": "Mix. Fry.",
                "categoryId": 1,
                "author": {"id": 3, "name": "Ana"},
                "createdAt": "2024-03-04T10:15:00.000Z"
            }"#,
        )
        .unwrap();

        assert_eq!(recipe.id, 7);
        assert_eq!(recipe.category_id, Some(1));
        assert_eq!(recipe.author_id(), Some(3));
        assert_eq!(recipe.author_name(), "Ana");
        assert_eq!(recipe.formatted_date(), "Mar 4, 2024");
        assert_eq!(recipe.ingredient_list(), vec!["flour", "milk", "eggs"]);
        assert_eq!(recipe.step_list(), vec!["Mix", "Fry"]);
    }

    #[test]
    fn test_decode_profile_row_without_author() {
        let recipe: Recipe = serde_json::from_str(
            r#"{"id": 2, "title": "Soup", "authorId": 9, "categoryId": 3}"#,
        )
        .unwrap();

        assert!(recipe.author.is_none());
        assert_eq!(recipe.author_id(), Some(9));
        assert!(recipe.is_authored_by(9));
        assert_eq!(recipe.author_name(), "");
        assert_eq!(recipe.formatted_date(), "");
    }

    #[test]
    fn test_decode_list_shaped_ingredients() {
        let recipe: Recipe = serde_json::from_str(
            r#"{"id": 1, "ingredients": ["salt, to taste", "water"], "steps": null}"#,
        )
        .unwrap();

        assert_eq!(recipe.ingredient_list(), vec!["salt, to taste", "water"]);
        assert!(recipe.step_list().is_empty());
    }

    #[test]
    fn test_decode_single_item_arrays() {
        let recipe: Recipe = serde_json::from_str(
            r#"{"id": 1, "ingredients": ["salt, to taste"], "steps": ["Bake at 180 C. for 1.5 hours"]}"#,
        )
        .unwrap();

        assert_eq!(recipe.ingredient_list(), vec!["salt, to taste"]);
        assert_eq!(recipe.step_list(), vec!["Bake at 180 C. for 1.5 hours"]);
    }

    #[test]
    fn test_list_shape_survives_reencode() {
        let recipe: Recipe =
            serde_json::from_str(r#"{"id": 1, "steps": ["Boil. Then steep."]}"#).unwrap();
        let again: Recipe =
            serde_json::from_value(serde_json::to_value(&recipe).unwrap()).unwrap();
        assert_eq!(again.step_list(), vec!["Boil. Then steep."]);
        assert_eq!(RecipeDraft::from(&again).steps, "Boil. Then steep.");
    }

    #[test]
    fn test_sql_style_timestamp() {
        let recipe = Recipe {
            id: 1,
            title: String::new(),
            description: String::new(),
            ingredients: ListText::default(),
            steps: ListText::default(),
            category_id: None,
            author: None,
            author_id: None,
            created_at: Some("2023-12-24 18:00:00".to_string()),
        };
        assert_eq!(
            recipe.created_date(),
            NaiveDate::from_ymd_opt(2023, 12, 24)
        );
    }

    #[test]
    fn test_fields_wire_names() {
        let fields = RecipeFields {
            title: "Tea".to_string(),
            description: "Hot".to_string(),
            ingredients: "water, tea".to_string(),
            steps: "Boil. Steep.".to_string(),
            category_id: 4,
            author_id: None,
        };
        let json = serde_json::to_value(&fields).unwrap();
        assert_eq!(json["categoryId"], 4);
        assert!(json.get("authorId").is_none());
    }

    #[test]
    fn test_category_style() {
        let cat = |name: &str| Category {
            id: 1,
            name: name.to_string(),
        };
        assert_eq!(cat("Doručak").style(), CategoryStyle::Breakfast);
        assert_eq!(cat("ručak").style(), CategoryStyle::Lunch);
        assert_eq!(cat("Desert").style(), CategoryStyle::Dessert);
        assert_eq!(cat("Pasta").style().css_class(), "category-pasta");
        assert_eq!(cat("Brunch").style(), CategoryStyle::Default);
    }

    #[test]
    fn test_draft_from_recipe() {
        let recipe: Recipe =
            serde_json::from_str(r#"{"id": 5, "title": "Stew", "categoryId": 3}"#).unwrap();
        let draft = RecipeDraft::from(&recipe);
        assert_eq!(draft.title, "Stew");
        assert_eq!(draft.category_id, Some(3));
    }
}
