//! Splitting of free-text ingredient and step fields.
//!
//! The backend stores both lists as delimited text. Newline-separated text is
//! taken as an explicit ordered list, one entry per line. Anything else falls
//! back to splitting ingredients on `,` and steps on `.`, which breaks a step
//! that itself contains a period; that fallback is kept only for recipes
//! written before lists were entered line by line.
//!
//! Some listings send the lists as JSON arrays. [`ListText`] keeps that shape
//! so an array item is never cut on a delimiter it happens to contain.

use serde::{Deserialize, Deserializer, Serialize};

/// An ingredient or step list as the backend sent it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ListText {
    Text(String),
    Items(Vec<String>),
}

impl Default for ListText {
    fn default() -> Self {
        ListText::Text(String::new())
    }
}

impl From<String> for ListText {
    fn from(text: String) -> Self {
        ListText::Text(text)
    }
}

impl From<&str> for ListText {
    fn from(text: &str) -> Self {
        ListText::Text(text.to_string())
    }
}

impl ListText {
    /// Ordered entries. Array items are taken whole; text is split.
    pub fn entries(&self, delimiter: char) -> Vec<String> {
        match self {
            ListText::Text(text) => split_list(text, delimiter),
            ListText::Items(items) => items
                .iter()
                .map(|item| item.trim())
                .filter(|item| !item.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }

    /// Editable text form; array items become lines.
    pub fn to_text(&self) -> String {
        match self {
            ListText::Text(text) => text.clone(),
            ListText::Items(items) => join_list(items),
        }
    }
}

/// Serde helper that also accepts `null` as an empty list.
pub fn list_text_or_null<'de, D>(deserializer: D) -> Result<ListText, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<ListText>::deserialize(deserializer)?.unwrap_or_default())
}

/// Split ingredient text into an ordered list.
pub fn split_ingredients(text: &str) -> Vec<String> {
    split_list(text, ',')
}

/// Split step text into an ordered list.
pub fn split_steps(text: &str) -> Vec<String> {
    split_list(text, '.')
}

/// Join list items into the newline form understood by the splitters.
pub fn join_list<S: AsRef<str>>(items: &[S]) -> String {
    items
        .iter()
        .map(|item| item.as_ref().trim())
        .filter(|item| !item.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn split_list(text: &str, delimiter: char) -> Vec<String> {
    let pieces: Vec<&str> = if text.contains('\n') {
        text.lines().collect()
    } else {
        text.split(delimiter).collect()
    };
    pieces
        .into_iter()
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}
