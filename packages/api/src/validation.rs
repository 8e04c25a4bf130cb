//! Client-side form validation.
//!
//! These checks run before any request is sent. A failure never reaches the
//! network; it is shown to the user as-is.

use std::sync::LazyLock;

use regex::Regex;
use store::{RecipeDraft, RecipeFields, UserId};
use thiserror::Error;

use crate::models::{Credentials, Registration};

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("All fields are mandatory!")]
    MissingFields,
    #[error("Wrong email address!")]
    InvalidEmail,
    #[error("Please enter a title.")]
    MissingTitle,
    #[error("Please select a category.")]
    MissingCategory,
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Check a registration form. Email and name are trimmed; the password is not.
pub fn validate_registration(
    email: &str,
    password: &str,
    name: &str,
) -> Result<Registration, ValidationError> {
    let email = email.trim();
    let name = name.trim();
    if email.is_empty() || password.is_empty() || name.is_empty() {
        return Err(ValidationError::MissingFields);
    }
    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(Registration {
        email: email.to_string(),
        password: password.to_string(),
        name: name.to_string(),
    })
}

pub fn validate_credentials(email: &str, password: &str) -> Result<Credentials, ValidationError> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(ValidationError::MissingFields);
    }
    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(Credentials {
        email: email.to_string(),
        password: password.to_string(),
    })
}

/// Turn add/edit form state into a request payload.
pub fn validate_draft(
    draft: &RecipeDraft,
    author_id: Option<UserId>,
) -> Result<RecipeFields, ValidationError> {
    let title = draft.title.trim();
    if title.is_empty() {
        return Err(ValidationError::MissingTitle);
    }
    let category_id = draft.category_id.ok_or(ValidationError::MissingCategory)?;
    Ok(RecipeFields {
        title: title.to_string(),
        description: draft.description.trim().to_string(),
        ingredients: draft.ingredients.trim().to_string(),
        steps: draft.steps.trim().to_string(),
        category_id,
        author_id,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_shape() {
        assert!(is_valid_email("ana@example.com"));
        assert!(is_valid_email("a.b+c@mail.co.uk"));
        assert!(!is_valid_email("ana@example"));
        assert!(!is_valid_email("ana example@x.com"));
        assert!(!is_valid_email("@x.com"));
    }

    #[test]
    fn test_registration_requires_all_fields() {
        assert_eq!(
            validate_registration("ana@example.com", "", "Ana"),
            Err(ValidationError::MissingFields)
        );
        assert_eq!(
            validate_registration("  ", "pw", "Ana"),
            Err(ValidationError::MissingFields)
        );
        assert_eq!(
            validate_registration("ana", "pw", "Ana"),
            Err(ValidationError::InvalidEmail)
        );
    }

    #[test]
    fn test_registration_trims() {
        let reg = validate_registration(" ana@example.com ", " secret ", " Ana ").unwrap();
        assert_eq!(reg.email, "ana@example.com");
        assert_eq!(reg.name, "Ana");
        assert_eq!(reg.password, " secret ");
    }

    #[test]
    fn test_credentials() {
        assert!(validate_credentials("ana@example.com", "pw").is_ok());
        assert_eq!(
            validate_credentials("ana@example.com", ""),
            Err(ValidationError::MissingFields)
        );
    }

    #[test]
    fn test_draft_requires_title_and_category() {
        let mut draft = RecipeDraft {
            title: "  ".to_string(),
            ..RecipeDraft::default()
        };
        assert_eq!(
            validate_draft(&draft, None),
            Err(ValidationError::MissingTitle)
        );

        draft.title = " Goulash ".to_string();
        assert_eq!(
            validate_draft(&draft, None),
            Err(ValidationError::MissingCategory)
        );

        draft.category_id = Some(3);
        let fields = validate_draft(&draft, Some(12)).unwrap();
        assert_eq!(fields.title, "Goulash");
        assert_eq!(fields.category_id, 3);
        assert_eq!(fields.author_id, Some(12));
    }
}
