//! # Account payloads
//!
//! [`Registration`] is the body of `POST /users/register` and [`Credentials`]
//! the body of `POST /users/login`. Both are produced by
//! [`crate::validation`], never built straight from form input.
//!
//! [`LoginResponse`] is what the login endpoint answers with. Backends differ
//! in naming (`token` vs `jwtToken`, `userId` vs `id`), so both spellings are
//! accepted. [`LoginResponse::into_session`] turns it into the
//! [`store::Session`] the caller installs.

use serde::{Deserialize, Serialize};
use store::{Session, UserId};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Registration {
    pub email: String,
    pub password: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    #[serde(alias = "jwtToken")]
    pub token: String,
    #[serde(alias = "id")]
    pub user_id: UserId,
}

impl LoginResponse {
    pub fn into_session(self) -> Session {
        Session {
            token: self.token,
            user_id: self.user_id,
        }
    }
}

impl std::fmt::Display for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Passwords never end up in logs
        write!(f, "{}", self.email)
    }
}
