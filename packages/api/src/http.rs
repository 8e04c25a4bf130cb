//! # HTTP recipe store
//!
//! [`HttpRecipeStore`] implements [`RecipeStore`] over the backend's REST
//! surface with `reqwest`, which compiles to `fetch` in the browser and to a
//! native client everywhere else.
//!
//! | Operation | Request | Auth |
//! |-----------|---------|------|
//! | `list_recipes` | `GET /recipes[?categoryId=]` | none |
//! | `get_recipe` | `GET /recipes/{id}` | none |
//! | `list_categories` | `GET /categories` | none |
//! | `list_favorites` | `GET /recipes/favorite` | bearer |
//! | `list_user_recipes` | `GET /recipes/user-recipes` | bearer |
//! | `add_favorite` | `POST /recipes/favorite` `{recipeId}` | bearer |
//! | `remove_favorite` | `DELETE /recipes/favorite` `{recipeId}` | bearer |
//! | `create_recipe` | `POST /recipes` | bearer |
//! | `update_recipe` | `PUT /recipes/{id}` | bearer |
//! | `delete_recipe` | `DELETE /recipes/{id}` | bearer |
//! | `register` | `POST /users/register` | none |
//! | `login` | `POST /users/login` | none |
//!
//! The bearer token is read from the [`SessionHandle`] when each call starts.
//! A 409 on `add_favorite` maps to [`FavoriteOutcome::AlreadyFavorited`]; any
//! other non-2xx status becomes [`ApiError::Http`] carrying the body's
//! `message` when there is one.

use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use store::{
    Category, CategoryId, Recipe, RecipeFields, RecipeId, RecipeRealmConfig, Session,
    SessionHandle,
};

use crate::error::ApiError;
use crate::models::{Credentials, FavoriteOutcome, FavoriteRequest, LoginResponse, Registration};
use crate::RecipeStore;

/// REST client for the recipe backend.
#[derive(Clone, Debug)]
pub struct HttpRecipeStore {
    client: reqwest::Client,
    base_url: String,
    session: SessionHandle,
}

impl HttpRecipeStore {
    pub fn new(base_url: impl Into<String>, session: SessionHandle) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            session,
        }
    }

    pub fn from_config(config: &RecipeRealmConfig, session: SessionHandle) -> Self {
        Self::new(config.api.base_url.clone(), session)
    }

    pub fn session(&self) -> &SessionHandle {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Token for an authenticated call, read now.
    fn bearer(&self) -> Result<String, ApiError> {
        self.session.token().ok_or(ApiError::AuthRequired)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let response = request.send().await.map_err(|e| {
            tracing::warn!("Request failed: {}", e);
            ApiError::from(e)
        })?;
        check_status(response).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.url(path);
        tracing::debug!("GET {}", url);
        let response = self.send(self.client.get(url)).await?;
        decode(response).await
    }

    async fn get_json_authed<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let token = self.bearer()?;
        let url = self.url(path);
        tracing::debug!("GET {} (authenticated)", url);
        let response = self.send(self.client.get(url).bearer_auth(token)).await?;
        decode(response).await
    }
}

async fn check_status(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let url = response.url().to_string();
    let body = response.text().await.unwrap_or_default();
    let err = ApiError::from_status(status.as_u16(), &body);
    tracing::warn!("{} answered {}: {:?}", url, status, err);
    Err(err)
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response.json::<T>().await.map_err(|e| {
        tracing::error!("Failed to decode response: {}", e);
        ApiError::Decode(e.to_string())
    })
}

impl RecipeStore for HttpRecipeStore {
    async fn list_recipes(&self, category: Option<CategoryId>) -> Result<Vec<Recipe>, ApiError> {
        let url = self.url("/recipes");
        tracing::debug!("GET {} category={:?}", url, category);
        let mut request = self.client.get(url);
        if let Some(id) = category {
            request = request.query(&[("categoryId", id)]);
        }
        let response = self.send(request).await?;
        decode(response).await
    }

    async fn get_recipe(&self, id: RecipeId) -> Result<Recipe, ApiError> {
        self.get_json(&format!("/recipes/{id}")).await
    }

    async fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        self.get_json("/categories").await
    }

    async fn list_favorites(&self) -> Result<Vec<Recipe>, ApiError> {
        self.get_json_authed("/recipes/favorite").await
    }

    async fn list_user_recipes(&self) -> Result<Vec<Recipe>, ApiError> {
        self.get_json_authed("/recipes/user-recipes").await
    }

    async fn add_favorite(&self, id: RecipeId) -> Result<FavoriteOutcome, ApiError> {
        let token = self.bearer()?;
        tracing::debug!("Adding recipe {} to favorites", id);
        let response = self
            .client
            .post(self.url("/recipes/favorite"))
            .bearer_auth(token)
            .json(&FavoriteRequest { recipe_id: id })
            .send()
            .await?;
        if response.status() == StatusCode::CONFLICT {
            tracing::info!("Recipe {} is already a favorite", id);
            return Ok(FavoriteOutcome::AlreadyFavorited);
        }
        check_status(response).await?;
        Ok(FavoriteOutcome::Added)
    }

    async fn remove_favorite(&self, id: RecipeId) -> Result<(), ApiError> {
        let token = self.bearer()?;
        tracing::debug!("Removing recipe {} from favorites", id);
        // The response carries the updated list; the next reconcile picks it up
        self.send(
            self.client
                .delete(self.url("/recipes/favorite"))
                .bearer_auth(token)
                .json(&FavoriteRequest { recipe_id: id }),
        )
        .await?;
        Ok(())
    }

    async fn create_recipe(&self, fields: &RecipeFields) -> Result<Recipe, ApiError> {
        let token = self.bearer()?;
        tracing::debug!("Creating recipe {:?}", fields.title);
        let response = self
            .send(
                self.client
                    .post(self.url("/recipes"))
                    .bearer_auth(token)
                    .json(fields),
            )
            .await?;
        decode(response).await
    }

    async fn update_recipe(&self, id: RecipeId, fields: &RecipeFields) -> Result<Recipe, ApiError> {
        let token = self.bearer()?;
        tracing::debug!("Updating recipe {}", id);
        let response = self
            .send(
                self.client
                    .put(self.url(&format!("/recipes/{id}")))
                    .bearer_auth(token)
                    .json(fields),
            )
            .await?;
        decode(response).await
    }

    async fn delete_recipe(&self, id: RecipeId) -> Result<(), ApiError> {
        let token = self.bearer()?;
        tracing::debug!("Deleting recipe {}", id);
        self.send(
            self.client
                .delete(self.url(&format!("/recipes/{id}")))
                .bearer_auth(token),
        )
        .await?;
        Ok(())
    }

    async fn register(&self, registration: &Registration) -> Result<(), ApiError> {
        tracing::debug!("Registering {}", registration.email);
        self.send(
            self.client
                .post(self.url("/users/register"))
                .json(registration),
        )
        .await?;
        Ok(())
    }

    async fn login(&self, credentials: &Credentials) -> Result<Session, ApiError> {
        tracing::debug!("Logging in {}", credentials);
        let response = self
            .send(self.client.post(self.url("/users/login")).json(credentials))
            .await?;
        let login: LoginResponse = decode(response).await?;
        Ok(login.into_session())
    }
}
