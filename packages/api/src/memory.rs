use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use store::{
    Author, Category, CategoryId, Recipe, RecipeFields, RecipeId, Session, SessionHandle, UserId,
};

use crate::error::ApiError;
use crate::models::{Credentials, FavoriteOutcome, Registration};
use crate::RecipeStore;

/// In-memory RecipeStore used as the test backend.
///
/// Behaves like the REST backend: tokens are issued by `login`, mutating calls
/// check them, adding an existing favorite is a conflict, and only a recipe's
/// author may edit or delete it.
#[derive(Clone, Debug)]
pub struct MemoryRecipeStore {
    state: Arc<Mutex<MemoryState>>,
    session: SessionHandle,
}

#[derive(Debug, Default)]
struct MemoryState {
    recipes: Vec<Recipe>,
    categories: Vec<Category>,
    accounts: Vec<Account>,
    tokens: HashMap<String, UserId>,
    favorites: HashMap<UserId, Vec<RecipeId>>,
    next_recipe_id: RecipeId,
    next_user_id: UserId,
    offline: bool,
}

#[derive(Debug, Clone)]
struct Account {
    id: UserId,
    email: String,
    password: String,
    name: String,
}

fn http(status: u16, message: &str) -> ApiError {
    ApiError::Http {
        status,
        message: Some(message.to_string()),
    }
}

impl MemoryState {
    fn user_for(&self, token: &str) -> Result<UserId, ApiError> {
        self.tokens
            .get(token)
            .copied()
            .ok_or_else(|| http(401, "Invalid or expired token"))
    }

    fn recipe_index(&self, id: RecipeId) -> Result<usize, ApiError> {
        self.recipes
            .iter()
            .position(|r| r.id == id)
            .ok_or(ApiError::Http {
                status: 404,
                message: None,
            })
    }

    fn author(&self, user_id: UserId) -> Author {
        let name = self
            .accounts
            .iter()
            .find(|a| a.id == user_id)
            .map(|a| a.name.clone())
            .unwrap_or_else(|| format!("user {user_id}"));
        Author { id: user_id, name }
    }
}

impl MemoryRecipeStore {
    pub fn new(session: SessionHandle) -> Self {
        let state = MemoryState {
            next_recipe_id: 1,
            next_user_id: 1,
            ..MemoryState::default()
        };
        Self {
            state: Arc::new(Mutex::new(state)),
            session,
        }
    }

    fn state(&self) -> MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Lock the state for a call, failing while `set_offline(true)` simulates an unreachable server.
    fn reach(&self) -> Result<MutexGuard<'_, MemoryState>, ApiError> {
        let state = self.state();
        if state.offline {
            return Err(ApiError::Network("backend unreachable".to_string()));
        }
        Ok(state)
    }

    /// Lock the state for an authenticated call and resolve the caller.
    fn reach_authed(&self) -> Result<(MutexGuard<'_, MemoryState>, UserId), ApiError> {
        let token = self.session.token().ok_or(ApiError::AuthRequired)?;
        let state = self.reach()?;
        let user_id = state.user_for(&token)?;
        Ok((state, user_id))
    }

    pub fn session(&self) -> &SessionHandle {
        &self.session
    }

    /// Make every following call fail as if the network were down.
    pub fn set_offline(&self, offline: bool) {
        self.state().offline = offline;
    }

    pub fn seed_categories(&self, categories: Vec<Category>) {
        self.state().categories = categories;
    }

    /// Insert recipes as-is, keeping their ids.
    pub fn seed_recipes(&self, recipes: Vec<Recipe>) {
        let mut state = self.state();
        let max_id = recipes.iter().map(|r| r.id).max().unwrap_or(0);
        state.next_recipe_id = state.next_recipe_id.max(max_id + 1);
        state.recipes.extend(recipes);
    }

    /// Create an account and return its id.
    pub fn seed_account(&self, email: &str, password: &str, name: &str) -> UserId {
        let mut state = self.state();
        let id = state.next_user_id;
        state.next_user_id += 1;
        state.accounts.push(Account {
            id,
            email: email.to_string(),
            password: password.to_string(),
            name: name.to_string(),
        });
        id
    }

    /// Server-side favorites of a user, in insertion order.
    pub fn favorite_ids(&self, user_id: UserId) -> Vec<RecipeId> {
        self.state()
            .favorites
            .get(&user_id)
            .cloned()
            .unwrap_or_default()
    }
}

impl RecipeStore for MemoryRecipeStore {
    async fn list_recipes(&self, category: Option<CategoryId>) -> Result<Vec<Recipe>, ApiError> {
        let state = self.reach()?;
        Ok(state
            .recipes
            .iter()
            .filter(|r| category.is_none() || r.category_id == category)
            .cloned()
            .collect())
    }

    async fn get_recipe(&self, id: RecipeId) -> Result<Recipe, ApiError> {
        let state = self.reach()?;
        let index = state.recipe_index(id)?;
        Ok(state.recipes[index].clone())
    }

    async fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        Ok(self.reach()?.categories.clone())
    }

    async fn list_favorites(&self) -> Result<Vec<Recipe>, ApiError> {
        let (state, user_id) = self.reach_authed()?;
        let ids = state.favorites.get(&user_id).cloned().unwrap_or_default();
        Ok(ids
            .iter()
            .filter_map(|id| state.recipes.iter().find(|r| r.id == *id).cloned())
            .collect())
    }

    async fn list_user_recipes(&self) -> Result<Vec<Recipe>, ApiError> {
        let (state, user_id) = self.reach_authed()?;
        Ok(state
            .recipes
            .iter()
            .filter(|r| r.is_authored_by(user_id))
            .cloned()
            .collect())
    }

    async fn add_favorite(&self, id: RecipeId) -> Result<FavoriteOutcome, ApiError> {
        let (mut state, user_id) = self.reach_authed()?;
        state.recipe_index(id)?;
        let favorites = state.favorites.entry(user_id).or_default();
        if favorites.contains(&id) {
            return Ok(FavoriteOutcome::AlreadyFavorited);
        }
        favorites.push(id);
        Ok(FavoriteOutcome::Added)
    }

    async fn remove_favorite(&self, id: RecipeId) -> Result<(), ApiError> {
        let (mut state, user_id) = self.reach_authed()?;
        let favorites = state.favorites.entry(user_id).or_default();
        let Some(pos) = favorites.iter().position(|f| *f == id) else {
            return Err(http(404, "Recipe is not in your favorites"));
        };
        favorites.remove(pos);
        Ok(())
    }

    async fn create_recipe(&self, fields: &RecipeFields) -> Result<Recipe, ApiError> {
        let (mut state, user_id) = self.reach_authed()?;
        let id = state.next_recipe_id;
        state.next_recipe_id += 1;
        let recipe = Recipe {
            id,
            title: fields.title.clone(),
            description: fields.description.clone(),
            ingredients: fields.ingredients.clone().into(),
            steps: fields.steps.clone().into(),
            category_id: Some(fields.category_id),
            author: Some(state.author(user_id)),
            author_id: Some(user_id),
            created_at: None,
        };
        state.recipes.push(recipe.clone());
        Ok(recipe)
    }

    async fn update_recipe(&self, id: RecipeId, fields: &RecipeFields) -> Result<Recipe, ApiError> {
        let (mut state, user_id) = self.reach_authed()?;
        let index = state.recipe_index(id)?;
        let recipe = &mut state.recipes[index];
        if !recipe.is_authored_by(user_id) {
            return Err(http(403, "You can only edit your own recipes"));
        }
        recipe.title = fields.title.clone();
        recipe.description = fields.description.clone();
        recipe.ingredients = fields.ingredients.clone().into();
        recipe.steps = fields.steps.clone().into();
        recipe.category_id = Some(fields.category_id);
        Ok(recipe.clone())
    }

    async fn delete_recipe(&self, id: RecipeId) -> Result<(), ApiError> {
        let (mut state, user_id) = self.reach_authed()?;
        let index = state.recipe_index(id)?;
        if !state.recipes[index].is_authored_by(user_id) {
            return Err(http(403, "You can only delete your own recipes"));
        }
        state.recipes.remove(index);
        for favorites in state.favorites.values_mut() {
            favorites.retain(|f| *f != id);
        }
        Ok(())
    }

    async fn register(&self, registration: &Registration) -> Result<(), ApiError> {
        let mut state = self.reach()?;
        let email = registration.email.to_lowercase();
        if state.accounts.iter().any(|a| a.email == email) {
            return Err(http(400, "An account with this email already exists"));
        }
        let id = state.next_user_id;
        state.next_user_id += 1;
        state.accounts.push(Account {
            id,
            email,
            password: registration.password.clone(),
            name: registration.name.clone(),
        });
        Ok(())
    }

    async fn login(&self, credentials: &Credentials) -> Result<Session, ApiError> {
        let mut state = self.reach()?;
        let email = credentials.email.to_lowercase();
        let user_id = state
            .accounts
            .iter()
            .find(|a| a.email.to_lowercase() == email && a.password == credentials.password)
            .map(|a| a.id)
            .ok_or_else(|| http(401, "Invalid credentials! Try again."))?;
        let token = format!("memory-token-{}-{}", user_id, state.tokens.len());
        state.tokens.insert(token.clone(), user_id);
        Ok(Session { token, user_id })
    }
}
