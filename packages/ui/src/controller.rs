//! # Recipe list state machine
//!
//! [`RecipeListController`] holds everything a recipe list page shows, with no
//! rendering and no I/O of its own. Views drive it in three steps: ask it for a
//! ticket, run the ticket against a [`RecipeStore`], hand the result back.
//!
//! ```text
//! Idle ──load──▶ Loading ──ok──▶ Ready
//!                   │  ▲           │
//!                  err └─filter/refresh─┘
//!                   ▼               │
//!                 Failed ───────────┘
//! ```
//!
//! ## Last filter wins
//!
//! Fetches are never cancelled. A [`LoadTicket`] remembers the [`FetchScope`]
//! it was issued for, and [`RecipeListController::finish_load`] drops any
//! result whose scope no longer matches the current filter. Search and author
//! filters share the full collection, so changing the query only re-derives
//! the visible subset.
//!
//! ## Favorites
//!
//! Toggles are confirm-then-update: [`FavoriteRequests::begin`] marks the
//! recipe pending, and the [`FavoritesSet`] changes only when
//! [`FavoriteRequests::finish`] sees a success. A recipe with a request in
//! flight ignores further clicks. The list controller wraps one of these; the
//! profile's favorites tab uses one on its own.

use std::collections::HashSet;

use api::{ApiError, FavoriteOutcome, RecipeStore};
use store::{FavoritesSet, FetchScope, Recipe, RecipeFilter, RecipeId};

pub const FAVORITE_ADDED: &str = "Recipe added to favorites successfully!";
pub const FAVORITE_REMOVED: &str = "Recipe removed from favorites.";
pub const FAVORITE_CONFLICT: &str = "That recipe is already in your favorites.";
pub const FAVORITE_ADD_FAILED: &str = "Failed to add recipe to favorites.";
pub const FAVORITE_REMOVE_FAILED: &str = "Failed to remove recipe from favorites.";
pub const FAVORITE_NEEDS_LOGIN: &str = "Please log in to manage your favorites.";

#[derive(Clone, Debug, Default, PartialEq)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Ready,
    /// Human-readable reason, shown instead of the list
    Failed(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Info,
    Error,
}

/// A dismissable message above the list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Banner {
    pub kind: BannerKind,
    pub text: String,
}

impl Banner {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: BannerKind::Success,
            text: text.into(),
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: BannerKind::Info,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: BannerKind::Error,
            text: text.into(),
        }
    }
}

/// One card in the rendered list.
#[derive(Clone, Debug, PartialEq)]
pub struct RecipeCardModel {
    pub recipe: Recipe,
    pub is_favorite: bool,
    pub is_logged_in: bool,
    /// A favorite request for this card is in flight
    pub pending: bool,
}

/// A `listRecipes` call to make, tagged with the scope it was issued for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadTicket {
    scope: FetchScope,
}

impl LoadTicket {
    pub fn scope(&self) -> FetchScope {
        self.scope
    }

    pub async fn run<S: RecipeStore>(&self, store: &S) -> Result<Vec<Recipe>, ApiError> {
        store.list_recipes(self.scope.category()).await
    }
}

/// Which favorite call a toggle turned into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FavoriteAction {
    Add(RecipeId),
    Remove(RecipeId),
}

impl FavoriteAction {
    pub fn recipe_id(&self) -> RecipeId {
        match self {
            FavoriteAction::Add(id) | FavoriteAction::Remove(id) => *id,
        }
    }

    pub async fn run<S: RecipeStore>(self, store: &S) -> FavoriteResult {
        match self {
            FavoriteAction::Add(id) => FavoriteResult::Added(id, store.add_favorite(id).await),
            FavoriteAction::Remove(id) => {
                FavoriteResult::Removed(id, store.remove_favorite(id).await)
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum FavoriteResult {
    Added(RecipeId, Result<FavoriteOutcome, ApiError>),
    Removed(RecipeId, Result<(), ApiError>),
}

/// Favorite calls in flight and the favorites they confirmed.
///
/// One request per recipe at a time; the set changes only on success.
#[derive(Debug, Default)]
pub struct FavoriteRequests {
    favorites: FavoritesSet,
    pending: HashSet<RecipeId>,
}

impl FavoriteRequests {
    pub fn favorites(&self) -> &FavoritesSet {
        &self.favorites
    }

    pub fn is_pending(&self, id: RecipeId) -> bool {
        self.pending.contains(&id)
    }

    pub fn reconcile<I>(&mut self, server_ids: I)
    where
        I: IntoIterator<Item = RecipeId>,
    {
        self.favorites.reconcile(server_ids);
    }

    /// Mark the recipe pending. `None` when a request for it is in flight.
    pub fn begin(&mut self, action: FavoriteAction) -> Option<FavoriteAction> {
        let id = action.recipe_id();
        if !self.pending.insert(id) {
            tracing::debug!("Ignoring {:?}, request for recipe {} in flight", action, id);
            return None;
        }
        Some(action)
    }

    /// Apply a finished call and return the banner reporting it.
    pub fn finish(&mut self, result: FavoriteResult) -> Banner {
        match result {
            FavoriteResult::Added(id, outcome) => {
                self.pending.remove(&id);
                match outcome {
                    Ok(FavoriteOutcome::Added) => {
                        self.favorites.optimistic_add(id);
                        Banner::success(FAVORITE_ADDED)
                    }
                    Ok(FavoriteOutcome::AlreadyFavorited) => Banner::info(FAVORITE_CONFLICT),
                    Err(ApiError::AuthRequired) => Banner::error(FAVORITE_NEEDS_LOGIN),
                    Err(e) => {
                        tracing::error!("Failed to add recipe {} to favorites: {}", id, e);
                        Banner::error(FAVORITE_ADD_FAILED)
                    }
                }
            }
            FavoriteResult::Removed(id, outcome) => {
                self.pending.remove(&id);
                match outcome {
                    Ok(()) => {
                        self.favorites.optimistic_remove(id);
                        Banner::success(FAVORITE_REMOVED)
                    }
                    Err(ApiError::AuthRequired) => Banner::error(FAVORITE_NEEDS_LOGIN),
                    Err(e) => {
                        tracing::error!("Failed to remove recipe {} from favorites: {}", id, e);
                        Banner::error(FAVORITE_REMOVE_FAILED)
                    }
                }
            }
        }
    }
}

#[derive(Debug, Default)]
pub struct RecipeListController {
    filter: RecipeFilter,
    state: LoadState,
    /// Last collection fetched for the current scope
    base: Vec<Recipe>,
    requests: FavoriteRequests,
    banner: Option<Banner>,
}

impl RecipeListController {
    pub fn new(filter: RecipeFilter) -> Self {
        Self {
            filter,
            ..Self::default()
        }
    }

    pub fn filter(&self) -> &RecipeFilter {
        &self.filter
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn banner(&self) -> Option<&Banner> {
        self.banner.as_ref()
    }

    pub fn dismiss_banner(&mut self) {
        self.banner = None;
    }

    pub fn favorites(&self) -> &FavoritesSet {
        self.requests.favorites()
    }

    pub fn is_pending(&self, id: RecipeId) -> bool {
        self.requests.is_pending(id)
    }

    /// Switch filters. Returns a ticket when the new filter needs a fetch;
    /// `None` when the collection it reads is already loaded or loading.
    pub fn set_filter(&mut self, filter: RecipeFilter) -> Option<LoadTicket> {
        let same_scope = filter.scope() == self.filter.scope();
        self.filter = filter;
        if same_scope && matches!(self.state, LoadState::Ready | LoadState::Loading) {
            tracing::debug!("Filter {:?} reuses the loaded collection", self.filter);
            return None;
        }
        Some(self.refresh())
    }

    /// Enter `Loading` for the current filter, whatever the state.
    pub fn refresh(&mut self) -> LoadTicket {
        self.state = LoadState::Loading;
        LoadTicket {
            scope: self.filter.scope(),
        }
    }

    /// Apply a fetch result. Returns false when it was dropped as stale.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<Recipe>, ApiError>,
    ) -> bool {
        if ticket.scope != self.filter.scope() {
            tracing::debug!(
                "Dropping {:?} response, filter is now {:?}",
                ticket.scope,
                self.filter
            );
            return false;
        }
        match result {
            Ok(recipes) => {
                self.base = recipes;
                self.state = LoadState::Ready;
            }
            Err(e) => {
                tracing::error!("Failed to load recipes: {}", e);
                self.base.clear();
                self.state = LoadState::Failed(e.user_message());
            }
        }
        true
    }

    /// Recipes passing the current filter, in server order. Empty unless `Ready`.
    pub fn recipes(&self) -> Vec<Recipe> {
        match self.state {
            LoadState::Ready => self.filter.apply(&self.base),
            _ => Vec::new(),
        }
    }

    pub fn cards(&self, is_logged_in: bool) -> Vec<RecipeCardModel> {
        self.recipes()
            .into_iter()
            .map(|recipe| RecipeCardModel {
                is_favorite: self.requests.favorites().has(recipe.id),
                pending: self.requests.is_pending(recipe.id),
                is_logged_in,
                recipe,
            })
            .collect()
    }

    pub fn reconcile_favorites<I>(&mut self, server_ids: I)
    where
        I: IntoIterator<Item = RecipeId>,
    {
        self.requests.reconcile(server_ids);
    }

    /// Start the favorite call a card asked for.
    ///
    /// Returns `None` when there is no session (a banner says so) or when the
    /// card already has a request in flight.
    pub fn begin_favorite(
        &mut self,
        action: FavoriteAction,
        is_logged_in: bool,
    ) -> Option<FavoriteAction> {
        if !is_logged_in {
            self.banner = Some(Banner::error(FAVORITE_NEEDS_LOGIN));
            return None;
        }
        self.requests.begin(action)
    }

    pub fn finish_favorite(&mut self, result: FavoriteResult) {
        self.banner = Some(self.requests.finish(result));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::{Credentials, MemoryRecipeStore};
    use store::{Author, ListText, SessionHandle};

    fn recipe(id: RecipeId, title: &str, category_id: i64) -> Recipe {
        Recipe {
            id,
            title: title.to_string(),
            description: String::new(),
            ingredients: ListText::default(),
            steps: ListText::default(),
            category_id: Some(category_id),
            author: Some(Author {
                id: 1,
                name: "Ana".to_string(),
            }),
            author_id: None,
            created_at: None,
        }
    }

    fn ids(recipes: &[Recipe]) -> Vec<RecipeId> {
        recipes.iter().map(|r| r.id).collect()
    }

    async fn logged_in_store(recipes: Vec<Recipe>) -> MemoryRecipeStore {
        let store = MemoryRecipeStore::new(SessionHandle::in_memory());
        store.seed_recipes(recipes);
        store.seed_account("ana@example.com", "pw", "Ana");
        let session = store
            .login(&Credentials {
                email: "ana@example.com".to_string(),
                password: "pw".to_string(),
            })
            .await
            .unwrap();
        store.session().login(session);
        store
    }

    #[tokio::test]
    async fn test_category_filter_shows_matching_recipes() {
        let store = MemoryRecipeStore::new(SessionHandle::in_memory());
        store.seed_recipes(vec![recipe(1, "Pancakes", 1), recipe(2, "Soup", 3)]);

        let mut controller = RecipeListController::new(RecipeFilter::Category(1));
        assert_eq!(controller.state(), &LoadState::Idle);
        let ticket = controller.refresh();
        assert_eq!(controller.state(), &LoadState::Loading);

        let result = ticket.run(&store).await;
        assert!(controller.finish_load(ticket, result));
        assert_eq!(controller.state(), &LoadState::Ready);
        assert_eq!(ids(&controller.recipes()), vec![1]);
    }

    #[tokio::test]
    async fn test_stale_category_response_is_dropped() {
        let store = MemoryRecipeStore::new(SessionHandle::in_memory());
        store.seed_recipes(vec![recipe(1, "Pancakes", 1), recipe(2, "Soup", 3)]);

        let mut controller = RecipeListController::new(RecipeFilter::Category(1));
        let first = controller.refresh();
        let second = controller.set_filter(RecipeFilter::Category(3)).unwrap();

        // The second fetch resolves first, then the stale one arrives
        let result = second.run(&store).await;
        assert!(controller.finish_load(second, result));
        let stale = first.run(&store).await;
        assert!(!controller.finish_load(first, stale));

        assert_eq!(ids(&controller.recipes()), vec![2]);
    }

    #[tokio::test]
    async fn test_search_query_change_needs_no_fetch() {
        let store = MemoryRecipeStore::new(SessionHandle::in_memory());
        store.seed_recipes(vec![recipe(1, "Chocolate Cake", 6), recipe(2, "Bread", 1)]);

        let mut controller = RecipeListController::new(RecipeFilter::Search("cake".to_string()));
        let ticket = controller.refresh();
        let result = ticket.run(&store).await;
        controller.finish_load(ticket, result);
        assert_eq!(
            controller
                .recipes()
                .iter()
                .map(|r| r.title.as_str())
                .collect::<Vec<_>>(),
            vec!["Chocolate Cake"]
        );

        assert_eq!(
            controller.set_filter(RecipeFilter::Search("BREAD".to_string())),
            None
        );
        assert_eq!(ids(&controller.recipes()), vec![2]);

        // Leaving the shared collection fetches again
        assert!(controller.set_filter(RecipeFilter::Category(6)).is_some());
        assert!(controller.recipes().is_empty());
    }

    #[tokio::test]
    async fn test_failure_renders_no_stale_data() {
        let store = MemoryRecipeStore::new(SessionHandle::in_memory());
        store.seed_recipes(vec![recipe(1, "Pancakes", 1)]);

        let mut controller = RecipeListController::new(RecipeFilter::All);
        let ticket = controller.refresh();
        let result = ticket.run(&store).await;
        controller.finish_load(ticket, result);
        assert_eq!(controller.recipes().len(), 1);

        store.set_offline(true);
        let ticket = controller.refresh();
        let result = ticket.run(&store).await;
        controller.finish_load(ticket, result);

        assert_eq!(
            controller.state(),
            &LoadState::Failed("Could not reach the server. Try again later.".to_string())
        );
        assert!(controller.recipes().is_empty());
    }

    #[tokio::test]
    async fn test_add_favorite_updates_after_success() {
        let store = logged_in_store(vec![recipe(5, "Cake", 6)]).await;
        let mut controller = RecipeListController::new(RecipeFilter::All);
        let ticket = controller.refresh();
        let result = ticket.run(&store).await;
        controller.finish_load(ticket, result);

        let action = controller.begin_favorite(FavoriteAction::Add(5), true).unwrap();
        let card = &controller.cards(true)[0];
        assert!(card.pending);
        assert!(!card.is_favorite);

        // A second click while the first is in flight does nothing
        assert_eq!(controller.begin_favorite(FavoriteAction::Add(5), true), None);

        let result = action.run(&store).await;
        controller.finish_favorite(result);
        let card = &controller.cards(true)[0];
        assert!(!card.pending);
        assert!(card.is_favorite);
        assert_eq!(controller.banner(), Some(&Banner::success(FAVORITE_ADDED)));
    }

    #[tokio::test]
    async fn test_conflict_leaves_set_unchanged() {
        let store = logged_in_store(vec![recipe(5, "Cake", 6)]).await;
        // Favorited elsewhere; the local set has not been reconciled yet
        store.add_favorite(5).await.unwrap();

        let mut controller = RecipeListController::new(RecipeFilter::All);
        controller.reconcile_favorites([9]);
        let action = controller.begin_favorite(FavoriteAction::Add(5), true).unwrap();
        let result = action.run(&store).await;
        controller.finish_favorite(result);

        assert!(!controller.favorites().has(5));
        assert!(controller.favorites().has(9));
        assert_eq!(controller.banner(), Some(&Banner::info(FAVORITE_CONFLICT)));
    }

    #[tokio::test]
    async fn test_failed_add_shows_generic_message() {
        let store = logged_in_store(vec![recipe(5, "Cake", 6)]).await;
        let mut controller = RecipeListController::new(RecipeFilter::All);

        let action = controller.begin_favorite(FavoriteAction::Add(5), true).unwrap();
        store.set_offline(true);
        let result = action.run(&store).await;
        controller.finish_favorite(result);

        assert!(!controller.favorites().has(5));
        assert!(!controller.is_pending(5));
        assert_eq!(controller.banner(), Some(&Banner::error(FAVORITE_ADD_FAILED)));
    }

    #[tokio::test]
    async fn test_removal_applies_after_logout() {
        let store = logged_in_store(vec![recipe(5, "Cake", 6)]).await;
        store.add_favorite(5).await.unwrap();

        let mut controller = RecipeListController::new(RecipeFilter::All);
        controller.reconcile_favorites([5]);
        let action = controller.begin_favorite(FavoriteAction::Remove(5), true).unwrap();

        // The request was sent with the token, then the user logged out
        let result = FavoriteResult::Removed(5, store.remove_favorite(5).await);
        store.session().logout();
        controller.finish_favorite(result);

        assert!(!controller.favorites().has(5));
        assert_eq!(controller.banner(), Some(&Banner::success(FAVORITE_REMOVED)));
    }

    #[test]
    fn test_toggle_without_session() {
        let mut controller = RecipeListController::new(RecipeFilter::All);
        assert_eq!(controller.begin_favorite(FavoriteAction::Add(5), false), None);
        assert!(!controller.is_pending(5));
        assert_eq!(controller.banner(), Some(&Banner::error(FAVORITE_NEEDS_LOGIN)));

        controller.dismiss_banner();
        assert_eq!(controller.banner(), None);
    }

    #[tokio::test]
    async fn test_card_intent_is_sent_as_asked() {
        let store = logged_in_store(vec![recipe(5, "Cake", 6)]).await;
        let mut controller = RecipeListController::new(RecipeFilter::All);

        let action = controller.begin_favorite(FavoriteAction::Add(5), true).unwrap();
        assert_eq!(action, FavoriteAction::Add(5));
        // The opposite intent is also held back while the add is in flight
        assert_eq!(controller.begin_favorite(FavoriteAction::Remove(5), true), None);
        let result = action.run(&store).await;
        controller.finish_favorite(result);
        assert!(controller.favorites().has(5));

        let action = controller.begin_favorite(FavoriteAction::Remove(5), true).unwrap();
        let result = action.run(&store).await;
        controller.finish_favorite(result);
        assert!(!controller.favorites().has(5));
    }

    #[tokio::test]
    async fn test_double_remove_sends_one_request() {
        let store = logged_in_store(vec![recipe(5, "Cake", 6)]).await;
        store.add_favorite(5).await.unwrap();
        let mut requests = FavoriteRequests::default();

        let first = requests.begin(FavoriteAction::Remove(5)).unwrap();
        assert!(requests.is_pending(5));
        assert_eq!(requests.begin(FavoriteAction::Remove(5)), None);

        let banner = requests.finish(first.run(&store).await);
        assert_eq!(banner, Banner::success(FAVORITE_REMOVED));
        assert!(!requests.is_pending(5));
        assert!(store.list_favorites().await.unwrap().is_empty());
    }

    #[test]
    fn test_reconcile_drops_stale_entries() {
        let mut controller = RecipeListController::new(RecipeFilter::All);
        controller.reconcile_favorites([1, 2]);
        controller.reconcile_favorites([2, 3]);
        assert!(!controller.favorites().has(1));
        assert!(controller.favorites().has(3));
    }
}
