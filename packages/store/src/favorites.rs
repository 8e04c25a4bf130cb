//! # Favorites set: client-side view of the user's favorites
//!
//! [`FavoritesSet`] answers "is this recipe favorited?" for every card render.
//! It is a best-effort cache of the server's favorite relation, not an
//! authority:
//!
//! - [`reconcile`](FavoritesSet::reconcile) replaces the whole set with the ids
//!   from the server's favorites listing. It is the only way stale entries are
//!   dropped; local additions never expire on their own.
//! - [`optimistic_add`](FavoritesSet::optimistic_add) and
//!   [`optimistic_remove`](FavoritesSet::optimistic_remove) record the effect
//!   of a remote call that has already succeeded. They must not run before the
//!   call resolves; a card with a request in flight shows a pending state
//!   instead of a provisional favorite.
//!
//! The set has no interior mutability and no locking. It is owned by the view
//! that renders it and mutated only from the UI event loop.

use std::collections::HashSet;

use crate::models::RecipeId;

/// Recipe ids currently known to be favorited by the active user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FavoritesSet {
    ids: HashSet<RecipeId>,
}

impl FavoritesSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the set with the server's favorites listing.
    pub fn reconcile<I>(&mut self, server_ids: I) -> &HashSet<RecipeId>
    where
        I: IntoIterator<Item = RecipeId>,
    {
        self.ids = server_ids.into_iter().collect();
        &self.ids
    }

    pub fn has(&self, id: RecipeId) -> bool {
        self.ids.contains(&id)
    }

    /// Record a confirmed add. Returns false if the id was already present.
    pub fn optimistic_add(&mut self, id: RecipeId) -> bool {
        self.ids.insert(id)
    }

    /// Record a confirmed removal. Returns false if the id was not present.
    pub fn optimistic_remove(&mut self, id: RecipeId) -> bool {
        self.ids.remove(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = RecipeId> + '_ {
        self.ids.iter().copied()
    }
}

impl FromIterator<RecipeId> for FavoritesSet {
    fn from_iter<I: IntoIterator<Item = RecipeId>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reconcile_replaces_wholesale() {
        let mut favorites = FavoritesSet::new();
        favorites.optimistic_add(1);
        favorites.optimistic_add(2);

        let ids = favorites.reconcile([2, 3]);
        assert_eq!(ids.len(), 2);

        assert!(!favorites.has(1));
        assert!(favorites.has(2));
        assert!(favorites.has(3));
    }

    #[test]
    fn test_add_holds_until_remove() {
        let mut favorites = FavoritesSet::new();
        favorites.reconcile([10]);

        assert!(favorites.optimistic_add(4));
        assert!(favorites.has(4));
        // A second add of the same id is a no-op
        assert!(!favorites.optimistic_add(4));
        assert!(favorites.has(4));

        assert!(favorites.optimistic_remove(4));
        assert!(!favorites.has(4));
        assert!(!favorites.optimistic_remove(4));
        assert!(favorites.has(10));
    }

    #[test]
    fn test_add_holds_until_next_reconcile() {
        let mut favorites = FavoritesSet::new();
        favorites.reconcile(Vec::new());
        favorites.optimistic_add(8);
        assert!(favorites.has(8));

        favorites.reconcile([1]);
        assert!(!favorites.has(8));
        assert_eq!(favorites.iter().collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn test_from_iter_deduplicates() {
        let favorites: FavoritesSet = [5, 5, 6].into_iter().collect();
        assert_eq!(favorites.len(), 2);
        assert!(!favorites.is_empty());
    }
}
