//! Page-local list state for workspace and instance grids.
//!
//! Every fetch replaces the list wholesale. Deletes are optimistic: the row
//! disappears at once and comes back at the same position if the server
//! refuses.

use crate::app::api::FetchError;
use crate::model::Keyed;

/// An item taken out of a list, with where it used to be.
#[derive(Debug, Clone, PartialEq)]
pub struct Removed<T> {
    pub index: usize,
    pub item: T,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListState<T> {
    items: Vec<T>,
    loading: bool,
}

impl<T> Default for ListState<T> {
    /// Pages fetch on mount, so a fresh list starts out loading.
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: true,
        }
    }
}

impl<T: Keyed + Clone> ListState<T> {
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn find(&self, key: &str) -> Option<&T> {
        self.items.iter().find(|item| item.key() == key)
    }

    pub fn begin_loading(&mut self) {
        self.loading = true;
    }

    /// Apply a listing result. Success replaces the items; failure clears
    /// them. Either way loading ends, and the error is handed back for the
    /// caller to report.
    pub fn apply_fetch(&mut self, result: Result<Vec<T>, FetchError>) -> Result<(), FetchError> {
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                Ok(())
            }
            Err(err) => {
                self.items.clear();
                Err(err)
            }
        }
    }

    /// Remove by key ahead of the server confirming.
    pub fn remove(&mut self, key: &str) -> Option<Removed<T>> {
        let index = self.items.iter().position(|item| item.key() == key)?;
        let item = self.items.remove(index);
        Some(Removed { index, item })
    }

    /// Undo a [`remove`](Self::remove). Skipped if a newer listing already
    /// brought the item back.
    pub fn restore(&mut self, removed: Removed<T>) {
        if self.find(removed.item.key()).is_some() {
            return;
        }
        let index = removed.index.min(self.items.len());
        self.items.insert(index, removed.item);
    }
}
