//! Remote list state with generation fencing.
//!
//! Every fetch takes a [`LoadTicket`]. Only the newest ticket may settle the list, so a slow
//! response that lands after a fresher one is dropped instead of overwriting it.

use tracing::debug;

/// Proof that a fetch was started; settles at most one outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "a load ticket must be passed to complete or fail"]
pub struct LoadTicket(u64);

/// A list loaded from the API along with its loading flag and last error.
#[derive(Debug, Clone)]
pub struct Loadable<T> {
    items: Vec<T>,
    loading: bool,
    error: String,
    generation: u64,
}

impl<T> Default for Loadable<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            error: String::new(),
            generation: 0,
        }
    }
}

impl<T> Loadable<T> {
    /// Mark a fetch as started, superseding any in flight.
    pub fn begin(&mut self) -> LoadTicket {
        self.generation += 1;
        self.loading = true;
        self.error.clear();

        LoadTicket(self.generation)
    }

    /// Replace the items with a fetch result. Returns `false` when the ticket is stale.
    pub fn complete(&mut self, ticket: LoadTicket, items: Vec<T>) -> bool {
        if !self.is_current(ticket) {
            return false;
        }

        self.items = items;
        self.loading = false;

        true
    }

    /// Record a failed fetch. Returns `false` when the ticket is stale.
    pub fn fail(&mut self, ticket: LoadTicket, error: impl Into<String>) -> bool {
        if !self.is_current(ticket) {
            return false;
        }

        self.error = error.into();
        self.loading = false;

        true
    }

    fn is_current(&self, ticket: LoadTicket) -> bool {
        let current = ticket.0 == self.generation;

        if !current {
            debug!(
                ticket = ticket.0,
                latest = self.generation,
                "dropping stale response"
            );
        }

        current
    }

    /// Loaded items.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Loaded items, for in-place updates.
    pub fn items_mut(&mut self) -> &mut Vec<T> {
        &mut self.items
    }

    /// Whether a fetch is outstanding.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Message from the last failed fetch or update, empty when none.
    pub fn error(&self) -> &str {
        &self.error
    }

    /// Set the error message outside of a fetch.
    pub fn set_error(&mut self, error: impl Into<String>) {
        self.error = error.into();
    }
}
