//! View history for forward navigation and single-step back.
//!
//! The stack is never empty: it starts at the default view, and `go_back` stops at the
//! last remaining entry. History is bounded; pushing past the limit drops the oldest
//! entries, never the current one.

use serde::Serialize;

use crate::services::views::View;

pub const DEFAULT_HISTORY_LIMIT: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationStack {
    history: Vec<View>,
    limit: usize,
}

/// One step of the breadcrumb trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Breadcrumb {
    pub id: View,
    pub label: &'static str,
}

impl Default for NavigationStack {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LIMIT)
    }
}

impl NavigationStack {
    /// A stack seeded with the default view. A `limit` of zero is treated as one.
    pub fn new(limit: usize) -> Self {
        Self {
            history: vec![View::DEFAULT],
            limit: limit.max(1),
        }
    }

    pub fn current(&self) -> View {
        // never empty
        self.history[self.history.len() - 1]
    }

    pub fn history(&self) -> &[View] {
        &self.history
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn can_go_back(&self) -> bool {
        self.history.len() > 1
    }

    /// Makes `view` current. Navigating to the current view does nothing. Returns whether
    /// the history changed.
    pub fn navigate_to(&mut self, view: View) -> bool {
        if view == self.current() {
            return false;
        }

        self.history.push(view);
        if self.history.len() > self.limit {
            let excess = self.history.len() - self.limit;
            self.history.drain(..excess);
        }
        tracing::debug!(%view, depth = self.history.len(), "navigated");
        true
    }

    /// Like [`navigate_to`](Self::navigate_to) for a raw identifier; unknown identifiers
    /// navigate to the default view.
    pub fn navigate_to_id(&mut self, id: &str) -> bool {
        let view = id.parse().unwrap_or_else(|_| {
            tracing::debug!(id, "unknown view, using default");
            View::DEFAULT
        });
        self.navigate_to(view)
    }

    /// Drops the current view unless it is the only one left, and returns the view that is
    /// now current.
    pub fn go_back(&mut self) -> View {
        if self.can_go_back() {
            self.history.pop();
            tracing::debug!(view = %self.current(), "went back");
        }
        self.current()
    }

    pub fn breadcrumbs(&self) -> Vec<Breadcrumb> {
        self.history
            .iter()
            .map(|view| Breadcrumb {
                id: *view,
                label: view.label(),
            })
            .collect()
    }

    /// Returns to the seeded state, keeping the limit.
    pub fn reset(&mut self) {
        self.history.clear();
        self.history.push(View::DEFAULT);
    }
}
