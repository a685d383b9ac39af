//! List view state
//!
//! Tracks the fetched records and whether the initial load is still pending.

use crate::api::ApiError;
use crate::types::Person;

/// State behind the saved-records list.
///
/// `loading` starts true and is cleared by the first completed fetch,
/// successful or not. The items always reflect the most recent successful
/// fetch, in server order; a failed fetch freezes them at their last value.
#[derive(Debug, Clone, PartialEq)]
pub struct ListState {
    pub items: Vec<Person>,
    pub loading: bool,
}

impl Default for ListState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: true,
        }
    }
}

impl ListState {
    /// Fold a completed fetch into the state.
    pub fn apply(&mut self, result: Result<Vec<Person>, ApiError>) {
        match result {
            Ok(items) => self.items = items,
            Err(e) => tracing::error!("Failed to fetch people: {}", e),
        }
        self.loading = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person(id: i64, name: &str) -> Person {
        Person {
            id: Some(id),
            name: name.to_string(),
            date: "2024-01-15".to_string(),
        }
    }

    #[test]
    fn test_starts_loading_and_empty() {
        let state = ListState::default();
        assert!(state.loading);
        assert!(state.items.is_empty());
    }

    #[test]
    fn test_successful_fetch_replaces_items() {
        let mut state = ListState::default();
        state.apply(Ok(vec![person(1, "Bob")]));
        assert!(!state.loading);
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.items[0].name, "Bob");

        // A later fetch replaces wholesale, preserving server order
        state.apply(Ok(vec![person(2, "Alice"), person(3, "Carol")]));
        assert_eq!(state.items[0].name, "Alice");
        assert_eq!(state.items[1].name, "Carol");
    }

    #[test]
    fn test_failed_fetch_keeps_items_and_ends_loading() {
        let mut state = ListState::default();
        state.apply(Ok(vec![person(1, "Bob")]));

        state.apply(Err(ApiError::Transport("connection refused".to_string())));
        assert!(!state.loading);
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.items[0].name, "Bob");
    }

    #[test]
    fn test_failed_first_fetch_leaves_list_empty() {
        let mut state = ListState::default();
        state.apply(Err(ApiError::Status {
            status: 500,
            body: "server error".to_string(),
        }));
        assert!(!state.loading);
        assert!(state.items.is_empty());
    }
}
