//! Root Dioxus application component
//!
//! Builds the API client from the environment, owns the shared signals, and
//! kicks off the initial fetch of saved records.

use std::sync::Arc;

use dioxus::prelude::*;

use crate::api::{PersonApi, ReqwestHttpClient};
use crate::config::ApiConfig;
use crate::types::ListState;
use crate::ui::Layout;

/// A user-facing notification from the last submit attempt
#[derive(Clone, PartialEq, Debug)]
pub enum Notice {
    Success(String),
    Error(String),
}

/// Global application state shared across components
#[derive(Clone)]
pub struct AppState {
    pub api: PersonApi,
    pub list: Signal<ListState>,
    pub notice: Signal<Option<Notice>>,
}

impl AppState {
    pub fn new(api: PersonApi) -> Self {
        tracing::info!("AppState initialized");
        Self {
            api,
            list: Signal::new(ListState::default()),
            notice: Signal::new(None),
        }
    }
}

/// Fetch the list and fold the outcome into the list signal.
///
/// Called once on mount and again after every successful save. Overlapping
/// calls are allowed; the last one to resolve determines what is shown.
pub async fn refresh(api: PersonApi, mut list: Signal<ListState>) {
    let result = api.list().await;
    list.write().apply(result);
}

#[component]
pub fn App() -> Element {
    let config = ApiConfig::from_env();
    tracing::info!("Using person API at {}", config.base_url);

    let api = PersonApi::new(&config, Arc::new(ReqwestHttpClient::new()));
    let app_state = AppState::new(api);
    use_context_provider(|| app_state.clone());

    // Initial load of saved records
    let api = app_state.api.clone();
    let list = app_state.list;
    use_future(move || refresh(api.clone(), list));

    rsx! {
        Layout {}
    }
}
