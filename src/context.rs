//! Application Context
//!
//! The view-state signal and the article manager driving it, handed to
//! every component through context.

use std::future::Future;
use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::HttpArticleApi;
use crate::config::ApiConfig;
use crate::manager::{ArticleManager, LocalTask, Spawner};
use crate::notify::BrowserNotifier;
use crate::state::ViewState;

/// Runs background tasks with `spawn_local`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalSpawner;

impl Spawner for LocalSpawner {
    fn spawn(&self, task: LocalTask) {
        spawn_local(task);
    }
}

/// Manager wired to the real API, browser alerts and the view signal.
pub type ViewManager =
    ArticleManager<HttpArticleApi, BrowserNotifier, RwSignal<ViewState>, LocalSpawner>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Whole view state; components read slices of it
    pub state: RwSignal<ViewState>,
    manager: StoredValue<ViewManager>,
}

impl AppContext {
    pub fn new(config: ApiConfig) -> Self {
        let state = RwSignal::new(ViewState::default());
        let manager = ArticleManager::new(
            Arc::new(HttpArticleApi::new(config)),
            Arc::new(BrowserNotifier),
            Arc::new(LocalSpawner),
            state,
        );
        Self {
            state,
            manager: StoredValue::new(manager),
        }
    }

    /// Run a synchronous transition (field edits, opening/closing modals).
    pub fn with_manager(&self, f: impl FnOnce(&ViewManager)) {
        self.manager.with_value(f);
    }

    /// Spawn an async action on the event loop.
    pub fn dispatch<F, Fut>(&self, action: F)
    where
        F: FnOnce(ViewManager) -> Fut,
        Fut: Future<Output = ()> + 'static,
    {
        if let Some(manager) = self.manager.try_get_value() {
            spawn_local(action(manager));
        }
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
