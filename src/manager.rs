//! Article Manager
//!
//! The action flows behind the view: every user action is validated
//! locally, sent to the products API, and followed by a full refetch of
//! the collection. Nothing is reconciled locally.
//!
//! The refetch is started, not awaited: the acknowledgment and the modal
//! close follow the mutation's own response.
//!
//! No request is de-duplicated, serialized or cancelled. Two overlapping
//! refetches both land, and whichever response arrives last wins.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::api::ArticleApi;
use crate::models::Article;
use crate::notify::{Acknowledgment, Notifier};
use crate::state::StateHandle;
use crate::validation::{validate_create, validate_edit};

/// Detached task on the event loop.
pub type LocalTask = Pin<Box<dyn Future<Output = ()>>>;

/// Starts background work without waiting for it.
pub trait Spawner {
    fn spawn(&self, task: LocalTask);
}

pub struct ArticleManager<A, N, S, P> {
    api: Arc<A>,
    notifier: Arc<N>,
    spawner: Arc<P>,
    state: S,
}

impl<A, N, S: Clone, P> Clone for ArticleManager<A, N, S, P> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
            notifier: Arc::clone(&self.notifier),
            spawner: Arc::clone(&self.spawner),
            state: self.state.clone(),
        }
    }
}

impl<A, N, S, P> ArticleManager<A, N, S, P>
where
    A: ArticleApi + 'static,
    N: Notifier + 'static,
    S: StateHandle + 'static,
    P: Spawner + 'static,
{
    pub fn new(api: Arc<A>, notifier: Arc<N>, spawner: Arc<P>, state: S) -> Self {
        Self { api, notifier, spawner, state }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    fn acknowledge(&self, ack: Acknowledgment) {
        self.notifier.acknowledge(&ack);
    }

    // ========================
    // Fetch
    // ========================

    /// Replace the local collection with the server's. Failures only reach the log.
    pub async fn fetch_all(&self) {
        match self.api.fetch_all().await {
            Ok(items) => {
                log::info!("[FETCH] Loaded {} articles", items.len());
                self.state.update_state(|s| s.replace_items(items));
            }
            Err(e) => log::error!("[FETCH] Could not load articles: {}", e),
        }
    }

    /// Kick off `fetch_all` and return immediately.
    pub fn refetch(&self) {
        let manager = self.clone();
        self.spawner.spawn(Box::pin(async move { manager.fetch_all().await }));
    }

    // ========================
    // Create
    // ========================

    pub fn set_create_name(&self, name: String) {
        self.state.update_state(|s| s.set_create_name(name));
    }

    pub fn set_create_amount(&self, amount: String) {
        self.state.update_state(|s| s.set_create_amount(amount));
    }

    pub async fn submit_create(&self) {
        let Some(draft) = self.state.read_state(|s| s.draft_create.clone()) else {
            return;
        };
        let payload = match validate_create(&draft) {
            Ok(payload) => payload,
            Err(e) => {
                log::debug!("[CREATE] Rejected draft {:?}: {}", draft, e);
                self.acknowledge(e.into());
                return;
            }
        };

        log::debug!("[CREATE] Sending {:?}", payload);
        match self.api.create(&payload).await {
            Ok(saved) => {
                log::info!("[CREATE] Saved: {}", saved);
                if self.state.update_state(|s| s.clear_create_draft()).is_none() {
                    return;
                }
                self.refetch();
                self.acknowledge(Acknowledgment::Created);
            }
            Err(e) => {
                log::error!("[CREATE] Failed: {}", e);
                self.acknowledge(Acknowledgment::CreateFailed);
            }
        }
    }

    // ========================
    // Delete
    // ========================

    pub fn request_delete(&self, article: Article) {
        self.state.update_state(|s| s.request_delete(article));
    }

    pub fn cancel_delete(&self) {
        self.state.update_state(|s| s.close_delete());
    }

    /// Delete the pending article. Whatever happens, the modal closes.
    pub async fn confirm_delete(&self) {
        let Some(pending) = self.state.read_state(|s| s.pending_delete.clone()) else {
            return;
        };

        if let Some(article) = pending {
            match self.api.delete(&article.id).await {
                Ok(()) => {
                    log::info!("[DELETE] Deleted article {}", article.id);
                    self.refetch();
                    self.acknowledge(Acknowledgment::Deleted);
                }
                Err(e) => {
                    log::error!("[DELETE] Failed for article {}: {}", article.id, e);
                    self.acknowledge(Acknowledgment::DeleteFailed);
                }
            }
        }

        self.state.update_state(|s| s.close_delete());
    }

    // ========================
    // Edit
    // ========================

    pub fn begin_edit(&self, article: &Article) {
        self.state.update_state(|s| s.begin_edit(article));
    }

    pub fn set_edit_name(&self, name: String) {
        self.state.update_state(|s| s.set_edit_name(name));
    }

    pub fn set_edit_amount(&self, amount: String) {
        self.state.update_state(|s| s.set_edit_amount(amount));
    }

    pub fn cancel_edit(&self) {
        self.state.update_state(|s| s.cancel_edit());
    }

    /// Send the edit draft. On failure the modal stays open with the draft.
    pub async fn submit_edit(&self) {
        let Some(draft) = self.state.read_state(|s| s.draft_edit.clone()) else {
            return;
        };
        let payload = match validate_edit(&draft) {
            Ok(payload) => payload,
            Err(e) => {
                log::debug!("[EDIT] Rejected draft {:?}: {}", draft, e);
                self.acknowledge(e.into());
                return;
            }
        };
        let Some(id) = draft.id else {
            log::warn!("[EDIT] Submit with no article being edited");
            return;
        };

        log::debug!("[EDIT] Sending {:?} for article {}", payload, id);
        match self.api.update(&id, &payload).await {
            Ok(()) => {
                log::info!("[EDIT] Updated article {}", id);
                self.refetch();
                self.state.update_state(|s| s.finish_edit());
                self.acknowledge(Acknowledgment::Updated);
            }
            Err(e) => {
                log::error!("[EDIT] Failed for article {}: {}", id, e);
                self.acknowledge(Acknowledgment::UpdateFailed);
            }
        }
    }
}
