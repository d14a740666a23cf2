//! View State
//!
//! Everything the article view holds locally, and the transitions user
//! actions drive it through.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;

use crate::models::{Article, CreateDraft, EditDraft};

/// Local state of the article view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    /// Last collection received from the server, in server order
    pub items: Vec<Article>,
    /// Article awaiting delete confirmation
    pub pending_delete: Option<Article>,
    pub delete_modal_visible: bool,
    pub edit_modal_visible: bool,
    pub draft_create: CreateDraft,
    pub draft_edit: EditDraft,
}

impl ViewState {
    pub fn replace_items(&mut self, items: Vec<Article>) {
        self.items = items;
    }

    pub fn set_create_name(&mut self, name: String) {
        self.draft_create.name = name;
    }

    pub fn set_create_amount(&mut self, amount: String) {
        self.draft_create.amount = amount;
    }

    pub fn clear_create_draft(&mut self) {
        self.draft_create = CreateDraft::default();
    }

    // ========================
    // Delete: Idle <-> Confirming
    // ========================

    pub fn request_delete(&mut self, article: Article) {
        self.pending_delete = Some(article);
        self.delete_modal_visible = true;
    }

    /// Back to idle, after a confirm or a cancel.
    pub fn close_delete(&mut self) {
        self.pending_delete = None;
        self.delete_modal_visible = false;
    }

    pub fn is_confirming_delete(&self) -> bool {
        self.delete_modal_visible
    }

    // ========================
    // Edit: Idle <-> Editing
    // ========================

    pub fn begin_edit(&mut self, article: &Article) {
        self.draft_edit = EditDraft::from_article(article);
        self.edit_modal_visible = true;
    }

    pub fn set_edit_name(&mut self, name: String) {
        self.draft_edit.name = name;
    }

    pub fn set_edit_amount(&mut self, amount: String) {
        self.draft_edit.amount = amount;
    }

    pub fn cancel_edit(&mut self) {
        self.draft_edit = EditDraft::default();
        self.edit_modal_visible = false;
    }

    /// Hide the modal after a successful update. The draft is left in place.
    pub fn finish_edit(&mut self) {
        self.edit_modal_visible = false;
    }

    pub fn is_editing(&self) -> bool {
        self.edit_modal_visible
    }
}

/// Shared access to a `ViewState`.
///
/// Both methods return `None` once the state has been dropped (the view was
/// unmounted while a request was in flight).
pub trait StateHandle: Clone {
    fn update_state<R>(&self, f: impl FnOnce(&mut ViewState) -> R) -> Option<R>;
    fn read_state<R>(&self, f: impl FnOnce(&ViewState) -> R) -> Option<R>;
}

impl StateHandle for RwSignal<ViewState> {
    fn update_state<R>(&self, f: impl FnOnce(&mut ViewState) -> R) -> Option<R> {
        self.try_update(f)
    }

    fn read_state<R>(&self, f: impl FnOnce(&ViewState) -> R) -> Option<R> {
        self.try_with_untracked(f)
    }
}

impl StateHandle for Rc<RefCell<ViewState>> {
    fn update_state<R>(&self, f: impl FnOnce(&mut ViewState) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }

    fn read_state<R>(&self, f: impl FnOnce(&ViewState) -> R) -> Option<R> {
        Some(f(&self.borrow()))
    }
}
