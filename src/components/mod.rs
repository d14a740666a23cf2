//! UI Components
//!
//! Leptos components of the article view.

mod article_table;
mod delete_confirm_modal;
mod edit_article_modal;
mod new_article_form;

pub use article_table::ArticleTable;
pub use delete_confirm_modal::DeleteConfirmModal;
pub use edit_article_modal::EditArticleModal;
pub use new_article_form::NewArticleForm;
