//! Delete Confirm Modal Component
//!
//! Asks before deleting the pending article.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::presentation::delete_prompt;

/// Delete confirmation dialog
///
/// Rendered while an article is pending deletion. "Eliminar" sends the
/// DELETE, "Cancelar" drops the pending article without a request.
#[component]
pub fn DeleteConfirmModal() -> impl IntoView {
    let ctx = use_app_context();
    let prompt = move || ctx.state.with(|s| delete_prompt(s.pending_delete.as_ref()));

    view! {
        <div class="modal">
            <div class="modal-content">
                <h2>"Confirmar Eliminación"</h2>
                <p>{prompt}</p>
                <button
                    class="confirm-btn"
                    on:click=move |_| ctx.dispatch(|manager| async move { manager.confirm_delete().await })
                >
                    "Eliminar"
                </button>
                <button
                    class="cancel-btn"
                    on:click=move |_| ctx.with_manager(|m| m.cancel_delete())
                >
                    "Cancelar"
                </button>
            </div>
        </div>
    }
}
