//! Edit Article Modal Component

use leptos::prelude::*;

use crate::context::use_app_context;

/// Edit dialog bound to the edit draft
#[component]
pub fn EditArticleModal() -> impl IntoView {
    let ctx = use_app_context();

    let name = Memo::new(move |_| ctx.state.with(|s| s.draft_edit.name.clone()));
    let amount = Memo::new(move |_| ctx.state.with(|s| s.draft_edit.amount.clone()));

    let save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.dispatch(|manager| async move { manager.submit_edit().await });
    };

    view! {
        <div class="modal">
            <div class="modal-content">
                <h2>"Editar articulo"</h2>
                <form class="edit-article-form" on:submit=save>
                    <div>
                        <label>"Nombre: "</label>
                        <input
                            type="text"
                            prop:value=move || name.get()
                            on:input=move |ev| ctx.with_manager(|m| m.set_edit_name(event_target_value(&ev)))
                        />
                    </div>
                    <div>
                        <label>"Monto: "</label>
                        <input
                            type="number"
                            prop:value=move || amount.get()
                            on:input=move |ev| ctx.with_manager(|m| m.set_edit_amount(event_target_value(&ev)))
                        />
                    </div>
                    <button type="submit" class="confirm-btn">"Guardar"</button>
                    <button
                        type="button"
                        class="cancel-btn"
                        on:click=move |_| ctx.with_manager(|m| m.cancel_edit())
                    >
                        "Cancelar"
                    </button>
                </form>
            </div>
        </div>
    }
}
