//! New Article Form Component
//!
//! Form for creating articles, bound to the creation draft.

use leptos::prelude::*;

use crate::context::use_app_context;

/// Form for creating a new article
#[component]
pub fn NewArticleForm() -> impl IntoView {
    let ctx = use_app_context();

    let name = Memo::new(move |_| ctx.state.with(|s| s.draft_create.name.clone()));
    let amount = Memo::new(move |_| ctx.state.with(|s| s.draft_create.amount.clone()));

    let create_article = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.dispatch(|manager| async move { manager.submit_create().await });
    };

    view! {
        <h2>"Agregar articulo"</h2>
        <form class="new-article-form" on:submit=create_article>
            <div>
                <label>"Nombre: "</label>
                <input
                    type="text"
                    required=true
                    prop:value=move || name.get()
                    on:input=move |ev| ctx.with_manager(|m| m.set_create_name(event_target_value(&ev)))
                />
            </div>

            <div>
                <label>"Monto: "</label>
                <input
                    type="number"
                    required=true
                    prop:value=move || amount.get()
                    on:input=move |ev| ctx.with_manager(|m| m.set_create_amount(event_target_value(&ev)))
                />
            </div>
            <button type="submit">"Agregar"</button>
        </form>
    }
}
