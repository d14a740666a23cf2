//! ABM Articulos App
//!
//! Creation form, article table and the two modals.

use leptos::prelude::*;

use crate::components::{ArticleTable, DeleteConfirmModal, EditArticleModal, NewArticleForm};
use crate::config::ApiConfig;
use crate::context::AppContext;
use crate::presentation::TITLE;

#[component]
pub fn App() -> impl IntoView {
    let config = ApiConfig::from_build_env();
    log::info!("[APP] Using products API at {}", config.base_url());

    let ctx = AppContext::new(config);
    provide_context(ctx);

    // Load articles once on mount
    Effect::new(move |_| {
        ctx.dispatch(|manager| async move { manager.fetch_all().await });
    });

    let delete_visible = move || ctx.state.with(|s| s.is_confirming_delete());
    let edit_visible = move || ctx.state.with(|s| s.is_editing());

    view! {
        <h1>{TITLE}</h1>

        <NewArticleForm />

        <ArticleTable />

        <Show when=delete_visible>
            <DeleteConfirmModal />
        </Show>
        <Show when=edit_visible>
            <EditArticleModal />
        </Show>
    }
}
