//! Article Table Component
//!
//! One row per article in server order, with edit and delete triggers.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::presentation::{table_body, TableBody, TableRow, COLUMNS, PLACEHOLDER_SPAN};

#[component]
pub fn ArticleTable() -> impl IntoView {
    let ctx = use_app_context();
    let body = Memo::new(move |_| ctx.state.with(|s| table_body(&s.items)));
    let placeholder = Memo::new(move |_| body.with(TableBody::placeholder));

    view! {
        <table class="table">
            <thead>
                <tr>
                    {COLUMNS.iter().map(|title| view! { <th>{*title}</th> }).collect_view()}
                </tr>
            </thead>
            <tbody>
                {move || placeholder.get().map(|text| view! {
                    <tr>
                        <td colspan=PLACEHOLDER_SPAN>{text}</td>
                    </tr>
                })}
                // Keyed on the article id as delivered; duplicates are not guarded against
                <For
                    each=move || body.with(|b| b.rows().to_vec())
                    key=|row| row.key.clone()
                    children=move |row| view! { <ArticleRow row=row /> }
                />
            </tbody>
        </table>
    }
}

#[component]
fn ArticleRow(row: TableRow) -> impl IntoView {
    let ctx = use_app_context();
    let cells = row.cells().map(str::to_string);
    let to_edit = row.article.clone();
    let to_delete = row.article;

    view! {
        <tr>
            {cells.into_iter().map(|cell| view! { <td>{cell}</td> }).collect_view()}
            <td>
                <button
                    class="edit-btn"
                    on:click=move |_| ctx.with_manager(|m| m.begin_edit(&to_edit))
                >
                    "Editar"
                </button>
                <button
                    class="delete-btn"
                    on:click=move |_| ctx.with_manager(|m| m.request_delete(to_delete.clone()))
                >
                    "Eliminar"
                </button>
            </td>
        </tr>
    }
}
