//! Table and modal text derived from the view state.

use crate::models::{format_amount, Article, ArticleId};

pub const TITLE: &str = "ABM Articulos";
pub const COLUMNS: [&str; 4] = ["Id", "Name", "Amount", "Actions"];
pub const EMPTY_PLACEHOLDER: &str = "No hay articulos disponibles!";
/// Columns spanned by the placeholder cell
pub const PLACEHOLDER_SPAN: &str = "3";

/// One rendered table row. `key` is the article id; duplicates are not detected.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub key: ArticleId,
    pub id: String,
    pub name: String,
    pub amount: String,
    pub article: Article,
}

impl TableRow {
    pub fn cells(&self) -> [&str; 3] {
        [self.id.as_str(), self.name.as_str(), self.amount.as_str()]
    }
}

/// Rows in server order, no sorting or filtering.
pub fn table_rows(items: &[Article]) -> Vec<TableRow> {
    items
        .iter()
        .map(|article| TableRow {
            key: article.id.clone(),
            id: article.id.to_string(),
            name: article.name.clone(),
            amount: format_amount(article.amount),
            article: article.clone(),
        })
        .collect()
}

/// Contents of the table body: the rows, or a single placeholder row.
#[derive(Debug, Clone, PartialEq)]
pub enum TableBody {
    Rows(Vec<TableRow>),
    Placeholder(&'static str),
}

impl TableBody {
    pub fn rows(&self) -> &[TableRow] {
        match self {
            TableBody::Rows(rows) => rows.as_slice(),
            TableBody::Placeholder(_) => &[],
        }
    }

    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            TableBody::Rows(_) => None,
            TableBody::Placeholder(text) => Some(*text),
        }
    }
}

pub fn table_body(items: &[Article]) -> TableBody {
    if items.is_empty() {
        TableBody::Placeholder(EMPTY_PLACEHOLDER)
    } else {
        TableBody::Rows(table_rows(items))
    }
}

pub fn delete_prompt(pending: Option<&Article>) -> String {
    let name = pending.map(|a| a.name.as_str()).unwrap_or_default();
    format!("¿Estás seguro de que deseas eliminar el artículo \"{}\"?", name)
}
