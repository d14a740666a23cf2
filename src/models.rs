//! Frontend Models
//!
//! Data structures matching the products API, plus the form drafts.

use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

/// Server-assigned article identifier.
///
/// Opaque to the client: the API currently hands out integers, but string
/// ids are accepted and rendered verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ArticleId {
    Number(i64),
    Text(String),
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArticleId::Number(n) => write!(f, "{}", n),
            ArticleId::Text(s) => f.write_str(s),
        }
    }
}

/// Article as returned by `GET /api/products/all`.
///
/// No schema validation beyond the id: missing fields fall back to their
/// defaults and are rendered as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: ArticleId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub amount: f64,
}

/// Body of the create and update requests.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArticlePayload {
    pub name: String,
    #[serde(serialize_with = "serialize_amount")]
    pub amount: f64,
}

/// Working copy of the creation form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateDraft {
    pub name: String,
    pub amount: String,
}

/// Working copy of the edit form. `id` is fixed once the edit begins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditDraft {
    pub id: Option<ArticleId>,
    pub name: String,
    pub amount: String,
}

impl EditDraft {
    pub fn from_article(article: &Article) -> Self {
        Self {
            id: Some(article.id.clone()),
            name: article.name.clone(),
            amount: format_amount(article.amount),
        }
    }
}

/// Largest integer a JSON number holds exactly (2^53).
const MAX_EXACT_INT: f64 = 9_007_199_254_740_992.0;

/// Format an amount the way the browser prints a number: `5`, `12.5`, `-1`,
/// and exponent form (`1e+21`, `1e-7`) outside `[1e-6, 1e21)`.
pub fn format_amount(amount: f64) -> String {
    if amount == 0.0 {
        // avoid "-0"
        return "0".to_string();
    }
    let magnitude = amount.abs();
    if magnitude >= 1e21 || magnitude < 1e-6 {
        let exp = format!("{:e}", amount);
        return match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => format!("{}e+{}", mantissa, power),
            _ => exp,
        };
    }
    amount.to_string()
}

/// Integral amounts go on the wire without a fractional part.
fn serialize_amount<S: Serializer>(amount: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if amount.fract() == 0.0 && amount.abs() < MAX_EXACT_INT {
        serializer.serialize_i64(*amount as i64)
    } else {
        serializer.serialize_f64(*amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_article_list() {
        let body = r#"[{"id":1,"name":"Pen","amount":5},{"id":"a-7","name":"Ink","amount":2.25}]"#;
        let articles: Vec<Article> = serde_json::from_str(body).unwrap();

        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0].id, ArticleId::Number(1));
        assert_eq!(articles[0].amount, 5.0);
        assert_eq!(articles[1].id, ArticleId::Text("a-7".to_string()));
        assert_eq!(articles[1].id.to_string(), "a-7");
    }

    #[test]
    fn test_decode_keeps_incomplete_entries() {
        let articles: Vec<Article> = serde_json::from_str(r#"[{"id":3}]"#).unwrap();
        assert_eq!(articles[0].name, "");
        assert_eq!(articles[0].amount, 0.0);
    }

    #[test]
    fn test_decode_rejects_missing_id() {
        let result: Result<Vec<Article>, _> = serde_json::from_str(r#"[{"name":"Pen","amount":5}]"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_payload_amount_encoding() {
        let whole = ArticlePayload { name: "Cup".to_string(), amount: -1.0 };
        assert_eq!(serde_json::to_string(&whole).unwrap(), r#"{"name":"Cup","amount":-1}"#);

        let fractional = ArticlePayload { name: "Book".to_string(), amount: 12.5 };
        assert_eq!(serde_json::to_string(&fractional).unwrap(), r#"{"name":"Book","amount":12.5}"#);
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(5.0), "5");
        assert_eq!(format_amount(12.5), "12.5");
        assert_eq!(format_amount(-0.0), "0");
        assert_eq!(format_amount(0.000001), "0.000001");
        assert_eq!(format_amount(123456789.0), "123456789");
    }

    #[test]
    fn test_format_amount_exponent_form() {
        assert_eq!(format_amount(1e21), "1e+21");
        assert_eq!(format_amount(-2.5e22), "-2.5e+22");
        assert_eq!(format_amount(1e-7), "1e-7");
        assert_eq!(format_amount(1.5e-7), "1.5e-7");
    }

    #[test]
    fn test_edit_draft_from_article() {
        let article = Article { id: ArticleId::Number(2), name: "Cup".to_string(), amount: 3.0 };
        let draft = EditDraft::from_article(&article);

        assert_eq!(draft.id, Some(ArticleId::Number(2)));
        assert_eq!(draft.name, "Cup");
        assert_eq!(draft.amount, "3");
    }
}
