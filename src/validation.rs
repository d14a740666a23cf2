//! Form Validation
//!
//! Turns form drafts into request payloads. Only creation insists on a
//! positive amount; edit accepts any finite number.

use crate::error::ValidationError;
use crate::models::{ArticlePayload, CreateDraft, EditDraft};

/// Parse a user-entered amount. Surrounding whitespace is ignored;
/// `inf` and `NaN` are not numbers here.
pub fn parse_amount(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

fn require_fields(name: &str, amount: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() || amount.trim().is_empty() {
        return Err(ValidationError::MissingFields);
    }
    Ok(())
}

/// Validate the creation form. The name is sent as typed.
pub fn validate_create(draft: &CreateDraft) -> Result<ArticlePayload, ValidationError> {
    require_fields(&draft.name, &draft.amount)?;
    let amount = parse_amount(&draft.amount)
        .filter(|n| *n > 0.0)
        .ok_or(ValidationError::NonPositiveAmount)?;
    Ok(ArticlePayload { name: draft.name.clone(), amount })
}

/// Validate the edit form. Zero and negative amounts pass.
pub fn validate_edit(draft: &EditDraft) -> Result<ArticlePayload, ValidationError> {
    require_fields(&draft.name, &draft.amount)?;
    let amount = parse_amount(&draft.amount).ok_or(ValidationError::InvalidAmount)?;
    Ok(ArticlePayload { name: draft.name.clone(), amount })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create(name: &str, amount: &str) -> CreateDraft {
        CreateDraft { name: name.to_string(), amount: amount.to_string() }
    }

    fn edit(name: &str, amount: &str) -> EditDraft {
        EditDraft { id: None, name: name.to_string(), amount: amount.to_string() }
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("12.5"), Some(12.5));
        assert_eq!(parse_amount("  7 "), Some(7.0));
        assert_eq!(parse_amount("-1"), Some(-1.0));
        assert_eq!(parse_amount("abc"), None);
        assert_eq!(parse_amount("inf"), None);
        assert_eq!(parse_amount("NaN"), None);
        assert_eq!(parse_amount(""), None);
    }

    #[test]
    fn test_create_requires_both_fields() {
        for (name, amount) in [("", "5"), ("   ", "5"), ("Pen", ""), ("Pen", " \t"), ("", "")] {
            assert_eq!(validate_create(&create(name, amount)), Err(ValidationError::MissingFields));
        }
    }

    #[test]
    fn test_create_rejects_non_positive_or_non_numeric() {
        for amount in ["0", "-3", "abc", "1e400"] {
            assert_eq!(
                validate_create(&create("Pen", amount)),
                Err(ValidationError::NonPositiveAmount),
                "amount {amount:?}"
            );
        }
    }

    #[test]
    fn test_create_payload() {
        let payload = validate_create(&create("Book", "12.5")).unwrap();
        assert_eq!(payload, ArticlePayload { name: "Book".to_string(), amount: 12.5 });
    }

    #[test]
    fn test_create_keeps_name_untrimmed() {
        let payload = validate_create(&create(" Book ", "1")).unwrap();
        assert_eq!(payload.name, " Book ");
    }

    #[test]
    fn test_edit_requires_both_fields() {
        assert_eq!(validate_edit(&edit(" ", "3")), Err(ValidationError::MissingFields));
        assert_eq!(validate_edit(&edit("Cup", "")), Err(ValidationError::MissingFields));
    }

    #[test]
    fn test_edit_accepts_zero_and_negative() {
        assert_eq!(validate_edit(&edit("Cup", "0")).unwrap().amount, 0.0);
        assert_eq!(validate_edit(&edit("Cup", "-1")).unwrap().amount, -1.0);
    }

    #[test]
    fn test_edit_rejects_non_numeric() {
        assert_eq!(validate_edit(&edit("Cup", "three")), Err(ValidationError::InvalidAmount));
    }
}
