//! Lenient field extraction shared by the wire models.

use std::str::FromStr;

use serde_json::Value;

use crate::domain::format::PLACEHOLDER;
use crate::domain::types::TypeConstraintError;

/// Renders a scalar as text; blanks, nulls and containers count as absent.
pub(crate) fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

pub(crate) fn text_or_placeholder(value: &Value) -> String {
    scalar_text(value).unwrap_or_else(|| PLACEHOLDER.to_string())
}

/// Accepts numeric ids and ids sent as strings.
pub(crate) fn parse_id<T>(value: &Value) -> Result<T, TypeConstraintError>
where
    T: FromStr<Err = TypeConstraintError>,
{
    match value {
        Value::Number(n) => n.to_string().parse(),
        Value::String(s) => s.parse(),
        Value::Null => Err(TypeConstraintError::EmptyString),
        other => Err(TypeConstraintError::InvalidValue(other.to_string())),
    }
}

/// Reads booleans the API sometimes sends as `1`/`0` or `"true"`.
pub(crate) fn flag(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => matches!(s.trim().to_lowercase().as_str(), "true" | "1" | "sim"),
        _ => false,
    }
}

/// Decodes one record into its lenient payload; only non-object records fail.
pub(crate) fn record<P: serde::de::DeserializeOwned>(
    value: Value,
) -> Result<P, TypeConstraintError> {
    serde_json::from_value(value).map_err(|e| TypeConstraintError::InvalidValue(e.to_string()))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::domain::types::NoticeId;

    #[test]
    fn ids_accept_numbers_and_strings() {
        assert_eq!(parse_id::<NoticeId>(&json!(11)).unwrap().get(), 11);
        assert_eq!(parse_id::<NoticeId>(&json!(" 11 ")).unwrap().get(), 11);
        assert!(parse_id::<NoticeId>(&json!("onze")).is_err());
        assert!(parse_id::<NoticeId>(&json!(0)).is_err());
        assert!(parse_id::<NoticeId>(&Value::Null).is_err());
    }

    #[test]
    fn scalars_render_as_text() {
        assert_eq!(scalar_text(&json!(1714557600)).as_deref(), Some("1714557600"));
        assert_eq!(scalar_text(&json!("  ")), None);
        assert_eq!(text_or_placeholder(&Value::Null), PLACEHOLDER);
    }

    #[test]
    fn flags_tolerate_loose_encodings() {
        assert!(flag(&json!(true)));
        assert!(flag(&json!(1)));
        assert!(flag(&json!("true")));
        assert!(!flag(&json!(null)));
        assert!(!flag(&json!("não")));
    }
}
