//! Serialization of column defaults into SQL literal text.

use alloc::format;
use alloc::string::{String, ToString};

use super::escape::escape_string;
use crate::errors::SchemaError;
use crate::schema::{ColumnType, DefaultValue, Literal};

const INVALID_JSON_DEFAULT: &str = "defaults must be valid JSON when using the `json()` type";

/// Serialize a default value for a column of type `kind`.
///
/// Raw SQL is returned verbatim. Literals are escaped, and JSON columns get
/// their value serialized to JSON text first.
///
/// # Errors
///
/// Returns [`SchemaError::DefaultSerialization`], naming `column`, when a JSON
/// default contains a non-finite number or a structured JSON value is used on
/// a column that is not a JSON column.
pub fn serialize_default(
    column: &str,
    kind: ColumnType,
    value: &DefaultValue,
) -> Result<String, SchemaError> {
    let literal = match value {
        DefaultValue::Raw(raw) => return Ok(raw.as_str().into()),
        DefaultValue::Literal(literal) => literal,
    };

    match kind {
        ColumnType::Boolean | ColumnType::Number | ColumnType::Text | ColumnType::Date => {
            scalar(column, literal)
        }
        ColumnType::Json => {
            let json = to_json(literal).ok_or_else(|| invalid(column, INVALID_JSON_DEFAULT))?;
            let text = serde_json::to_string(&json).map_err(|err| invalid(column, &err.to_string()))?;
            Ok(escape_string(&text))
        }
    }
}

fn invalid(column: &str, reason: &str) -> SchemaError {
    SchemaError::DefaultSerialization {
        column: column.into(),
        reason: reason.into(),
    }
}

fn scalar(column: &str, literal: &Literal) -> Result<String, SchemaError> {
    Ok(match literal {
        Literal::Boolean(b) => boolean(*b),
        Literal::Integer(v) => v.to_string(),
        Literal::Real(v) => real(*v),
        Literal::Text(s) => escape_string(s),
        Literal::Json(json) => match json {
            serde_json::Value::Null => "NULL".into(),
            serde_json::Value::Bool(b) => boolean(*b),
            serde_json::Value::Number(n) => n.to_string(),
            serde_json::Value::String(s) => escape_string(s),
            serde_json::Value::Array(_) | serde_json::Value::Object(_) => {
                return Err(invalid(
                    column,
                    "arrays and objects are only supported on `json()` columns",
                ));
            }
        },
    })
}

fn boolean(value: bool) -> String {
    String::from(if value { "TRUE" } else { "FALSE" })
}

fn real(value: f64) -> String {
    if value.is_nan() {
        "NULL".into()
    } else if value.is_infinite() {
        // SQLite's way of representing infinity
        if value.is_sign_positive() {
            "9e999".into()
        } else {
            "-9e999".into()
        }
    } else {
        // Keep a decimal point so SQLite stores the value as REAL
        let text = format!("{value}");
        if text.contains(['.', 'e', 'E']) {
            text
        } else {
            text + ".0"
        }
    }
}

fn to_json(literal: &Literal) -> Option<serde_json::Value> {
    Some(match literal {
        Literal::Boolean(b) => serde_json::Value::Bool(*b),
        Literal::Integer(v) => serde_json::Value::from(*v),
        Literal::Real(v) => serde_json::Value::Number(serde_json::Number::from_f64(*v)?),
        Literal::Text(s) => serde_json::Value::String(s.clone()),
        Literal::Json(json) => json.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::RawSql;
    use serde_json::json;

    fn ser(kind: ColumnType, value: impl Into<DefaultValue>) -> String {
        serialize_default("col", kind, &value.into()).unwrap()
    }

    #[test]
    fn test_raw_sql_is_verbatim() {
        assert_eq!(ser(ColumnType::Date, RawSql::NOW), "CURRENT_TIMESTAMP");
        assert_eq!(ser(ColumnType::Json, RawSql::new("'[]'")), "'[]'");
        assert_eq!(ser(ColumnType::Text, RawSql::new("lower('X')")), "lower('X')");
    }

    #[test]
    fn test_booleans() {
        assert_eq!(ser(ColumnType::Boolean, true), "TRUE");
        assert_eq!(ser(ColumnType::Boolean, false), "FALSE");
    }

    #[test]
    fn test_numbers() {
        assert_eq!(ser(ColumnType::Number, 42), "42");
        assert_eq!(ser(ColumnType::Number, -7i64), "-7");
        assert_eq!(ser(ColumnType::Number, 1.5), "1.5");
        assert_eq!(ser(ColumnType::Number, 2.0), "2.0");
        assert_eq!(ser(ColumnType::Number, -0.0), "-0.0");
        assert_eq!(ser(ColumnType::Number, 1e20), "100000000000000000000.0");
        assert_eq!(ser(ColumnType::Number, f64::NAN), "NULL");
        assert_eq!(ser(ColumnType::Number, f64::INFINITY), "9e999");
        assert_eq!(ser(ColumnType::Number, f64::NEG_INFINITY), "-9e999");
    }

    #[test]
    fn test_strings_are_escaped() {
        assert_eq!(ser(ColumnType::Text, "O'Brien"), "'O''Brien'");
        assert_eq!(ser(ColumnType::Date, "2024-01-01"), "'2024-01-01'");
    }

    #[test]
    fn test_json_is_serialized_then_escaped() {
        assert_eq!(ser(ColumnType::Json, json!({"a": 1})), r#"'{"a":1}'"#);
        assert_eq!(ser(ColumnType::Json, json!(["it's"])), r#"'["it''s"]'"#);
        assert_eq!(ser(ColumnType::Json, "text"), r#"'"text"'"#);
        assert_eq!(ser(ColumnType::Json, 3), "'3'");
        assert_eq!(ser(ColumnType::Json, true), "'true'");
    }

    #[test]
    fn test_json_scalars_on_plain_columns() {
        assert_eq!(ser(ColumnType::Number, json!(5)), "5");
        assert_eq!(ser(ColumnType::Text, json!("x")), "'x'");
        assert_eq!(ser(ColumnType::Text, json!(null)), "NULL");
    }

    #[test]
    fn test_invalid_defaults_name_the_column() {
        let err = serialize_default("meta", ColumnType::Json, &f64::NAN.into()).unwrap_err();
        assert!(matches!(err, SchemaError::DefaultSerialization { ref column, .. } if column == "meta"));

        let err =
            serialize_default("tags", ColumnType::Text, &json!(["a"]).into()).unwrap_err();
        assert!(matches!(err, SchemaError::DefaultSerialization { ref column, .. } if column == "tags"));
    }
}
