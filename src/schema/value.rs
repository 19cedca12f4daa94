//! Default values: escaped literals versus trusted SQL expressions.

use alloc::borrow::Cow;
use alloc::string::String;

/// A literal default value, serialized and escaped before it reaches SQL.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Literal {
    /// Boolean value, written as `TRUE` / `FALSE`.
    Boolean(bool),
    /// Integer value.
    Integer(i64),
    /// Real/float value.
    Real(f64),
    /// Text value, written as a quoted string literal.
    Text(String),
    /// Arbitrary JSON value, meant for `json` columns.
    Json(serde_json::Value),
}

impl From<bool> for Literal {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

macro_rules! impl_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Literal {
                fn from(value: $t) -> Self {
                    Self::Integer(i64::from(value))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl From<f64> for Literal {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

impl From<&str> for Literal {
    fn from(value: &str) -> Self {
        Self::Text(value.into())
    }
}

impl From<String> for Literal {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<serde_json::Value> for Literal {
    fn from(value: serde_json::Value) -> Self {
        Self::Json(value)
    }
}

/// A fragment of SQL that is emitted verbatim, never quoted or escaped.
///
/// This is the injection boundary of the compiler: only construct it from
/// trusted, developer-authored text. Never wrap user-supplied data in it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawSql(Cow<'static, str>);

impl RawSql {
    /// `CURRENT_TIMESTAMP`, the current date and time as text.
    pub const NOW: Self = Self(Cow::Borrowed("CURRENT_TIMESTAMP"));
    /// The SQL `TRUE` keyword.
    pub const TRUE: Self = Self(Cow::Borrowed("TRUE"));
    /// The SQL `FALSE` keyword.
    pub const FALSE: Self = Self(Cow::Borrowed("FALSE"));

    /// Wrap trusted SQL text.
    #[must_use]
    pub fn new(sql: impl Into<Cow<'static, str>>) -> Self {
        Self(sql.into())
    }

    /// The wrapped SQL text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A column default: either a literal value or a trusted SQL expression.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DefaultValue {
    /// A value that must be serialized and escaped.
    Literal(Literal),
    /// SQL text emitted as-is.
    Raw(RawSql),
}

impl From<RawSql> for DefaultValue {
    fn from(raw: RawSql) -> Self {
        Self::Raw(raw)
    }
}

impl From<Literal> for DefaultValue {
    fn from(literal: Literal) -> Self {
        Self::Literal(literal)
    }
}

macro_rules! impl_default_from_literal {
    ($($t:ty),*) => {
        $(
            impl From<$t> for DefaultValue {
                fn from(value: $t) -> Self {
                    Self::Literal(Literal::from(value))
                }
            }
        )*
    };
}

impl_default_from_literal!(
    bool,
    i8,
    i16,
    i32,
    i64,
    u8,
    u16,
    u32,
    f64,
    &str,
    String,
    serde_json::Value
);
