//! Physical storage types.

use core::fmt::{self, Display};

use crate::schema::ColumnType;

/// SQLite storage class a column is declared with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SqlType {
    /// `TEXT`
    Text,
    /// `INTEGER`
    Integer,
}

impl SqlType {
    /// The keyword as written in DDL.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "TEXT",
            Self::Integer => "INTEGER",
        }
    }
}

impl Display for SqlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<ColumnType> for SqlType {
    /// Dates and JSON are stored as serialized text, booleans as 0/1.
    fn from(kind: ColumnType) -> Self {
        match kind {
            ColumnType::Text | ColumnType::Date | ColumnType::Json => Self::Text,
            ColumnType::Number | ColumnType::Boolean => Self::Integer,
        }
    }
}

/// Map an abstract column type to its storage type.
#[must_use]
pub fn resolve(kind: ColumnType) -> SqlType {
    SqlType::from(kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_is_total() {
        assert_eq!(resolve(ColumnType::Text), SqlType::Text);
        assert_eq!(resolve(ColumnType::Date), SqlType::Text);
        assert_eq!(resolve(ColumnType::Json), SqlType::Text);
        assert_eq!(resolve(ColumnType::Number), SqlType::Integer);
        assert_eq!(resolve(ColumnType::Boolean), SqlType::Integer);
    }

    #[test]
    fn test_display() {
        assert_eq!(alloc::format!("{}", SqlType::Text), "TEXT");
        assert_eq!(alloc::format!("{}", SqlType::Integer), "INTEGER");
    }
}
