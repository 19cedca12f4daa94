//! Column definitions and the builder used to declare them.

use alloc::string::String;

use super::value::DefaultValue;

/// The abstract type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ColumnType {
    /// Integer or real number.
    Number,
    /// Boolean, stored as 0/1.
    Boolean,
    /// Free text.
    Text,
    /// Date, stored as serialized text.
    Date,
    /// JSON document, stored as serialized text.
    Json,
}

impl ColumnType {
    /// Whether columns of this type may be primary keys or carry references.
    #[must_use]
    pub const fn is_keyable(self) -> bool {
        match self {
            Self::Number | Self::Text => true,
            Self::Boolean | Self::Date | Self::Json => false,
        }
    }
}

/// A weak reference to a column of another table, by name.
///
/// Nothing guarantees the target exists; it is looked up when DDL is compiled.
/// An empty table or column name counts as unset.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColumnRef {
    /// The referenced table.
    pub collection: String,
    /// The referenced column.
    pub name: String,
}

impl ColumnRef {
    /// Reference `column` of `table`.
    #[must_use]
    pub fn new(table: impl Into<String>, column: impl Into<String>) -> Self {
        Self {
            collection: table.into(),
            name: column.into(),
        }
    }
}

/// Per-column options.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct ColumnSchema {
    /// Whether the column accepts `NULL`.
    pub optional: bool,
    /// Whether values must be unique.
    pub unique: bool,
    /// The default value, if any.
    pub default: Option<DefaultValue>,
    /// Whether the column is the primary key. Only honoured on number and text columns.
    pub primary_key: bool,
    /// Column-level reference. Only honoured on number and text columns.
    pub references: Option<ColumnRef>,
    /// The column's own name, filled in when its table is added to a schema.
    pub name: Option<String>,
}

/// A column declaration.
///
/// # Example
///
/// ```rust
/// use sqlite_schema_ddl::{Column, RawSql};
///
/// let id = Column::number().primary_key();
/// let created_at = Column::date().default(RawSql::NOW);
/// let author = Column::text().optional().references("users", "name");
/// assert!(id.has_primary_key());
/// assert!(created_at.has_default());
/// assert!(author.references_config().is_some());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Column {
    /// The abstract column type.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: ColumnType,
    /// The column options.
    #[cfg_attr(feature = "serde", serde(default))]
    pub schema: ColumnSchema,
}

impl Column {
    /// A column of the given type with default options.
    #[must_use]
    pub fn new(kind: ColumnType) -> Self {
        Self {
            kind,
            schema: ColumnSchema::default(),
        }
    }

    /// A number column.
    #[must_use]
    pub fn number() -> Self {
        Self::new(ColumnType::Number)
    }

    /// A boolean column.
    #[must_use]
    pub fn boolean() -> Self {
        Self::new(ColumnType::Boolean)
    }

    /// A text column.
    #[must_use]
    pub fn text() -> Self {
        Self::new(ColumnType::Text)
    }

    /// A date column.
    #[must_use]
    pub fn date() -> Self {
        Self::new(ColumnType::Date)
    }

    /// A JSON column.
    #[must_use]
    pub fn json() -> Self {
        Self::new(ColumnType::Json)
    }

    /// Allow `NULL` values.
    #[must_use]
    pub fn optional(mut self) -> Self {
        self.schema.optional = true;
        self
    }

    /// Require unique values.
    #[must_use]
    pub fn unique(mut self) -> Self {
        self.schema.unique = true;
        self
    }

    /// Mark the column as the table's primary key.
    #[must_use]
    pub fn primary_key(mut self) -> Self {
        self.schema.primary_key = true;
        self
    }

    /// Set the column default.
    #[must_use]
    pub fn default(mut self, value: impl Into<DefaultValue>) -> Self {
        self.schema.default = Some(value.into());
        self
    }

    /// Reference `column` of `table`.
    #[must_use]
    pub fn references(mut self, table: impl Into<String>, column: impl Into<String>) -> Self {
        self.schema.references = Some(ColumnRef::new(table, column));
        self
    }

    /// Whether this column is the primary key.
    ///
    /// The flag is ignored on types that cannot be keys.
    #[must_use]
    pub fn has_primary_key(&self) -> bool {
        self.kind.is_keyable() && self.schema.primary_key
    }

    /// Whether a `DEFAULT` clause is emitted for this column.
    ///
    /// Numeric primary keys are implicitly defaulted (SQLite assigns the rowid).
    #[must_use]
    pub fn has_default(&self) -> bool {
        self.schema.default.is_some() || (self.has_primary_key() && self.kind == ColumnType::Number)
    }

    /// The column-level reference, if this column type may carry one.
    #[must_use]
    pub fn references_config(&self) -> Option<&ColumnRef> {
        if self.kind.is_keyable() {
            self.schema.references.as_ref()
        } else {
            None
        }
    }
}
