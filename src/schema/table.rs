//! Tables, indexes, foreign keys and the schema that holds them.

use alloc::string::String;
use alloc::vec::Vec;

use super::IndexMap;
use super::column::{Column, ColumnRef};
use crate::errors::SchemaError;

/// Name of the row id column synthesized for tables without a primary key.
pub(crate) const IMPLICIT_ID_COLUMN: &str = "_id";

/// An index over one or more columns.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Index {
    /// The indexed columns, in order.
    pub on: Vec<String>,
    /// Whether this is a `UNIQUE` index.
    #[cfg_attr(feature = "serde", serde(default))]
    pub unique: bool,
}

impl Index {
    /// An index over the given columns, in order.
    #[must_use]
    pub fn on<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            on: columns.into_iter().map(Into::into).collect(),
            unique: false,
        }
    }

    /// An index over a single column.
    #[must_use]
    pub fn on_column(column: impl Into<String>) -> Self {
        Self {
            on: alloc::vec![column.into()],
            unique: false,
        }
    }

    /// Make the index `UNIQUE`.
    #[must_use]
    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }
}

/// A table-level foreign key.
///
/// `columns[i]` references `references[i]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ForeignKey {
    /// Local column names, in order.
    pub columns: Vec<String>,
    /// Referenced columns, in the same order as `columns`.
    pub references: Vec<ColumnRef>,
}

impl ForeignKey {
    /// A foreign key from `columns` to `references`.
    ///
    /// No validation happens here; mismatched or empty lists are reported
    /// when the owning table is compiled.
    #[must_use]
    pub fn new<I, S>(columns: I, references: impl IntoIterator<Item = ColumnRef>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            references: references.into_iter().collect(),
        }
    }
}

/// A table: ordered columns, named indexes and foreign keys.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct Table {
    /// Columns in declaration order.
    pub columns: IndexMap<String, Column>,
    /// Indexes in declaration order.
    pub indexes: IndexMap<String, Index>,
    /// Foreign keys in declaration order.
    pub foreign_keys: Vec<ForeignKey>,
}

impl Table {
    /// An empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) a column.
    #[must_use]
    pub fn column(mut self, name: impl Into<String>, column: Column) -> Self {
        self.columns.insert(name.into(), column);
        self
    }

    /// Add (or replace) an index.
    #[must_use]
    pub fn index(mut self, name: impl Into<String>, index: Index) -> Self {
        self.indexes.insert(name.into(), index);
        self
    }

    /// Append a foreign key.
    #[must_use]
    pub fn foreign_key(mut self, foreign_key: ForeignKey) -> Self {
        self.foreign_keys.push(foreign_key);
        self
    }

    /// Whether any column is the primary key.
    #[must_use]
    pub fn has_primary_key(&self) -> bool {
        self.columns.values().any(Column::has_primary_key)
    }

    /// Whether `name` is a column of this table, counting the synthesized `_id`.
    #[must_use]
    pub fn has_column(&self, name: &str) -> bool {
        if name.is_empty() {
            return false;
        }
        self.columns.contains_key(name) || (name == IMPLICIT_ID_COLUMN && !self.has_primary_key())
    }
}

/// The full set of tables, in the order their statements are emitted.
///
/// # Example
///
/// ```rust
/// use sqlite_schema_ddl::{Column, Schema, Table};
///
/// let schema = Schema::new()
///     .table("users", Table::new().column("name", Column::text()))?
///     .table("posts", Table::new().column("author", Column::text().references("users", "name")))?;
/// assert_eq!(schema.len(), 2);
/// assert!(schema.column_ref("users", "name").is_some());
/// assert!(schema.column_ref("users", "age").is_none());
/// # Ok::<(), sqlite_schema_ddl::SchemaError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Schema {
    tables: IndexMap<String, Table>,
}

impl Schema {
    /// An empty schema.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a table.
    ///
    /// Each column's `name` is set to its key in the table.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::DuplicateTable`] if a table with this name already exists.
    pub fn table(mut self, name: impl Into<String>, table: Table) -> Result<Self, SchemaError> {
        let name = name.into();
        if self.tables.contains_key(&name) {
            return Err(SchemaError::DuplicateTable(name));
        }
        self.tables.insert(name, stamp_column_names(table));
        Ok(self)
    }

    /// Add or replace a table.
    #[must_use]
    pub fn with_table(mut self, name: impl Into<String>, table: Table) -> Self {
        self.tables.insert(name.into(), stamp_column_names(table));
        self
    }

    /// Look up a table by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Table> {
        self.tables.get(name)
    }

    /// Iterate over `(name, table)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Table)> {
        self.tables.iter().map(|(name, table)| (name.as_str(), table))
    }

    /// Number of tables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Whether the schema has no tables.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// A reference to `column` of `table`, if both exist.
    #[must_use]
    pub fn column_ref(&self, table: &str, column: &str) -> Option<ColumnRef> {
        self.resolves(&ColumnRef::new(table, column))
            .then(|| ColumnRef::new(table, column))
    }

    /// Whether `reference` names an existing table and column.
    #[must_use]
    pub fn resolves(&self, reference: &ColumnRef) -> bool {
        self.get(&reference.collection)
            .is_some_and(|table| table.has_column(&reference.name))
    }
}

fn stamp_column_names(mut table: Table) -> Table {
    for (name, column) in &mut table.columns {
        column.schema.name = Some(name.clone());
    }
    table
}

impl<S: Into<String>> FromIterator<(S, Table)> for Schema {
    fn from_iter<I: IntoIterator<Item = (S, Table)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |schema, (name, table)| schema.with_table(name, table))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Schema {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serde::Serialize::serialize(&self.tables, serializer)
    }
}

/// Deserialized tables go through [`Schema::with_table`], so column names
/// are stamped exactly as for a schema built in code.
#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Schema {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tables: IndexMap<String, Table> = serde::Deserialize::deserialize(deserializer)?;
        Ok(tables.into_iter().collect())
    }
}
