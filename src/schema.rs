//! In-memory schema model: columns, tables, indexes and foreign keys.
//!
//! The model is plain data. Cross-table references are stored as
//! `(table, column)` names and only resolved against a [`Schema`] when DDL is
//! compiled, so tables that reference each other never own each other.
mod column;
mod table;
mod value;

pub use column::{Column, ColumnRef, ColumnSchema, ColumnType};
pub(crate) use table::IMPLICIT_ID_COLUMN;
pub use table::{ForeignKey, Index, Schema, Table};
pub use value::{DefaultValue, Literal, RawSql};

/// `IndexMap` alias using hashbrown's default hasher for `no_std` compatibility.
pub(crate) type IndexMap<K, V> = indexmap::IndexMap<K, V, hashbrown::DefaultHashBuilder>;
