//! Column constraint clauses.

use alloc::vec;
use alloc::vec::Vec;

use super::default_value::serialize_default;
use super::statement::ColumnConstraint;
use crate::errors::SchemaError;
use crate::schema::{Column, Schema};

/// Derive the ordered constraint clauses of a column.
///
/// A primary key column gets `PRIMARY KEY` and nothing else. Otherwise the
/// order is `NOT NULL`, `UNIQUE`, `DEFAULT`, `REFERENCES`.
///
/// # Errors
///
/// Returns [`SchemaError::InlineReferenceMissing`] if the column references a
/// table or column that `schema` does not contain, and
/// [`SchemaError::DefaultSerialization`] if its default cannot be serialized.
pub fn compile_modifiers(
    schema: &Schema,
    column_name: &str,
    column: &Column,
) -> Result<Vec<ColumnConstraint>, SchemaError> {
    if column.has_primary_key() {
        return Ok(vec![ColumnConstraint::PrimaryKey]);
    }

    let mut constraints = Vec::new();
    if !column.schema.optional {
        constraints.push(ColumnConstraint::NotNull);
    }
    if column.schema.unique {
        constraints.push(ColumnConstraint::Unique);
    }
    // The implicit default of numeric primary keys never gets this far.
    if let Some(default) = &column.schema.default {
        constraints.push(ColumnConstraint::Default(serialize_default(
            column_name,
            column.kind,
            default,
        )?));
    }
    if let Some(reference) = column.references_config() {
        if !schema.resolves(reference) {
            return Err(SchemaError::InlineReferenceMissing {
                column: column_name.into(),
            });
        }
        constraints.push(ColumnConstraint::References {
            table: reference.collection.clone(),
            column: reference.name.clone(),
        });
    }
    Ok(constraints)
}
