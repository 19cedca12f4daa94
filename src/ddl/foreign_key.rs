//! Table-level foreign key validation.

use alloc::string::String;

use super::statement::ForeignKeyDef;
use crate::errors::SchemaError;
use crate::schema::{ForeignKey, Schema};

/// Validate a foreign key of `table_name` and resolve its target.
///
/// Column order is kept as declared.
///
/// # Errors
///
/// * [`SchemaError::ForeignKeyLengthMismatch`] if `columns` and `references`
///   differ in length.
/// * [`SchemaError::ForeignKeyReferencesEmpty`] if there are no references.
/// * [`SchemaError::ForeignKeyTargetMissing`] if the referenced table, or any
///   referenced column, is not part of `schema`.
/// * [`SchemaError::ForeignKeyMixedTargets`] if the references name more than
///   one table.
pub fn compile_foreign_key(
    schema: &Schema,
    table_name: &str,
    foreign_key: &ForeignKey,
) -> Result<ForeignKeyDef, SchemaError> {
    let table = || String::from(table_name);

    if foreign_key.columns.len() != foreign_key.references.len() {
        return Err(SchemaError::ForeignKeyLengthMismatch { table: table() });
    }
    let Some(first) = foreign_key.references.first() else {
        return Err(SchemaError::ForeignKeyReferencesEmpty { table: table() });
    };
    let target = first.collection.as_str();
    if target.is_empty() || schema.get(target).is_none() {
        return Err(SchemaError::ForeignKeyTargetMissing { table: table() });
    }

    for reference in &foreign_key.references {
        if reference.collection != target {
            return Err(SchemaError::ForeignKeyMixedTargets { table: table() });
        }
        if !schema.resolves(reference) {
            return Err(SchemaError::ForeignKeyTargetMissing { table: table() });
        }
    }

    Ok(ForeignKeyDef {
        columns: foreign_key.columns.clone(),
        table: target.into(),
        references: foreign_key
            .references
            .iter()
            .map(|reference| reference.name.clone())
            .collect(),
    })
}
