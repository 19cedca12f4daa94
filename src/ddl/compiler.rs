//! Assembly of DROP / CREATE TABLE / CREATE INDEX statements.

use alloc::string::String;
use alloc::vec::Vec;

use super::foreign_key::compile_foreign_key;
use super::modifiers::compile_modifiers;
use super::sql_type::resolve;
use super::statement::{
    ColumnDef, CreateIndex, CreateTable, DropTable, FormatSql, ForeignKeyDef, Statement,
};
use crate::errors::SchemaError;
use crate::schema::{IMPLICIT_ID_COLUMN, Index, Schema, Table};

/// Whether `table` needs the synthesized `_id INTEGER PRIMARY KEY` column.
#[must_use]
pub fn needs_implicit_id(table: &Table) -> bool {
    !table.has_primary_key()
}

/// Build the `DROP TABLE IF EXISTS` statement of a table.
#[must_use]
pub fn compile_drop_table(table_name: &str) -> DropTable {
    DropTable {
        name: table_name.into(),
        if_exists: true,
    }
}

/// Build the CREATE TABLE statement of a table.
///
/// References are resolved against `schema`. The table's indexes are
/// validated here too, so a table that compiles also has valid indexes.
///
/// # Errors
///
/// Returns the first [`SchemaError`] found in a column, foreign key or index.
pub fn compile_create_table(
    schema: &Schema,
    table_name: &str,
    table: &Table,
) -> Result<CreateTable, SchemaError> {
    build_create_table(schema, table_name, table).inspect_err(|err| {
        tracing::warn!(table = table_name, error = %err, "invalid table definition");
    })
}

fn build_create_table(
    schema: &Schema,
    table_name: &str,
    table: &Table,
) -> Result<CreateTable, SchemaError> {
    let implicit_id = needs_implicit_id(table);
    if implicit_id && table.columns.contains_key(IMPLICIT_ID_COLUMN) {
        return Err(SchemaError::ImplicitIdConflict {
            table: table_name.into(),
        });
    }

    let columns = table
        .columns
        .iter()
        .map(|(name, column)| -> Result<ColumnDef, SchemaError> {
            Ok(ColumnDef {
                name: name.clone(),
                sql_type: resolve(column.kind),
                constraints: compile_modifiers(schema, name, column)?,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let foreign_keys = table
        .foreign_keys
        .iter()
        .map(|fk| -> Result<ForeignKeyDef, SchemaError> {
            let def = compile_foreign_key(schema, table_name, fk)?;
            if let Some(column) = def.columns.iter().find(|c| !table.has_column(c)) {
                return Err(SchemaError::ForeignKeyColumnMissing {
                    table: table_name.into(),
                    column: column.clone(),
                });
            }
            Ok(def)
        })
        .collect::<Result<Vec<_>, _>>()?;

    for (index_name, index) in &table.indexes {
        check_index(table_name, table, index_name, index)?;
    }

    Ok(CreateTable {
        name: table_name.into(),
        implicit_id,
        columns,
        foreign_keys,
    })
}

fn check_index(
    table_name: &str,
    table: &Table,
    index_name: &str,
    index: &Index,
) -> Result<(), SchemaError> {
    if index.on.is_empty() {
        return Err(SchemaError::IndexEmpty {
            table: table_name.into(),
            index: index_name.into(),
        });
    }
    match index.on.iter().find(|column| !table.has_column(column)) {
        Some(column) => Err(SchemaError::IndexColumnMissing {
            table: table_name.into(),
            index: index_name.into(),
            column: column.clone(),
        }),
        None => Ok(()),
    }
}

/// Build one CREATE INDEX statement per declared index, in declaration order.
#[must_use]
pub fn compile_create_indexes(table_name: &str, table: &Table) -> Vec<CreateIndex> {
    table
        .indexes
        .iter()
        .map(|(name, index)| CreateIndex {
            name: name.clone(),
            table: table_name.into(),
            columns: index.on.clone(),
            unique: index.unique,
        })
        .collect()
}

/// Build the statements that recreate every table of `schema`.
///
/// Every table is dropped first, in schema order, then each table is created
/// followed by its indexes. The whole sequence is meant to run as one batch
/// with deferred foreign key checks.
///
/// # Errors
///
/// Returns the first [`SchemaError`] of any table; no statements are
/// returned in that case.
pub fn compile_recreate_all(schema: &Schema) -> Result<Vec<Statement>, SchemaError> {
    let mut drops = Vec::with_capacity(schema.len());
    let mut creates = Vec::new();
    for (name, table) in schema.iter() {
        let create = compile_create_table(schema, name, table)?;
        tracing::debug!(
            table = name,
            columns = table.columns.len(),
            indexes = table.indexes.len(),
            foreign_keys = table.foreign_keys.len(),
            "compiled table"
        );
        drops.push(Statement::DropTable(compile_drop_table(name)));
        creates.push(Statement::CreateTable(create));
        creates.extend(
            compile_create_indexes(name, table)
                .into_iter()
                .map(Statement::CreateIndex),
        );
    }
    drops.append(&mut creates);
    Ok(drops)
}

/// `DROP TABLE IF EXISTS <name>`.
#[must_use]
pub fn drop_table_if_exists(table_name: &str) -> String {
    compile_drop_table(table_name).format_sql()
}

/// `CREATE TABLE <name> (<columns>, <foreign keys>)`.
///
/// # Errors
///
/// See [`compile_create_table`].
pub fn create_table(
    schema: &Schema,
    table_name: &str,
    table: &Table,
) -> Result<String, SchemaError> {
    compile_create_table(schema, table_name, table).map(|ct| ct.format_sql())
}

/// `CREATE [UNIQUE] INDEX <name> ON <table> (<columns>)` for each index.
#[must_use]
pub fn create_indexes(table_name: &str, table: &Table) -> Vec<String> {
    compile_create_indexes(table_name, table)
        .iter()
        .map(FormatSql::format_sql)
        .collect()
}

/// SQL text of [`compile_recreate_all`].
///
/// # Errors
///
/// See [`compile_recreate_all`].
pub fn recreate_all(schema: &Schema) -> Result<Vec<String>, SchemaError> {
    Ok(compile_recreate_all(schema)?
        .iter()
        .map(FormatSql::format_sql)
        .collect())
}
