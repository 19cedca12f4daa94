//! Schema-to-DDL compilation.
//!
//! Compilation is pure: the same [`Schema`](crate::Schema) always yields the
//! same statements, and no statement is produced for a table that fails
//! validation.
//!
//! - [`resolve`]: column type to storage type
//! - [`compile_modifiers`]: per-column constraint clauses
//! - [`serialize_default`]: default values to SQL literals
//! - [`compile_foreign_key`]: table-level foreign keys
//! - [`compile_recreate_all`] and friends: whole statements

mod compiler;
mod default_value;
mod escape;
mod foreign_key;
mod modifiers;
mod sql_type;
mod statement;

pub use compiler::{
    compile_create_indexes, compile_create_table, compile_drop_table, compile_recreate_all,
    create_indexes, create_table, drop_table_if_exists, needs_implicit_id, recreate_all,
};
pub use default_value::serialize_default;
pub use escape::{escape_name, escape_string};
pub use foreign_key::compile_foreign_key;
pub use modifiers::compile_modifiers;
pub use sql_type::{SqlType, resolve};
pub use statement::{
    ColumnConstraint, ColumnDef, CreateIndex, CreateTable, DropTable, ForeignKeyDef, FormatSql,
    IMPLICIT_ID_COLUMN_DEF, Statement,
};

/// Issued at the start of a recreate batch so foreign keys are checked at commit.
pub const DEFER_FOREIGN_KEYS_PRAGMA: &str = "pragma defer_foreign_keys=true;";
