//! Submodule defining the errors used across the crate.

use alloc::boxed::Box;
use alloc::string::String;

/// Structural schema errors, raised while compiling DDL.
///
/// These are always raised before any statement reaches an execution
/// transport, and no statement is produced for the offending table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    /// A foreign key declares a different number of local and referenced columns.
    #[error(
        "Foreign key on {table} is misconfigured. `columns` and `references` must be the same length."
    )]
    ForeignKeyLengthMismatch {
        /// The table declaring the foreign key.
        table: String,
    },
    /// A foreign key declares no referenced columns.
    #[error("Foreign key on {table} is misconfigured. `references` array cannot be empty.")]
    ForeignKeyReferencesEmpty {
        /// The table declaring the foreign key.
        table: String,
    },
    /// A foreign key references a table or column that cannot be resolved.
    #[error(
        "Table {table} references a table that does not exist. Did you apply the referenced table to the `tables` object in your db config?"
    )]
    ForeignKeyTargetMissing {
        /// The table declaring the foreign key.
        table: String,
    },
    /// The references of a single foreign key point at more than one table.
    #[error(
        "Foreign key on {table} is misconfigured. All `references` must point to the same table."
    )]
    ForeignKeyMixedTargets {
        /// The table declaring the foreign key.
        table: String,
    },
    /// A foreign key lists a local column the table does not have.
    #[error("Foreign key on {table} is misconfigured. Column {column} does not exist on {table}.")]
    ForeignKeyColumnMissing {
        /// The table declaring the foreign key.
        table: String,
        /// The unknown local column.
        column: String,
    },
    /// A column-level reference cannot be resolved.
    #[error(
        "Column {column} references a table that does not exist. Did you apply the referenced table to the `tables` object in your db config?"
    )]
    InlineReferenceMissing {
        /// The column declaring the reference.
        column: String,
    },
    /// A default value cannot be serialized for its column type.
    #[error("Invalid default value for column {column}: {reason}")]
    DefaultSerialization {
        /// The column carrying the default.
        column: String,
        /// Why the value could not be serialized.
        reason: String,
    },
    /// An index covers no columns.
    #[error("Index {index} on {table} is misconfigured. `on` cannot be empty.")]
    IndexEmpty {
        /// The indexed table.
        table: String,
        /// The index name.
        index: String,
    },
    /// An index covers a column the table does not have.
    #[error("Index {index} on {table} is misconfigured. Column {column} does not exist on {table}.")]
    IndexColumnMissing {
        /// The indexed table.
        table: String,
        /// The index name.
        index: String,
        /// The unknown column.
        column: String,
    },
    /// A table without a primary key declares its own `_id` column, which
    /// would collide with the synthesized row id.
    #[error("Table {table} declares an `_id` column but no primary key. `_id` is reserved for the generated row id.")]
    ImplicitIdConflict {
        /// The offending table.
        table: String,
    },
    /// A table name was declared twice in the same schema.
    #[error("Table {0} is declared more than once")]
    DuplicateTable(String),
}

/// Errors raised while running compiled statements through a transport.
///
/// `E` is the transport's own error type, which is passed through untouched.
#[derive(Debug, thiserror::Error)]
pub enum ExecutionError<E> {
    /// The schema failed to compile, nothing was executed.
    #[error(transparent)]
    Schema(#[from] SchemaError),
    /// The store rejected the batch.
    #[error(transparent)]
    Store(E),
    /// The store rejected a statement issued by a development seed.
    #[error("Error while seeding database:\n\n{message}")]
    Seed {
        /// The store's message.
        message: String,
    },
    /// A development seed failed for a reason unrelated to the store.
    #[error(transparent)]
    SeedLoader(Box<dyn core::error::Error + Send + Sync>),
}
