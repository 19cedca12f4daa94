#![doc = include_str!("../README.md")]
#![no_std]
#![deny(clippy::mod_module_files)]

extern crate alloc;

pub mod ddl;
pub mod errors;
pub mod execute;
pub mod schema;
pub mod seed;

// Re-export main types
pub use ddl::{
    DEFER_FOREIGN_KEYS_PRAGMA, FormatSql, Statement, create_indexes, create_table,
    drop_table_if_exists, escape_name, escape_string, recreate_all,
};
pub use execute::{BatchExecutor, recreate_tables};
pub use schema::{
    Column, ColumnRef, ColumnSchema, ColumnType, DefaultValue, ForeignKey, Index, Literal, RawSql,
    Schema, Table,
};
pub use seed::{SEED_DEV_FILE_NAMES, SeedError, SeedFn, seed_local};

// Re-export errors
pub use errors::{ExecutionError, SchemaError};
