//! Typed DDL statements and their SQL text.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::{self, Display, Write};

use super::escape::escape_name;
use super::sql_type::SqlType;

/// Column definition synthesized for tables that declare no primary key.
pub const IMPLICIT_ID_COLUMN_DEF: &str = "_id INTEGER PRIMARY KEY";

/// A constraint clause attached to a column definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnConstraint {
    /// `PRIMARY KEY`
    PrimaryKey,
    /// `NOT NULL`
    NotNull,
    /// `UNIQUE`
    Unique,
    /// `DEFAULT <expr>`, with the expression already serialized.
    Default(String),
    /// `REFERENCES <table> (<column>)`
    References {
        /// Referenced table.
        table: String,
        /// Referenced column.
        column: String,
    },
}

/// A column definition in CREATE TABLE.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDef {
    /// Column name.
    pub name: String,
    /// Storage type.
    pub sql_type: SqlType,
    /// Constraint clauses, in emission order.
    pub constraints: Vec<ColumnConstraint>,
}

/// A table-level `FOREIGN KEY` clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForeignKeyDef {
    /// Local columns.
    pub columns: Vec<String>,
    /// Referenced table.
    pub table: String,
    /// Referenced columns, matching `columns` position by position.
    pub references: Vec<String>,
}

/// A DROP TABLE statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropTable {
    /// Table name.
    pub name: String,
    /// Whether `IF EXISTS` is emitted.
    pub if_exists: bool,
}

/// A CREATE TABLE statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTable {
    /// Table name.
    pub name: String,
    /// Whether the `_id INTEGER PRIMARY KEY` column is prepended.
    pub implicit_id: bool,
    /// Column definitions.
    pub columns: Vec<ColumnDef>,
    /// Table-level foreign keys, after the columns.
    pub foreign_keys: Vec<ForeignKeyDef>,
}

/// A CREATE INDEX statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateIndex {
    /// Index name.
    pub name: String,
    /// Indexed table.
    pub table: String,
    /// Indexed columns, in order.
    pub columns: Vec<String>,
    /// Whether this is a `UNIQUE` index.
    pub unique: bool,
}

/// A compiled DDL statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// DROP TABLE statement.
    DropTable(DropTable),
    /// CREATE TABLE statement.
    CreateTable(CreateTable),
    /// CREATE INDEX statement.
    CreateIndex(CreateIndex),
}

/// Trait for types that can be formatted as SQL statements.
pub trait FormatSql {
    /// Format this value as a SQL string.
    fn format_sql(&self) -> String;
}

fn push_name_list(sql: &mut String, names: &[String]) {
    for (i, name) in names.iter().enumerate() {
        if i > 0 {
            sql.push_str(", ");
        }
        sql.push_str(&escape_name(name));
    }
}

impl Display for ColumnConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PrimaryKey => f.write_str("PRIMARY KEY"),
            Self::NotNull => f.write_str("NOT NULL"),
            Self::Unique => f.write_str("UNIQUE"),
            Self::Default(expr) => write!(f, "DEFAULT {expr}"),
            Self::References { table, column } => write!(
                f,
                "REFERENCES {} ({})",
                escape_name(table),
                escape_name(column)
            ),
        }
    }
}

impl FormatSql for ColumnDef {
    fn format_sql(&self) -> String {
        let mut sql = escape_name(&self.name);
        write!(sql, " {}", self.sql_type).unwrap();
        for constraint in &self.constraints {
            write!(sql, " {constraint}").unwrap();
        }
        sql
    }
}

impl FormatSql for ForeignKeyDef {
    fn format_sql(&self) -> String {
        let mut sql = String::from("FOREIGN KEY (");
        push_name_list(&mut sql, &self.columns);
        write!(sql, ") REFERENCES {}(", escape_name(&self.table)).unwrap();
        push_name_list(&mut sql, &self.references);
        sql.push(')');
        sql
    }
}

impl FormatSql for DropTable {
    fn format_sql(&self) -> String {
        let if_exists = if self.if_exists { "IF EXISTS " } else { "" };
        alloc::format!("DROP TABLE {if_exists}{}", escape_name(&self.name))
    }
}

impl FormatSql for CreateTable {
    fn format_sql(&self) -> String {
        let mut definitions: Vec<String> = Vec::with_capacity(
            usize::from(self.implicit_id) + self.columns.len() + self.foreign_keys.len(),
        );
        if self.implicit_id {
            definitions.push(IMPLICIT_ID_COLUMN_DEF.into());
        }
        definitions.extend(self.columns.iter().map(FormatSql::format_sql));
        definitions.extend(self.foreign_keys.iter().map(FormatSql::format_sql));

        let mut sql = String::new();
        write!(sql, "CREATE TABLE {} (", escape_name(&self.name)).unwrap();
        sql.push_str(&definitions.join(", "));
        sql.push(')');
        sql
    }
}

impl FormatSql for CreateIndex {
    fn format_sql(&self) -> String {
        let unique = if self.unique { "UNIQUE " } else { "" };
        let mut sql = String::new();
        write!(
            sql,
            "CREATE {unique}INDEX {} ON {} (",
            escape_name(&self.name),
            escape_name(&self.table)
        )
        .unwrap();
        push_name_list(&mut sql, &self.columns);
        sql.push(')');
        sql
    }
}

impl FormatSql for Statement {
    fn format_sql(&self) -> String {
        match self {
            Statement::DropTable(drop) => drop.format_sql(),
            Statement::CreateTable(ct) => ct.format_sql(),
            Statement::CreateIndex(ci) => ci.format_sql(),
        }
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_sql())
    }
}
