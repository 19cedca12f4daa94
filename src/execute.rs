//! Running compiled statements against a store.
//!
//! The compiler never talks to a database itself. A [`BatchExecutor`] receives
//! the statement batch and is responsible for applying it atomically, and for
//! keeping concurrent recreations of the same store from interleaving.

#[cfg(feature = "rusqlite")]
mod sqlite;

use alloc::string::String;

use crate::ddl::recreate_all;
use crate::errors::ExecutionError;
use crate::schema::Schema;

/// A transport that applies a batch of SQL statements as one atomic unit.
pub trait BatchExecutor {
    /// The store's error type, surfaced to callers untouched.
    type Error;

    /// Execute `statements` in order, all or nothing.
    ///
    /// When `defer_foreign_keys` is set, foreign key constraints are only
    /// enforced once the whole batch has run.
    ///
    /// # Errors
    ///
    /// Returns the store's error if any statement fails; nothing is applied.
    fn run_batch(
        &mut self,
        statements: &[String],
        defer_foreign_keys: bool,
    ) -> Result<(), Self::Error>;
}

impl<X: BatchExecutor + ?Sized> BatchExecutor for &mut X {
    type Error = X::Error;

    #[inline]
    fn run_batch(
        &mut self,
        statements: &[String],
        defer_foreign_keys: bool,
    ) -> Result<(), Self::Error> {
        X::run_batch(self, statements, defer_foreign_keys)
    }
}

/// Drop and recreate every table of `schema` in a single deferred batch.
///
/// The schema is compiled before the executor is touched.
///
/// # Errors
///
/// Returns [`ExecutionError::Schema`] if the schema does not compile and
/// [`ExecutionError::Store`] if the executor rejects the batch.
pub fn recreate_tables<X: BatchExecutor>(
    executor: &mut X,
    schema: &Schema,
) -> Result<(), ExecutionError<X::Error>> {
    let statements = recreate_all(schema)?;
    tracing::debug!(
        tables = schema.len(),
        statements = statements.len(),
        "recreating tables"
    );
    executor
        .run_batch(&statements, true)
        .map_err(ExecutionError::Store)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::errors::SchemaError;
    use crate::schema::{Column, ForeignKey, Table};
    use alloc::vec::Vec;

    /// Records every batch it receives, optionally failing instead.
    #[derive(Debug, Default)]
    pub(crate) struct Recorder {
        pub(crate) batches: Vec<(Vec<String>, bool)>,
        pub(crate) fail_with: Option<&'static str>,
    }

    impl BatchExecutor for Recorder {
        type Error = &'static str;

        fn run_batch(
            &mut self,
            statements: &[String],
            defer_foreign_keys: bool,
        ) -> Result<(), Self::Error> {
            if let Some(err) = self.fail_with {
                return Err(err);
            }
            self.batches.push((statements.to_vec(), defer_foreign_keys));
            Ok(())
        }
    }

    #[test]
    fn test_recreate_runs_one_deferred_batch() {
        let schema = Schema::new().with_table("users", Table::new().column("name", Column::text()));
        let mut recorder = Recorder::default();
        recreate_tables(&mut recorder, &schema).unwrap();
        assert_eq!(recorder.batches.len(), 1);
        let (statements, deferred) = &recorder.batches[0];
        assert!(deferred);
        assert_eq!(
            statements,
            &[
                "DROP TABLE IF EXISTS \"users\"",
                "CREATE TABLE \"users\" (_id INTEGER PRIMARY KEY, \"name\" TEXT NOT NULL)",
            ]
        );
    }

    #[test]
    fn test_schema_errors_never_reach_the_executor() {
        let schema = Schema::new().with_table(
            "posts",
            Table::new().foreign_key(ForeignKey::new(["a", "b"], [])),
        );
        let mut recorder = Recorder::default();
        let err = recreate_tables(&mut recorder, &schema).unwrap_err();
        assert!(matches!(
            err,
            ExecutionError::Schema(SchemaError::ForeignKeyLengthMismatch { .. })
        ));
        assert!(recorder.batches.is_empty());
    }

    #[test]
    fn test_store_errors_pass_through() {
        let mut recorder = Recorder {
            fail_with: Some("disk I/O error"),
            ..Recorder::default()
        };
        let err = recreate_tables(&mut recorder, &Schema::new()).unwrap_err();
        assert!(matches!(err, ExecutionError::Store("disk I/O error")));
    }
}
