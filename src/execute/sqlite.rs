//! [`BatchExecutor`] for `rusqlite` connections.

use alloc::string::String;

use super::BatchExecutor;
use crate::ddl::DEFER_FOREIGN_KEYS_PRAGMA;

impl BatchExecutor for rusqlite::Connection {
    type Error = rusqlite::Error;

    /// Runs the batch inside a transaction, rolled back if any statement fails.
    fn run_batch(
        &mut self,
        statements: &[String],
        defer_foreign_keys: bool,
    ) -> Result<(), Self::Error> {
        let tx = self.transaction()?;
        if defer_foreign_keys {
            tx.execute_batch(DEFER_FOREIGN_KEYS_PRAGMA)?;
        }
        for statement in statements {
            tx.execute(statement, [])?;
        }
        tx.commit()
    }
}
