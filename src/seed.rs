//! Development seeding.
//!
//! After the schema has been recreated, the first registered seed whose path
//! ends in one of [`SEED_DEV_FILE_NAMES`] is run against the same executor.

use alloc::boxed::Box;
use alloc::string::ToString;
use alloc::vec::Vec;

use crate::errors::ExecutionError;
use crate::execute::{BatchExecutor, recreate_tables};
use crate::schema::Schema;

/// Seed file names, in lookup order.
pub const SEED_DEV_FILE_NAMES: [&str; 4] = ["seed.ts", "seed.js", "seed.mjs", "seed.mts"];

/// Why a seed failed.
#[derive(Debug, thiserror::Error)]
pub enum SeedError<E> {
    /// The store rejected a statement.
    #[error(transparent)]
    Store(E),
    /// Anything else.
    #[error(transparent)]
    Other(Box<dyn core::error::Error + Send + Sync>),
}

impl<E> From<E> for SeedError<E> {
    fn from(err: E) -> Self {
        Self::Store(err)
    }
}

/// A registered seed: runs once with the executor the schema was created on.
pub type SeedFn<'a, X> =
    Box<dyn FnOnce(&mut X) -> Result<(), SeedError<<X as BatchExecutor>::Error>> + 'a>;

/// Recreate every table, then run the development seed, if one is registered.
///
/// `seeds` maps file paths to seed functions; every potential seed file is
/// expected to be registered so renames and deletions are picked up.
///
/// # Errors
///
/// Errors from [`recreate_tables`] are returned as-is. A store error raised
/// by the seed becomes [`ExecutionError::Seed`]; any other seed failure is
/// returned as [`ExecutionError::SeedLoader`].
pub fn seed_local<'a, X, K, I>(
    executor: &mut X,
    schema: &Schema,
    seeds: I,
) -> Result<(), ExecutionError<X::Error>>
where
    X: BatchExecutor,
    X::Error: core::fmt::Display,
    K: AsRef<str>,
    I: IntoIterator<Item = (K, SeedFn<'a, X>)>,
{
    recreate_tables(executor, schema)?;

    let mut seeds: Vec<(K, SeedFn<'a, X>)> = seeds.into_iter().collect();
    let Some(position) = SEED_DEV_FILE_NAMES.iter().find_map(|file_name| {
        seeds
            .iter()
            .position(|(path, _)| path.as_ref().ends_with(*file_name))
    }) else {
        tracing::debug!("no seed file registered");
        return Ok(());
    };

    let (path, seed) = seeds.swap_remove(position);
    tracing::debug!(path = path.as_ref(), "running seed file");
    seed(executor).map_err(|err| match err {
        SeedError::Store(err) => ExecutionError::Seed {
            message: err.to_string(),
        },
        SeedError::Other(err) => ExecutionError::SeedLoader(err),
    })
}
