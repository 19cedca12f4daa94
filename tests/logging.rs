//! Tests for the diagnostics emitted while compiling schemas.

use std::io;
use std::sync::{Arc, Mutex};

use sqlite_schema_ddl::{Column, Schema, Table, create_table, recreate_all};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;
use tracing_subscriber::util::SubscriberInitExt;

/// Collects everything the subscriber writes.
#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn text(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn capture_warnings<T>(f: impl FnOnce() -> T) -> (T, String) {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::WARN)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    let result = {
        let _guard = subscriber.set_default();
        f()
    };
    (result, captured.text())
}

fn broken() -> (Schema, Table) {
    let table = Table::new().column("author", Column::number().references("authors", "id"));
    let schema = Schema::new().with_table("books", table.clone());
    (schema, table)
}

#[test]
fn test_create_table_warns_on_schema_errors() {
    let (schema, table) = broken();
    let (result, logs) = capture_warnings(|| create_table(&schema, "books", &table));
    assert!(result.is_err());
    assert!(logs.contains("WARN"), "{logs}");
    assert!(logs.contains("invalid table definition"), "{logs}");
    assert!(logs.contains("books"), "{logs}");
}

#[test]
fn test_recreate_all_warns_once() {
    let (schema, _) = broken();
    let (result, logs) = capture_warnings(|| recreate_all(&schema));
    assert!(result.is_err());
    assert_eq!(logs.matches("invalid table definition").count(), 1, "{logs}");
}

#[test]
fn test_valid_tables_do_not_warn() {
    let schema = Schema::new().with_table("notes", Table::new().column("body", Column::text()));
    let (result, logs) = capture_warnings(|| recreate_all(&schema));
    assert!(result.is_ok());
    assert!(logs.is_empty(), "{logs}");
}
