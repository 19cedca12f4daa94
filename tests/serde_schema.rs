//! Tests for the `serde` representation of the schema model.

#![cfg(feature = "serde")]

use serde_json::json;
use sqlite_schema_ddl::{
    Column, ColumnRef, ForeignKey, Index, RawSql, Schema, Table, recreate_all,
};

fn blog() -> Schema {
    Schema::new()
        .with_table(
            "users",
            Table::new()
                .column("id", Column::number().primary_key())
                .column("email", Column::text().unique())
                .column("created_at", Column::date().default(RawSql::NOW)),
        )
        .with_table(
            "posts",
            Table::new()
                .column("author", Column::number())
                .column("title", Column::text().default("Untitled"))
                .column("meta", Column::json().default(json!({"tags": ["a"], "draft": true})))
                .index("posts_title", Index::on(["title", "author"]).unique())
                .foreign_key(ForeignKey::new(["author"], [ColumnRef::new("users", "id")])),
        )
}

#[test]
fn test_schema_round_trips_through_json() {
    let schema = blog();
    let text = serde_json::to_string(&schema).unwrap();
    let restored: Schema = serde_json::from_str(&text).unwrap();
    assert_eq!(restored, schema);
    assert_eq!(recreate_all(&restored).unwrap(), recreate_all(&schema).unwrap());
}

#[test]
fn test_table_order_is_kept() {
    let restored: Schema = serde_json::from_value(serde_json::to_value(blog()).unwrap()).unwrap();
    let names: Vec<&str> = restored.iter().map(|(name, _)| name).collect();
    assert_eq!(names, ["users", "posts"]);
}

#[test]
fn test_hand_written_schema_compiles() {
    let schema: Schema = serde_json::from_value(json!({
        "t": {
            "columns": {
                "x": {"type": "text", "schema": {"optional": true}},
                "n": {"type": "number"}
            }
        }
    }))
    .unwrap();
    assert_eq!(
        recreate_all(&schema).unwrap(),
        [
            r#"DROP TABLE IF EXISTS "t""#,
            r#"CREATE TABLE "t" (_id INTEGER PRIMARY KEY, "x" TEXT, "n" INTEGER NOT NULL)"#,
        ]
    );
}

#[test]
fn test_deserialized_columns_are_named_after_their_keys() {
    let schema: Schema = serde_json::from_value(json!({
        "t": {"columns": {"x": {"type": "text"}, "y": {"type": "json"}}}
    }))
    .unwrap();
    let table = schema.get("t").unwrap();
    assert_eq!(table.columns["x"].schema.name.as_deref(), Some("x"));
    assert_eq!(table.columns["y"].schema.name.as_deref(), Some("y"));
}
