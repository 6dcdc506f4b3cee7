use bjjdb::db::tables::{
    create_table, delete_rows, drop_tables_with_pattern, insert_row, list_tables, select_rows,
};
use bjjdb::errors::AppError;
use rusqlite::types::Value;

mod common;
use common::setup_test_db;

fn text(s: &str) -> Value {
    Value::Text(s.to_string())
}

fn grips_table(db_path: &str) {
    create_table(
        db_path,
        "grips",
        &[
            ("id", "INTEGER PRIMARY KEY AUTOINCREMENT"),
            ("name", "TEXT NOT NULL"),
            ("side", "TEXT DEFAULT ''"),
            ("level", "INTEGER"),
        ],
    )
    .expect("create grips");
}

#[test]
fn test_insert_then_select_round_trip() {
    let db_path = setup_test_db("tables_round_trip");
    grips_table(&db_path);

    insert_row(
        &db_path,
        "grips",
        &[("name", text("collar")), ("side", text("")), ("level", Value::Integer(2))],
    )
    .expect("insert");

    let rows = select_rows(&db_path, "grips", Some("1=1"), false).expect("select");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0][1], text("collar"));
    assert_eq!(rows[0][2], text(""));
    assert_eq!(rows[0][3], Value::Integer(2));
}

#[test]
fn test_select_defaults_to_all_rows_and_filters() {
    let db_path = setup_test_db("tables_select_filter");
    grips_table(&db_path);

    for name in ["collar", "sleeve", "pants"] {
        insert_row(&db_path, "grips", &[("name", text(name))]).expect("insert");
    }

    assert_eq!(select_rows(&db_path, "grips", None, false).unwrap().len(), 3);

    let rows = select_rows(&db_path, "grips", Some("name <> 'pants'"), false).unwrap();
    assert_eq!(rows.len(), 2);

    let none = select_rows(&db_path, "grips", Some("name = 'lapel'"), false).unwrap();
    assert!(none.is_empty());
}

#[test]
fn test_select_missing_table_is_an_error_not_data() {
    let db_path = setup_test_db("tables_select_missing");

    let res = select_rows(&db_path, "drills", None, false);
    assert!(matches!(res, Err(AppError::Db(_))));
}

#[test]
fn test_values_are_bound_not_interpolated() {
    let db_path = setup_test_db("tables_bound_values");
    grips_table(&db_path);

    let tricky = "x'); DROP TABLE grips; --";
    insert_row(&db_path, "grips", &[("name", text(tricky))]).expect("insert");

    let rows = select_rows(&db_path, "grips", None, false).unwrap();
    assert_eq!(rows[0][1], text(tricky));

    let removed = delete_rows(&db_path, "grips", "name", &tricky).unwrap();
    assert_eq!(removed, 1);
}

#[test]
fn test_delete_reports_actual_count() {
    let db_path = setup_test_db("tables_delete_count");
    grips_table(&db_path);

    for name in ["collar", "collar", "sleeve"] {
        insert_row(&db_path, "grips", &[("name", text(name))]).unwrap();
    }

    assert_eq!(delete_rows(&db_path, "grips", "name", &"collar").unwrap(), 2);
    assert_eq!(delete_rows(&db_path, "grips", "name", &"collar").unwrap(), 0);
    assert_eq!(select_rows(&db_path, "grips", None, false).unwrap().len(), 1);
}

#[test]
fn test_identifiers_are_checked() {
    let db_path = setup_test_db("tables_identifiers");

    let res = create_table(&db_path, "bad name", &[("a", "TEXT")]);
    assert!(matches!(res, Err(AppError::InvalidIdentifier(_))));

    let res = create_table(&db_path, "ok", &[("a", "TEXT); DROP TABLE x")]);
    assert!(matches!(res, Err(AppError::InvalidColumnType { .. })));

    let res = delete_rows(&db_path, "ok", "a = a OR 1", &"x");
    assert!(matches!(res, Err(AppError::InvalidIdentifier(_))));
}

#[test]
fn test_drop_default_pattern_keeps_tables_without_underscore() {
    let db_path = setup_test_db("tables_drop_default");

    for table in ["drills", "user_data", "move_log"] {
        create_table(&db_path, table, &[("id", "INTEGER")]).unwrap();
    }

    let dropped = drop_tables_with_pattern(&db_path, None).unwrap();
    assert_eq!(dropped, vec!["user_data", "move_log"]);
    assert_eq!(list_tables(&db_path).unwrap(), vec!["drills"]);

    // nothing left to match
    assert!(drop_tables_with_pattern(&db_path, None).unwrap().is_empty());
}

#[test]
fn test_drop_custom_pattern_never_touches_internal_tables() {
    let db_path = setup_test_db("tables_drop_custom");

    create_table(&db_path, "log_entries", &[("id", "INTEGER PRIMARY KEY AUTOINCREMENT")]).unwrap();
    create_table(&db_path, "moves", &[("id", "INTEGER")]).unwrap();
    insert_row(&db_path, "log_entries", &[]).unwrap();

    let dropped = drop_tables_with_pattern(&db_path, Some("sq")).unwrap();
    assert!(dropped.is_empty());

    let dropped = drop_tables_with_pattern(&db_path, Some("log")).unwrap();
    assert_eq!(dropped, vec!["log_entries"]);
    assert_eq!(list_tables(&db_path).unwrap(), vec!["moves"]);
}
