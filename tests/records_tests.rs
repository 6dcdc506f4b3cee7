use bjjdb::core::persist::PersistLogic;
use bjjdb::db::initialize::init_db;
use bjjdb::db::tables::select_rows;
use bjjdb::models::moves::Move;
use bjjdb::models::position::Position;
use bjjdb::models::realm::Realm;
use bjjdb::models::record::Record;
use bjjdb::utils::value_to_string;
use chrono::DateTime;
use std::collections::HashSet;
use std::path::Path;

mod common;
use common::{setup_test_db, temp_out};

fn sample_position(name: &str) -> Position {
    Position {
        class: "top".into(),
        family: "mount".into(),
        name: name.into(),
        code: "MT".into(),
        btg_dom: "high".into(),
        alt_names: "montada".into(),
        ..Position::new(Realm::Control)
    }
}

#[test]
fn test_json_lines_round_trip() {
    let out = temp_out("records_round_trip", "json");
    let path = Path::new(&out);

    let written = vec![sample_position("Mount"), sample_position("S-Mount")];
    for p in &written {
        PersistLogic::append_json_line(path, p).unwrap();
    }

    let raw = std::fs::read_to_string(path).unwrap();
    assert_eq!(raw.lines().count(), 2);
    for line in raw.lines() {
        serde_json::from_str::<serde_json::Value>(line).expect("valid json");
    }

    let read: Vec<Position> = PersistLogic::read_json_lines(path).unwrap();
    assert_eq!(read, written);
}

#[test]
fn test_created_at_is_non_decreasing_in_append_order() {
    let out = temp_out("records_created_at", "json");
    let path = Path::new(&out);

    for _ in 0..50 {
        PersistLogic::append_json_line(path, &Move::new()).unwrap();
    }

    let moves: Vec<Move> = PersistLogic::read_json_lines(path).unwrap();
    let stamps: Vec<_> = moves
        .iter()
        .map(|m| DateTime::parse_from_rfc3339(m.created_at()).expect("rfc3339"))
        .collect();
    assert!(stamps.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_guids_are_unique() {
    let ids: HashSet<String> = (0..1000)
        .map(|_| Position::new(Realm::Guard).guid().to_string())
        .collect();
    assert_eq!(ids.len(), 1000);
}

#[test]
fn test_legacy_prefixed_move_keys_are_read() {
    let out = temp_out("records_legacy_moves", "json");
    let path = Path::new(&out);

    let legacy = serde_json::json!({
        "m_guid": "0b6f1c1e-8a4e-4c55-9d0e-3f2a1b7c9d10",
        "m_from_pos": "CG",
        "m_from_tb": "",
        "m_to_pos": "MT",
        "m_to_tb": "",
        "m_category": "sweep",
        "m_name": "Scissor Sweep",
        "m_code": "SS",
        "m_infos": "",
        "m_step1": "grip sleeve and collar",
        "m_step2": "",
        "m_step3": "",
        "m_counter1": "",
        "m_counter2": "",
        "m_counter3": "",
        "m_family": "",
        "m_level": "1",
        "m_created_at": "2024-03-01T18:30:00.123456"
    });
    std::fs::write(path, format!("{}\n", legacy)).unwrap();

    let moves: Vec<Move> = PersistLogic::read_json_lines(path).unwrap();
    assert_eq!(moves.len(), 1);
    assert_eq!(moves[0].guid, "0b6f1c1e-8a4e-4c55-9d0e-3f2a1b7c9d10");
    assert_eq!(moves[0].from_pos, "CG");
    assert_eq!(moves[0].step1, "grip sleeve and collar");
    assert_eq!(moves[0].created_at(), "2024-03-01T18:30:00.123456");

    // rewritten records use the plain keys
    let line = serde_json::to_string(&moves[0]).unwrap();
    assert!(line.contains("\"from_pos\":\"CG\""));
    assert!(!line.contains("m_from_pos"));
}

#[test]
fn test_missing_file_reads_as_empty() {
    let out = temp_out("records_missing", "json");
    let moves: Vec<Move> = PersistLogic::read_json_lines(Path::new(&out)).unwrap();
    assert!(moves.is_empty());
}

#[test]
fn test_corrupt_line_is_reported_with_line_number() {
    let out = temp_out("records_corrupt", "json");
    let path = Path::new(&out);

    PersistLogic::append_json_line(path, &sample_position("Mount")).unwrap();
    std::fs::OpenOptions::new()
        .append(true)
        .open(path)
        .and_then(|mut f| std::io::Write::write_all(&mut f, b"{not json\n"))
        .unwrap();

    let err = PersistLogic::read_json_lines::<Position>(path).unwrap_err();
    assert!(err.to_string().contains("line 2"));
}

#[test]
fn test_insert_into_db_round_trip() {
    let db_path = setup_test_db("records_db_round_trip");
    init_db(&db_path).unwrap();

    let p = sample_position("Mount");
    PersistLogic::insert_into_db(&db_path, &p).unwrap();

    let cond = format!("guid = '{}'", p.guid);
    let rows = select_rows(&db_path, Position::TABLE, Some(&cond), false).unwrap();
    assert_eq!(rows.len(), 1);

    let stored: Vec<String> = rows[0].iter().map(value_to_string).collect();
    let expected: Vec<String> = p.to_row().iter().map(|(_, v)| value_to_string(v)).collect();
    assert_eq!(stored, expected);
}
