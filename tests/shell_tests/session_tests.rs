//! Shell Tests
//!
//! Tests verify:
//! - Scripts produce the expected output lines
//! - Malformed lines are reported and skipped
//! - END stops the session
//! - Script files and echo mode

use std::io::{Cursor, Write};

use tallykv::config::Config;
use tallykv::engine::Database;
use tallykv::shell::{SessionStats, Shell};
use tempfile::NamedTempFile;

// =============================================================================
// Helper Functions
// =============================================================================

fn run_script(config: Config, script: &str) -> (String, SessionStats, Database) {
    let mut shell = Shell::new(Database::with_config(config), Vec::new());
    let stats = shell.run(Cursor::new(script)).unwrap();
    let (db, output) = shell.into_parts();
    (String::from_utf8(output).unwrap(), stats, db)
}

// =============================================================================
// Script Tests
// =============================================================================

#[test]
fn test_basic_session() {
    let script = "\
SET a 10
GET a
COUNT 10
DELETE a
GET a
COUNT 10
COUNT 20
";
    let (output, stats, _) = run_script(Config::default(), script);

    assert_eq!(output, "10\n1\nNULL\n0\nNULL\n");
    assert_eq!(stats.commands_executed, 7);
    assert_eq!(stats.errors, 0);
    assert!(!stats.ended);
}

#[test]
fn test_transaction_session() {
    let script = "\
SET a 1
SET b 1
BEGIN
DELETE a
COUNT 1
ROLLBACK
COUNT 1
GET a
ROLLBACK
ROLLBACK
COMMIT
";
    let (output, _, db) = run_script(Config::default(), script);

    // Second ROLLBACK pops the BEGIN marker; the third finds nothing.
    assert_eq!(output, "1\n2\n1\nNO TRANSACTION\nNO TRANSACTION\n");
    assert_eq!(db.depth(), 0);
}

#[test]
fn test_nested_begin_commit_session() {
    let script = "\
BEGIN
SET a 1
BEGIN
UNSET a
ROLLBACK
COMMIT
GET a
NUMEQUALTO 1
";
    let (output, _, _) = run_script(Config::default(), script);

    assert_eq!(output, "1\n1\n");
}

#[test]
fn test_clear_session() {
    let script = "\
SET a 1
BEGIN
SET b 2
CLEAR
GET a
GET b
COUNT 1
ROLLBACK
";
    let (output, _, _) = run_script(Config::default(), script);

    assert_eq!(output, "NULL\nNULL\nNULL\nNO TRANSACTION\n");
}

// =============================================================================
// Error Handling Tests
// =============================================================================

#[test]
fn test_malformed_lines_do_not_stop_session() {
    let script = "\
SET a
FLY away
SET a x
SET a 3
GET a
";
    let (output, stats, _) = run_script(Config::default(), script);

    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[..3].iter().all(|line| line.starts_with("ERROR ")));
    assert_eq!(lines[3], "3");
    assert_eq!(stats.errors, 3);
    assert_eq!(stats.commands_executed, 2);
}

#[test]
fn test_invalid_utf8_line_does_not_stop_session() {
    let input: &[u8] = b"SET a 1\nGET \xff\nGET a\n";
    let mut shell = Shell::new(Database::new(), Vec::new());

    let stats = shell.run(Cursor::new(input)).unwrap();

    let (_, output) = shell.into_parts();
    let output = String::from_utf8(output).unwrap();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("ERROR "));
    assert!(lines[0].contains("UTF-8"));
    assert_eq!(lines[1], "1");
    assert_eq!(stats.errors, 1);
    assert_eq!(stats.commands_executed, 2);
}

#[test]
fn test_blank_lines_are_skipped() {
    let (output, stats, _) = run_script(Config::default(), "\n   \nSET a 1\n\nGET a\n");

    assert_eq!(output, "1\n");
    assert_eq!(stats.commands_executed, 2);
}

#[test]
fn test_end_stops_session() {
    let (output, stats, db) = run_script(Config::default(), "SET a 1\nEND\nSET b 2\nGET a\n");

    assert_eq!(output, "");
    assert!(stats.ended);
    assert_eq!(stats.commands_executed, 1);
    assert_eq!(db.get("b"), None);
}

// =============================================================================
// Configuration Tests
// =============================================================================

#[test]
fn test_echo_mode() {
    let config = Config::builder().echo_commands(true).build();
    let (output, _, _) = run_script(config, "SET a 5\nGET a\n");

    assert_eq!(output, "> SET a 5\n> GET a\n5\n");
}

#[test]
fn test_run_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "SET x 42").unwrap();
    writeln!(file, "BEGIN").unwrap();
    writeln!(file, "SET y 42").unwrap();
    writeln!(file, "COUNT 42").unwrap();
    writeln!(file, "COMMIT").unwrap();
    file.flush().unwrap();

    let mut shell = Shell::new(Database::new(), Vec::new());
    let stats = shell.run_file(file.path()).unwrap();

    assert_eq!(stats.commands_executed, 5);
    assert_eq!(shell.database().get("y"), Some(42));
    assert_eq!(shell.database().table_len(), 2);

    let (_, output) = shell.into_parts();
    assert_eq!(String::from_utf8(output).unwrap(), "2\n");
}

#[test]
fn test_run_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut shell = Shell::new(Database::new(), Vec::new());

    assert!(shell.run_file(&dir.path().join("missing.txt")).is_err());
}
