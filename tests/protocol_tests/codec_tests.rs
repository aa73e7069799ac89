//! Codec Tests
//!
//! Tests for command line parsing and response formatting.

use tallykv::protocol::{
    decode_command, encode_command, encode_response, Command, CommandType, Response,
};
use tallykv::KvError;

// =============================================================================
// Command Decoding Tests
// =============================================================================

#[test]
fn test_decode_set() {
    let cmd = decode_command("SET a 10").unwrap();
    assert_eq!(cmd, Command::Set { key: "a".to_string(), value: 10 });
}

#[test]
fn test_decode_negative_value() {
    let cmd = decode_command("SET a -3").unwrap();
    assert_eq!(cmd, Command::Set { key: "a".to_string(), value: -3 });
}

#[test]
fn test_decode_get_and_delete() {
    assert_eq!(
        decode_command("GET name").unwrap(),
        Command::Get { key: "name".to_string() }
    );
    assert_eq!(
        decode_command("DELETE name").unwrap(),
        Command::Delete { key: "name".to_string() }
    );
}

#[test]
fn test_decode_aliases() {
    assert_eq!(
        decode_command("UNSET a").unwrap(),
        Command::Delete { key: "a".to_string() }
    );
    assert_eq!(
        decode_command("NUMEQUALTO 10").unwrap(),
        Command::Count { value: 10 }
    );
}

#[test]
fn test_decode_keywords_case_insensitive_keys_not() {
    assert_eq!(
        decode_command("set Key 1").unwrap(),
        Command::Set { key: "Key".to_string(), value: 1 }
    );
    assert_eq!(decode_command("rollback").unwrap(), Command::Rollback);
}

#[test]
fn test_decode_transaction_commands() {
    assert_eq!(decode_command("BEGIN").unwrap(), Command::Begin);
    assert_eq!(decode_command("COMMIT").unwrap(), Command::Commit);
    assert_eq!(decode_command("ROLLBACK").unwrap(), Command::Rollback);
    assert_eq!(decode_command("CLEAR").unwrap(), Command::Clear);
    assert_eq!(decode_command("END").unwrap(), Command::End);
}

#[test]
fn test_decode_ignores_extra_whitespace() {
    let cmd = decode_command("  SET   a    5  ").unwrap();
    assert_eq!(cmd, Command::Set { key: "a".to_string(), value: 5 });
}

// =============================================================================
// Error Handling Tests
// =============================================================================

#[test]
fn test_decode_empty_line() {
    assert!(matches!(decode_command("   "), Err(KvError::Parse(_))));
}

#[test]
fn test_decode_unknown_command() {
    let err = decode_command("FROB a").unwrap_err();
    assert!(err.to_string().contains("unknown command"));
}

#[test]
fn test_decode_wrong_arity() {
    assert!(matches!(decode_command("SET a"), Err(KvError::Parse(_))));
    assert!(matches!(decode_command("GET"), Err(KvError::Parse(_))));
    assert!(matches!(decode_command("BEGIN now"), Err(KvError::Parse(_))));
}

#[test]
fn test_decode_non_integer_value() {
    let err = decode_command("SET a ten").unwrap_err();
    assert!(err.to_string().contains("invalid value"));
    assert!(matches!(decode_command("COUNT 1.5"), Err(KvError::Parse(_))));
}

// =============================================================================
// Command Encoding Tests
// =============================================================================

#[test]
fn test_encode_command_uses_canonical_keywords() {
    assert_eq!(
        encode_command(&Command::Set { key: "a".to_string(), value: 4 }),
        "SET a 4"
    );
    assert_eq!(encode_command(&Command::Count { value: 4 }), "COUNT 4");
    assert_eq!(encode_command(&Command::Commit), "COMMIT");
}

#[test]
fn test_encoded_alias_decodes_to_same_command() {
    let cmd = decode_command("UNSET a").unwrap();
    assert_eq!(encode_command(&cmd), "DELETE a");
    assert_eq!(decode_command(&encode_command(&cmd)).unwrap(), cmd);
}

#[test]
fn test_command_type_metadata() {
    assert_eq!(CommandType::Set.arity(), 2);
    assert_eq!(CommandType::Begin.arity(), 0);
    assert_eq!(CommandType::from_keyword("numequalto"), Some(CommandType::Count));
    assert_eq!(CommandType::from_keyword("PING"), None);
    assert!(Command::Begin.is_mutation());
    assert!(!Command::Get { key: "a".to_string() }.is_mutation());
}

// =============================================================================
// Response Encoding Tests
// =============================================================================

#[test]
fn test_encode_response() {
    assert_eq!(encode_response(&Response::Done), None);
    assert_eq!(encode_response(&Response::Value(Some(10))), Some("10".to_string()));
    assert_eq!(encode_response(&Response::Value(None)), Some("NULL".to_string()));
    assert_eq!(encode_response(&Response::Count(Some(0))), Some("0".to_string()));
    assert_eq!(encode_response(&Response::Count(None)), Some("NULL".to_string()));
    assert_eq!(
        encode_response(&Response::NoTransaction),
        Some("NO TRANSACTION".to_string())
    );
    assert_eq!(
        encode_response(&Response::error("bad")),
        Some("ERROR bad".to_string())
    );
}

#[test]
fn test_response_is_error() {
    assert!(Response::error("bad").is_error());
    assert!(!Response::NoTransaction.is_error());
    assert!(!Response::Value(None).is_error());
}
