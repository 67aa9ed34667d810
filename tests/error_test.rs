use std::io;

use rena::error::Error;
use rena::parser::parse_commands;

#[test]
fn test_error_conversion() {
    let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
    let rena_err: Error = io_err.into();

    match rena_err {
        Error::IoError(_) => (),
        _ => panic!("Expected IoError variant"),
    }
}

#[test]
fn test_error_display() {
    let err = Error::UnknownCommandType {
        command: "x/a/b".to_string(),
    };
    assert_eq!(err.to_string(), "Unknown command: 'x/a/b'.");

    let err = Error::UnsupportedSeparator {
        command: "s:a:b".to_string(),
    };
    assert_eq!(err.to_string(), "Separator is not supported: 's:a:b'.");

    let err = Error::InvalidFieldCount {
        command: "t/a/b".to_string(),
        expected: "2",
        found: 3,
    };
    assert_eq!(
        err.to_string(),
        "Invalid format, expected 2 fields but found 3: 't/a/b'."
    );
}

#[test]
fn test_line_number_is_reported() {
    let lines = ["s/a/b", "", "t/%n.txt", "x/oops"];
    let err = parse_commands(&lines).unwrap_err();

    assert_eq!(err.to_string(), "Line 4: Unknown command: 'x/oops'.");
    match err {
        Error::Line { line, source } => {
            assert_eq!(line, 4);
            assert!(matches!(*source, Error::UnknownCommandType { .. }));
        }
        other => panic!("Expected Line variant, got {other:?}"),
    }
}

#[test]
fn test_conflict_names_both_inputs() {
    let err = Error::Conflict {
        first: "a.txt".to_string(),
        second: "b.txt".to_string(),
        target: "c.txt".to_string(),
    };
    let message = err.to_string();
    assert!(message.contains("- 'a.txt' -> 'c.txt'"));
    assert!(message.contains("- 'b.txt' -> 'c.txt'"));
}
