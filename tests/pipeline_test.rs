use std::path::PathBuf;

use rena::{
    error::Error,
    file::PathEntity,
    parser::parse_commands,
    pipeline::{apply_commands, build_plan, SkipReason},
};

fn always_safe(_: &PathEntity) -> bool {
    true
}

#[test]
fn test_empty_command_list_plans_nothing() {
    let inputs = ["a.txt", "/tmp/b.mkv", "dir/c"];
    let plan = build_plan(&[], &inputs, always_safe).unwrap();

    assert!(plan.is_empty());
    assert_eq!(plan.skipped.len(), 3);
    assert!(plan.skipped.iter().all(|s| s.reason == SkipReason::Unchanged));
}

#[test]
fn test_blank_positions_are_ignored() {
    let commands = parse_commands(&["", "t/%n.mp4", ""]).unwrap();
    let plan = build_plan(&commands, &["show.mkv"], always_safe).unwrap();

    assert_eq!(plan.entries.len(), 1);
    assert_eq!(plan.entries[0].proposed_path(), PathBuf::from("show.mp4"));
}

#[test]
fn test_plan_keeps_input_order() {
    let commands = parse_commands(&["s/-/_"]).unwrap();
    let inputs = ["c-1.txt", "a-1.txt", "unchanged.txt", "b-1.txt"];
    let plan = build_plan(&commands, &inputs, always_safe).unwrap();

    let proposed: Vec<String> = plan
        .entries
        .iter()
        .map(|e| e.proposed.full_name())
        .collect();
    assert_eq!(proposed, vec!["c_1.txt", "a_1.txt", "b_1.txt"]);
    assert_eq!(plan.skipped.len(), 1);
    assert_eq!(plan.skipped[0].entry.original.full_name(), "unchanged.txt");
}

#[test]
fn test_unsafe_names_are_skipped() {
    let commands = parse_commands(&["t/%n?.%x"]).unwrap();
    let no_question_marks = |file: &PathEntity| !file.full_name().contains('?');
    let plan = build_plan(&commands, &["a.txt", "b.txt"], no_question_marks).unwrap();

    assert!(plan.is_empty());
    assert_eq!(plan.skipped.len(), 2);
    assert!(plan.skipped.iter().all(|s| s.reason == SkipReason::UnsafeName));
    assert_eq!(plan.skipped[0].entry.proposed.full_name(), "a?.txt");
}

#[test]
fn test_empty_result_is_skipped() {
    let commands = parse_commands(&["d/.*/r"]).unwrap();
    let plan = build_plan(&commands, &["gone.txt"], always_safe).unwrap();

    assert!(plan.is_empty());
    assert_eq!(plan.skipped[0].reason, SkipReason::EmptyPath);
}

#[test]
fn test_empty_name_inside_a_directory_is_skipped() {
    let commands = parse_commands(&["d/.*/r"]).unwrap();
    let plan = build_plan(&commands, &["dir/a.txt", "dir/b.txt"], always_safe).unwrap();

    assert!(plan.is_empty());
    assert_eq!(plan.skipped.len(), 2);
    assert!(plan.skipped.iter().all(|s| s.reason == SkipReason::EmptyPath));
    assert_eq!(plan.skipped[1].entry.proposed.base_dir, "dir/");
}

#[test]
fn test_conflict_aborts_the_batch() {
    let commands = parse_commands(&["t/same.txt"]).unwrap();
    let inputs = ["/tmp/one.txt", "/tmp/two.txt", "/tmp/three.txt"];

    match build_plan(&commands, &inputs, always_safe) {
        Err(Error::Conflict { first, second, target }) => {
            assert_eq!(PathBuf::from(first), PathBuf::from("/tmp/one.txt"));
            assert_eq!(PathBuf::from(second), PathBuf::from("/tmp/two.txt"));
            assert_eq!(PathBuf::from(target), PathBuf::from("/tmp/same.txt"));
        }
        other => panic!("Expected Conflict, got {other:?}"),
    }
}

#[test]
fn test_same_name_in_different_directories_is_no_conflict() {
    let commands = parse_commands(&["t/same.txt"]).unwrap();
    let plan = build_plan(&commands, &["/a/one.txt", "/b/two.txt"], always_safe).unwrap();

    assert_eq!(plan.entries.len(), 2);
}

#[test]
fn test_move_into_one_directory_conflicts_on_equal_names() {
    let commands = parse_commands(&["m/txt/dest/"]).unwrap();
    let inputs = ["/a/notes.txt", "/b/notes.txt"];

    assert!(matches!(
        build_plan(&commands, &inputs, always_safe),
        Err(Error::Conflict { .. })
    ));
}

#[test]
fn test_apply_error_is_fatal() {
    let commands = vec![Some(rena::command::Command::Search {
        pattern: "(".to_string(),
        replacement: String::new(),
        match_case: false,
        regex: true,
        keep_whitespace: false,
    })];

    assert!(matches!(
        build_plan(&commands, &["a.txt"], always_safe),
        Err(Error::InvalidPattern { .. })
    ));
}

#[test]
fn test_apply_commands_keeps_original() {
    let commands = parse_commands(&["s/saul/Saul Goodman", "m,goodman,/dest"]).unwrap();
    let entry = apply_commands(&commands, "/home/user/Better Call Saul - S0E01.mkv").unwrap();

    assert_eq!(
        entry.original,
        PathEntity::new("/home/user/Better Call Saul - S0E01.mkv")
    );
    assert_eq!(
        entry.proposed_path(),
        PathBuf::from("/dest/Better Call Saul Goodman - S0E01.mkv")
    );
}

#[test]
fn test_plan_as_json() {
    let commands = parse_commands(&["t/%n.mp4"]).unwrap();
    let plan = build_plan(&commands, &["show.mkv"], always_safe).unwrap();
    let json: serde_json::Value = serde_json::from_str(&plan.to_json().unwrap()).unwrap();

    assert_eq!(json, serde_json::json!([{ "from": "show.mkv", "to": "show.mp4" }]));
}
