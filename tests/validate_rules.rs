//! Integration tests for structural validation rules (V001–V007).

use flowcheck::error::Problem;
use flowcheck::parse;
use flowcheck::validate;

fn messages(json: &str) -> Vec<String> {
    let document = parse::parse(json).expect("Should parse");
    validate::validate_messages(&document)
}

fn codes(problems: &[Problem]) -> Vec<&'static str> {
    problems.iter().map(|p| p.code).collect()
}

#[test]
fn valid_workflow_passes() {
    let json = include_str!("fixtures/valid_workflow.json");
    let document = parse::parse(json).unwrap();
    let problems = validate::validate(&document);
    assert!(problems.is_empty(), "Expected no problems, got: {:?}", problems);
}

#[test]
fn empty_document_is_valid() {
    assert!(messages("{}").is_empty());
    assert!(messages(r#"{"nodes": [], "connections": {}}"#).is_empty());
}

#[test]
fn broken_workflow_reports_in_order() {
    let json = include_str!("fixtures/broken_workflow.json");
    assert_eq!(
        messages(json),
        vec![
            "Node 'Summarize' is missing an 'id' field",
            "Node 'Send' has a null 'id' value",
            "Node at index 4 is missing a 'name' field",
            "Duplicate node name detected: 'Fetch Mail'",
            "Duplicate node id detected: '1'",
            "Connection from 'Summarize' references missing node 'Archive'",
            "Connection source 'Ghost' missing from nodes",
            "Connection from 'Ghost' references missing node 'Nowhere'",
        ]
    );
}

#[test]
fn broken_workflow_codes() {
    let json = include_str!("fixtures/broken_workflow.json");
    let document = parse::parse(json).unwrap();
    let problems = validate::validate(&document);
    assert_eq!(
        codes(&problems),
        vec!["V002", "V003", "V001", "V004", "V005", "V007", "V006", "V007"]
    );
    assert_eq!(problems[0].node.as_deref(), Some("Summarize"));
    assert_eq!(problems[6].node.as_deref(), Some("Ghost"));
}

#[test]
fn duplicate_name_and_missing_target() {
    let json = r#"{"nodes": [{"name":"A","id":1},{"name":"A","id":2}],
                   "connections": {"A": {"main": [[{"node":"B"}]]}}}"#;
    assert_eq!(
        messages(json),
        vec![
            "Duplicate node name detected: 'A'",
            "Connection from 'A' references missing node 'B'",
        ]
    );
}

#[test]
fn v001_nameless_node_only() {
    assert_eq!(
        messages(r#"{"nodes": [{"id":1}]}"#),
        vec!["Node at index 0 is missing a 'name' field"]
    );
}

#[test]
fn v001_message_mentions_each_index() {
    let json = r#"{"nodes": [{"id":1}, {"name":"B","id":2}, {"name":"","id":3}, {"name":null,"id":4}]}"#;
    assert_eq!(
        messages(json),
        vec![
            "Node at index 0 is missing a 'name' field",
            "Node at index 2 is missing a 'name' field",
            "Node at index 3 is missing a 'name' field",
        ]
    );
}

#[test]
fn v001_falsy_non_string_names_count_as_missing() {
    let json = r#"{"nodes": [{"name":0,"id":1}, {"name":false,"id":2}]}"#;
    assert_eq!(
        messages(json),
        vec![
            "Node at index 0 is missing a 'name' field",
            "Node at index 1 is missing a 'name' field",
        ]
    );
}

#[test]
fn v001_and_v002_are_independent() {
    assert_eq!(
        messages(r#"{"nodes": [{}]}"#),
        vec![
            "Node at index 0 is missing a 'name' field",
            "Node 'index 0' is missing an 'id' field",
        ]
    );
    assert_eq!(
        messages(r#"{"nodes": [{"name": "", "id": null}]}"#),
        vec![
            "Node at index 0 is missing a 'name' field",
            "Node 'index 0' has a null 'id' value",
        ]
    );
}

#[test]
fn falsy_ids_are_present() {
    let json = r#"{"nodes": [{"name":"A","id":0},{"name":"B","id":""},{"name":"C","id":false}]}"#;
    assert!(messages(json).is_empty());
}

#[test]
fn v004_one_message_per_duplicated_name() {
    let json = r#"{"nodes": [
        {"name":"B","id":1},{"name":"A","id":2},{"name":"A","id":3},
        {"name":"A","id":4},{"name":"B","id":5},{"name":"C","id":6}]}"#;
    assert_eq!(
        messages(json),
        vec![
            "Duplicate node name detected: 'B'",
            "Duplicate node name detected: 'A'",
        ]
    );
}

#[test]
fn v005_ids_compare_as_text() {
    let json = r#"{"nodes": [{"name":"A","id":1},{"name":"B","id":"1"}]}"#;
    assert_eq!(messages(json), vec!["Duplicate node id detected: '1'"]);
}

#[test]
fn v005_falsy_ids_still_count() {
    let json = r#"{"nodes": [{"name":"A","id":0},{"name":"B","id":0},{"name":"C","id":""},{"name":"D","id":""}]}"#;
    assert_eq!(
        messages(json),
        vec![
            "Duplicate node id detected: '0'",
            "Duplicate node id detected: ''",
        ]
    );
}

#[test]
fn null_ids_are_not_duplicates() {
    let json = r#"{"nodes": [{"name":"A","id":null},{"name":"B","id":null}]}"#;
    assert_eq!(
        messages(json),
        vec![
            "Node 'A' has a null 'id' value",
            "Node 'B' has a null 'id' value",
        ]
    );
}

#[test]
fn v006_unknown_source_reported_once() {
    let json = r#"{"nodes": [{"name":"A","id":1}],
                   "connections": {"X": {"main": [[{"node":"A"},{"node":"Y"}],[{"node":"Z"}]],
                                         "ai_tool": [[{"node":"A"}]]}}}"#;
    assert_eq!(
        messages(json),
        vec![
            "Connection source 'X' missing from nodes",
            "Connection from 'X' references missing node 'Y'",
            "Connection from 'X' references missing node 'Z'",
        ]
    );
}

#[test]
fn v007_nameless_node_is_not_a_target() {
    let json = r#"{"nodes": [{"name":"A","id":1},{"id":2}],
                   "connections": {"A": {"main": [[{"node":""}]]}}}"#;
    assert_eq!(
        messages(json),
        vec![
            "Node at index 1 is missing a 'name' field",
            "Connection from 'A' references missing node ''",
        ]
    );
}

#[test]
fn v007_target_without_node_key() {
    let json = r#"{"nodes": [{"name":"A","id":1}],
                   "connections": {"A": {"main": [[{"type":"main","index":0}]]}}}"#;
    assert_eq!(
        messages(json),
        vec!["Connection from 'A' references missing node 'None'"]
    );
}

#[test]
fn v007_missing_target_never_matches_a_declared_name() {
    let json = r#"{"nodes": [{"name":"A","id":1},{"name":"null","id":2}],
                   "connections": {"A": {"main": [[{"type":"main"}]]}}}"#;
    assert_eq!(
        messages(json),
        vec!["Connection from 'A' references missing node 'None'"]
    );
}

#[test]
fn v007_null_target_never_matches_a_declared_name() {
    let json = r#"{"nodes": [{"name":"A","id":1},{"name":"None","id":2}],
                   "connections": {"A": {"main": [[{"node":null}]]}}}"#;
    assert_eq!(
        messages(json),
        vec!["Connection from 'A' references missing node 'None'"]
    );
}

#[test]
fn v005_boolean_ids_match_their_text_form() {
    let json = r#"{"nodes": [{"name":"A","id":true},{"name":"B","id":"True"},
                             {"name":"C","id":false},{"name":"D","id":"False"}]}"#;
    assert_eq!(
        messages(json),
        vec![
            "Duplicate node id detected: 'True'",
            "Duplicate node id detected: 'False'",
        ]
    );
}

#[test]
fn v005_float_ids_match_their_text_form() {
    let json = r#"{"nodes": [{"name":"A","id":1.5},{"name":"B","id":"1.5"}]}"#;
    assert_eq!(messages(json), vec!["Duplicate node id detected: '1.5'"]);
}

#[test]
fn v006_numeric_name_is_not_a_string_source() {
    let json = r#"{"nodes": [{"name":5,"id":1}],
                   "connections": {"5": {"main": [[{"node":5}]]}}}"#;
    assert_eq!(
        messages(json),
        vec!["Connection source '5' missing from nodes"]
    );
}

#[test]
fn v007_string_target_does_not_match_numeric_name() {
    let json = r#"{"nodes": [{"name":5,"id":1},{"name":"A","id":2}],
                   "connections": {"A": {"main": [[{"node":"5"}]]}}}"#;
    assert_eq!(
        messages(json),
        vec!["Connection from 'A' references missing node '5'"]
    );
}

#[test]
fn boolean_names_print_in_text_form() {
    let json = r#"{"nodes": [{"name":true},{"name":true,"id":null}]}"#;
    assert_eq!(
        messages(json),
        vec![
            "Node 'True' is missing an 'id' field",
            "Node 'True' has a null 'id' value",
            "Duplicate node name detected: 'True'",
        ]
    );
}

#[test]
fn repeated_source_key_keeps_last_branches() {
    let json = r#"{"nodes": [{"name":"A","id":1}],
                   "connections": {"Z": {"main": [[{"node":"Q"}]]},
                                   "Z": {"main": [[{"node":"A"}]]}}}"#;
    assert_eq!(
        messages(json),
        vec!["Connection source 'Z' missing from nodes"]
    );
}

#[test]
fn repeated_node_field_is_validated() {
    assert!(messages(r#"{"nodes": [{"name":"A","name":"B","id":1}]}"#).is_empty());
}

#[test]
fn empty_branches_are_fine() {
    let json = r#"{"nodes": [{"name":"A","id":1}],
                   "connections": {"A": {"main": [[], []]}}}"#;
    assert!(messages(json).is_empty());
}

#[test]
fn validation_is_repeatable() {
    let json = include_str!("fixtures/broken_workflow.json");
    let document = parse::parse(json).unwrap();
    assert_eq!(validate::validate(&document), validate::validate(&document));
}

#[test]
fn problem_display_is_the_message() {
    let document = parse::parse(r#"{"nodes": [{"id":1}]}"#).unwrap();
    let problems = validate::validate(&document);
    assert_eq!(problems[0].to_string(), "Node at index 0 is missing a 'name' field");
}
