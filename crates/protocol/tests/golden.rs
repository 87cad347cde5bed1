//! Golden vectors for the v1 wire format.
//!
//! These strings are the frozen contract with the host bridge. If one of
//! these tests fails, the wire format changed: bump PROTOCOL_VERSION and cut
//! new vectors instead of editing the old ones.

use gridfill_protocol::{ClientMessage, FillRequest, FillResult, TargetSpec};

#[test]
fn fill_result_all_success() {
    let result = FillResult::from_parts(
        vec!["First name → ctl00$first".into(), "Country → ctl00$country".into()],
        vec![],
    );
    let json = serde_json::to_string(&result).unwrap();
    assert_eq!(
        json,
        r#"{"success":true,"filledCount":2,"filled":["First name → ctl00$first","Country → ctl00$country"],"errors":null,"error":null}"#
    );
}

#[test]
fn fill_result_with_failures() {
    let result = FillResult::from_parts(
        vec!["A → x".into()],
        vec!["input not found: y".into(), "B → z: no matching option".into()],
    );
    let json = serde_json::to_string(&result).unwrap();
    assert_eq!(
        json,
        r#"{"success":true,"filledCount":1,"filled":["A → x"],"errors":["input not found: y","B → z: no matching option"],"error":"input not found: y, B → z: no matching option"}"#
    );
}

#[test]
fn fill_result_errors_never_empty_list() {
    // null, not [] — the orchestrator branches on this.
    let json = serde_json::to_string(&FillResult::from_parts(vec![], vec![])).unwrap();
    assert!(json.contains(r#""errors":null"#));
    assert!(!json.contains(r#""errors":[]"#));
}

#[test]
fn fill_request_accepts_bare_and_list_targets() {
    let json = r#"{
        "record": {"Country": "France", "Notes": "hello"},
        "fieldMapping": {"Country": "ctl00$country", "Notes": ["note_a", "note_b"]}
    }"#;
    let request: FillRequest = serde_json::from_str(json).unwrap();
    assert_eq!(
        request.field_mapping["Country"],
        TargetSpec::One("ctl00$country".into())
    );
    assert_eq!(request.field_mapping["Notes"].targets().len(), 2);
    assert!(request.custom_overrides.is_none());
}

#[test]
fn client_message_action_tag() {
    let json = r#"{
        "action": "fillForm",
        "record": {"A": "1"},
        "fieldMapping": {"A": "x"},
        "customOverrides": {"token": "abc"}
    }"#;
    let ClientMessage::FillForm(request) = serde_json::from_str(json).unwrap();
    assert_eq!(request.record["A"], "1");
    assert_eq!(
        request.custom_overrides.as_ref().and_then(|c| c.get("token")).map(String::as_str),
        Some("abc")
    );

    let round = serde_json::to_string(&ClientMessage::FillForm(request)).unwrap();
    assert!(round.contains(r#""action":"fillForm""#));
}
