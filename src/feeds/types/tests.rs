use super::*;
use serde_json::json;

#[test]
fn test_decode_bare_list() {
    let lines = decode_prop_feed(json!([
        {"Name": "Player A", "Stat": "Points", "Line": 20.5, "Team": "NYK", "Versus": "BOS"},
        {"player": "Player B", "prop": "PRA", "value": "31.5"}
    ]))
    .unwrap();

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].player_name.as_deref(), Some("Player A"));
    assert_eq!(lines[0].stat_label.as_deref(), Some("Points"));
    assert_eq!(lines[0].line_value, Some(20.5));
    assert_eq!(lines[0].team.as_deref(), Some("NYK"));
    assert_eq!(lines[0].opponent.as_deref(), Some("BOS"));
    assert_eq!(lines[1].line_value, Some(31.5));
    assert_eq!(lines[1].stat_label.as_deref(), Some("PRA"));
}

#[test]
fn test_decode_lines_and_data_envelopes() {
    let entry = json!({"name": "Player A", "stat_type": "Rebounds", "line": 7.5});
    let from_lines = decode_prop_feed(json!({"lines": [entry.clone()], "updated": "today"})).unwrap();
    let from_data = decode_prop_feed(json!({"data": [entry]})).unwrap();

    assert_eq!(from_lines, from_data);
    assert_eq!(from_lines.len(), 1);
    assert_eq!(from_lines[0].stat_label.as_deref(), Some("Rebounds"));
}

#[test]
fn test_decode_keyed_object_ignores_non_objects() {
    let lines = decode_prop_feed(json!({
        "abc": {"Player": "Player A", "Prop": "Assists", "Value": 4.5},
        "count": 1,
        "def": {"Player": "Player B", "Prop": "Steals", "Value": 1.5}
    }))
    .unwrap();
    assert_eq!(lines.len(), 2);
}

#[test]
fn test_decode_nested_projection_expands_per_stat() {
    let lines = decode_prop_feed(json!([{
        "name": "Player A",
        "team": "DEN",
        "projection": {
            "points": {"summary": {"manualOU": 27.5, "overPrice": -115, "underPrice": -105}},
            "pts_rebs_asts": {"summary": {"line": "45.5"}},
            "rebounds": {"summary": {}},
            "junk": 3
        }
    }]))
    .unwrap();

    assert_eq!(lines.len(), 3);
    let points = lines
        .iter()
        .find(|l| l.stat_label.as_deref() == Some("points"))
        .unwrap();
    assert_eq!(points.line_value, Some(27.5));
    assert_eq!(points.over_price, Some(-115.0));
    assert_eq!(points.under_price, Some(-105.0));
    assert_eq!(points.team.as_deref(), Some("DEN"));

    let pra = lines
        .iter()
        .find(|l| l.stat_label.as_deref() == Some("pts_rebs_asts"))
        .unwrap();
    assert_eq!(pra.line_value, Some(45.5));

    // Carried through without a line so the pass can count it.
    let rebounds = lines
        .iter()
        .find(|l| l.stat_label.as_deref() == Some("rebounds"))
        .unwrap();
    assert_eq!(rebounds.line_value, None);
}

#[test]
fn test_missing_fields_stay_absent() {
    let lines = decode_prop_feed(json!([{"Name": "Player A", "Line": "n/a"}, "garbage", 7])).unwrap();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].stat_label.is_none());
    assert!(lines[0].line_value.is_none());
}

#[test]
fn test_unrecognized_shape() {
    match decode_prop_feed(json!("nope")) {
        Err(PropsError::UnrecognizedFeed { feed }) => assert_eq!(feed, "prop line"),
        other => panic!("Expected UnrecognizedFeed, got {:?}", other),
    }
}

#[test]
fn test_value_as_f64() {
    assert_eq!(value_as_f64(&json!(1.5)), Some(1.5));
    assert_eq!(value_as_f64(&json!(" 2 ")), Some(2.0));
    assert_eq!(value_as_f64(&json!("NaN")), None);
    assert_eq!(value_as_f64(&json!(null)), None);
}

#[test]
fn test_load_prop_lines_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lines.json");
    std::fs::write(&path, r#"{"lines":[{"Name":"A","Stat":"Points","Line":10}]}"#).unwrap();

    let lines = load_prop_lines(&path).unwrap();
    assert_eq!(lines, vec![PropLine::new("A", "Points", 10.0)]);
}
