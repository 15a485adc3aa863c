use crate::*;
use serde_json::json;

const PYRAMID: &str = "\
piechart:
  id: pyramid
  start: 132
  palette: ['#4c78a8', '#9ecae9', '#f58518']
  slices:
    - [70, Sky]
    - [15, Sunny side]
    - [10, Shady side]
";

#[test]
fn read_str_builds_the_chart() {
    let chart = read_str(PYRAMID).unwrap();
    let value = chart.to_value();
    assert_eq!(value["piechart"]["id"], json!("pyramid"));
    assert_eq!(value["piechart"]["start"], json!(132.0));
    assert_eq!(
        value["piechart"]["slices"][1],
        json!({"value": 15.0, "label": "Sunny side"})
    );
}

#[test]
fn yaml_output_reads_back_identically() {
    let chart = read_str(PYRAMID).unwrap();
    let yaml = to_yaml_string(chart.as_ref()).unwrap();
    assert!(yaml.starts_with("piechart:\n"), "{yaml}");
    let again = read_str(&yaml).unwrap();
    assert_eq!(again.to_value(), chart.to_value());
}

#[test]
fn write_yaml_matches_to_yaml_string() {
    let chart = read_str("piechart:\n  slices: [1, 2]\n").unwrap();
    let mut out = Vec::new();
    write_yaml(chart.as_ref(), &mut out).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        to_yaml_string(chart.as_ref()).unwrap()
    );
}

#[test]
fn read_path_loads_files() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pyramid.yaml");
    std::fs::write(&path, PYRAMID).unwrap();
    let chart = read_path(&path).unwrap();
    assert_eq!(chart.base().id.as_deref(), Some("pyramid"));

    let err = read_path(dir.path().join("missing.yaml")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn empty_chart_body_uses_defaults() {
    let chart = read_str("piechart:\n").unwrap();
    assert_eq!(chart.extent(), Vector2::new(202.0, 202.0));
}

#[test]
fn malformed_yaml_is_reported() {
    let err = read_str("piechart: [unclosed").unwrap_err();
    assert!(matches!(err, Error::Yaml(_)));
    let err = read_str("a: {}\nb: {}\n").unwrap_err();
    assert!(matches!(err, Error::Format { .. }));
}
