use crate::*;
use serde_json::{Value, json};

#[test]
fn global_registry_knows_the_builtin_charts() {
    assert_eq!(ChartRegistry::global().names(), ["piechart"]);
}

#[test]
fn lookup_is_case_insensitive() {
    let chart = parse("PieChart", &json!({"slices": [1, 2]})).unwrap();
    assert_eq!(chart.chart_type(), "piechart");
}

#[test]
fn read_dispatches_the_single_top_level_key() {
    let chart = read(&json!({"piechart": {"slices": [10, 15, 70], "start": 132}})).unwrap();
    assert_eq!(chart.chart_type(), "piechart");
    let svg = render_svg(chart.as_ref(), &SvgOptions::default());
    let doc = super::parse_svg(&svg);
    assert_eq!(doc.descendants().filter(|n| n.has_tag_name("path")).count(), 3);
}

#[test]
fn read_requires_exactly_one_key() {
    for doc in [json!({"a": {}, "b": {}}), json!({}), json!([{"piechart": {}}])] {
        let err = read(&doc).unwrap_err();
        assert!(matches!(err, Error::Format { .. }), "{doc}: {err}");
    }
}

#[test]
fn unknown_chart_types_are_reported_by_name() {
    let err = read(&json!({"unknownchart": {}})).unwrap_err();
    assert!(matches!(&err, Error::UnknownChartType { chart_type } if chart_type == "unknownchart"));
    assert_eq!(
        err.to_string(),
        "no parse function for chart type 'unknownchart'"
    );
}

#[test]
fn custom_registries_accept_new_chart_types() {
    fn parse_donut(data: &Value) -> Result<Box<dyn Chart>> {
        let chart = Piechart::from_value(data)?.with_class("donut");
        Ok(Box::new(chart))
    }

    let mut reg = ChartRegistry::with_default_charts();
    reg.insert("donut", parse_donut);
    assert_eq!(reg.names(), ["donut", "piechart"]);

    let chart = reg.read(&json!({"Donut": {"slices": [1]}})).unwrap();
    assert_eq!(chart.base().klass.as_deref(), Some("donut"));
    assert!(ChartRegistry::new().get("piechart").is_none());
}
