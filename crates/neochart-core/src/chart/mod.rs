//! Chart abstraction shared by all chart types.

pub mod pie;

use crate::color::Palette;
use crate::geom::Vector2;
use crate::number::fmt;
use crate::options::SvgOptions;
use crate::style::{PALETTE_KEY, Style, StyleValue};
use crate::xml::Element;
use crate::{Error, Result};
use serde_json::{Map, Value};

pub const SVG_XMLNS: &str = "http://www.w3.org/2000/svg";

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// A renderable figure.
///
/// Implementors provide their content; the SVG root and the `{type: fields}` wrapping are
/// shared.
pub trait Chart: std::fmt::Debug + Send + Sync {
    /// Registry key for this chart type, e.g. `piechart`.
    fn chart_type(&self) -> &'static str;

    fn base(&self) -> &ChartBase;

    /// Width and height of the viewport needed to show the whole chart.
    fn extent(&self) -> Vector2;

    /// The `<g>` element holding this chart's drawing.
    fn svg_content(&self) -> Element;

    /// Chart fields as plain data, without the chart type wrapper.
    fn to_value_content(&self) -> Map<String, Value>;

    /// SVG root element, with the origin centered in the viewBox.
    fn svg(&self) -> Element {
        let extent = self.extent();
        let origin = Vector2::ZERO - extent / 2.0;
        Element::new("svg")
            .attr("xmlns", SVG_XMLNS)
            .attr("width", fmt(extent.x()))
            .attr("height", fmt(extent.y()))
            .attr(
                "viewBox",
                format!(
                    "{} {} {} {}",
                    fmt(origin.x()),
                    fmt(origin.y()),
                    fmt(extent.x()),
                    fmt(extent.y())
                ),
            )
            .child(self.svg_content())
    }

    /// `{chart_type: fields}`, the inverse of the registry's parse.
    fn to_value(&self) -> Value {
        let mut map = Map::new();
        map.insert(
            self.chart_type().to_string(),
            Value::Object(self.to_value_content()),
        );
        Value::Object(map)
    }
}

/// Serializes the chart's SVG root element.
pub fn render_svg(chart: &dyn Chart, options: &SvgOptions) -> String {
    render_element(&chart.svg(), options)
}

/// Serializes only the chart's content group, for embedding in another document.
pub fn render_svg_content(chart: &dyn Chart, options: &SvgOptions) -> String {
    render_element(&chart.svg_content(), options)
}

fn render_element(element: &Element, options: &SvgOptions) -> String {
    let body = element.to_xml(options.indent);
    if options.xml_declaration {
        let sep = if options.indent.is_some() { "\n" } else { "" };
        format!("{XML_DECLARATION}{sep}{body}")
    } else {
        body
    }
}

/// Fields common to every chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartBase {
    pub id: Option<String>,
    pub title: Option<String>,
    /// The `class` attribute.
    pub klass: Option<String>,
    pub style: Style,
    pub palette: Palette,
}

impl ChartBase {
    pub const KEYS: &'static [&'static str] = &["id", "title", "class", "style", "palette"];

    pub fn new(style: Style, palette: Palette) -> Self {
        Self {
            id: None,
            title: None,
            klass: None,
            style,
            palette,
        }
    }

    /// Merges `style` over the current style. A palette given inside the style replaces the
    /// chart palette instead of staying a style property.
    pub fn apply_style(&mut self, style: &Style) {
        let mut style = style.clone();
        if let Some(StyleValue::Palette(palette)) = style.remove(PALETTE_KEY) {
            self.palette = palette;
        }
        self.style.update(&style);
    }

    /// Reads the common fields from a chart mapping, starting from `defaults`.
    pub fn from_map(map: &Map<String, Value>, defaults: ChartBase) -> Result<Self> {
        let mut base = defaults;
        base.id = optional_string(map, "id")?;
        base.title = optional_string(map, "title")?;
        base.klass = optional_string(map, "class")?;
        if let Some(style) = map.get("style").filter(|v| !v.is_null()) {
            base.apply_style(&Style::from_value(style)?);
        }
        if let Some(palette) = map.get("palette").filter(|v| !v.is_null()) {
            base.palette = Palette::from_value(palette)?;
        }
        Ok(base)
    }

    pub fn write_map(&self, map: &mut Map<String, Value>) {
        if let Some(id) = &self.id {
            map.insert("id".to_string(), Value::String(id.clone()));
        }
        if let Some(title) = &self.title {
            map.insert("title".to_string(), Value::String(title.clone()));
        }
        if let Some(klass) = &self.klass {
            map.insert("class".to_string(), Value::String(klass.clone()));
        }
        if !self.style.is_empty() {
            map.insert("style".to_string(), self.style.to_value());
        }
        map.insert("palette".to_string(), self.palette.to_value());
    }

    /// `<g>` carrying the identity and style attributes that are set.
    pub fn group(&self) -> Element {
        let mut g = Element::new("g");
        if let Some(id) = &self.id {
            g.set_attr("id", id);
        }
        if let Some(klass) = &self.klass {
            g.set_attr("class", klass);
        }
        let css = self.style.to_css();
        if !css.is_empty() {
            g.set_attr("style", css);
        }
        g
    }
}

/// Fails with a format error naming the first key not in `allowed`.
pub(crate) fn reject_unknown_keys(
    chart_type: &str,
    map: &Map<String, Value>,
    allowed: &[&[&str]],
) -> Result<()> {
    for key in map.keys() {
        if !allowed.iter().any(|keys| keys.contains(&key.as_str())) {
            return Err(Error::format(format!(
                "unknown field '{key}' for {chart_type}"
            )));
        }
    }
    Ok(())
}

pub(crate) fn optional_string(map: &Map<String, Value>, key: &str) -> Result<Option<String>> {
    match map.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(Error::format(format!(
            "'{key}' must be a string, got {other}"
        ))),
    }
}

pub(crate) fn optional_number(map: &Map<String, Value>, key: &'static str) -> Result<Option<f64>> {
    match map.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(v) => match v.as_f64() {
            Some(n) if n.is_finite() => Ok(Some(n)),
            _ => Err(Error::invalid_parameter(key, format!("expected a number, got {v}"))),
        },
    }
}
