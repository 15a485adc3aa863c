//! Pie chart.

use super::{Chart, ChartBase, optional_number, optional_string, reject_unknown_keys};
use crate::color::{Color, Palette};
use crate::geom::{Angle, Vector2};
use crate::number::fmt;
use crate::path::{Arc, PathData};
use crate::style::{Style, StyleValue};
use crate::xml::Element;
use crate::{Error, Result};
use serde_json::{Map, Number, Value};

pub const CHART_TYPE: &str = "piechart";

const PIE_KEYS: &[&str] = &["radius", "start", "total", "slices"];
const SLICE_KEYS: &[&str] = &["value", "label", "style"];

/// Pie chart: slices laid out clockwise from `start`, proportional to their values.
#[derive(Debug, Clone, PartialEq)]
pub struct Piechart {
    base: ChartBase,
    radius: f64,
    start: Option<Angle>,
    total: Option<f64>,
    slices: Vec<Slice>,
}

/// One laid-out wedge.
#[derive(Debug, Clone, PartialEq)]
pub struct Wedge {
    pub start: Angle,
    pub stop: Angle,
    pub path: PathData,
    pub fill: String,
}

impl Wedge {
    pub fn span(&self) -> Angle {
        self.stop - self.start
    }
}

impl Default for Piechart {
    fn default() -> Self {
        Self::new()
    }
}

impl Piechart {
    pub const DEFAULT_RADIUS: f64 = 100.0;
    /// Twelve o'clock.
    pub const DEFAULT_START: Angle = Angle::degrees(-90.0);

    pub fn default_style() -> Style {
        Style::new()
            .with("stroke", Color::from_rgb(128, 128, 128))
            .with("stroke_width", 2.0)
            .with("fill", Color::from_rgb(255, 255, 255))
    }

    pub fn default_palette() -> Palette {
        Palette::new([
            Color::from_rgb(0x4c, 0x78, 0xa8),
            Color::from_rgb(0x9e, 0xca, 0xe9),
            Color::from_rgb(0xf5, 0x85, 0x18),
            Color::from_rgb(0xff, 0xbf, 0x79),
        ])
    }

    pub fn new() -> Self {
        Self {
            base: ChartBase::new(Self::default_style(), Self::default_palette()),
            radius: Self::DEFAULT_RADIUS,
            start: None,
            total: None,
            slices: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.base.id = Some(id.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.base.title = Some(title.into());
        self
    }

    pub fn with_class(mut self, klass: impl Into<String>) -> Self {
        self.base.klass = Some(klass.into());
        self
    }

    /// Merges `style` over the current style; the caller's style is copied, not shared.
    pub fn with_style(mut self, style: &Style) -> Self {
        self.base.apply_style(style);
        self
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.base.palette = palette;
        self
    }

    pub fn with_radius(mut self, radius: f64) -> Result<Self> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(Error::invalid_parameter(
                "radius",
                format!("must be a positive number, got {radius}"),
            ));
        }
        self.radius = radius;
        Ok(self)
    }

    /// Angle of the first wedge's leading edge, clockwise from 3 o'clock (0°). The default,
    /// −90°, is 12 o'clock.
    pub fn with_start(mut self, start: Angle) -> Result<Self> {
        if !start.to_degrees().is_finite() {
            return Err(Error::invalid_parameter("start", "must be finite"));
        }
        self.start = Some(start);
        Ok(self)
    }

    /// Explicit denominator; only takes effect when larger than the sum of the slice values.
    pub fn with_total(mut self, total: f64) -> Result<Self> {
        if !(total.is_finite() && total >= 0.0) {
            return Err(Error::invalid_parameter(
                "total",
                format!("must be a non-negative number, got {total}"),
            ));
        }
        self.total = Some(total);
        Ok(self)
    }

    pub fn with_slice(mut self, spec: impl Into<SliceSpec>) -> Result<Self> {
        self.append(spec)?;
        Ok(self)
    }

    pub fn append(&mut self, spec: impl Into<SliceSpec>) -> Result<&mut Self> {
        let spec: SliceSpec = spec.into();
        let slice = Slice::try_from(spec)?;
        let sum: f64 = self.slices.iter().map(Slice::value).sum::<f64>() + slice.value;
        if !sum.is_finite() {
            return Err(Error::invalid_slice(format!(
                "value {} overflows the slice total",
                slice.value
            )));
        }
        self.slices.push(slice);
        Ok(self)
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn start(&self) -> Option<Angle> {
        self.start
    }

    pub fn total(&self) -> Option<f64> {
        self.total
    }

    pub fn slices(&self) -> &[Slice] {
        &self.slices
    }

    pub fn style(&self) -> &Style {
        &self.base.style
    }

    pub fn palette(&self) -> &Palette {
        &self.base.palette
    }

    pub fn stroke_width(&self) -> f64 {
        self.base.style.number("stroke-width").unwrap_or(0.0)
    }

    /// The denominator used for slice spans.
    pub fn effective_total(&self) -> f64 {
        let sum: f64 = self.slices.iter().map(|s| s.value).sum();
        match self.total {
            Some(total) => sum.max(total),
            None => sum,
        }
    }

    /// Lays out the slices in order. A zero total yields no wedges.
    pub fn wedges(&self) -> Vec<Wedge> {
        let total = self.effective_total();
        if self.slices.is_empty() {
            return Vec::new();
        }
        if total <= 0.0 {
            tracing::debug!(
                slices = self.slices.len(),
                "piechart total is zero; no wedges rendered"
            );
            return Vec::new();
        }

        let radius = self.radius;
        let mut palette = self.base.palette.cycle();
        let mut cursor = self.start.unwrap_or(Self::DEFAULT_START);
        let mut wedges = Vec::with_capacity(self.slices.len());

        for slice in &self.slices {
            let span = Angle::FULL_TURN * (slice.value / total);
            let start = cursor;
            let stop = start + span;
            cursor = stop;

            let p0 = Vector2::from_angle(radius, start);
            let mut path = PathData::new(Vector2::ZERO);
            path.line_to(p0);
            if span >= Angle::FULL_TURN {
                // Coincident arc endpoints draw nothing; go through the antipode instead.
                let mid = Vector2::from_angle(radius, start + Angle::HALF_TURN);
                path.arc_to(Arc::circular(radius, false, true), mid)
                    .arc_to(Arc::circular(radius, false, true), p0);
            } else {
                let p1 = Vector2::from_angle(radius, stop);
                let large_arc = span > Angle::HALF_TURN;
                path.arc_to(Arc::circular(radius, large_arc, true), p1);
            }
            path.close();

            let fill = match slice.fill() {
                Some(fill) => fill.to_string(),
                None => palette
                    .next()
                    .map(|c| c.to_string())
                    .or_else(|| self.base.style.get("fill").map(|f| f.to_string()))
                    .unwrap_or_else(|| "none".to_string()),
            };
            tracing::trace!(%start, %stop, %fill, "piechart wedge");
            wedges.push(Wedge {
                start,
                stop,
                path,
                fill,
            });
        }
        wedges
    }

    pub fn from_value(data: &Value) -> Result<Self> {
        let empty = Map::new();
        let map = match data {
            Value::Object(map) => map,
            Value::Null => &empty,
            other => {
                return Err(Error::format(format!(
                    "{CHART_TYPE} must be a mapping, got {other}"
                )));
            }
        };
        reject_unknown_keys(CHART_TYPE, map, &[ChartBase::KEYS, PIE_KEYS])?;

        let defaults = ChartBase::new(Self::default_style(), Self::default_palette());
        let mut chart = Self {
            base: ChartBase::from_map(map, defaults)?,
            ..Self::new()
        };
        if let Some(radius) = optional_number(map, "radius")? {
            chart = chart.with_radius(radius)?;
        }
        if let Some(start) = optional_number(map, "start")? {
            chart = chart.with_start(Angle::degrees(start))?;
        }
        if let Some(total) = optional_number(map, "total")? {
            chart = chart.with_total(total)?;
        }
        match map.get("slices") {
            None | Some(Value::Null) => {}
            Some(Value::Array(items)) => {
                for item in items {
                    chart.append(SliceSpec::from_value(item)?)?;
                }
            }
            Some(other) => {
                return Err(Error::format(format!("slices must be a list, got {other}")));
            }
        }
        Ok(chart)
    }

    /// Registry entry point.
    pub fn parse(data: &Value) -> Result<Box<dyn Chart>> {
        Ok(Box::new(Self::from_value(data)?))
    }
}

impl Chart for Piechart {
    fn chart_type(&self) -> &'static str {
        CHART_TYPE
    }

    fn base(&self) -> &ChartBase {
        &self.base
    }

    fn extent(&self) -> Vector2 {
        let side = 2.0 * self.radius + self.stroke_width();
        Vector2::new(side, side)
    }

    fn svg_content(&self) -> Element {
        let mut group = self.base.group();
        group.push(Element::new("circle").attr("r", fmt(self.radius)));
        for (slice, wedge) in self.slices.iter().zip(self.wedges()) {
            let mut path = Element::new("path")
                .attr("d", &wedge.path)
                .attr("fill", &wedge.fill);
            let mut extra = slice.style.clone();
            extra.remove("fill");
            let css = extra.to_css();
            if !css.is_empty() {
                path.set_attr("style", css);
            }
            group.push(path);
        }
        group
    }

    fn to_value_content(&self) -> Map<String, Value> {
        let mut map = Map::new();
        self.base.write_map(&mut map);
        map.insert("radius".to_string(), number_value(self.radius));
        if let Some(start) = self.start {
            map.insert("start".to_string(), number_value(start.to_degrees()));
        }
        if let Some(total) = self.total {
            map.insert("total".to_string(), number_value(total));
        }
        map.insert(
            "slices".to_string(),
            Value::Array(self.slices.iter().map(Slice::to_value).collect()),
        );
        map
    }
}

/// A wedge of a pie chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    value: f64,
    label: Option<String>,
    style: Style,
}

impl Slice {
    pub fn new(value: f64) -> Result<Self> {
        if !(value.is_finite() && value >= 0.0) {
            return Err(Error::invalid_slice(format!(
                "value must be a non-negative number, got {value}"
            )));
        }
        Ok(Self {
            value,
            label: None,
            style: Style::new(),
        })
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_style(mut self, style: &Style) -> Self {
        self.style.update(style);
        self
    }

    pub fn with_fill(self, color: Color) -> Self {
        self.with_style(&Style::new().with("fill", color))
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    /// Fill forced by this slice's style, overriding the palette.
    pub fn fill(&self) -> Option<&StyleValue> {
        self.style.get("fill")
    }

    /// A bare number when there is nothing else to record, otherwise a mapping.
    pub fn to_value(&self) -> Value {
        if self.label.is_none() && self.style.is_empty() {
            return number_value(self.value);
        }
        let mut map = Map::new();
        map.insert("value".to_string(), number_value(self.value));
        if let Some(label) = &self.label {
            map.insert("label".to_string(), Value::String(label.clone()));
        }
        if !self.style.is_empty() {
            map.insert("style".to_string(), self.style.to_value());
        }
        Value::Object(map)
    }
}

/// The shapes a slice can be specified with.
#[derive(Debug, Clone, PartialEq)]
pub enum SliceSpec {
    Value(f64),
    Labeled(f64, String),
    Slice(Slice),
}

impl SliceSpec {
    /// Accepts a number, a `[value, label]` or `[value, label, style]` list, or a
    /// `{value, label?, style?}` mapping.
    pub fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Number(_) => Ok(SliceSpec::Value(slice_value(value)?)),
            Value::Array(items) => match items.as_slice() {
                [v] => Ok(SliceSpec::Value(slice_value(v)?)),
                [v, label] => match slice_label(label)? {
                    Some(label) => Ok(SliceSpec::Labeled(slice_value(v)?, label)),
                    None => Ok(SliceSpec::Value(slice_value(v)?)),
                },
                [v, label, style] => {
                    let mut slice = Slice::new(slice_value(v)?)?;
                    slice.label = slice_label(label)?;
                    if !style.is_null() {
                        slice.style = Style::from_value(style)?;
                    }
                    Ok(SliceSpec::Slice(slice))
                }
                _ => Err(Error::invalid_slice(format!(
                    "expected [value, label], got a list of {} items",
                    items.len()
                ))),
            },
            Value::Object(map) => {
                if let Some(key) = map.keys().find(|k| !SLICE_KEYS.contains(&k.as_str())) {
                    return Err(Error::invalid_slice(format!("unknown field '{key}'")));
                }
                let Some(v) = map.get("value") else {
                    return Err(Error::invalid_slice("missing 'value'"));
                };
                let mut slice = Slice::new(slice_value(v)?)?;
                slice.label = optional_string(map, "label")
                    .map_err(|e| Error::invalid_slice(e.to_string()))?;
                if let Some(style) = map.get("style").filter(|s| !s.is_null()) {
                    slice.style = Style::from_value(style)?;
                }
                Ok(SliceSpec::Slice(slice))
            }
            other => Err(Error::invalid_slice(format!("unsupported shape: {other}"))),
        }
    }
}

impl TryFrom<SliceSpec> for Slice {
    type Error = Error;

    fn try_from(spec: SliceSpec) -> Result<Self> {
        match spec {
            SliceSpec::Value(value) => Slice::new(value),
            SliceSpec::Labeled(value, label) => Ok(Slice::new(value)?.with_label(label)),
            SliceSpec::Slice(slice) => Slice::new(slice.value).map(|_| slice),
        }
    }
}

impl From<f64> for SliceSpec {
    fn from(value: f64) -> Self {
        SliceSpec::Value(value)
    }
}

impl From<(f64, &str)> for SliceSpec {
    fn from((value, label): (f64, &str)) -> Self {
        SliceSpec::Labeled(value, label.to_string())
    }
}

impl From<(f64, String)> for SliceSpec {
    fn from((value, label): (f64, String)) -> Self {
        SliceSpec::Labeled(value, label)
    }
}

impl From<Slice> for SliceSpec {
    fn from(slice: Slice) -> Self {
        SliceSpec::Slice(slice)
    }
}

fn slice_value(value: &Value) -> Result<f64> {
    value
        .as_f64()
        .ok_or_else(|| Error::invalid_slice(format!("value must be a number, got {value}")))
}

fn slice_label(label: &Value) -> Result<Option<String>> {
    match label {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s.clone())),
        Value::Number(n) => Ok(Some(n.to_string())),
        other => Err(Error::invalid_slice(format!(
            "label must be a string, got {other}"
        ))),
    }
}

fn number_value(v: f64) -> Value {
    Number::from_f64(v).map_or(Value::Null, Value::Number)
}
