//! CSS-like presentation properties.

use crate::color::{Color, Palette};
use crate::number::fmt;
use crate::{Error, Result};
use indexmap::IndexMap;
use serde_json::{Map, Number, Value};

/// Properties whose textual values are resolved to [`Color`] when parsed.
const COLOR_PROPERTIES: &[&str] = &["fill", "stroke", "color", "stop-color", "flood-color"];

/// Paint keywords that are valid in color properties without being colors.
const PAINT_KEYWORDS: &[&str] = &["none", "currentcolor", "transparent", "inherit"];

pub const PALETTE_KEY: &str = "palette";

#[derive(Debug, Clone, PartialEq)]
pub enum StyleValue {
    Text(String),
    Number(f64),
    Color(Color),
    Palette(Palette),
}

impl StyleValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            StyleValue::Number(v) => Some(*v),
            StyleValue::Text(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    fn to_value(&self) -> Value {
        match self {
            StyleValue::Text(s) => Value::String(s.clone()),
            StyleValue::Number(v) => Number::from_f64(*v).map_or(Value::Null, Value::Number),
            StyleValue::Color(c) => Value::String(c.to_string()),
            StyleValue::Palette(p) => p.to_value(),
        }
    }
}

impl std::fmt::Display for StyleValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StyleValue::Text(s) => f.write_str(s),
            StyleValue::Number(v) => f.write_str(&fmt(*v)),
            StyleValue::Color(c) => write!(f, "{c}"),
            StyleValue::Palette(p) => {
                let names: Vec<String> = p.colors().iter().map(|c| c.to_string()).collect();
                f.write_str(&names.join(" "))
            }
        }
    }
}

impl From<&str> for StyleValue {
    fn from(s: &str) -> Self {
        StyleValue::Text(s.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(s: String) -> Self {
        StyleValue::Text(s)
    }
}

impl From<f64> for StyleValue {
    fn from(v: f64) -> Self {
        StyleValue::Number(v)
    }
}

impl From<Color> for StyleValue {
    fn from(c: Color) -> Self {
        StyleValue::Color(c)
    }
}

impl From<Palette> for StyleValue {
    fn from(p: Palette) -> Self {
        StyleValue::Palette(p)
    }
}

/// Ordered set of style properties.
///
/// Keys are stored in CSS form: `stroke_width` and `stroke-width` name the same property.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Style {
    props: IndexMap<String, StyleValue>,
}

pub fn normalize_key(key: &str) -> String {
    key.replace('_', "-")
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Style::set`].
    pub fn with(mut self, key: &str, value: impl Into<StyleValue>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: &str, value: impl Into<StyleValue>) {
        self.props.insert(normalize_key(key), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&StyleValue> {
        self.props.get(&normalize_key(key))
    }

    pub fn remove(&mut self, key: &str) -> Option<StyleValue> {
        self.props.shift_remove(&normalize_key(key))
    }

    pub fn number(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(StyleValue::as_number)
    }

    pub fn len(&self) -> usize {
        self.props.len()
    }

    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleValue)> {
        self.props.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Overwrites properties with those of `other`, keeping the existing key order for keys
    /// already present.
    pub fn update(&mut self, other: &Style) {
        for (key, value) in &other.props {
            self.props.insert(key.clone(), value.clone());
        }
    }

    /// Returns a new style with `other` merged over `self`.
    pub fn merged(&self, other: &Style) -> Style {
        let mut out = self.clone();
        out.update(other);
        out
    }

    /// Parses a mapping of style properties.
    ///
    /// Color properties are resolved eagerly; a `palette` list becomes a [`Palette`].
    pub fn from_value(value: &Value) -> Result<Self> {
        let Some(map) = value.as_object() else {
            return Err(Error::format(format!("style must be a mapping, got {value}")));
        };
        let mut style = Style::new();
        for (key, raw) in map {
            let key = normalize_key(key);
            let parsed = parse_property(&key, raw)?;
            style.props.insert(key, parsed);
        }
        Ok(style)
    }

    pub fn to_value(&self) -> Value {
        let mut map = Map::new();
        for (key, value) in &self.props {
            map.insert(key.clone(), value.to_value());
        }
        Value::Object(map)
    }

    /// Text suitable for an SVG `style` attribute. Palette entries are not CSS and are skipped.
    pub fn to_css(&self) -> String {
        self.props
            .iter()
            .filter(|(_, v)| !matches!(v, StyleValue::Palette(_)))
            .map(|(k, v)| format!("{k}: {v};"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl std::fmt::Display for Style {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_css())
    }
}

impl<K: AsRef<str>, V: Into<StyleValue>> FromIterator<(K, V)> for Style {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut style = Style::new();
        for (k, v) in iter {
            style.set(k.as_ref(), v);
        }
        style
    }
}

fn parse_property(key: &str, raw: &Value) -> Result<StyleValue> {
    if key == PALETTE_KEY {
        if raw.is_array() {
            return Palette::from_value(raw).map(StyleValue::Palette);
        }
        return Err(Error::format(format!("palette must be a list, got {raw}")));
    }

    let is_color_property = COLOR_PROPERTIES.contains(&key);
    match raw {
        Value::Number(_) | Value::Bool(_) if is_color_property => Err(Error::invalid_color(raw)),
        Value::Number(n) => n
            .as_f64()
            .map(StyleValue::Number)
            .ok_or_else(|| Error::format(format!("invalid number for style '{key}': {n}"))),
        Value::String(s) if is_color_property => {
            if PAINT_KEYWORDS.contains(&s.trim().to_ascii_lowercase().as_str())
                || s.trim_start().starts_with("url(")
            {
                Ok(StyleValue::Text(s.clone()))
            } else {
                Color::parse(s).map(StyleValue::Color)
            }
        }
        Value::String(s) => Ok(StyleValue::Text(s.clone())),
        Value::Bool(b) => Ok(StyleValue::Text(b.to_string())),
        Value::Array(_) if is_color_property => Color::from_value(raw).map(StyleValue::Color),
        other => Err(Error::format(format!(
            "unsupported value for style '{key}': {other}"
        ))),
    }
}
