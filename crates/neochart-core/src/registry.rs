//! Dispatch from a chart-type name to its parse function.

use crate::chart::{Chart, pie};
use crate::{Error, Result};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::OnceLock;

pub type ChartParser = fn(&Value) -> Result<Box<dyn Chart>>;

#[derive(Debug, Clone, Default)]
pub struct ChartRegistry {
    parsers: HashMap<&'static str, ChartParser>,
}

impl ChartRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `parser` under `chart_type`. Names are matched case-insensitively, so
    /// `chart_type` should be lowercase.
    pub fn insert(&mut self, chart_type: &'static str, parser: ChartParser) {
        self.parsers.insert(chart_type, parser);
    }

    pub fn get(&self, chart_type: &str) -> Option<ChartParser> {
        self.parsers.get(chart_type.to_lowercase().as_str()).copied()
    }

    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.parsers.keys().copied().collect();
        names.sort_unstable();
        names
    }

    pub fn with_default_charts() -> Self {
        let mut reg = Self::new();
        reg.insert(pie::CHART_TYPE, pie::Piechart::parse);
        reg
    }

    /// The process-wide registry holding every built-in chart type.
    pub fn global() -> &'static ChartRegistry {
        static GLOBAL: OnceLock<ChartRegistry> = OnceLock::new();
        GLOBAL.get_or_init(Self::with_default_charts)
    }

    pub fn parse(&self, chart_type: &str, data: &Value) -> Result<Box<dyn Chart>> {
        let Some(parser) = self.get(chart_type) else {
            return Err(Error::UnknownChartType {
                chart_type: chart_type.to_string(),
            });
        };
        tracing::debug!(chart_type, "dispatching chart parse");
        parser(data)
    }

    /// Parses a document of the form `{chart_type: fields}`.
    pub fn read(&self, document: &Value) -> Result<Box<dyn Chart>> {
        let Some(map) = document.as_object() else {
            return Err(Error::format(format!(
                "document must be a mapping with one chart, got {document}"
            )));
        };
        let mut entries = map.iter();
        match (entries.next(), entries.next()) {
            (Some((chart_type, data)), None) => self.parse(chart_type, data),
            _ => Err(Error::format(format!(
                "document must have exactly one top-level key, found {}",
                map.len()
            ))),
        }
    }
}

/// [`ChartRegistry::parse`] against the global registry.
pub fn parse(chart_type: &str, data: &Value) -> Result<Box<dyn Chart>> {
    ChartRegistry::global().parse(chart_type, data)
}

/// [`ChartRegistry::read`] against the global registry.
pub fn read(document: &Value) -> Result<Box<dyn Chart>> {
    ChartRegistry::global().read(document)
}
