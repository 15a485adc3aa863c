//! YAML documents in and out.

use crate::Result;
use crate::chart::Chart;
use crate::registry;
use serde_json::Value;
use std::io::Write;
use std::path::Path;

/// Decodes YAML text and builds the chart it describes.
pub fn read_str(text: &str) -> Result<Box<dyn Chart>> {
    let document: Value = serde_yaml::from_str(text)?;
    registry::read(&document)
}

pub fn read_path(path: impl AsRef<Path>) -> Result<Box<dyn Chart>> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "reading chart document");
    let text = std::fs::read_to_string(path)?;
    read_str(&text)
}

pub fn to_yaml_string(chart: &dyn Chart) -> Result<String> {
    Ok(serde_yaml::to_string(&chart.to_value())?)
}

pub fn write_yaml(chart: &dyn Chart, mut writer: impl Write) -> Result<()> {
    let text = to_yaml_string(chart)?;
    writer.write_all(text.as_bytes())?;
    Ok(())
}
