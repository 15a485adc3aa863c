#![forbid(unsafe_code)]

//! Chart model and SVG synthesis for neochart (headless).
//!
//! A chart is described as plain data (`{piechart: {...}}`), parsed through a registry of chart
//! types, and rendered into an SVG element tree. Every chart serializes back to the same data
//! shape, so documents round-trip.

pub mod chart;
pub mod color;
pub mod document;
pub mod error;
pub mod geom;
pub mod number;
pub mod options;
pub mod path;
pub mod registry;
pub mod style;
pub mod xml;

pub use chart::pie::{Piechart, Slice, SliceSpec, Wedge};
pub use chart::{Chart, ChartBase, render_svg, render_svg_content};
pub use color::{Color, Palette, PaletteCycle};
pub use document::{read_path, read_str, to_yaml_string, write_yaml};
pub use error::{Error, Result};
pub use geom::{Angle, Vector2};
pub use number::fmt;
pub use options::SvgOptions;
pub use path::{Arc, PathData};
pub use registry::{ChartParser, ChartRegistry, parse, read};
pub use style::{Style, StyleValue};
pub use xml::Element;

#[cfg(test)]
mod tests;
