mod document;
mod geom;
mod number;
mod path;
mod registry;

/// Parses rendered SVG, panicking with the offending text on malformed markup.
pub(crate) fn parse_svg(svg: &str) -> roxmltree::Document<'_> {
    roxmltree::Document::parse(svg).unwrap_or_else(|e| panic!("invalid svg ({e}):\n{svg}"))
}

pub(crate) fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
