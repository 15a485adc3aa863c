#![forbid(unsafe_code)]

use neochart_core::{Chart, Color, SvgOptions, render_svg};

#[derive(Debug, thiserror::Error)]
pub enum RasterError {
    #[error(transparent)]
    Chart(#[from] neochart_core::Error),
    #[error("scale must be a positive number, got {0}")]
    InvalidScale(f32),
    #[error("failed to parse SVG")]
    SvgParse,
    #[error("failed to allocate pixmap for raster rendering")]
    PixmapAlloc,
    #[error("failed to encode PNG")]
    PngEncode,
}

pub type Result<T> = std::result::Result<T, RasterError>;

#[derive(Debug, Clone, PartialEq)]
pub struct RasterOptions {
    /// Pixels per SVG user unit.
    pub scale: f32,
    /// Any color `Color::parse` accepts, or `transparent`. Unset leaves the canvas transparent.
    pub background: Option<String>,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self {
            scale: 1.0,
            background: None,
        }
    }
}

impl RasterOptions {
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_background(mut self, background: impl Into<String>) -> Self {
        self.background = Some(background.into());
        self
    }

    /// Rejects non-positive scales and unparseable backgrounds before any rendering work.
    pub fn validate(&self) -> Result<()> {
        if !(self.scale.is_finite() && self.scale > 0.0) {
            return Err(RasterError::InvalidScale(self.scale));
        }
        if let Some(bg) = &self.background {
            parse_background(bg)?;
        }
        Ok(())
    }
}

pub fn render_png(chart: &dyn Chart, options: &RasterOptions) -> Result<Vec<u8>> {
    options.validate()?;
    let svg = render_svg(chart, &SvgOptions::compact());
    svg_to_png(&svg, options)
}

pub fn svg_to_png(svg: &str, options: &RasterOptions) -> Result<Vec<u8>> {
    options.validate()?;
    let pixmap = svg_to_pixmap(svg, options.scale, options.background.as_deref())?;
    pixmap.encode_png().map_err(|_| RasterError::PngEncode)
}

fn svg_to_pixmap(svg: &str, scale: f32, background: Option<&str>) -> Result<tiny_skia::Pixmap> {
    let opt = usvg::Options::default();
    let tree = usvg::Tree::from_str(svg, &opt).map_err(|_| RasterError::SvgParse)?;

    // usvg already maps the root viewBox onto the width/height viewport, including the
    // centered origin, so only the scale is applied here.
    let size = tree.size();
    let width_px = (size.width() * scale).ceil().max(1.0) as u32;
    let height_px = (size.height() * scale).ceil().max(1.0) as u32;

    let mut pixmap = tiny_skia::Pixmap::new(width_px, height_px).ok_or(RasterError::PixmapAlloc)?;
    if let Some(bg) = background {
        pixmap.fill(parse_background(bg)?);
    }

    resvg::render(
        &tree,
        tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );
    Ok(pixmap)
}

fn parse_background(text: &str) -> Result<tiny_skia::Color> {
    if text.trim().eq_ignore_ascii_case("transparent") {
        return Ok(tiny_skia::Color::TRANSPARENT);
    }
    let (r, g, b) = Color::parse(text)?.rgb();
    Ok(tiny_skia::Color::from_rgba8(r, g, b, 255))
}

#[cfg(test)]
mod tests {
    use super::*;
    use neochart_core::Piechart;

    const PNG_SIGNATURE: &[u8] = b"\x89PNG\r\n\x1a\n";

    fn png_size(bytes: &[u8]) -> (u32, u32) {
        // IHDR is always the first chunk: width and height follow the chunk type.
        let w = u32::from_be_bytes([bytes[16], bytes[17], bytes[18], bytes[19]]);
        let h = u32::from_be_bytes([bytes[20], bytes[21], bytes[22], bytes[23]]);
        (w, h)
    }

    #[test]
    fn svg_to_png_produces_png_signature() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" width="10" height="10" viewBox="0 0 10 10"><rect width="10" height="10" fill="black"/></svg>"#;
        let bytes = svg_to_png(svg, &RasterOptions::default()).unwrap();
        assert!(bytes.starts_with(PNG_SIGNATURE));
    }

    #[test]
    fn render_png_scales_the_chart_extent() {
        let chart = Piechart::new().with_slice(1.0).unwrap();
        let bytes = render_png(&chart, &RasterOptions::default().with_scale(2.0)).unwrap();
        assert!(bytes.starts_with(PNG_SIGNATURE));
        assert_eq!(png_size(&bytes), (404, 404));
    }

    #[test]
    fn background_accepts_color_names_and_hex() {
        let chart = Piechart::new();
        for bg in ["white", "#336699", "transparent"] {
            let opts = RasterOptions::default().with_background(bg);
            assert!(render_png(&chart, &opts).is_ok(), "{bg}");
        }
        let err = render_png(&chart, &RasterOptions::default().with_background("nope"))
            .unwrap_err();
        assert!(matches!(
            err,
            RasterError::Chart(neochart_core::Error::InvalidColor { .. })
        ));
    }

    #[test]
    fn non_positive_scale_is_rejected() {
        let chart = Piechart::new();
        for scale in [0.0, -1.0, f32::NAN] {
            let err = render_png(&chart, &RasterOptions::default().with_scale(scale)).unwrap_err();
            assert!(matches!(err, RasterError::InvalidScale(_)), "{scale}");
        }
    }

    #[test]
    fn malformed_svg_is_reported() {
        let err = svg_to_png("<svg", &RasterOptions::default()).unwrap_err();
        assert!(matches!(err, RasterError::SvgParse));
    }
}
