//! SVG path synthesizer.
//!
//! [`PathData`] accumulates drawing commands and renders them as the text of a `d` attribute.
//! Repeated commands share one letter (`L 1 2 3 4`), except moveto, which is always written
//! out since a repeated `M` would otherwise read as an implicit lineto.

use crate::geom::Vector2;
use crate::number::{fmt, fmt_compact};
use std::fmt as stdfmt;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathData {
    parts: Vec<String>,
    last_command: Option<char>,
}

/// Arc flags and radii, shared by [`PathData::arc_to`] and [`PathData::arc_by`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arc {
    pub rx: f64,
    pub ry: f64,
    /// x-axis rotation in degrees.
    pub rotation: f64,
    pub large_arc: bool,
    pub sweep: bool,
}

impl Arc {
    /// Circular arc of radius `r` with no rotation.
    pub fn circular(r: f64, large_arc: bool, sweep: bool) -> Self {
        Self {
            rx: r,
            ry: r,
            rotation: 0.0,
            large_arc,
            sweep,
        }
    }
}

impl PathData {
    /// Starts a path with an absolute moveto.
    pub fn new(start: Vector2) -> Self {
        let mut path = Self::default();
        path.move_to(start);
        path
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn move_to(&mut self, p: Vector2) -> &mut Self {
        self.push_points('M', &[p], false)
    }

    pub fn move_by(&mut self, d: Vector2) -> &mut Self {
        self.push_points('m', &[d], false)
    }

    pub fn line_to(&mut self, p: Vector2) -> &mut Self {
        self.push_points('L', &[p], true)
    }

    pub fn line_by(&mut self, d: Vector2) -> &mut Self {
        self.push_points('l', &[d], true)
    }

    pub fn horizontal_to(&mut self, x: f64) -> &mut Self {
        self.push_args('H', fmt_compact(x))
    }

    pub fn horizontal_by(&mut self, dx: f64) -> &mut Self {
        self.push_args('h', fmt_compact(dx))
    }

    pub fn vertical_to(&mut self, y: f64) -> &mut Self {
        self.push_args('V', fmt_compact(y))
    }

    pub fn vertical_by(&mut self, dy: f64) -> &mut Self {
        self.push_args('v', fmt_compact(dy))
    }

    /// Cubic Bézier curve with control points `c1`, `c2`.
    pub fn cubic_to(&mut self, c1: Vector2, c2: Vector2, p: Vector2) -> &mut Self {
        self.push_points('C', &[c1, c2, p], true)
    }

    pub fn cubic_by(&mut self, c1: Vector2, c2: Vector2, d: Vector2) -> &mut Self {
        self.push_points('c', &[c1, c2, d], true)
    }

    /// Shorthand cubic Bézier; the first control point mirrors the previous curve's.
    pub fn smooth_cubic_to(&mut self, c2: Vector2, p: Vector2) -> &mut Self {
        self.push_points('S', &[c2, p], true)
    }

    pub fn smooth_cubic_by(&mut self, c2: Vector2, d: Vector2) -> &mut Self {
        self.push_points('s', &[c2, d], true)
    }

    pub fn quad_to(&mut self, c: Vector2, p: Vector2) -> &mut Self {
        self.push_points('Q', &[c, p], true)
    }

    pub fn quad_by(&mut self, c: Vector2, d: Vector2) -> &mut Self {
        self.push_points('q', &[c, d], true)
    }

    pub fn smooth_quad_to(&mut self, p: Vector2) -> &mut Self {
        self.push_points('T', &[p], true)
    }

    pub fn smooth_quad_by(&mut self, d: Vector2) -> &mut Self {
        self.push_points('t', &[d], true)
    }

    pub fn arc_to(&mut self, arc: Arc, p: Vector2) -> &mut Self {
        self.push_arc('A', arc, p)
    }

    pub fn arc_by(&mut self, arc: Arc, d: Vector2) -> &mut Self {
        self.push_arc('a', arc, d)
    }

    pub fn close(&mut self) -> &mut Self {
        self.parts.push("Z".to_string());
        self.last_command = Some('Z');
        self
    }

    fn push_points(&mut self, command: char, points: &[Vector2], concatenate: bool) -> &mut Self {
        let coords = points
            .iter()
            .map(|p| format!("{} {}", fmt(p.x()), fmt(p.y())))
            .collect::<Vec<_>>()
            .join(" ");
        self.push_command(command, coords, concatenate)
    }

    fn push_args(&mut self, command: char, args: String) -> &mut Self {
        self.push_command(command, args, true)
    }

    fn push_arc(&mut self, command: char, arc: Arc, p: Vector2) -> &mut Self {
        let args = format!(
            "{} {} {} {} {} {} {}",
            fmt_compact(arc.rx),
            fmt_compact(arc.ry),
            fmt_compact(arc.rotation),
            u8::from(arc.large_arc),
            u8::from(arc.sweep),
            fmt(p.x()),
            fmt(p.y())
        );
        self.push_command(command, args, true)
    }

    fn push_command(&mut self, command: char, args: String, concatenate: bool) -> &mut Self {
        if concatenate && self.last_command == Some(command) {
            self.parts.push(args);
        } else {
            self.parts.push(format!("{command} {args}"));
        }
        self.last_command = Some(command);
        self
    }
}

impl stdfmt::Display for PathData {
    fn fmt(&self, f: &mut stdfmt::Formatter<'_>) -> stdfmt::Result {
        f.write_str(&self.parts.join(" "))
    }
}
