#![forbid(unsafe_code)]

//! `neochart` renders declarative chart documents to SVG.
//!
//! # Features
//!
//! - `raster`: enable PNG output via pure-Rust SVG rasterization (`neochart::raster`)

pub use neochart_core::*;

#[cfg(feature = "raster")]
pub mod raster;
