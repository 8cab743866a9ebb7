#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(clippy::all, clippy::nursery, missing_docs)]
#![doc = include_str!("../README.md")]

/// Fixed physical and visual parameters of the capacitor model.
pub mod constants;
/// Shared mathematical utilities (vectors, grids, sampling).
pub mod math;
/// Point charges, plate discretization and sampled field maps.
pub mod fields;
/// Streamline tracing and SVG figure rendering.
pub mod plot;
/// The selectable plate configurations.
pub mod presets;
/// HTML page and file output.
pub mod io;
/// High-level orchestration from a preset to a rendered figure.
pub mod visualization;
/// Error types shared between submodules.
pub mod errors;

/// Common exports for downstream crates.
pub mod prelude;
