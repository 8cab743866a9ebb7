//! Streamline tracing and figure rendering.

/// Streamline seeding and integration.
pub mod streamlines;
/// SVG figure composition.
pub mod figure;

pub use figure::{figure_size, figure_title, render_figure_svg, NEGATIVE_PLATE, PLOT_SIDE, POSITIVE_PLATE};
pub use streamlines::{trace_streamlines, Arrow, Streamline, StreamlineOptions};
