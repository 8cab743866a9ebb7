//! Convenience re-exports for computing and drawing capacitor fields.

pub use crate::constants::*;
pub use crate::errors::{PlateFieldError, Result};
pub use crate::fields::{
    electric_field_from_point_charge, electric_field_from_point_charges,
    evaluate_parallel_plate_field, EvaluationGrid, FieldMap, ParallelPlates, PlateSide,
    PointCharge,
};
pub use crate::io::{page_file_name, write_page, write_page_file, write_svg_file};
pub use crate::math::{linspace, meshgrid, Grid, R2, Scalar};
pub use crate::plot::{render_figure_svg, trace_streamlines, Arrow, Streamline, StreamlineOptions};
pub use crate::presets::Configuration;
pub use crate::visualization::{plot_parallel_plate, render_page, RenderSettings, Visualization};
