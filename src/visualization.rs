//! High-level orchestration from a plate separation to a rendered figure or page.

use log::info;

use crate::constants::{GRID_POINTS, STREAMLINE_DENSITY};
use crate::errors::Result;
use crate::fields::{evaluate_parallel_plate_field, FieldMap, ParallelPlates};
use crate::io::write_page;
use crate::math::Scalar;
use crate::plot::{render_figure_svg, trace_streamlines, Streamline, StreamlineOptions};
use crate::presets::Configuration;

/// Resolution parameters of a render.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderSettings {
    /// Streamline density.
    pub density: Scalar,
    /// Samples per axis of the evaluation grid.
    pub grid_points: usize,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            density: STREAMLINE_DENSITY,
            grid_points: GRID_POINTS,
        }
    }
}

/// Field, streamlines and geometry of one plate arrangement, ready to draw.
#[derive(Debug, Clone)]
pub struct Visualization {
    /// Plate geometry the field was computed for.
    pub plates: ParallelPlates,
    /// Sampled field.
    pub field: FieldMap,
    /// Traced streamlines.
    pub streamlines: Vec<Streamline>,
}

impl Visualization {
    /// Evaluates the field of `plates` and traces its streamlines.
    #[must_use]
    pub fn new(plates: ParallelPlates, settings: &RenderSettings) -> Self {
        let field = evaluate_parallel_plate_field(&plates, settings.grid_points);
        let streamlines = trace_streamlines(&field, StreamlineOptions::with_density(settings.density));
        Self {
            plates,
            field,
            streamlines,
        }
    }

    /// Visualization of a preset with the default plate geometry.
    #[must_use]
    pub fn for_configuration(configuration: Configuration, settings: &RenderSettings) -> Self {
        Self::new(ParallelPlates::with_separation(configuration.separation()), settings)
    }

    /// Draws the figure as an SVG document.
    pub fn figure_svg(&self) -> Result<String> {
        render_figure_svg(&self.plates, &self.streamlines)
    }
}

/// Computes and draws the field of plates `separation` meters apart.
pub fn plot_parallel_plate(separation: Scalar, density: Scalar, grid_points: usize) -> Result<String> {
    let settings = RenderSettings {
        density,
        grid_points,
    };
    Visualization::new(ParallelPlates::with_separation(separation), &settings).figure_svg()
}

/// Renders the full HTML page for `configuration`.
pub fn render_page(configuration: Configuration, settings: &RenderSettings) -> Result<String> {
    let figure = Visualization::for_configuration(configuration, settings).figure_svg()?;
    let mut page = Vec::new();
    write_page(&mut page, configuration, &figure)?;
    info!(
        "rendered {} (sep = {:.2} m)",
        configuration,
        configuration.separation()
    );
    Ok(String::from_utf8_lossy(&page).into_owned())
}
