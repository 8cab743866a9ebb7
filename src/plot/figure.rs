//! SVG figure of the field: streamlines, plate overlays and sign labels.

use log::debug;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::constants::{LABEL_OFFSET, PLATE_THICKNESS};
use crate::errors::{PlateFieldError, Result};
use crate::fields::{ParallelPlates, PlateSide};
use crate::math::{R2, Scalar};

use super::streamlines::{Arrow, Streamline};

/// Side of the square plotting area in pixels.
pub const PLOT_SIDE: u32 = 400;
const MARGIN: u32 = 12;
const TITLE_HEIGHT: u32 = 36;
const X_LABEL_AREA: u32 = 40;
const Y_LABEL_AREA: u32 = 48;

/// Arrow head length in data units.
const ARROW_SIZE: Scalar = 0.07;

/// Fill of the positively charged plate.
pub const POSITIVE_PLATE: RGBColor = RGBColor(220, 20, 60);
/// Fill of the negatively charged plate.
pub const NEGATIVE_PLATE: RGBColor = RGBColor(0, 0, 128);

/// Pixel size of the whole figure. The plotting area inside it is `PLOT_SIDE` square.
#[must_use]
pub const fn figure_size() -> (u32, u32) {
    (
        PLOT_SIDE + Y_LABEL_AREA + 2 * MARGIN,
        PLOT_SIDE + X_LABEL_AREA + 2 * MARGIN + TITLE_HEIGHT,
    )
}

/// Figure title for a plate separation, e.g. `Electric field (sep = 1.00 m)`.
#[must_use]
pub fn figure_title(separation: Scalar) -> String {
    format!("Electric field (sep = {separation:.2} m)")
}

fn plate_color(side: PlateSide) -> RGBColor {
    match side {
        PlateSide::Top => POSITIVE_PLATE,
        PlateSide::Bottom => NEGATIVE_PLATE,
    }
}

fn plate_label(side: PlateSide) -> &'static str {
    match side {
        PlateSide::Top => "+σ",
        PlateSide::Bottom => "-σ",
    }
}

fn arrow_head(arrow: &Arrow) -> Vec<(Scalar, Scalar)> {
    let d = arrow.direction * ARROW_SIZE;
    let normal = R2::new(-d.y, d.x) * 0.4;
    let tip = arrow.position + d * 0.5;
    let back = arrow.position - d * 0.5;
    [tip, back + normal, back - normal]
        .iter()
        .map(|p| (p.x, p.y))
        .collect()
}

/// Draws the field figure into an SVG document.
///
/// The axes span `[-length, length]` in both directions with equal pixel scale.
pub fn render_figure_svg(plates: &ParallelPlates, streamlines: &[Streamline]) -> Result<String> {
    let size = figure_size();
    let extent = plates.length;
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, size).into_drawing_area();
        root.fill(&WHITE).map_err(PlateFieldError::render)?;
        let (title_area, body) = root.split_vertically(TITLE_HEIGHT as i32);

        let title_style = ("sans-serif", 16)
            .into_font()
            .color(&BLACK)
            .pos(Pos::new(HPos::Center, VPos::Center));
        title_area
            .draw(&Text::new(
                figure_title(plates.separation),
                ((size.0 / 2) as i32, (TITLE_HEIGHT / 2) as i32),
                title_style,
            ))
            .map_err(PlateFieldError::render)?;

        let mut chart = ChartBuilder::on(&body)
            .margin(MARGIN as i32)
            .x_label_area_size(X_LABEL_AREA as i32)
            .y_label_area_size(Y_LABEL_AREA as i32)
            .build_cartesian_2d(-extent..extent, -extent..extent)
            .map_err(PlateFieldError::render)?;

        chart
            .configure_mesh()
            .disable_mesh()
            .x_labels(9)
            .y_labels(9)
            .x_desc("x (m)")
            .y_desc("y (m)")
            .label_style(("sans-serif", 11))
            .draw()
            .map_err(PlateFieldError::render)?;

        chart
            .draw_series(streamlines.iter().map(|line| {
                PathElement::new(
                    line.points.iter().map(|p| (p.x, p.y)).collect::<Vec<_>>(),
                    BLACK.stroke_width(1),
                )
            }))
            .map_err(PlateFieldError::render)?;

        chart
            .draw_series(
                streamlines
                    .iter()
                    .filter_map(|line| line.arrow.as_ref())
                    .map(|arrow| Polygon::new(arrow_head(arrow), BLACK.filled())),
            )
            .map_err(PlateFieldError::render)?;

        let half = plates.length / 2.0;
        for side in PlateSide::BOTH {
            let y = side.y_offset(plates.separation);
            let color = plate_color(side);
            chart
                .draw_series(std::iter::once(Rectangle::new(
                    [
                        (-half, y - PLATE_THICKNESS / 2.0),
                        (half, y + PLATE_THICKNESS / 2.0),
                    ],
                    color.filled(),
                )))
                .map_err(PlateFieldError::render)?;

            let label_style = FontDesc::new(FontFamily::SansSerif, 14.0, FontStyle::Bold)
                .color(&color)
                .pos(Pos::new(HPos::Left, VPos::Center));
            chart
                .draw_series(std::iter::once(Text::new(
                    plate_label(side),
                    (half + LABEL_OFFSET, y),
                    label_style,
                )))
                .map_err(PlateFieldError::render)?;
        }

        root.present().map_err(PlateFieldError::render)?;
    }
    debug!(
        "rendered figure for sep = {} with {} streamlines ({} bytes)",
        plates.separation,
        streamlines.len(),
        svg.len()
    );
    Ok(svg)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn straight_line() -> Streamline {
        Streamline {
            points: vec![R2::new(-1.5, -1.5), R2::new(-1.5, 0.0), R2::new(-1.5, 1.5)],
            arrow: Some(Arrow {
                position: R2::new(-1.5, 0.0),
                direction: R2::new(0.0, 1.0),
            }),
        }
    }

    #[test]
    fn title_uses_two_decimals() {
        assert_eq!(figure_title(0.5), "Electric field (sep = 0.50 m)");
        assert_eq!(figure_title(1.0), "Electric field (sep = 1.00 m)");
    }

    #[test]
    fn plot_area_is_square() {
        let (w, h) = figure_size();
        assert_eq!(w - Y_LABEL_AREA - 2 * MARGIN, PLOT_SIDE);
        assert_eq!(h - X_LABEL_AREA - 2 * MARGIN - TITLE_HEIGHT, PLOT_SIDE);
    }

    #[test]
    fn arrow_head_points_along_direction() {
        let head = arrow_head(&Arrow {
            position: R2::zeros(),
            direction: R2::new(1.0, 0.0),
        });
        assert_eq!(head.len(), 3);
        assert!(head[0].0 > head[1].0);
        assert!(head[0].0 > head[2].0);
        assert!(head[1].1 > 0.0 && head[2].1 < 0.0);
    }

    #[test]
    fn svg_contains_title_labels_and_plates() {
        let plates = ParallelPlates::with_separation(1.5);
        let svg = render_figure_svg(&plates, &[straight_line()]).unwrap();
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("Electric field (sep = 1.50 m)"));
        assert!(svg.contains("+σ"));
        assert!(svg.contains("-σ"));
        assert!(svg.contains("x (m)"));
        assert!(svg.contains("y (m)"));
        assert!(svg.contains("<polyline"));
        assert!(svg.contains("<polygon"));
        assert!(svg.contains("#DC143C"));
        assert!(svg.contains("#000080"));
    }
}
