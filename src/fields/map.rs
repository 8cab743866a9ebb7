use log::debug;

use crate::math::{Grid, R2, Scalar};

use super::electrostatic::{electric_field_from_point_charges, PointCharge};
use super::grid::EvaluationGrid;

/// Electric field sampled on an [`EvaluationGrid`].
#[derive(Debug, Clone, PartialEq)]
pub struct FieldMap {
    /// Sampling grid (X, Y).
    pub grid: EvaluationGrid,
    /// x component of the field, same shape as the grid.
    pub ex: Grid,
    /// y component of the field, same shape as the grid.
    pub ey: Grid,
}

impl FieldMap {
    /// Superposes the contributions of `charges` at every grid sample.
    #[must_use]
    pub fn from_charges(grid: EvaluationGrid, charges: &[PointCharge]) -> Self {
        let (rows, cols) = grid.shape();
        let mut ex = Grid::zeros(rows, cols);
        let mut ey = Grid::zeros(rows, cols);
        for col in 0..cols {
            for row in 0..rows {
                let e = electric_field_from_point_charges(grid.point(row, col), charges);
                ex[(row, col)] = e.x;
                ey[(row, col)] = e.y;
            }
        }
        debug!(
            "superposed {} charges over a {}x{} grid",
            charges.len(),
            rows,
            cols
        );
        Self { grid, ex, ey }
    }

    /// Field vector stored at `(row, col)`.
    #[must_use]
    pub fn at(&self, row: usize, col: usize) -> R2 {
        R2::new(self.ex[(row, col)], self.ey[(row, col)])
    }

    /// True when every stored component is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.ex.iter().chain(self.ey.iter()).all(|v| v.is_finite())
    }

    /// Bilinear interpolation of the field at `p`; `None` outside the grid.
    #[must_use]
    pub fn sample(&self, p: R2) -> Option<R2> {
        if !self.grid.contains(p) {
            return None;
        }
        let (col, tx) = cell_coordinate(self.grid.x_axis(), p.x)?;
        let (row, ty) = cell_coordinate(self.grid.y_axis(), p.y)?;
        let (rows, cols) = self.grid.shape();
        let col1 = (col + 1).min(cols - 1);
        let row1 = (row + 1).min(rows - 1);

        let bottom = self.at(row, col) * (1.0 - tx) + self.at(row, col1) * tx;
        let top = self.at(row1, col) * (1.0 - tx) + self.at(row1, col1) * tx;
        Some(bottom * (1.0 - ty) + top * ty)
    }
}

/// Index of the cell containing `v` on a uniform axis and the fractional offset within it.
fn cell_coordinate(axis: &[Scalar], v: Scalar) -> Option<(usize, Scalar)> {
    let (&first, &last) = (axis.first()?, axis.last()?);
    if axis.len() == 1 {
        return Some((0, 0.0));
    }
    let step = (last - first) / (axis.len() - 1) as Scalar;
    let f = ((v - first) / step).clamp(0.0, (axis.len() - 1) as Scalar);
    let index = (f.floor() as usize).min(axis.len() - 2);
    Some((index, f - index as Scalar))
}
