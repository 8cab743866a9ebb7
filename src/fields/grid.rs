use crate::math::{linspace, meshgrid, Grid, R2, Scalar};

/// Square sampling grid over `[-half_extent, half_extent]²`.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationGrid {
    /// x coordinate of every sample; row `i`, column `j` is `(ys[i], xs[j])`.
    pub x: Grid,
    /// y coordinate of every sample.
    pub y: Grid,
    xs: Vec<Scalar>,
    ys: Vec<Scalar>,
}

impl EvaluationGrid {
    /// Builds a `points × points` grid spanning `[-half_extent, half_extent]` on both axes.
    #[must_use]
    pub fn square(half_extent: Scalar, points: usize) -> Self {
        let xs = linspace(-half_extent, half_extent, points);
        let ys = xs.clone();
        let (x, y) = meshgrid(&xs, &ys);
        Self { x, y, xs, ys }
    }

    /// `(rows, cols)` of the coordinate matrices.
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        self.x.shape()
    }

    /// Samples along the x axis (columns).
    #[must_use]
    pub fn x_axis(&self) -> &[Scalar] {
        &self.xs
    }

    /// Samples along the y axis (rows).
    #[must_use]
    pub fn y_axis(&self) -> &[Scalar] {
        &self.ys
    }

    /// Coordinates of the sample at `(row, col)`.
    #[must_use]
    pub fn point(&self, row: usize, col: usize) -> R2 {
        R2::new(self.xs[col], self.ys[row])
    }

    /// Lower-left and upper-right corners of the sampled domain.
    #[must_use]
    pub fn bounds(&self) -> (R2, R2) {
        let first = |v: &[Scalar]| v.first().copied().unwrap_or(0.0);
        let last = |v: &[Scalar]| v.last().copied().unwrap_or(0.0);
        (
            R2::new(first(&self.xs), first(&self.ys)),
            R2::new(last(&self.xs), last(&self.ys)),
        )
    }

    /// True if `p` lies inside the closed sampled domain.
    #[must_use]
    pub fn contains(&self, p: R2) -> bool {
        let (lo, hi) = self.bounds();
        p.x >= lo.x && p.x <= hi.x && p.y >= lo.y && p.y <= hi.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_grid_spans_domain() {
        let grid = EvaluationGrid::square(2.0, 5);
        assert_eq!(grid.shape(), (5, 5));
        assert_eq!(grid.x_axis(), &[-2.0, -1.0, 0.0, 1.0, 2.0]);
        assert_eq!(grid.point(4, 0), R2::new(-2.0, 2.0));
        assert_eq!(grid.x[(4, 0)], -2.0);
        assert_eq!(grid.y[(4, 0)], 2.0);
        let (lo, hi) = grid.bounds();
        assert_eq!(lo, R2::new(-2.0, -2.0));
        assert_eq!(hi, R2::new(2.0, 2.0));
    }

    #[test]
    fn contains_is_closed_on_boundary() {
        let grid = EvaluationGrid::square(1.0, 3);
        assert!(grid.contains(R2::new(1.0, -1.0)));
        assert!(!grid.contains(R2::new(1.0 + 1.0e-9, 0.0)));
    }
}
