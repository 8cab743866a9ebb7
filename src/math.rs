//! Shared numerical primitives anchored on `nalgebra`.

use nalgebra::{DMatrix, Vector2};

/// Primary scalar type used across the crate.
pub type Scalar = f64;
/// Convenient alias for two-dimensional real vectors (points and field samples).
pub type R2 = Vector2<Scalar>;
/// Dense row-major-indexed grid of scalars; `(row, col)` maps to `(y, x)`.
pub type Grid = DMatrix<Scalar>;

/// Generates `n` linearly spaced samples in [start, stop].
#[must_use]
pub fn linspace(start: Scalar, stop: Scalar, n: usize) -> Vec<Scalar> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n as Scalar - 1.0);
            (0..n).map(|i| start + step * i as Scalar).collect()
        }
    }
}

/// Builds the coordinate matrices of a rectangular grid from axis samples.
///
/// Row `i` of both matrices corresponds to `ys[i]`, column `j` to `xs[j]`.
#[must_use]
pub fn meshgrid(xs: &[Scalar], ys: &[Scalar]) -> (Grid, Grid) {
    let x = Grid::from_fn(ys.len(), xs.len(), |_, j| xs[j]);
    let y = Grid::from_fn(ys.len(), xs.len(), |i, _| ys[i]);
    (x, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linspace_basic() {
        let v = linspace(0.0, 1.0, 5);
        assert_eq!(v, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn linspace_degenerate_counts() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(3.0, 1.0, 1), vec![3.0]);
    }

    #[test]
    fn meshgrid_follows_row_y_col_x_layout() {
        let (x, y) = meshgrid(&[1.0, 2.0, 3.0], &[10.0, 20.0]);
        assert_eq!(x.shape(), (2, 3));
        assert_eq!(y.shape(), (2, 3));
        assert_eq!(x[(1, 2)], 3.0);
        assert_eq!(y[(1, 2)], 20.0);
        assert_eq!(x[(0, 0)], 1.0);
        assert_eq!(y[(0, 0)], 10.0);
    }
}
