//! Fixed physical and visual parameters of the capacitor model.
//!
//! ## Units
//!
//! Lengths are in meters. The linear charge density is a visual scale rather
//! than an SI quantity: the field is evaluated without the Coulomb prefactor
//! 1/(4πε₀), so magnitudes are only meaningful relative to each other.

use crate::math::Scalar;

/// Number of discrete point charges used to approximate each plate.
pub const CHARGES_PER_PLATE: usize = 130;
/// Linear charge density σ along each plate (visual scale).
pub const LINEAR_CHARGE_DENSITY: Scalar = 1.7;
/// Plate length in meters. The evaluation domain spans `[-PLATE_LENGTH, PLATE_LENGTH]`.
pub const PLATE_LENGTH: Scalar = 2.0;

/// Streamline density passed to the tracer (mask cells per axis = 30 × density).
pub const STREAMLINE_DENSITY: Scalar = 1.8;
/// Samples per axis of the square evaluation grid.
pub const GRID_POINTS: usize = 400;

/// Drawn thickness of a plate rectangle in meters.
pub const PLATE_THICKNESS: Scalar = 0.04;
/// Horizontal gap between a plate's right end and its sign label in meters.
pub const LABEL_OFFSET: Scalar = 0.08;

/// Plate separations offered by the three presets, in meters.
pub const PRESET_SEPARATIONS: [Scalar; 3] = [0.5, 1.0, 1.5];

/// Per-charge magnitude `q = σ L / N` for a plate of length `length` split into `count` charges.
#[inline]
#[must_use]
pub fn charge_per_point(linear_density: Scalar, length: Scalar, count: usize) -> Scalar {
    linear_density * (length / count as Scalar)
}
