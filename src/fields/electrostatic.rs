use crate::math::{R2, Scalar};

/// Point charge in the plane of the plates.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointCharge {
    /// Position in meters.
    pub position: R2,
    /// Signed charge (visual scale, see [`crate::constants`]).
    pub charge: Scalar,
}

impl PointCharge {
    /// Creates a charge at `(x, y)`.
    #[must_use]
    pub fn new(x: Scalar, y: Scalar, charge: Scalar) -> Self {
        Self { position: R2::new(x, y), charge }
    }
}

/// Returns `1 / r³` for a squared distance `r2`, or zero when the point sits exactly on the charge.
#[inline]
#[must_use]
pub fn inverse_cube_distance(r2: Scalar) -> Scalar {
    if r2 == 0.0 {
        0.0
    } else {
        1.0 / (r2 * r2.sqrt())
    }
}

/// Field contribution of a single charge at `point`, `q (p - c) / |p - c|³`.
#[inline]
#[must_use]
pub fn electric_field_from_point_charge(point: R2, charge: &PointCharge) -> R2 {
    let d = point - charge.position;
    let inv_r3 = inverse_cube_distance(d.norm_squared());
    d * (charge.charge * inv_r3)
}

/// Electric field at `point` due to discrete point charges, summed in slice order.
#[must_use]
pub fn electric_field_from_point_charges(point: R2, charges: &[PointCharge]) -> R2 {
    charges
        .iter()
        .fold(R2::zeros(), |e, c| e + electric_field_from_point_charge(point, c))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn single_charge_field_follows_inverse_square() {
        let q = PointCharge::new(0.0, 0.0, 2.0);
        let e = electric_field_from_point_charges(R2::new(0.0, 2.0), &[q]);
        assert_relative_eq!(e.x, 0.0, epsilon = 1.0e-15);
        assert_relative_eq!(e.y, 2.0 / 4.0, max_relative = 1.0e-12);
    }

    #[test]
    fn negative_charge_points_inward() {
        let q = PointCharge::new(1.0, 1.0, -1.0);
        let e = electric_field_from_point_charges(R2::new(3.0, 1.0), &[q]);
        assert!(e.x < 0.0);
        assert_relative_eq!(e.y, 0.0, epsilon = 1.0e-15);
    }

    #[test]
    fn coincident_point_contributes_nothing() {
        let on = PointCharge::new(0.5, -0.25, 3.0);
        let other = PointCharge::new(0.0, -0.25, 1.0);
        let at = R2::new(0.5, -0.25);
        let alone = electric_field_from_point_charges(at, &[on]);
        assert_eq!(alone, R2::zeros());

        let both = electric_field_from_point_charges(at, &[on, other]);
        let only_other = electric_field_from_point_charges(at, &[other]);
        assert!(both.iter().all(|v| v.is_finite()));
        assert_eq!(both, only_other);
    }

    #[test]
    fn inverse_cube_distance_is_zero_only_at_origin() {
        assert_eq!(inverse_cube_distance(0.0), 0.0);
        assert_relative_eq!(inverse_cube_distance(4.0), 1.0 / 8.0, max_relative = 1.0e-12);
    }
}
