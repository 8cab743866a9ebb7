use crate::constants::{
    charge_per_point, CHARGES_PER_PLATE, LINEAR_CHARGE_DENSITY, PLATE_LENGTH,
};
use crate::math::{linspace, Scalar};

use super::electrostatic::PointCharge;

/// Which of the two capacitor plates a charge belongs to.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlateSide {
    /// Plate at `y = +separation / 2`, carrying positive charge.
    Top,
    /// Plate at `y = -separation / 2`, carrying negative charge.
    Bottom,
}

impl PlateSide {
    /// Both plates in evaluation order.
    pub const BOTH: [Self; 2] = [Self::Top, Self::Bottom];

    /// Sign of the charge carried by this plate.
    #[must_use]
    pub const fn sign(self) -> Scalar {
        match self {
            Self::Top => 1.0,
            Self::Bottom => -1.0,
        }
    }

    /// Vertical position of the plate for a given separation.
    #[must_use]
    pub fn y_offset(self, separation: Scalar) -> Scalar {
        self.sign() * separation / 2.0
    }
}

/// Parallel-plate capacitor discretized into evenly spaced point charges.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParallelPlates {
    /// Distance between the plates in meters.
    pub separation: Scalar,
    /// Plate length in meters; plates span `[-length/2, length/2]` in x.
    pub length: Scalar,
    /// Point charges per plate.
    pub charges_per_plate: usize,
    /// Linear charge density σ.
    pub linear_density: Scalar,
}

impl Default for ParallelPlates {
    fn default() -> Self {
        Self {
            separation: 1.0,
            length: PLATE_LENGTH,
            charges_per_plate: CHARGES_PER_PLATE,
            linear_density: LINEAR_CHARGE_DENSITY,
        }
    }
}

impl ParallelPlates {
    /// Default plate geometry with the given separation.
    #[must_use]
    pub fn with_separation(separation: Scalar) -> Self {
        Self {
            separation,
            ..Self::default()
        }
    }

    /// Magnitude of each discrete charge, `σ L / N`.
    #[must_use]
    pub fn charge_per_point(&self) -> Scalar {
        charge_per_point(self.linear_density, self.length, self.charges_per_plate)
    }

    /// Charges of one plate, ordered by increasing x.
    #[must_use]
    pub fn plate(&self, side: PlateSide) -> Vec<PointCharge> {
        let y = side.y_offset(self.separation);
        let q = side.sign() * self.charge_per_point();
        linspace(-self.length / 2.0, self.length / 2.0, self.charges_per_plate)
            .into_iter()
            .map(|x| PointCharge::new(x, y, q))
            .collect()
    }

    /// All charges, top plate first.
    #[must_use]
    pub fn charges(&self) -> Vec<PointCharge> {
        PlateSide::BOTH
            .into_iter()
            .flat_map(|side| self.plate(side))
            .collect()
    }

    /// Signed total charge carried by one plate.
    #[must_use]
    pub fn total_charge(&self, side: PlateSide) -> Scalar {
        self.plate(side).iter().map(|c| c.charge).sum()
    }
}
