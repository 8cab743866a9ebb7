//! Electrostatic field of discretized capacitor plates sampled on a grid.

mod electrostatic;
mod grid;
mod map;
mod plates;

pub use electrostatic::{
    electric_field_from_point_charge, electric_field_from_point_charges, inverse_cube_distance,
    PointCharge,
};
pub use grid::EvaluationGrid;
pub use map::FieldMap;
pub use plates::{ParallelPlates, PlateSide};

/// Evaluates the field of `plates` on a `grid_points × grid_points` grid spanning
/// `[-length, length]²`, where `length` is the plate length.
#[must_use]
pub fn evaluate_parallel_plate_field(plates: &ParallelPlates, grid_points: usize) -> FieldMap {
    let grid = EvaluationGrid::square(plates.length, grid_points);
    FieldMap::from_charges(grid, &plates.charges())
}
