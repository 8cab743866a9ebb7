//! Density-controlled streamline tracing over a sampled field.
//!
//! Seeds are taken from a coarse occupancy mask in spiral order from the
//! boundary inward. Each seed is integrated backward and forward along the
//! normalized field with midpoint steps; a trajectory stops when it leaves the
//! domain, hits a zero-field point, or enters a mask cell that another part of
//! the plot already occupies. Short trajectories are discarded so the mask
//! stays free for longer ones.

use log::debug;

use crate::fields::FieldMap;
use crate::math::{R2, Scalar};

/// Mask cells per axis at unit density.
const CELLS_PER_UNIT_DENSITY: Scalar = 30.0;
/// Integration steps per mask cell.
const STEPS_PER_CELL: Scalar = 2.0;

/// Parameters of the streamline tracer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StreamlineOptions {
    /// Closeness of the streamlines; the mask has `30 × density` cells per axis.
    pub density: Scalar,
    /// Shortest kept trajectory as a fraction of the domain width.
    pub min_length: Scalar,
    /// Longest trajectory as a multiple of the domain width.
    pub max_length: Scalar,
}

impl StreamlineOptions {
    /// Options with the given density and default length limits.
    #[must_use]
    pub fn with_density(density: Scalar) -> Self {
        Self {
            density,
            min_length: 0.1,
            max_length: 4.0,
        }
    }
}

/// Direction marker drawn on a streamline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arrow {
    /// Arrow center in data coordinates.
    pub position: R2,
    /// Unit vector along the field.
    pub direction: R2,
}

/// Polyline following the field, ordered along the field direction.
#[derive(Debug, Clone, PartialEq)]
pub struct Streamline {
    /// Vertices in data coordinates.
    pub points: Vec<R2>,
    /// Arrow at the arc-length midpoint.
    pub arrow: Option<Arrow>,
}

impl Streamline {
    /// Total polyline length in data units.
    #[must_use]
    pub fn length(&self) -> Scalar {
        polyline_length(&self.points)
    }
}

type Cell = (usize, usize);

/// Occupancy grid limiting how close streamlines get to one another.
#[derive(Debug)]
struct StreamMask {
    nx: usize,
    occupied: Vec<bool>,
    trail: Vec<Cell>,
    current: Option<Cell>,
}

impl StreamMask {
    fn new(nx: usize, ny: usize) -> Self {
        Self {
            nx,
            occupied: vec![false; nx * ny],
            trail: Vec::new(),
            current: None,
        }
    }

    fn is_occupied(&self, (cx, cy): Cell) -> bool {
        self.occupied[cy * self.nx + cx]
    }

    /// Begins a trajectory at `cell`; false if the cell is taken.
    fn start(&mut self, cell: Cell) -> bool {
        self.trail.clear();
        self.current = None;
        self.visit(cell)
    }

    /// Moves the active trajectory back to its seed cell.
    fn rewind_to(&mut self, cell: Cell) {
        self.current = Some(cell);
    }

    /// Records entry into `cell`; false if it belongs to an earlier stretch of the plot.
    fn visit(&mut self, cell: Cell) -> bool {
        if self.current == Some(cell) {
            return true;
        }
        if self.is_occupied(cell) {
            return false;
        }
        self.occupied[cell.1 * self.nx + cell.0] = true;
        self.trail.push(cell);
        self.current = Some(cell);
        true
    }

    /// Releases every cell claimed by the active trajectory.
    fn undo(&mut self) {
        for &(cx, cy) in &self.trail {
            self.occupied[cy * self.nx + cx] = false;
        }
        self.trail.clear();
    }
}

/// Mask cells in spiral order, starting at the lower-left corner and walking the boundary inward.
fn spiral_cells(nx: usize, ny: usize) -> Vec<Cell> {
    #[derive(Clone, Copy)]
    enum Heading {
        Right,
        Up,
        Left,
        Down,
    }

    let (nx, ny) = (nx as isize, ny as isize);
    let (mut x_first, mut y_first, mut x_last, mut y_last) = (0, 1, nx - 1, ny - 1);
    let (mut x, mut y) = (0_isize, 0_isize);
    let mut heading = Heading::Right;
    let mut cells = Vec::with_capacity((nx * ny).max(0) as usize);

    for _ in 0..nx * ny {
        if (0..nx).contains(&x) && (0..ny).contains(&y) {
            cells.push((x as usize, y as usize));
        }
        match heading {
            Heading::Right => {
                x += 1;
                if x >= x_last {
                    x_last -= 1;
                    heading = Heading::Up;
                }
            }
            Heading::Up => {
                y += 1;
                if y >= y_last {
                    y_last -= 1;
                    heading = Heading::Left;
                }
            }
            Heading::Left => {
                x -= 1;
                if x <= x_first {
                    x_first += 1;
                    heading = Heading::Down;
                }
            }
            Heading::Down => {
                y -= 1;
                if y <= y_first {
                    y_first += 1;
                    heading = Heading::Right;
                }
            }
        }
    }
    cells
}

fn polyline_length(points: &[R2]) -> Scalar {
    points.windows(2).map(|w| (w[1] - w[0]).norm()).sum()
}

/// Traces streamlines of `field` across its whole grid.
struct Tracer<'a> {
    field: &'a FieldMap,
    lo: R2,
    size: R2,
    nx: usize,
    ny: usize,
    step: Scalar,
    max_steps: usize,
    options: StreamlineOptions,
}

impl<'a> Tracer<'a> {
    fn new(field: &'a FieldMap, options: StreamlineOptions) -> Self {
        let (lo, hi) = field.grid.bounds();
        let size = hi - lo;
        let cells = (CELLS_PER_UNIT_DENSITY * options.density).round().max(1.0) as usize;
        let cell_width = size.x.min(size.y) / cells as Scalar;
        let step = cell_width / STEPS_PER_CELL;
        let max_steps = (options.max_length * size.x.max(size.y) / step).ceil() as usize;
        Self {
            field,
            lo,
            size,
            nx: cells,
            ny: cells,
            step,
            max_steps,
            options,
        }
    }

    fn cell_of(&self, p: R2) -> Cell {
        let fx = (p.x - self.lo.x) / self.size.x * self.nx as Scalar;
        let fy = (p.y - self.lo.y) / self.size.y * self.ny as Scalar;
        (
            (fx.max(0.0) as usize).min(self.nx - 1),
            (fy.max(0.0) as usize).min(self.ny - 1),
        )
    }

    fn cell_center(&self, (cx, cy): Cell) -> R2 {
        R2::new(
            self.lo.x + (cx as Scalar + 0.5) * self.size.x / self.nx as Scalar,
            self.lo.y + (cy as Scalar + 0.5) * self.size.y / self.ny as Scalar,
        )
    }

    /// Unit field direction at `p`, or `None` outside the grid or where the field vanishes.
    fn direction(&self, p: R2) -> Option<R2> {
        let v = self.field.sample(p)?;
        let norm = v.norm();
        (norm > 0.0 && norm.is_finite()).then(|| v / norm)
    }

    fn midpoint_step(&self, p: R2, sign: Scalar) -> Option<R2> {
        let h = sign * self.step;
        let k1 = self.direction(p)?;
        let k2 = self.direction(p + k1 * (h / 2.0))?;
        Some(p + k2 * h)
    }

    /// Integrates from `start` in direction `sign`, returning the new points (excluding `start`).
    fn integrate(&self, mask: &mut StreamMask, start: R2, sign: Scalar) -> Vec<R2> {
        let mut points = Vec::new();
        let mut p = start;
        while points.len() < self.max_steps {
            let Some(next) = self.midpoint_step(p, sign) else {
                break;
            };
            if !self.field.grid.contains(next) || !mask.visit(self.cell_of(next)) {
                break;
            }
            points.push(next);
            p = next;
        }
        points
    }

    fn trace(&self) -> Vec<Streamline> {
        let mut mask = StreamMask::new(self.nx, self.ny);
        let min_length = self.options.min_length * self.size.x;
        let mut lines = Vec::new();

        for cell in spiral_cells(self.nx, self.ny) {
            if !mask.start(cell) {
                continue;
            }
            let seed = self.cell_center(cell);
            let mut points = self.integrate(&mut mask, seed, -1.0);
            points.reverse();
            points.push(seed);
            mask.rewind_to(cell);
            points.extend(self.integrate(&mut mask, seed, 1.0));

            if polyline_length(&points) < min_length {
                mask.undo();
                continue;
            }
            let arrow = midpoint_arrow(&points);
            lines.push(Streamline { points, arrow });
        }
        debug!(
            "traced {} streamlines on a {}x{} mask",
            lines.len(),
            self.nx,
            self.ny
        );
        lines
    }
}

/// Arrow at the arc-length midpoint of `points`, pointing toward later vertices.
fn midpoint_arrow(points: &[R2]) -> Option<Arrow> {
    let half = polyline_length(points) / 2.0;
    let mut walked = 0.0;
    for w in points.windows(2) {
        let segment = w[1] - w[0];
        let len = segment.norm();
        if len > 0.0 && walked + len >= half {
            let t = (half - walked) / len;
            return Some(Arrow {
                position: w[0] + segment * t,
                direction: segment / len,
            });
        }
        walked += len;
    }
    None
}

/// Traces streamlines over the whole sampled domain of `field`.
#[must_use]
pub fn trace_streamlines(field: &FieldMap, options: StreamlineOptions) -> Vec<Streamline> {
    Tracer::new(field, options).trace()
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::fields::{evaluate_parallel_plate_field, EvaluationGrid, ParallelPlates};

    fn uniform_field(points: usize, e: R2) -> FieldMap {
        let grid = EvaluationGrid::square(1.0, points);
        let mut map = FieldMap::from_charges(grid, &[]);
        map.ex.fill(e.x);
        map.ey.fill(e.y);
        map
    }

    #[test]
    fn spiral_visits_every_cell_once() {
        for (nx, ny) in [(1, 1), (2, 2), (3, 3), (5, 4), (54, 54)] {
            let mut cells = spiral_cells(nx, ny);
            assert_eq!(cells.len(), nx * ny, "{nx}x{ny}");
            assert_eq!(cells[0], (0, 0));
            cells.sort_unstable();
            cells.dedup();
            assert_eq!(cells.len(), nx * ny, "{nx}x{ny} repeated a cell");
        }
    }

    #[test]
    fn spiral_walks_boundary_first() {
        let cells = spiral_cells(3, 3);
        assert_eq!(&cells[..4], &[(0, 0), (1, 0), (2, 0), (2, 1)]);
        assert_eq!(cells[8], (1, 1));
    }

    #[test]
    fn mask_blocks_foreign_cells_and_undo_releases_them() {
        let mut mask = StreamMask::new(4, 4);
        assert!(mask.start((0, 0)));
        assert!(mask.visit((1, 0)));
        assert!(mask.visit((1, 0)));
        assert!(!mask.visit((0, 0)));
        mask.undo();
        assert!(!mask.is_occupied((0, 0)));
        assert!(!mask.is_occupied((1, 0)));
    }

    #[test]
    fn uniform_field_gives_straight_parallel_lines() {
        let map = uniform_field(11, R2::new(0.0, 2.0));
        let lines = trace_streamlines(&map, StreamlineOptions::with_density(0.3));
        assert!(!lines.is_empty());
        for line in &lines {
            let x0 = line.points[0].x;
            assert!(line.points.iter().all(|p| (p.x - x0).abs() < 1.0e-9));
            assert!(line.points.windows(2).all(|w| w[1].y > w[0].y));
            let arrow = line.arrow.expect("long line has an arrow");
            assert_relative_eq!(arrow.direction.y, 1.0, epsilon = 1.0e-9);
        }
    }

    #[test]
    fn zero_field_yields_no_streamlines() {
        let map = uniform_field(5, R2::zeros());
        assert!(trace_streamlines(&map, StreamlineOptions::with_density(1.0)).is_empty());
    }

    #[test]
    fn higher_density_traces_more_lines() {
        let map = evaluate_parallel_plate_field(&ParallelPlates::with_separation(1.0), 61);
        let sparse = trace_streamlines(&map, StreamlineOptions::with_density(0.5));
        let dense = trace_streamlines(&map, StreamlineOptions::with_density(1.5));
        assert!(dense.len() > sparse.len());
        let min = 0.1 * 4.0;
        assert!(dense.iter().all(|l| l.length() >= min));
        assert!(dense
            .iter()
            .flat_map(|l| &l.points)
            .all(|p| map.grid.contains(*p)));
    }

    #[test]
    fn midpoint_arrow_splits_length() {
        let pts = [R2::new(0.0, 0.0), R2::new(1.0, 0.0), R2::new(1.0, 3.0)];
        let arrow = midpoint_arrow(&pts).unwrap();
        assert_relative_eq!(arrow.position.x, 1.0, epsilon = 1.0e-12);
        assert_relative_eq!(arrow.position.y, 1.0, epsilon = 1.0e-12);
        assert_relative_eq!(arrow.direction.y, 1.0, epsilon = 1.0e-12);
        assert!(midpoint_arrow(&[R2::zeros()]).is_none());
    }
}
