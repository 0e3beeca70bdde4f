//! # grid_astar
//!
//! A* pathfinding on a fixed-size 2D walkability grid with 8-directional movement. Straight
//! moves cost [C] and diagonal moves cost [D]; the heuristic is the
//! [octile distance](https://theory.stanford.edu/~amitp/GameProgramming/Heuristics.html#diagonal-distance)
//! under those costs, so returned paths are optimal.
//!
//! The [PathingGrid](pathing_grid::PathingGrid) owns walkability and the per-cell search state
//! and is reused across searches. An [AstarSolver](solver::AstarSolver) runs one search per call
//! against a borrowed grid. Ties between open cells of equal f-cost go to the cell that entered
//! the open list first, which makes the chosen path deterministic.
//!
//! Connected components are maintained alongside the grid so that
//! [reachability](pathing_grid::PathingGrid::reachable) can be answered without searching.
pub mod error;
pub mod open_list;
pub mod pathing_grid;
pub mod solver;

pub use error::PathError;

use grid_util::point::Point;
use itertools::Itertools;

/// Cost of a straight (cardinal) move.
pub const C: i32 = 10;
/// Cost of a diagonal move, roughly C * sqrt(2).
pub const D: i32 = 14;
/// Inline capacity of neighbourhood buffers: at most 8 neighbours per cell.
pub const N_SMALLVEC_SIZE: usize = 8;

/// Octile distance between two cells: the cost of taking as many diagonal steps as possible
/// before going straight.
pub fn heuristic(p1: &Point, p2: &Point) -> i32 {
    let delta_x = (p1.x - p2.x).abs();
    let delta_y = (p1.y - p2.y).abs();
    D * delta_x.min(delta_y) + C * (delta_x - delta_y).abs()
}

/// Cost of a single step between adjacent cells, [C] or [D].
pub fn move_cost(p1: &Point, p2: &Point) -> i32 {
    debug_assert!((p1.x - p2.x).abs() <= 1 && (p1.y - p2.y).abs() <= 1);
    heuristic(p1, p2)
}

/// Converts the integer cost to an approximate floating point equivalent where cardinal directions have cost 1.0.
pub fn convert_cost_to_unit_cost_float(cost: i32) -> f64 {
    (cost as f64) / (C as f64)
}

/// Sums the step costs along a path.
pub fn path_cost(path: &[Point]) -> i32 {
    path.iter()
        .tuple_windows()
        .map(|(a, b)| move_cost(a, b))
        .sum()
}

/// Whether every consecutive pair of cells is one of the 8 neighbour offsets apart.
pub fn is_contiguous(path: &[Point]) -> bool {
    path.iter().tuple_windows().all(|(a, b)| {
        let dx = (a.x - b.x).abs();
        let dy = (a.y - b.y).abs();
        dx <= 1 && dy <= 1 && (dx, dy) != (0, 0)
    })
}
