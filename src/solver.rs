use crate::open_list::{HeapOpenList, OpenList, ScanOpenList};
use crate::pathing_grid::PathingGrid;
use crate::{heuristic, move_cost, PathError};
use fxhash::FxHashSet;
use grid_util::point::Point;
use log::{debug, info, warn};
use std::marker::PhantomData;

/// Single-source single-goal A* over a [PathingGrid].
///
/// The open list strategy is a type parameter: [HeapOpenList] (the default) or [ScanOpenList].
/// Both return the same path for the same grid.
#[derive(Clone, Debug)]
pub struct AstarSolver<L: OpenList = HeapOpenList> {
    open_list: PhantomData<fn() -> L>,
}

/// [AstarSolver] using the linear-scan open list.
pub type ScanAstarSolver = AstarSolver<ScanOpenList>;

impl<L: OpenList> Default for AstarSolver<L> {
    fn default() -> Self {
        AstarSolver {
            open_list: PhantomData,
        }
    }
}

impl AstarSolver {
    pub fn new() -> AstarSolver {
        AstarSolver::default()
    }
}

impl<L: OpenList> AstarSolver<L> {
    /// Computes a path from (start_x, start_y) to (end_x, end_y), both inclusive.
    pub fn find_path(
        &self,
        grid: &mut PathingGrid,
        start_x: i32,
        start_y: i32,
        end_x: i32,
        end_y: i32,
    ) -> Result<Vec<Point>, PathError> {
        self.get_path_single_goal(grid, Point::new(start_x, start_y), Point::new(end_x, end_y))
    }

    /// Computes a path from start to goal, both inclusive. Every call resets the search state of
    /// the grid and runs a fresh search; walkability is left untouched.
    ///
    /// Errors with [PathError::OutOfBounds] before touching the grid if either endpoint is
    /// outside it, and with [PathError::NoPathFound] if the open list runs dry.
    pub fn get_path_single_goal(
        &self,
        grid: &mut PathingGrid,
        start: Point,
        goal: Point,
    ) -> Result<Vec<Point>, PathError> {
        if let Err(e) = grid.check_bounds(start).and(grid.check_bounds(goal)) {
            warn!("Rejecting path query: {}", e);
            return Err(e);
        }
        debug!("Searching for a path from {} to {}", start, goal);
        grid.reset_search_state();
        {
            let node = grid.node_mut(start);
            node.g_cost = 0;
            node.h_cost = heuristic(&start, &goal);
            node.update_f_cost();
        }

        let mut open = L::default();
        let mut closed: FxHashSet<Point> = FxHashSet::default();
        open.push(start, grid.node(start).f_cost);

        while let Some(current) = open.pop_lowest() {
            if current == goal {
                debug!(
                    "Reached {} after closing {} cells, {} still open",
                    goal,
                    closed.len(),
                    open.len()
                );
                return Ok(Self::reconstruct_path(grid, goal));
            }
            closed.insert(current);
            let current_g = grid.node(current).g_cost;

            for neighbour in grid.neighbours(current) {
                if closed.contains(&neighbour) {
                    continue;
                }
                if !grid.is_walkable_point(neighbour) {
                    closed.insert(neighbour);
                    continue;
                }
                let tentative_g = current_g + move_cost(&current, &neighbour);
                let node = grid.node_mut(neighbour);
                if tentative_g < node.g_cost {
                    node.came_from = Some(current);
                    node.g_cost = tentative_g;
                    node.h_cost = heuristic(&neighbour, &goal);
                    node.update_f_cost();
                    open.push(neighbour, node.f_cost);
                }
            }
        }
        info!("No path from {} to {} after closing {} cells", start, goal, closed.len());
        Err(PathError::NoPathFound { start, goal })
    }

    /// Follows the backpointers from the goal to the start and reverses them.
    fn reconstruct_path(grid: &PathingGrid, goal: Point) -> Vec<Point> {
        let mut path: Vec<Point> =
            std::iter::successors(Some(goal), |point| grid.node(*point).came_from).collect();
        path.reverse();
        path
    }
}
