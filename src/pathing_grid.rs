use crate::{PathError, N_SMALLVEC_SIZE};
use core::fmt;
use grid_util::grid::ValueGrid;
use grid_util::point::Point;
use log::{info, warn};
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

/// g-cost of a cell that has not been discovered by the current search.
pub const UNREACHED: i32 = i32::MAX;

/// Neighbour offsets in enumeration order: left, left-down, left-up, right, right-down,
/// right-up, down, up. The order decides which of several equal-cost paths is returned.
const NEIGHBOUR_OFFSETS: [(i32, i32); 8] = [
    (-1, 0),
    (-1, -1),
    (-1, 1),
    (1, 0),
    (1, -1),
    (1, 1),
    (0, -1),
    (0, 1),
];

/// Per-cell state. Walkability persists across searches, the cost fields and backpointer are
/// reset at the start of every search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchNode {
    pub walkable: bool,
    pub g_cost: i32,
    pub h_cost: i32,
    pub f_cost: i32,
    pub came_from: Option<Point>,
}

impl SearchNode {
    fn new(walkable: bool) -> SearchNode {
        SearchNode {
            walkable,
            g_cost: UNREACHED,
            h_cost: 0,
            f_cost: UNREACHED,
            came_from: None,
        }
    }
    pub fn update_f_cost(&mut self) {
        self.f_cost = self.g_cost.saturating_add(self.h_cost);
    }
    pub fn reached(&self) -> bool {
        self.g_cost != UNREACHED
    }
    pub(crate) fn reset(&mut self) {
        self.g_cost = UNREACHED;
        self.h_cost = 0;
        self.update_f_cost();
        self.came_from = None;
    }
}

/// [PathingGrid] owns one [SearchNode] per cell and maintains connected components of the
/// walkable cells in a [UnionFind] structure. As a [ValueGrid], the stored value is whether a
/// cell is blocked ([true]) or walkable ([false]).
#[derive(Clone, Debug)]
pub struct PathingGrid {
    width: usize,
    height: usize,
    nodes: Vec<SearchNode>,
    allow_corner_cutting: bool,
    pub components: UnionFind<usize>,
    pub components_dirty: bool,
}

impl Default for PathingGrid {
    fn default() -> PathingGrid {
        PathingGrid {
            width: 0,
            height: 0,
            nodes: Vec::new(),
            allow_corner_cutting: true,
            components: UnionFind::new(0),
            components_dirty: false,
        }
    }
}

impl PathingGrid {
    /// Builds a grid whose walkability is given by `walkable(x, y)`.
    pub fn from_fn<F>(width: usize, height: usize, mut walkable: F) -> PathingGrid
    where
        F: FnMut(i32, i32) -> bool,
    {
        let mut nodes = Vec::with_capacity(width * height);
        for y in 0..height as i32 {
            for x in 0..width as i32 {
                nodes.push(SearchNode::new(walkable(x, y)));
            }
        }
        let mut grid = PathingGrid {
            width,
            height,
            nodes,
            ..PathingGrid::default()
        };
        grid.generate_components();
        grid
    }

    /// Enables or disables diagonal moves past blocked orthogonal cells.
    pub fn with_corner_cutting(mut self, allow: bool) -> PathingGrid {
        self.set_corner_cutting(allow);
        self
    }
    pub fn set_corner_cutting(&mut self, allow: bool) {
        if self.allow_corner_cutting != allow {
            self.allow_corner_cutting = allow;
            self.components_dirty = true;
        }
    }
    pub fn allow_corner_cutting(&self) -> bool {
        self.allow_corner_cutting
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }
    pub fn point_in_bounds(&self, point: Point) -> bool {
        self.in_bounds(point.x, point.y)
    }
    /// Errors with [PathError::OutOfBounds] if `point` is outside the grid.
    pub fn check_bounds(&self, point: Point) -> Result<(), PathError> {
        if self.point_in_bounds(point) {
            Ok(())
        } else {
            Err(PathError::OutOfBounds {
                point,
                width: self.width,
                height: self.height,
            })
        }
    }
    fn ix(&self, point: Point) -> usize {
        point.y as usize * self.width + point.x as usize
    }

    /// The search state of a cell.
    ///
    /// # Panics
    /// If `point` is outside the grid.
    pub fn node(&self, point: Point) -> &SearchNode {
        assert!(self.point_in_bounds(point), "{} is out of bounds", point);
        &self.nodes[self.ix(point)]
    }
    pub(crate) fn node_mut(&mut self, point: Point) -> &mut SearchNode {
        assert!(self.point_in_bounds(point), "{} is out of bounds", point);
        let ix = self.ix(point);
        &mut self.nodes[ix]
    }

    /// Clears the transient search state of every cell. Walkability is left untouched.
    pub fn reset_search_state(&mut self) {
        self.nodes.iter_mut().for_each(SearchNode::reset);
    }

    /// Whether the cell at (x, y) is walkable. Cells outside the grid are not.
    pub fn is_walkable(&self, x: i32, y: i32) -> bool {
        self.in_bounds(x, y) && self.nodes[self.ix(Point::new(x, y))].walkable
    }
    pub fn is_walkable_point(&self, point: Point) -> bool {
        self.is_walkable(point.x, point.y)
    }

    /// Updates the walkability of a cell. Joins newly connected components and flags the
    /// components as dirty if they are (potentially) broken apart.
    pub fn set_walkable(&mut self, x: i32, y: i32, walkable: bool) -> Result<(), PathError> {
        let p = Point::new(x, y);
        self.check_bounds(p)?;
        let was_walkable = self.node(p).walkable;
        if was_walkable == walkable {
            return Ok(());
        }
        self.node_mut(p).walkable = walkable;
        if !walkable || !self.allow_corner_cutting {
            // Closing a cell can split a component; opening one without corner cutting can
            // also enable diagonals between its neighbours.
            self.components_dirty = true;
        } else if !self.components_dirty {
            let p_ix = self.ix(p);
            for n in self.neighbours(p) {
                if self.can_move_to(n, p) {
                    let n_ix = self.ix(n);
                    self.components.union(p_ix, n_ix);
                }
            }
        }
        Ok(())
    }

    /// In-bounds neighbours of `point` that the movement rules allow stepping to, ignoring
    /// the walkability of the neighbour itself. Without corner cutting a diagonal is only
    /// offered when both flanking cells are walkable.
    pub fn neighbours(&self, point: Point) -> SmallVec<[Point; N_SMALLVEC_SIZE]> {
        NEIGHBOUR_OFFSETS
            .iter()
            .map(|&(dx, dy)| Point::new(point.x + dx, point.y + dy))
            .filter(|&n| self.point_in_bounds(n))
            .filter(|&n| {
                self.allow_corner_cutting
                    || n.x == point.x
                    || n.y == point.y
                    || (self.is_walkable(point.x, n.y) && self.is_walkable(n.x, point.y))
            })
            .collect()
    }

    /// Whether a single step from `start` to the adjacent `pos` is allowed.
    pub fn can_move_to(&self, pos: Point, start: Point) -> bool {
        debug_assert!((start.x - pos.x).abs() <= 1 && (start.y - pos.y).abs() <= 1);
        self.is_walkable_point(pos)
            && (self.allow_corner_cutting
                || (self.is_walkable(start.x, pos.y) && self.is_walkable(pos.x, start.y)))
    }

    /// Retrieves the component id a given [Point] belongs to.
    pub fn get_component(&self, point: &Point) -> usize {
        self.components.find(self.ix(*point))
    }

    /// Checks if goal can be reached from start. Regenerates the components first if they are
    /// dirty. A blocked endpoint is unreachable unless start and goal coincide.
    pub fn reachable(&mut self, start: &Point, goal: &Point) -> Result<bool, PathError> {
        self.check_bounds(*start)?;
        self.check_bounds(*goal)?;
        if start == goal {
            return Ok(true);
        }
        if !self.is_walkable_point(*start) || !self.is_walkable_point(*goal) {
            return Ok(false);
        }
        self.update();
        Ok(self
            .components
            .equiv(self.ix(*start), self.ix(*goal)))
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            info!("Components are dirty: regenerating components");
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up walkable neighbours to the same
    /// components. Only the forward half of the neighbourhood is visited since links are
    /// symmetric.
    pub fn generate_components(&mut self) {
        let w = self.width;
        let h = self.height;
        self.components = UnionFind::new(w * h);
        self.components_dirty = false;
        for x in 0..w as i32 {
            for y in 0..h as i32 {
                let point = Point::new(x, y);
                if !self.is_walkable_point(point) {
                    continue;
                }
                let parent_ix = self.ix(point);
                for n in [
                    Point::new(x + 1, y),
                    Point::new(x, y + 1),
                    Point::new(x + 1, y + 1),
                    Point::new(x + 1, y - 1),
                ] {
                    if self.can_move_to(n, point) {
                        let ix = self.ix(n);
                        self.components.union(parent_ix, ix);
                    }
                }
            }
        }
    }
}

impl fmt::Display for PathingGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in (0..self.height as i32).rev() {
            let row = (0..self.width as i32)
                .map(|x| if self.is_walkable(x, y) { '.' } else { '#' })
                .collect::<String>();
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}

impl ValueGrid<bool> for PathingGrid {
    fn new(width: usize, height: usize, default_value: bool) -> Self {
        PathingGrid::from_fn(width, height, |_, _| !default_value)
    }
    fn get(&self, x: i32, y: i32) -> bool {
        !self.is_walkable(x, y)
    }
    /// Sets whether a cell is blocked. Out-of-bounds writes are ignored.
    fn set(&mut self, x: i32, y: i32, blocked: bool) {
        if self.set_walkable(x, y, !blocked).is_err() {
            warn!("Ignoring write to ({}, {}) outside the grid", x, y);
        }
    }
    fn width(&self) -> usize {
        self.width
    }
    fn height(&self) -> usize {
        self.height
    }
}
