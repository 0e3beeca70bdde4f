use grid_astar::{pathing_grid::PathingGrid, solver::AstarSolver};

// Two diagonal walkable cells separated by two blocked ones:
//  __
// |.#|
// |#.|
//  __
// With corner cutting the diagonal step is taken; without it the cells are disconnected.

fn main() {
    let mut pathing_grid = PathingGrid::from_fn(2, 2, |x, y| x == y);
    let solver = AstarSolver::new();
    for allow in [true, false] {
        pathing_grid.set_corner_cutting(allow);
        match solver.find_path(&mut pathing_grid, 0, 0, 1, 1) {
            Ok(path) => println!("corner cutting {allow}: {:?}", path),
            Err(e) => println!("corner cutting {allow}: {e}"),
        }
    }
}
