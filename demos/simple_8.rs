use grid_astar::{path_cost, pathing_grid::PathingGrid, solver::AstarSolver};
use grid_util::grid::ValueGrid;

// In this example a path is found on a 3x3 grid with shape
//  ___
// |  E|
// | # |
// |S  |
//  ___
// where
// - # marks an obstacle
// - S marks the start
// - E marks the end
//
// Nodes have an 8-neighborhood

fn main() {
    let mut pathing_grid = PathingGrid::new(3, 3, false);
    pathing_grid.set(1, 1, true);
    println!("{}", pathing_grid);
    match AstarSolver::new().find_path(&mut pathing_grid, 0, 0, 2, 2) {
        Ok(path) => {
            println!("Path (cost {}):", path_cost(&path));
            for p in path {
                println!("{:?}", p);
            }
        }
        Err(e) => println!("{}", e),
    }
}
