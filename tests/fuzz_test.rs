/// Fuzzes the search by checking on many random grids that a path is found exactly when the goal
/// is reachable by being part of the same connected component, that both open lists return the
/// same path, and that the path cost matches an independent Dijkstra search.
use grid_astar::{
    heuristic, is_contiguous, path_cost,
    pathing_grid::PathingGrid,
    solver::{AstarSolver, ScanAstarSolver},
    PathError,
};
use grid_util::grid::ValueGrid;
use grid_util::point::Point;
use rand::prelude::*;

fn random_grid(w: usize, h: usize, rng: &mut StdRng, corner_cutting: bool) -> PathingGrid {
    PathingGrid::from_fn(w, h, |_, _| !rng.gen_bool(0.4)).with_corner_cutting(corner_cutting)
}

fn visualize_grid(grid: &PathingGrid, start: &Point, end: &Point) {
    for y in (0..grid.height() as i32).rev() {
        for x in 0..grid.width() as i32 {
            let p = Point::new(x, y);
            if *start == p {
                print!("S");
            } else if *end == p {
                print!("G");
            } else if !grid.is_walkable_point(p) {
                print!("#");
            } else {
                print!(".");
            }
        }
        println!();
    }
}

fn dijkstra_cost(grid: &PathingGrid, start: Point, end: Point) -> Option<i32> {
    pathfinding::prelude::dijkstra(
        &start,
        |p| {
            grid.neighbours(*p)
                .into_iter()
                .filter(|n| grid.can_move_to(*n, *p))
                .map(|n| (n, grid_astar::move_cost(p, &n)))
                .collect::<Vec<_>>()
        },
        |p| *p == end,
    )
    .map(|(_, cost)| cost)
}

#[test]
fn fuzz() {
    const N: usize = 10;
    const N_GRIDS: usize = 2000;
    let mut rng = StdRng::seed_from_u64(0);
    let heap_solver = AstarSolver::new();
    let scan_solver = ScanAstarSolver::default();
    for corner_cutting in [true, false] {
        for _ in 0..N_GRIDS {
            let mut random_grid = random_grid(N, N, &mut rng, corner_cutting);
            let start = Point::new(0, 0);
            let end = Point::new(N as i32 - 1, N as i32 - 1);
            random_grid.set_walkable(start.x, start.y, true).unwrap();
            random_grid.set_walkable(end.x, end.y, true).unwrap();

            let reachable = random_grid.reachable(&start, &end).unwrap();
            let path = heap_solver.get_path_single_goal(&mut random_grid, start, end);
            let scan_path = scan_solver.get_path_single_goal(&mut random_grid, start, end);
            // Show the grid if the outcome is not the expected one
            if path.is_ok() != reachable || path != scan_path {
                visualize_grid(&random_grid, &start, &end);
            }
            assert_eq!(path.is_ok(), reachable);
            assert_eq!(path, scan_path);

            match path {
                Ok(path) => {
                    assert_eq!(path.first(), Some(&start));
                    assert_eq!(path.last(), Some(&end));
                    assert!(is_contiguous(&path));
                    assert!(path.iter().all(|p| random_grid.is_walkable_point(*p)));
                    assert!(path
                        .iter()
                        .zip(path.iter().skip(1))
                        .all(|(a, b)| random_grid.can_move_to(*b, *a)));
                    assert_eq!(
                        Some(path_cost(&path)),
                        dijkstra_cost(&random_grid, start, end)
                    );
                }
                Err(e) => assert_eq!(e, PathError::NoPathFound { start, goal: end }),
            }
        }
    }
}

#[test]
fn fuzz_open_grid_cost_is_octile() {
    const N: usize = 12;
    let mut rng = StdRng::seed_from_u64(1);
    let solver = AstarSolver::new();
    let mut grid = PathingGrid::from_fn(N, N, |_, _| true);
    for _ in 0..500 {
        let start = Point::new(rng.gen_range(0..N as i32), rng.gen_range(0..N as i32));
        let end = Point::new(rng.gen_range(0..N as i32), rng.gen_range(0..N as i32));
        let path = solver.get_path_single_goal(&mut grid, start, end).unwrap();
        assert_eq!(path_cost(&path), heuristic(&start, &end));
        assert!(is_contiguous(&path));
    }
}
