//! # walled_grid_pathfinding
//!
//! Shortest paths on 4-connected grids whose cells are separated by walls, as found in mazes.
//! Implements [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) with a Euclidean
//! heuristic and a deterministic tie-break, so repeated queries on the same grid always return
//! the same path.
//!
//! Any grid can be searched by implementing [Grid]; [WallGrid] is a ready-made rectangular grid
//! that also tracks [connected components](https://en.wikipedia.org/wiki/Component_(graph_theory))
//! to reject unreachable goals without flood-filling the grid.
//!
//! ```
//! use walled_grid_pathfinding::{PathFinder, Point, Side, WallGrid};
//!
//! let mut grid = WallGrid::new(2, 2, false);
//! grid.set_wall(Point::new(0, 0), Side::Right, true);
//! let path = PathFinder::new()
//!     .find_path(&grid, Point::new(0, 0), Point::new(1, 0))
//!     .unwrap();
//! assert_eq!(path.len(), 4);
//! ```
mod astar;
pub mod error;
pub mod grid;
pub mod path_finder;
pub mod wall_grid;

pub use crate::astar::astar;
pub use crate::error::PathError;
pub use crate::grid::{open_neighbors, Grid, Side};
pub use crate::path_finder::PathFinder;
pub use crate::wall_grid::WallGrid;
pub use grid_util::point::Point;

use itertools::Itertools;

/// Heuristic factor for which the Euclidean heuristic is admissible.
pub const DEFAULT_HEURISTIC_FACTOR: f64 = 1.0;

/// Straight-line distance between the centres of two cells.
pub fn euclidean_distance(p1: &Point, p2: &Point) -> f64 {
    let dx = f64::from(p1.x - p2.x);
    let dy = f64::from(p1.y - p2.y);
    dx.hypot(dy)
}

/// Total length of a path, summing the Euclidean length of every step.
pub fn path_cost(path: &[Point]) -> f64 {
    path.iter()
        .tuple_windows()
        .map(|(a, b)| euclidean_distance(a, b))
        .sum()
}

/// Checks that a path can be walked on the grid: every point lies in bounds and each step moves
/// to an orthogonal neighbour without crossing a wall of the cell it leaves.
pub fn is_valid_path<G: Grid + ?Sized>(grid: &G, path: &[Point]) -> bool {
    !path.is_empty()
        && path.iter().all(|p| grid.in_bounds(p))
        && path.iter().tuple_windows().all(|(a, b)| {
            Side::between(a, b).is_some_and(|side| !grid.has_wall(a, side))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn euclidean_is_not_truncated() {
        assert_eq!(euclidean_distance(&Point::new(0, 0), &Point::new(3, 4)), 5.0);
        let diagonal = euclidean_distance(&Point::new(0, 0), &Point::new(1, 1));
        assert!((diagonal - std::f64::consts::SQRT_2).abs() < 1e-12);
    }

    #[test]
    fn cost_of_path() {
        let path = [Point::new(0, 0), Point::new(0, 1), Point::new(1, 1)];
        assert_eq!(path_cost(&path), 2.0);
        assert_eq!(path_cost(&path[..1]), 0.0);
    }

    #[test]
    fn validates_steps() {
        let mut grid = WallGrid::new(2, 2, false);
        let (a, b, c) = (Point::new(0, 0), Point::new(1, 0), Point::new(1, 1));
        assert!(is_valid_path(&grid, &[a, b, c]));
        assert!(is_valid_path(&grid, &[a]));
        assert!(!is_valid_path(&grid, &[]));
        assert!(!is_valid_path(&grid, &[a, c]));
        assert!(!is_valid_path(&grid, &[a, Point::new(-1, 0)]));
        grid.set_wall(b, Side::Up, true);
        assert!(!is_valid_path(&grid, &[a, b, c]));
    }
}
