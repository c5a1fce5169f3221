use crate::astar::astar;
use crate::error::PathError;
use crate::grid::{open_neighbors, Grid};
use crate::{euclidean_distance, DEFAULT_HEURISTIC_FACTOR};
use grid_util::point::Point;
use log::{debug, info, warn};
use smallvec::SmallVec;

/// A* search over any [Grid]. Moves are orthogonal and cost their Euclidean length; the heuristic
/// is the Euclidean distance to the goal scaled by `heuristic_factor`.
///
/// Among frontier nodes with equal F-score the one with the lowest H-score is expanded first,
/// and among those the one discovered first. Neighbours are discovered in the order the grid
/// returns them, which for the default [Grid::neighbors] is up, right, down, left.
#[derive(Clone, Debug)]
pub struct PathFinder {
    /// Values above 1.0 make the heuristic inadmissible: searches expand fewer nodes but may
    /// return paths longer than the shortest one.
    pub heuristic_factor: f64,
}

impl Default for PathFinder {
    fn default() -> PathFinder {
        PathFinder {
            heuristic_factor: DEFAULT_HEURISTIC_FACTOR,
        }
    }
}

impl PathFinder {
    pub fn new() -> PathFinder {
        PathFinder::default()
    }

    pub fn with_heuristic_factor(heuristic_factor: f64) -> PathFinder {
        PathFinder { heuristic_factor }
    }

    fn heuristic(&self, p1: &Point, p2: &Point) -> f64 {
        euclidean_distance(p1, p2) * self.heuristic_factor
    }

    fn successors<G: Grid + ?Sized>(grid: &G, node: &Point) -> SmallVec<[(Point, f64); 4]> {
        open_neighbors(grid, node)
            .into_iter()
            .map(|(p, _)| (p, euclidean_distance(node, &p)))
            .collect()
    }

    /// Computes a shortest path from `start` to `goal`, both included. Returns [None] if the goal
    /// cannot be reached or either point lies outside the grid.
    pub fn find_path<G: Grid + ?Sized>(
        &self,
        grid: &G,
        start: Point,
        goal: Point,
    ) -> Option<Vec<Point>> {
        if !grid.in_bounds(&start) || !grid.in_bounds(&goal) {
            info!("{} or {} lies outside the grid", start, goal);
            return None;
        }
        if start == goal {
            return Some(vec![start]);
        }
        if !grid.reachable(&start, &goal) {
            info!("{} is not reachable from {}", goal, start);
            return None;
        }
        let result = astar(
            &start,
            |node| Self::successors(grid, node),
            |point| self.heuristic(point, &goal),
            |point| *point == goal,
        );
        match result {
            Some((path, cost)) => {
                debug!("Found path of {} steps with cost {}", path.len() - 1, cost);
                Some(path)
            }
            None => {
                warn!("{} passed the reachability check from {} but no path exists", goal, start);
                None
            }
        }
    }

    /// Like [find_path](Self::find_path), but reports out-of-bounds endpoints as a [PathError]
    /// instead of folding them into the no-path case.
    pub fn try_find_path<G: Grid + ?Sized>(
        &self,
        grid: &G,
        start: Point,
        goal: Point,
    ) -> Result<Option<Vec<Point>>, PathError> {
        if !grid.in_bounds(&start) {
            return Err(PathError::StartOutOfBounds(start));
        }
        if !grid.in_bounds(&goal) {
            return Err(PathError::GoalOutOfBounds(goal));
        }
        Ok(self.find_path(grid, start, goal))
    }

    /// Computes a path from start to the closest of the given goals and returns the selected goal
    /// in addition to the path. The heuristic is the distance to the nearest goal. Goals outside
    /// the grid are ignored.
    pub fn find_path_multiple_goals<G: Grid + ?Sized>(
        &self,
        grid: &G,
        start: Point,
        goals: &[Point],
    ) -> Option<(Point, Vec<Point>)> {
        if !grid.in_bounds(&start) {
            info!("{} lies outside the grid", start);
            return None;
        }
        let goals: Vec<Point> = goals
            .iter()
            .filter(|g| grid.in_bounds(g) && grid.reachable(&start, g))
            .copied()
            .collect();
        if goals.is_empty() {
            info!("None of the goals are reachable from {}", start);
            return None;
        }
        let result = astar(
            &start,
            |node| Self::successors(grid, node),
            |point| {
                goals
                    .iter()
                    .map(|g| self.heuristic(point, g))
                    .fold(f64::INFINITY, f64::min)
            },
            |point| goals.contains(point),
        );
        result.and_then(|(path, _)| path.last().copied().map(|goal| (goal, path)))
    }
}
