use walled_grid_pathfinding::{is_valid_path, path_cost, Grid, PathFinder, Point, Side, WallGrid};

/// Grid whose walls are only stored on the cell they were placed on, so a wall blocks movement
/// in one direction only.
struct OneSidedGrid {
    width: i32,
    height: i32,
    walls: Vec<(Point, Side)>,
}

impl Grid for OneSidedGrid {
    fn in_bounds(&self, point: &Point) -> bool {
        (0..self.width).contains(&point.x) && (0..self.height).contains(&point.y)
    }
    fn has_wall(&self, point: &Point, side: Side) -> bool {
        self.walls.contains(&(*point, side))
    }
}

#[test]
fn open_grid_path_length_is_manhattan_distance() {
    let grid = WallGrid::new(7, 5, false);
    let finder = PathFinder::new();
    for (start, goal) in [
        ((0, 0), (6, 4)),
        ((6, 4), (0, 0)),
        ((3, 2), (3, 2)),
        ((1, 4), (5, 0)),
        ((2, 2), (2, 0)),
    ] {
        let start = Point::new(start.0, start.1);
        let goal = Point::new(goal.0, goal.1);
        let path = finder.find_path(&grid, start, goal).unwrap();
        let manhattan = (start.x - goal.x).abs() + (start.y - goal.y).abs();
        assert_eq!(path.len() as i32 - 1, manhattan);
        assert_eq!(path_cost(&path), manhattan as f64);
        assert_eq!(path.first(), Some(&start));
        assert_eq!(path.last(), Some(&goal));
        assert!(is_valid_path(&grid, &path));
    }
}

#[test]
fn three_by_three_corner_to_corner() {
    let grid = WallGrid::new(3, 3, false);
    let path = PathFinder::new()
        .find_path(&grid, Point::new(0, 0), Point::new(2, 2))
        .unwrap();
    assert_eq!(path.len(), 5);
    assert!(is_valid_path(&grid, &path));
}

#[test]
fn enclosed_start_has_no_path() {
    let mut grid = WallGrid::new(3, 3, false);
    let start = Point::new(1, 1);
    for side in Side::ALL {
        grid.set_wall(start, side, true);
    }
    let finder = PathFinder::new();
    assert!(finder.find_path(&grid, start, Point::new(0, 0)).is_none());
    grid.update();
    assert!(finder.find_path(&grid, start, Point::new(2, 2)).is_none());
    assert_eq!(finder.find_path(&grid, start, start), Some(vec![start]));
}

#[test]
fn walled_pair_has_no_path() {
    let mut grid = WallGrid::new(2, 1, false);
    grid.set_wall(Point::new(1, 0), Side::Left, true);
    assert!(PathFinder::new()
        .find_path(&grid, Point::new(0, 0), Point::new(1, 0))
        .is_none());
}

#[test]
fn start_outside_bounds_has_no_path() {
    let grid = WallGrid::new(5, 5, false);
    assert!(PathFinder::new()
        .find_path(&grid, Point::new(5, 5), Point::new(0, 0))
        .is_none());
}

#[test]
fn repeated_queries_return_the_same_path() {
    let mut grid = WallGrid::new(6, 6, false);
    grid.set_wall(Point::new(2, 2), Side::Up, true);
    grid.set_wall(Point::new(3, 3), Side::Left, true);
    grid.update();
    let finder = PathFinder::new();
    let first = finder.find_path(&grid, Point::new(0, 0), Point::new(5, 5));
    let second = finder.find_path(&grid, Point::new(0, 0), Point::new(5, 5));
    assert!(first.is_some());
    assert_eq!(first, second);
}

#[test]
fn path_follows_corridor() {
    // A serpentine corridor on a 3x3 grid:
    // +---+---+---+
    // | G         |
    // +   +---+---+
    // |           |
    // +---+---+   +
    // | S         |
    // +---+---+---+
    let mut grid = WallGrid::new(3, 3, false);
    grid.set_wall(Point::new(0, 0), Side::Up, true);
    grid.set_wall(Point::new(1, 0), Side::Up, true);
    grid.set_wall(Point::new(1, 1), Side::Up, true);
    grid.set_wall(Point::new(2, 1), Side::Up, true);
    grid.update();
    let path = PathFinder::new()
        .find_path(&grid, Point::new(0, 0), Point::new(0, 2))
        .unwrap();
    let expected: Vec<Point> = [(0, 0), (1, 0), (2, 0), (2, 1), (1, 1), (0, 1), (0, 2)]
        .into_iter()
        .map(|(x, y)| Point::new(x, y))
        .collect();
    assert_eq!(path, expected);
}

#[test]
fn one_sided_walls_block_only_their_direction() {
    let grid = OneSidedGrid {
        width: 2,
        height: 1,
        walls: vec![(Point::new(0, 0), Side::Right)],
    };
    let finder = PathFinder::new();
    let (left, right) = (Point::new(0, 0), Point::new(1, 0));
    assert!(finder.find_path(&grid, left, right).is_none());
    assert_eq!(finder.find_path(&grid, right, left), Some(vec![right, left]));
}

#[test]
fn maze_grid_needs_carving() {
    let mut grid = WallGrid::new(3, 1, true);
    let finder = PathFinder::new();
    let (start, goal) = (Point::new(0, 0), Point::new(2, 0));
    assert!(finder.find_path(&grid, start, goal).is_none());
    grid.carve(start, Side::Right);
    grid.carve(Point::new(1, 0), Side::Right);
    assert_eq!(
        finder.find_path(&grid, start, goal),
        Some(vec![start, Point::new(1, 0), goal])
    );
}
