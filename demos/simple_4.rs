use walled_grid_pathfinding::{PathFinder, Point, Side, WallGrid};

// In this example a path is found on a 3x3 grid with shape
// +---+---+---+
// | E         |
// +   +---+---+
// |           |
// +---+---+   +
// | S         |
// +---+---+---+
// where
// - S marks the start
// - E marks the end
//
// Walls force the path to wind through every row.

fn main() {
    let mut grid = WallGrid::new(3, 3, false);
    grid.set_wall(Point::new(0, 0), Side::Up, true);
    grid.set_wall(Point::new(1, 0), Side::Up, true);
    grid.set_wall(Point::new(1, 1), Side::Up, true);
    grid.set_wall(Point::new(2, 1), Side::Up, true);
    grid.update();
    println!("{}", grid);
    let start = Point::new(0, 0);
    let end = Point::new(0, 2);
    match PathFinder::new().find_path(&grid, start, end) {
        Some(path) => {
            println!("Path:");
            for p in path {
                println!("{:?}", p);
            }
        }
        None => println!("No path from {} to {}", start, end),
    }
}
