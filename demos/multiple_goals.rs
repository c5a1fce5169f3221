use walled_grid_pathfinding::{PathFinder, Point, Side, WallGrid};

// In this example a path is found to one of two goals on a 3x3 grid with shape
// +---+---+---+
// | S       G |
// +   +---+   +
// |   |       |
// +   +   +   +
// |       | G |
// +---+---+---+
// where
// - S marks the start
// - G marks a goal
// The found path moves to the closest goal, which is the top one.

fn main() {
    let mut grid = WallGrid::new(3, 3, false);
    grid.set_wall(Point::new(1, 1), Side::Up, true);
    grid.set_wall(Point::new(0, 1), Side::Right, true);
    grid.set_wall(Point::new(1, 0), Side::Right, true);
    grid.update();
    println!("{}", grid);
    let start = Point::new(0, 2);
    let goals = [Point::new(2, 2), Point::new(2, 0)];
    let (selected_goal, path) = match PathFinder::new().find_path_multiple_goals(&grid, start, &goals) {
        Some(result) => result,
        None => {
            println!("None of the goals can be reached");
            return;
        }
    };
    println!("Selected goal: {:?}\n", selected_goal);
    println!("Path:");
    for p in path {
        println!("{:?}", p);
    }
}
