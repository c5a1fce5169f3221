use crate::grid::{Grid, Side};
use core::fmt;
use grid_util::point::Point;
use log::info;
use petgraph::unionfind::UnionFind;

const ALL_WALLS: u8 = 0b1111;

/// [WallGrid] is a rectangular grid of cells separated by walls. Walls are edge attributes shared
/// by the two cells they separate: the flag is always stored on both sides. The border of the
/// grid is permanently walled.
///
/// Connected components are maintained in a [UnionFind] structure so that unreachable goals can
/// be rejected without flood-filling the grid.
#[derive(Clone, Debug)]
pub struct WallGrid {
    width: usize,
    height: usize,
    walls: Vec<u8>,
    pub components: UnionFind<usize>,
    pub components_dirty: bool,
}

impl Default for WallGrid {
    fn default() -> WallGrid {
        WallGrid::new(0, 0, false)
    }
}

impl WallGrid {
    /// Creates a grid where every interior wall is either open or, if `walled` is [true], closed.
    pub fn new(width: usize, height: usize, walled: bool) -> WallGrid {
        let mut grid = WallGrid {
            width,
            height,
            walls: vec![if walled { ALL_WALLS } else { 0 }; width * height],
            components: UnionFind::new(width * height),
            components_dirty: false,
        };
        for x in 0..width as i32 {
            grid.close_outer(Point::new(x, 0), Side::Down);
            grid.close_outer(Point::new(x, height as i32 - 1), Side::Up);
        }
        for y in 0..height as i32 {
            grid.close_outer(Point::new(0, y), Side::Left);
            grid.close_outer(Point::new(width as i32 - 1, y), Side::Right);
        }
        grid.generate_components();
        grid
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn close_outer(&mut self, point: Point, side: Side) {
        if let Some(ix) = self.get_ix(&point) {
            self.walls[ix] |= side.bit();
        }
    }

    fn get_ix(&self, point: &Point) -> Option<usize> {
        self.in_bounds(point)
            .then(|| point.y as usize * self.width + point.x as usize)
    }

    /// The wall mask of a cell, using the bits of [Side::bit]. Out-of-bounds cells are fully
    /// walled.
    pub fn walls(&self, point: &Point) -> u8 {
        self.get_ix(point).map_or(ALL_WALLS, |ix| self.walls[ix])
    }

    /// Opens or closes the wall on `side` of `point`, together with the matching wall of the
    /// neighbouring cell. Walls on the grid border cannot be opened. Opening a wall joins the
    /// components of both cells; closing one marks the components as dirty since it may split a
    /// component in two.
    pub fn set_wall(&mut self, point: Point, side: Side, blocked: bool) {
        let (Some(ix), Some(n_ix)) = (self.get_ix(&point), self.get_ix(&side.step(&point))) else {
            return;
        };
        if self.has_wall(&point, side) == blocked {
            return;
        }
        if blocked {
            self.walls[ix] |= side.bit();
            self.walls[n_ix] |= side.opposite().bit();
            self.components_dirty = true;
        } else {
            self.walls[ix] &= !side.bit();
            self.walls[n_ix] &= !side.opposite().bit();
            self.components.union(ix, n_ix);
        }
    }

    /// Removes the wall on `side` of `point`; the usual primitive of maze carving.
    pub fn carve(&mut self, point: Point, side: Side) {
        self.set_wall(point, side, false);
    }

    /// Retrieves the component id a given [Point] belongs to.
    pub fn get_component(&self, point: &Point) -> Option<usize> {
        self.get_ix(point).map(|ix| self.components.find(ix))
    }

    /// Checks if start and goal are not on the same component. Dirty components are not trusted,
    /// in which case this returns [false] for any pair of in-bounds points.
    pub fn unreachable(&self, start: &Point, goal: &Point) -> bool {
        match (self.get_ix(start), self.get_ix(goal)) {
            (Some(start_ix), Some(goal_ix)) => {
                if self.components_dirty {
                    info!("Components are dirty, skipping the reachability check");
                    false
                } else {
                    !self.components.equiv(start_ix, goal_ix)
                }
            }
            _ => true,
        }
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            info!("Components are dirty: regenerating components");
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up cells that are not separated by a wall.
    pub fn generate_components(&mut self) {
        info!("Generating connected components");
        self.components = UnionFind::new(self.width * self.height);
        self.components_dirty = false;
        for y in 0..self.height as i32 {
            for x in 0..self.width as i32 {
                let point = Point::new(x, y);
                // Linking towards up and right covers every interior edge exactly once.
                for side in [Side::Up, Side::Right] {
                    if self.has_wall(&point, side) {
                        continue;
                    }
                    if let (Some(ix), Some(n_ix)) =
                        (self.get_ix(&point), self.get_ix(&side.step(&point)))
                    {
                        self.components.union(ix, n_ix);
                    }
                }
            }
        }
    }
}

impl Grid for WallGrid {
    fn in_bounds(&self, point: &Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as usize) < self.width
            && (point.y as usize) < self.height
    }

    fn has_wall(&self, point: &Point, side: Side) -> bool {
        self.walls(point) & side.bit() != 0
    }

    fn reachable(&self, start: &Point, goal: &Point) -> bool {
        !self.unreachable(start, goal)
    }
}

impl fmt::Display for WallGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in (0..self.height as i32).rev() {
            let mut top = String::from("+");
            let mut row = String::new();
            for x in 0..self.width as i32 {
                let p = Point::new(x, y);
                top.push_str(if self.has_wall(&p, Side::Up) { "---+" } else { "   +" });
                row.push(if self.has_wall(&p, Side::Left) { '|' } else { ' ' });
                row.push_str("   ");
            }
            row.push('|');
            writeln!(f, "{}", top)?;
            writeln!(f, "{}", row)?;
        }
        writeln!(f, "+{}", "---+".repeat(self.width))
    }
}
