use grid_util::point::Point;
use smallvec::SmallVec;

/// One of the four sides of a cell. `Up` points towards increasing `y`, `Right` towards
/// increasing `x`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Up,
    Right,
    Down,
    Left,
}

impl Side {
    /// All sides in clockwise order. Neighbour generation follows this order, which in turn fixes
    /// the insertion order used to break ties during search.
    pub const ALL: [Side; 4] = [Side::Up, Side::Right, Side::Down, Side::Left];

    pub fn opposite(self) -> Side {
        match self {
            Side::Up => Side::Down,
            Side::Right => Side::Left,
            Side::Down => Side::Up,
            Side::Left => Side::Right,
        }
    }

    /// Bit used for this side in a wall mask.
    pub fn bit(self) -> u8 {
        match self {
            Side::Up => 1,
            Side::Right => 1 << 1,
            Side::Down => 1 << 2,
            Side::Left => 1 << 3,
        }
    }

    pub fn offset(self) -> (i32, i32) {
        match self {
            Side::Up => (0, 1),
            Side::Right => (1, 0),
            Side::Down => (0, -1),
            Side::Left => (-1, 0),
        }
    }

    /// The point one step from `point` towards this side.
    pub fn step(self, point: &Point) -> Point {
        let (dx, dy) = self.offset();
        Point::new(point.x + dx, point.y + dy)
    }

    /// The side of `from` that `to` lies on, if the two are orthogonally adjacent.
    pub fn between(from: &Point, to: &Point) -> Option<Side> {
        let delta = (to.x - from.x, to.y - from.y);
        Side::ALL.into_iter().find(|side| side.offset() == delta)
    }
}

/// The view of a grid the pathfinder needs. Implementations are treated as read-only snapshots
/// for the duration of a search.
pub trait Grid {
    fn in_bounds(&self, point: &Point) -> bool;

    /// Whether moving from `point` towards `side` is blocked. Only the flag of the cell being left
    /// is consulted, so implementations that want walls to block both ways must store them on
    /// both cells.
    fn has_wall(&self, point: &Point, side: Side) -> bool;

    /// The up to four orthogonal neighbours of `point` that lie within the grid.
    fn neighbors(&self, point: &Point) -> SmallVec<[Point; 4]> {
        Side::ALL
            .into_iter()
            .map(|side| side.step(point))
            .filter(|p| self.in_bounds(p))
            .collect()
    }

    /// Cheap pre-check run before searching. Returning `false` promises that no path exists;
    /// when in doubt, return `true`.
    fn reachable(&self, start: &Point, goal: &Point) -> bool {
        self.in_bounds(start) && self.in_bounds(goal)
    }
}

/// Neighbours of `point` that can be entered from it: in bounds, orthogonally adjacent and not
/// separated by a wall on the side of `point`.
pub fn open_neighbors<G: Grid + ?Sized>(grid: &G, point: &Point) -> SmallVec<[(Point, Side); 4]> {
    grid.neighbors(point)
        .into_iter()
        .filter_map(|n| Side::between(point, &n).map(|side| (n, side)))
        .filter(|(n, side)| grid.in_bounds(n) && !grid.has_wall(point, *side))
        .collect()
}
