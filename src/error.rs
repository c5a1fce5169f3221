use core::fmt;
use grid_util::point::Point;

/// Malformed input to a path query. A well-formed query without a path is not an error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PathError {
    StartOutOfBounds(Point),
    GoalOutOfBounds(Point),
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PathError::StartOutOfBounds(p) => write!(f, "start {} is outside the grid", p),
            PathError::GoalOutOfBounds(p) => write!(f, "goal {} is outside the grid", p),
        }
    }
}

impl std::error::Error for PathError {}
