use std::fmt;

use crate::geom::{Coord, Dims};

/// Which part of a [`MazeConfig`](crate::MazeConfig) a [`ConfigError`] refers to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Part {
    Start,
    Goal,
    Obstacle,
    HorizontalWall,
    VerticalWall,
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Part::Start => "start",
            Part::Goal => "goal",
            Part::Obstacle => "obstacle",
            Part::HorizontalWall => "horizontal wall",
            Part::VerticalWall => "vertical wall",
        };
        f.write_str(s)
    }
}

/// Reasons a maze configuration is rejected.
///
/// Every variant is an invalid configuration; no maze is built when one is
/// returned.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Rows or columns are not positive.
    InvalidDimensions(Dims),
    /// A coordinate lies outside the grid.
    OutOfBounds { what: Part, at: Coord, dims: Dims },
    /// Start and goal are the same cell.
    StartIsGoal(Coord),
    /// Start or goal sits on an obstacle.
    BlockedEndpoint { what: Part, at: Coord },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions(d) => {
                write!(f, "invalid maze dimensions {d}: rows and columns must be positive")
            }
            Self::OutOfBounds { what, at, dims } => {
                write!(f, "{what} {at} is outside the {dims} grid")
            }
            Self::StartIsGoal(c) => write!(f, "start and goal are both {c}"),
            Self::BlockedEndpoint { what, at } => write!(f, "{what} {at} is on an obstacle"),
        }
    }
}

impl std::error::Error for ConfigError {}
