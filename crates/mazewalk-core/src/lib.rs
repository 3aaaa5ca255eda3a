//! **mazewalk-core**: grid coordinates and the maze blocking model.
//!
//! A maze is a rectangular grid with blocked cells (obstacles) and blocked
//! edges between neighbouring cells (walls). [`MazeConfig`] is the plain
//! description drivers produce; [`Maze`] is the validated form whose
//! predicates decide whether a step between two adjacent cells is possible.

pub mod error;
pub mod geom;
pub mod maze;

pub use error::{ConfigError, Part};
pub use geom::{Coord, Dims, Direction};
pub use maze::{Maze, MazeConfig};
