//! Maze sources for mazewalk drivers: built-in fixtures and random
//! generation.

pub mod fixtures;
pub mod random;

pub use fixtures::Fixture;
pub use random::{MazeGen, RandomMaze};
