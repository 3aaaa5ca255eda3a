//! Step-wise A* search over mazes with obstacles and walls.
//!
//! The search is driven through [`Walker`], which expands one cell per
//! [`step`](Walker::step) and exposes its open set, closed set and per-cell
//! scores between steps so a renderer can follow along.
//!
//! | Piece | Role |
//! |---|---|
//! | [`Neighbors`] | adjacent cells a step may move to |
//! | [`Heuristic`], [`step_cost`] | 10/14 cost model and goal estimates |
//! | [`Walker`] | open/closed bookkeeping and path reconstruction |

mod cost;
mod neighbors;
mod node;
mod path;
mod walker;

pub use cost::{DIAGONAL_COST, Heuristic, STRAIGHT_COST, euclidean, manhattan, step_cost};
pub use neighbors::Neighbors;
pub use node::{CellState, SearchNode};
pub use walker::{DEFAULT_MAX_STEPS, RunOutcome, Status, StepOutcome, StepUpdate, Walker};
