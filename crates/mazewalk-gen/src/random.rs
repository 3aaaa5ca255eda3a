//! Random maze generation.
//!
//! The start is placed in the top-left quarter of the grid and the goal in
//! the bottom-right quarter, then obstacles are drawn without replacement
//! from the remaining cells. Walls, if requested, are scattered on top.

use mazewalk_core::{ConfigError, Coord, MazeConfig};
use rand::{Rng, RngExt};

/// Parameters for [`MazeGen::random_maze`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RandomMaze {
    pub rows: i32,
    pub columns: i32,
    /// Number of obstacles, capped at the number of free cells.
    pub obstacles: usize,
    /// Number of walls, capped at the number of interior edges.
    pub walls: usize,
    pub cut_corners: bool,
    pub diagonal: bool,
}

impl Default for RandomMaze {
    fn default() -> Self {
        Self {
            rows: 10,
            columns: 10,
            obstacles: 25,
            walls: 0,
            cut_corners: false,
            diagonal: true,
        }
    }
}

/// Random maze generator driven by `rng`.
pub struct MazeGen<R: Rng> {
    pub rng: R,
}

impl<R: Rng> MazeGen<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generate a random maze description.
    ///
    /// The result is validated before it is returned, so a grid too small
    /// to hold distinct start and goal cells is reported as an error.
    pub fn random_maze(&mut self, params: &RandomMaze) -> Result<MazeConfig, ConfigError> {
        let (rows, columns) = (params.rows, params.columns);
        let mut cfg = MazeConfig::new(rows, columns, Coord::default(), Coord::default());
        cfg.cut_corners = params.cut_corners;
        cfg.diagonal = params.diagonal;
        if cfg.dims().is_empty() {
            // Let validation produce the error.
            cfg.build()?;
        }

        let bound_rows = (rows + 3) / 4;
        let bound_columns = (columns + 3) / 4;
        cfg.start = Coord::new(
            self.rng.random_range(0..bound_rows),
            self.rng.random_range(0..bound_columns),
        );
        cfg.goal = Coord::new(
            rows - 1 - self.rng.random_range(0..bound_rows),
            columns - 1 - self.rng.random_range(0..bound_columns),
        );

        let mut free: Vec<Coord> = cfg
            .dims()
            .iter()
            .filter(|&c| c != cfg.start && c != cfg.goal)
            .collect();
        for _ in 0..params.obstacles.min(free.len()) {
            let j = self.rng.random_range(0..free.len());
            cfg.obstacles.push(free.swap_remove(j));
        }

        self.scatter_walls(&mut cfg, params.walls);

        cfg.build()?;
        log::debug!(
            "generated {}x{} maze: start {} goal {} with {} obstacles, {} walls",
            rows,
            columns,
            cfg.start,
            cfg.goal,
            cfg.obstacles.len(),
            cfg.horizontal_walls.len() + cfg.vertical_walls.len()
        );
        Ok(cfg)
    }

    fn scatter_walls(&mut self, cfg: &mut MazeConfig, walls: usize) {
        // Only edges between two in-bounds cells are candidates.
        let mut edges: Vec<(bool, Coord)> = Vec::new();
        for c in cfg.dims() {
            if c.row + 1 < cfg.rows {
                edges.push((true, c));
            }
            if c.col + 1 < cfg.columns {
                edges.push((false, c));
            }
        }
        for _ in 0..walls.min(edges.len()) {
            let j = self.rng.random_range(0..edges.len());
            match edges.swap_remove(j) {
                (true, c) => cfg.horizontal_walls.push(c),
                (false, c) => cfg.vertical_walls.push(c),
            }
        }
    }
}
