//! Shared pieces of the mazewalk terminal driver: where a maze comes from,
//! and how a walker's state is drawn as text.

use std::fmt;

use mazewalk_core::{ConfigError, Coord, Direction, MazeConfig};
use mazewalk_gen::{Fixture, MazeGen, RandomMaze};
use mazewalk_paths::{CellState, Walker};
use rand::SeedableRng;
use rand::rngs::StdRng;

// ---------------------------------------------------------------------------
// Maze sources
// ---------------------------------------------------------------------------

/// Where the driver takes its maze from.
#[derive(Clone, Debug)]
pub enum Source {
    /// A serialized [`MazeConfig`] in JSON.
    Data(String),
    /// A random maze; `seed` makes it reproducible.
    Random { params: RandomMaze, seed: Option<u64> },
    Fixture(Fixture),
}

/// Settings applied on top of whatever the source produced.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub rows: Option<i32>,
    pub columns: Option<i32>,
    pub cut_corners: Option<bool>,
    pub diagonal: Option<bool>,
}

impl Overrides {
    fn apply(&self, cfg: &mut MazeConfig) {
        if let Some(rows) = self.rows {
            cfg.rows = rows;
        }
        if let Some(columns) = self.columns {
            cfg.columns = columns;
        }
        if let Some(cut) = self.cut_corners {
            cfg.cut_corners = cut;
        }
        if let Some(diagonal) = self.diagonal {
            cfg.diagonal = diagonal;
        }
    }
}

/// Errors the driver can hit while preparing a maze.
#[derive(Debug)]
pub enum DemoError {
    /// `--data` was not a valid maze description.
    Data(serde_json::Error),
    Config(ConfigError),
}

impl fmt::Display for DemoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Data(e) => write!(f, "cannot read maze data: {e}"),
            Self::Config(e) => write!(f, "invalid maze: {e}"),
        }
    }
}

impl std::error::Error for DemoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Data(e) => Some(e),
            Self::Config(e) => Some(e),
        }
    }
}

impl From<serde_json::Error> for DemoError {
    fn from(e: serde_json::Error) -> Self {
        Self::Data(e)
    }
}

impl From<ConfigError> for DemoError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

/// Produce a validated maze description from `source` and `overrides`.
///
/// For random mazes the overrides shape the generator parameters instead
/// of being applied afterwards.
pub fn load_config(source: &Source, overrides: &Overrides) -> Result<MazeConfig, DemoError> {
    let cfg = match source {
        Source::Data(json) => {
            let mut cfg: MazeConfig = serde_json::from_str(json)?;
            overrides.apply(&mut cfg);
            cfg
        }
        Source::Fixture(f) => {
            let mut cfg = f.config();
            overrides.apply(&mut cfg);
            cfg
        }
        Source::Random { params, seed } => {
            let mut params = params.clone();
            params.rows = overrides.rows.unwrap_or(params.rows);
            params.columns = overrides.columns.unwrap_or(params.columns);
            params.cut_corners = overrides.cut_corners.unwrap_or(params.cut_corners);
            params.diagonal = overrides.diagonal.unwrap_or(params.diagonal);
            match seed {
                Some(seed) => MazeGen::new(StdRng::seed_from_u64(*seed)).random_maze(&params)?,
                None => MazeGen::new(rand::rng()).random_maze(&params)?,
            }
        }
    };
    cfg.build()?;
    Ok(cfg)
}

/// The shareable form of a maze.
pub fn share_data(cfg: &MazeConfig) -> Result<String, DemoError> {
    Ok(serde_json::to_string(cfg)?)
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

fn glyph(w: &Walker, c: Coord, arrows: bool) -> char {
    let maze = w.maze();
    if c == maze.start() {
        return 'S';
    }
    if c == maze.goal() {
        return 'G';
    }
    if maze.is_obstacle(c) {
        return '#';
    }
    if w.path().is_some_and(|p| p.contains(&c)) {
        return '*';
    }
    match w.state(c) {
        CellState::Current => '@',
        CellState::Open => {
            let parent = w.node(c).and_then(|n| n.parent);
            match parent.and_then(|p| Direction::between(c, p)) {
                Some(d) if arrows => d.arrow(),
                _ => 'o',
            }
        }
        CellState::Closed => '.',
        CellState::Unseen => ' ',
    }
}

/// Draw the maze and the walker's progress.
///
/// `S`/`G` mark the endpoints, `#` obstacles, `*` the found path, `@` the
/// cell to expand next, `o` open cells (or an arrow towards their parent
/// when `arrows` is set) and `.` closed cells. Vertical walls are drawn as
/// `|` between cells; horizontal walls as `-` on a line below their cell.
pub fn render(w: &Walker, arrows: bool) -> String {
    let maze = w.maze();
    let dims = maze.dims();
    let show_horizontal = !maze.horizontal_walls().is_empty();
    let border = format!("+{}+\n", "-".repeat((2 * dims.columns - 1).max(0) as usize));

    let mut out = border.clone();
    for row in 0..dims.rows {
        out.push('|');
        for col in 0..dims.columns {
            let c = Coord::new(row, col);
            out.push(glyph(w, c, arrows));
            if col + 1 < dims.columns {
                out.push(if maze.has_vertical_wall(c) { '|' } else { ' ' });
            }
        }
        out.push_str("|\n");

        if show_horizontal && row + 1 < dims.rows {
            out.push('|');
            for col in 0..dims.columns {
                let c = Coord::new(row, col);
                out.push(if maze.has_horizontal_wall(c) { '-' } else { ' ' });
                if col + 1 < dims.columns {
                    out.push(' ');
                }
            }
            out.push_str("|\n");
        }
    }
    out.push_str(&border);
    out
}

/// One-line description of where the search stands.
pub fn summary(w: &Walker) -> String {
    let head = format!(
        "steps: {}  open: {}  closed: {}",
        w.iterations(),
        w.open_len(),
        w.closed().len()
    );
    match (w.path(), w.path_cost()) {
        (Some(path), Some(cost)) => {
            let plural = if path.len() == 1 { "" } else { "s" };
            format!("{head}  path found: cost {cost}, {} waypoint{plural}", path.len())
        }
        _ if w.no_path() => format!("{head}  no path"),
        _ => format!("{head}  current {}", w.current()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazewalk_paths::{DEFAULT_MAX_STEPS, RunOutcome};

    #[test]
    fn renders_a_solved_maze() {
        let mut cfg = MazeConfig::new(3, 3, Coord::new(0, 0), Coord::new(2, 2));
        cfg.cut_corners = true;
        let mut w = Walker::from_config(&cfg).unwrap();
        assert_eq!(w.run(DEFAULT_MAX_STEPS), RunOutcome::GoalFound(vec![Coord::new(1, 1)]));
        let expected = "\
+-----+
|S o o|
|o * o|
|o o G|
+-----+
";
        assert_eq!(render(&w, false), expected);
        let with_arrows = "\
+-----+
|S ← ↙|
|↑ * ←|
|↗ ↑ G|
+-----+
";
        assert_eq!(render(&w, true), with_arrows);
        assert_eq!(
            summary(&w),
            "steps: 2  open: 6  closed: 2  path found: cost 28, 1 waypoint"
        );
    }

    #[test]
    fn renders_walls_and_obstacles() {
        let mut cfg = MazeConfig::new(2, 3, Coord::new(0, 0), Coord::new(1, 2));
        cfg.obstacles = vec![Coord::new(1, 1)];
        cfg.vertical_walls = vec![Coord::new(0, 1)];
        cfg.horizontal_walls = vec![Coord::new(0, 0)];
        let mut w = Walker::from_config(&cfg).unwrap();
        w.step();
        // Only (0,1) is reachable from the start; it becomes current.
        let expected = "\
+-----+
|S @| |
|-    |
|  # G|
+-----+
";
        assert_eq!(render(&w, true), expected);
        assert_eq!(summary(&w), "steps: 1  open: 0  closed: 1  current (0,1)");
    }

    #[test]
    fn data_is_read_and_overridden() {
        let cfg = Fixture::SingleObstacle.config();
        let json = share_data(&cfg).unwrap();
        let overrides = Overrides {
            cut_corners: Some(true),
            ..Overrides::default()
        };
        let back = load_config(&Source::Data(json), &overrides).unwrap();
        assert!(back.cut_corners);
        assert_eq!(back.obstacles, cfg.obstacles);

        let shrunk = Overrides {
            rows: Some(1),
            ..Overrides::default()
        };
        assert!(matches!(
            load_config(&Source::Fixture(Fixture::Scattered), &shrunk),
            Err(DemoError::Config(_))
        ));
        assert!(matches!(
            load_config(&Source::Data("{".into()), &Overrides::default()),
            Err(DemoError::Data(_))
        ));
    }

    #[test]
    fn seeded_random_source_is_stable() {
        let source = Source::Random {
            params: RandomMaze::default(),
            seed: Some(42),
        };
        let overrides = Overrides {
            rows: Some(12),
            ..Overrides::default()
        };
        let a = load_config(&source, &overrides).unwrap();
        let b = load_config(&source, &overrides).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.rows, 12);
    }
}
