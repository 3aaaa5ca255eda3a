//! The maze description ([`MazeConfig`]) and the validated blocking model
//! built from it ([`Maze`]).

use crate::error::{ConfigError, Part};
use crate::geom::{Coord, Dims};

/// Plain structural description of a maze.
///
/// This is what drivers hand to the core. It can come from a fixture, a
/// random generator, or a deserialized shareable string; the core does not
/// care which.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct MazeConfig {
    pub rows: i32,
    pub columns: i32,
    /// Allow a diagonal step to squeeze past a corner that is blocked on
    /// one side only.
    #[cfg_attr(feature = "serde", serde(default))]
    pub cut_corners: bool,
    /// Allow diagonal steps at all. When false the grid is 4-connected.
    #[cfg_attr(feature = "serde", serde(default = "default_diagonal"))]
    pub diagonal: bool,
    pub start: Coord,
    pub goal: Coord,
    #[cfg_attr(feature = "serde", serde(default))]
    pub obstacles: Vec<Coord>,
    /// Each entry blocks the edge between the cell and the cell below it.
    #[cfg_attr(feature = "serde", serde(default))]
    pub horizontal_walls: Vec<Coord>,
    /// Each entry blocks the edge between the cell and the cell to its right.
    #[cfg_attr(feature = "serde", serde(default))]
    pub vertical_walls: Vec<Coord>,
}

#[cfg(feature = "serde")]
fn default_diagonal() -> bool {
    true
}

impl MazeConfig {
    /// An open `rows x columns` maze with diagonal movement and no corner
    /// cutting.
    pub fn new(rows: i32, columns: i32, start: Coord, goal: Coord) -> Self {
        Self {
            rows,
            columns,
            cut_corners: false,
            diagonal: true,
            start,
            goal,
            obstacles: Vec::new(),
            horizontal_walls: Vec::new(),
            vertical_walls: Vec::new(),
        }
    }

    #[inline]
    pub fn dims(&self) -> Dims {
        Dims::new(self.rows, self.columns)
    }

    /// Validate and build the blocking model.
    pub fn build(&self) -> Result<Maze, ConfigError> {
        Maze::new(self)
    }
}

/// A validated, immutable maze: dimensions, endpoints, obstacles and walls,
/// plus the predicates deciding whether a step between adjacent cells is
/// possible.
///
/// Obstacle and wall sets are stored as bitmaps keyed by linear index, so
/// duplicate entries in the source description collapse into one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Maze {
    dims: Dims,
    cut_corners: bool,
    diagonal: bool,
    start: Coord,
    goal: Coord,
    obstacles: Vec<bool>,
    horizontal_walls: Vec<bool>,
    vertical_walls: Vec<bool>,
}

impl Maze {
    /// Validate `config` and build a maze from it.
    pub fn new(config: &MazeConfig) -> Result<Self, ConfigError> {
        let maze = Self::validate(config).inspect_err(|e| {
            log::debug!("rejected maze configuration: {e}");
        })?;
        Ok(maze)
    }

    fn validate(config: &MazeConfig) -> Result<Self, ConfigError> {
        let dims = config.dims();
        if dims.is_empty() {
            return Err(ConfigError::InvalidDimensions(dims));
        }

        let check = |what: Part, at: Coord| {
            if dims.contains(at) {
                Ok(())
            } else {
                Err(ConfigError::OutOfBounds { what, at, dims })
            }
        };
        check(Part::Start, config.start)?;
        check(Part::Goal, config.goal)?;
        if config.start == config.goal {
            return Err(ConfigError::StartIsGoal(config.start));
        }

        let len = dims.len();
        let fill = |what: Part, cells: &[Coord]| -> Result<Vec<bool>, ConfigError> {
            let mut set = vec![false; len];
            for &c in cells {
                check(what, c)?;
                set[c.linear(dims.columns)] = true;
            }
            Ok(set)
        };
        let obstacles = fill(Part::Obstacle, &config.obstacles)?;
        let horizontal_walls = fill(Part::HorizontalWall, &config.horizontal_walls)?;
        let vertical_walls = fill(Part::VerticalWall, &config.vertical_walls)?;

        for (what, at) in [(Part::Start, config.start), (Part::Goal, config.goal)] {
            if obstacles[at.linear(dims.columns)] {
                return Err(ConfigError::BlockedEndpoint { what, at });
            }
        }

        Ok(Self {
            dims,
            cut_corners: config.cut_corners,
            diagonal: config.diagonal,
            start: config.start,
            goal: config.goal,
            obstacles,
            horizontal_walls,
            vertical_walls,
        })
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    #[inline]
    pub fn dims(&self) -> Dims {
        self.dims
    }

    #[inline]
    pub fn start(&self) -> Coord {
        self.start
    }

    #[inline]
    pub fn goal(&self) -> Coord {
        self.goal
    }

    #[inline]
    pub fn cut_corners(&self) -> bool {
        self.cut_corners
    }

    #[inline]
    pub fn diagonal(&self) -> bool {
        self.diagonal
    }

    /// Obstacles in linear-index order.
    pub fn obstacles(&self) -> Vec<Coord> {
        self.collect(&self.obstacles)
    }

    /// Cells with a wall on their south edge, in linear-index order.
    pub fn horizontal_walls(&self) -> Vec<Coord> {
        self.collect(&self.horizontal_walls)
    }

    /// Cells with a wall on their east edge, in linear-index order.
    pub fn vertical_walls(&self) -> Vec<Coord> {
        self.collect(&self.vertical_walls)
    }

    /// The structural description of this maze, normalised (sorted, no
    /// duplicates).
    pub fn to_config(&self) -> MazeConfig {
        MazeConfig {
            rows: self.dims.rows,
            columns: self.dims.columns,
            cut_corners: self.cut_corners,
            diagonal: self.diagonal,
            start: self.start,
            goal: self.goal,
            obstacles: self.obstacles(),
            horizontal_walls: self.horizontal_walls(),
            vertical_walls: self.vertical_walls(),
        }
    }

    fn collect(&self, set: &[bool]) -> Vec<Coord> {
        set.iter()
            .enumerate()
            .filter(|&(_, &on)| on)
            .map(|(i, _)| self.dims.coord(i))
            .collect()
    }

    #[inline]
    fn lookup(&self, set: &[bool], c: Coord) -> bool {
        self.dims.index(c).is_some_and(|i| set[i])
    }

    // -----------------------------------------------------------------------
    // Blocking predicates
    // -----------------------------------------------------------------------

    /// Whether `c` lies inside the grid.
    #[inline]
    pub fn in_bounds(&self, c: Coord) -> bool {
        self.dims.contains(c)
    }

    /// Whether `c` is an obstacle. Out-of-bounds cells are not obstacles.
    #[inline]
    pub fn is_obstacle(&self, c: Coord) -> bool {
        self.lookup(&self.obstacles, c)
    }

    /// Whether `c` has a wall on its south edge.
    #[inline]
    pub fn has_horizontal_wall(&self, c: Coord) -> bool {
        self.lookup(&self.horizontal_walls, c)
    }

    /// Whether `c` has a wall on its east edge.
    #[inline]
    pub fn has_vertical_wall(&self, c: Coord) -> bool {
        self.lookup(&self.vertical_walls, c)
    }

    /// Whether obstacles prevent the step `from -> to` between adjacent
    /// cells.
    ///
    /// An occupied target always blocks. A straight step is never blocked
    /// by its flanking cells. A diagonal step looks at the two cells it
    /// passes between: with corner cutting it is blocked only when both
    /// are obstacles, without it when either one is.
    pub fn is_obstacle_blocked(&self, from: Coord, to: Coord) -> bool {
        if self.is_obstacle(to) {
            return true;
        }
        if from.is_straight_to(to) {
            return false;
        }
        let side1 = self.is_obstacle(Coord::new(from.row, to.col));
        let side2 = self.is_obstacle(Coord::new(to.row, from.col));
        if self.cut_corners {
            side1 && side2
        } else {
            side1 || side2
        }
    }

    /// Whether walls prevent the step `from -> to` between adjacent cells.
    ///
    /// A diagonal step crosses the corner shared by the 2x2 block holding
    /// both cells. With corner cutting only a corner sealed along a full
    /// axis blocks; without it any wall touching the corner does.
    pub fn is_wall_blocked(&self, from: Coord, to: Coord) -> bool {
        if from.col == to.col {
            // Horizontal walls live on the south edge of the upper cell.
            return self.has_horizontal_wall(Coord::new(from.row.min(to.row), from.col));
        }
        if from.row == to.row {
            // Vertical walls live on the east edge of the western cell.
            return self.has_vertical_wall(Coord::new(from.row, from.col.min(to.col)));
        }

        let top_left = Coord::new(from.row.min(to.row), from.col.min(to.col));
        let top_right = top_left.shift(0, 1);
        let bottom_left = top_left.shift(1, 0);
        if self.cut_corners {
            (self.has_horizontal_wall(top_left) && self.has_horizontal_wall(top_right))
                || (self.has_vertical_wall(top_left) && self.has_vertical_wall(bottom_left))
        } else {
            self.has_horizontal_wall(top_left)
                || self.has_vertical_wall(top_left)
                || self.has_horizontal_wall(top_right)
                || self.has_vertical_wall(bottom_left)
        }
    }

    /// Whether the step `from -> to` is impossible: `to` is out of bounds,
    /// or obstacles or walls block it. `from` must be in bounds.
    #[inline]
    pub fn is_blocked(&self, from: Coord, to: Coord) -> bool {
        !self.in_bounds(to) || self.is_obstacle_blocked(from, to) || self.is_wall_blocked(from, to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::Direction;

    fn open(rows: i32, columns: i32) -> MazeConfig {
        MazeConfig::new(rows, columns, Coord::new(0, 0), Coord::new(rows - 1, columns - 1))
    }

    /// Every in-bounds adjacent pair `(from, to)` that `maze` blocks.
    fn blocked_edges(maze: &Maze) -> Vec<(Coord, Coord)> {
        let mut out = Vec::new();
        for from in maze.dims() {
            for dir in Direction::ALL {
                let to = from + dir;
                if maze.in_bounds(to) && maze.is_blocked(from, to) {
                    out.push((from, to));
                }
            }
        }
        out
    }

    #[test]
    fn rejects_bad_dimensions() {
        let mut cfg = open(3, 3);
        cfg.rows = 0;
        assert_eq!(cfg.build(), Err(ConfigError::InvalidDimensions(Dims::new(0, 3))));
        cfg.rows = 3;
        cfg.columns = -2;
        assert!(matches!(cfg.build(), Err(ConfigError::InvalidDimensions(_))));
    }

    #[test]
    fn rejects_bad_endpoints() {
        let mut cfg = open(3, 3);
        cfg.goal = Coord::new(3, 0);
        assert!(matches!(
            cfg.build(),
            Err(ConfigError::OutOfBounds { what: Part::Goal, .. })
        ));

        let mut cfg = open(3, 3);
        cfg.goal = cfg.start;
        assert_eq!(cfg.build(), Err(ConfigError::StartIsGoal(Coord::new(0, 0))));

        let mut cfg = open(3, 3);
        cfg.obstacles.push(Coord::new(2, 2));
        assert_eq!(
            cfg.build(),
            Err(ConfigError::BlockedEndpoint {
                what: Part::Goal,
                at: Coord::new(2, 2)
            })
        );
    }

    #[test]
    fn rejects_out_of_bounds_obstacles_and_walls() {
        let mut cfg = open(3, 3);
        cfg.obstacles.push(Coord::new(-1, 1));
        assert!(matches!(
            cfg.build(),
            Err(ConfigError::OutOfBounds { what: Part::Obstacle, .. })
        ));
        let mut cfg = open(3, 3);
        cfg.vertical_walls.push(Coord::new(1, 3));
        assert!(matches!(
            cfg.build(),
            Err(ConfigError::OutOfBounds { what: Part::VerticalWall, .. })
        ));
    }

    #[test]
    fn duplicates_collapse() {
        let mut cfg = open(4, 4);
        cfg.obstacles = vec![Coord::new(1, 1), Coord::new(2, 1), Coord::new(1, 1)];
        cfg.horizontal_walls = vec![Coord::new(0, 3), Coord::new(0, 3)];
        let maze = cfg.build().unwrap();
        assert_eq!(maze.obstacles(), vec![Coord::new(1, 1), Coord::new(2, 1)]);
        assert_eq!(maze.horizontal_walls(), vec![Coord::new(0, 3)]);
        assert_eq!(maze.to_config().build().unwrap(), maze);
    }

    #[test]
    fn straight_moves_ignore_flanking_obstacles() {
        let mut cfg = open(3, 3);
        cfg.obstacles = vec![Coord::new(0, 1), Coord::new(2, 1)];
        let maze = cfg.build().unwrap();
        assert!(!maze.is_obstacle_blocked(Coord::new(1, 0), Coord::new(1, 1)));
        assert!(maze.is_obstacle_blocked(Coord::new(0, 0), Coord::new(0, 1)));
    }

    #[test]
    fn diagonal_between_two_obstacles_is_always_blocked() {
        let mut cfg = open(3, 3);
        cfg.obstacles = vec![Coord::new(0, 1), Coord::new(1, 0)];
        let (from, to) = (Coord::new(0, 0), Coord::new(1, 1));

        for cut in [false, true] {
            cfg.cut_corners = cut;
            let maze = cfg.build().unwrap();
            assert!(maze.is_obstacle_blocked(from, to), "cut_corners = {cut}");
            assert!(maze.is_obstacle_blocked(to, from), "cut_corners = {cut}");
        }
    }

    #[test]
    fn single_corner_obstacle() {
        let mut cfg = open(3, 3);
        cfg.obstacles = vec![Coord::new(0, 1)];
        let (from, to) = (Coord::new(0, 0), Coord::new(1, 1));

        cfg.cut_corners = false;
        let maze = cfg.build().unwrap();
        assert!(maze.is_obstacle_blocked(from, to));
        assert!(maze.is_obstacle_blocked(to, from));
        assert!(maze.is_obstacle_blocked(Coord::new(1, 2), Coord::new(0, 1)));

        cfg.cut_corners = true;
        let maze = cfg.build().unwrap();
        assert!(!maze.is_obstacle_blocked(from, to));
        assert!(!maze.is_obstacle_blocked(to, from));
    }

    #[test]
    fn horizontal_wall_blocks_exactly_one_edge_when_cutting() {
        let mut cfg = open(6, 6);
        cfg.cut_corners = true;
        cfg.horizontal_walls = vec![Coord::new(2, 3)];
        let maze = cfg.build().unwrap();
        assert_eq!(
            blocked_edges(&maze),
            vec![
                (Coord::new(2, 3), Coord::new(3, 3)),
                (Coord::new(3, 3), Coord::new(2, 3)),
            ]
        );
    }

    #[test]
    fn vertical_wall_blocks_exactly_one_edge_when_cutting() {
        let mut cfg = open(5, 5);
        cfg.cut_corners = true;
        cfg.vertical_walls = vec![Coord::new(1, 1)];
        let maze = cfg.build().unwrap();
        assert_eq!(
            blocked_edges(&maze),
            vec![
                (Coord::new(1, 1), Coord::new(1, 2)),
                (Coord::new(1, 2), Coord::new(1, 1)),
            ]
        );
    }

    #[test]
    fn single_wall_blocks_touching_diagonals_without_cutting() {
        let mut cfg = open(6, 6);
        cfg.horizontal_walls = vec![Coord::new(2, 3)];
        let maze = cfg.build().unwrap();
        // The wall's two end corners each carry two diagonals.
        assert!(maze.is_wall_blocked(Coord::new(2, 2), Coord::new(3, 3)));
        assert!(maze.is_wall_blocked(Coord::new(3, 2), Coord::new(2, 3)));
        assert!(maze.is_wall_blocked(Coord::new(2, 3), Coord::new(3, 4)));
        assert!(maze.is_wall_blocked(Coord::new(3, 4), Coord::new(2, 3)));
        assert!(!maze.is_wall_blocked(Coord::new(1, 2), Coord::new(2, 3)));
        assert_eq!(blocked_edges(&maze).len(), 2 + 8);
    }

    #[test]
    fn sealed_corner_blocks_even_when_cutting() {
        let mut cfg = open(4, 4);
        cfg.cut_corners = true;
        cfg.vertical_walls = vec![Coord::new(1, 1), Coord::new(2, 1)];
        let maze = cfg.build().unwrap();
        assert!(maze.is_wall_blocked(Coord::new(1, 1), Coord::new(2, 2)));
        assert!(maze.is_wall_blocked(Coord::new(2, 1), Coord::new(1, 2)));

        cfg.vertical_walls = vec![Coord::new(1, 1)];
        cfg.horizontal_walls = vec![Coord::new(1, 1)];
        let maze = cfg.build().unwrap();
        // An L-shaped pair does not seal a full axis.
        assert!(!maze.is_wall_blocked(Coord::new(1, 1), Coord::new(2, 2)));
    }

    #[test]
    fn out_of_bounds_targets_are_blocked() {
        let maze = open(2, 2).build().unwrap();
        assert!(maze.is_blocked(Coord::new(0, 0), Coord::new(-1, 0)));
        assert!(maze.is_blocked(Coord::new(1, 1), Coord::new(2, 2)));
        assert!(!maze.is_blocked(Coord::new(0, 0), Coord::new(1, 1)));
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn config_round_trip() {
        let mut cfg = MazeConfig::new(4, 5, Coord::new(0, 0), Coord::new(3, 4));
        cfg.cut_corners = true;
        cfg.obstacles = vec![Coord::new(1, 1)];
        cfg.horizontal_walls = vec![Coord::new(2, 2)];
        let json = serde_json::to_string(&cfg).unwrap();
        let back: MazeConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg, back);
    }

    #[test]
    fn reads_minimal_shared_data() {
        let json = r#"{"rows":3,"columns":3,"cutCorners":false,
            "start":{"r":0,"c":0},"goal":{"r":2,"c":2},
            "obstacles":[{"r":1,"c":1}]}"#;
        let cfg: MazeConfig = serde_json::from_str(json).unwrap();
        assert!(cfg.diagonal);
        assert!(cfg.horizontal_walls.is_empty());
        let maze = cfg.build().unwrap();
        assert!(maze.is_obstacle(Coord::new(1, 1)));
    }
}
