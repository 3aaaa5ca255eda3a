//! Step-wise A* search.
//!
//! [`Walker`] expands exactly one cell per call to [`step`](Walker::step),
//! so a driver can run it to completion, pace it from a timer, or advance
//! it one user-triggered step at a time. Between steps every piece of run
//! state is observable: the open set, the closed set, and the per-cell
//! [`SearchNode`]s.

use std::collections::BTreeSet;

use mazewalk_core::{ConfigError, Coord, Maze, MazeConfig};

use crate::cost::{Heuristic, step_cost};
use crate::neighbors::Neighbors;
use crate::node::{CellState, OpenKey, SearchNode};
use crate::path::reconstruct;

/// Step budget used by [`Walker::solve`] callers that have no better bound.
pub const DEFAULT_MAX_STEPS: usize = 1000;

/// Progress of the current run.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    Searching,
    FoundGoal,
    NoPath,
}

/// Result of a single [`Walker::step`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// The search is not finished; the next step will expand
    /// [`Walker::current`].
    Continuing,
    /// The goal was reached. Holds the cells strictly between start and
    /// goal, in order.
    GoalFound(Vec<Coord>),
    /// The open set ran dry: the goal is unreachable.
    NoPathExists,
}

/// Result of [`Walker::run`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// The goal was reached. Holds the cells strictly between start and
    /// goal, in order.
    GoalFound(Vec<Coord>),
    /// The goal is unreachable.
    NoPathExists,
    /// The step budget ran out before the search finished. Nothing is known
    /// about reachability.
    BudgetExhausted,
}

/// Cells touched by the most recent step.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepUpdate {
    /// Cell expanded by the step.
    pub expanded: Option<Coord>,
    /// Cells added to the open set, in neighbor order.
    pub opened: Vec<Coord>,
    /// Open cells whose path was improved through the expanded cell.
    pub adjusted: Vec<Coord>,
}

impl StepUpdate {
    fn clear(&mut self) {
        self.expanded = None;
        self.opened.clear();
        self.adjusted.clear();
    }
}

/// Incremental A* search over a [`Maze`].
///
/// The walker owns the maze and all run state. Steps must be driven
/// sequentially; there is no internal synchronisation.
pub struct Walker {
    maze: Maze,
    heuristic: Heuristic,
    nodes: Vec<Option<SearchNode>>,
    states: Vec<CellState>,
    open: BTreeSet<OpenKey>,
    closed: Vec<Coord>,
    current: Coord,
    iterations: usize,
    status: Status,
    path: Option<Vec<Coord>>,
    last: StepUpdate,
    nbuf: Neighbors,
}

impl Walker {
    /// Create a walker for `maze`, ready for its first step.
    pub fn new(maze: Maze) -> Self {
        Self::with_heuristic(maze, Heuristic::default())
    }

    /// Create a walker using the given heuristic.
    pub fn with_heuristic(maze: Maze, heuristic: Heuristic) -> Self {
        let len = maze.dims().len();
        let mut w = Self {
            current: maze.start(),
            maze,
            heuristic,
            nodes: vec![None; len],
            states: vec![CellState::Unseen; len],
            open: BTreeSet::new(),
            closed: Vec::with_capacity(len),
            iterations: 0,
            status: Status::Searching,
            path: None,
            last: StepUpdate::default(),
            nbuf: Neighbors::new(),
        };
        w.reset();
        w
    }

    /// Validate `config` and create a walker for it.
    pub fn from_config(config: &MazeConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(config.build()?))
    }

    /// Replace the maze with one built from `config` and reset.
    ///
    /// On error the walker keeps its previous maze and run state.
    pub fn configure(&mut self, config: &MazeConfig) -> Result<(), ConfigError> {
        let maze = config.build()?;
        let len = maze.dims().len();
        self.maze = maze;
        self.nodes.resize(len, None);
        self.states.resize(len, CellState::Unseen);
        self.reset();
        Ok(())
    }

    /// Change the heuristic and reset.
    pub fn set_heuristic(&mut self, heuristic: Heuristic) {
        self.heuristic = heuristic;
        self.reset();
    }

    /// Discard all run state and prepare a fresh run from the start cell.
    /// The maze is kept.
    pub fn reset(&mut self) {
        self.nodes.fill(None);
        self.states.fill(CellState::Unseen);
        self.open.clear();
        self.closed.clear();
        self.iterations = 0;
        self.status = Status::Searching;
        self.path = None;
        self.last.clear();
        self.setup();
    }

    fn setup(&mut self) {
        let start = self.maze.start();
        let h = self.heuristic.estimate(start, self.maze.goal());
        let si = self.idx(start);
        self.nodes[si] = Some(SearchNode {
            g: 0,
            h,
            f: h,
            parent: None,
        });
        self.states[si] = CellState::Current;
        self.current = start;
    }

    #[inline]
    fn idx(&self, c: Coord) -> usize {
        c.linear(self.maze.dims().columns)
    }

    // -----------------------------------------------------------------------
    // Stepping
    // -----------------------------------------------------------------------

    /// Expand the current cell and pick the next one.
    ///
    /// Once the search has finished, further calls change nothing and
    /// return the final outcome again.
    pub fn step(&mut self) -> StepOutcome {
        match self.status {
            Status::FoundGoal => {
                return StepOutcome::GoalFound(self.path.clone().unwrap_or_default());
            }
            Status::NoPath => return StepOutcome::NoPathExists,
            Status::Searching => {}
        }

        self.iterations += 1;
        self.last.clear();

        let current = self.current;
        let ci = self.idx(current);
        self.states[ci] = CellState::Closed;
        self.closed.push(current);
        self.last.expanded = Some(current);
        let current_g = self.nodes[ci].map_or(0, |n| n.g);

        log::trace!(
            "step {}: expanding {} (g={}, open={})",
            self.iterations,
            current,
            current_g,
            self.open.len()
        );

        let goal = self.maze.goal();
        let mut nbuf = std::mem::take(&mut self.nbuf);
        let columns = self.maze.dims().columns;
        let states = &self.states;
        let neighbors = nbuf.reachable(&self.maze, current, |c| {
            states[c.linear(columns)] == CellState::Closed
        });

        for &n in neighbors {
            let ni = self.idx(n);
            let g = current_g + step_cost(current, n);
            match (self.states[ni], self.nodes[ni]) {
                (CellState::Open, Some(mut node)) => {
                    if g >= node.g {
                        continue;
                    }
                    self.open.remove(&OpenKey::of(&node, ni));
                    node.g = g;
                    node.f = node.h + g;
                    node.parent = Some(current);
                    self.open.insert(OpenKey::of(&node, ni));
                    self.nodes[ni] = Some(node);
                    self.last.adjusted.push(n);
                }
                (CellState::Unseen, _) => {
                    let h = self.heuristic.estimate(n, goal);
                    let node = SearchNode {
                        g,
                        h,
                        f: g + h,
                        parent: Some(current),
                    };
                    self.open.insert(OpenKey::of(&node, ni));
                    self.nodes[ni] = Some(node);
                    self.states[ni] = CellState::Open;
                    self.last.opened.push(n);
                }
                // Closed cells are filtered out, and the only Current cell
                // was closed above.
                _ => {}
            }
        }
        self.nbuf = nbuf;

        let Some(next) = self.open.pop_first() else {
            self.status = Status::NoPath;
            log::debug!(
                "no path from {} to {} after {} steps",
                self.maze.start(),
                goal,
                self.iterations
            );
            return StepOutcome::NoPathExists;
        };

        let next_coord = self.maze.dims().coord(next.idx);
        self.states[next.idx] = CellState::Current;
        self.current = next_coord;

        if next_coord == goal {
            self.status = Status::FoundGoal;
            let path = reconstruct(self.maze.dims(), &self.nodes, self.maze.start(), goal);
            log::debug!(
                "found {} after {} steps: cost {}, {} waypoints",
                goal,
                self.iterations,
                next.f,
                path.len()
            );
            self.path = Some(path.clone());
            return StepOutcome::GoalFound(path);
        }

        StepOutcome::Continuing
    }

    /// Step until the search finishes or `max_steps` steps have been taken.
    ///
    /// Continues from the current state; call [`reset`](Self::reset) first
    /// (or use [`solve`](Self::solve)) for a fresh run.
    pub fn run(&mut self, max_steps: usize) -> RunOutcome {
        let mut steps = 0;
        while steps < max_steps && !self.is_finished() {
            self.step();
            steps += 1;
        }
        match self.status {
            Status::FoundGoal => RunOutcome::GoalFound(self.path.clone().unwrap_or_default()),
            Status::NoPath => RunOutcome::NoPathExists,
            Status::Searching => {
                log::debug!(
                    "step budget of {} exhausted with {} cells open",
                    max_steps,
                    self.open.len()
                );
                RunOutcome::BudgetExhausted
            }
        }
    }

    /// Reset, then [`run`](Self::run).
    pub fn solve(&mut self, max_steps: usize) -> RunOutcome {
        self.reset();
        self.run(max_steps)
    }

    // -----------------------------------------------------------------------
    // Observers
    // -----------------------------------------------------------------------

    #[inline]
    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    #[inline]
    pub fn heuristic(&self) -> Heuristic {
        self.heuristic
    }

    #[inline]
    pub fn status(&self) -> Status {
        self.status
    }

    #[inline]
    pub fn found_goal(&self) -> bool {
        self.status == Status::FoundGoal
    }

    #[inline]
    pub fn no_path(&self) -> bool {
        self.status == Status::NoPath
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.status != Status::Searching
    }

    /// Number of steps taken in this run.
    #[inline]
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// The cell the next step will expand. After the goal is found this is
    /// the goal; after a no-path result it is the last cell expanded.
    #[inline]
    pub fn current(&self) -> Coord {
        self.current
    }

    /// The open set, in the order cells would be taken from it.
    pub fn open(&self) -> impl Iterator<Item = Coord> + '_ {
        let dims = self.maze.dims();
        self.open.iter().map(move |k| dims.coord(k.idx))
    }

    #[inline]
    pub fn open_len(&self) -> usize {
        self.open.len()
    }

    /// Expanded cells, in expansion order.
    #[inline]
    pub fn closed(&self) -> &[Coord] {
        &self.closed
    }

    /// Search annotation for `c`, if it has been discovered in this run.
    pub fn node(&self, c: Coord) -> Option<&SearchNode> {
        self.maze.dims().index(c).and_then(|i| self.nodes[i].as_ref())
    }

    /// State of `c` in this run. Out-of-bounds cells are always
    /// [`Unseen`](CellState::Unseen).
    pub fn state(&self, c: Coord) -> CellState {
        self.maze
            .dims()
            .index(c)
            .map_or(CellState::Unseen, |i| self.states[i])
    }

    /// Cells strictly between start and goal, once the goal is found.
    pub fn path(&self) -> Option<&[Coord]> {
        self.path.as_deref()
    }

    /// Cost of the found path.
    pub fn path_cost(&self) -> Option<i32> {
        if !self.found_goal() {
            return None;
        }
        self.node(self.maze.goal()).map(|n| n.g)
    }

    /// What the most recent step changed.
    #[inline]
    pub fn last_update(&self) -> &StepUpdate {
        &self.last
    }
}
