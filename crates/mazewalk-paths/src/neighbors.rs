use mazewalk_core::{Coord, Direction, Maze};

/// Cached neighbor computation helper.
///
/// Candidates are always produced in [`Direction::ALL`] order so that
/// identical inputs give identical output, which keeps tie-breaking in the
/// search reproducible.
pub struct Neighbors {
    buf: Vec<Coord>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(8),
        }
    }

    /// All eight cells adjacent to `c`, whether or not they are in bounds
    /// or blocked.
    pub fn all(&mut self, c: Coord) -> &[Coord] {
        self.buf.clear();
        self.buf.extend(Direction::ALL.iter().map(|&d| c + d));
        &self.buf
    }

    /// Cells one step away from `c` that the search may move to: in bounds,
    /// not closed, and not blocked by obstacles or walls. Diagonal
    /// candidates are skipped when `maze` disallows diagonal movement.
    pub fn reachable(
        &mut self,
        maze: &Maze,
        c: Coord,
        is_closed: impl Fn(Coord) -> bool,
    ) -> &[Coord] {
        self.buf.clear();
        let dirs: &[Direction] = if maze.diagonal() {
            &Direction::ALL
        } else {
            &Direction::CARDINAL
        };
        for &d in dirs {
            let n = c + d;
            if maze.in_bounds(n)
                && !is_closed(n)
                && !maze.is_obstacle_blocked(c, n)
                && !maze.is_wall_blocked(c, n)
            {
                self.buf.push(n);
            }
        }
        &self.buf
    }

    /// Whether `a` and `b` are adjacent (including diagonally).
    pub fn adjacent(&mut self, a: Coord, b: Coord) -> bool {
        self.all(a).contains(&b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazewalk_core::MazeConfig;

    fn maze(cfg: impl FnOnce(&mut MazeConfig)) -> Maze {
        let mut c = MazeConfig::new(3, 3, Coord::new(0, 0), Coord::new(2, 2));
        cfg(&mut c);
        c.build().unwrap()
    }

    #[test]
    fn all_is_fixed_order() {
        let mut nb = Neighbors::new();
        let got = nb.all(Coord::new(0, 0)).to_vec();
        assert_eq!(
            got,
            vec![
                Coord::new(-1, -1),
                Coord::new(-1, 0),
                Coord::new(-1, 1),
                Coord::new(0, -1),
                Coord::new(0, 1),
                Coord::new(1, -1),
                Coord::new(1, 0),
                Coord::new(1, 1),
            ]
        );
        assert!(nb.adjacent(Coord::new(1, 1), Coord::new(2, 2)));
        assert!(!nb.adjacent(Coord::new(1, 1), Coord::new(1, 1)));
        assert!(!nb.adjacent(Coord::new(0, 0), Coord::new(0, 2)));
    }

    #[test]
    fn reachable_filters_bounds_and_closed() {
        let m = maze(|_| {});
        let mut nb = Neighbors::new();
        let got = nb.reachable(&m, Coord::new(0, 0), |_| false).to_vec();
        assert_eq!(got, vec![Coord::new(0, 1), Coord::new(1, 0), Coord::new(1, 1)]);

        let got = nb
            .reachable(&m, Coord::new(1, 1), |c| c.row == 0)
            .to_vec();
        assert_eq!(got.len(), 5);
        assert!(got.iter().all(|c| c.row > 0));
    }

    #[test]
    fn reachable_respects_blocking() {
        let m = maze(|c| {
            c.obstacles = vec![Coord::new(0, 1)];
            c.horizontal_walls = vec![Coord::new(1, 1)];
        });
        let mut nb = Neighbors::new();
        let got = nb.reachable(&m, Coord::new(1, 1), |_| false).to_vec();
        // The obstacle also closes both northern diagonals without corner
        // cutting; the wall closes south and both southern diagonals.
        assert_eq!(got, vec![Coord::new(1, 0), Coord::new(1, 2)]);
    }

    #[test]
    fn cardinal_only_without_diagonals() {
        let m = maze(|c| c.diagonal = false);
        let mut nb = Neighbors::new();
        let got = nb.reachable(&m, Coord::new(1, 1), |_| false).to_vec();
        assert_eq!(
            got,
            vec![
                Coord::new(0, 1),
                Coord::new(1, 0),
                Coord::new(1, 2),
                Coord::new(2, 1),
            ]
        );
    }
}
