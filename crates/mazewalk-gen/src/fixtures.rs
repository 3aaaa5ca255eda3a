//! Hand-made example mazes.

use mazewalk_core::{Coord, MazeConfig};

/// Rows and columns of every fixture.
pub const FIXTURE_SIZE: i32 = 10;

/// A built-in example maze.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Fixture {
    /// An L-shaped run of obstacles between start and goal.
    Detour,
    /// [`Detour`](Fixture::Detour) with two horizontal walls narrowing the
    /// way round.
    WalledDetour,
    /// A single obstacle directly between start and goal.
    SingleObstacle,
    /// Twenty-five scattered obstacles.
    Scattered,
}

const SCATTERED: [(i32, i32); 25] = [
    (5, 5),
    (6, 9),
    (0, 2),
    (6, 8),
    (6, 6),
    (3, 8),
    (9, 2),
    (1, 1),
    (4, 4),
    (3, 5),
    (6, 4),
    (3, 9),
    (2, 9),
    (0, 0),
    (1, 0),
    (2, 7),
    (8, 5),
    (0, 5),
    (8, 7),
    (1, 2),
    (6, 3),
    (9, 0),
    (6, 7),
    (8, 6),
    (3, 0),
];

fn coords(cells: &[(i32, i32)]) -> Vec<Coord> {
    cells.iter().map(|&(r, c)| Coord::new(r, c)).collect()
}

impl Fixture {
    pub const ALL: [Fixture; 4] = [
        Fixture::Detour,
        Fixture::WalledDetour,
        Fixture::SingleObstacle,
        Fixture::Scattered,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Fixture::Detour => "detour",
            Fixture::WalledDetour => "walled-detour",
            Fixture::SingleObstacle => "single-obstacle",
            Fixture::Scattered => "scattered",
        }
    }

    pub fn from_name(name: &str) -> Option<Fixture> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }

    /// The fixture's maze description, without corner cutting.
    pub fn config(self) -> MazeConfig {
        let n = FIXTURE_SIZE;
        match self {
            Fixture::Detour | Fixture::WalledDetour => {
                let mut cfg = MazeConfig::new(n, n, Coord::new(2, 2), Coord::new(3, 6));
                cfg.obstacles = coords(&[(3, 1), (3, 2), (3, 3), (3, 4), (2, 4), (1, 4)]);
                if self == Fixture::WalledDetour {
                    cfg.horizontal_walls = coords(&[(1, 5), (1, 6)]);
                }
                cfg
            }
            Fixture::SingleObstacle => {
                let mut cfg = MazeConfig::new(n, n, Coord::new(1, 1), Coord::new(1, 3));
                cfg.obstacles = vec![Coord::new(1, 2)];
                cfg
            }
            Fixture::Scattered => {
                let mut cfg = MazeConfig::new(n, n, Coord::new(9, 1), Coord::new(4, 5));
                cfg.obstacles = coords(&SCATTERED);
                cfg
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_fixture_is_valid() {
        for f in Fixture::ALL {
            let maze = f.config().build().unwrap();
            assert_eq!(maze.dims().len(), 100);
            assert_eq!(Fixture::from_name(f.name()), Some(f));
        }
        assert_eq!(Fixture::from_name("nope"), None);
    }

    #[test]
    fn scattered_has_distinct_obstacles() {
        let maze = Fixture::Scattered.config().build().unwrap();
        assert_eq!(maze.obstacles().len(), 25);
    }
}
