//! Geometry primitives: [`Coord`], [`Dims`] and [`Direction`].
//!
//! Coordinates are `(row, col)` pairs. Rows grow downwards and columns grow
//! to the right, so `(0, 0)` is the top-left cell of a maze.

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Coord
// ---------------------------------------------------------------------------

/// A grid cell identified by row and column.
///
/// Equality compares both components. The total order is row-major, which
/// matches the linear index `row * columns + col` for any fixed grid width,
/// so sorting coordinates sorts them by linear index.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    #[cfg_attr(feature = "serde", serde(rename = "r"))]
    pub row: i32,
    #[cfg_attr(feature = "serde", serde(rename = "c"))]
    pub col: i32,
}

impl Coord {
    /// Create a new coordinate.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a coordinate shifted by (drow, dcol).
    #[inline]
    pub const fn shift(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// Linear index for a grid that is `columns` wide, computed in `usize`.
    ///
    /// Only meaningful for coordinates inside that grid; see [`Dims::index`]
    /// for the checked version.
    #[inline]
    pub const fn linear(self, columns: i32) -> usize {
        self.row as usize * columns as usize + self.col as usize
    }

    /// Whether `self` and `other` share a row or a column.
    #[inline]
    pub const fn is_straight_to(self, other: Coord) -> bool {
        self.row == other.row || self.col == other.col
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

impl Add for Coord {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Coord {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.row - rhs.row, self.col - rhs.col)
    }
}

// ---------------------------------------------------------------------------
// Dims
// ---------------------------------------------------------------------------

/// Grid dimensions. Valid coordinates satisfy `0 <= row < rows` and
/// `0 <= col < columns`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dims {
    pub rows: i32,
    pub columns: i32,
}

impl Dims {
    #[inline]
    pub const fn new(rows: i32, columns: i32) -> Self {
        Self { rows, columns }
    }

    /// Number of cells, zero if either dimension is non-positive.
    #[inline]
    pub fn len(self) -> usize {
        if self.is_empty() {
            return 0;
        }
        (self.rows as usize) * (self.columns as usize)
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.rows <= 0 || self.columns <= 0
    }

    /// Whether `c` lies inside the grid.
    #[inline]
    pub fn contains(self, c: Coord) -> bool {
        0 <= c.row && c.row < self.rows && 0 <= c.col && c.col < self.columns
    }

    /// Linear index of `c`, or `None` if it is out of bounds.
    #[inline]
    pub fn index(self, c: Coord) -> Option<usize> {
        if !self.contains(c) {
            return None;
        }
        Some(c.linear(self.columns))
    }

    /// Convert a linear index back to a coordinate.
    #[inline]
    pub fn coord(self, idx: usize) -> Coord {
        let w = self.columns.max(1) as usize;
        Coord::new((idx / w) as i32, (idx % w) as i32)
    }

    /// Row-major iterator over every coordinate, in linear-index order.
    #[inline]
    pub fn iter(self) -> DimsIter {
        DimsIter {
            dims: self,
            next: 0,
        }
    }
}

impl IntoIterator for Dims {
    type Item = Coord;
    type IntoIter = DimsIter;
    #[inline]
    fn into_iter(self) -> DimsIter {
        self.iter()
    }
}

impl fmt::Display for Dims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.columns)
    }
}

/// Row-major iterator over the coordinates of a [`Dims`].
#[derive(Clone, Debug)]
pub struct DimsIter {
    dims: Dims,
    next: usize,
}

impl Iterator for DimsIter {
    type Item = Coord;

    #[inline]
    fn next(&mut self) -> Option<Coord> {
        if self.next >= self.dims.len() {
            return None;
        }
        let c = self.dims.coord(self.next);
        self.next += 1;
        Some(c)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.dims.len().saturating_sub(self.next);
        (n, Some(n))
    }
}

impl ExactSizeIterator for DimsIter {}

// ---------------------------------------------------------------------------
// Direction
// ---------------------------------------------------------------------------

/// One of the eight compass directions between adjacent cells.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    NorthWest,
    North,
    NorthEast,
    West,
    East,
    SouthWest,
    South,
    SouthEast,
}

impl Direction {
    /// All directions in neighbor enumeration order.
    pub const ALL: [Direction; 8] = [
        Direction::NorthWest,
        Direction::North,
        Direction::NorthEast,
        Direction::West,
        Direction::East,
        Direction::SouthWest,
        Direction::South,
        Direction::SouthEast,
    ];

    /// The four orthogonal directions, in the same relative order as [`ALL`](Self::ALL).
    pub const CARDINAL: [Direction; 4] = [
        Direction::North,
        Direction::West,
        Direction::East,
        Direction::South,
    ];

    /// Unit offset as a `(drow, dcol)` coordinate.
    #[inline]
    pub const fn delta(self) -> Coord {
        match self {
            Direction::NorthWest => Coord::new(-1, -1),
            Direction::North => Coord::new(-1, 0),
            Direction::NorthEast => Coord::new(-1, 1),
            Direction::West => Coord::new(0, -1),
            Direction::East => Coord::new(0, 1),
            Direction::SouthWest => Coord::new(1, -1),
            Direction::South => Coord::new(1, 0),
            Direction::SouthEast => Coord::new(1, 1),
        }
    }

    /// Direction of the step `from -> to`, or `None` if they are not adjacent.
    pub fn between(from: Coord, to: Coord) -> Option<Direction> {
        let d = to - from;
        Self::ALL.into_iter().find(|dir| dir.delta() == d)
    }

    #[inline]
    pub const fn is_diagonal(self) -> bool {
        let d = self.delta();
        d.row != 0 && d.col != 0
    }

    /// The opposite direction.
    pub const fn reverse(self) -> Direction {
        match self {
            Direction::NorthWest => Direction::SouthEast,
            Direction::North => Direction::South,
            Direction::NorthEast => Direction::SouthWest,
            Direction::West => Direction::East,
            Direction::East => Direction::West,
            Direction::SouthWest => Direction::NorthEast,
            Direction::South => Direction::North,
            Direction::SouthEast => Direction::NorthWest,
        }
    }

    /// Arrow glyph pointing in this direction.
    ///
    /// Renderers label a node with `Direction::between(node, parent)` so
    /// the arrow points back along the parent link.
    pub const fn arrow(self) -> char {
        match self {
            Direction::NorthWest => '↖',
            Direction::North => '↑',
            Direction::NorthEast => '↗',
            Direction::West => '←',
            Direction::East => '→',
            Direction::SouthWest => '↙',
            Direction::South => '↓',
            Direction::SouthEast => '↘',
        }
    }
}

impl Add<Direction> for Coord {
    type Output = Coord;
    #[inline]
    fn add(self, rhs: Direction) -> Coord {
        self + rhs.delta()
    }
}
