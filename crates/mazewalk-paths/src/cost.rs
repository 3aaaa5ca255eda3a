use mazewalk_core::Coord;

/// Cost of a straight (orthogonal) step.
pub const STRAIGHT_COST: i32 = 10;

/// Cost of a diagonal step, √2 × 10 rounded.
pub const DIAGONAL_COST: i32 = 14;

/// Manhattan (L1) distance between two cells.
#[inline]
pub fn manhattan(a: Coord, b: Coord) -> i32 {
    (a.row - b.row).abs() + (a.col - b.col).abs()
}

/// Euclidean (L2) distance between two cells.
#[inline]
pub fn euclidean(a: Coord, b: Coord) -> f64 {
    let dr = f64::from(a.row - b.row);
    let dc = f64::from(a.col - b.col);
    (dr * dr + dc * dc).sqrt()
}

/// Cost of the step between adjacent cells `a` and `b`.
#[inline]
pub fn step_cost(a: Coord, b: Coord) -> i32 {
    if a.is_straight_to(b) {
        STRAIGHT_COST
    } else {
        DIAGONAL_COST
    }
}

/// Estimate of the remaining cost from a cell to the goal.
///
/// Neither estimate is admissible once diagonal steps are allowed: two
/// straight steps cost 20 under [`Manhattan`](Heuristic::Manhattan) but a
/// diagonal step only 14. The search still terminates correctly, but the
/// path it finds is not guaranteed to be the cheapest.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Heuristic {
    /// Manhattan distance × 10.
    #[default]
    Manhattan,
    /// Euclidean distance × 10, rounded down.
    Euclidean,
}

impl Heuristic {
    #[inline]
    pub fn estimate(self, from: Coord, to: Coord) -> i32 {
        match self {
            Heuristic::Manhattan => manhattan(from, to) * STRAIGHT_COST,
            Heuristic::Euclidean => (euclidean(from, to) * f64::from(STRAIGHT_COST)).floor() as i32,
        }
    }
}
