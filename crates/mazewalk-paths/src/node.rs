use std::cmp::Ordering;

use mazewalk_core::Coord;

/// Search annotation for one cell, created when the cell is first opened.
///
/// `h` is fixed at creation. `g`, `f` and `parent` may improve while the
/// cell is open and are frozen once it is closed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchNode {
    /// Best known cost from the start.
    pub g: i32,
    /// Estimated cost to the goal.
    pub h: i32,
    /// `g + h`.
    pub f: i32,
    /// Predecessor on the best known path; `None` only for the start.
    pub parent: Option<Coord>,
}

/// Where a cell stands in the current run.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    /// Not discovered yet.
    #[default]
    Unseen,
    /// Discovered, waiting in the open set.
    Open,
    /// Taken from the open set, to be expanded by the next step.
    Current,
    /// Expanded.
    Closed,
}

/// Open-set entry. Sorts by `f`, then `h`, then linear index, so the first
/// entry of an ordered set is the next cell to expand.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct OpenKey {
    pub(crate) f: i32,
    pub(crate) h: i32,
    pub(crate) idx: usize,
}

impl OpenKey {
    #[inline]
    pub(crate) fn of(node: &SearchNode, idx: usize) -> Self {
        Self {
            f: node.f,
            h: node.h,
            idx,
        }
    }
}

impl Ord for OpenKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.f
            .cmp(&other.f)
            .then(self.h.cmp(&other.h))
            .then(self.idx.cmp(&other.idx))
    }
}

impl PartialOrd for OpenKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn search_node_uses_short_coordinate_names() {
        let node = SearchNode {
            g: 24,
            h: 30,
            f: 54,
            parent: Some(Coord::new(1, 1)),
        };
        let json = serde_json::to_string(&node).unwrap();
        assert_eq!(json, r#"{"g":24,"h":30,"f":54,"parent":{"r":1,"c":1}}"#);
        let back: SearchNode = serde_json::from_str(&json).unwrap();
        assert_eq!(node, back);
    }
}
