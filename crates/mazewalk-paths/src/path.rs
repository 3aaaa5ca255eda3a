use mazewalk_core::{Coord, Dims};

use crate::node::SearchNode;

/// Walk parent links back from `goal` and return the cells strictly
/// between `start` and `goal`, in start-to-goal order.
///
/// Must only be called once the goal has been reached, when an unbroken
/// parent chain from `goal` to `start` exists.
pub(crate) fn reconstruct(
    dims: Dims,
    nodes: &[Option<SearchNode>],
    start: Coord,
    goal: Coord,
) -> Vec<Coord> {
    let parent_of = |c: Coord| {
        dims.index(c)
            .and_then(|i| nodes[i].as_ref())
            .and_then(|n| n.parent)
    };

    let mut path = Vec::new();
    let mut c = goal;
    while let Some(parent) = parent_of(c) {
        if parent == start {
            break;
        }
        path.push(parent);
        debug_assert!(path.len() <= dims.len(), "cycle in parent links");
        c = parent;
    }
    debug_assert!(
        parent_of(c) == Some(start),
        "parent chain from {goal} does not reach {start}"
    );
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain(dims: Dims, links: &[(Coord, Coord)]) -> Vec<Option<SearchNode>> {
        let mut nodes = vec![None; dims.len()];
        for &(child, parent) in links {
            nodes[dims.index(child).unwrap()] = Some(SearchNode {
                g: 0,
                h: 0,
                f: 0,
                parent: Some(parent),
            });
        }
        nodes
    }

    #[test]
    fn interior_only_in_start_to_goal_order() {
        let dims = Dims::new(1, 4);
        let c = |col| Coord::new(0, col);
        let nodes = chain(dims, &[(c(1), c(0)), (c(2), c(1)), (c(3), c(2))]);
        assert_eq!(reconstruct(dims, &nodes, c(0), c(3)), vec![c(1), c(2)]);
    }

    #[test]
    fn adjacent_endpoints_give_empty_path() {
        let dims = Dims::new(2, 2);
        let (s, g) = (Coord::new(0, 0), Coord::new(1, 1));
        let nodes = chain(dims, &[(g, s)]);
        assert!(reconstruct(dims, &nodes, s, g).is_empty());
    }
}
