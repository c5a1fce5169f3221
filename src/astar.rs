//! A* search over an implicit graph, shaped after
//! [pathfinding's astar function](https://docs.rs/pathfinding/latest/pathfinding/directed/astar/index.html)
//! but with floating point costs and a fully deterministic tie-break.
//!
//! All nodes live in a single insertion-ordered table keyed by node, so each node has exactly one
//! entry. Entries that are not yet closed form the frontier, closed entries form the visited set.
//! The binary heap is only an index over the frontier: when a node is improved in place a new
//! handle is pushed and the outdated one is skipped when popped.
use fxhash::FxBuildHasher;
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use log::{debug, trace};
use num_traits::Float;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

struct SearchNode<C> {
    parent: Option<usize>,
    g: C,
    h: C,
    closed: bool,
}

impl<C: Float> SearchNode<C> {
    fn f(&self) -> C {
        self.g + self.h
    }
}

struct FrontierHandle<C> {
    estimated_cost: C,
    heuristic: C,
    cost: C,
    index: usize,
}

impl<C: Float> PartialEq for FrontierHandle<C> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<C: Float> Eq for FrontierHandle<C> {}

impl<C: Float> PartialOrd for FrontierHandle<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<C: Float> Ord for FrontierHandle<C> {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap, so every key is compared in reverse: lowest F first, then
        // lowest H, then the node discovered earliest.
        let by_cost = |a: C, b: C| b.partial_cmp(&a).unwrap_or(Ordering::Equal);
        by_cost(self.estimated_cost, other.estimated_cost)
            .then_with(|| by_cost(self.heuristic, other.heuristic))
            .then_with(|| other.index.cmp(&self.index))
    }
}

fn reverse_path<N: Clone, C>(nodes: &FxIndexMap<N, SearchNode<C>>, end: usize) -> Vec<N> {
    let mut path: Vec<N> = std::iter::successors(Some(end), |&i| {
        nodes.get_index(i).and_then(|(_, node)| node.parent)
    })
    .filter_map(|i| nodes.get_index(i).map(|(point, _)| point.clone()))
    .collect();
    path.reverse();
    path
}

/// Runs A* from `start` until a node satisfying `success` is selected from the frontier.
///
/// `successors` yields the nodes reachable from a node together with the cost of the move and
/// must never yield negative costs. Returns the path including both endpoints and its cost, or
/// [None] once the frontier is exhausted.
pub fn astar<N, C, FN, IN, FH, FS>(
    start: &N,
    mut successors: FN,
    mut heuristic: FH,
    mut success: FS,
) -> Option<(Vec<N>, C)>
where
    N: Eq + Hash + Clone,
    C: Float,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = (N, C)>,
    FH: FnMut(&N) -> C,
    FS: FnMut(&N) -> bool,
{
    let mut nodes: FxIndexMap<N, SearchNode<C>> = FxIndexMap::default();
    let mut to_see = BinaryHeap::new();
    let h = heuristic(start);
    nodes.insert(
        start.clone(),
        SearchNode {
            parent: None,
            g: C::zero(),
            h,
            closed: false,
        },
    );
    to_see.push(FrontierHandle {
        estimated_cost: h,
        heuristic: h,
        cost: C::zero(),
        index: 0,
    });
    let mut expanded = 0usize;

    while let Some(FrontierHandle { cost, index, .. }) = to_see.pop() {
        let successors = {
            let Some((node, entry)) = nodes.get_index_mut(index) else {
                continue;
            };
            // Handles pushed before an in-place improvement carry a larger cost than the entry.
            if entry.closed || cost > entry.g {
                continue;
            }
            if success(node) {
                debug!("Goal selected after expanding {} nodes", expanded);
                let path = reverse_path(&nodes, index);
                return Some((path, cost));
            }
            entry.closed = true;
            expanded += 1;
            successors(node)
        };

        for (successor, move_cost) in successors {
            let new_cost = cost + move_cost;
            let n = match nodes.entry(successor) {
                Vacant(e) => {
                    let h = heuristic(e.key());
                    let n = e.index();
                    e.insert(SearchNode {
                        parent: Some(index),
                        g: new_cost,
                        h,
                        closed: false,
                    });
                    n
                }
                Occupied(mut e) => {
                    let n = e.index();
                    let entry = e.get_mut();
                    if entry.closed || entry.g <= new_cost {
                        continue;
                    }
                    trace!(
                        "Improved frontier node {} from {:?} to {:?}",
                        n,
                        entry.g.to_f64(),
                        new_cost.to_f64()
                    );
                    entry.g = new_cost;
                    entry.parent = Some(index);
                    n
                }
            };
            if let Some((_, entry)) = nodes.get_index(n) {
                to_see.push(FrontierHandle {
                    estimated_cost: entry.f(),
                    heuristic: entry.h,
                    cost: entry.g,
                    index: n,
                });
            }
        }
    }
    debug!("Frontier exhausted after expanding {} nodes", expanded);
    None
}
