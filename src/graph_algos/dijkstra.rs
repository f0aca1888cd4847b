use crate::errors::PathPlannerError;
use super::{trace_path, GraphNodeMap, NO_PARENT};

use std::{collections::BinaryHeap, hash::Hash, cmp::Ordering, fmt::Debug};
use num_traits::Zero;
use indexmap::map::Entry::{Occupied, Vacant};
use tracing::trace;




/// Identify the shortest path using Dijkstra's Algorithm
/// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
/// From start Node, traverse through graph until a settled node meets goal criteria
pub fn dijkstra<N, C, IT, NN, G>(start: N, neighbors: NN, goal: G) -> Result<Vec<N>, PathPlannerError>
where
    N: Eq + Hash + Clone + Debug,
    NN: Fn(&N) -> IT, // returns iterator of neighbors + costs
    IT: IntoIterator<Item = (N, C)>, // Iterator of neighbors + edge cost to neighbor node
    C: Zero + Ord + Copy + Debug,
    G: Fn(&N) -> bool, // node qualifier for goal
    {

    let (node_map, goal_index) = build_dijkstra_graph(start, neighbors, goal);

    match goal_index {
        Some(goal_index) => trace_path(&node_map, goal_index),
        None => Err(PathPlannerError::NoPathFound),
    }
}


/// Return a partial map of the graph up to the goal node
/// Nodes with lower cost than the goal node will be included
pub fn dijkstra_nodes_partial<N, C, IT, NN, G>(start: N, neighbors: NN, goal: G) -> GraphNodeMap<N, C>
where
    N: Eq + Hash + Clone + Debug,
    NN: Fn(&N) -> IT,
    IT: IntoIterator<Item = (N, C)>,
    C: Zero + Ord + Copy + Debug,
    G: Fn(&N) -> bool,
    {
    build_dijkstra_graph(start, neighbors, goal).0
}

/// Returns a full map of the graph, includes all (reachable) nodes and costs
pub fn dijkstra_nodes_full<N, C, IT, NN>(start: N, neighbors: NN) -> GraphNodeMap<N, C>
where
    N: Eq + Hash + Clone + Debug,
    NN: Fn(&N) -> IT,
    IT: IntoIterator<Item = (N, C)>,
    C: Zero + Ord + Copy + Debug,
    {
    build_dijkstra_graph(start, neighbors, |_| false).0
}


/// Traverses the graph using Dijkstra's algorithm
/// Returns a map of nodes with their smallest costs along with the index of the goal node
fn build_dijkstra_graph<N, C, IT, NN, G>(start: N, neighbors: NN, goal_fn: G) -> (GraphNodeMap<N, C>, Option<usize>)
where
    N: Eq + Hash + Clone + Debug,
    NN: Fn(&N) -> IT,
    IT: IntoIterator<Item = (N, C)>,
    C: Zero + Ord + Copy + Debug,
    G: Fn(&N) -> bool
    {

    // Nodes to visit - binary heap pops the cheapest entry first
    // seq breaks cost ties in push order
    let mut nodes_to_visit: BinaryHeap<NodeId<C>> = BinaryHeap::new();
    let mut seq: usize = 0;

    // Explored nodes, keyed by node, holding (parent_index, best cost so far)
    // The start node's parent is NO_PARENT
    let mut nodes_map: GraphNodeMap<N, C> = GraphNodeMap::default();

    let start_index = nodes_map.insert_full(start, (NO_PARENT, Zero::zero())).0;
    nodes_to_visit.push(NodeId {
        index: start_index,
        cost: Zero::zero(),
        seq,
    });

    while let Some(NodeId { cost, index, .. }) = nodes_to_visit.pop() {

        let Some((node, &(_, c))) = nodes_map.get_index(index) else {
            continue;
        };

        // Stale queue entry, a cheaper path to this node was already settled
        if cost > c {
            continue;
        }

        trace!(?node, ?cost, "settled");

        if goal_fn(node) {
            return (nodes_map, Some(index));
        }

        // neighbors borrow the node, the map is mutated below
        let node = node.clone();
        for (neighbor, edge_cost) in neighbors(&node) {

            let new_cost = edge_cost + c;

            let neighbor_index = match nodes_map.entry(neighbor) {
                Vacant(e) => {
                    let i = e.index();
                    e.insert((index, new_cost));
                    i
                }
                Occupied(mut e) => {
                    if e.get().1 > new_cost {
                        e.insert((index, new_cost));
                        e.index()
                    } else {
                        continue;
                    }
                }
            };

            seq += 1;
            nodes_to_visit.push(NodeId {
                index: neighbor_index,
                cost: new_cost,
                seq,
            });
        }
    }

    (nodes_map, None)
}


/// Queue entry
/// - for ordering we only need cost and a way to identify the node
/// - reversed so the BinaryHeap behaves as a min-heap
#[derive(Debug)]
struct NodeId<T> {
    index: usize,
    cost: T,
    seq: usize,
}

impl<T: Ord> Ord for NodeId<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.cost.cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}
impl<T: Ord> PartialOrd for NodeId<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<T: Ord> PartialEq for NodeId<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl<T: Ord> Eq for NodeId<T> {}
