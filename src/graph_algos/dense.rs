use crate::errors::PathPlannerError;

use std::fmt::Debug;
use num_traits::Zero;
use tracing::trace;


/// Dijkstra's Algorithm over a dense graph with linear-scan selection
/// Nodes are 0..node_count, `weight(u, v)` returns the edge cost or None if there is no edge
/// O(V^2), which beats a heap when every pair of nodes is connected
/// Ties on tentative cost go to the lowest node index
pub fn dijkstra_dense<C, W>(node_count: usize, weight: W, start: usize, goal: usize) -> Result<Vec<usize>, PathPlannerError>
where
    C: Zero + Ord + Copy + Debug,
    W: Fn(usize, usize) -> Option<C>,
{
    if start >= node_count || goal >= node_count {
        return Err(PathPlannerError::NoPathFound);
    }

    // None is an infinite tentative cost
    let mut cost: Vec<Option<C>> = vec![None; node_count];
    let mut settled = vec![false; node_count];
    let mut parent: Vec<Option<usize>> = vec![None; node_count];
    cost[start] = Some(Zero::zero());

    loop {
        // cheapest unsettled node with a finite cost
        let next = (0..node_count)
            .filter(|&n| !settled[n])
            .filter_map(|n| cost[n].map(|c| (c, n)))
            .min();

        let Some((c, u)) = next else {
            // graph exhausted before reaching the goal
            return Err(PathPlannerError::NoPathFound);
        };

        settled[u] = true;
        trace!(node = u, cost = ?c, "settled");

        if u == goal {
            break;
        }

        for v in 0..node_count {
            if v == u || settled[v] {
                continue;
            }
            let Some(edge_cost) = weight(u, v) else {
                continue;
            };
            let new_cost = c + edge_cost;
            if cost[v].is_none_or(|current| new_cost < current) {
                cost[v] = Some(new_cost);
                parent[v] = Some(u);
            }
        }
    }

    // walk back from the goal, parent chains only point at settled nodes
    let mut path = vec![goal];
    let mut current = goal;
    while let Some(p) = parent[current] {
        path.push(p);
        current = p;
    }
    path.reverse();

    Ok(path)
}
