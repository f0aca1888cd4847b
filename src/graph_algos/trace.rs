use crate::errors::PathPlannerError;
use super::{GraphNodeMap, NO_PARENT};

/// Walk parent indices from the goal back to the root
/// Returns the ordered path as a vector of nodes from root to goal
pub(crate) fn trace_path<N, C>(node_map: &GraphNodeMap<N, C>, goal_index: usize) -> Result<Vec<N>, PathPlannerError>
where
    N: Clone,
{
    let mut path = Vec::new();
    let mut current_index = goal_index;

    while current_index != NO_PARENT {
        let Some((node, &(parent_index, _))) = node_map.get_index(current_index) else {
            return Err(PathPlannerError::NoPathFound);
        };
        path.push(node.clone());
        current_index = parent_index;

        // a parent chain longer than the map means it loops
        if path.len() > node_map.len() {
            return Err(PathPlannerError::NoPathFound);
        }
    }

    path.reverse();

    if path.is_empty() {
        return Err(PathPlannerError::NoPathFound);
    }

    Ok(path)
}
