mod graph;

use graph::PointGraph;

use crate::errors::{PathPlannerError, PointRole};
use crate::geometry::Point;
use crate::graph_algos::{dense::dijkstra_dense, dijkstra::dijkstra};
use crate::path::Path;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};


/// How Dijkstra picks the next node to settle
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(rename_all = "snake_case"))]
pub enum Selection {
    /// Priority queue, O(E log V)
    #[default]
    BinaryHeap,
    /// Scan every unsettled node, O(V^2)
    LinearScan,
}

/// Settings for a PathFinder
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct PathFinderConfig {
    pub selection: Selection,
    /// Merge points with equal coordinates into one node
    /// Off by default: every tap is its own node
    pub dedupe_points: bool,
}

impl PathFinderConfig {

    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    pub fn with_dedupe_points(mut self, dedupe_points: bool) -> Self {
        self.dedupe_points = dedupe_points;
        self
    }
}


/// Shortest route between two points through the complete graph
/// formed by them and a set of waypoints, weighted by euclidean distance
/// Holds no state between calls
#[derive(Clone, Copy, Debug, Default)]
pub struct PathFinder {
    config: PathFinderConfig,
}

impl PathFinder {

    pub fn new(config: PathFinderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PathFinderConfig {
        &self.config
    }

    /// Compute the minimum length path from start to end
    /// Every point is a node, every pair of nodes is joined by an edge
    /// Returns [start] when start and end coincide or end cannot be reached
    pub fn shortest_path(&self, start: Point, end: Point, waypoints: &[Point]) -> Result<Path, PathPlannerError> {

        validate_points(start, end, waypoints)?;

        if start == end {
            debug!(?start, "start and end coincide");
            return Ok(Path::single(start));
        }

        let graph = if self.config.dedupe_points {
            PointGraph::deduplicated(start, end, waypoints)
        } else {
            PointGraph::indexed(start, end, waypoints)
        };

        let nodes = match self.config.selection {
            Selection::BinaryHeap => dijkstra(
                graph.start(),
                |node| graph.neighbors(*node),
                |node| *node == graph.end(),
            ),
            Selection::LinearScan => dijkstra_dense(
                graph.len(),
                |u, v| graph.weight(u, v),
                graph.start(),
                graph.end(),
            ),
        };

        let nodes = match nodes {
            Ok(nodes) => nodes,
            Err(PathPlannerError::NoPathFound) => {
                debug!(?end, "end unreachable, staying at start");
                vec![graph.start()]
            }
            Err(e) => return Err(e),
        };

        let path = Path::new(nodes.into_iter().map(|node| graph.point(node)).collect())
            .unwrap_or_else(|| Path::single(start));

        debug!(
            nodes = graph.len(),
            hops = path.len() - 1,
            length = path.length(),
            selection = ?self.config.selection,
            "shortest path computed"
        );

        Ok(path)
    }
}


/// Shortest path with the default configuration
pub fn shortest_path(start: Point, end: Point, waypoints: &[Point]) -> Result<Path, PathPlannerError> {
    PathFinder::default().shortest_path(start, end, waypoints)
}


/// Reject NaN and infinite coordinates before any work is done
fn validate_points(start: Point, end: Point, waypoints: &[Point]) -> Result<(), PathPlannerError> {
    let labelled = [(PointRole::Start, &start), (PointRole::End, &end)]
        .into_iter()
        .chain(waypoints.iter().enumerate().map(|(i, p)| (PointRole::Waypoint(i), p)));

    for (role, point) in labelled {
        if !point.is_finite() {
            warn!(%role, x = point.x, y = point.y, "rejecting non-finite point");
            return Err(PathPlannerError::InvalidInput { role, x: point.x, y: point.y });
        }
    }

    Ok(())
}
