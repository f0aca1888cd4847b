use crate::collections::FxIndexSet;
use crate::geometry::{Distance, Point};


/// Complete graph over a set of points, built for a single computation
/// Nodes are arena indices, edge weights are a dense euclidean matrix
#[derive(Debug)]
pub(crate) struct PointGraph {
    points: Vec<Point>,
    weights: Vec<Distance>, // row major, points.len() squared
    start: usize,
    end: usize,
}

impl PointGraph {

    /// One node per input point: start is 0, end is 1, waypoints follow in order
    pub(crate) fn indexed(start: Point, end: Point, waypoints: &[Point]) -> Self {
        let mut points = Vec::with_capacity(waypoints.len() + 2);
        points.push(start);
        points.push(end);
        points.extend_from_slice(waypoints);

        Self::with_points(points, 0, 1)
    }

    /// Value-equal points share a node
    /// start is still 0, end is 0 when it sits on start
    pub(crate) fn deduplicated(start: Point, end: Point, waypoints: &[Point]) -> Self {
        let mut seen: FxIndexSet<[u64; 2]> = FxIndexSet::default();
        let mut points = Vec::with_capacity(waypoints.len() + 2);

        let mut insert = |point: Point| {
            let (index, new) = seen.insert_full(point.key());
            if new {
                points.push(point);
            }
            index
        };

        let start_index = insert(start);
        let end_index = insert(end);
        for point in waypoints {
            insert(*point);
        }

        Self::with_points(points, start_index, end_index)
    }

    fn with_points(points: Vec<Point>, start: usize, end: usize) -> Self {
        let n = points.len();
        let mut weights = vec![Distance::default(); n * n];
        for u in 0..n {
            for v in (u + 1)..n {
                let d = Distance::between(&points[u], &points[v]);
                weights[u * n + v] = d;
                weights[v * n + u] = d;
            }
        }

        Self { points, weights, start, end }
    }

    pub(crate) fn len(&self) -> usize {
        self.points.len()
    }

    pub(crate) fn start(&self) -> usize {
        self.start
    }

    pub(crate) fn end(&self) -> usize {
        self.end
    }

    pub(crate) fn point(&self, node: usize) -> Point {
        self.points[node]
    }

    /// Edge weight, None on the diagonal
    pub(crate) fn weight(&self, u: usize, v: usize) -> Option<Distance> {
        if u == v {
            return None;
        }
        Some(self.weights[u * self.len() + v])
    }

    /// Every other node with the edge weight to it
    pub(crate) fn neighbors(&self, node: usize) -> impl Iterator<Item = (usize, Distance)> + '_ {
        (0..self.len()).filter_map(move |other| self.weight(node, other).map(|w| (other, w)))
    }
}
