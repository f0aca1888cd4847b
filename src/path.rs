use crate::geometry::{path_length, Point};
#[cfg(feature = "serde")]
use serde::Serialize;


/// Ordered route from a start point to an end point
/// Never empty, so it is serialized for renderers but not deserialized
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Path {
    points: Vec<Point>,
}

impl Path {

    /// Returns None for an empty point list
    pub fn new(points: Vec<Point>) -> Option<Self> {
        if points.is_empty() {
            return None;
        }
        Some(Self { points })
    }

    /// Path that never leaves its start
    pub fn single(point: Point) -> Self {
        Self { points: vec![point] }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn start(&self) -> Point {
        self.points[0]
    }

    pub fn end(&self) -> Point {
        self.points[self.points.len() - 1]
    }

    /// Number of points, not the euclidean length
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false, a Path holds at least one point
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Total euclidean length
    pub fn length(&self) -> f64 {
        path_length(&self.points)
    }

    /// Consecutive (from, to) pairs, one per line segment to draw
    pub fn segments(&self) -> Vec<(Point, Point)> {
        self.points
            .windows(2)
            .map(|pair| (pair[0], pair[1]))
            .collect()
    }

    pub fn into_points(self) -> Vec<Point> {
        self.points
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_rejected() {
        assert!(Path::new(vec![]).is_none());
    }

    #[test]
    fn test_segments_and_length() {
        let path = Path::new(vec![
            Point::new(0.0, 0.0),
            Point::new(0.0, 3.0),
            Point::new(4.0, 3.0),
        ]).unwrap();

        assert_eq!(path.len(), 3);
        assert_eq!(path.length(), 7.0);
        assert_eq!(path.start(), Point::new(0.0, 0.0));
        assert_eq!(path.end(), Point::new(4.0, 3.0));
        assert_eq!(path.segments(), vec![
            (Point::new(0.0, 0.0), Point::new(0.0, 3.0)),
            (Point::new(0.0, 3.0), Point::new(4.0, 3.0)),
        ]);
    }

    #[test]
    fn test_single_point() {
        let path = Path::single(Point::new(2.0, 2.0));
        assert_eq!(path.start(), path.end());
        assert_eq!(path.length(), 0.0);
        assert!(path.segments().is_empty());
        assert!(!path.is_empty());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde() {
        let path = Path::new(vec![Point::new(1.0, 2.0), Point::new(3.0, 4.0)]).unwrap();
        let json = serde_json::to_string(&path).unwrap();
        assert_eq!(json, r#"{"points":[{"x":1.0,"y":2.0},{"x":3.0,"y":4.0}]}"#);
    }
}
