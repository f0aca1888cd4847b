mod distance;

pub use distance::Distance;

use num_traits::Float;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};


/// Euclidean distance
/// hypot avoids overflowing on the squares, only lengths beyond T::MAX are infinite
pub fn euclidean<T>(x1: T, y1: T, x2: T, y2: T) -> T
where
    T: Float,
    {
    (x1 - x2).hypot(y1 - y2)
}

/// Total euclidean length of a polyline
/// Fewer than two points have no length
pub fn path_length(points: &[Point]) -> f64 {
    points
        .windows(2)
        .map(|pair| pair[0].distance(&pair[1]))
        .sum()
}


/// 2D Point
/// Screen space, not geographic
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance(&self, other: &Point) -> f64 {
        euclidean(self.x, self.y, other.x, other.y)
    }

    /// Both coordinates are finite
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Hashable identity by value
    /// -0.0 and 0.0 map to the same key
    pub(crate) fn key(&self) -> [u64; 2] {
        [(self.x + 0.0).to_bits(), (self.y + 0.0).to_bits()]
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_euclidean() {
        assert_eq!(euclidean(0.0, 0.0, 3.0, 4.0), 5.0);
        assert_eq!(euclidean(1.0f32, 1.0, 1.0, 1.0), 0.0);
    }

    #[test]
    fn test_euclidean_large_coordinates() {
        // squaring 1.5e154 overflows f64
        assert_eq!(euclidean(0.0, 0.0, 1.5e154, 0.0), 1.5e154);
        assert_eq!(euclidean(0.0, 3e200, 0.0, -3e200), 6e200);
        assert!(euclidean(-1.5e308, 0.0, 1.5e308, 0.0).is_infinite());
    }

    #[test]
    fn test_path_length() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(3.0, 4.0),
            Point::new(3.0, 10.0),
        ];
        assert_eq!(path_length(&points), 11.0);
        assert_eq!(path_length(&points[..1]), 0.0);
        assert_eq!(path_length(&[]), 0.0);
    }

    #[test]
    fn test_point_finite() {
        assert!(Point::new(1.0, -2.5).is_finite());
        assert!(!Point::new(f64::NAN, 0.0).is_finite());
        assert!(!Point::new(0.0, f64::NEG_INFINITY).is_finite());
    }

    #[test]
    fn test_point_key_signed_zero() {
        assert_eq!(Point::new(0.0, -0.0).key(), Point::new(-0.0, 0.0).key());
        assert_ne!(Point::new(1.0, 0.0).key(), Point::new(0.0, 1.0).key());
    }
}
