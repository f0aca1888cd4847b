use std::{cmp::Ordering, fmt, ops::Add};
use num_traits::Zero;

use super::Point;


/// Non-negative length usable as a graph cost
/// Graph algorithms need `Ord` costs, which plain f64 is not
/// NaN is never stored so the total order agrees with numeric order
#[derive(Clone, Copy, Debug, Default)]
pub struct Distance(f64);

impl Distance {

    /// None for NaN or negative values
    pub fn new(value: f64) -> Option<Self> {
        if value.is_nan() || value < 0.0 {
            return None;
        }
        // normalise -0.0
        Some(Self(value + 0.0))
    }

    /// Distance between two points
    pub fn between(a: &Point, b: &Point) -> Self {
        // hypot is never negative, and only NaN for NaN input
        Self::new(a.distance(b)).unwrap_or(Self(f64::INFINITY))
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl Add for Distance {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Zero for Distance {
    fn zero() -> Self {
        Self(0.0)
    }

    fn is_zero(&self) -> bool {
        self.0 == 0.0
    }
}

impl Ord for Distance {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}
impl PartialOrd for Distance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl PartialEq for Distance {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl Eq for Distance {}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
