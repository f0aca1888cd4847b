use std::fmt;
use thiserror::Error;


/// Where a rejected point came from in the caller's input
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointRole {
    Start,
    End,
    Waypoint(usize), // position in the waypoint list
    Tap,
}

impl fmt::Display for PointRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PointRole::Start => write!(f, "start"),
            PointRole::End => write!(f, "end"),
            PointRole::Waypoint(i) => write!(f, "waypoint {i}"),
            PointRole::Tap => write!(f, "tap"),
        }
    }
}


#[derive(Debug, Error)]
pub enum PathPlannerError {
    /// Unable to find a path to the goal
    #[error("no path found to the goal")]
    NoPathFound,

    /// A supplied coordinate is NaN or infinite
    #[error("invalid input: {role} point ({x}, {y}) has a non-finite coordinate")]
    InvalidInput { role: PointRole, x: f64, y: f64 },

    /// Tap landed outside the session's area
    #[error("point ({x}, {y}) is outside the tap area")]
    OutOfBounds { x: f64, y: f64 },
}
