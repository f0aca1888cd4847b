//! Shortest routes through tapped 2D points
//!
//! Every supplied point becomes a node of a complete graph weighted by
//! euclidean distance, and Dijkstra's algorithm finds the cheapest walk
//! from start to end.

pub mod errors;
pub mod geometry;
pub mod graph_algos;
pub mod path;
pub mod path_finder;
pub mod session;
mod collections;

pub use errors::{PathPlannerError, PointRole};
pub use geometry::{Distance, Point};
pub use path::Path;
pub use path_finder::{shortest_path, PathFinder, PathFinderConfig, Selection};
pub use session::{TapArea, TapSession};
