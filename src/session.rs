use crate::errors::{PathPlannerError, PointRole};
use crate::geometry::Point;
use crate::path::Path;
use crate::path_finder::PathFinder;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};


/// Rectangular surface that accepts taps, origin at the top-left corner
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TapArea {
    pub width: f64,
    pub height: f64,
}

impl Default for TapArea {
    fn default() -> Self {
        Self { width: 300.0, height: 300.0 }
    }
}

impl TapArea {

    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// Edges count as inside
    pub fn contains(&self, point: &Point) -> bool {
        (0.0..=self.width).contains(&point.x) && (0.0..=self.height).contains(&point.y)
    }
}


/// Markers and route for one tap surface
/// Each tap routes from the origin to the tapped point through the earlier markers
/// Owned by the caller, the PathFinder itself keeps nothing between calls
#[derive(Clone, Debug)]
pub struct TapSession {
    area: TapArea,
    origin: Point,
    finder: PathFinder,
    markers: Vec<Point>,
    route: Option<Path>,
}

impl TapSession {

    /// Origin starts at the centre of the area
    pub fn new(area: TapArea, finder: PathFinder) -> Self {
        Self {
            area,
            origin: area.center(),
            finder,
            markers: Vec::new(),
            route: None,
        }
    }

    /// Route from somewhere other than the centre, e.g. the current position
    pub fn with_origin(mut self, origin: Point) -> Self {
        self.origin = origin;
        self
    }

    /// Move the origin, the stored route is kept until the next tap
    pub fn set_origin(&mut self, origin: Point) {
        self.origin = origin;
    }

    pub fn area(&self) -> &TapArea {
        &self.area
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn markers(&self) -> &[Point] {
        &self.markers
    }

    /// Route computed by the latest successful tap
    pub fn route(&self) -> Option<&Path> {
        self.route.as_ref()
    }

    /// Record a tap and recompute the route to it
    /// The session is left untouched on error
    pub fn tap(&mut self, point: Point) -> Result<&Path, PathPlannerError> {

        if !point.is_finite() {
            warn!(x = point.x, y = point.y, "rejecting non-finite tap");
            return Err(PathPlannerError::InvalidInput { role: PointRole::Tap, x: point.x, y: point.y });
        }
        if !self.area.contains(&point) {
            warn!(x = point.x, y = point.y, "tap outside area");
            return Err(PathPlannerError::OutOfBounds { x: point.x, y: point.y });
        }

        let route = self.finder.shortest_path(self.origin, point, &self.markers)?;
        debug!(markers = self.markers.len(), hops = route.len() - 1, "tap routed");

        self.markers.push(point);
        let route: &Path = self.route.insert(route);
        Ok(route)
    }

    /// Drop all markers and the route
    pub fn reset(&mut self) {
        self.markers.clear();
        self.route = None;
    }
}

impl Default for TapSession {
    fn default() -> Self {
        Self::new(TapArea::default(), PathFinder::default())
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::path_finder::{PathFinderConfig, Selection};

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn test_default_area_and_origin() {
        let session = TapSession::default();
        assert_eq!(session.area(), &TapArea::new(300.0, 300.0));
        assert_eq!(session.origin(), p(150.0, 150.0));
        assert!(session.markers().is_empty());
        assert!(session.route().is_none());
    }

    #[test]
    fn test_area_contains() {
        let area = TapArea::new(100.0, 50.0);
        assert!(area.contains(&p(0.0, 0.0)));
        assert!(area.contains(&p(100.0, 50.0)));
        assert!(!area.contains(&p(100.1, 10.0)));
        assert!(!area.contains(&p(10.0, -0.5)));
    }

    #[test]
    fn test_first_tap_is_direct() {
        let mut session = TapSession::default();
        let route = session.tap(p(150.0, 250.0)).unwrap();
        assert_eq!(route.points(), &[p(150.0, 150.0), p(150.0, 250.0)]);
        assert_eq!(route.length(), 100.0);
        assert_eq!(session.markers(), &[p(150.0, 250.0)]);
    }

    #[test]
    fn test_taps_route_through_earlier_markers() {
        let mut session = TapSession::default();
        session.tap(p(150.0, 200.0)).unwrap();
        let route = session.tap(p(150.0, 250.0)).unwrap().clone();

        // the earlier marker sits on the straight line, length is unchanged either way
        assert_eq!(route.start(), p(150.0, 150.0));
        assert_eq!(route.end(), p(150.0, 250.0));
        assert!((route.length() - 100.0).abs() < 1e-9);
        assert_eq!(session.markers().len(), 2);
        assert_eq!(session.route(), Some(&route));
    }

    #[test]
    fn test_rejected_taps_leave_state() {
        let mut session = TapSession::default();
        session.tap(p(10.0, 10.0)).unwrap();
        let before = session.route().cloned();

        assert!(matches!(
            session.tap(p(301.0, 10.0)),
            Err(PathPlannerError::OutOfBounds { .. })
        ));
        assert!(matches!(
            session.tap(p(f64::NAN, 10.0)),
            Err(PathPlannerError::InvalidInput { role: PointRole::Tap, .. })
        ));

        assert_eq!(session.markers(), &[p(10.0, 10.0)]);
        assert_eq!(session.route().cloned(), before);
    }

    #[test]
    fn test_non_finite_origin_is_reported() {
        let mut session = TapSession::default().with_origin(p(f64::INFINITY, 0.0));
        assert!(matches!(
            session.tap(p(1.0, 1.0)),
            Err(PathPlannerError::InvalidInput { role: PointRole::Start, .. })
        ));
        assert!(session.markers().is_empty());
    }

    #[test]
    fn test_custom_origin_and_reset() {
        let finder = PathFinder::new(PathFinderConfig::default().with_selection(Selection::LinearScan));
        let mut session = TapSession::new(TapArea::new(50.0, 50.0), finder).with_origin(p(0.0, 0.0));

        let route = session.tap(p(30.0, 40.0)).unwrap();
        assert_eq!(route.length(), 50.0);

        session.set_origin(p(30.0, 40.0));
        let route = session.tap(p(30.0, 40.0)).unwrap();
        assert_eq!(route.points(), &[p(30.0, 40.0)]);

        session.reset();
        assert!(session.markers().is_empty());
        assert!(session.route().is_none());
        assert_eq!(session.origin(), p(30.0, 40.0));
    }
}
