use num_traits::Float;
use serde::{Deserialize, Serialize};
use crate::errors::GeometryError;


/// Tolerance used by the orientation predicates
const EPSILON: f64 = 1e-9;

/// Euclidean distance
pub fn euclidean<T>(x1: T, y1: T, x2: T, y2: T) -> T
where
    T: Float,
    {
    ((x1 - x2).powi(2) + (y1 - y2).powi(2)).sqrt()
}

/// Squared Euclidean distance
pub fn squared_euclidean<T>(x1: T, y1: T, x2: T, y2: T) -> T
where
    T: Float,
    {
    (x1 - x2).powi(2) + (y1 - y2).powi(2)
}


/// 2D Point
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: &Point) -> f64 {
        euclidean(self.x, self.y, other.x, other.y)
    }
}


/// Axis aligned house footprint, x/y is the top-left corner
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct House {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl House {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Grow the footprint by margin on every side
    pub fn expanded(&self, margin: f64) -> Self {
        Self {
            x: self.x - margin,
            y: self.y - margin,
            w: self.w + margin * 2.0,
            h: self.h + margin * 2.0,
        }
    }

    /// Corners in clockwise order
    pub fn to_polygon(&self) -> Polygon {
        Polygon {
            points: vec![
                Point::new(self.x, self.y),
                Point::new(self.x + self.w, self.y),
                Point::new(self.x + self.w, self.y + self.h),
                Point::new(self.x, self.y + self.h),
            ],
        }
    }
}


/// 2D Polygon
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    pub points: Vec<Point>, // Clockwise or counter-clockwise
}

impl Polygon {

    /// Create a new polygon from a list of points
    pub fn new(points: Vec<Point>) -> Result<Self, GeometryError> {
        if points.len() < 3 {
            return Err(GeometryError::InvalidPolygon);
        }
        Ok(Self { points })
    }

    /// Check if a point is inside the polygon
    /// Uses Ray-casting algorithm
    /// https://en.wikipedia.org/wiki/Point_in_polygon
    pub fn contains(&self, point: &Point) -> bool {
        let mut inside = false;
        let n = self.points.len();

        // Iterate over each edge of the polygon
        for i in 0..n {
            let j = (i + 1) % n; // Next vertex (wraps around to 0)
            let vi = &self.points[i];
            let vj = &self.points[j];

            // The ray cast to the right crosses this edge
            if (vi.y > point.y) != (vj.y > point.y) &&
               point.x < (vj.x - vi.x) * (point.y - vi.y) / (vj.y - vi.y) + vi.x {
                inside = !inside;
            }
        }

        inside
    }

    /// Check if a line segment touches the polygon
    /// True if the segment crosses the boundary or lies fully inside
    pub fn line_intersects(&self, start: &Point, end: &Point) -> bool {

        if self.contains(start) || self.contains(end) {
            return true;
        }

        let n = self.points.len();

        for i in 0..n {
            let j = (i + 1) % n; // Next vertex (wraps around to 0)
            let vi = &self.points[i];
            let vj = &self.points[j];

            if segments_intersect(start, end, vi, vj) {
                return true;
            }
        }

        false
    }
}


/// Point Orientation
/// Returns:
/// 0 if collinear, >0 if clockwise, <0 if counterclockwise.
pub(crate) fn orientation(p: &Point, q: &Point, r: &Point) -> f64 {
    let value = (q.y - p.y) * (r.x - q.x) - (q.x - p.x) * (r.y - q.y);
    if value.abs() < EPSILON { 0.0 } else { value }
}

/// Helper function to check if point q lies on segment pr.
fn on_segment(p: &Point, q: &Point, r: &Point) -> bool {
    q.x <= f64::max(p.x, r.x) &&
    q.x >= f64::min(p.x, r.x) &&
    q.y <= f64::max(p.y, r.y) &&
    q.y >= f64::min(p.y, r.y)
}

/// Check if segments p1q1 and p2q2 intersect, touching counts.
pub fn segments_intersect(p1: &Point, q1: &Point, p2: &Point, q2: &Point) -> bool {
    let o1 = orientation(p1, q1, p2);
    let o2 = orientation(p1, q1, q2);
    let o3 = orientation(p2, q2, p1);
    let o4 = orientation(p2, q2, q1);

    // General case: segments intersect if orientations differ
    if o1 * o2 < 0.0 && o3 * o4 < 0.0 {
        return true;
    }

    // Special cases: collinear and point lies on segment
    if o1 == 0.0 && on_segment(p1, p2, q1) { return true; }
    if o2 == 0.0 && on_segment(p1, q2, q1) { return true; }
    if o3 == 0.0 && on_segment(p2, p1, q2) { return true; }
    if o4 == 0.0 && on_segment(p2, q1, q2) { return true; }

    false
}

/// Check if two road segments conflict when drawn
/// Segments sharing an endpoint only conflict when they overlap along the same direction
pub fn segments_cross(p1: &Point, q1: &Point, p2: &Point, q2: &Point) -> bool {
    let shared = [(p1, q1, p2, q2), (p1, q1, q2, p2), (q1, p1, p2, q2), (q1, p1, q2, p2)]
        .into_iter()
        .find(|(a, _, b, _)| a == b);

    match shared {
        Some((pivot, other_a, _, other_b)) => {
            if orientation(pivot, other_a, other_b) != 0.0 {
                return false;
            }
            let dot = (other_a.x - pivot.x) * (other_b.x - pivot.x)
                + (other_a.y - pivot.y) * (other_b.y - pivot.y);
            dot > 0.0
        }
        None => segments_intersect(p1, q1, p2, q2),
    }
}

/// Shortest distance from point p to segment ab
pub fn point_segment_distance(p: &Point, a: &Point, b: &Point) -> f64 {
    let length_sq = squared_euclidean(a.x, a.y, b.x, b.y);
    if length_sq == 0.0 {
        return p.distance(a);
    }

    // Project p onto ab and clamp to the segment
    let t = (((p.x - a.x) * (b.x - a.x) + (p.y - a.y) * (b.y - a.y)) / length_sq).clamp(0.0, 1.0);
    let projection = Point::new(a.x + t * (b.x - a.x), a.y + t * (b.y - a.y));
    p.distance(&projection)
}
