//! Planar geometry for measurement regions.
//!
//! Coordinates are simulator-local metres (`f64`), not geographic degrees:
//! densities derived from these areas are compared against an external export
//! at 8-decimal precision, so single precision is not an option here.

use crate::{GcError, GcResult};

/// A position in the simulation plane, in metres.
#[derive(Copy, Clone, Debug, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}

/// A simple polygon with a precomputed area.
///
/// Immutable once constructed.  A trailing vertex equal to the first (a
/// closed ring, as scenario files commonly store shapes) is dropped during
/// construction.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point>,
    area: f64,
}

/// Tolerance for the on-boundary test, in metres.
const BOUNDARY_EPS: f64 = 1e-9;

impl Polygon {
    /// Build a polygon from its vertex ring.
    ///
    /// Fails on fewer than three distinct vertices or a degenerate
    /// (zero-area) ring.
    pub fn new(mut vertices: Vec<Point>) -> GcResult<Self> {
        if vertices.len() >= 2 && vertices.first() == vertices.last() {
            vertices.pop();
        }
        if vertices.len() < 3 {
            return Err(GcError::Geometry(format!(
                "polygon needs at least 3 distinct vertices, got {}",
                vertices.len()
            )));
        }

        let area = shoelace_area(&vertices);
        if area <= 0.0 {
            return Err(GcError::Geometry(
                "polygon ring has zero area".to_string(),
            ));
        }

        Ok(Self { vertices, area })
    }

    /// Axis-aligned rectangle helper, anchored at `(x, y)`.
    pub fn rectangle(x: f64, y: f64, width: f64, height: f64) -> GcResult<Self> {
        Self::new(vec![
            Point::new(x, y),
            Point::new(x + width, y),
            Point::new(x + width, y + height),
            Point::new(x, y + height),
        ])
    }

    /// Enclosed area in square metres.
    #[inline]
    pub fn area(&self) -> f64 {
        self.area
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Strict (boundary-exclusive) containment test.
    ///
    /// Even-odd ray casting; points on an edge or vertex are *outside*,
    /// matching the containment semantics of the external density processor.
    pub fn contains(&self, p: Point) -> bool {
        if self.on_boundary(p) {
            return false;
        }

        let v = &self.vertices;
        let n = v.len();
        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            let (a, b) = (v[i], v[j]);
            if (a.y > p.y) != (b.y > p.y) {
                let x_cross = a.x + (p.y - a.y) * (b.x - a.x) / (b.y - a.y);
                if p.x < x_cross {
                    inside = !inside;
                }
            }
            j = i;
        }
        inside
    }

    fn on_boundary(&self, p: Point) -> bool {
        let v = &self.vertices;
        let n = v.len();
        let mut j = n - 1;
        for i in 0..n {
            if point_on_segment(p, v[j], v[i]) {
                return true;
            }
            j = i;
        }
        false
    }
}

/// Unsigned shoelace area of a vertex ring.
fn shoelace_area(v: &[Point]) -> f64 {
    let n = v.len();
    let mut twice_area = 0.0;
    let mut j = n - 1;
    for i in 0..n {
        twice_area += (v[j].x + v[i].x) * (v[j].y - v[i].y);
        j = i;
    }
    (twice_area * 0.5).abs()
}

fn point_on_segment(p: Point, a: Point, b: Point) -> bool {
    let cross = (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x);
    if cross.abs() > BOUNDARY_EPS {
        return false;
    }
    let dot = (p.x - a.x) * (b.x - a.x) + (p.y - a.y) * (b.y - a.y);
    let len_sq = (b.x - a.x).powi(2) + (b.y - a.y).powi(2);
    (-BOUNDARY_EPS..=len_sq + BOUNDARY_EPS).contains(&dot)
}
