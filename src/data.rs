use crate::geometry::{Bounds, Point2D};
use serde::{Deserialize, Serialize};
use std::fmt;

// --- Outline (closed polyline) ---

/// Ordered chain of points.
///
/// A closed outline repeats its first point as its last point; closure is
/// explicit rather than an implicit wrap-around. Serialized as a bare array of
/// `{x, y}` objects.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Outline {
    points: Vec<Point2D>,
}

impl Outline {
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
        }
    }

    pub fn points(&self) -> &[Point2D] {
        &self.points
    }

    pub fn points_mut(&mut self) -> &mut [Point2D] {
        &mut self.points
    }

    pub fn into_points(self) -> Vec<Point2D> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<&Point2D> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&Point2D> {
        self.points.last()
    }

    pub fn get(&self, index: usize) -> Option<&Point2D> {
        self.points.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point2D> {
        self.points.iter()
    }

    pub fn push(&mut self, p: Point2D) {
        self.points.push(p);
    }

    pub fn pop(&mut self) -> Option<Point2D> {
        self.points.pop()
    }

    /// Remove the point at `index`, keeping the order of the rest.
    pub fn remove(&mut self, index: usize) -> Point2D {
        self.points.remove(index)
    }

    pub fn retain<F: FnMut(&Point2D) -> bool>(&mut self, f: F) {
        self.points.retain(f);
    }

    /// True when the outline has at least two points and ends where it starts.
    pub fn is_closed(&self) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => self.points.len() > 1 && first == last,
            _ => false,
        }
    }

    /// Append the first point unless the outline already ends on it.
    pub fn close(&mut self) {
        if let Some(first) = self.points.first().copied() {
            if !self.is_closed() {
                self.points.push(first);
            }
        }
    }

    /// The distinct vertices of the loop, i.e. without the closing duplicate.
    pub fn open_vertices(&self) -> &[Point2D] {
        if self.is_closed() {
            &self.points[..self.points.len() - 1]
        } else {
            &self.points
        }
    }

    /// Drop the closing duplicate, if present.
    pub fn into_open(mut self) -> Self {
        if self.is_closed() {
            self.points.pop();
        }
        self
    }

    pub fn xs(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.x).collect()
    }

    pub fn ys(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.y).collect()
    }

    /// Sum of segment lengths along the chain.
    pub fn length(&self) -> f64 {
        self.points
            .windows(2)
            .map(|pair| pair[0].distance_to(&pair[1]))
            .sum()
    }

    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::from_points(&self.points)
    }

    /// Arithmetic mean of the distinct vertices.
    pub fn mean_center(&self) -> Option<Point2D> {
        let vertices = self.open_vertices();
        if vertices.is_empty() {
            return None;
        }
        let n = vertices.len() as f64;
        let sum = vertices.iter().fold(Point2D::ZERO, |acc, p| acc.add(p));
        Some(sum.scale(1.0 / n))
    }

    /// Signed area via the shoelace formula. Sign depends on winding.
    pub fn signed_area(&self) -> f64 {
        let vertices = self.open_vertices();
        let n = vertices.len();
        if n < 3 {
            return 0.0;
        }
        let twice_area: f64 = (0..n)
            .map(|i| vertices[i].cross(&vertices[(i + 1) % n]))
            .sum();
        twice_area * 0.5
    }

    /// Area centroid of the enclosed polygon; `None` for zero-area outlines.
    pub fn centroid(&self) -> Option<Point2D> {
        let vertices = self.open_vertices();
        let n = vertices.len();
        let area = self.signed_area();
        if area == 0.0 {
            return None;
        }

        let mut cx = 0.0;
        let mut cy = 0.0;
        for i in 0..n {
            let current = vertices[i];
            let next = vertices[(i + 1) % n];
            let cross = current.cross(&next);
            cx += (current.x + next.x) * cross;
            cy += (current.y + next.y) * cross;
        }

        let factor = 1.0 / (6.0 * area);
        Some(Point2D::new(cx * factor, cy * factor))
    }
}

impl From<Vec<Point2D>> for Outline {
    fn from(points: Vec<Point2D>) -> Self {
        Self { points }
    }
}

impl FromIterator<Point2D> for Outline {
    fn from_iter<I: IntoIterator<Item = Point2D>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Outline {
    type Item = &'a Point2D;
    type IntoIter = std::slice::Iter<'a, Point2D>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl std::ops::Index<usize> for Outline {
    type Output = Point2D;

    fn index(&self, index: usize) -> &Self::Output {
        &self.points[index]
    }
}

impl fmt::Display for Outline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, p) in self.points.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "({:.1}, {:.1})", p.x, p.y)?;
        }
        write!(f, "]")
    }
}

// --- Track ---

/// A generated race track: the racing line plus its two boundaries.
///
/// All three outlines are closed. `inner` and `outer` start with one point per
/// centerline edge, but interference repair may drop boundary points, so their
/// lengths are independent of the centerline's.
///
/// Wire format: `{"track": [...], "inner": [...], "outer": [...]}`. The
/// centerline is also accepted under the name `centerline` when reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    #[serde(rename = "track", alias = "centerline")]
    pub centerline: Outline,
    pub inner: Outline,
    pub outer: Outline,
}

impl Track {
    pub fn is_closed(&self) -> bool {
        self.centerline.is_closed() && self.inner.is_closed() && self.outer.is_closed()
    }

    /// Lap length measured along the centerline.
    pub fn lap_length(&self) -> f64 {
        self.centerline.length()
    }

    /// Bounding box over all three outlines.
    pub fn bounds(&self) -> Option<Bounds> {
        [&self.centerline, &self.inner, &self.outer]
            .into_iter()
            .filter_map(|outline| outline.bounds())
            .reduce(|a, b| a.union(&b))
    }

    /// Centerline waypoints without the closing duplicate.
    pub fn waypoints(&self) -> &[Point2D] {
        self.centerline.open_vertices()
    }
}
