use serde::{Deserialize, Serialize};

/// A point (or displacement vector) in the 2D track plane.
///
/// Coordinates follow screen conventions: x grows to the right, y grows
/// downward. Points carry no identity beyond their coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub const ZERO: Point2D = Point2D { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn add(&self, other: &Point2D) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    pub fn sub(&self, other: &Point2D) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    pub fn scale(&self, factor: f64) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }

    pub fn opposite(&self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }

    /// Rotate by `angle_rad` radians (counter-clockwise in a y-up frame).
    pub fn rotate(&self, angle_rad: f64) -> Self {
        let (sin, cos) = angle_rad.sin_cos();
        Self {
            x: cos * self.x - sin * self.y,
            y: sin * self.x + cos * self.y,
        }
    }

    pub fn rotate_degrees(&self, angle_deg: f64) -> Self {
        self.rotate(angle_deg.to_radians())
    }

    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Unit vector in the same direction. A zero vector stays zero.
    pub fn normalize(&self) -> Self {
        let length = self.length();
        if length > 0.0 {
            Self {
                x: self.x / length,
                y: self.y / length,
            }
        } else {
            *self
        }
    }

    pub fn distance_to(&self, other: &Point2D) -> f64 {
        other.sub(self).length()
    }

    /// Linear interpolation towards `other`, `t` in [0, 1].
    pub fn lerp(&self, other: &Point2D, t: f64) -> Self {
        Self {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
        }
    }

    pub fn dot(&self, other: &Point2D) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Z component of the 3D cross product.
    pub fn cross(&self, other: &Point2D) -> f64 {
        self.x * other.y - self.y * other.x
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Point2D>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut bounds = Bounds {
            min_x: first.x,
            min_y: first.y,
            max_x: first.x,
            max_y: first.y,
        };
        for p in iter {
            bounds.min_x = bounds.min_x.min(p.x);
            bounds.min_y = bounds.min_y.min(p.y);
            bounds.max_x = bounds.max_x.max(p.x);
            bounds.max_y = bounds.max_y.max(p.y);
        }
        Some(bounds)
    }

    pub fn union(&self, other: &Bounds) -> Bounds {
        Bounds {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Point2D,
    pub radius: f64,
}

impl Circle {
    pub fn new(center: Point2D, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Points on the rim count as contained.
    pub fn contains(&self, p: &Point2D) -> bool {
        let left = self.center.x - self.radius;
        let right = self.center.x + self.radius;
        let top = self.center.y - self.radius;
        let bottom = self.center.y + self.radius;

        if p.x < left || p.x > right || p.y < top || p.y > bottom {
            return false;
        }

        let dx = self.center.x - p.x;
        let dy = self.center.y - p.y;
        dx * dx + dy * dy <= self.radius * self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_rotate_quarter_turn() {
        let v = Point2D::new(1.0, 0.0).rotate(std::f64::consts::FRAC_PI_2);
        assert!(v.x.abs() < EPS);
        assert!((v.y - 1.0).abs() < EPS);

        let w = Point2D::new(1.0, 0.0).rotate_degrees(-90.0);
        assert!(w.x.abs() < EPS);
        assert!((w.y + 1.0).abs() < EPS);
    }

    #[test]
    fn test_normalize() {
        let v = Point2D::new(3.0, 4.0).normalize();
        assert!((v.length() - 1.0).abs() < EPS);
        assert!((v.x - 0.6).abs() < EPS);

        assert_eq!(Point2D::ZERO.normalize(), Point2D::ZERO);
    }

    #[test]
    fn test_distance_and_lerp() {
        let a = Point2D::new(0.0, 0.0);
        let b = Point2D::new(6.0, 8.0);
        assert_eq!(a.distance_to(&b), 10.0);
        assert_eq!(a.lerp(&b, 0.5), Point2D::new(3.0, 4.0));
    }

    #[test]
    fn test_circle_contains() {
        let circle = Circle::new(Point2D::new(10.0, 10.0), 5.0);
        assert!(circle.contains(&Point2D::new(10.0, 10.0)));
        assert!(circle.contains(&Point2D::new(15.0, 10.0)));
        assert!(!circle.contains(&Point2D::new(14.0, 14.0)));
        assert!(!circle.contains(&Point2D::new(30.0, 10.0)));
    }

    #[test]
    fn test_bounds() {
        let points = [
            Point2D::new(1.0, 5.0),
            Point2D::new(-2.0, 3.0),
            Point2D::new(4.0, -1.0),
        ];
        let bounds = Bounds::from_points(&points).unwrap();
        assert_eq!(bounds.min_x, -2.0);
        assert_eq!(bounds.max_x, 4.0);
        assert_eq!(bounds.min_y, -1.0);
        assert_eq!(bounds.max_y, 5.0);
        assert_eq!(bounds.width(), 6.0);
        assert!(Bounds::from_points(&Vec::<Point2D>::new()).is_none());
    }
}
