/// Boundary curves at a fixed perpendicular distance from the centerline
use crate::data::Outline;
use std::f64::consts::FRAC_PI_2;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Inner,
    Outer,
}

impl Side {
    /// Rotation sign applied to the backward edge direction.
    pub fn sign(self) -> f64 {
        match self {
            Side::Inner => 1.0,
            Side::Outer => -1.0,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Inner => write!(f, "inner"),
            Side::Outer => write!(f, "outer"),
        }
    }
}

/// Build one boundary of the track.
///
/// For every centerline edge `from -> to`, the backward direction
/// `from - to` is rotated a quarter turn by `side`, scaled to `width`, and
/// anchored at `to`:
///
/// ```text
///              outer
///                ^
///                |
///   from ------> to
///                |
///                v
///              inner
/// ```
///
/// (inner/outer swap visually with the loop's winding). One point per edge,
/// closed on the first produced point.
pub fn offset_curve(centerline: &Outline, side: Side, width: f64) -> Outline {
    let points = centerline.points();
    let mut boundary = Outline::with_capacity(points.len());

    for pair in points.windows(2) {
        let (from, to) = (pair[0], pair[1]);
        let offset = from
            .sub(&to)
            .rotate(side.sign() * FRAC_PI_2)
            .normalize()
            .scale(width);
        boundary.push(to.add(&offset));
    }

    boundary.close();
    boundary
}
