/// Corner sharpening by displaced edge midpoints
use crate::data::Outline;
use crate::geometry::Point2D;
use crate::rng::TrackRng;

/// Insert a randomly displaced midpoint after every vertex of a closed outline.
///
/// The displacement has a uniform random direction and length
/// `fraction^difficulty * max_displacement`. The result interleaves original
/// vertices and displaced midpoints and is closed again on the first vertex,
/// so `n` distinct vertices become `2n` (plus the closing point).
pub fn sharpen_corners<R: TrackRng>(
    outline: &Outline,
    rng: &mut R,
    difficulty: f64,
    max_displacement: f64,
) -> Outline {
    let points = outline.points();
    if points.len() < 2 {
        return outline.clone();
    }

    let mut sharpened = Outline::with_capacity(2 * points.len() - 1);
    for pair in points.windows(2) {
        let (a, b) = (pair[0], pair[1]);

        let displacement_length = rng.uniform_fraction().powf(difficulty) * max_displacement;
        let displace = Point2D::new(1.0, 0.0)
            .rotate(rng.uniform_angle())
            .scale(displacement_length);

        let midpoint = a.lerp(&b, 0.5).add(&displace);

        sharpened.push(a);
        sharpened.push(midpoint);
    }
    sharpened.push(points[0]);

    sharpened
}
