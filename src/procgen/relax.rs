/// Hull point relaxation
use crate::data::Outline;
use crate::geometry::Point2D;

/// Push apart hull vertices closer than `min_distance`, `iterations` times.
///
/// For each pair closer than the minimum, both points are moved away from each
/// other by the full deficit, which over-corrects. The pass count is a fixed
/// budget rather than a convergence loop: clustered inputs can still contain
/// close pairs afterwards. Coincident vertices have no separation direction
/// and are left alone.
///
/// The closing duplicate, if any, is kept in sync with the first vertex.
pub fn relax(outline: &mut Outline, iterations: usize, min_distance: f64) {
    let closed = outline.is_closed();
    let points = outline.points_mut();
    let open_len = if closed { points.len() - 1 } else { points.len() };

    for _ in 0..iterations {
        relax_pass(&mut points[..open_len], min_distance);
    }

    if closed {
        points[open_len] = points[0];
    }
}

fn relax_pass(points: &mut [Point2D], min_distance: f64) {
    for i in 0..points.len() {
        for j in (i + 1)..points.len() {
            let distance = points[i].distance_to(&points[j]);
            if distance == 0.0 || distance >= min_distance {
                continue;
            }

            let displace = points[i]
                .sub(&points[j])
                .normalize()
                .scale(min_distance - distance);

            points[i] = points[i].add(&displace);
            points[j] = points[j].sub(&displace);
        }
    }
}

/// Number of vertex pairs still closer than `min_distance`.
pub fn close_pairs(outline: &Outline, min_distance: f64) -> usize {
    let points = outline.open_vertices();
    let mut count = 0;
    for i in 0..points.len() {
        for j in (i + 1)..points.len() {
            if points[i].distance_to(&points[j]) < min_distance {
                count += 1;
            }
        }
    }
    count
}
