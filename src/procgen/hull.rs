/// Convex hull construction (Andrew's monotone chain)
use crate::data::Outline;
use crate::geometry::Point2D;
use std::cmp::Ordering;

/// Build the closed convex hull of `points`.
///
/// Vertices wind counter-clockwise on screen (y down) and the first vertex is
/// repeated at the end. Collinear points on an edge are dropped, so every
/// corner is a strict turn. An empty input yields an empty outline.
pub fn convex_hull(points: &[Point2D]) -> Outline {
    let mut sorted = points.to_vec();
    sorted.sort_by(lexicographic);

    let mut hull = hull_presorted(&sorted);
    hull.close();
    hull
}

fn lexicographic(a: &Point2D, b: &Point2D) -> Ordering {
    a.x.total_cmp(&b.x).then_with(|| a.y.total_cmp(&b.y))
}

/// Pop while `r -> q -> p` is not a strict turn in the chain's direction.
fn must_pop(r: &Point2D, q: &Point2D, p: &Point2D) -> bool {
    (q.x - r.x) * (p.y - r.y) >= (q.y - r.y) * (p.x - r.x)
}

fn build_chain<'a>(points: impl Iterator<Item = &'a Point2D>) -> Vec<Point2D> {
    let mut chain: Vec<Point2D> = Vec::new();
    for p in points {
        while chain.len() >= 2 {
            let q = chain[chain.len() - 1];
            let r = chain[chain.len() - 2];
            if must_pop(&r, &q, p) {
                chain.pop();
            } else {
                break;
            }
        }
        chain.push(*p);
    }
    chain
}

fn hull_presorted(points: &[Point2D]) -> Outline {
    if points.len() <= 1 {
        return Outline::from(points.to_vec());
    }

    let mut upper = build_chain(points.iter());
    upper.pop();

    let mut lower = build_chain(points.iter().rev());
    lower.pop();

    if upper.len() == 1 && lower.len() == 1 && upper[0] == lower[0] {
        return Outline::from(upper);
    }

    upper.extend(lower);
    Outline::from(upper)
}
