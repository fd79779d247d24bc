/// Boundary interference repair
///
/// On tight corners a boundary point can end up closer to some other stretch
/// of centerline than the track width, which would make the boundary cut back
/// across the track. Such points are deleted.
use crate::config::RemovalStrategy;
use crate::data::Outline;
use crate::geometry::Point2D;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InterferenceParams {
    pub track_width: f64,
    /// A point is too close when `distance + tolerance < track_width`
    pub tolerance: f64,
    /// Centerline neighbours on each side of every index that are checked
    pub margin: usize,
    pub strategy: RemovalStrategy,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InterferenceReport {
    pub inner_removed: usize,
    pub outer_removed: usize,
}

impl InterferenceParams {
    fn too_close(&self, anchor: &Point2D, p: &Point2D) -> bool {
        anchor.distance_to(p) + self.tolerance < self.track_width
    }
}

/// Indices `[i - margin, i + margin)` around `i`, wrapping modulo `len`.
fn neighbour_window(i: usize, margin: usize, len: usize) -> impl Iterator<Item = usize> {
    let span = (2 * margin).min(len);
    let start = (i + len - margin % len) % len;
    (0..span).map(move |d| (start + d) % len)
}

/// Remove boundary points that crowd the centerline, then re-close both
/// boundaries on their (possibly new) first points.
///
/// Boundaries emptied completely are left empty; callers decide whether that
/// is an error.
pub fn resolve_interference(
    centerline: &Outline,
    inner: &mut Outline,
    outer: &mut Outline,
    params: &InterferenceParams,
) -> InterferenceReport {
    let anchors = centerline.open_vertices();

    let mut inner_open = std::mem::take(inner).into_open();
    let mut outer_open = std::mem::take(outer).into_open();

    let report = match params.strategy {
        RemovalStrategy::InPlace => {
            let mut report = InterferenceReport::default();
            for i in 0..anchors.len() {
                for j in neighbour_window(i, params.margin, anchors.len()) {
                    let anchor = anchors[j];
                    report.inner_removed += sweep_in_place(&mut inner_open, &anchor, params);
                    report.outer_removed += sweep_in_place(&mut outer_open, &anchor, params);
                }
            }
            report
        }
        RemovalStrategy::Snapshot => {
            let mut checked = vec![false; anchors.len()];
            for i in 0..anchors.len() {
                for j in neighbour_window(i, params.margin, anchors.len()) {
                    checked[j] = true;
                }
            }
            let windowed: Vec<Point2D> = anchors
                .iter()
                .zip(&checked)
                .filter(|(_, checked)| **checked)
                .map(|(p, _)| *p)
                .collect();

            InterferenceReport {
                inner_removed: filter_snapshot(&mut inner_open, &windowed, params),
                outer_removed: filter_snapshot(&mut outer_open, &windowed, params),
            }
        }
    };

    debug!(
        "Interference repair ({:?}) removed {} inner and {} outer points",
        params.strategy, report.inner_removed, report.outer_removed
    );

    inner_open.close();
    outer_open.close();
    *inner = inner_open;
    *outer = outer_open;

    report
}

/// One scan over the live list. After a removal the scan still advances, so
/// the point that slid into the freed slot is skipped on this sweep.
fn sweep_in_place(boundary: &mut Outline, anchor: &Point2D, params: &InterferenceParams) -> usize {
    let mut removed = 0;
    let mut k = 0;
    while k < boundary.len() {
        if params.too_close(anchor, &boundary[k]) {
            boundary.remove(k);
            removed += 1;
        }
        k += 1;
    }
    removed
}

fn filter_snapshot(boundary: &mut Outline, anchors: &[Point2D], params: &InterferenceParams) -> usize {
    let before = boundary.len();
    boundary.retain(|p| !anchors.iter().any(|anchor| params.too_close(anchor, p)));
    before - boundary.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(strategy: RemovalStrategy) -> InterferenceParams {
        InterferenceParams {
            track_width: 400.0,
            tolerance: 2.0,
            margin: 10,
            strategy,
        }
    }

    /// 24 centerline points along the x axis, 100 apart, closed.
    fn straight_centerline() -> Outline {
        let mut centerline: Outline = (0..24)
            .map(|i| Point2D::new(i as f64 * 100.0, 0.0))
            .collect();
        centerline.close();
        centerline
    }

    #[test]
    fn test_window_wraps() {
        let window: Vec<usize> = neighbour_window(1, 3, 10).collect();
        assert_eq!(window, vec![8, 9, 0, 1, 2, 3]);

        let clamped: Vec<usize> = neighbour_window(0, 10, 5).collect();
        assert_eq!(clamped.len(), 5);
    }

    #[test]
    fn test_close_point_removed_far_point_kept() {
        for strategy in [RemovalStrategy::InPlace, RemovalStrategy::Snapshot] {
            let centerline = straight_centerline();
            let far = Point2D::new(500.0, 1000.0);
            let near = Point2D::new(1200.0, 400.0 - 3.0 - 1.0);

            let mut inner: Outline = vec![far, near, Point2D::new(2000.0, 900.0)].into();
            inner.close();
            let mut outer: Outline =
                vec![Point2D::new(300.0, -1000.0), Point2D::new(1500.0, -700.0)].into();
            outer.close();

            let report = resolve_interference(&centerline, &mut inner, &mut outer, &params(strategy));

            assert_eq!(report.inner_removed, 1, "{:?}", strategy);
            assert_eq!(report.outer_removed, 0, "{:?}", strategy);
            assert!(!inner.iter().any(|p| *p == near));
            assert!(inner.iter().any(|p| *p == far));
            assert_eq!(inner.open_vertices().len(), 2);
            assert!(inner.is_closed());
            assert_eq!(outer.open_vertices().len(), 2);
        }
    }

    #[test]
    fn test_point_at_exact_track_width_survives() {
        let centerline = straight_centerline();
        let mut inner: Outline = vec![Point2D::new(1000.0, 400.0), Point2D::new(50.0, 900.0)].into();
        inner.close();
        let mut outer = inner.clone();

        let report = resolve_interference(
            &centerline,
            &mut inner,
            &mut outer,
            &params(RemovalStrategy::InPlace),
        );

        assert_eq!(report, InterferenceReport::default());
        assert_eq!(inner.len(), 3);
    }

    #[test]
    fn test_reclosed_on_new_first_point() {
        let centerline = straight_centerline();
        let doomed = Point2D::new(700.0, 50.0);
        let survivor = Point2D::new(700.0, 2000.0);
        let mut inner: Outline = vec![doomed, survivor, Point2D::new(900.0, 2000.0)].into();
        inner.close();
        let mut outer = Outline::from(vec![survivor, survivor]);

        resolve_interference(
            &centerline,
            &mut inner,
            &mut outer,
            &params(RemovalStrategy::Snapshot),
        );

        assert_eq!(inner.first(), Some(&survivor));
        assert_eq!(inner.last(), Some(&survivor));
        assert_eq!(inner.len(), 3);
    }

    #[test]
    fn test_everything_removed_leaves_empty_boundary() {
        let centerline = straight_centerline();
        let mut inner: Outline = vec![Point2D::new(100.0, 10.0), Point2D::new(200.0, 10.0)].into();
        inner.close();
        let mut outer = inner.clone();

        let report = resolve_interference(
            &centerline,
            &mut inner,
            &mut outer,
            &params(RemovalStrategy::InPlace),
        );

        assert!(inner.is_empty());
        assert!(outer.is_empty());
        assert_eq!(report.inner_removed, 2);
    }

    #[test]
    fn test_single_sweep_skips_shifted_point() {
        let anchor = Point2D::new(0.0, 0.0);
        let mut boundary: Outline = vec![
            Point2D::new(10.0, 0.0),
            Point2D::new(20.0, 0.0),
            Point2D::new(1000.0, 0.0),
        ]
        .into();

        let removed = sweep_in_place(&mut boundary, &anchor, &params(RemovalStrategy::InPlace));

        // (20, 0) slid into slot 0 after the first removal and was not revisited
        assert_eq!(removed, 1);
        assert_eq!(boundary[0], Point2D::new(20.0, 0.0));

        let removed = sweep_in_place(&mut boundary, &anchor, &params(RemovalStrategy::InPlace));
        assert_eq!(removed, 1);
        assert_eq!(boundary.len(), 1);
    }

    #[test]
    fn test_snapshot_has_no_skips() {
        let mut boundary: Outline = vec![
            Point2D::new(10.0, 0.0),
            Point2D::new(20.0, 0.0),
            Point2D::new(1000.0, 0.0),
        ]
        .into();

        let removed = filter_snapshot(
            &mut boundary,
            &[Point2D::new(0.0, 0.0)],
            &params(RemovalStrategy::Snapshot),
        );

        assert_eq!(removed, 2);
        assert_eq!(boundary.points(), &[Point2D::new(1000.0, 0.0)]);
    }
}
