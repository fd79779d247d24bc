/// Track generation pipeline
use super::hull::convex_hull;
use super::interference::{resolve_interference, InterferenceParams};
use super::offset::{offset_curve, Side};
use super::relax::{close_pairs, relax};
use super::sharpen::sharpen_corners;
use super::spline::smooth;
use crate::config::TrackGenConfig;
use crate::data::Track;
use crate::geometry::Point2D;
use crate::rng::{SeededRng, TrackRng};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error, PartialEq)]
pub enum TrackGenError {
    #[error("Degenerate track: convex hull has only {vertices} distinct vertices")]
    DegenerateHull { vertices: usize },
    #[error("Degenerate track: spline needs at least 4 control points, got {knots}")]
    TooFewKnots { knots: usize },
    #[error("Degenerate track: every {side} boundary point was removed")]
    EmptyBoundary { side: Side },
    #[error("Invalid generator configuration: {0}")]
    InvalidConfig(String),
}

/// Turns a random source into a [`Track`].
///
/// Pipeline: sample points, convex hull, relax, sharpen corners, spline
/// smoothing, inner/outer offsets, interference repair. Generation is a pure
/// function of the configuration and the RNG state.
#[derive(Debug, Clone)]
pub struct TrackGenerator {
    config: TrackGenConfig,
}

impl TrackGenerator {
    pub fn new(config: TrackGenConfig) -> Result<Self, TrackGenError> {
        config.validate().map_err(TrackGenError::InvalidConfig)?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &TrackGenConfig {
        &self.config
    }

    pub fn generate<R: TrackRng>(&self, rng: &mut R) -> Result<Track, TrackGenError> {
        let points = self.sample_points(rng);
        self.generate_from_points(&points, rng)
    }

    /// Run the pipeline on a caller-supplied point cloud. `rng` still drives
    /// corner sharpening.
    pub fn generate_from_points<R: TrackRng>(
        &self,
        points: &[Point2D],
        rng: &mut R,
    ) -> Result<Track, TrackGenError> {
        let cfg = &self.config;

        let mut hull = convex_hull(points);
        let hull_vertices = hull.open_vertices().len();
        if hull_vertices < 3 {
            return Err(TrackGenError::DegenerateHull {
                vertices: hull_vertices,
            });
        }
        debug!("Convex hull: {} vertices from {} points", hull_vertices, points.len());

        relax(&mut hull, cfg.relax_iterations, cfg.min_distance);
        let unresolved = close_pairs(&hull, cfg.min_distance);
        if unresolved > 0 {
            debug!(
                "{} hull vertex pairs still closer than {} after {} relaxation passes",
                unresolved, cfg.min_distance, cfg.relax_iterations
            );
        }

        let sharpened = sharpen_corners(&hull, rng, cfg.difficulty, cfg.max_displacement);
        debug!("Sharpened outline: {} points", sharpened.len());

        let centerline = smooth(&sharpened, cfg.spline_step)?;
        debug!("Smoothed centerline: {} points", centerline.len());

        let mut inner = offset_curve(&centerline, Side::Inner, cfg.track_width);
        let mut outer = offset_curve(&centerline, Side::Outer, cfg.track_width);

        let params = InterferenceParams {
            track_width: cfg.track_width,
            tolerance: cfg.interference_tolerance,
            margin: cfg.margin,
            strategy: cfg.removal,
        };
        resolve_interference(&centerline, &mut inner, &mut outer, &params);

        if inner.is_empty() {
            return Err(TrackGenError::EmptyBoundary { side: Side::Inner });
        }
        if outer.is_empty() {
            return Err(TrackGenError::EmptyBoundary { side: Side::Outer });
        }

        let mut centerline = centerline;
        centerline.close();
        inner.close();
        outer.close();

        let track = Track {
            centerline,
            inner,
            outer,
        };
        info!(
            "Generated track: {} centerline / {} inner / {} outer points, lap length {:.0}",
            track.centerline.len(),
            track.inner.len(),
            track.outer.len(),
            track.lap_length()
        );

        Ok(track)
    }

    /// Uniform random points over `[0, max_width] x [0, max_height]`.
    pub fn sample_points<R: TrackRng>(&self, rng: &mut R) -> Vec<Point2D> {
        (0..self.config.point_count)
            .map(|_| {
                let x = rng.uniform_fraction() * self.config.max_width;
                let y = rng.uniform_fraction() * self.config.max_height;
                Point2D::new(x, y)
            })
            .collect()
    }
}

/// Generate a track with the default configuration from a seed.
pub fn generate_track(seed: u64) -> Result<Track, TrackGenError> {
    let generator = TrackGenerator::new(TrackGenConfig::default())?;
    generator.generate(&mut SeededRng::new(seed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RemovalStrategy;

    #[test]
    fn test_default_generation_closed_and_sized() {
        let track = generate_track(2020).unwrap();

        assert!(track.is_closed());
        assert_eq!(track.centerline.len(), 201);
        assert!(track.inner.len() >= 2 && track.inner.len() <= track.centerline.len());
        assert!(track.outer.len() >= 2 && track.outer.len() <= track.centerline.len());
    }

    #[test]
    fn test_same_seed_same_track() {
        assert_eq!(generate_track(77).unwrap(), generate_track(77).unwrap());
    }

    #[test]
    fn test_different_seeds_differ() {
        assert_ne!(generate_track(1).unwrap(), generate_track(2).unwrap());
    }

    #[test]
    fn test_collinear_cloud_is_degenerate() {
        let generator = TrackGenerator::new(TrackGenConfig::default()).unwrap();
        let points: Vec<Point2D> = (0..10).map(|i| Point2D::new(i as f64, i as f64)).collect();

        let result = generator.generate_from_points(&points, &mut SeededRng::new(0));
        assert_eq!(result, Err(TrackGenError::DegenerateHull { vertices: 2 }));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = TrackGenConfig {
            point_count: 2,
            ..TrackGenConfig::default()
        };
        assert!(matches!(
            TrackGenerator::new(config),
            Err(TrackGenError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_wide_track_empties_boundary() {
        // Every boundary point on the inward side is closer than the track
        // width to the far side of the loop
        let config = TrackGenConfig {
            track_width: 100_000.0,
            max_displacement: 0.0,
            ..TrackGenConfig::default()
        };
        let generator = TrackGenerator::new(config).unwrap();
        let points = vec![
            Point2D::new(0.0, 0.0),
            Point2D::new(8000.0, 0.0),
            Point2D::new(8000.0, 6000.0),
            Point2D::new(0.0, 6000.0),
            Point2D::new(4000.0, 3000.0),
        ];

        let result = generator.generate_from_points(&points, &mut SeededRng::new(5));
        assert!(matches!(result, Err(TrackGenError::EmptyBoundary { .. })));
    }

    #[test]
    fn test_snapshot_strategy_generates() {
        let config = TrackGenConfig {
            removal: RemovalStrategy::Snapshot,
            ..TrackGenConfig::default()
        };
        let generator = TrackGenerator::new(config).unwrap();

        let track = generator.generate(&mut SeededRng::new(2020)).unwrap();
        let reference = generate_track(2020).unwrap();

        // Removal strategy only affects the boundaries
        assert_eq!(track.centerline, reference.centerline);
        assert!(track.is_closed());
    }
}
