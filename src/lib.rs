//! Procedural race track generation.
//!
//! [`procgen::TrackGenerator`] turns a seeded random source into a [`data::Track`]:
//! a closed centerline plus inner and outer boundaries, ready to be sent to
//! clients as JSON or scored against by the fitness tracker in [`progress`].

pub mod config;
pub mod data;
pub mod export;
pub mod geometry;
pub mod procgen;
pub mod progress;
pub mod rng;

pub use config::{RemovalStrategy, TrackGenConfig};
pub use data::{Outline, Track};
pub use geometry::Point2D;
pub use procgen::{generate_track, TrackGenError, TrackGenerator};
pub use rng::{SeededRng, TrackRng};
