/// Procedural track generation for ApexSim
///
/// A closed centerline is grown from a random point cloud (hull, relaxation,
/// corner sharpening, spline smoothing) and framed by two offset boundaries
/// that are repaired where they crowd the track.

pub mod generator;
pub mod hull;
pub mod interference;
pub mod offset;
pub mod relax;
pub mod sharpen;
pub mod spline;

// Re-export main types for convenience
pub use generator::{generate_track, TrackGenError, TrackGenerator};
pub use interference::{InterferenceParams, InterferenceReport};
pub use offset::Side;
