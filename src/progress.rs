//! Waypoint-based lap progress.
//!
//! A vehicle "covers" every centerline waypoint inside a circle of radius
//! `track_width + REACH_MARGIN` around it. Fitness is the share of distinct
//! waypoints ever covered, which is what the AI trainer scores drivers on.

use crate::data::Track;
use crate::geometry::{Circle, Point2D};
use std::collections::BTreeSet;

/// Extra reach beyond the track width when testing waypoint coverage.
pub const REACH_MARGIN: f64 = 50.0;

#[derive(Debug, Clone)]
pub struct WaypointProgress {
    waypoints: Vec<Point2D>,
    radius: f64,
    covered: BTreeSet<usize>,
}

impl WaypointProgress {
    pub fn new(track: &Track, track_width: f64) -> Self {
        Self {
            waypoints: track.waypoints().to_vec(),
            radius: track_width + REACH_MARGIN,
            covered: BTreeSet::new(),
        }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Record waypoints reached from `position`. Returns how many were new.
    pub fn update(&mut self, position: Point2D) -> usize {
        let reach = Circle::new(position, self.radius);
        let before = self.covered.len();
        for (index, waypoint) in self.waypoints.iter().enumerate() {
            if reach.contains(waypoint) {
                self.covered.insert(index);
            }
        }
        self.covered.len() - before
    }

    /// True when at least one waypoint is within reach of `position`.
    pub fn is_on_track(&self, position: Point2D) -> bool {
        let reach = Circle::new(position, self.radius);
        self.waypoints.iter().any(|w| reach.contains(w))
    }

    pub fn covered(&self) -> usize {
        self.covered.len()
    }

    pub fn total(&self) -> usize {
        self.waypoints.len()
    }

    /// Covered share of all waypoints, in [0, 1].
    pub fn fitness(&self) -> f64 {
        if self.waypoints.is_empty() {
            return 0.0;
        }
        self.covered.len() as f64 / self.waypoints.len() as f64
    }

    /// Fitness as a whole percentage, rounded down.
    pub fn fitness_percent(&self) -> u32 {
        (self.fitness() * 100.0).floor() as u32
    }

    pub fn reset(&mut self) {
        self.covered.clear();
    }
}
