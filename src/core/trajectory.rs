use smallvec::SmallVec;

use crate::core::model::Competitor;
use crate::core::scale::{DistanceScale, RankScale};

/// Projected marker anchor in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrajectoryPoint {
    pub x: f64,
    pub y: f64,
}

/// Projected line segment in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrajectorySegment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// Projects a competitor's results into pixel points, preserving sequence
/// order (which is stage order).
///
/// Deterministic and side-effect free so rendering and tests consume the
/// exact same geometry. Most entrants cover only a handful of stages, hence
/// the inline buffer.
#[must_use]
pub fn project_points(
    competitor: &Competitor,
    distance_scale: DistanceScale,
    rank_scale: RankScale,
) -> SmallVec<[TrajectoryPoint; 8]> {
    competitor
        .results
        .iter()
        .map(|result| TrajectoryPoint {
            x: distance_scale.to_pixel(result.stage.distance),
            y: rank_scale.to_pixel(result.position),
        })
        .collect()
}

/// Connects adjacent points with straight segments: k points yield exactly
/// k - 1 segments, fewer than two points yield none.
#[must_use]
pub fn connect_segments(points: &[TrajectoryPoint]) -> Vec<TrajectorySegment> {
    if points.len() < 2 {
        return Vec::new();
    }

    let mut segments = Vec::with_capacity(points.len() - 1);
    for pair in points.windows(2) {
        segments.push(TrajectorySegment {
            x1: pair[0].x,
            y1: pair[0].y,
            x2: pair[1].x,
            y2: pair[1].y,
        });
    }
    segments
}
