use crate::api::{ChartConfig, ChartScales};
use crate::core::{Competitor, connect_segments, project_points};
use crate::render::{ChartLayerKind, CirclePrimitive, Color, LayeredRenderFrame, LinePrimitive};

/// Lays out one open polyline plus one marker per result for every
/// competitor.
///
/// Competitors are processed in dataset order and that order is the paint
/// order: later competitors draw over earlier ones where trajectories
/// overlap. A competitor with one result yields a lone marker; with none,
/// nothing at all.
pub fn layout_trajectories(
    competitors: &[Competitor],
    scales: &ChartScales,
    config: &ChartConfig,
    frame: &mut LayeredRenderFrame,
) {
    for competitor in competitors {
        let Some(color) = scales.palette.color_for(&competitor.name) else {
            continue;
        };

        let points = project_points(competitor, scales.distance, scales.rank);

        for segment in connect_segments(&points) {
            frame.push_line(
                ChartLayerKind::Trajectory,
                LinePrimitive::new(
                    segment.x1,
                    segment.y1,
                    segment.x2,
                    segment.y2,
                    config.stroke_width_px,
                    color,
                ),
            );
        }

        for point in &points {
            frame.push_circle(
                ChartLayerKind::Trajectory,
                CirclePrimitive::new(
                    point.x,
                    point.y,
                    config.marker_radius_px,
                    color,
                    Color::WHITE,
                    config.stroke_width_px,
                ),
            );
        }
    }
}
