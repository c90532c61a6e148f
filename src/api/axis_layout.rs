use crate::api::ChartConfig;
use crate::core::{Competitor, DistanceScale, RankScale, StageRef};
use crate::render::{
    ChartLayerKind, Color, LayeredRenderFrame, LinePrimitive, TextHAlign, TextPrimitive,
};

const AXIS_STROKE_WIDTH: f64 = 1.0;

/// Lays out the horizontal stage axis: per stage, one short tick dash just
/// above the top margin, an independent dash just below the bottom margin,
/// and a rotated stage name outside each dash.
///
/// Both labels read bottom-to-top; the top copy is start-anchored and the
/// bottom copy end-anchored, so they run outward from the plot in the same
/// visual direction. Stages are laid out in supplied order, including stages
/// no competitor ever reached.
pub fn layout_stage_axis(
    stages: &[StageRef],
    distance_scale: DistanceScale,
    config: &ChartConfig,
    frame: &mut LayeredRenderFrame,
) {
    let top = config.margins.top;
    let bottom = f64::from(config.viewport.height) - config.margins.bottom;

    for stage in stages {
        let x = distance_scale.to_pixel(stage.distance);

        frame.push_line(
            ChartLayerKind::StageAxis,
            LinePrimitive::new(
                x,
                top - config.tick_length_px,
                x,
                top,
                AXIS_STROKE_WIDTH,
                Color::FOREGROUND,
            ),
        );
        frame.push_line(
            ChartLayerKind::StageAxis,
            LinePrimitive::new(
                x,
                bottom,
                x,
                bottom + config.tick_length_px,
                AXIS_STROKE_WIDTH,
                Color::FOREGROUND,
            ),
        );

        frame.push_text(
            ChartLayerKind::StageAxis,
            TextPrimitive::new(
                stage.name.clone(),
                x,
                top - config.label_offset_px,
                config.font_size_px,
                Color::FOREGROUND,
                TextHAlign::Left,
            )
            .with_rotation(-90.0),
        );
        frame.push_text(
            ChartLayerKind::StageAxis,
            TextPrimitive::new(
                stage.name.clone(),
                x,
                bottom + config.label_offset_px,
                config.font_size_px,
                Color::FOREGROUND,
                TextHAlign::Right,
            )
            .with_rotation(-90.0),
        );
    }
}

/// Lays out competitor name labels, each anchored at the rank of the
/// competitor's first recorded result. A competitor with no results gets no
/// label. Labels start at the surface's left edge, inside the left margin
/// band.
pub fn layout_competitor_axis(
    competitors: &[Competitor],
    rank_scale: RankScale,
    config: &ChartConfig,
    frame: &mut LayeredRenderFrame,
) {
    for competitor in competitors {
        let Some(position) = competitor.first_position() else {
            continue;
        };
        frame.push_text(
            ChartLayerKind::CompetitorAxis,
            TextPrimitive::new(
                competitor.name.clone(),
                0.0,
                rank_scale.to_pixel(position),
                config.font_size_px,
                Color::FOREGROUND,
                TextHAlign::Left,
            ),
        );
    }
}
