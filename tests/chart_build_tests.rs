use std::sync::Arc;

use approx::assert_relative_eq;
use bump_chart_rs::api::{BumpChart, ChartConfig};
use bump_chart_rs::core::{Competitor, Stage, StageRef, StageResult};
use bump_chart_rs::render::{ChartLayerKind, NullRenderer};

fn reference_event() -> (Vec<StageRef>, Vec<Competitor>) {
    let stages: Vec<StageRef> = [("SS1", 0.0), ("SS2", 1.0), ("SS3", 2.0), ("SS4", 3.0)]
        .into_iter()
        .map(|(name, distance)| Arc::new(Stage::new(name, distance)))
        .collect();

    let competitors = vec![
        Competitor::new(
            "Kalle",
            vec![
                StageResult::new(stages[0].clone(), 1),
                StageResult::new(stages[1].clone(), 1),
                StageResult::new(stages[2].clone(), 2),
            ],
        ),
        Competitor::new(
            "Ott",
            vec![
                StageResult::new(stages[0].clone(), 2),
                StageResult::new(stages[1].clone(), 2),
                StageResult::new(stages[2].clone(), 1),
            ],
        ),
        Competitor::new(
            "Taka",
            vec![
                StageResult::new(stages[0].clone(), 3),
                StageResult::new(stages[1].clone(), 3),
                StageResult::new(stages[2].clone(), 3),
            ],
        ),
    ];

    (stages, competitors)
}

fn reference_chart() -> BumpChart<NullRenderer> {
    let mut chart =
        BumpChart::new(NullRenderer::default(), ChartConfig::default()).expect("chart init");
    let (stages, competitors) = reference_event();
    chart.set_event(stages, competitors);
    chart
}

#[test]
fn reference_scenario_produces_expected_primitive_counts() {
    let chart = reference_chart();
    let frame = chart.build_layered_frame().expect("frame");

    let stage_axis = frame
        .flatten_layer(ChartLayerKind::StageAxis)
        .expect("stage axis");
    assert_eq!(stage_axis.lines.len(), 8, "two dashes per stage");
    assert_eq!(stage_axis.texts.len(), 8, "two labels per stage");

    let competitor_axis = frame
        .flatten_layer(ChartLayerKind::CompetitorAxis)
        .expect("competitor axis");
    assert_eq!(competitor_axis.texts.len(), 3);

    let trajectories = frame
        .flatten_layer(ChartLayerKind::Trajectory)
        .expect("trajectory layer");
    assert_eq!(trajectories.lines.len(), 6, "two segments per competitor");
    assert_eq!(trajectories.circles.len(), 9, "one marker per result");

    let flattened = frame.flatten();
    flattened.validate().expect("valid frame");
    assert_eq!(flattened.lines.len(), 14);
    assert_eq!(flattened.circles.len(), 9);
    assert_eq!(flattened.texts.len(), 11);
}

#[test]
fn trajectories_use_palette_colors_in_dataset_order() {
    let chart = reference_chart();
    let scales = chart.build_scales().expect("scales");
    let frame = chart.build_layered_frame().expect("frame");
    let trajectories = frame
        .flatten_layer(ChartLayerKind::Trajectory)
        .expect("trajectory layer");

    let kalle = scales.palette.color_for("Kalle").expect("kalle color");
    let ott = scales.palette.color_for("Ott").expect("ott color");
    assert_ne!(kalle, ott);

    // Kalle's segments paint first, Ott's second, matching dataset z-order.
    assert_eq!(trajectories.lines[0].color, kalle);
    assert_eq!(trajectories.lines[2].color, ott);
    assert_eq!(trajectories.circles[0].fill, kalle);
}

#[test]
fn kalle_and_ott_swap_vertical_order_between_ss2_and_ss3() {
    let chart = reference_chart();
    let frame = chart.build_layered_frame().expect("frame");
    let trajectories = frame
        .flatten_layer(ChartLayerKind::Trajectory)
        .expect("trajectory layer");

    // Markers land per competitor in result order: Kalle 0..3, Ott 3..6.
    let kalle_ss2 = trajectories.circles[1];
    let kalle_ss3 = trajectories.circles[2];
    let ott_ss2 = trajectories.circles[4];
    let ott_ss3 = trajectories.circles[5];

    assert_relative_eq!(kalle_ss2.cx, ott_ss2.cx);
    assert_relative_eq!(kalle_ss3.cx, ott_ss3.cx);

    let order_at_ss2 = kalle_ss2.cy - ott_ss2.cy;
    let order_at_ss3 = kalle_ss3.cy - ott_ss3.cy;
    assert!(order_at_ss2 < 0.0, "Kalle above Ott at SS2");
    assert!(order_at_ss3 > 0.0, "Ott above Kalle at SS3");
}

#[test]
fn render_is_idempotent_for_the_same_dataset() {
    let mut chart = reference_chart();

    chart.render().expect("first render");
    let after_one = (
        chart.renderer().last_line_count,
        chart.renderer().last_circle_count,
        chart.renderer().last_text_count,
    );

    chart.render().expect("second render");
    let after_two = (
        chart.renderer().last_line_count,
        chart.renderer().last_circle_count,
        chart.renderer().last_text_count,
    );

    assert_eq!(after_one, after_two);
}

#[test]
fn empty_event_renders_an_empty_frame_without_error() {
    let mut chart =
        BumpChart::new(NullRenderer::default(), ChartConfig::default()).expect("chart init");

    chart.render().expect("render of empty event");
    let frame = chart.build_layered_frame().expect("frame");
    assert!(frame.flatten().is_empty());
}

#[test]
fn competitor_without_results_contributes_nothing() {
    let mut chart =
        BumpChart::new(NullRenderer::default(), ChartConfig::default()).expect("chart init");
    let (stages, mut competitors) = reference_event();
    competitors.push(Competitor::new("Retired", Vec::new()));
    chart.set_event(stages, competitors);

    let frame = chart.build_layered_frame().expect("frame");
    let trajectories = frame
        .flatten_layer(ChartLayerKind::Trajectory)
        .expect("trajectory layer");
    assert_eq!(trajectories.circles.len(), 9);
    assert_eq!(trajectories.lines.len(), 6);

    let competitor_axis = frame
        .flatten_layer(ChartLayerKind::CompetitorAxis)
        .expect("competitor axis");
    assert_eq!(competitor_axis.texts.len(), 3, "no label for empty entrant");
}

#[test]
fn single_stage_event_renders_finite_geometry() {
    let mut chart =
        BumpChart::new(NullRenderer::default(), ChartConfig::default()).expect("chart init");
    let stage: StageRef = Arc::new(Stage::new("SS1", 12.5));
    let competitors = vec![Competitor::new(
        "Solo",
        vec![StageResult::new(stage.clone(), 1)],
    )];
    chart.set_event(vec![stage], competitors);

    let frame = chart.build_layered_frame().expect("frame");
    let flattened = frame.flatten();
    flattened.validate().expect("finite geometry");

    // Degenerate domains: one distance, one competitor. Marker sits at the
    // plot midpoint, with no connecting segments.
    let trajectories = frame
        .flatten_layer(ChartLayerKind::Trajectory)
        .expect("trajectory layer");
    assert_eq!(trajectories.lines.len(), 0);
    assert_eq!(trajectories.circles.len(), 1);
    assert_relative_eq!(trajectories.circles[0].cx, 410.0);
    assert_relative_eq!(trajectories.circles[0].cy, 300.0);
}
