use tracing::{debug, trace};

use crate::api::{
    ChartConfig, ChartScales, layout_competitor_axis, layout_stage_axis, layout_trajectories,
};
use crate::core::{Competitor, StageRef};
use crate::error::ChartResult;
use crate::render::{ChartLayerStack, LayeredRenderFrame, Renderer};

/// Bump chart engine: owns the event dataset, derives scales and hands fully
/// materialized frames to the configured backend.
///
/// Every render pass rebuilds the frame from scratch; there is no
/// incremental update path, so re-rendering the same dataset is idempotent
/// for any backend honoring the full-redraw contract.
pub struct BumpChart<R: Renderer> {
    renderer: R,
    config: ChartConfig,
    stages: Vec<StageRef>,
    competitors: Vec<Competitor>,
}

impl<R: Renderer> BumpChart<R> {
    pub fn new(renderer: R, config: ChartConfig) -> ChartResult<Self> {
        config.validate()?;
        Ok(Self {
            renderer,
            config,
            stages: Vec::new(),
            competitors: Vec::new(),
        })
    }

    /// Replaces the event dataset. Order matters twice: stage order drives
    /// axis layout and competitor order drives both color assignment and
    /// paint order.
    pub fn set_event(&mut self, stages: Vec<StageRef>, competitors: Vec<Competitor>) {
        debug!(
            stage_count = stages.len(),
            competitor_count = competitors.len(),
            "set event data"
        );
        self.stages = stages;
        self.competitors = competitors;
    }

    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    #[must_use]
    pub fn stages(&self) -> &[StageRef] {
        &self.stages
    }

    #[must_use]
    pub fn competitors(&self) -> &[Competitor] {
        &self.competitors
    }

    /// Scale Builder stage: derives the three mappings shared by both
    /// renderers.
    pub fn build_scales(&self) -> ChartResult<ChartScales> {
        ChartScales::build(&self.stages, &self.competitors, &self.config)
    }

    /// Builds the layered scene for one pass without touching the backend.
    pub fn build_layered_frame(&self) -> ChartResult<LayeredRenderFrame> {
        let scales = self.build_scales()?;
        let mut frame =
            LayeredRenderFrame::from_stack(self.config.viewport, ChartLayerStack::canonical());

        layout_stage_axis(&self.stages, scales.distance, &self.config, &mut frame);
        layout_competitor_axis(&self.competitors, scales.rank, &self.config, &mut frame);
        layout_trajectories(&self.competitors, &scales, &self.config, &mut frame);

        Ok(frame)
    }

    /// Builds the chart and hands the flattened frame to the backend.
    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.build_layered_frame()?.flatten();
        trace!(
            lines = frame.lines.len(),
            circles = frame.circles.len(),
            texts = frame.texts.len(),
            "render pass"
        );
        self.renderer.render(&frame)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
