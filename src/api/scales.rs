use crate::api::ChartConfig;
use crate::core::{Competitor, CompetitorPalette, DistanceScale, RankScale, StageRef};
use crate::error::ChartResult;

/// The three coordinate mappings derived once per render pass and shared
/// read-only by both axis and trajectory layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartScales {
    pub distance: DistanceScale,
    pub rank: RankScale,
    pub palette: CompetitorPalette,
}

impl ChartScales {
    pub fn build(
        stages: &[StageRef],
        competitors: &[Competitor],
        config: &ChartConfig,
    ) -> ChartResult<Self> {
        let distance = DistanceScale::from_stages(stages, config.viewport, config.margins)?;
        let rank =
            RankScale::from_competitor_count(competitors.len(), config.viewport, config.margins)?;
        let palette = CompetitorPalette::from_competitors(competitors);
        Ok(Self {
            distance,
            rank,
            palette,
        })
    }
}
