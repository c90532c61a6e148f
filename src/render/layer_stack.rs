use serde::{Deserialize, Serialize};

/// Chart z-layers, bottom to top: both axis layers sit beneath the
/// trajectories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartLayerKind {
    StageAxis,
    CompetitorAxis,
    Trajectory,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartLayerStack {
    pub layers: Vec<ChartLayerKind>,
}

impl ChartLayerStack {
    #[must_use]
    pub fn canonical() -> Self {
        Self {
            layers: vec![
                ChartLayerKind::StageAxis,
                ChartLayerKind::CompetitorAxis,
                ChartLayerKind::Trajectory,
            ],
        }
    }
}
