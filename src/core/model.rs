use std::sync::Arc;

/// One timed segment of the event.
///
/// `distance` positions the stage along the course and drives horizontal
/// ordering and spacing only; stages are not required to be evenly spaced or
/// supplied in sorted order.
#[derive(Debug, Clone, PartialEq)]
pub struct Stage {
    pub name: String,
    pub distance: f64,
}

impl Stage {
    #[must_use]
    pub fn new(name: impl Into<String>, distance: f64) -> Self {
        Self {
            name: name.into(),
            distance,
        }
    }
}

/// Shared stage handle: one `Stage` may be referenced by many results.
pub type StageRef = Arc<Stage>;

/// One competitor's outcome at one stage. `position` is the integer rank,
/// 1 = best.
#[derive(Debug, Clone, PartialEq)]
pub struct StageResult {
    pub stage: StageRef,
    pub position: u32,
}

impl StageResult {
    #[must_use]
    pub fn new(stage: StageRef, position: u32) -> Self {
        Self { stage, position }
    }
}

/// A named entrant carrying its results in stage order.
///
/// The result sequence may be shorter than the event's stage list (a
/// competitor who retired) or empty; the chart tolerates both.
#[derive(Debug, Clone, PartialEq)]
pub struct Competitor {
    pub name: String,
    pub results: Vec<StageResult>,
}

impl Competitor {
    #[must_use]
    pub fn new(name: impl Into<String>, results: Vec<StageResult>) -> Self {
        Self {
            name: name.into(),
            results,
        }
    }

    /// Rank of the first recorded result, used to anchor the name label.
    #[must_use]
    pub fn first_position(&self) -> Option<u32> {
        self.results.first().map(|result| result.position)
    }
}
