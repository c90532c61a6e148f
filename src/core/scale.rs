use ordered_float::OrderedFloat;

use crate::core::model::StageRef;
use crate::core::types::{Margins, Viewport};
use crate::error::{ChartError, ChartResult};

/// Linear mapping from stage distance to pixel x inside the plot area.
///
/// The domain is the min/max over all stage distances regardless of input
/// order. A zero-width domain (single distance value, or no stages at all)
/// maps every input to the midpoint of the pixel range, matching the
/// zero-width fallback of the original rendering library, so no coordinate
/// ever degenerates to NaN.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl DistanceScale {
    pub fn from_stages(
        stages: &[StageRef],
        viewport: Viewport,
        margins: Margins,
    ) -> ChartResult<Self> {
        check_plot_area(viewport, margins)?;

        for stage in stages {
            if !stage.distance.is_finite() {
                return Err(ChartError::InvalidData(format!(
                    "stage `{}` has a non-finite distance",
                    stage.name
                )));
            }
        }

        let domain_start = stages
            .iter()
            .map(|stage| OrderedFloat(stage.distance))
            .min()
            .map_or(0.0, OrderedFloat::into_inner);
        let domain_end = stages
            .iter()
            .map(|stage| OrderedFloat(stage.distance))
            .max()
            .map_or(0.0, OrderedFloat::into_inner);

        Ok(Self {
            domain_start,
            domain_end,
            range_start: margins.left,
            range_end: f64::from(viewport.width) - margins.right,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.domain_start == self.domain_end
    }

    /// Total mapping: degenerate domains land on the range midpoint.
    #[must_use]
    pub fn to_pixel(self, distance: f64) -> f64 {
        let span = self.domain_end - self.domain_start;
        if span == 0.0 {
            return 0.5 * (self.range_start + self.range_end);
        }
        let normalized = (distance - self.domain_start) / span;
        self.range_start + normalized * (self.range_end - self.range_start)
    }
}

/// Linear mapping from rank to pixel y inside the plot area.
///
/// Domain is `[1, competitor_count]`, range is `[top, height - bottom]`, both
/// increasing: rank 1 sits at the top margin, rank N at the bottom margin.
/// A single competitor (zero-width domain) lands on the range midpoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankScale {
    rank_count: u32,
    range_start: f64,
    range_end: f64,
}

impl RankScale {
    pub fn from_competitor_count(
        count: usize,
        viewport: Viewport,
        margins: Margins,
    ) -> ChartResult<Self> {
        check_plot_area(viewport, margins)?;

        let rank_count = u32::try_from(count).map_err(|_| {
            ChartError::InvalidData(format!("competitor count {count} exceeds rank domain"))
        })?;

        Ok(Self {
            rank_count,
            range_start: margins.top,
            range_end: f64::from(viewport.height) - margins.bottom,
        })
    }

    #[must_use]
    pub fn rank_count(self) -> u32 {
        self.rank_count
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.rank_count <= 1
    }

    /// Total mapping: degenerate domains land on the range midpoint.
    #[must_use]
    pub fn to_pixel(self, position: u32) -> f64 {
        if self.rank_count <= 1 {
            return 0.5 * (self.range_start + self.range_end);
        }
        let span = f64::from(self.rank_count - 1);
        let normalized = (f64::from(position) - 1.0) / span;
        self.range_start + normalized * (self.range_end - self.range_start)
    }
}

fn check_plot_area(viewport: Viewport, margins: Margins) -> ChartResult<()> {
    if !viewport.is_valid() {
        return Err(ChartError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }
    if !margins.is_valid_for(viewport) {
        return Err(ChartError::InvalidConfig(
            "margins must be finite, non-negative and leave a plot area".to_owned(),
        ));
    }
    Ok(())
}
