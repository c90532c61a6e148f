use serde::{Deserialize, Serialize};

use crate::core::{Margins, Viewport};
use crate::error::{ChartError, ChartResult};

/// Public chart bootstrap configuration.
///
/// This type is serializable so host applications can persist/load chart
/// setup without inventing their own ad-hoc format. Defaults reproduce the
/// reference layout: an 800x600 surface, margins top/bottom 30, left 50,
/// right 30, 1.5px trajectory strokes and 7.5px stage markers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    pub viewport: Viewport,
    #[serde(default)]
    pub margins: Margins,
    #[serde(default = "default_stroke_width_px")]
    pub stroke_width_px: f64,
    #[serde(default = "default_marker_radius_px")]
    pub marker_radius_px: f64,
    #[serde(default = "default_font_size_px")]
    pub font_size_px: f64,
    #[serde(default = "default_tick_length_px")]
    pub tick_length_px: f64,
    #[serde(default = "default_label_offset_px")]
    pub label_offset_px: f64,
}

impl ChartConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            margins: Margins::default(),
            stroke_width_px: default_stroke_width_px(),
            marker_radius_px: default_marker_radius_px(),
            font_size_px: default_font_size_px(),
            tick_length_px: default_tick_length_px(),
            label_offset_px: default_label_offset_px(),
        }
    }

    #[must_use]
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    #[must_use]
    pub fn with_stroke_width(mut self, stroke_width_px: f64) -> Self {
        self.stroke_width_px = stroke_width_px;
        self
    }

    #[must_use]
    pub fn with_marker_radius(mut self, marker_radius_px: f64) -> Self {
        self.marker_radius_px = marker_radius_px;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        if !self.margins.is_valid_for(self.viewport) {
            return Err(ChartError::InvalidConfig(
                "margins must be finite, non-negative and leave a plot area".to_owned(),
            ));
        }
        for (name, value) in [
            ("stroke_width_px", self.stroke_width_px),
            ("marker_radius_px", self.marker_radius_px),
            ("font_size_px", self.font_size_px),
            ("tick_length_px", self.tick_length_px),
            ("label_offset_px", self.label_offset_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidConfig(format!(
                    "`{name}` must be finite and > 0"
                )));
            }
        }
        Ok(())
    }

    pub fn to_json(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|err| ChartError::InvalidConfig(format!("config serialization failed: {err}")))
    }

    pub fn from_json(json: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|err| ChartError::InvalidConfig(format!("config parse failed: {err}")))?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self::new(Viewport::new(800, 600))
    }
}

fn default_stroke_width_px() -> f64 {
    1.5
}

fn default_marker_radius_px() -> f64 {
    7.5
}

fn default_font_size_px() -> f64 {
    10.0
}

fn default_tick_length_px() -> f64 {
    6.0
}

fn default_label_offset_px() -> f64 {
    12.0
}
