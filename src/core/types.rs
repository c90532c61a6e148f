use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Plot margins in pixels, measured inward from the viewport edges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margins {
    #[must_use]
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Margins must be finite, non-negative and leave a non-empty plot area.
    #[must_use]
    pub fn is_valid_for(self, viewport: Viewport) -> bool {
        let finite = [self.top, self.right, self.bottom, self.left]
            .iter()
            .all(|value| value.is_finite() && *value >= 0.0);
        finite
            && self.left + self.right < f64::from(viewport.width)
            && self.top + self.bottom < f64::from(viewport.height)
    }
}

impl Default for Margins {
    /// Reference layout margins: top/bottom 30, left 50, right 30.
    fn default() -> Self {
        Self::new(30.0, 30.0, 30.0, 50.0)
    }
}
