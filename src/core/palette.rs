use indexmap::IndexMap;

use crate::core::model::Competitor;
use crate::render::Color;

/// Number of distinct colors in the categorical scheme.
pub const CATEGORY_COLOR_COUNT: usize = 10;

/// The standard 10-color categorical scheme used by the original chart.
const CATEGORY10: [Color; CATEGORY_COLOR_COUNT] = [
    Color::from_rgb8(0x1f, 0x77, 0xb4),
    Color::from_rgb8(0xff, 0x7f, 0x0e),
    Color::from_rgb8(0x2c, 0xa0, 0x2c),
    Color::from_rgb8(0xd6, 0x27, 0x28),
    Color::from_rgb8(0x94, 0x67, 0xbd),
    Color::from_rgb8(0x8c, 0x56, 0x4b),
    Color::from_rgb8(0xe3, 0x77, 0xc2),
    Color::from_rgb8(0x7f, 0x7f, 0x7f),
    Color::from_rgb8(0xbc, 0xbd, 0x22),
    Color::from_rgb8(0x17, 0xbe, 0xcf),
];

/// Categorical name-to-color assignment in first-encounter dataset order.
///
/// Colors cycle once competitor count exceeds the scheme size, so assignment
/// stays deterministic for a fixed dataset ordering across renders.
/// `IndexMap` preserves insertion order, which is what makes the assignment
/// stable.
#[derive(Debug, Clone, PartialEq)]
pub struct CompetitorPalette {
    assigned: IndexMap<String, Color>,
}

impl CompetitorPalette {
    #[must_use]
    pub fn from_competitors(competitors: &[Competitor]) -> Self {
        let mut assigned = IndexMap::new();
        for competitor in competitors {
            if assigned.contains_key(&competitor.name) {
                continue;
            }
            let color = CATEGORY10[assigned.len() % CATEGORY_COLOR_COUNT];
            assigned.insert(competitor.name.clone(), color);
        }
        Self { assigned }
    }

    #[must_use]
    pub fn color_for(&self, name: &str) -> Option<Color> {
        self.assigned.get(name).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.assigned.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assigned.is_empty()
    }

    /// Assigned names in first-encounter order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.assigned.keys().map(String::as_str)
    }
}
