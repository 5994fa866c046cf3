use serde::{Deserialize, Serialize};

use crate::Color;

pub const DEFAULT_BOARD_SIZE: f64 = 420.0;
pub const BRUSH_SIZE: f64 = 26.0;
pub const RESIZE_EPSILON: f64 = 0.5;

pub const COLOR_PALETTE: [&str; 10] = [
    "#ef4444", "#f97316", "#facc15", "#4ade80", "#22d3ee", "#60a5fa", "#818cf8", "#a855f7",
    "#ec4899", "#fb7185",
];

/// Painting constants for one coloring board. Missing fields in a
/// deserialized config take their default values.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct BoardConfig {
    /// Logical size used before the container has been measured.
    pub default_board_size: f64,
    pub brush_size: f64,
    /// Size changes at or below this are treated as layout jitter.
    pub resize_epsilon: f64,
    pub palette: Vec<Color>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            default_board_size: DEFAULT_BOARD_SIZE,
            brush_size: BRUSH_SIZE,
            resize_epsilon: RESIZE_EPSILON,
            palette: COLOR_PALETTE
                .iter()
                .filter_map(|value| Color::parse(value).ok())
                .collect(),
        }
    }
}

impl BoardConfig {
    pub fn initial_color(&self) -> Color {
        self.palette
            .first()
            .copied()
            .unwrap_or(Color::rgb(0x1f, 0x1f, 0x1f))
    }

    /// Replaces unusable numeric values with their defaults.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !(self.default_board_size.is_finite() && self.default_board_size > 0.0) {
            self.default_board_size = defaults.default_board_size;
        }
        if !(self.brush_size.is_finite() && self.brush_size > 0.0) {
            self.brush_size = defaults.brush_size;
        }
        if !(self.resize_epsilon.is_finite() && self.resize_epsilon >= 0.0) {
            self.resize_epsilon = defaults.resize_epsilon;
        }
        if self.palette.is_empty() {
            self.palette = defaults.palette;
        }
        self
    }
}
