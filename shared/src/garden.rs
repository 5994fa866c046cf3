//! View state of the coloring page: everything around the painting core that
//! decides which color is active and when the board is reset.

use crate::random::RandomSource;
use crate::shape::{random_shape_index, ColoringShape, SHAPES};
use crate::{BoardConfig, Color};

/// Commands the page issues to the painting core.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoardCommand {
    /// Wipe strokes, keep the surface.
    Clear,
    /// Reallocate the surface at its current logical size.
    Reinitialize,
}

#[derive(Clone, Debug)]
pub struct GardenState {
    palette: Vec<Color>,
    color: Color,
    shape_index: usize,
    controls_enabled: bool,
}

impl GardenState {
    pub fn new(config: &BoardConfig) -> Self {
        Self {
            palette: config.palette.clone(),
            color: config.initial_color(),
            shape_index: 0,
            controls_enabled: false,
        }
    }

    pub fn palette(&self) -> &[Color] {
        &self.palette
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn is_active_color(&self, color: Color) -> bool {
        self.color == color
    }

    pub fn shape(&self) -> ColoringShape {
        SHAPES[self.shape_index % SHAPES.len()]
    }

    pub fn controls_enabled(&self) -> bool {
        self.controls_enabled
    }

    /// Selects the palette entry at `index`, returning the new color.
    pub fn select_color(&mut self, index: usize) -> Option<Color> {
        let color = *self.palette.get(index)?;
        self.color = color;
        Some(color)
    }

    pub fn set_controls_enabled(&mut self, enabled: bool) {
        self.controls_enabled = enabled;
    }

    pub fn reload_shape(&self) -> Option<BoardCommand> {
        self.controls_enabled.then_some(BoardCommand::Clear)
    }

    pub fn new_shape(&mut self, rng: &mut impl RandomSource) -> Option<BoardCommand> {
        if !self.controls_enabled {
            return None;
        }
        self.shape_index = random_shape_index(self.shape_index, rng);
        Some(BoardCommand::Reinitialize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_first_palette_color_and_circle() {
        let garden = GardenState::new(&BoardConfig::default());
        assert_eq!(garden.color(), Color::rgb(0xef, 0x44, 0x44));
        assert_eq!(garden.shape(), ColoringShape::Circle);
        assert!(!garden.controls_enabled());
    }

    #[test]
    fn commands_require_enabled_controls() {
        let mut garden = GardenState::new(&BoardConfig::default());
        let mut rng = || 0.5;
        assert_eq!(garden.reload_shape(), None);
        assert_eq!(garden.new_shape(&mut rng), None);
        assert_eq!(garden.shape(), ColoringShape::Circle);

        garden.set_controls_enabled(true);
        assert_eq!(garden.reload_shape(), Some(BoardCommand::Clear));
        assert_eq!(garden.new_shape(&mut rng), Some(BoardCommand::Reinitialize));
        assert_ne!(garden.shape(), ColoringShape::Circle);
    }

    #[test]
    fn selecting_out_of_range_color_keeps_current() {
        let mut garden = GardenState::new(&BoardConfig::default());
        assert_eq!(garden.select_color(42), None);
        assert_eq!(garden.select_color(5), Some(Color::rgb(0x60, 0xa5, 0xfa)));
        assert!(garden.is_active_color(Color::rgb(0x60, 0xa5, 0xfa)));
    }

    #[test]
    fn exactly_one_swatch_is_active_after_selection() {
        let mut garden = GardenState::new(&BoardConfig::default());
        assert_eq!(garden.select_color(2), Some(Color::rgb(0xfa, 0xcc, 0x15)));
        let active = garden
            .palette()
            .iter()
            .enumerate()
            .filter(|(_, color)| garden.is_active_color(**color))
            .map(|(index, _)| index)
            .collect::<Vec<_>>();
        assert_eq!(active, vec![2]);
    }
}
