use crate::coords::Rect;
use crate::paint::Color;

use super::{Brush, BrushError, BrushSettings, CalculationMode, RenderTarget};

/// Paints every target with one color.
#[derive(Debug, Clone, PartialEq)]
pub struct SolidColorBrush {
    pub color: Color,
    pub settings: BrushSettings,
}

impl SolidColorBrush {
    pub fn new(color: Color) -> Self {
        Self {
            color,
            settings: BrushSettings::default(),
        }
    }

    pub fn with_settings(mut self, settings: BrushSettings) -> Self {
        self.settings = settings;
        self
    }
}

impl Brush for SolidColorBrush {
    fn is_enabled(&self) -> bool {
        self.settings.enabled
    }

    fn calculation_mode(&self) -> CalculationMode {
        self.settings.mode
    }

    fn color_at(&self, _bounds: Rect, _target: &RenderTarget) -> Result<Color, BrushError> {
        Ok(self.color)
    }

    fn finalize_color(&self, color: Color) -> Color {
        self.settings.finalize(color)
    }
}
