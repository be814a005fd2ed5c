use crate::paint::Color;

use super::CalculationMode;

/// Settings shared by the standard brushes.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BrushSettings {
    pub enabled: bool,
    pub mode: CalculationMode,
    /// Multiplier applied to rgb during finalize.
    pub brightness: f32,
    /// Multiplier applied to alpha during finalize.
    pub opacity: f32,
}

impl Default for BrushSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            mode: CalculationMode::Relative,
            brightness: 1.0,
            opacity: 1.0,
        }
    }
}

impl BrushSettings {
    /// Applies brightness and opacity, then clamps.
    pub fn finalize(&self, color: Color) -> Color {
        let c = color.scale_rgb(self.brightness);
        c.with_alpha(c.a * self.opacity).clamped()
    }
}
