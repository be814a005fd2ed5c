use crate::coords::Rect;
use crate::paint::Color;

use super::{Brush, BrushError, BrushSettings, CalculationMode, RenderTarget};

/// Hue sweep across the bounds' width, drifting every update.
#[derive(Debug, Clone, PartialEq)]
pub struct RainbowBrush {
    /// Hue at the left edge, degrees.
    pub start_hue: f32,
    /// Hue span covered from left to right edge, degrees.
    pub span: f32,
    /// Degrees added to `start_hue` per `update_effects` call.
    pub speed: f32,
    pub settings: BrushSettings,
}

impl Default for RainbowBrush {
    fn default() -> Self {
        Self {
            start_hue: 0.0,
            span: 360.0,
            speed: 2.0,
            settings: BrushSettings::default(),
        }
    }
}

impl RainbowBrush {
    pub fn new(speed: f32) -> Self {
        Self {
            speed,
            ..Self::default()
        }
    }

    pub fn with_settings(mut self, settings: BrushSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn hue_at(&self, bounds: Rect, x: f32) -> f32 {
        let fraction = if bounds.size.width > 0.0 {
            (x - bounds.location.x) / bounds.size.width
        } else {
            0.0
        };
        (self.start_hue + fraction * self.span).rem_euclid(360.0)
    }
}

impl Brush for RainbowBrush {
    fn is_enabled(&self) -> bool {
        self.settings.enabled
    }

    fn calculation_mode(&self) -> CalculationMode {
        self.settings.mode
    }

    fn color_at(&self, bounds: Rect, target: &RenderTarget) -> Result<Color, BrushError> {
        Ok(Color::from_hsv(self.hue_at(bounds, target.center().x), 1.0, 1.0))
    }

    fn update_effects(&mut self) -> Result<(), BrushError> {
        if !self.speed.is_finite() {
            return Err(BrushError::msg(format!("rainbow speed {} is not finite", self.speed)));
        }
        self.start_hue = (self.start_hue + self.speed).rem_euclid(360.0);
        Ok(())
    }

    fn finalize_color(&self, color: Color) -> Color {
        self.settings.finalize(color)
    }
}
