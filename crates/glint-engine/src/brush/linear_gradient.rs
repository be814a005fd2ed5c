use crate::coords::{Point, Rect};
use crate::paint::{Color, ColorStop, Gradient, SpreadMode};

use super::{Brush, BrushError, BrushSettings, CalculationMode, RenderTarget};

/// Interpolates color stops along an axis.
///
/// `start` and `end` are in normalized bounds space: (0, 0) is the top-left of
/// the bounds handed to the brush, (1, 1) the bottom-right. Each target is
/// sampled at its center, projected onto the axis.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradientBrush {
    pub start: Point,
    pub end: Point,
    pub gradient: Gradient,
    pub spread: SpreadMode,
    pub settings: BrushSettings,
}

impl LinearGradientBrush {
    /// Left-to-right gradient over the bounds.
    pub fn horizontal(stops: Vec<ColorStop>) -> Self {
        Self::new(Point::new(0.0, 0.5), Point::new(1.0, 0.5), stops, SpreadMode::Pad)
    }

    pub fn new(start: Point, end: Point, stops: Vec<ColorStop>, spread: SpreadMode) -> Self {
        Self {
            start,
            end,
            gradient: Gradient::new(stops),
            spread,
            settings: BrushSettings::default(),
        }
    }

    pub fn with_settings(mut self, settings: BrushSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Returns true when the brush can render.
    pub fn is_valid(&self) -> bool {
        self.start.is_finite()
            && self.end.is_finite()
            && self.gradient.is_valid()
            && (self.end.x != self.start.x || self.end.y != self.start.y)
    }

    fn parameter(&self, p: Point) -> f32 {
        let axis = self.end - self.start;
        let rel = p - self.start;
        let len_sq = axis.x * axis.x + axis.y * axis.y;
        (rel.x * axis.x + rel.y * axis.y) / len_sq
    }
}

fn normalize(bounds: Rect, p: Point) -> Point {
    let n = |v: f32, origin: f32, extent: f32| {
        if extent > 0.0 { (v - origin) / extent } else { 0.0 }
    };
    Point::new(
        n(p.x, bounds.location.x, bounds.size.width),
        n(p.y, bounds.location.y, bounds.size.height),
    )
}

impl Brush for LinearGradientBrush {
    fn is_enabled(&self) -> bool {
        self.settings.enabled
    }

    fn calculation_mode(&self) -> CalculationMode {
        self.settings.mode
    }

    fn color_at(&self, bounds: Rect, target: &RenderTarget) -> Result<Color, BrushError> {
        if !self.is_valid() {
            return Err(BrushError::InvalidGradient);
        }
        let t = self.parameter(normalize(bounds, target.center()));
        Ok(self.gradient.sample(self.spread.apply(t)))
    }

    fn finalize_color(&self, color: Color) -> Color {
        self.settings.finalize(color)
    }
}
