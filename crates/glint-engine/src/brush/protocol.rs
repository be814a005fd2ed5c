use std::sync::{Arc, Mutex};

use crate::coords::Rect;
use crate::paint::Color;

use super::{BrushError, BrushOutput, CalculationMode, RenderTarget};

/// Brush handle shared between a group and whoever configures the brush.
pub type SharedBrush = Arc<Mutex<dyn Brush>>;

/// Wraps a brush into a [`SharedBrush`].
pub fn shared<B: Brush + 'static>(brush: B) -> SharedBrush {
    Arc::new(Mutex::new(brush))
}

/// Color generation contract.
///
/// The surface drives a brush once per group per update, and only when
/// [`is_enabled`](Brush::is_enabled) returns true:
///
/// 1. [`render`](Brush::render) with bounds and targets laid out per
///    [`calculation_mode`](Brush::calculation_mode)
/// 2. [`update_effects`](Brush::update_effects)
/// 3. [`finalize`](Brush::finalize) on the rendered output
///
/// The finalized output is then written into the targets' LEDs.
///
/// # Failures
///
/// Report failures by returning `Err`: the surface isolates them to the failing
/// group and hands them to observers as render errors. Panics are not isolated.
/// A panicking brush unwinds out of [`Surface::update`](crate::surface::Surface::update)
/// before devices are flushed, and ends a [`TimerTrigger`](crate::trigger::TimerTrigger)
/// thread.
///
/// # Implementing a brush
///
/// Most brushes only implement [`color_at`](Brush::color_at):
///
/// ```rust
/// use glint_engine::brush::{Brush, BrushError, RenderTarget};
/// use glint_engine::coords::Rect;
/// use glint_engine::paint::Color;
///
/// struct Checker;
///
/// impl Brush for Checker {
///     fn color_at(&self, _bounds: Rect, target: &RenderTarget) -> Result<Color, BrushError> {
///         let p = target.location();
///         let odd = ((p.x / 10.0) as i32 + (p.y / 10.0) as i32) % 2 != 0;
///         Ok(if odd { Color::white() } else { Color::black() })
///     }
/// }
/// ```
pub trait Brush: Send {
    fn is_enabled(&self) -> bool {
        true
    }

    fn calculation_mode(&self) -> CalculationMode {
        CalculationMode::Relative
    }

    /// Color for one target inside `bounds`.
    fn color_at(&self, bounds: Rect, target: &RenderTarget) -> Result<Color, BrushError>;

    /// Computes the color of every target. The first failing target aborts the pass.
    fn render(&mut self, bounds: Rect, targets: &[RenderTarget]) -> Result<BrushOutput, BrushError> {
        let mut output = BrushOutput::with_capacity(targets.len());
        for target in targets {
            let color = self.color_at(bounds, target)?;
            output.push(target.clone(), color);
        }
        Ok(output)
    }

    /// Advances animated state. Runs after `render`, before `finalize`.
    fn update_effects(&mut self) -> Result<(), BrushError> {
        Ok(())
    }

    /// Per-color post-processing used by the default [`finalize`](Brush::finalize).
    fn finalize_color(&self, color: Color) -> Color {
        color
    }

    /// Post-processes the rendered output before it is written to LEDs.
    fn finalize(&mut self, mut output: BrushOutput) -> Result<BrushOutput, BrushError> {
        for color in output.colors_mut() {
            *color = self.finalize_color(*color);
        }
        Ok(output)
    }
}
