use std::sync::{Arc, PoisonError};

use crate::brush::{CalculationMode, RenderTarget};
use crate::coords::{Point, Rect};
use crate::device::Led;
use crate::group::LedGroup;

use super::{RenderError, RenderPhase};

/// Result of rendering one group.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub(crate) enum GroupOutcome {
    /// Colors were written to this many LEDs.
    Rendered(usize),
    /// No brush, or the brush is disabled.
    Skipped,
}

/// Bounds and targets handed to a brush.
pub(crate) fn layout(mode: CalculationMode, leds: &[Arc<Led>], surface_rect: Rect) -> (Rect, Vec<RenderTarget>) {
    match mode {
        CalculationMode::Relative => {
            let group_rect = Rect::union_all(leds.iter().map(|led| led.absolute_rect()));
            let offset = -group_rect.location;
            let bounds = Rect::from_location_size(Point::zero(), group_rect.size);
            let targets = leds
                .iter()
                .map(|led| RenderTarget::new(led.clone(), led.absolute_rect().translate(offset)))
                .collect();
            (bounds, targets)
        }
        CalculationMode::Absolute => {
            let targets = leds
                .iter()
                .map(|led| RenderTarget::new(led.clone(), led.absolute_rect()))
                .collect();
            (surface_rect, targets)
        }
    }
}

/// Renders one group: snapshot members, run the brush phases, write colors.
///
/// LED colors are only written after every brush phase succeeded, so a failing
/// brush leaves the group's LEDs untouched for this cycle.
pub(crate) fn render_group(group: &dyn LedGroup, surface_rect: Rect) -> Result<GroupOutcome, RenderError> {
    let leds = group.leds();

    let Some(brush) = group.brush() else {
        return Ok(GroupOutcome::Skipped);
    };
    let mut brush = brush.lock().unwrap_or_else(PoisonError::into_inner);
    if !brush.is_enabled() {
        return Ok(GroupOutcome::Skipped);
    }

    let fail = |phase: RenderPhase| {
        move |source| RenderError {
            group: group.name().to_string(),
            z_index: group.z_index(),
            phase,
            source,
        }
    };

    let (bounds, targets) = layout(brush.calculation_mode(), &leds, surface_rect);

    let output = brush.render(bounds, &targets).map_err(fail(RenderPhase::Render))?;
    brush.update_effects().map_err(fail(RenderPhase::UpdateEffects))?;
    let output = brush.finalize(output).map_err(fail(RenderPhase::Finalize))?;
    drop(brush);

    let written = output.len();
    for (target, color) in output {
        target.led().set_color(color);
    }

    Ok(GroupOutcome::Rendered(written))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::{LedId, Placement};

    fn leds_at(device: Point, rects: &[Rect]) -> Vec<Arc<Led>> {
        let placement = Arc::new(Placement::new(device));
        rects
            .iter()
            .enumerate()
            .map(|(i, r)| Arc::new(Led::new(LedId(i as u32), *r, placement.clone())))
            .collect()
    }

    #[test]
    fn relative_layout_moves_group_to_origin() {
        let leds = leds_at(
            Point::new(5.0, 5.0),
            &[Rect::new(0.0, 0.0, 0.0, 0.0), Rect::new(10.0, 20.0, 0.0, 0.0)],
        );
        let (bounds, targets) = layout(CalculationMode::Relative, &leds, Rect::new(0.0, 0.0, 500.0, 500.0));

        assert_eq!(bounds, Rect::new(0.0, 0.0, 10.0, 20.0));
        assert_eq!(targets[0].location(), Point::new(0.0, 0.0));
        assert_eq!(targets[1].location(), Point::new(10.0, 20.0));
    }

    #[test]
    fn relative_layout_includes_led_extent() {
        let leds = leds_at(
            Point::new(40.0, 0.0),
            &[Rect::new(0.0, 0.0, 2.0, 2.0), Rect::new(8.0, 0.0, 2.0, 2.0)],
        );
        let (bounds, targets) = layout(CalculationMode::Relative, &leds, Rect::zero());
        assert_eq!(bounds, Rect::new(0.0, 0.0, 10.0, 2.0));
        assert_eq!(targets[1].rect(), Rect::new(8.0, 0.0, 2.0, 2.0));
    }

    #[test]
    fn absolute_layout_uses_surface() {
        let leds = leds_at(Point::new(5.0, 5.0), &[Rect::new(10.0, 20.0, 1.0, 1.0)]);
        let surface = Rect::new(0.0, 0.0, 100.0, 50.0);
        let (bounds, targets) = layout(CalculationMode::Absolute, &leds, surface);

        assert_eq!(bounds, surface);
        assert_eq!(targets[0].rect(), Rect::new(15.0, 25.0, 1.0, 1.0));
    }

    #[test]
    fn empty_group_has_zero_bounds() {
        let (bounds, targets) = layout(CalculationMode::Relative, &[], Rect::new(0.0, 0.0, 9.0, 9.0));
        assert_eq!(bounds, Rect::zero());
        assert!(targets.is_empty());
    }
}
