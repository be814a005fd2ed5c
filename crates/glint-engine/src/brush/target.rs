use std::sync::Arc;

use crate::coords::{Point, Rect};
use crate::device::Led;
use crate::paint::Color;

/// An LED paired with its rectangle in the brush's coordinate space.
#[derive(Debug, Clone)]
pub struct RenderTarget {
    led: Arc<Led>,
    rect: Rect,
}

impl RenderTarget {
    pub fn new(led: Arc<Led>, rect: Rect) -> Self {
        Self { led, rect }
    }

    #[inline]
    pub fn led(&self) -> &Arc<Led> {
        &self.led
    }

    /// Rectangle in the brush's space (group-local or surface).
    #[inline]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Top-left of [`RenderTarget::rect`].
    #[inline]
    pub fn location(&self) -> Point {
        self.rect.location
    }

    /// Sampling point for color computation.
    #[inline]
    pub fn center(&self) -> Point {
        self.rect.center()
    }
}

/// Colors produced by one render pass, in target order.
///
/// Built fresh by every [`Brush::render`](super::Brush::render) call, so targets
/// from earlier passes never leak into later ones.
#[derive(Debug, Clone, Default)]
pub struct BrushOutput {
    entries: Vec<(RenderTarget, Color)>,
}

impl BrushOutput {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn push(&mut self, target: RenderTarget, color: Color) {
        self.entries.push((target, color));
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&RenderTarget, Color)> {
        self.entries.iter().map(|(t, c)| (t, *c))
    }

    pub fn colors_mut(&mut self) -> impl Iterator<Item = &mut Color> {
        self.entries.iter_mut().map(|(_, c)| c)
    }
}

impl IntoIterator for BrushOutput {
    type Item = (RenderTarget, Color);
    type IntoIter = std::vec::IntoIter<(RenderTarget, Color)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
