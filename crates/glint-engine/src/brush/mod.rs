//! Brush protocol and the standard brushes.
//!
//! Responsibilities:
//! - define the multi-phase [`Brush`] contract (render, effects, finalize)
//! - carry render targets and the per-pass [`BrushOutput`]
//! - provide solid, gradient and rainbow brushes

mod error;
mod linear_gradient;
mod mode;
mod protocol;
mod rainbow;
mod settings;
mod solid;
mod target;

pub use error::BrushError;
pub use linear_gradient::LinearGradientBrush;
pub use mode::CalculationMode;
pub use protocol::{shared, Brush, SharedBrush};
pub use rainbow::RainbowBrush;
pub use settings::BrushSettings;
pub use solid::SolidColorBrush;
pub use target::{BrushOutput, RenderTarget};
