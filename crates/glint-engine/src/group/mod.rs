//! LED groups.
//!
//! Responsibilities:
//! - define the [`LedGroup`] contract the surface renders
//! - provide deterministic ordering input ([`ZIndex`]; ties keep attach order)
//! - provide list- and rectangle-based groups

mod contract;
mod list;
mod props;
mod rectangle;
mod z_index;

pub use contract::LedGroup;
pub use list::ListLedGroup;
pub use rectangle::RectangleLedGroup;
pub use z_index::ZIndex;
