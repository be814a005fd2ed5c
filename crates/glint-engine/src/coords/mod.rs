//! Geometry types shared by devices, groups and brushes.
//!
//! Surface space:
//! - origin top-left
//! - +X right, +Y down
//!
//! LED rectangles are stored relative to their device; the compositor translates
//! them into surface space (or group-local space) before handing them to brushes.

mod point;
mod rect;
mod size;

pub use point::Point;
pub use rect::Rect;
pub use size::Size;
