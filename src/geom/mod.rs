//! Geometry primitives
//!
//! Plain value types created per query. Nothing here holds shared state.

pub mod point;
pub mod range;
pub mod rect;

pub use point::{ArenaVec, Point};
pub use range::Range;
pub use rect::AxisRectangle;
