//! # BoxKit Core
//!
//! Core types shared by the joinery tilers and the box generators:
//! the turtle canvas that every cut is traced with, the cut-path model it
//! accumulates into, part placement, and the error types.

pub mod error;
pub mod path;
pub mod placement;
pub mod turtle;

pub use error::{Error, Result};
pub use path::{Bounds, CutPath, Drawing, PathKind, Point, Segment, POINT_TOLERANCE};
pub use placement::{Direction, Placement};
pub use turtle::{CanvasSettings, SavedContext, Step, Turtle, TurtleState};
