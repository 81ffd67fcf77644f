//! # BoxKit Joinery
//!
//! Parametric joinery drawn with the BoxKit turtle.
//!
//! ## Tilers
//!
//! - **Finger edge**: whole-finger tooth runs for flat joints
//! - **Flex area**: living-hinge slit combs for bending a strip
//! - **Corner curve**: quarter circles built from finger teeth
//! - **Plate composer**: frames, plates and the front and back strips of a
//!   box with flexing corners
//!
//! ## Edges
//!
//! - **Edge toolbox**: finger joints, finger holes, dovetails, stackable feet
//!   and flex edges, keyed by a single character
//! - **Rectangular walls**: four-sided panels described by edge characters

pub mod corner_curve;
pub mod edges;
pub mod error;
pub mod finger_edge;
pub mod flex_area;
pub mod pitch;
pub mod plate;
pub mod wall;

pub use corner_curve::fingered_corner;
pub use edges::{EdgeKind, EdgeSettings, Edges};
pub use error::{JoineryError, JoineryResult, ParameterError};
pub use finger_edge::{finger_edge, FingerSign};
pub use flex_area::{fingered_flex_area, FlexPlan};
pub use pitch::{finger_count_for_arc, finger_count_for_length, CornerArc};
pub use plate::{
    back_plates, front_plate, plate, plate_outline, BackPlateLayout, PanelParameters, PanelRole,
};
pub use wall::rectangular_wall;
