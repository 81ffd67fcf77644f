//! # BoxKit Generators
//!
//! Complete box designs built on the BoxKit joinery tilers.
//!
//! - **Flex Box**: jewelry box with bent corners and a living-hinge lid
//! - **Coin Bank Safe**: finger-jointed piggy bank with a door and dials

pub mod coin_bank_safe;
pub mod design;
pub mod error;
pub mod flex_box;

pub use coin_bank_safe::{circle_square_hole, CoinBankParameters, CoinBankSafeMaker, DialVariant};
pub use design::Design;
pub use error::{GeneratorError, GeneratorResult};
pub use flex_box::{FlexBoxLayout, FlexBoxMaker, FlexBoxParameters};
