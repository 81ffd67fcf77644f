//! # BoxKit
//!
//! Parametric cut-path generator for laser-cut boxes with finger joints,
//! living hinges and rounded, toothed corners.
//!
//! ## Architecture
//!
//! BoxKit is organized as a workspace with multiple crates:
//!
//! 1. **boxkit-core** - Turtle canvas, cut-path model, part placement, errors
//! 2. **boxkit-joinery** - Finger, flex and corner tilers, edges and panels
//! 3. **boxkit-generators** - Complete box designs
//! 4. **boxkit-settings** - Job configuration files
//! 5. **boxkit** - Main binary that renders a job to JSON

pub mod output;

pub use boxkit_core::{
    Bounds, CanvasSettings, CutPath, Direction, Drawing, Error, PathKind, Placement, Point,
    Result, Segment, Step, Turtle, TurtleState,
};
pub use boxkit_generators::{
    CoinBankParameters, CoinBankSafeMaker, Design, DialVariant, FlexBoxMaker, FlexBoxParameters,
    GeneratorError,
};
pub use boxkit_joinery::{
    finger_count_for_arc, finger_edge, fingered_corner, fingered_flex_area, CornerArc, FingerSign,
    FlexPlan, JoineryError, PanelParameters, PanelRole,
};
pub use boxkit_settings::{Config, OutputFormat, OutputSettings, SettingsError};
pub use output::{render_output, PolylineOutput};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Output on stderr, leaving stdout for the cut paths
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
