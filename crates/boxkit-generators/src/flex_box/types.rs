//! Type definitions for the flex box

use boxkit_joinery::edges::{DovetailSettings, FlexSettings};
use boxkit_joinery::CornerArc;
use serde::{Deserialize, Serialize};

fn default_dovetail() -> DovetailSettings {
    DovetailSettings {
        angle: 30.0,
        size: 2.0,
        ..DovetailSettings::default()
    }
}

/// Requested size of a small jewelry box with flexed corners and a flex
/// hinge. `x` and `y` are targets: the box snaps to whole fingers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlexBoxParameters {
    pub x: f64,
    pub y: f64,
    pub h: f64,
    pub thickness: f64,
    pub burn: f64,
    /// Corner radius in multiples of thickness
    pub radius_factor: u32,
    /// Inner x lip width in multiples of thickness
    pub lip_width_x: u32,
    /// Inner y lip width in multiples of thickness
    pub lip_width_y: u32,
    /// Dovetails joining the strips at the back
    pub dovetail: DovetailSettings,
    pub flex: FlexSettings,
}

impl Default for FlexBoxParameters {
    fn default() -> Self {
        Self {
            x: 165.0,
            y: 115.0,
            h: 60.0,
            thickness: 3.0,
            burn: 0.1,
            radius_factor: 7,
            lip_width_x: 4,
            lip_width_y: 3,
            dovetail: default_dovetail(),
            flex: FlexSettings::default(),
        }
    }
}

/// Finger counts and heights derived from [`FlexBoxParameters`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlexBoxLayout {
    pub corner: CornerArc,
    pub x_base_fingers: u32,
    pub y_base_fingers: u32,
    pub hinge_fingers: u32,
    pub pre_hinge_fingers: u32,
    pub hinge_height: f64,
    pub base_height: f64,
    pub lid_height: f64,
}
