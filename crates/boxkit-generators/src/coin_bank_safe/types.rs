//! Type definitions for the coin bank safe

use boxkit_joinery::edges::FingerJointSettings;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoinBankParameters {
    pub x: f64,
    pub y: f64,
    pub h: f64,
    pub thickness: f64,
    pub burn: f64,
    /// Length of the coin slot in mm
    pub slot_length: f64,
    /// Width of the coin slot in mm
    pub slot_width: f64,
    /// Length of the handle in multiples of thickness
    pub handle_length: f64,
    pub finger_joint: FingerJointSettings,
}

impl Default for CoinBankParameters {
    fn default() -> Self {
        Self {
            x: 100.0,
            y: 100.0,
            h: 100.0,
            thickness: 3.0,
            burn: 0.1,
            slot_length: 35.0,
            slot_width: 5.0,
            handle_length: 6.0,
            finger_joint: FingerJointSettings::default(),
        }
    }
}

/// Shape cut around a square axle hole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DialVariant {
    /// Plain disc
    #[default]
    Round,
    /// Disc with one flat side
    D,
    /// Knob with a wavy rim
    Wavy,
}
