//! Design selection
//!
//! A [`Design`] names one generator together with its parameters, so a whole
//! job can be stored in a single configuration file.

use crate::coin_bank_safe::{CoinBankParameters, CoinBankSafeMaker};
use crate::error::GeneratorResult;
use crate::flex_box::{FlexBoxMaker, FlexBoxParameters};
use boxkit_core::{CanvasSettings, Drawing};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "generator", rename_all = "snake_case")]
pub enum Design {
    FlexBox(FlexBoxParameters),
    CoinBankSafe(CoinBankParameters),
}

impl Default for Design {
    fn default() -> Self {
        Design::FlexBox(FlexBoxParameters::default())
    }
}

impl Design {
    pub fn name(&self) -> &'static str {
        match self {
            Design::FlexBox(_) => "flex_box",
            Design::CoinBankSafe(_) => "coin_bank_safe",
        }
    }

    pub fn canvas(&self) -> CanvasSettings {
        match self {
            Design::FlexBox(p) => CanvasSettings::new(p.thickness, p.burn),
            Design::CoinBankSafe(p) => CanvasSettings::new(p.thickness, p.burn),
        }
    }

    /// Replaces the design's material settings.
    pub fn set_canvas(&mut self, canvas: CanvasSettings) {
        let (thickness, burn) = match self {
            Design::FlexBox(p) => (&mut p.thickness, &mut p.burn),
            Design::CoinBankSafe(p) => (&mut p.thickness, &mut p.burn),
        };
        *thickness = canvas.thickness;
        *burn = canvas.burn;
    }

    /// Validates the parameters and renders every part of the design.
    pub fn render(&self) -> GeneratorResult<Drawing> {
        match self {
            Design::FlexBox(p) => FlexBoxMaker::new(p.clone())?.generate(),
            Design::CoinBankSafe(p) => CoinBankSafeMaker::new(p.clone())?.generate(),
        }
    }
}
