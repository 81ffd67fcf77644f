//! Part placement
//!
//! Every part is drawn in its own slot on the sheet. A placement says where
//! the cursor goes relative to that slot: `"right"` leaves the cursor to the
//! right of the part, `"up only"` reserves the slot without drawing it, and
//! `"mirror right"` flips the part before moving on.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Down and left moves happen before the part is drawn.
    pub fn before_drawing(self) -> bool {
        matches!(self, Direction::Down | Direction::Left)
    }

    fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Parsed placement directive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub directions: Vec<Direction>,
    /// Move without drawing.
    pub only: bool,
    /// Reflect the part about its vertical center line.
    pub mirror: bool,
    /// Swap the slot's width and height.
    pub rotated: bool,
}

impl Placement {
    /// Draw in place, leaving the cursor where it was.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn toward(direction: Direction) -> Self {
        Self {
            directions: vec![direction],
            ..Self::default()
        }
    }

    pub fn only(mut self) -> Self {
        self.only = true;
        self
    }

    pub fn mirrored(mut self) -> Self {
        self.mirror = true;
        self
    }
}

impl FromStr for Placement {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut placement = Placement::none();
        for term in s.split_whitespace() {
            match term.to_ascii_lowercase().as_str() {
                "up" => placement.directions.push(Direction::Up),
                "down" => placement.directions.push(Direction::Down),
                "left" => placement.directions.push(Direction::Left),
                "right" => placement.directions.push(Direction::Right),
                "only" => placement.only = true,
                "mirror" => placement.mirror = true,
                "rotated" => placement.rotated = true,
                _ => {
                    return Err(Error::InvalidPlacement {
                        term: term.to_string(),
                        placement: s.to_string(),
                    })
                }
            }
        }
        Ok(placement)
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut terms: Vec<&str> = Vec::new();
        if self.mirror {
            terms.push("mirror");
        }
        if self.rotated {
            terms.push("rotated");
        }
        terms.extend(self.directions.iter().map(|d| d.as_str()));
        if self.only {
            terms.push("only");
        }
        write!(f, "{}", terms.join(" "))
    }
}
