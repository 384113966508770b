#[cfg(feature = "serde")]
use serde::Serialize;

use crate::{
    prelude::{Codec, Direction, Sentence},
    utils::{float, text},
};

/// Heading, Deviation & Variation
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Hdg {
    /// Magnetic sensor heading, in degrees
    pub heading: f64,
    /// Magnetic deviation magnitude, in degrees
    pub deviation: f64,
    pub deviation_direction: Option<Direction>,
    /// Magnetic variation magnitude, in degrees
    pub variation: f64,
    pub variation_direction: Option<Direction>,
}

impl Hdg {
    /// Magnetic variation in degrees, east positive
    pub fn signed_variation(&self) -> f64 {
        Direction::signed(self.variation_direction, self.variation)
    }

    /// Magnetic deviation in degrees, east positive
    pub fn signed_deviation(&self) -> f64 {
        Direction::signed(self.deviation_direction, self.deviation)
    }
}

impl Codec for Hdg {
    const ID: &'static str = "HDG";
    const NAME: &'static str = "Heading - Deviation & Variation";

    fn decode(fields: &[String]) -> Self {
        Self {
            heading: float(fields, 0),
            deviation: float(fields, 1),
            deviation_direction: Direction::parse(text(fields, 2)),
            variation: float(fields, 3),
            variation_direction: Direction::parse(text(fields, 4)),
        }
    }

    fn into_sentence(self) -> Sentence {
        Sentence::Hdg(self)
    }

    fn from_sentence(sentence: &Sentence) -> Option<&Self> {
        match sentence {
            Sentence::Hdg(hdg) => Some(hdg),
            _ => None,
        }
    }
}
