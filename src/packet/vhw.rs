#[cfg(feature = "serde")]
use serde::Serialize;

use crate::{
    prelude::{Codec, Sentence},
    utils::float,
};

/// Water Speed and Heading
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Vhw {
    pub heading_true: f64,
    pub heading_magnetic: f64,
    /// Speed through water, in knots
    pub speed_knots: f64,
    /// Speed through water, in km/h
    pub speed_kmph: f64,
}

impl Codec for Vhw {
    const ID: &'static str = "VHW";
    const NAME: &'static str = "Water Speed and Heading";

    fn decode(fields: &[String]) -> Self {
        Self {
            heading_true: float(fields, 0),
            heading_magnetic: float(fields, 2),
            speed_knots: float(fields, 4),
            speed_kmph: float(fields, 6),
        }
    }

    fn into_sentence(self) -> Sentence {
        Sentence::Vhw(self)
    }

    fn from_sentence(sentence: &Sentence) -> Option<&Self> {
        match sentence {
            Sentence::Vhw(vhw) => Some(vhw),
            _ => None,
        }
    }
}
