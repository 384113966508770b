#[cfg(feature = "serde")]
use serde::Serialize;

use crate::{
    prelude::{Codec, FaaMode, Sentence},
    utils::{float, text},
};

/// Track Made Good and Ground Speed
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Vtg {
    /// Course over ground, degrees true
    pub track_true: f64,
    /// Course over ground, degrees magnetic
    pub track_magnetic: f64,
    pub speed_knots: f64,
    pub speed_kmph: f64,
    pub faa_mode: Option<FaaMode>,
}

impl Codec for Vtg {
    const ID: &'static str = "VTG";
    const NAME: &'static str = "Track Made Good and Ground Speed";

    fn decode(fields: &[String]) -> Self {
        Self {
            track_true: float(fields, 0),
            track_magnetic: float(fields, 2),
            speed_knots: float(fields, 4),
            speed_kmph: float(fields, 6),
            faa_mode: FaaMode::parse(text(fields, 8)),
        }
    }

    fn into_sentence(self) -> Sentence {
        Sentence::Vtg(self)
    }

    fn from_sentence(sentence: &Sentence) -> Option<&Self> {
        match sentence {
            Sentence::Vtg(vtg) => Some(vtg),
            _ => None,
        }
    }
}
