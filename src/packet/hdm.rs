#[cfg(feature = "serde")]
use serde::Serialize;

use crate::{
    prelude::{Codec, Sentence},
    utils::float,
};

/// Heading, Magnetic
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Hdm {
    /// Heading in degrees magnetic
    pub heading: f64,
}

impl Codec for Hdm {
    const ID: &'static str = "HDM";
    const NAME: &'static str = "Heading - Magnetic";

    fn decode(fields: &[String]) -> Self {
        Self {
            heading: float(fields, 0),
        }
    }

    fn into_sentence(self) -> Sentence {
        Sentence::Hdm(self)
    }

    fn from_sentence(sentence: &Sentence) -> Option<&Self> {
        match sentence {
            Sentence::Hdm(hdm) => Some(hdm),
            _ => None,
        }
    }
}
