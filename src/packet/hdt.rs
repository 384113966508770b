#[cfg(feature = "serde")]
use serde::Serialize;

use crate::{
    prelude::{Codec, Sentence},
    utils::float,
};

/// Heading, True
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Hdt {
    /// Heading in degrees true
    pub heading: f64,
}

impl Codec for Hdt {
    const ID: &'static str = "HDT";
    const NAME: &'static str = "Heading - True";

    fn decode(fields: &[String]) -> Self {
        Self {
            heading: float(fields, 0),
        }
    }

    fn into_sentence(self) -> Sentence {
        Sentence::Hdt(self)
    }

    fn from_sentence(sentence: &Sentence) -> Option<&Self> {
        match sentence {
            Sentence::Hdt(hdt) => Some(hdt),
            _ => None,
        }
    }
}
