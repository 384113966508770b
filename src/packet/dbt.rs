#[cfg(feature = "serde")]
use serde::Serialize;

use crate::{
    prelude::{Codec, Sentence},
    utils::float,
};

/// Depth Below Transducer
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Dbt {
    pub depth_feet: f64,
    pub depth_meters: f64,
    pub depth_fathoms: f64,
}

impl Codec for Dbt {
    const ID: &'static str = "DBT";
    const NAME: &'static str = "Depth Below Transducer";

    fn decode(fields: &[String]) -> Self {
        Self {
            depth_feet: float(fields, 0),
            depth_meters: float(fields, 2),
            depth_fathoms: float(fields, 4),
        }
    }

    fn into_sentence(self) -> Sentence {
        Sentence::Dbt(self)
    }

    fn from_sentence(sentence: &Sentence) -> Option<&Self> {
        match sentence {
            Sentence::Dbt(dbt) => Some(dbt),
            _ => None,
        }
    }
}
