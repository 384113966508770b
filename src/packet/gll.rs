#[cfg(feature = "serde")]
use serde::Serialize;

use crate::{
    prelude::{Codec, Duration, FaaMode, Sentence, Status},
    utils::{latitude, longitude, text, time_of_day},
};

/// Geographic Position, Latitude / Longitude
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Gll {
    /// Latitude in decimal degrees (north positive)
    pub latitude: f64,
    /// Longitude in decimal degrees (east positive)
    pub longitude: f64,
    /// UTC time of day
    pub time: Option<Duration>,
    pub status: Status,
    pub faa_mode: Option<FaaMode>,
}

impl Codec for Gll {
    const ID: &'static str = "GLL";
    const NAME: &'static str = "Geographic Position - Latitude/Longitude";

    fn decode(fields: &[String]) -> Self {
        Self {
            latitude: latitude(fields, 0),
            longitude: longitude(fields, 2),
            time: time_of_day(text(fields, 4)),
            status: Status::parse(text(fields, 5)),
            faa_mode: FaaMode::parse(text(fields, 6)),
        }
    }

    fn into_sentence(self) -> Sentence {
        Sentence::Gll(self)
    }

    fn from_sentence(sentence: &Sentence) -> Option<&Self> {
        match sentence {
            Sentence::Gll(gll) => Some(gll),
            _ => None,
        }
    }
}
