#[cfg(feature = "serde")]
use serde::Serialize;

use crate::{
    prelude::{Codec, Direction, Epoch, FaaMode, Sentence, Status},
    utils::{datetime, float, latitude, longitude, text},
};

/// Recommended Minimum Specific GNSS Data
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Rmc {
    /// UTC date and time, when both fields are readable
    pub datetime: Option<Epoch>,
    pub status: Status,
    /// Latitude in decimal degrees (north positive)
    pub latitude: f64,
    /// Longitude in decimal degrees (east positive)
    pub longitude: f64,
    /// Speed over ground, in knots
    pub speed_knots: f64,
    /// Course over ground, in degrees true
    pub track_true: f64,
    /// Magnetic variation magnitude, in degrees
    pub variation: f64,
    pub variation_direction: Option<Direction>,
    pub faa_mode: Option<FaaMode>,
}

impl Rmc {
    /// Magnetic variation in degrees, east positive
    pub fn signed_variation(&self) -> f64 {
        Direction::signed(self.variation_direction, self.variation)
    }
}

impl Codec for Rmc {
    const ID: &'static str = "RMC";
    const NAME: &'static str = "Recommended Minimum Specific GNSS Data";

    fn decode(fields: &[String]) -> Self {
        Self {
            datetime: datetime(text(fields, 8), text(fields, 0)),
            status: Status::parse(text(fields, 1)),
            latitude: latitude(fields, 2),
            longitude: longitude(fields, 4),
            speed_knots: float(fields, 6),
            track_true: float(fields, 7),
            variation: float(fields, 9),
            variation_direction: Direction::parse(text(fields, 10)),
            faa_mode: FaaMode::parse(text(fields, 11)),
        }
    }

    fn into_sentence(self) -> Sentence {
        Sentence::Rmc(self)
    }

    fn from_sentence(sentence: &Sentence) -> Option<&Self> {
        match sentence {
            Sentence::Rmc(rmc) => Some(rmc),
            _ => None,
        }
    }
}
