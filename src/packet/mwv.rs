#[cfg(feature = "serde")]
use serde::Serialize;

use crate::{
    constants::KM_PER_NAUTICAL_MILE,
    prelude::{Codec, Sentence, Status},
    utils::{float, text},
};

/// Wind angle reference
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum WindReference {
    /// Apparent wind, relative to the bow
    Relative,
    /// Theoretical wind
    True,
}

/// Wind speed unit
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum SpeedUnit {
    KilometersPerHour,
    MetersPerSecond,
    Knots,
    StatuteMilesPerHour,
}

impl SpeedUnit {
    fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "K" => Some(Self::KilometersPerHour),
            "M" => Some(Self::MetersPerSecond),
            "N" => Some(Self::Knots),
            "S" => Some(Self::StatuteMilesPerHour),
            _ => None,
        }
    }

    /// Converts a speed expressed in this unit to knots
    pub fn to_knots(&self, speed: f64) -> f64 {
        match self {
            Self::Knots => speed,
            Self::KilometersPerHour => speed / KM_PER_NAUTICAL_MILE,
            Self::MetersPerSecond => speed * 3.6 / KM_PER_NAUTICAL_MILE,
            Self::StatuteMilesPerHour => speed * 1.609344 / KM_PER_NAUTICAL_MILE,
        }
    }
}

/// Wind Speed and Angle
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Mwv {
    /// Wind angle, 0 to 359 degrees
    pub wind_angle: f64,
    pub reference: Option<WindReference>,
    pub speed: f64,
    pub units: Option<SpeedUnit>,
    pub status: Status,
}

impl Codec for Mwv {
    const ID: &'static str = "MWV";
    const NAME: &'static str = "Wind Speed and Angle";

    fn decode(fields: &[String]) -> Self {
        let reference = match text(fields, 1).trim() {
            "R" => Some(WindReference::Relative),
            "T" => Some(WindReference::True),
            _ => None,
        };

        Self {
            wind_angle: float(fields, 0),
            reference,
            speed: float(fields, 2),
            units: SpeedUnit::parse(text(fields, 3)),
            status: Status::parse(text(fields, 4)),
        }
    }

    fn into_sentence(self) -> Sentence {
        Sentence::Mwv(self)
    }

    fn from_sentence(sentence: &Sentence) -> Option<&Self> {
        match sentence {
            Sentence::Mwv(mwv) => Some(mwv),
            _ => None,
        }
    }
}
