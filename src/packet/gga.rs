#[cfg(feature = "serde")]
use serde::Serialize;

use crate::{
    prelude::{Codec, Duration, Sentence},
    utils::{latitude, longitude, optional_float, optional_text, text, time_of_day},
};

/// GPS quality indicator
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum FixType {
    /// Fix not available, or indicator we do not understand
    #[default]
    NoFix,
    /// Autonomous GNSS fix
    Fix,
    /// Differential GNSS fix
    Differential,
    /// PPS fix
    Pps,
    /// Real Time Kinematic, fixed integers
    Rtk,
    /// Real Time Kinematic, float integers
    FloatRtk,
    /// Dead reckoning
    Estimated,
    /// Manual input
    Manual,
    /// Simulation
    Simulation,
}

impl FixType {
    fn parse(s: &str) -> Self {
        match s.trim() {
            "1" => Self::Fix,
            "2" => Self::Differential,
            "3" => Self::Pps,
            "4" => Self::Rtk,
            "5" => Self::FloatRtk,
            "6" => Self::Estimated,
            "7" => Self::Manual,
            "8" => Self::Simulation,
            _ => Self::NoFix,
        }
    }

    /// True when a position is available
    pub fn is_fix(&self) -> bool {
        *self != Self::NoFix
    }
}

/// GPS Fix Data
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Gga {
    /// UTC time of day
    pub time: Option<Duration>,
    /// Latitude in decimal degrees (north positive)
    pub latitude: f64,
    /// Longitude in decimal degrees (east positive)
    pub longitude: f64,
    pub fix_type: FixType,
    /// Number of satellites in use
    pub satellites_in_view: Option<f64>,
    pub horizontal_dilution: Option<f64>,
    /// Antenna altitude above mean sea level, in meters
    pub altitude_meters: Option<f64>,
    /// Geoid to ellipsoid separation, in meters
    pub geoidal_separation: Option<f64>,
    /// Age of differential corrections, in seconds
    pub differential_age: Option<f64>,
    pub differential_reference_station: Option<String>,
}

impl Codec for Gga {
    const ID: &'static str = "GGA";
    const NAME: &'static str = "Global Positioning System Fix Data";

    fn decode(fields: &[String]) -> Self {
        Self {
            time: time_of_day(text(fields, 0)),
            latitude: latitude(fields, 1),
            longitude: longitude(fields, 3),
            fix_type: FixType::parse(text(fields, 5)),
            satellites_in_view: optional_float(fields, 6),
            horizontal_dilution: optional_float(fields, 7),
            altitude_meters: optional_float(fields, 8),
            geoidal_separation: optional_float(fields, 10),
            differential_age: optional_float(fields, 12),
            differential_reference_station: optional_text(fields, 13),
        }
    }

    fn into_sentence(self) -> Sentence {
        Sentence::Gga(self)
    }

    fn from_sentence(sentence: &Sentence) -> Option<&Self> {
        match sentence {
            Sentence::Gga(gga) => Some(gga),
            _ => None,
        }
    }
}
