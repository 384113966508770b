#[cfg(feature = "serde")]
use serde::Serialize;

use crate::{
    prelude::{Codec, Sentence},
    utils::{float, text},
};

/// One satellite record of a GSV sentence
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct SatelliteInView {
    pub prn: u16,
    /// Elevation in degrees
    pub elevation: f64,
    /// Azimuth in degrees true
    pub azimuth: f64,
    /// Signal to noise ratio in dB-Hz, `NaN` when not tracking
    pub snr: f64,
}

/// GNSS Satellites in View
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Gsv {
    pub number_of_messages: f64,
    pub message_number: f64,
    pub satellites_in_view: f64,
    /// Satellites described by this message.
    /// Records with an unreadable PRN are skipped.
    pub satellites: Vec<SatelliteInView>,
}

impl Codec for Gsv {
    const ID: &'static str = "GSV";
    const NAME: &'static str = "GNSS Satellites in View";

    fn decode(fields: &[String]) -> Self {
        // up to 4 records of 4 fields, possibly followed by a signal id
        let satellites = (0..4)
            .map(|n| 3 + n * 4)
            .filter(|i| *i < fields.len())
            .filter_map(|i| {
                let prn = text(fields, i).trim().parse::<u16>().ok()?;
                Some(SatelliteInView {
                    prn,
                    elevation: float(fields, i + 1),
                    azimuth: float(fields, i + 2),
                    snr: float(fields, i + 3),
                })
            })
            .collect();

        Self {
            number_of_messages: float(fields, 0),
            message_number: float(fields, 1),
            satellites_in_view: float(fields, 2),
            satellites,
        }
    }

    fn into_sentence(self) -> Sentence {
        Sentence::Gsv(self)
    }

    fn from_sentence(sentence: &Sentence) -> Option<&Self> {
        match sentence {
            Sentence::Gsv(gsv) => Some(gsv),
            _ => None,
        }
    }
}
