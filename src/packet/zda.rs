#[cfg(feature = "serde")]
use serde::Serialize;

use crate::{
    prelude::{Codec, Epoch, Sentence},
    utils::{epoch, float, text},
};

/// Time & Date
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Zda {
    /// UTC date and time, when all calendar fields are readable
    pub datetime: Option<Epoch>,
    /// Local zone hours, signed
    pub local_zone_hours: f64,
    /// Local zone minutes
    pub local_zone_minutes: f64,
}

impl Zda {
    /// Local zone offset, in minutes: `hours * 60 + minutes`.
    pub fn local_zone_offset_minutes(&self) -> f64 {
        self.local_zone_hours * 60.0 + self.local_zone_minutes
    }
}

impl Codec for Zda {
    const ID: &'static str = "ZDA";
    const NAME: &'static str = "Time & Date - UTC, day, month, year and local time zone";

    fn decode(fields: &[String]) -> Self {
        let day = text(fields, 1).trim().parse::<u8>().ok();
        let month = text(fields, 2).trim().parse::<u8>().ok();
        let year = text(fields, 3).trim().parse::<i32>().ok();

        let datetime = match (year, month, day) {
            (Some(year), Some(month), Some(day)) => epoch(year, month, day, text(fields, 0)),
            _ => None,
        };

        Self {
            datetime,
            local_zone_hours: float(fields, 4),
            local_zone_minutes: float(fields, 5),
        }
    }

    fn into_sentence(self) -> Sentence {
        Sentence::Zda(self)
    }

    fn from_sentence(sentence: &Sentence) -> Option<&Self> {
        match sentence {
            Sentence::Zda(zda) => Some(zda),
            _ => None,
        }
    }
}
