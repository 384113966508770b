#[cfg(feature = "serde")]
use serde::Serialize;

use crate::{
    prelude::{Codec, Sentence},
    utils::{float, text},
};

/// Satellite selection mode
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum SelectionMode {
    #[default]
    Automatic,
    Manual,
}

/// Navigation mode reported by GSA
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum FixMode {
    #[default]
    NoFix,
    Fix2D,
    Fix3D,
}

/// GNSS DOP and Active Satellites
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Gsa {
    pub selection_mode: SelectionMode,
    pub fix_mode: FixMode,
    /// PRN of satellites used in the solution. Empty or unreadable slots are skipped.
    pub satellites: Vec<u16>,
    pub pdop: f64,
    pub hdop: f64,
    pub vdop: f64,
}

impl Gsa {
    /// Number of PRN slots in a GSA sentence
    const PRN_SLOTS: usize = 12;
}

impl Codec for Gsa {
    const ID: &'static str = "GSA";
    const NAME: &'static str = "GNSS DOP and Active Satellites";

    fn decode(fields: &[String]) -> Self {
        let selection_mode = match text(fields, 0).trim() {
            "M" => SelectionMode::Manual,
            _ => SelectionMode::Automatic,
        };

        let fix_mode = match text(fields, 1).trim() {
            "2" => FixMode::Fix2D,
            "3" => FixMode::Fix3D,
            _ => FixMode::NoFix,
        };

        let satellites = (2..2 + Self::PRN_SLOTS)
            .filter_map(|i| text(fields, i).trim().parse::<u16>().ok())
            .collect();

        let dop = 2 + Self::PRN_SLOTS;

        Self {
            selection_mode,
            fix_mode,
            satellites,
            pdop: float(fields, dop),
            hdop: float(fields, dop + 1),
            vdop: float(fields, dop + 2),
        }
    }

    fn into_sentence(self) -> Sentence {
        Sentence::Gsa(self)
    }

    fn from_sentence(sentence: &Sentence) -> Option<&Self> {
        match sentence {
            Sentence::Gsa(gsa) => Some(gsa),
            _ => None,
        }
    }
}
