//! Typed packets: one decoded sentence each.
#[cfg(feature = "serde")]
use serde::Serialize;

use crate::{
    constants::UNKNOWN_SENTENCE_ID,
    prelude::{Constellation, Stub},
    talker,
};

mod dbt;
mod gga;
mod gll;
mod gsa;
mod gsv;
mod hdg;
mod hdm;
mod hdt;
mod mwv;
mod rmc;
mod vhw;
mod vtg;
mod zda;

pub mod custom;

pub use custom::{Dbk, Dbs, Dpt};
pub use dbt::Dbt;
pub use gga::{FixType, Gga};
pub use gll::Gll;
pub use gsa::{FixMode, Gsa, SelectionMode};
pub use gsv::{Gsv, SatelliteInView};
pub use hdg::Hdg;
pub use hdm::Hdm;
pub use hdt::Hdt;
pub use mwv::{Mwv, SpeedUnit, WindReference};
pub use rmc::Rmc;
pub use vhw::Vhw;
pub use vtg::Vtg;
pub use zda::Zda;

/// [Codec] ties a packet type to its sentence identifier and
/// decodes it from raw fields. Decoding never fails: structurally
/// valid sentences always produce a packet, invalid numbers being `NaN`.
pub trait Codec: Sized {
    /// 3 letter sentence identifier
    const ID: &'static str;
    /// Readable sentence name
    const NAME: &'static str;
    /// Decodes raw fields (sentence header excluded)
    fn decode(fields: &[String]) -> Self;
    /// Wraps Self into a [Sentence]
    fn into_sentence(self) -> Sentence;
    /// Returns Self if [Sentence] is of this type
    fn from_sentence(sentence: &Sentence) -> Option<&Self>;
}

/// Data validity flag, as found in RMC or GLL
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum Status {
    /// `A`
    Valid,
    /// `V`, or anything else
    #[default]
    Warning,
}

impl Status {
    pub(crate) fn parse(s: &str) -> Self {
        match s.trim() {
            "A" => Self::Valid,
            _ => Self::Warning,
        }
    }

    pub fn is_valid(&self) -> bool {
        *self == Self::Valid
    }
}

/// East / West direction of a magnetic variation or deviation
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum Direction {
    East,
    West,
}

impl Direction {
    pub(crate) fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "E" => Some(Self::East),
            "W" => Some(Self::West),
            _ => None,
        }
    }

    /// Applies the direction to a magnitude: west is negative,
    /// east or unspecified positive.
    pub fn signed(direction: Option<Self>, magnitude: f64) -> f64 {
        match direction {
            Some(Self::West) => -magnitude,
            _ => magnitude,
        }
    }
}

/// FAA mode indicator (NMEA 2.3 onwards)
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum FaaMode {
    Autonomous,
    Differential,
    Estimated,
    FloatRtk,
    Manual,
    NotValid,
    Precise,
    Rtk,
    Simulator,
}

impl FaaMode {
    pub(crate) fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "A" => Some(Self::Autonomous),
            "D" => Some(Self::Differential),
            "E" => Some(Self::Estimated),
            "F" => Some(Self::FloatRtk),
            "M" => Some(Self::Manual),
            "N" => Some(Self::NotValid),
            "P" => Some(Self::Precise),
            "R" => Some(Self::Rtk),
            "S" => Some(Self::Simulator),
            _ => None,
        }
    }
}

/// Sentence we do not have a codec for.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Unknown {
    /// Sentence identifier as transmitted
    pub sentence_id: String,
    /// Raw fields
    pub fields: Vec<String>,
}

/// All sentence types this library understands.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum Sentence {
    Dbk(Dbk),
    Dbs(Dbs),
    Dbt(Dbt),
    Dpt(Dpt),
    Gga(Gga),
    Gll(Gll),
    Gsa(Gsa),
    Gsv(Gsv),
    Hdg(Hdg),
    Hdm(Hdm),
    Hdt(Hdt),
    Mwv(Mwv),
    Rmc(Rmc),
    Vhw(Vhw),
    Vtg(Vtg),
    Zda(Zda),
    /// Placeholder produced in permissive mode
    Unknown(Unknown),
}

impl Sentence {
    /// 3 letter identifier, or `"?"` for [Sentence::Unknown].
    pub fn id(&self) -> &'static str {
        match self {
            Self::Dbk(_) => Dbk::ID,
            Self::Dbs(_) => Dbs::ID,
            Self::Dbt(_) => Dbt::ID,
            Self::Dpt(_) => Dpt::ID,
            Self::Gga(_) => Gga::ID,
            Self::Gll(_) => Gll::ID,
            Self::Gsa(_) => Gsa::ID,
            Self::Gsv(_) => Gsv::ID,
            Self::Hdg(_) => Hdg::ID,
            Self::Hdm(_) => Hdm::ID,
            Self::Hdt(_) => Hdt::ID,
            Self::Mwv(_) => Mwv::ID,
            Self::Rmc(_) => Rmc::ID,
            Self::Vhw(_) => Vhw::ID,
            Self::Vtg(_) => Vtg::ID,
            Self::Zda(_) => Zda::ID,
            Self::Unknown(_) => UNKNOWN_SENTENCE_ID,
        }
    }

    /// Readable sentence name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Dbk(_) => Dbk::NAME,
            Self::Dbs(_) => Dbs::NAME,
            Self::Dbt(_) => Dbt::NAME,
            Self::Dpt(_) => Dpt::NAME,
            Self::Gga(_) => Gga::NAME,
            Self::Gll(_) => Gll::NAME,
            Self::Gsa(_) => Gsa::NAME,
            Self::Gsv(_) => Gsv::NAME,
            Self::Hdg(_) => Hdg::NAME,
            Self::Hdm(_) => Hdm::NAME,
            Self::Hdt(_) => Hdt::NAME,
            Self::Mwv(_) => Mwv::NAME,
            Self::Rmc(_) => Rmc::NAME,
            Self::Vhw(_) => Vhw::NAME,
            Self::Vtg(_) => Vtg::NAME,
            Self::Zda(_) => Zda::NAME,
            Self::Unknown(_) => "Unknown Sentence",
        }
    }
}

/// [Packet] is one decoded sentence. Packets are values:
/// they are replaced, never modified.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Packet {
    /// Talker identifier, stored but not used for dispatch
    pub talker_id: String,
    /// Decoded content
    pub sentence: Sentence,
}

impl Packet {
    /// Builds a new [Packet]
    pub fn new(talker_id: &str, sentence: Sentence) -> Self {
        Self {
            talker_id: talker_id.to_string(),
            sentence,
        }
    }

    /// Decodes a [Packet] of type T from this [Stub], whatever its identifier.
    pub fn decode<T: Codec>(stub: &Stub) -> Self {
        Self::new(&stub.talker_id, T::decode(&stub.fields).into_sentence())
    }

    /// Builds an [Unknown] [Packet] from this [Stub]
    pub fn unknown(stub: Stub) -> Self {
        Self {
            talker_id: stub.talker_id,
            sentence: Sentence::Unknown(Unknown {
                sentence_id: stub.sentence_id,
                fields: stub.fields,
            }),
        }
    }

    /// 3 letter identifier, or `"?"` for unknown sentences.
    pub fn sentence_id(&self) -> &'static str {
        self.sentence.id()
    }

    /// Readable sentence name
    pub fn name(&self) -> &'static str {
        self.sentence.name()
    }

    /// True for placeholders produced in permissive mode
    pub fn is_unknown(&self) -> bool {
        matches!(self.sentence, Sentence::Unknown(_))
    }

    /// Returns the content if this [Packet] is of type T
    pub fn as_sentence<T: Codec>(&self) -> Option<&T> {
        T::from_sentence(&self.sentence)
    }

    /// [Constellation] of the talker, when it designates one
    pub fn constellation(&self) -> Option<Constellation> {
        talker::constellation(&self.talker_id)
    }
}

#[cfg(test)]
mod test {
    use super::{Direction, FaaMode, Status};

    #[test]
    fn signed_direction() {
        assert_eq!(Direction::signed(Some(Direction::West), 12.6), -12.6);
        assert_eq!(Direction::signed(Some(Direction::East), 12.6), 12.6);
        assert_eq!(Direction::signed(None, 12.6), 12.6);
        assert_eq!(Direction::parse(""), None);
    }

    #[test]
    fn flags() {
        assert!(Status::parse("A").is_valid());
        assert!(!Status::parse("V").is_valid());
        assert!(!Status::parse("").is_valid());
        assert_eq!(FaaMode::parse("D"), Some(FaaMode::Differential));
        assert_eq!(FaaMode::parse(""), None);
    }
}
