//! Depth sentences that are not part of the built-in codec set.
//! [Registry::default](crate::prelude::Registry) registers them
//! through the custom codec extension point.
#[cfg(feature = "serde")]
use serde::Serialize;

use crate::{
    prelude::{Codec, Sentence, Stub},
    utils::float,
};

/// Depth Below Keel
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Dbk {
    pub depth_feet: f64,
    pub depth_meters: f64,
    pub depth_fathoms: f64,
}

impl Codec for Dbk {
    const ID: &'static str = "DBK";
    const NAME: &'static str = "Depth Below Keel";

    fn decode(fields: &[String]) -> Self {
        Self {
            depth_feet: float(fields, 0),
            depth_meters: float(fields, 2),
            depth_fathoms: float(fields, 4),
        }
    }

    fn into_sentence(self) -> Sentence {
        Sentence::Dbk(self)
    }

    fn from_sentence(sentence: &Sentence) -> Option<&Self> {
        match sentence {
            Sentence::Dbk(dbk) => Some(dbk),
            _ => None,
        }
    }
}

/// Depth Below Surface
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Dbs {
    pub depth_feet: f64,
    pub depth_meters: f64,
    pub depth_fathoms: f64,
}

impl Codec for Dbs {
    const ID: &'static str = "DBS";
    const NAME: &'static str = "Depth Below Surface";

    fn decode(fields: &[String]) -> Self {
        Self {
            depth_feet: float(fields, 0),
            depth_meters: float(fields, 2),
            depth_fathoms: float(fields, 4),
        }
    }

    fn into_sentence(self) -> Sentence {
        Sentence::Dbs(self)
    }

    fn from_sentence(sentence: &Sentence) -> Option<&Self> {
        match sentence {
            Sentence::Dbs(dbs) => Some(dbs),
            _ => None,
        }
    }
}

/// Depth of Water, relative to the transducer
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Dpt {
    /// Water depth relative to the transducer, in meters
    pub depth_meters: f64,
    /// Offset from transducer, in meters.
    /// Positive: distance to the waterline, negative: distance to the keel.
    pub offset_meters: f64,
    /// Maximum range scale in use, in meters
    pub maximum_range_scale: f64,
}

impl Dpt {
    /// Depth below the surface, when the offset is to the waterline
    pub fn depth_below_surface(&self) -> Option<f64> {
        if self.offset_meters >= 0.0 {
            Some(self.depth_meters + self.offset_meters)
        } else {
            None
        }
    }

    /// Depth below the keel, when the offset is to the keel
    pub fn depth_below_keel(&self) -> Option<f64> {
        if self.offset_meters < 0.0 {
            Some(self.depth_meters + self.offset_meters)
        } else {
            None
        }
    }
}

impl Codec for Dpt {
    const ID: &'static str = "DPT";
    const NAME: &'static str = "Depth of Water";

    fn decode(fields: &[String]) -> Self {
        Self {
            depth_meters: float(fields, 0),
            offset_meters: float(fields, 1),
            maximum_range_scale: float(fields, 2),
        }
    }

    fn into_sentence(self) -> Sentence {
        Sentence::Dpt(self)
    }

    fn from_sentence(sentence: &Sentence) -> Option<&Self> {
        match sentence {
            Sentence::Dpt(dpt) => Some(dpt),
            _ => None,
        }
    }
}

/// Custom codec entry point: decodes any of the depth sentences above.
/// Returns `None` for anything else.
pub fn decode_depth(stub: &Stub) -> Option<Sentence> {
    match stub.sentence_id.as_str() {
        Dbk::ID => Some(Dbk::decode(&stub.fields).into_sentence()),
        Dbs::ID => Some(Dbs::decode(&stub.fields).into_sentence()),
        Dpt::ID => Some(Dpt::decode(&stub.fields).into_sentence()),
        _ => None,
    }
}

#[cfg(test)]
mod test {
    use super::Dpt;

    #[test]
    fn dpt_offsets() {
        let dpt = Dpt {
            depth_meters: 10.0,
            offset_meters: 1.5,
            maximum_range_scale: f64::NAN,
        };
        assert_eq!(dpt.depth_below_surface(), Some(11.5));
        assert_eq!(dpt.depth_below_keel(), None);

        let dpt = Dpt {
            depth_meters: 10.0,
            offset_meters: -2.0,
            maximum_range_scale: 100.0,
        };
        assert_eq!(dpt.depth_below_surface(), None);
        assert_eq!(dpt.depth_below_keel(), Some(8.0));

        let dpt = Dpt {
            depth_meters: 10.0,
            offset_meters: f64::NAN,
            maximum_range_scale: 100.0,
        };
        assert_eq!(dpt.depth_below_surface(), None);
        assert_eq!(dpt.depth_below_keel(), None);
    }
}
