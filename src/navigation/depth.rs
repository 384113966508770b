#[cfg(feature = "serde")]
use serde::Serialize;

use crate::prelude::{Codec, Dbk, Dbs, Dbt, Dpt, PacketCache};

/// Resolved water depth
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Depth {
    /// Depth in meters, with respect to the reference
    /// of the source sentence (transducer, surface or keel)
    pub meters: f64,
    /// Identifier of the source sentence
    pub source: &'static str,
}

impl Depth {
    /// DPT, then DBT, then DBS, then DBK.
    pub(crate) fn resolve(cache: &PacketCache) -> Option<Self> {
        let candidates = [
            (cache.latest::<Dpt>().map(|dpt| dpt.depth_meters), Dpt::ID),
            (cache.latest::<Dbt>().map(|dbt| dbt.depth_meters), Dbt::ID),
            (cache.latest::<Dbs>().map(|dbs| dbs.depth_meters), Dbs::ID),
            (cache.latest::<Dbk>().map(|dbk| dbk.depth_meters), Dbk::ID),
        ];

        candidates
            .into_iter()
            .find_map(|(meters, source)| match meters {
                Some(meters) if meters.is_finite() => Some(Self { meters, source }),
                _ => None,
            })
    }

    /// Depth in feet
    pub fn feet(&self) -> f64 {
        self.meters / 0.3048
    }
}
