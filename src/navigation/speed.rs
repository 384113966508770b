#[cfg(feature = "serde")]
use serde::Serialize;

use crate::{
    constants::KM_PER_NAUTICAL_MILE,
    prelude::{Codec, PacketCache, Rmc, Vtg},
};

/// Resolved speed over ground
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Speed {
    pub knots: f64,
    /// Identifier of the source sentence
    pub source: &'static str,
}

impl Speed {
    /// VTG, then valid RMC.
    pub(crate) fn resolve(cache: &PacketCache) -> Option<Self> {
        let vtg = cache
            .latest::<Vtg>()
            .map(|vtg| vtg.speed_knots)
            .filter(|knots| knots.is_finite())
            .map(|knots| Self {
                knots,
                source: Vtg::ID,
            });

        vtg.or_else(|| {
            cache
                .latest::<Rmc>()
                .filter(|rmc| rmc.status.is_valid())
                .map(|rmc| rmc.speed_knots)
                .filter(|knots| knots.is_finite())
                .map(|knots| Self {
                    knots,
                    source: Rmc::ID,
                })
        })
    }

    /// Speed in km/h
    pub fn kmph(&self) -> f64 {
        self.knots * KM_PER_NAUTICAL_MILE
    }

    /// Speed in m/s
    pub fn meters_per_second(&self) -> f64 {
        self.kmph() / 3.6
    }
}
