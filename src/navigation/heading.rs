#[cfg(feature = "serde")]
use serde::Serialize;

use crate::{
    navigation::NavigationOpts,
    prelude::{Codec, Hdg, Hdt, PacketCache, Rmc, Vtg},
};

/// Resolved heading, in degrees true
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Heading {
    /// Degrees true, in [0, 360)
    pub degrees: f64,
    /// True when this is the course over ground rather than a heading
    /// sensor output: the bow may not point that way.
    pub is_derived: bool,
    /// Identifier of the source sentence
    pub source: &'static str,
}

impl Heading {
    /// HDT, then HDG corrected for magnetic variation,
    /// then course over ground from RMC or VTG.
    pub(crate) fn resolve(cache: &PacketCache, opts: &NavigationOpts) -> Option<Self> {
        Self::from_hdt(cache)
            .or_else(|| Self::from_hdg(cache, opts))
            .or_else(|| Self::course_over_ground(cache))
    }

    fn new(degrees: f64, is_derived: bool, source: &'static str) -> Option<Self> {
        if !degrees.is_finite() {
            return None;
        }

        // rem_euclid may round tiny negative values up to 360
        let degrees = degrees.rem_euclid(360.0);
        let degrees = if degrees < 360.0 { degrees } else { 0.0 };

        Some(Self {
            degrees,
            is_derived,
            source,
        })
    }

    fn from_hdt(cache: &PacketCache) -> Option<Self> {
        let hdt = cache.latest::<Hdt>()?;
        Self::new(hdt.heading, false, Hdt::ID)
    }

    fn from_hdg(cache: &PacketCache, opts: &NavigationOpts) -> Option<Self> {
        let hdg = cache.latest::<Hdg>()?;

        let variation = if hdg.variation.is_finite() {
            hdg.signed_variation()
        } else {
            opts.magnetic_variation.unwrap_or_default()
        };

        Self::new(hdg.heading + variation, false, Hdg::ID)
    }

    fn course_over_ground(cache: &PacketCache) -> Option<Self> {
        let rmc = cache
            .latest::<Rmc>()
            .and_then(|rmc| Self::new(rmc.track_true, true, Rmc::ID));

        rmc.or_else(|| {
            cache
                .latest::<Vtg>()
                .and_then(|vtg| Self::new(vtg.track_true, true, Vtg::ID))
        })
    }
}
