use hifitime::Unit;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::{
    navigation::NavigationOpts,
    prelude::{Codec, Epoch, Gga, Gll, PacketCache, Rmc, Zda},
};

/// Local zone offsets beyond one day are not meaningful
const MAX_ZONE_OFFSET_MINUTES: f64 = 24.0 * 60.0;

/// Resolved time
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Time {
    /// UTC [Epoch]
    pub utc: Epoch,
    /// Local time: UTC shifted by the local zone offset.
    /// Only ZDA carries a zone offset, other sources leave this empty.
    pub local: Option<Epoch>,
    /// Identifier of the source sentence
    pub source: &'static str,
}

impl Time {
    /// ZDA, then GGA with a fix, then valid RMC, then valid GLL.
    pub(crate) fn resolve(cache: &PacketCache, opts: &NavigationOpts) -> Option<Self> {
        Self::from_zda(cache)
            .or_else(|| Self::from_gga(cache, opts))
            .or_else(|| Self::from_rmc(cache))
            .or_else(|| Self::from_gll(cache, opts))
    }

    fn from_zda(cache: &PacketCache) -> Option<Self> {
        let zda = cache.latest::<Zda>()?;
        let utc = zda.datetime?;

        let offset_minutes = zda.local_zone_offset_minutes();
        let local = Some(offset_minutes)
            .filter(|minutes| minutes.abs() <= MAX_ZONE_OFFSET_MINUTES)
            .map(|minutes| utc + Unit::Minute * minutes);

        Some(Self {
            utc,
            local,
            source: Zda::ID,
        })
    }

    fn from_gga(cache: &PacketCache, opts: &NavigationOpts) -> Option<Self> {
        let gga = cache.latest::<Gga>()?;
        if !gga.fix_type.is_fix() {
            return None;
        }

        Some(Self {
            utc: opts.reference_day + gga.time?,
            local: None,
            source: Gga::ID,
        })
    }

    fn from_rmc(cache: &PacketCache) -> Option<Self> {
        let rmc = cache.latest::<Rmc>()?;
        if !rmc.status.is_valid() {
            return None;
        }

        Some(Self {
            utc: rmc.datetime?,
            local: None,
            source: Rmc::ID,
        })
    }

    fn from_gll(cache: &PacketCache, opts: &NavigationOpts) -> Option<Self> {
        let gll = cache.latest::<Gll>()?;
        if !gll.status.is_valid() {
            return None;
        }

        Some(Self {
            utc: opts.reference_day + gll.time?,
            local: None,
            source: Gll::ID,
        })
    }
}
