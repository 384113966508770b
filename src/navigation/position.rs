#[cfg(feature = "serde")]
use serde::Serialize;

use crate::prelude::{Codec, Constellation, FixType, Gga, Gll, PacketCache, Rmc};

/// Resolved position
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Position {
    /// Latitude in decimal degrees (north positive)
    pub latitude: f64,
    /// Longitude in decimal degrees (east positive)
    pub longitude: f64,
    /// Only GGA reports a fix quality
    pub fix_type: Option<FixType>,
    /// Altitude above mean sea level in meters (GGA only)
    pub altitude_meters: Option<f64>,
    /// Satellites used (GGA only)
    pub satellites: Option<f64>,
    /// Horizontal dilution of precision (GGA only)
    pub horizontal_dilution: Option<f64>,
    /// Constellation designated by the talker of the source sentence
    pub constellation: Option<Constellation>,
    /// Identifier of the source sentence
    pub source: &'static str,
}

impl Position {
    /// GGA with a fix, then valid RMC, then valid GLL.
    /// Sources without finite coordinates are skipped.
    pub(crate) fn resolve(cache: &PacketCache) -> Option<Self> {
        Self::from_gga(cache)
            .or_else(|| Self::from_rmc(cache))
            .or_else(|| Self::from_gll(cache))
    }

    fn from_gga(cache: &PacketCache) -> Option<Self> {
        let packet = cache.latest_packet::<Gga>()?;
        let gga = packet.as_sentence::<Gga>()?;

        if !gga.fix_type.is_fix() || !gga.latitude.is_finite() || !gga.longitude.is_finite() {
            return None;
        }

        Some(Self {
            latitude: gga.latitude,
            longitude: gga.longitude,
            fix_type: Some(gga.fix_type),
            altitude_meters: gga.altitude_meters,
            satellites: gga.satellites_in_view,
            horizontal_dilution: gga.horizontal_dilution,
            constellation: packet.constellation(),
            source: Gga::ID,
        })
    }

    fn from_rmc(cache: &PacketCache) -> Option<Self> {
        let packet = cache.latest_packet::<Rmc>()?;
        let rmc = packet.as_sentence::<Rmc>()?;

        if !rmc.status.is_valid() || !rmc.latitude.is_finite() || !rmc.longitude.is_finite() {
            return None;
        }

        Some(Self::horizontal(
            rmc.latitude,
            rmc.longitude,
            packet.constellation(),
            Rmc::ID,
        ))
    }

    fn from_gll(cache: &PacketCache) -> Option<Self> {
        let packet = cache.latest_packet::<Gll>()?;
        let gll = packet.as_sentence::<Gll>()?;

        if !gll.status.is_valid() || !gll.latitude.is_finite() || !gll.longitude.is_finite() {
            return None;
        }

        Some(Self::horizontal(
            gll.latitude,
            gll.longitude,
            packet.constellation(),
            Gll::ID,
        ))
    }

    fn horizontal(
        latitude: f64,
        longitude: f64,
        constellation: Option<Constellation>,
        source: &'static str,
    ) -> Self {
        Self {
            latitude,
            longitude,
            fix_type: None,
            altitude_meters: None,
            satellites: None,
            horizontal_dilution: None,
            constellation,
            source,
        }
    }
}
