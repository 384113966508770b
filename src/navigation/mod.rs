//! Navigation fusion: time, position, speed, heading and depth
//! derived from whatever sentences are cached, by order of preference.
use log::debug;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::prelude::{Adapter, Epoch, PacketCache};

mod depth;
mod heading;
mod position;
mod speed;
mod time;

pub use depth::Depth;
pub use heading::Heading;
pub use position::Position;
pub use speed::Speed;
pub use time::Time;

/// Returns UTC midnight of the current day, or of 1970-01-01 when
/// the system clock is not available.
fn today_utc() -> Epoch {
    match Epoch::now() {
        Ok(now) => {
            let (year, month, day, _, _, _, _) = now.to_gregorian_utc();
            Epoch::from_gregorian_utc_at_midnight(year, month, day)
        },
        Err(_) => Epoch::from_gregorian_utc_at_midnight(1970, 1, 1),
    }
}

/// [Navigation] parametrization, passed explicitly to each derivation.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationOpts {
    /// UTC midnight used to date sentences that only carry
    /// a time of day (GGA and GLL).
    pub reference_day: Epoch,
    /// Magnetic variation (degrees, east positive) applied to HDG
    /// when the sentence does not carry a usable one.
    pub magnetic_variation: Option<f64>,
}

impl Default for NavigationOpts {
    /// Reference day is captured once, here: derivations remain deterministic.
    fn default() -> Self {
        Self::new(today_utc())
    }
}

impl NavigationOpts {
    /// Builds [NavigationOpts] for this reference day, without reading the system clock.
    pub fn new(reference_day: Epoch) -> Self {
        Self {
            reference_day,
            magnetic_variation: None,
        }
    }

    /// Copies and returns [NavigationOpts] with updated reference day
    pub fn with_reference_day(&self, reference_day: Epoch) -> Self {
        let mut s = self.clone();
        s.reference_day = reference_day;
        s
    }

    /// Copies and returns [NavigationOpts] with a fallback magnetic variation
    pub fn with_magnetic_variation(&self, degrees: f64) -> Self {
        let mut s = self.clone();
        s.magnetic_variation = Some(degrees);
        s
    }
}

/// Navigation snapshot: each field is resolved independently,
/// from scratch, and tagged with the sentence that supplied it.
#[derive(Default, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct NavigationSnapshot {
    pub time: Option<Time>,
    pub position: Option<Position>,
    pub speed: Option<Speed>,
    pub heading: Option<Heading>,
    pub depth: Option<Depth>,
}

/// [Navigation] is the [Adapter] that fuses cached sentences into
/// a [NavigationSnapshot].
#[derive(Default, Debug, Clone)]
pub struct Navigation {
    pub opts: NavigationOpts,
}

impl Navigation {
    pub fn new(opts: NavigationOpts) -> Self {
        Self { opts }
    }
}

impl Adapter for Navigation {
    type Output = NavigationSnapshot;

    fn derive(&self, cache: &PacketCache) -> NavigationSnapshot {
        let snapshot = NavigationSnapshot {
            time: Time::resolve(cache, &self.opts),
            position: Position::resolve(cache),
            speed: Speed::resolve(cache),
            heading: Heading::resolve(cache, &self.opts),
            depth: Depth::resolve(cache),
        };

        debug!(
            "navigation: time={:?} position={:?} speed={:?} heading={:?} depth={:?}",
            snapshot.time.as_ref().map(|t| t.source),
            snapshot.position.as_ref().map(|p| p.source),
            snapshot.speed.as_ref().map(|s| s.source),
            snapshot.heading.as_ref().map(|h| h.source),
            snapshot.depth.as_ref().map(|d| d.source),
        );

        snapshot
    }
}
