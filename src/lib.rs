#![doc = include_str!("../README.md")]
#![cfg_attr(docrs, feature(doc_cfg))]

extern crate gnss_rs as gnss;

// private modules
mod adapter;
mod cache;
mod cfg;
mod constants;
mod error;
mod navigation;
mod packet;
mod registry;
mod session;
mod stub;
mod talker;
mod utils;

#[cfg(test)]
mod tests;

// prelude
pub mod prelude {
    pub use crate::adapter::Adapter;
    pub use crate::cache::{AllowList, PacketCache};
    pub use crate::cfg::{Config, DecodeMode};
    pub use crate::constants::UNKNOWN_SENTENCE_ID;
    pub use crate::error::Error;
    pub use crate::navigation::{
        Depth, Heading, Navigation, NavigationOpts, NavigationSnapshot, Position, Speed, Time,
    };
    pub use crate::packet::{
        Codec, Dbk, Dbs, Dbt, Direction, Dpt, FaaMode, FixMode, FixType, Gga, Gll, Gsa, Gsv, Hdg,
        Hdm, Hdt, Mwv, Packet, Rmc, SatelliteInView, SelectionMode, Sentence, SpeedUnit, Status,
        Unknown, Vhw, Vtg, WindReference, Zda,
    };
    pub use crate::registry::{Decoder, Registry};
    pub use crate::session::Session;
    pub use crate::stub::{checksum, Stub};
    // re-export
    pub use gnss::prelude::Constellation;
    pub use hifitime::{Duration, Epoch, TimeScale};
}

// pub export
pub use error::Error;
