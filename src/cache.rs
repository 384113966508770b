//! Latest packet per sentence type
use std::collections::{BTreeMap, BTreeSet};

use log::debug;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::prelude::{Codec, Packet};

/// Sentence identifiers a [PacketCache] accepts. Empty means all of them.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct AllowList {
    sentence_ids: BTreeSet<String>,
}

impl<S: ToString> FromIterator<S> for AllowList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            sentence_ids: iter.into_iter().map(|id| id.to_string()).collect(),
        }
    }
}

impl AllowList {
    /// True if this sentence identifier may be cached
    pub fn allows(&self, sentence_id: &str) -> bool {
        self.sentence_ids.is_empty() || self.sentence_ids.contains(sentence_id)
    }
}

/// [PacketCache] stores the most recent [Packet] of each sentence type.
/// Updates replace the previous packet wholesale, fields are never merged.
/// There is no expiry: a packet remains until replaced or cleared.
#[derive(Default, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct PacketCache {
    packets: BTreeMap<String, Packet>,
}

impl FromIterator<Packet> for PacketCache {
    /// Builds a [PacketCache] from a series of [Packet]s, last one wins.
    fn from_iter<I: IntoIterator<Item = Packet>>(iter: I) -> Self {
        let mut s = Self::default();
        for packet in iter {
            s.update(packet, &AllowList::default());
        }
        s
    }
}

impl PacketCache {
    /// Stores this [Packet] unless the [AllowList] rejects it.
    /// Unknown packets are never stored.
    /// Returns true if the cache was modified.
    pub fn update(&mut self, packet: Packet, allow_list: &AllowList) -> bool {
        let sentence_id = packet.sentence_id();

        if packet.is_unknown() {
            debug!("{}: not cached (unknown)", packet.talker_id);
            return false;
        }

        if !allow_list.allows(sentence_id) {
            debug!("{}{}: filtered out", packet.talker_id, sentence_id);
            return false;
        }

        self.packets.insert(sentence_id.to_string(), packet);
        true
    }

    /// Latest [Packet] for this sentence identifier
    pub fn get(&self, sentence_id: &str) -> Option<&Packet> {
        self.packets.get(sentence_id)
    }

    /// Latest packet of type T
    pub fn latest<T: Codec>(&self) -> Option<&T> {
        self.get(T::ID).and_then(|packet| packet.as_sentence::<T>())
    }

    /// Latest [Packet] for type T, talker included
    pub fn latest_packet<T: Codec>(&self) -> Option<&Packet> {
        self.get(T::ID)
    }

    /// Number of cached sentence types
    pub fn len(&self) -> usize {
        self.packets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packets.is_empty()
    }

    /// Drops all packets
    pub fn clear(&mut self) {
        self.packets.clear();
    }

    /// Iterates over cached packets, in sentence identifier order
    pub fn iter(&self) -> impl Iterator<Item = &Packet> + '_ {
        self.packets.values()
    }
}
