#[cfg(feature = "serde")]
use serde::Deserialize;

/// How sentences without a registered codec are handled
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DecodeMode {
    /// Unknown sentences are an [Error](crate::Error)
    #[default]
    Strict,
    /// Unknown sentences produce a placeholder [Packet](crate::prelude::Packet),
    /// which is never cached.
    Permissive,
}

#[cfg(feature = "serde")]
fn default_mode() -> DecodeMode {
    DecodeMode::Strict
}

#[cfg(feature = "serde")]
fn default_allow_list() -> Vec<String> {
    Vec::new()
}

/// [Session](crate::prelude::Session) parametrization
#[derive(Default, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
pub struct Config {
    /// Decoding mode
    #[cfg_attr(feature = "serde", serde(default = "default_mode"))]
    pub mode: DecodeMode,
    /// Sentence identifiers retained in the cache.
    /// Empty means all of them.
    #[cfg_attr(feature = "serde", serde(default = "default_allow_list"))]
    pub allow_list: Vec<String>,
}

impl Config {
    /// Copies and returns [Config] with updated [DecodeMode]
    pub fn with_mode(&self, mode: DecodeMode) -> Self {
        let mut s = self.clone();
        s.mode = mode;
        s
    }

    /// Copies and returns [Config] retaining only these sentence identifiers
    pub fn with_allow_list<S: ToString>(&self, sentence_ids: &[S]) -> Self {
        let mut s = self.clone();
        s.allow_list = sentence_ids.iter().map(|id| id.to_string()).collect();
        s
    }
}
