//! Cache owner: decodes incoming lines and keeps the derived value current.
use log::{debug, warn};

use crate::prelude::{Adapter, AllowList, Config, Error, PacketCache, Registry};

/// [Session] owns the [PacketCache] of one sentence stream and the latest
/// value derived from it. Lines are processed one at a time, in arrival order.
pub struct Session<A: Adapter> {
    /// Session parametrization
    cfg: Config,
    /// Allow-list, built from [Config]
    allow_list: AllowList,
    /// Codecs in use
    registry: Registry,
    /// Latest packet per sentence type
    cache: PacketCache,
    /// Derivation
    adapter: A,
    /// Latest derived value
    derived: A::Output,
}

impl<A: Adapter> Session<A> {
    /// Creates a new [Session], starting from an empty cache.
    pub fn new(cfg: Config, adapter: A) -> Self {
        Self::seeded(cfg, adapter, PacketCache::default())
    }

    /// Creates a new [Session] from an initial [PacketCache].
    /// The initial derived value is the projection of this cache.
    pub fn seeded(cfg: Config, adapter: A, cache: PacketCache) -> Self {
        let derived = adapter.derive(&cache);
        Self {
            allow_list: cfg.allow_list.iter().collect(),
            registry: Registry::default(),
            cfg,
            cache,
            adapter,
            derived,
        }
    }

    /// Replaces the initial derived value, until the next update.
    pub fn with_derived(mut self, derived: A::Output) -> Self {
        self.derived = derived;
        self
    }

    /// Uses this [Registry] from now on.
    pub fn with_registry(mut self, registry: Registry) -> Self {
        self.registry = registry;
        self
    }

    /// Decodes one line. On success, the cache is updated (unless the
    /// packet is filtered out) and the value is derived again, in any case.
    /// On failure, the cache is left untouched.
    pub fn process(&mut self, line: &str) -> Result<&A::Output, Error> {
        let packet = self.registry.parse(line, self.cfg.mode)?;

        let sentence_id = packet.sentence_id();
        if self.cache.update(packet, &self.allow_list) {
            debug!("{}: cache updated ({} types)", sentence_id, self.cache.len());
        }

        self.derived = self.adapter.derive(&self.cache);
        Ok(&self.derived)
    }

    /// Processes a sequence of lines, skipping empty ones.
    /// Lines that fail to decode are logged and dropped.
    /// Returns the number of lines that were accepted.
    pub fn consume<I, S>(&mut self, lines: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut accepted = 0;
        for line in lines {
            let line = line.as_ref().trim();
            if line.is_empty() {
                continue;
            }
            match self.process(line) {
                Ok(_) => accepted += 1,
                Err(e) => warn!("rejected \"{}\": {}", line, e),
            }
        }
        accepted
    }

    /// Clears the cache and derives again, from nothing.
    pub fn reset(&mut self) {
        self.cache.clear();
        self.derived = self.adapter.derive(&self.cache);
        debug!("session reset");
    }

    /// Current [PacketCache]
    pub fn cache(&self) -> &PacketCache {
        &self.cache
    }

    /// Latest derived value
    pub fn derived(&self) -> &A::Output {
        &self.derived
    }

    /// [Config] in use
    pub fn config(&self) -> &Config {
        &self.cfg
    }
}
