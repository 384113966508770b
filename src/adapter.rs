use crate::prelude::PacketCache;

/// [Adapter] projects a [PacketCache] to application data.
/// Derivations must be total: any cache content, the empty cache
/// included, has to produce an output.
pub trait Adapter {
    type Output;
    fn derive(&self, cache: &PacketCache) -> Self::Output;
}

impl<F, T> Adapter for F
where
    F: Fn(&PacketCache) -> T,
{
    type Output = T;
    fn derive(&self, cache: &PacketCache) -> T {
        self(cache)
    }
}
