//! Sentence identifier to codec dispatch
use std::sync::Arc;

use log::trace;

use crate::{
    packet::custom::decode_depth,
    prelude::{
        Codec, Dbk, Dbs, Dbt, DecodeMode, Dpt, Error, Gga, Gll, Gsa, Gsv, Hdg, Hdm, Hdt, Mwv,
        Packet, Rmc, Sentence, Stub, Vhw, Vtg, Zda,
    },
};

/// Custom decoder: returns `None` when it does not handle the [Stub].
pub type Decoder = Arc<dyn Fn(&Stub) -> Option<Sentence> + Send + Sync>;

fn wrap<T: Codec>(fields: &[String]) -> Sentence {
    T::decode(fields).into_sentence()
}

/// Built-in codec for this sentence identifier
fn builtin(sentence_id: &str) -> Option<fn(&[String]) -> Sentence> {
    let decoder: fn(&[String]) -> Sentence = match sentence_id {
        Dbt::ID => wrap::<Dbt>,
        Gga::ID => wrap::<Gga>,
        Gll::ID => wrap::<Gll>,
        Gsa::ID => wrap::<Gsa>,
        Gsv::ID => wrap::<Gsv>,
        Hdg::ID => wrap::<Hdg>,
        Hdm::ID => wrap::<Hdm>,
        Hdt::ID => wrap::<Hdt>,
        Mwv::ID => wrap::<Mwv>,
        Rmc::ID => wrap::<Rmc>,
        Vhw::ID => wrap::<Vhw>,
        Vtg::ID => wrap::<Vtg>,
        Zda::ID => wrap::<Zda>,
        _ => return None,
    };
    Some(decoder)
}

/// [Registry] maps sentence identifiers to codecs.
/// Custom codecs are tried first, in registration order,
/// then the built-in ones. [Registry::default] ships with the built-in
/// codecs and the DBK, DBS and DPT custom codecs.
#[derive(Clone)]
pub struct Registry {
    custom: Vec<(String, Decoder)>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::builtin()
            .with_codec(Dbk::ID, decode_depth)
            .with_codec(Dbs::ID, decode_depth)
            .with_codec(Dpt::ID, decode_depth)
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field(
                "custom",
                &self.custom.iter().map(|(id, _)| id).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl Registry {
    /// [Registry] limited to built-in codecs
    pub fn builtin() -> Self {
        Self { custom: Vec::new() }
    }

    /// Registers a custom decoder for this sentence identifier.
    pub fn with_codec<F>(&self, sentence_id: &str, decoder: F) -> Self
    where
        F: Fn(&Stub) -> Option<Sentence> + Send + Sync + 'static,
    {
        let mut s = self.clone();
        s.custom.push((sentence_id.to_string(), Arc::new(decoder)));
        s
    }

    /// True if at least one codec is registered for this identifier
    pub fn supports(&self, sentence_id: &str) -> bool {
        self.custom.iter().any(|(id, _)| id == sentence_id) || builtin(sentence_id).is_some()
    }

    /// Decodes a validated [Stub].
    /// In [DecodeMode::Strict], identifiers nobody handles are an [Error].
    /// In [DecodeMode::Permissive], they produce an unknown [Packet].
    pub fn decode(&self, stub: Stub, mode: DecodeMode) -> Result<Packet, Error> {
        let custom = self
            .custom
            .iter()
            .filter(|(id, _)| *id == stub.sentence_id)
            .find_map(|(_, decoder)| decoder(&stub));

        if let Some(sentence) = custom {
            trace!("{}{}: custom codec", stub.talker_id, stub.sentence_id);
            return Ok(Packet::new(&stub.talker_id, sentence));
        }

        if let Some(decoder) = builtin(&stub.sentence_id) {
            return Ok(Packet::new(&stub.talker_id, decoder(&stub.fields)));
        }

        match mode {
            DecodeMode::Strict => Err(Error::UnknownSentence(stub.sentence_id)),
            DecodeMode::Permissive => {
                trace!("{}{}: unknown sentence", stub.talker_id, stub.sentence_id);
                Ok(Packet::unknown(stub))
            },
        }
    }

    /// Validates and decodes one line of text.
    pub fn parse(&self, line: &str, mode: DecodeMode) -> Result<Packet, Error> {
        let stub = Stub::parse(line)?;
        self.decode(stub, mode)
    }
}
