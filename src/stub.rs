//! Sentence framing: delimiter, checksum and field split.
use itertools::Itertools;
use log::trace;

use crate::{
    constants::{CHECKSUM_DELIMITER, FIELD_SEPARATOR, SENTENCE_ID_LEN, START_DELIMITER},
    prelude::{Constellation, Error},
    talker,
};

/// XOR checksum of all bytes, as applied between `$` and `*`.
pub fn checksum(body: &str) -> u8 {
    body.bytes().fold(0, |acc, b| acc ^ b)
}

/// [Stub] is a validated sentence that is yet to be decoded:
/// identifiers plus raw, ordered field values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stub {
    /// Talker identifier, for example `GP` or `II`.
    /// Has no impact on sentence dispatch.
    pub talker_id: String,
    /// 3 letter sentence identifier, for example `GGA`
    pub sentence_id: String,
    /// Raw field values, empty fields preserved: position is meaningful.
    pub fields: Vec<String>,
}

impl Stub {
    /// Builds a new [Stub], for example to encode a sentence.
    pub fn new<S: ToString>(talker_id: &str, sentence_id: &str, fields: &[S]) -> Self {
        Self {
            talker_id: talker_id.to_string(),
            sentence_id: sentence_id.to_string(),
            fields: fields.iter().map(|f| f.to_string()).collect(),
        }
    }

    /// Parses and validates one line of text. Trailing line terminators
    /// are tolerated.
    pub fn parse(line: &str) -> Result<Self, Error> {
        let line = line.trim_end();

        let body = line
            .strip_prefix(START_DELIMITER)
            .ok_or(Error::MissingStartDelimiter)?;

        let (content, transmitted) = body
            .rsplit_once(CHECKSUM_DELIMITER)
            .ok_or(Error::MissingChecksum)?;

        if transmitted.len() != 2 || !transmitted.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(Error::InvalidChecksum(transmitted.to_string()));
        }

        let found = u8::from_str_radix(transmitted, 16)
            .map_err(|_| Error::InvalidChecksum(transmitted.to_string()))?;

        let expected = checksum(content);
        if expected != found {
            return Err(Error::ChecksumMismatch { expected, found });
        }

        let mut tokens = content.split(FIELD_SEPARATOR);

        // split() always yields at least one token
        let header = tokens.next().unwrap_or_default();

        if header.len() < SENTENCE_ID_LEN || !header.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(Error::InvalidHeader(header.to_string()));
        }

        let (talker_id, sentence_id) = header.split_at(header.len() - SENTENCE_ID_LEN);

        let stub = Self {
            talker_id: talker_id.to_string(),
            sentence_id: sentence_id.to_string(),
            fields: tokens.map(str::to_string).collect(),
        };

        trace!(
            "{}{}: {} field(s)",
            stub.talker_id,
            stub.sentence_id,
            stub.fields.len()
        );

        Ok(stub)
    }

    /// Returns the [Constellation] the talker stands for, if any.
    pub fn constellation(&self) -> Option<Constellation> {
        talker::constellation(&self.talker_id)
    }
}

impl std::fmt::Display for Stub {
    /// Encodes [Stub] as a complete sentence, checksum included.
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let header = format!("{}{}", self.talker_id, self.sentence_id);

        let body = std::iter::once(header.as_str())
            .chain(self.fields.iter().map(String::as_str))
            .join(&FIELD_SEPARATOR.to_string());

        write!(
            f,
            "{}{}{}{:02X}",
            START_DELIMITER,
            body,
            CHECKSUM_DELIMITER,
            checksum(&body)
        )
    }
}
