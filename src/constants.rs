/// Sentence start marker
pub const START_DELIMITER: char = '$';

/// Field separator
pub const FIELD_SEPARATOR: char = ',';

/// Checksum delimiter
pub const CHECKSUM_DELIMITER: char = '*';

/// Sentence identifier reported by packets we could not decode
pub const UNKNOWN_SENTENCE_ID: &str = "?";

/// Sentence identifier width, following the talker identifier
pub const SENTENCE_ID_LEN: usize = 3;

/// Kilometers per nautical mile
pub const KM_PER_NAUTICAL_MILE: f64 = 1.852;

/// Two digit years strictly below this value are 20xx, others 19xx
pub const TWO_DIGIT_YEAR_PIVOT: i32 = 73;
