use crate::prelude::Constellation;

/// Maps a talker identifier to the [Constellation] it designates.
/// Non GNSS talkers (instruments like `II`, compasses like `HC`,
/// sounders like `SD`..) do not have one.
pub fn constellation(talker_id: &str) -> Option<Constellation> {
    match talker_id {
        "GP" => Some(Constellation::GPS),
        "GL" => Some(Constellation::Glonass),
        "GA" => Some(Constellation::Galileo),
        "GB" | "BD" => Some(Constellation::BeiDou),
        "GQ" => Some(Constellation::QZSS),
        "GI" => Some(Constellation::IRNSS),
        "GN" => Some(Constellation::Mixed),
        _ => None,
    }
}
