//! Reference sentences

/// GGA with a GPS fix, 48°07.038'N 11°31.000'E
pub const GGA_FIX: &str = "$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47";

/// GGA without fix
pub const GGA_NO_FIX: &str = "$GPGGA,123519,4807.038,N,01131.000,E,0,00,,,M,,M,,*52";

/// GGA truncated after the satellite count
pub const GGA_TRUNCATED: &str = "$GPGGA,123519,4807.038,N,01131.000,E,1,08*77";

/// GGA with a fix but no latitude
pub const GGA_NO_LATITUDE: &str =
    "$GPGGA,123519,,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*59";

/// Valid RMC, same location as [GGA_FIX]
pub const RMC_VALID: &str =
    "$GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W*6A";

/// Valid RMC, 49°16.45'N 123°11.12'W
pub const RMC_VALID_ALT: &str =
    "$GPRMC,225446,A,4916.45,N,12311.12,W,000.5,054.7,191194,020.3,E*68";

/// Void RMC
pub const RMC_VOID: &str = "$GPRMC,225446,V,4916.45,N,12311.12,W,000.5,054.7,191194,020.3,E*7F";

/// Valid RMC without latitude
pub const RMC_NO_LATITUDE: &str =
    "$GPRMC,225446,A,,N,12311.12,W,000.5,054.7,191194,020.3,E*4D";

/// Valid GLL without longitude
pub const GLL_NO_LONGITUDE: &str = "$GPGLL,4916.45,N,,W,225444,A*2C";

pub const GLL_VALID: &str = "$GPGLL,4916.45,N,12311.12,W,225444,A*31";

pub const GLL_VOID: &str = "$GPGLL,4916.45,N,12311.12,W,225444,V*26";

pub const VTG: &str = "$GPVTG,054.7,T,034.4,M,005.5,N,010.2,K*48";

pub const HDT: &str = "$HEHDT,274.07,T*19";

/// 98.3° magnetic, variation 12.6°W
pub const HDG: &str = "$HCHDG,98.3,0.0,E,12.6,W*57";

/// HDG without variation
pub const HDG_NO_VARIATION: &str = "$HCHDG,98.3,0.0,E,,*1B";

/// 355° magnetic, variation 10°E
pub const HDG_WRAPPING: &str = "$HCHDG,355.0,,,10.0,E*1B";

pub const HDM: &str = "$HCHDM,238.5,M*25";

/// 2004-03-11T16:00:12.71 UTC, zone -01:00
pub const ZDA: &str = "$GPZDA,160012.71,11,03,2004,-1,00*7D";

pub const DBT: &str = "$SDDBT,12.3,f,3.7,M,2.0,F*30";

pub const DBS: &str = "$SDDBS,16.2,f,4.9,M,2.7,F*3C";

pub const DBK: &str = "$SDDBK,10.5,f,3.2,M,1.7,F*2A";

pub const DPT: &str = "$IIDPT,3.7,0.5,100.0*42";

/// DPT with an invalid depth
pub const DPT_INVALID_DEPTH: &str = "$IIDPT,abc,2.3,100.0*0C";

pub const GSA: &str = "$GPGSA,A,3,04,05,,09,12,,,24,,,,,2.5,1.3,2.1*39";

pub const GSV: &str = "$GPGSV,2,1,08,01,40,083,46,02,17,308,41,12,07,344,39,14,22,228,45*75";

pub const MWV: &str = "$IIMWV,214.8,R,12.3,N,A*02";

pub const VHW: &str = "$IIVHW,245.1,T,245.1,M,05.5,N,10.2,K*56";

/// Sentence we have no codec for
pub const XDR: &str = "$IIXDR,C,19.5,C,AIR*07";

/// All sentences we support, with valid checksums
pub const SUPPORTED: [&str; 16] = [
    GGA_FIX, RMC_VALID, GLL_VALID, VTG, HDT, HDG, HDM, ZDA, DBT, DBS, DBK, DPT, GSA, GSV, MWV,
    VHW,
];
