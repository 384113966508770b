use rstest::*;

use crate::{
    prelude::{
        Codec, Constellation, DecodeMode, Epoch, Error, FixMode, FixType, Gga, Gsa, Gsv, Hdg,
        Mwv, Registry, Rmc, SelectionMode, SpeedUnit, Status, Stub, Vtg, WindReference, Zda,
    },
    tests::{
        init_logger, GGA_FIX, GGA_NO_FIX, GGA_TRUNCATED, GSA, GSV, HDG, MWV, RMC_VALID, SUPPORTED,
        VTG, XDR, ZDA,
    },
};

#[test]
fn supported_sentences_identification() {
    init_logger();
    let registry = Registry::default();

    for line in SUPPORTED {
        let header = line[1..].split(',').next().unwrap();
        let suffix = &header[header.len() - 3..];

        for mode in [DecodeMode::Strict, DecodeMode::Permissive] {
            let packet = registry
                .parse(line, mode)
                .unwrap_or_else(|e| panic!("failed to decode \"{}\": {}", line, e));

            assert_eq!(packet.sentence_id(), suffix, "{}", line);
            assert_eq!(packet.talker_id, &header[..header.len() - 3]);
            assert!(!packet.is_unknown());
            assert!(!packet.name().is_empty());
        }
    }
}

#[rstest]
#[case(GGA_FIX)]
#[case(RMC_VALID)]
#[case(ZDA)]
#[case(XDR)]
fn altered_checksum(#[case] line: &str) {
    init_logger();
    let registry = Registry::default();

    let (body, checksum) = line.rsplit_once('*').unwrap();
    let checksum = u8::from_str_radix(checksum, 16).unwrap();
    let altered = format!("{}*{:02X}", body, checksum ^ 0x01);

    for mode in [DecodeMode::Strict, DecodeMode::Permissive] {
        match registry.parse(&altered, mode) {
            Err(Error::ChecksumMismatch { expected, found }) => {
                assert_eq!(expected, checksum);
                assert_eq!(found, checksum ^ 0x01);
            },
            other => panic!("{:?} mode: unexpected {:?}", mode, other),
        }
    }
}

#[test]
fn unknown_sentence_modes() {
    init_logger();
    let registry = Registry::default();

    assert_eq!(
        registry.parse(XDR, DecodeMode::Strict),
        Err(Error::UnknownSentence("XDR".to_string()))
    );

    let packet = registry.parse(XDR, DecodeMode::Permissive).unwrap();
    assert!(packet.is_unknown());
    assert_eq!(packet.sentence_id(), "?");
    assert_eq!(packet.talker_id, "II");
}

#[test]
fn gga() {
    let packet = Registry::default()
        .parse(GGA_FIX, DecodeMode::Strict)
        .unwrap();

    assert_eq!(packet.constellation(), Some(Constellation::GPS));

    let gga = packet.as_sentence::<Gga>().unwrap();
    assert!((gga.latitude - 48.1173).abs() < 1.0E-6);
    assert!((gga.longitude - 11.516666666).abs() < 1.0E-6);
    assert_eq!(gga.fix_type, FixType::Fix);
    assert_eq!(gga.satellites_in_view, Some(8.0));
    assert_eq!(gga.horizontal_dilution, Some(0.9));
    assert_eq!(gga.altitude_meters, Some(545.4));
    assert_eq!(gga.geoidal_separation, Some(46.9));
    assert_eq!(gga.differential_age, None);
    assert_eq!(gga.differential_reference_station, None);
    assert!(gga.time.is_some());
}

#[test]
fn gga_absent_invalid_present() {
    let registry = Registry::default();

    // empty fields: not carried
    let packet = registry.parse(GGA_NO_FIX, DecodeMode::Strict).unwrap();
    let gga = packet.as_sentence::<Gga>().unwrap();
    assert_eq!(gga.fix_type, FixType::NoFix);
    assert_eq!(gga.satellites_in_view, Some(0.0));
    assert_eq!(gga.horizontal_dilution, None);
    assert_eq!(gga.altitude_meters, None);

    // carried but invalid
    let line = Stub::new(
        "GP",
        Gga::ID,
        &[
            "123519", "4807.038", "N", "01131.000", "E", "1", "08", "0.9", "abc", "M", "46.9",
            "M", "", "",
        ],
    )
    .to_string();

    let packet = registry.parse(&line, DecodeMode::Strict).unwrap();
    let gga = packet.as_sentence::<Gga>().unwrap();
    assert!(gga.altitude_meters.unwrap().is_nan());
    assert_eq!(gga.geoidal_separation, Some(46.9));
    assert_eq!(gga.differential_age, None);

    // sentence too short: not carried
    let packet = registry.parse(GGA_TRUNCATED, DecodeMode::Strict).unwrap();
    let gga = packet.as_sentence::<Gga>().unwrap();
    assert_eq!(gga.fix_type, FixType::Fix);
    assert_eq!(gga.satellites_in_view, Some(8.0));
    assert_eq!(gga.horizontal_dilution, None);
    assert_eq!(gga.altitude_meters, None);
    assert_eq!(gga.geoidal_separation, None);
}

#[test]
fn rmc() {
    let packet = Registry::default()
        .parse(RMC_VALID, DecodeMode::Strict)
        .unwrap();

    let rmc = packet.as_sentence::<Rmc>().unwrap();
    assert_eq!(rmc.status, Status::Valid);
    assert_eq!(
        rmc.datetime,
        Some(Epoch::from_gregorian_utc(1994, 3, 23, 12, 35, 19, 0))
    );
    assert_eq!(rmc.speed_knots, 22.4);
    assert_eq!(rmc.track_true, 84.4);
    assert_eq!(rmc.signed_variation(), -3.1);
    assert_eq!(rmc.faa_mode, None);
}

#[test]
fn zda() {
    let packet = Registry::default().parse(ZDA, DecodeMode::Strict).unwrap();
    let zda = packet.as_sentence::<Zda>().unwrap();
    assert_eq!(
        zda.datetime,
        Some(Epoch::from_gregorian_utc(2004, 3, 11, 16, 0, 12, 710_000_000))
    );
    assert_eq!(zda.local_zone_hours, -1.0);
    assert_eq!(zda.local_zone_minutes, 0.0);
    assert_eq!(zda.local_zone_offset_minutes(), -60.0);
}

#[test]
fn headings_and_tracks() {
    let registry = Registry::default();

    let packet = registry.parse(HDG, DecodeMode::Strict).unwrap();
    let hdg = packet.as_sentence::<Hdg>().unwrap();
    assert_eq!(hdg.heading, 98.3);
    assert_eq!(hdg.signed_deviation(), 0.0);
    assert_eq!(hdg.signed_variation(), -12.6);
    assert_eq!(packet.constellation(), None);

    let packet = registry.parse(VTG, DecodeMode::Strict).unwrap();
    let vtg = packet.as_sentence::<Vtg>().unwrap();
    assert_eq!(vtg.track_true, 54.7);
    assert_eq!(vtg.track_magnetic, 34.4);
    assert_eq!(vtg.speed_knots, 5.5);
    assert_eq!(vtg.speed_kmph, 10.2);
}

#[test]
fn satellites() {
    let registry = Registry::default();

    let packet = registry.parse(GSA, DecodeMode::Strict).unwrap();
    let gsa = packet.as_sentence::<Gsa>().unwrap();
    assert_eq!(gsa.selection_mode, SelectionMode::Automatic);
    assert_eq!(gsa.fix_mode, FixMode::Fix3D);
    assert_eq!(gsa.satellites, vec![4, 5, 9, 12, 24]);
    assert_eq!(gsa.pdop, 2.5);
    assert_eq!(gsa.hdop, 1.3);
    assert_eq!(gsa.vdop, 2.1);

    let packet = registry.parse(GSV, DecodeMode::Strict).unwrap();
    let gsv = packet.as_sentence::<Gsv>().unwrap();
    assert_eq!(gsv.number_of_messages, 2.0);
    assert_eq!(gsv.message_number, 1.0);
    assert_eq!(gsv.satellites_in_view, 8.0);
    assert_eq!(gsv.satellites.len(), 4);
    assert_eq!(gsv.satellites[2].prn, 12);
    assert_eq!(gsv.satellites[2].elevation, 7.0);
    assert_eq!(gsv.satellites[2].azimuth, 344.0);
    assert_eq!(gsv.satellites[2].snr, 39.0);
}

#[test]
fn wind() {
    let packet = Registry::default().parse(MWV, DecodeMode::Strict).unwrap();
    let mwv = packet.as_sentence::<Mwv>().unwrap();
    assert_eq!(mwv.wind_angle, 214.8);
    assert_eq!(mwv.reference, Some(WindReference::Relative));
    assert_eq!(mwv.speed, 12.3);
    assert_eq!(mwv.units, Some(SpeedUnit::Knots));
    assert_eq!(mwv.status, Status::Valid);
    assert_eq!(mwv.units.unwrap().to_knots(mwv.speed), 12.3);
    assert_eq!(SpeedUnit::KilometersPerHour.to_knots(1.852), 1.0);
    assert!((SpeedUnit::MetersPerSecond.to_knots(10.0) - 19.438444924).abs() < 1.0E-6);
}
