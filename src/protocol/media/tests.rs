use super::*;

#[test]
fn test_from_rtpmap_known_codecs() {
    assert!(matches!(
        CodecInfo::from_rtpmap("H264", 90000),
        Some(CodecInfo::H264(_))
    ));
    assert!(matches!(
        CodecInfo::from_rtpmap("h265", 90000),
        Some(CodecInfo::H265(_))
    ));
    assert!(matches!(
        CodecInfo::from_rtpmap("MPEG4-GENERIC", 8000),
        Some(CodecInfo::Mpeg4(_))
    ));
}

#[test]
fn test_from_rtpmap_unknown_codec() {
    assert!(CodecInfo::from_rtpmap("UNK", 8000).is_none());
    assert!(CodecInfo::from_rtpmap("opus", 48000).is_none());
}

#[test]
fn test_h264_fmtp() {
    let mut media = H264Media::new(90000);
    media.parse_fmtp(
        "packetization-mode=1;profile-level-id=428014;sprop-parameter-sets=Z0KAFNoFB+Q=,aM4G4g==;",
    );

    assert_eq!(media.clock_rate, 90000);
    assert_eq!(media.packetization_mode, 1);
    assert_eq!(media.profile_level_id, vec![0x42, 0x80, 0x14]);
    assert_eq!(
        media.sps,
        vec![0x67, 0x42, 0x80, 0x14, 0xda, 0x05, 0x07, 0xe4]
    );
    assert_eq!(media.pps, vec![0x68, 0xce, 0x06, 0xe2]);
}

#[test]
fn test_h264_profile_level_id_wrong_length_ignored() {
    let mut media = H264Media::new(90000);
    media.parse_fmtp("profile-level-id=4280");

    assert!(media.profile_level_id.is_empty());
}

#[test]
fn test_h264_bad_hex_ignored() {
    let mut media = H264Media::new(90000);
    media.parse_fmtp("profile-level-id=zzzzzz;packetization-mode=1");

    // the broken key is dropped, the rest still applies
    assert!(media.profile_level_id.is_empty());
    assert_eq!(media.packetization_mode, 1);
}

#[test]
fn test_h264_sprop_without_comma_ignored() {
    let mut media = H264Media::new(90000);
    media.parse_fmtp("sprop-parameter-sets=Z0KAFNoFB+Q=");

    assert!(media.sps.is_empty());
    assert!(media.pps.is_empty());
}

#[test]
fn test_h265_fmtp() {
    let mut media = H265Media::new(90000);
    media.parse_fmtp("level-id=93; sprop-vps=QAEMAf//; sprop-sps=QgEBAWAA; sprop-pps=RAHA8vA8kA==");

    assert_eq!(media.level_id, 93);
    assert_eq!(media.vps, vec![0x40, 0x01, 0x0c, 0x01, 0xff, 0xff]);
    assert_eq!(media.sps, vec![0x42, 0x01, 0x01, 0x01, 0x60, 0x00]);
    assert_eq!(media.pps, vec![0x44, 0x01, 0xc0, 0xf2, 0xf0, 0x3c, 0x90]);
}

#[test]
fn test_mpeg4_fmtp() {
    let mut media = Mpeg4Media::new(8000);
    media.parse_fmtp("streamtype=5; profile-level-id=15; mode=AAC-hbr; config=1588");

    assert_eq!(media.clock_rate, 8000);
    assert_eq!(media.mode, "AAC-hbr");
    assert_eq!(media.profile_level_id, 15);
    assert_eq!(media.config, vec![0x15, 0x88]);
}

#[test]
fn test_unknown_keys_ignored() {
    let mut media = Mpeg4Media::new(8000);
    media.parse_fmtp("sizelength=13;indexlength=3;mode=AAC-hbr");

    assert_eq!(media.mode, "AAC-hbr");
}

#[test]
fn test_pairs_without_equals_skipped() {
    let mut media = H264Media::new(90000);
    media.parse_fmtp("garbage; packetization-mode=1; ;");

    assert_eq!(media.packetization_mode, 1);
}
