use pk3_core::section::SectionKind;

#[test]
fn maps_known_section_ids() {
    assert_eq!(SectionKind::from_raw(0), SectionKind::TrainerInfo);
    assert_eq!(SectionKind::from_raw(1), SectionKind::TeamItems);
    assert_eq!(SectionKind::from_raw(4), SectionKind::RivalInfo);
    assert_eq!(SectionKind::from_raw(5), SectionKind::PcBufferA);
    assert_eq!(SectionKind::from_raw(13), SectionKind::PcBufferI);
}

#[test]
fn named_kinds_round_trip_through_raw() {
    for raw in 0..14u16 {
        let kind = SectionKind::from_raw(raw);
        assert!(
            !matches!(kind, SectionKind::Unknown(_)),
            "id {raw} should map to a named kind"
        );
        assert_eq!(kind.raw(), raw);
    }
}

#[test]
fn preserves_unknown_values() {
    assert_eq!(SectionKind::from_raw(99), SectionKind::Unknown(99));
    assert_eq!(SectionKind::from_raw(99).raw(), 99);
    assert_eq!(SectionKind::from_raw(99).to_string(), "Unknown (99)");
}
