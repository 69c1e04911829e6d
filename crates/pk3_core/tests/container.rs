use std::path::Path;

use pk3_core::container::SaveContainer;
use pk3_core::error::SaveErrorCode;
use pk3_core::layout;
use pk3_core::summary::ContainerSummary;

fn write_slot(data: &mut [u8], slot_index: usize, rotation: usize, counter: u32) {
    let base = layout::SLOT_OFFSETS[slot_index];
    for index in 0..layout::SECTION_COUNT {
        let id = ((index + rotation) % layout::SECTION_COUNT) as u16;
        let footer_start = base + (index + 1) * layout::SECTION_SIZE - layout::FOOTER_SIZE;
        data[footer_start..footer_start + 2].copy_from_slice(&id.to_le_bytes());
    }
    let counter_end = base + layout::SLOT_SIZE;
    data[counter_end - 4..counter_end].copy_from_slice(&counter.to_le_bytes());
}

/// A full synthetic file image: slot A rotated by 0, slot B by 1, as
/// two consecutive console writes would leave them.
fn synthetic_file(counter_a: u32, counter_b: u32) -> Vec<u8> {
    let mut data = vec![0u8; layout::FILE_SIZE];
    write_slot(&mut data, 0, 0, counter_a);
    write_slot(&mut data, 1, 1, counter_b);
    data
}

#[test]
fn higher_counter_wins() {
    let container = SaveContainer::from_bytes(&synthetic_file(5, 7)).unwrap();
    assert_eq!(container.active_index(), 1);
    assert_eq!(container.active_slot().save_counter(), 7);

    let container = SaveContainer::from_bytes(&synthetic_file(9, 2)).unwrap();
    assert_eq!(container.active_index(), 0);
}

#[test]
fn equal_counters_select_slot_a() {
    let container = SaveContainer::from_bytes(&synthetic_file(3, 3)).unwrap();
    assert_eq!(container.active_index(), 0);
}

#[test]
fn wrapped_counter_beats_saturated_counter() {
    let container = SaveContainer::from_bytes(&synthetic_file(u32::MAX, 0)).unwrap();
    assert_eq!(container.active_index(), 1);

    let container = SaveContainer::from_bytes(&synthetic_file(0, u32::MAX)).unwrap();
    assert_eq!(container.active_index(), 0);
}

#[test]
fn active_slot_aliases_the_stored_slot() {
    let mut container = SaveContainer::from_bytes(&synthetic_file(5, 7)).unwrap();
    assert_eq!(container.active_index(), 1);

    container.active_slot_mut().set_flag(0x600).unwrap();
    assert!(container.slot(1).unwrap().flag(0x600).unwrap());
    assert!(!container.slot(0).unwrap().flag(0x600).unwrap());
}

#[test]
fn short_file_fails_to_parse() {
    let short = vec![0u8; layout::FILE_SIZE - 1];
    let err = SaveContainer::from_bytes(&short).unwrap_err();
    assert_eq!(err.code, SaveErrorCode::Parse);
}

#[test]
fn corrupt_slot_fails_construction() {
    let mut data = synthetic_file(5, 7);
    // Break slot B's id sum.
    let footer_start = layout::SLOT_OFFSETS[1] + layout::SECTION_SIZE - layout::FOOTER_SIZE;
    data[footer_start..footer_start + 2].copy_from_slice(&99u16.to_le_bytes());
    let err = SaveContainer::from_bytes(&data).unwrap_err();
    assert_eq!(err.code, SaveErrorCode::InvalidSlot);
}

#[test]
fn slot_index_out_of_range() {
    let container = SaveContainer::from_bytes(&synthetic_file(5, 7)).unwrap();
    assert_eq!(container.slot(2).unwrap_err().code, SaveErrorCode::Range);
}

#[test]
fn reserved_seams_are_unsupported() {
    let mut container = SaveContainer::from_bytes(&synthetic_file(5, 7)).unwrap();

    assert_eq!(
        container.calculate_section_checksum(0, 0).unwrap_err().code,
        SaveErrorCode::UnsupportedOperation
    );
    assert_eq!(
        container.update_section_checksum(1, 13).unwrap_err().code,
        SaveErrorCode::UnsupportedOperation
    );
    assert_eq!(
        container.rewrite_container().unwrap_err().code,
        SaveErrorCode::UnsupportedOperation
    );
    assert_eq!(
        container
            .export_to_file(Path::new("out.sav"))
            .unwrap_err()
            .code,
        SaveErrorCode::UnsupportedOperation
    );

    // The seams still validate their indices.
    assert_eq!(
        container.calculate_section_checksum(2, 0).unwrap_err().code,
        SaveErrorCode::Range
    );
    assert_eq!(
        container.update_section_checksum(0, 14).unwrap_err().code,
        SaveErrorCode::Range
    );
}

#[test]
fn summary_captures_both_slots() {
    let container = SaveContainer::from_bytes(&synthetic_file(5, 7)).unwrap();
    let summary = ContainerSummary::capture(&container).unwrap();

    assert_eq!(summary.active_index, 1);
    assert_eq!(summary.slots.len(), 2);
    assert_eq!(summary.slots[0].save_counter, 5);
    assert_eq!(summary.slots[1].save_counter, 7);
    assert_eq!(summary.slots[0].sections.len(), layout::SECTION_COUNT);
    assert_eq!(summary.slots[1].sections[0].id, 1);

    let json = serde_json::to_value(&summary).expect("summary should serialize");
    assert_eq!(json["active_index"], 1);
    assert_eq!(json["slots"][0]["save_counter"], 5);
    assert_eq!(json["slots"][0]["sections"][0]["kind"], "TrainerInfo");
}
