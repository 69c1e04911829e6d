use crate::error::{SaveError, SaveErrorCode};

/// Bytes per section.
pub const SECTION_SIZE: usize = 0x1000;
/// Sections per slot.
pub const SECTION_COUNT: usize = 14;
/// Bytes per slot.
pub const SLOT_SIZE: usize = SECTION_SIZE * SECTION_COUNT;
/// Redundant slots per file.
pub const SLOT_COUNT: usize = 2;
/// Byte offset of each slot within the file.
pub const SLOT_OFFSETS: [usize; SLOT_COUNT] = [0x0000, SLOT_SIZE];
/// Minimum file length: both slots, back to back.
pub const FILE_SIZE: usize = SLOT_SIZE * SLOT_COUNT;

/// Trailing footer of each section.
pub const FOOTER_SIZE: usize = 12;
/// The section id occupies the first bytes of the footer.
pub const FOOTER_ID_LEN: usize = 2;
/// The section whose footer carries the slot's save counter.
pub const COUNTER_SECTION_INDEX: usize = 13;
/// The save counter occupies the last bytes of that section's footer.
pub const COUNTER_LEN: usize = 4;

/// Sum of the section ids 0..13. A valid slot carries each id exactly
/// once, so its ids sum to this value.
pub const EXPECTED_ID_SUM: u32 = 91;

/// Flags and variables are addressed by a 16-bit index.
pub const MAX_FLAG_INDEX: u32 = 0xFFFF;
pub const MAX_VARIABLE_INDEX: u32 = 0xFFFF;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteRange {
    pub start: usize,
    pub end: usize,
}

/// Byte range of a section within its slot buffer.
pub fn section_range(index: usize) -> Result<ByteRange, SaveError> {
    if index >= SECTION_COUNT {
        return Err(SaveError::new(
            SaveErrorCode::Range,
            format!("invalid section index {index}, expected 0..{}", SECTION_COUNT - 1),
        ));
    }
    let start = index * SECTION_SIZE;
    Ok(ByteRange {
        start,
        end: start + SECTION_SIZE,
    })
}

/// Byte range of a section's footer within its slot buffer.
pub fn footer_range(index: usize) -> Result<ByteRange, SaveError> {
    let section = section_range(index)?;
    Ok(ByteRange {
        start: section.end - FOOTER_SIZE,
        end: section.end,
    })
}

/// Byte range of the save counter within a slot buffer: the trailing
/// bytes of section 13's footer.
pub fn counter_range() -> ByteRange {
    let end = (COUNTER_SECTION_INDEX + 1) * SECTION_SIZE;
    ByteRange {
        start: end - COUNTER_LEN,
        end,
    }
}
