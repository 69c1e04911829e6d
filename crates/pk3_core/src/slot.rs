use crate::codec;
use crate::error::{SaveError, SaveErrorCode};
use crate::layout;
use crate::section::SectionKind;

/// One redundant save slot: 14 sections of 0x1000 bytes each.
///
/// Construction validates the buffer length and the section-id sum.
/// The sum check is the one the format affords cheaply: the 14 ids of
/// a valid slot are a rotation of 0..13 and sum to 91. It does not
/// catch a corruption that repeats one id and drops another while
/// keeping the sum; a full permutation check would, but that is a
/// stronger contract than the format's own loader applies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSaveSlot {
    data: Vec<u8>,
}

impl GameSaveSlot {
    pub fn new(data: Vec<u8>) -> Result<Self, SaveError> {
        if data.len() != layout::SLOT_SIZE {
            return Err(SaveError::new(
                SaveErrorCode::InvalidSlot,
                format!(
                    "slot buffer is {} bytes, expected {}",
                    data.len(),
                    layout::SLOT_SIZE
                ),
            ));
        }

        let slot = Self { data };
        let mut id_sum = 0u32;
        for index in 0..layout::SECTION_COUNT {
            id_sum += u32::from(slot.section_id(index)?);
        }
        if id_sum != layout::EXPECTED_ID_SUM {
            return Err(SaveError::new(
                SaveErrorCode::InvalidSlot,
                format!(
                    "section id sum {id_sum} does not match expected {}; not all sections are present",
                    layout::EXPECTED_ID_SUM
                ),
            ));
        }

        Ok(slot)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// The section's bytes, footer included.
    pub fn section(&self, index: usize) -> Result<&[u8], SaveError> {
        let range = layout::section_range(index)?;
        Ok(&self.data[range.start..range.end])
    }

    /// The trailing 12 bytes of the section.
    pub fn section_footer(&self, index: usize) -> Result<&[u8], SaveError> {
        let range = layout::footer_range(index)?;
        Ok(&self.data[range.start..range.end])
    }

    pub fn section_id(&self, index: usize) -> Result<u16, SaveError> {
        let footer = self.section_footer(index)?;
        Ok(codec::decode_le(&footer[..layout::FOOTER_ID_LEN]) as u16)
    }

    pub fn section_kind(&self, index: usize) -> Result<SectionKind, SaveError> {
        Ok(SectionKind::from_raw(self.section_id(index)?))
    }

    /// Number of times the game has written this slot, taken from the
    /// trailing bytes of section 13's footer. Used only to pick the
    /// more recent slot, never to order sections.
    pub fn save_counter(&self) -> u32 {
        let range = layout::counter_range();
        codec::decode_le(&self.data[range.start..range.end])
    }

    /// Flags are single bits addressed by a 16-bit index into the
    /// slot's raw byte space, independent of section boundaries.
    pub fn check_flag_index(flag_index: u32) -> Result<(), SaveError> {
        if flag_index > layout::MAX_FLAG_INDEX {
            return Err(SaveError::new(
                SaveErrorCode::Range,
                format!(
                    "flag index {flag_index:#x} outside the 16-bit flag space"
                ),
            ));
        }
        Ok(())
    }

    fn flag_byte_offset(flag_index: u32) -> usize {
        (flag_index / 8) as usize
    }

    fn flag_bit_mask(flag_index: u32) -> u8 {
        1 << (flag_index % 8)
    }

    pub fn flag(&self, flag_index: u32) -> Result<bool, SaveError> {
        Self::check_flag_index(flag_index)?;
        let byte = self.data[Self::flag_byte_offset(flag_index)];
        Ok(byte & Self::flag_bit_mask(flag_index) != 0)
    }

    pub fn set_flag(&mut self, flag_index: u32) -> Result<(), SaveError> {
        Self::check_flag_index(flag_index)?;
        self.data[Self::flag_byte_offset(flag_index)] |= Self::flag_bit_mask(flag_index);
        Ok(())
    }

    pub fn clear_flag(&mut self, flag_index: u32) -> Result<(), SaveError> {
        Self::check_flag_index(flag_index)?;
        self.data[Self::flag_byte_offset(flag_index)] &= !Self::flag_bit_mask(flag_index);
        Ok(())
    }

    /// Game variables share the 16-bit index space with flags, but
    /// their byte layout is not pinned down for this format revision,
    /// so only the index is validated here.
    pub fn variable(&self, variable_index: u32) -> Result<u16, SaveError> {
        if variable_index > layout::MAX_VARIABLE_INDEX {
            return Err(SaveError::new(
                SaveErrorCode::Range,
                format!(
                    "variable index {variable_index:#x} outside the 16-bit variable space"
                ),
            ));
        }
        Err(SaveError::new(
            SaveErrorCode::UnsupportedOperation,
            "variable reads are not implemented",
        ))
    }
}
