use std::path::Path;

use crate::error::{SaveError, SaveErrorCode};
use crate::layout;
use crate::slot::GameSaveSlot;

/// The whole save file: two redundant slots plus the record of which
/// one is active.
///
/// `active_slot()` borrows the same element of the owned slot array as
/// `slot(active_index())`, so a flag written through one accessor is
/// visible through the other. That sharing is the point: the active
/// slot is a view onto container state, not a copy of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveContainer {
    slots: [GameSaveSlot; layout::SLOT_COUNT],
    active_index: usize,
}

impl SaveContainer {
    /// Split the file image into two slot buffers, validate both
    /// slots, and arbitrate the active one. A malformed file fails
    /// construction outright; there is no degraded container.
    pub fn from_bytes(raw: &[u8]) -> Result<Self, SaveError> {
        if raw.len() < layout::FILE_SIZE {
            return Err(SaveError::new(
                SaveErrorCode::Parse,
                format!(
                    "save file is {} bytes, need at least {}",
                    raw.len(),
                    layout::FILE_SIZE
                ),
            ));
        }

        let slot_a = GameSaveSlot::new(slot_bytes(raw, 0))?;
        let slot_b = GameSaveSlot::new(slot_bytes(raw, 1))?;
        let active_index = select_active(slot_a.save_counter(), slot_b.save_counter());

        Ok(Self {
            slots: [slot_a, slot_b],
            active_index,
        })
    }

    pub fn slot(&self, index: usize) -> Result<&GameSaveSlot, SaveError> {
        check_slot_index(index)?;
        Ok(&self.slots[index])
    }

    pub fn slot_mut(&mut self, index: usize) -> Result<&mut GameSaveSlot, SaveError> {
        check_slot_index(index)?;
        Ok(&mut self.slots[index])
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn active_slot(&self) -> &GameSaveSlot {
        &self.slots[self.active_index]
    }

    pub fn active_slot_mut(&mut self) -> &mut GameSaveSlot {
        &mut self.slots[self.active_index]
    }

    /// Seam for a future checksum strategy; validates its indices but
    /// computes nothing yet.
    pub fn calculate_section_checksum(
        &self,
        slot_index: usize,
        section_index: usize,
    ) -> Result<u16, SaveError> {
        check_slot_index(slot_index)?;
        layout::section_range(section_index)?;
        Err(SaveError::new(
            SaveErrorCode::UnsupportedOperation,
            "section checksum calculation is not implemented",
        ))
    }

    pub fn update_section_checksum(
        &mut self,
        slot_index: usize,
        section_index: usize,
    ) -> Result<(), SaveError> {
        check_slot_index(slot_index)?;
        layout::section_range(section_index)?;
        Err(SaveError::new(
            SaveErrorCode::UnsupportedOperation,
            "section checksum update is not implemented",
        ))
    }

    /// Seam for reassembling a writable file image from the slots.
    pub fn rewrite_container(&mut self) -> Result<Vec<u8>, SaveError> {
        Err(SaveError::new(
            SaveErrorCode::UnsupportedOperation,
            "container rewrite is not implemented",
        ))
    }

    pub fn export_to_file(&self, _path: &Path) -> Result<(), SaveError> {
        Err(SaveError::new(
            SaveErrorCode::UnsupportedOperation,
            "save export is not implemented",
        ))
    }
}

fn slot_bytes(raw: &[u8], index: usize) -> Vec<u8> {
    let offset = layout::SLOT_OFFSETS[index];
    raw[offset..offset + layout::SLOT_SIZE].to_vec()
}

fn check_slot_index(index: usize) -> Result<(), SaveError> {
    if index >= layout::SLOT_COUNT {
        return Err(SaveError::new(
            SaveErrorCode::Range,
            format!("invalid slot index {index}, expected 0 or 1"),
        ));
    }
    Ok(())
}

/// Strictly greater counter wins; equal counters select slot A, which
/// a console-written save never produces. A counter of 0 opposite a
/// saturated counter is a fresh wrap, not a stale slot.
fn select_active(counter_a: u32, counter_b: u32) -> usize {
    match (counter_a, counter_b) {
        (0, u32::MAX) => 0,
        (u32::MAX, 0) => 1,
        (a, b) if a > b => 0,
        (a, b) if b > a => 1,
        _ => 0,
    }
}
