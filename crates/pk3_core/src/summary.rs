use serde::Serialize;

use crate::container::SaveContainer;
use crate::error::SaveError;
use crate::layout;
use crate::section::SectionKind;
use crate::slot::GameSaveSlot;

/// One section as seen from a slot: physical index, raw id, and the
/// kind the id names.
#[derive(Debug, Clone, Serialize)]
pub struct SectionEntry {
    pub index: usize,
    pub id: u16,
    pub kind: SectionKind,
}

#[derive(Debug, Clone, Serialize)]
pub struct SlotSummary {
    pub save_counter: u32,
    pub sections: Vec<SectionEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContainerSummary {
    pub active_index: usize,
    pub slots: Vec<SlotSummary>,
}

impl SlotSummary {
    pub fn capture(slot: &GameSaveSlot) -> Result<Self, SaveError> {
        let mut sections = Vec::with_capacity(layout::SECTION_COUNT);
        for index in 0..layout::SECTION_COUNT {
            let id = slot.section_id(index)?;
            sections.push(SectionEntry {
                index,
                id,
                kind: SectionKind::from_raw(id),
            });
        }
        Ok(Self {
            save_counter: slot.save_counter(),
            sections,
        })
    }
}

impl ContainerSummary {
    pub fn capture(container: &SaveContainer) -> Result<Self, SaveError> {
        let mut slots = Vec::with_capacity(layout::SLOT_COUNT);
        for index in 0..layout::SLOT_COUNT {
            slots.push(SlotSummary::capture(container.slot(index)?)?);
        }
        Ok(Self {
            active_index: container.active_index(),
            slots,
        })
    }
}
