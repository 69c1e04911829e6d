use std::fmt;

use serde::{Deserialize, Serialize};

/// Logical meaning of a section id.
///
/// Section ids rotate by one position within a slot on every save, so
/// a given id can appear at any physical index; the kind follows the
/// id, not the position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SectionKind {
    /// Player name, gender, appearance and related attributes.
    TrainerInfo,
    /// Party and item data.
    TeamItems,
    /// Current progress: location, story state.
    GameState,
    /// Data that fits no other category.
    MiscData,
    /// Rival data.
    RivalInfo,
    PcBufferA,
    PcBufferB,
    PcBufferC,
    PcBufferD,
    PcBufferE,
    PcBufferF,
    PcBufferG,
    PcBufferH,
    /// Last storage buffer; also carries the slot's save counter in
    /// its footer.
    PcBufferI,
    Unknown(u16),
}

impl SectionKind {
    pub fn from_raw(raw: u16) -> Self {
        match raw {
            0 => Self::TrainerInfo,
            1 => Self::TeamItems,
            2 => Self::GameState,
            3 => Self::MiscData,
            4 => Self::RivalInfo,
            5 => Self::PcBufferA,
            6 => Self::PcBufferB,
            7 => Self::PcBufferC,
            8 => Self::PcBufferD,
            9 => Self::PcBufferE,
            10 => Self::PcBufferF,
            11 => Self::PcBufferG,
            12 => Self::PcBufferH,
            13 => Self::PcBufferI,
            other => Self::Unknown(other),
        }
    }

    pub fn raw(&self) -> u16 {
        match *self {
            Self::TrainerInfo => 0,
            Self::TeamItems => 1,
            Self::GameState => 2,
            Self::MiscData => 3,
            Self::RivalInfo => 4,
            Self::PcBufferA => 5,
            Self::PcBufferB => 6,
            Self::PcBufferC => 7,
            Self::PcBufferD => 8,
            Self::PcBufferE => 9,
            Self::PcBufferF => 10,
            Self::PcBufferG => 11,
            Self::PcBufferH => 12,
            Self::PcBufferI => 13,
            Self::Unknown(other) => other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match *self {
            Self::TrainerInfo => "Trainer info",
            Self::TeamItems => "Team / items",
            Self::GameState => "Game state",
            Self::MiscData => "Misc data",
            Self::RivalInfo => "Rival info",
            Self::PcBufferA => "PC buffer A",
            Self::PcBufferB => "PC buffer B",
            Self::PcBufferC => "PC buffer C",
            Self::PcBufferD => "PC buffer D",
            Self::PcBufferE => "PC buffer E",
            Self::PcBufferF => "PC buffer F",
            Self::PcBufferG => "PC buffer G",
            Self::PcBufferH => "PC buffer H",
            Self::PcBufferI => "PC buffer I",
            Self::Unknown(_) => "Unknown",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Unknown(v) => write!(f, "Unknown ({})", v),
            _ => f.write_str(self.as_str()),
        }
    }
}
