//! Save-container model for Generation III handheld save files.
//!
//! A save file holds two redundant slots; each slot is 14 fixed-size
//! sections tagged by a rotating id in a 12-byte trailing footer. The
//! slot with the higher save counter is the authoritative save.

pub mod codec;
pub mod container;
pub mod error;
pub mod layout;
pub mod section;
pub mod slot;
pub mod summary;
