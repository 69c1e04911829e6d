/// Interpret a byte slice as a single little-endian unsigned integer:
/// `bytes[0]` is the least significant byte, so `[0x20, 0x10]` decodes
/// to `0x1020`.
///
/// Callers must keep the slice within 4 bytes; this format only ever
/// decodes 2-byte ids and 4-byte counters.
pub fn decode_le(bytes: &[u8]) -> u32 {
    let mut value = 0u32;
    for (i, &byte) in bytes.iter().enumerate() {
        value |= u32::from(byte) << (i * 8);
    }
    value
}

/// Write `value` into `out` in little-endian order, one byte per slot.
/// The inverse of [`decode_le`] for 2- and 4-byte targets.
pub fn encode_le(value: u32, out: &mut [u8]) {
    for (i, byte) in out.iter_mut().enumerate() {
        *byte = (value >> (i * 8)) as u8;
    }
}
