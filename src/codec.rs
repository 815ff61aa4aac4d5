//! Encoding and decoding of the fixed-width on-disk records.
//!
//! All multi-byte integers are big-endian regardless of host byte
//! order; entry names are UTF-16LE, zero-filled to the width of the
//! name field. Packages are byte-identical across platforms.

use crate::{
    error::PackageError,
    layout::{COUNT_HEADER, DESCRIPTOR_WIDTH, NAME_FIELD, OFFSET_FIELD},
};

/// Encode the entry count as the fixed-width big-endian header.
///
/// The stored field is a signed 32-bit integer; counts it cannot
/// represent are a range error.
pub fn encode_count(count: usize) -> Result<[u8; COUNT_HEADER], PackageError> {
    let count = i32::try_from(count).map_err(|_| PackageError::CountOutOfRange(count))?;
    Ok(count.to_be_bytes())
}

/// Decode the entry count header. A negative stored count can only come
/// from a corrupt file.
pub fn decode_count(bytes: [u8; COUNT_HEADER]) -> Result<u32, PackageError> {
    let count = i32::from_be_bytes(bytes);
    u32::try_from(count)
        .map_err(|_| PackageError::Malformed(format!("negative entry count {count}")))
}

/// Encode an offset as the fixed-width big-endian offset field.
pub fn encode_offset(offset: u64) -> [u8; OFFSET_FIELD] {
    offset.to_be_bytes()
}

/// Decode the fixed-width big-endian offset field.
pub fn decode_offset(bytes: [u8; OFFSET_FIELD]) -> u64 {
    u64::from_be_bytes(bytes)
}

/// Encode one descriptor: the name left-justified in the name field
/// with the remainder zero-filled, followed by the offset field.
pub fn encode_descriptor(
    name: &str,
    offset: u64,
) -> Result<[u8; DESCRIPTOR_WIDTH], PackageError> {
    let mut descriptor = [0u8; DESCRIPTOR_WIDTH];
    let mut cursor = 0;
    for unit in name.encode_utf16() {
        if cursor + 2 > NAME_FIELD {
            return Err(PackageError::NameTooLong(name.to_string()));
        }
        descriptor[cursor..cursor + 2].copy_from_slice(&unit.to_le_bytes());
        cursor += 2;
    }
    descriptor[NAME_FIELD..].copy_from_slice(&encode_offset(offset));
    Ok(descriptor)
}

/// Decode one descriptor, trimming the trailing zero padding from the
/// name field.
pub fn decode_descriptor(
    bytes: &[u8; DESCRIPTOR_WIDTH],
) -> Result<(String, u64), PackageError> {
    let mut units: Vec<u16> = bytes[..NAME_FIELD]
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect();
    while units.last() == Some(&0) {
        units.pop();
    }
    let name = String::from_utf16(&units)
        .map_err(|_| PackageError::Malformed("entry name is not valid UTF-16".to_string()))?;

    let mut offset = [0u8; OFFSET_FIELD];
    offset.copy_from_slice(&bytes[NAME_FIELD..]);
    Ok((name, decode_offset(offset)))
}
