//! The fixed geometry of the package format, all sizes in bytes.
//!
//! These widths are the wire format: the layout carries no version tag,
//! so a reader and writer must agree on them bit-for-bit.

/// Number of bytes reserved for an entry name, encoded UTF-16LE and
/// zero-filled to the right.
pub const NAME_FIELD: usize = 128;

/// Number of bytes holding the big-endian entry count at the start of
/// the file.
pub const COUNT_HEADER: usize = 4;

/// Number of bytes holding an entry's big-endian data offset.
pub const OFFSET_FIELD: usize = 8;

/// Total width of one descriptor in the table.
pub const DESCRIPTOR_WIDTH: usize = NAME_FIELD + OFFSET_FIELD;

/// Byte position where the data region starts in a package of `count`
/// entries.
pub fn data_region_start(count: u32) -> u64 {
    COUNT_HEADER as u64 + count as u64 * DESCRIPTOR_WIDTH as u64
}
