use std::io::{Read, Seek, SeekFrom};

use anyhow::Result;

use crate::{
    codec,
    entry::PackageEntry,
    error::PackageError,
    layout::{self, COUNT_HEADER, DESCRIPTOR_WIDTH},
};

/// Parses the count header and descriptor table of an existing package.
///
/// Lengths are not stored in the file; after the table walk a post-pass
/// derives each entry's length from its successor's offset, or from the
/// file size for the last entry.
pub struct PackageReader<'a, R> {
    source: &'a mut R,
    count:  u32,
    cursor: u64,
    len:    u64,
}

impl<'a, R: Read + Seek> PackageReader<'a, R> {
    /// Read and validate the count header, leaving the reader positioned
    /// to walk the table.
    pub fn new(source: &'a mut R) -> Result<Self> {
        let len = source.seek(SeekFrom::End(0))?;
        if len < COUNT_HEADER as u64 {
            return Err(PackageError::Malformed(format!(
                "file is {len} bytes, smaller than the count header"
            ))
            .into());
        }
        source.seek(SeekFrom::Start(0))?;
        let mut header = [0u8; COUNT_HEADER];
        source.read_exact(&mut header)?;
        let count = codec::decode_count(header)?;
        if layout::data_region_start(count) > len {
            return Err(PackageError::Malformed(format!(
                "table of {count} descriptors extends past the {len}-byte file"
            ))
            .into());
        }
        Ok(Self {
            source,
            count,
            cursor: COUNT_HEADER as u64,
            len,
        })
    }

    /// The entry count recorded in the header.
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Decode every descriptor in table order and derive entry lengths.
    pub fn read_entries(&mut self) -> Result<Vec<PackageEntry>> {
        let mut entries = Vec::with_capacity(self.count as usize);
        for _ in 0..self.count {
            entries.push(self.read_descriptor()?);
        }
        self.derive_lengths(&mut entries)?;
        Ok(entries)
    }

    fn read_descriptor(&mut self) -> Result<PackageEntry> {
        self.source.seek(SeekFrom::Start(self.cursor))?;
        let mut descriptor = [0u8; DESCRIPTOR_WIDTH];
        self.source.read_exact(&mut descriptor)?;
        self.cursor += DESCRIPTOR_WIDTH as u64;

        let (name, offset) = codec::decode_descriptor(&descriptor)?;
        Ok(PackageEntry {
            name,
            offset,
            length: 0,
        })
    }

    fn derive_lengths(&self, entries: &mut [PackageEntry]) -> Result<()> {
        let data_start = layout::data_region_start(self.count);
        for i in 0..entries.len() {
            let end = if i + 1 < entries.len() {
                entries[i + 1].offset
            } else {
                self.len
            };
            let entry = &mut entries[i];
            if entry.offset < data_start || entry.offset > self.len {
                return Err(PackageError::Malformed(format!(
                    "entry {:?} points at offset {} outside the data region",
                    entry.name, entry.offset
                ))
                .into());
            }
            entry.length = end.checked_sub(entry.offset).ok_or_else(|| {
                PackageError::Malformed(format!(
                    "entry {:?} overlaps the entry after it",
                    entry.name
                ))
            })?;
        }
        Ok(())
    }
}
