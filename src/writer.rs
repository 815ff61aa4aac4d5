use std::io::{self, Read, Seek, SeekFrom, Write};

use anyhow::Result;

use crate::{
    codec,
    error::PackageError,
    layout::{self, COUNT_HEADER, DESCRIPTOR_WIDTH, NAME_FIELD, OFFSET_FIELD},
};

/// Writes descriptors and data into a package, either sequentially into
/// a fresh file or by appending one entry to a valid package.
pub struct PackageWriter<'a, W> {
    destination:  &'a mut W,
    count:        u32,
    table_cursor: u64,
    data_cursor:  u64,
}

impl<'a, W: Read + Write + Seek> PackageWriter<'a, W> {
    /// Write the count header at the start of the file and fix the table
    /// geometry for `count` entries.
    ///
    /// All offset arithmetic downstream derives from the count given
    /// here, so an append must construct the writer with the grown count
    /// before any bytes move.
    pub fn new(destination: &'a mut W, count: usize) -> Result<Self> {
        let header = codec::encode_count(count)?;
        destination.seek(SeekFrom::Start(0))?;
        destination.write_all(&header)?;
        let count = count as u32;
        Ok(Self {
            destination,
            count,
            table_cursor: COUNT_HEADER as u64,
            data_cursor: layout::data_region_start(count),
        })
    }

    /// Write the next entry of a brand-new package: its descriptor at
    /// the table cursor and its data at the data cursor, with no gaps or
    /// padding between entries.
    pub fn write_entry(&mut self, name: &str, source: &mut impl Read) -> Result<()> {
        if name.is_empty() {
            return Err(PackageError::InvalidArgument("entry name is empty").into());
        }
        let descriptor = codec::encode_descriptor(name, self.data_cursor)?;
        self.destination.seek(SeekFrom::Start(self.table_cursor))?;
        self.destination.write_all(&descriptor)?;
        self.table_cursor += DESCRIPTOR_WIDTH as u64;

        self.destination.seek(SeekFrom::Start(self.data_cursor))?;
        let copied = io::copy(source, &mut *self.destination)?;
        self.data_cursor += copied;
        Ok(())
    }

    /// Grow an existing package by one entry.
    ///
    /// The data region shifts forward by one descriptor width to vacate
    /// the last table slot, every existing stored offset is bumped to
    /// match, and the new entry's data lands at the end of the file.
    /// The writer must have been constructed with the grown count.
    pub fn append_entry(&mut self, name: &str, source: &mut impl Read) -> Result<()> {
        if name.is_empty() {
            return Err(PackageError::InvalidArgument("entry name is empty").into());
        }
        let existing = self.count - 1;
        let new_data_start = layout::data_region_start(self.count);
        let old_data_start = new_data_start - DESCRIPTOR_WIDTH as u64;

        // The source and destination ranges overlap, so the tail is
        // buffered in full before any byte of it is rewritten.
        self.destination.seek(SeekFrom::Start(old_data_start))?;
        let mut tail = Vec::new();
        self.destination.read_to_end(&mut tail)?;

        // The new entry's data goes at the end of the shifted data
        // region. Encoding up front keeps a NameTooLong from landing
        // after bytes have already moved.
        let offset = new_data_start + tail.len() as u64;
        let descriptor = codec::encode_descriptor(name, offset)?;

        self.destination.seek(SeekFrom::Start(new_data_start))?;
        self.destination.write_all(&tail)?;

        // Existing data kept its relative layout; only the region start
        // moved, so each stored offset grows by one descriptor width.
        for i in 0..existing {
            let field = COUNT_HEADER as u64
                + u64::from(i) * DESCRIPTOR_WIDTH as u64
                + NAME_FIELD as u64;
            self.destination.seek(SeekFrom::Start(field))?;
            let mut stored = [0u8; OFFSET_FIELD];
            self.destination.read_exact(&mut stored)?;
            let shifted = codec::decode_offset(stored) + DESCRIPTOR_WIDTH as u64;
            self.destination.seek(SeekFrom::Start(field))?;
            self.destination.write_all(&codec::encode_offset(shifted))?;
        }

        // The new descriptor takes the vacated slot.
        self.destination.seek(SeekFrom::Start(old_data_start))?;
        self.destination.write_all(&descriptor)?;

        self.destination.seek(SeekFrom::Start(offset))?;
        io::copy(source, &mut *self.destination)?;
        Ok(())
    }
}
