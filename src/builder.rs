use std::{
    fs::File,
    path::{Path, PathBuf},
};

use anyhow::Result;

use crate::{
    error::PackageError,
    package::{FileAdd, Package},
    writer::PackageWriter,
};

/// Collects files to pack and builds a brand-new package from them
#[derive(Debug, Default)]
pub struct PackageBuilder {
    sources: Vec<FileAdd>,
}

impl PackageBuilder {
    /// Create a builder with no files listed yet
    pub fn new() -> Self {
        Self::default()
    }

    /// List a file on disk for packing, named by its file name
    pub fn add_file(&mut self, path: impl Into<PathBuf>) -> Result<()> {
        let path = path.into();
        if path.as_os_str().is_empty() {
            return Err(PackageError::InvalidArgument("source path is empty").into());
        }
        if !path.is_file() {
            return Err(PackageError::NotFound(path.display().to_string()).into());
        }
        self.sources.push(FileAdd::Name(path));
        Ok(())
    }

    /// List literal contents for packing under the given name
    pub fn add_bytes(&mut self, name: impl Into<String>, contents: Vec<u8>) -> Result<()> {
        let name = name.into();
        if name.is_empty() {
            return Err(PackageError::InvalidArgument("entry name is empty").into());
        }
        self.sources.push(FileAdd::Bytes(name, contents));
        Ok(())
    }

    /// Build a package holding the listed files, in the order they were
    /// added, and open a handle on it.
    ///
    /// The destination is truncated first: offsets depend only on entry
    /// order and sizes, so rebuilding the same list produces a
    /// byte-identical package.
    pub fn build(&self, destination: impl AsRef<Path>) -> Result<Package> {
        let destination = destination.as_ref();
        if destination.as_os_str().is_empty() {
            return Err(PackageError::InvalidArgument("destination path is empty").into());
        }
        {
            let mut file = File::options()
                .read(true)
                .write(true)
                .create(true)
                .truncate(true)
                .open(destination)?;
            let mut writer = PackageWriter::new(&mut file, self.sources.len())?;
            for source in &self.sources {
                let name = source.entry_name()?;
                writer.write_entry(&name, &mut source.reader()?)?;
            }
        }
        Package::open(destination)
    }
}
