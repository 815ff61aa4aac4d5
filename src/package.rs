use std::{
    fs::{self, File},
    io::{self, Cursor, Read, Seek, SeekFrom, Write},
    path::{Path, PathBuf},
};

use anyhow::Result;

use crate::{
    entry::PackageEntry, error::PackageError, reader::PackageReader, writer::PackageWriter,
};

/// Temporarily holds a file we want to add to a package
#[derive(Debug)]
pub enum FileAdd {
    /// We want to add a file by its literal contents, under the given name
    Bytes(String, Vec<u8>),
    /// We want to add a file by its path on disk, named by its file name
    Name(PathBuf),
}

impl FileAdd {
    /// The name the entry will be stored under
    pub(crate) fn entry_name(&self) -> Result<String> {
        match self {
            FileAdd::Bytes(name, _) => {
                if name.is_empty() {
                    return Err(PackageError::InvalidArgument("entry name is empty").into());
                }
                Ok(name.clone())
            }
            FileAdd::Name(path) => {
                let name = path
                    .file_name()
                    .ok_or(PackageError::InvalidArgument("path has no file name"))?;
                Ok(name
                    .to_str()
                    .ok_or(PackageError::StringConversion)?
                    .to_string())
            }
        }
    }

    /// A reader over the contents to be stored
    pub(crate) fn reader(&self) -> Result<Box<dyn Read + '_>> {
        match self {
            FileAdd::Bytes(_, contents) => Ok(Box::new(contents.as_slice())),
            FileAdd::Name(path) => Ok(Box::new(File::open(path)?)),
        }
    }
}

/// Backing storage a package can live in
pub trait PackageBacking: Read + Write + Seek {}

impl PackageBacking for File {}
impl PackageBacking for Cursor<Vec<u8>> {}

/// A package is a single container file holding a set of named files.
/// We use a handle to hold both the parsed descriptor table and the
/// backing file; the backing is held open for the handle's lifetime and
/// released when it drops.
pub struct Package {
    entries: Vec<PackageEntry>,
    backing: Box<dyn PackageBacking>,
}

impl std::fmt::Debug for Package {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Package")
            .field("entries", &self.entries)
            .finish_non_exhaustive()
    }
}

impl Package {
    /// Open an existing package on disk
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(PackageError::InvalidArgument("package path is empty").into());
        }
        let file = File::options().read(true).write(true).open(path)?;
        Self::load(Box::new(file))
    }

    /// Load a package from an already opened backing
    pub fn load(mut backing: Box<dyn PackageBacking>) -> Result<Self> {
        let entries = PackageReader::new(&mut backing)?.read_entries()?;
        Ok(Self { entries, backing })
    }

    /// The parsed descriptor table, in on-disk order
    pub fn entries(&self) -> &[PackageEntry] {
        &self.entries
    }

    /// Read the contents of one entry
    pub fn read(&mut self, name: &str) -> Result<Vec<u8>> {
        let entry = self.find(name)?;
        self.backing.seek(SeekFrom::Start(entry.offset))?;
        let mut contents = vec![0u8; entry.length as usize];
        self.backing.read_exact(&mut contents)?;
        Ok(contents)
    }

    /// Extract one entry to a file on disk
    pub fn extract(&mut self, name: &str, destination: impl AsRef<Path>) -> Result<()> {
        let entry = self.find(name)?;
        let mut destination = File::create(destination)?;
        self.copy_entry(&entry, &mut destination)
    }

    /// Extract every entry into a directory, one file per entry, named
    /// by its stored name
    pub fn extract_all(&mut self, destination: impl AsRef<Path>) -> Result<()> {
        let destination = destination.as_ref();
        fs::create_dir_all(destination)?;
        for entry in self.entries.clone() {
            let mut file = File::create(destination.join(&entry.name))?;
            self.copy_entry(&entry, &mut file)?;
        }
        Ok(())
    }

    /// Append one new file to the package, then re-parse the table.
    /// Every existing entry's offset moves by one descriptor width.
    pub fn append(&mut self, from: FileAdd) -> Result<()> {
        if let FileAdd::Name(path) = &from {
            if !path.is_file() {
                return Err(PackageError::NotFound(path.display().to_string()).into());
            }
        }
        let name = from.entry_name()?;
        let mut source = from.reader()?;
        let mut writer = PackageWriter::new(&mut self.backing, self.entries.len() + 1)?;
        writer.append_entry(&name, &mut source)?;
        self.refresh()
    }

    /// Flush and release the backing file
    pub fn close(mut self) -> Result<()> {
        self.backing.flush()?;
        Ok(())
    }

    /// Re-parse the descriptor table after a structural change
    fn refresh(&mut self) -> Result<()> {
        self.entries = PackageReader::new(&mut self.backing)?.read_entries()?;
        Ok(())
    }

    /// Look up the unique entry stored under `name`
    fn find(&self, name: &str) -> Result<PackageEntry> {
        if name.is_empty() {
            return Err(PackageError::InvalidArgument("entry name is empty").into());
        }
        let mut matches = self.entries.iter().filter(|e| e.name == name);
        match (matches.next(), matches.next()) {
            (Some(entry), None) => Ok(entry.clone()),
            (Some(_), Some(_)) => Err(PackageError::AmbiguousName(name.to_string()).into()),
            (None, _) => Err(PackageError::NotFound(name.to_string()).into()),
        }
    }

    fn copy_entry(&mut self, entry: &PackageEntry, destination: &mut impl Write) -> Result<()> {
        self.backing.seek(SeekFrom::Start(entry.offset))?;
        let copied = io::copy(&mut (&mut self.backing).take(entry.length), destination)?;
        if copied != entry.length {
            return Err(PackageError::Malformed(format!(
                "entry {:?} is truncated: expected {} bytes, read {}",
                entry.name, entry.length, copied
            ))
            .into());
        }
        Ok(())
    }
}
