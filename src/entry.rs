/// One record in a package's descriptor table.
///
/// Only the name and offset are stored in the file. The length is
/// derived at read time from the following entry's offset, or from the
/// file size for the last entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageEntry {
    /// The name the file is stored under
    pub name:   String,
    /// Absolute byte position of the entry's data within the package
    pub offset: u64,
    /// Number of bytes of the entry's data
    pub length: u64,
}
