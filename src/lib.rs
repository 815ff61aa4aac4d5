#![warn(missing_docs)]
#![warn(clippy::unwrap_used)]

//! Pak file format for bundling a set of files into one package.

pub use builder::PackageBuilder;
pub use entry::PackageEntry;
pub use error::PackageError;
pub use package::{FileAdd, Package, PackageBacking};
pub use reader::PackageReader;
pub use writer::PackageWriter;

/// Collecting files and building new packages from them.
mod builder;
/// The fixed-width count header and descriptor codec.
mod codec;
/// Entries within a package's descriptor table.
mod entry;
/// Error codes
mod error;
/// The fixed geometry of the package format.
pub mod layout;
/// The package container. Handle and mutation methods.
mod package;
/// Parsing the header and descriptor table of an existing package.
mod reader;
/// Sequential and appending writers for the package layout.
mod writer;
