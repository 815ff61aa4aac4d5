use std::{fs, path::PathBuf};

use tempfile::TempDir;

/// A scratch directory holding one package under test plus any source
/// files the test wants to pack into it.
pub struct Fixture {
    path:    PathBuf,
    tempdir: TempDir,
}

impl Fixture {
    pub fn blank(fixture_filename: &str) -> Self {
        let tempdir = tempfile::tempdir().unwrap();
        let mut path = PathBuf::from(tempdir.path());
        path.push(fixture_filename);

        Fixture { tempdir, path }
    }

    /// Create a source file next to the package with the given contents
    #[allow(dead_code)]
    pub fn source(&self, name: &str, contents: &[u8]) -> PathBuf {
        let path = self.tempdir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    /// A fresh directory to extract into
    #[allow(dead_code)]
    pub fn dir(&self, name: &str) -> PathBuf {
        let path = self.tempdir.path().join(name);
        fs::create_dir_all(&path).unwrap();
        path
    }
}

impl From<&Fixture> for PathBuf {
    fn from(f: &Fixture) -> Self {
        f.path.to_owned()
    }
}
