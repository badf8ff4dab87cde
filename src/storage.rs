//! Access to raw flash partitions.

use std::io;
use std::path::PathBuf;

/// Provider of whole flash partitions, looked up by name.
pub trait Storage {
    fn read_all(&self, name: &str) -> io::Result<Vec<u8>>;
}

/// Reads partition images dumped as `<root>/<name>`.
#[derive(Debug, Clone)]
pub struct DirStorage {
    root: PathBuf,
}

impl DirStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl Storage for DirStorage {
    fn read_all(&self, name: &str) -> io::Result<Vec<u8>> {
        std::fs::read(self.root.join(name))
    }
}

impl<F> Storage for F
where
    F: Fn(&str) -> io::Result<Vec<u8>>,
{
    fn read_all(&self, name: &str) -> io::Result<Vec<u8>> {
        self(name)
    }
}
