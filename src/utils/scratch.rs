use std::io;
use std::path::{Path, PathBuf};
use tempfile::TempPath;
use uuid::Uuid;

/// Invocation-local file in the scratch directory.
///
/// The path is reserved but not created; whoever writes it first creates it.
/// The file is removed when the guard is dropped, whatever the exit path.
#[derive(Debug)]
pub struct ScratchFile {
    path: TempPath,
}

impl ScratchFile {
    /// Reserves `<dir>/<prefix>-<uuid><extension>`.
    pub fn new(dir: &Path, prefix: &str, extension: &str) -> Self {
        let name = format!("{}-{}{}", prefix, Uuid::new_v4(), extension);
        Self {
            path: TempPath::from_path(dir.join(name)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn to_path_buf(&self) -> PathBuf {
        self.path.to_path_buf()
    }

    /// Removes the file now, reporting failures instead of swallowing them.
    /// A file that was never created counts as removed.
    pub fn remove(self) -> io::Result<()> {
        match self.path.close() {
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            other => other,
        }
    }
}
