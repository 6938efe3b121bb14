//! Writing generated files to disk.

use std::path::{Path, PathBuf};

use eyre::Result;

/// Trait for types that represent a generated file.
///
/// Generated files are regenerated on every run and always replace what is
/// on disk.
pub trait GeneratedFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Render the file content
    fn render(&self) -> String;

    /// Write the file to disk
    fn write(&self, base: &Path) -> Result<PathBuf> {
        let path = self.path(base);
        write_file(&path, &self.render())?;
        Ok(path)
    }
}

/// Parent directories are never created: generated files land next to their inputs.
///
/// The error carries the bare I/O cause; callers add the path context.
fn write_file(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content)?;
    Ok(())
}
