//! Index generator for a directory of event declarations.

use std::path::PathBuf;

use eventdts_codegen::{Diagnostic, GeneratedFile};
use tracing::debug;

use crate::{
    error::{Error, Result},
    files::IndexDts,
    lints,
    scan::{self, EventType},
};

/// Result of code generation
#[derive(Debug)]
pub struct GenerateResult {
    /// Path of the generated index.
    pub path: PathBuf,
    /// Number of events in the index.
    pub event_count: usize,
}

/// Generator for the `index.d.ts` of one directory.
///
/// Construction scans the directory and runs the lints; nothing is written
/// until [`Generator::generate`] is called.
pub struct Generator {
    dir: PathBuf,
    index: IndexDts,
    diagnostics: Vec<Diagnostic>,
}

impl Generator {
    /// Scan `dir` for event declaration files.
    pub fn scan(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        let events = scan::scan(&dir)?;
        debug!(dir = %dir.display(), count = events.len(), "scanned event declarations");

        let diagnostics = lints::run(&events);

        Ok(Self {
            dir,
            index: IndexDts::new(events),
            diagnostics,
        })
    }

    /// Discovered events, in emission order.
    pub fn events(&self) -> &[EventType] {
        self.index.events()
    }

    /// Lint findings for the discovered events.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Path the index is written to.
    pub fn output_path(&self) -> PathBuf {
        self.index.path(&self.dir)
    }

    /// Render the index without writing it.
    pub fn render(&self) -> String {
        self.index.render()
    }

    /// Write the index into the scanned directory, replacing any previous one.
    pub fn generate(&self) -> Result<GenerateResult> {
        let path = self
            .index
            .write(&self.dir)
            .map_err(|e| Error::write(self.output_path(), e))?;
        debug!(path = %path.display(), "wrote index");

        Ok(GenerateResult {
            path,
            event_count: self.events().len(),
        })
    }
}
