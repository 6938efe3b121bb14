//! Generate operation - write index.d.ts for an event directory.
//!
//! Split in two steps so progress can be shown before the index is written.

use std::path::Path;

use eventdts_typescript::{Generator, Result};

use crate::reports::{ScanReport, WriteReport};

/// Scan `dir` and report the events found, without writing anything.
pub fn scan(dir: &Path) -> Result<(Generator, ScanReport)> {
    let generator = Generator::scan(dir)?;

    let report = ScanReport {
        events: generator.events().iter().map(|e| e.name.clone()).collect(),
        diagnostics: generator.diagnostics().to_vec(),
    };

    Ok((generator, report))
}

/// Write `index.d.ts` for a scanned directory.
pub fn write(generator: &Generator) -> Result<WriteReport> {
    let result = generator.generate()?;

    Ok(WriteReport {
        output: result.path,
    })
}
