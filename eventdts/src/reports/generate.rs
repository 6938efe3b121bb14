//! Generate command report data structures.

use std::path::PathBuf;

use eventdts_codegen::Diagnostic;

use super::output::{Output, Report};

/// What the scan found, shown before the index is written.
#[derive(Debug)]
pub struct ScanReport {
    /// Event type names, in emission order.
    pub events: Vec<String>,

    /// Lint findings for the scanned files.
    pub diagnostics: Vec<Diagnostic>,
}

impl Report for ScanReport {
    fn render(&self, out: &mut dyn Output) {
        out.preformatted("Generating index.d.ts for events");

        for diag in &self.diagnostics {
            out.diagnostic(diag.severity, &diag.to_string());
        }

        out.section("Found events");
        for event in &self.events {
            out.list_item(event);
        }
    }
}

/// Outcome of writing the index.
#[derive(Debug)]
pub struct WriteReport {
    /// Path of the written index.
    pub output: PathBuf,
}

impl Report for WriteReport {
    fn render(&self, out: &mut dyn Output) {
        out.preformatted(&format!("Wrote {}", self.output.display()));
        out.preformatted("Done!");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::testing::BufferOutput;

    #[test]
    fn test_render_scan_then_write() {
        let scan = ScanReport {
            events: vec!["click".into(), "resize".into()],
            diagnostics: Vec::new(),
        };
        let write = WriteReport {
            output: PathBuf::from("events/index.d.ts"),
        };

        let mut out = BufferOutput::default();
        scan.render(&mut out);
        write.render(&mut out);

        assert_eq!(
            out.stdout,
            [
                "Generating index.d.ts for events",
                "Found events:",
                "\tclick",
                "\tresize",
                "Wrote events/index.d.ts",
                "Done!",
            ]
        );
        assert!(out.stderr.is_empty());
    }

    #[test]
    fn test_scan_report_alone_has_no_completion_line() {
        let scan = ScanReport {
            events: vec!["click".into()],
            diagnostics: Vec::new(),
        };

        let mut out = BufferOutput::default();
        scan.render(&mut out);

        assert_eq!(
            out.stdout,
            ["Generating index.d.ts for events", "Found events:", "\tclick"]
        );
    }

    #[test]
    fn test_render_warnings_to_stderr() {
        let scan = ScanReport {
            events: vec!["foo".into(), "foo".into()],
            diagnostics: vec![
                Diagnostic::warning("duplicate-event", "duplicate event 'foo'").at("foo.d.ts"),
            ],
        };

        let mut out = BufferOutput::default();
        scan.render(&mut out);

        assert_eq!(
            out.stderr,
            ["warning: duplicate event 'foo' (at foo.d.ts)"]
        );
        assert_eq!(out.stdout.len(), 4);
    }
}
