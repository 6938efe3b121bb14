//! Discovery of event declaration files.

use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};

/// Suffix every event declaration file carries.
pub const DECLARATION_SUFFIX: &str = ".d.ts";

/// Name of the generated index, never treated as an input.
pub const INDEX_FILE: &str = "index.d.ts";

/// An event discovered in the scanned directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventType {
    /// Type name, used as import path and (lowercased) as the event literal.
    pub name: String,
    /// File the name was derived from.
    pub source: String,
}

impl EventType {
    /// Derive the event from a declaration file name.
    pub fn from_filename(filename: &str) -> Self {
        Self {
            name: event_name(filename).to_string(),
            source: filename.to_string(),
        }
    }

    /// Name of the payload type the declaration file is expected to export.
    pub fn payload_type(&self) -> String {
        format!("{}EventPayload", self.name)
    }

    /// Relative module specifier of the declaration file.
    pub fn module_path(&self) -> String {
        format!("./{}", self.name)
    }

    /// Event name literal passed to `listen`.
    pub fn event_literal(&self) -> String {
        self.name.to_lowercase()
    }
}

/// Whether `filename` is an event declaration file.
///
/// Anything containing `index.d.ts` is excluded, not only an exact match.
pub fn is_declaration_file(filename: &str) -> bool {
    filename.ends_with(DECLARATION_SUFFIX) && !filename.contains(INDEX_FILE)
}

/// Everything before the first `.` of `filename`.
///
/// `foo.bar.d.ts` yields `foo`, not `foo.bar`.
pub fn event_name(filename: &str) -> &str {
    filename.split('.').next().unwrap_or_default()
}

/// List the event declaration files directly inside `dir`.
///
/// Only regular files are considered: a directory named `*.d.ts` is skipped,
/// as is any entry whose name is not valid UTF-8. Events come back sorted by
/// file name.
pub fn scan(dir: &Path) -> Result<Vec<EventType>> {
    let entries = std::fs::read_dir(dir).map_err(|e| Error::read_dir(dir, e))?;

    let mut filenames = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| Error::read_dir(dir, e))?;

        if entry.file_type().is_ok_and(|t| t.is_dir()) {
            debug!(path = %entry.path().display(), "skipping directory");
            continue;
        }

        let Ok(filename) = entry.file_name().into_string() else {
            debug!(path = %entry.path().display(), "skipping non UTF-8 file name");
            continue;
        };

        if is_declaration_file(&filename) {
            filenames.push(filename);
        } else {
            debug!(%filename, "not an event declaration");
        }
    }

    filenames.sort();

    Ok(filenames
        .iter()
        .map(|f| EventType::from_filename(f))
        .collect())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), "").unwrap();
    }

    #[test]
    fn test_is_declaration_file() {
        assert!(is_declaration_file("click.d.ts"));
        assert!(is_declaration_file("click.payload.d.ts"));
        assert!(!is_declaration_file("click.ts"));
        assert!(!is_declaration_file("notes.txt"));
        assert!(!is_declaration_file("index.d.ts"));
        assert!(!is_declaration_file("old-index.d.ts"));
        assert!(!is_declaration_file("click.d.ts.bak"));
    }

    #[test]
    fn test_event_name_takes_prefix_before_first_dot() {
        assert_eq!(event_name("foo.d.ts"), "foo");
        assert_eq!(event_name("foo.bar.d.ts"), "foo");
        assert_eq!(event_name(".d.ts"), "");
        assert_eq!(event_name("noext"), "noext");
    }

    #[test]
    fn test_event_type_names() {
        let event = EventType::from_filename("Latency.d.ts");
        assert_eq!(event.name, "Latency");
        assert_eq!(event.source, "Latency.d.ts");
        assert_eq!(event.payload_type(), "LatencyEventPayload");
        assert_eq!(event.module_path(), "./Latency");
        assert_eq!(event.event_literal(), "latency");
    }

    #[test]
    fn test_scan_filters_and_sorts() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "resize.d.ts");
        touch(temp.path(), "click.d.ts");
        touch(temp.path(), "index.d.ts");
        touch(temp.path(), "notes.txt");
        touch(temp.path(), "helper.ts");

        let events = scan(temp.path()).unwrap();
        let names: Vec<_> = events.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["click", "resize"]);
    }

    #[test]
    fn test_scan_skips_directories() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("nested.d.ts")).unwrap();
        touch(temp.path().join("nested.d.ts").as_path(), "inner.d.ts");
        touch(temp.path(), "click.d.ts");

        let events = scan(temp.path()).unwrap();
        assert_eq!(events, vec![EventType::from_filename("click.d.ts")]);
    }

    #[test]
    fn test_scan_keeps_duplicate_names() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "foo.d.ts");
        touch(temp.path(), "foo.bar.d.ts");

        let events = scan(temp.path()).unwrap();
        let sources: Vec<_> = events.iter().map(|e| e.source.as_str()).collect();
        assert_eq!(sources, ["foo.bar.d.ts", "foo.d.ts"]);
        assert!(events.iter().all(|e| e.name == "foo"));
    }

    #[test]
    fn test_scan_empty_directory() {
        let temp = TempDir::new().unwrap();
        assert!(scan(temp.path()).unwrap().is_empty());
    }

    #[test]
    fn test_scan_missing_directory() {
        let temp = TempDir::new().unwrap();
        let err = scan(&temp.path().join("missing")).unwrap_err();

        assert!(matches!(*err, Error::ReadDir { .. }));
        assert_eq!(err.io_kind(), Some(std::io::ErrorKind::NotFound));
    }
}
