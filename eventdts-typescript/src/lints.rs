//! Lints over the discovered events.
//!
//! Lints only report. The generated index still contains every event,
//! duplicates included.

use eventdts_codegen::Diagnostic;
use indexmap::IndexMap;

use crate::scan::EventType;

/// A check over the scanned events.
pub trait Lint {
    /// The name of this lint.
    fn name(&self) -> &'static str;

    /// Check the events and add any diagnostics.
    fn check(&self, events: &[EventType], diagnostics: &mut Vec<Diagnostic>);
}

/// Warns when several files map to the same type name.
///
/// Each duplicate produces its own re-export, import and overload, which a
/// type checker later rejects.
pub struct DuplicateEventLint;

impl Lint for DuplicateEventLint {
    fn name(&self) -> &'static str {
        "duplicate-event"
    }

    fn check(&self, events: &[EventType], diagnostics: &mut Vec<Diagnostic>) {
        let mut by_name: IndexMap<&str, Vec<&str>> = IndexMap::new();
        for event in events {
            by_name
                .entry(event.name.as_str())
                .or_default()
                .push(event.source.as_str());
        }

        for (name, sources) in by_name {
            let Some((first, rest)) = sources.split_first() else {
                continue;
            };
            for source in rest {
                diagnostics.push(
                    Diagnostic::warning(
                        self.name(),
                        format!(
                            "duplicate event '{}' (conflicts with '{}')",
                            name, first
                        ),
                    )
                    .at(*source),
                );
            }
        }
    }
}

/// Warns when a file name starts with a dot, leaving an empty type name.
pub struct EmptyEventNameLint;

impl Lint for EmptyEventNameLint {
    fn name(&self) -> &'static str {
        "empty-event-name"
    }

    fn check(&self, events: &[EventType], diagnostics: &mut Vec<Diagnostic>) {
        for event in events.iter().filter(|e| e.name.is_empty()) {
            diagnostics.push(
                Diagnostic::warning(self.name(), "file name yields an empty event name")
                    .at(event.source.as_str()),
            );
        }
    }
}

/// Every lint, in reporting order.
pub fn all() -> Vec<Box<dyn Lint>> {
    vec![Box::new(DuplicateEventLint), Box::new(EmptyEventNameLint)]
}

/// Run every lint over `events`.
pub fn run(events: &[EventType]) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    for lint in all() {
        lint.check(events, &mut diagnostics);
    }
    diagnostics
}
