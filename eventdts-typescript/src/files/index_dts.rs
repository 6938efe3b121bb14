//! index.d.ts aggregate generator.

use std::path::{Path, PathBuf};

use eventdts_codegen::GeneratedFile;

use crate::{
    ast::{Comment, DeclareModule, Export, FnDecl, Import, Param},
    code_file::CodeFile,
    scan::{EventType, INDEX_FILE},
};

/// Module whose `listen` overloads are augmented.
pub const EVENT_MODULE: &str = "@tauri-apps/api/event";

/// First line of every generated index.
pub const HEADER: &str = "Automatically generated. Do not manually edit.";

/// The generated `index.d.ts` for a directory of event declarations.
///
/// Events are emitted in the order given, duplicates included.
pub struct IndexDts {
    events: Vec<EventType>,
}

impl IndexDts {
    pub fn new(events: Vec<EventType>) -> Self {
        Self { events }
    }

    pub fn events(&self) -> &[EventType] {
        &self.events
    }

    fn re_export(event: &EventType) -> Export {
        Export::all_from(event.module_path())
    }

    fn payload_import(event: &EventType) -> Import {
        Import::new(event.module_path()).named(event.payload_type())
    }

    fn listen_overload(event: &EventType) -> FnDecl {
        FnDecl::new("listen")
            .generic("T")
            .param(Param::new("event", format!("\"{}\"", event.event_literal())))
            .param(Param::new(
                "handler",
                format!("EventCallback<{}>", event.payload_type()),
            ))
            .returns("Promise<UnlistenFn>")
    }
}

impl GeneratedFile for IndexDts {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(INDEX_FILE)
    }

    fn render(&self) -> String {
        let event_imports = Import::new(EVENT_MODULE)
            .named("EventCallback")
            .named("UnlistenFn");

        CodeFile::new()
            .add(Comment::new(HEADER))
            .add_all(self.events.iter().map(Self::re_export))
            .add_all(
                std::iter::once(event_imports)
                    .chain(self.events.iter().map(Self::payload_import)),
            )
            .add(
                DeclareModule::new(EVENT_MODULE)
                    .items(self.events.iter().map(Self::listen_overload)),
            )
            .render()
    }
}
