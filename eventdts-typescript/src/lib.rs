//! TypeScript declaration index generator for Tauri event payloads.
//!
//! Given a directory of `<event>.d.ts` files, each exporting an
//! `<event>EventPayload` type, this crate writes an `index.d.ts` that
//! re-exports every file and augments `@tauri-apps/api/event` with one typed
//! `listen` overload per event.
//!
//! # Usage
//!
//! This crate is used internally by the `eventdts` CLI tool.
//!
//! ```ignore
//! use eventdts_typescript::Generator;
//!
//! let generator = Generator::scan("src/events")?;
//! for diagnostic in generator.diagnostics() {
//!     eprintln!("warning: {}", diagnostic);
//! }
//! generator.generate()?;
//! ```
//!
//! # Generated Output
//!
//! For `click.d.ts` the index contains:
//!
//! ```text
//! // Automatically generated. Do not manually edit.
//!
//! export * from "./click"
//!
//! import { EventCallback, UnlistenFn } from "@tauri-apps/api/event"
//! import { clickEventPayload } from "./click"
//!
//! declare module "@tauri-apps/api/event" {
//!   export function listen<T>(event: "click", handler: EventCallback<clickEventPayload>): Promise<UnlistenFn>
//! }
//! ```

mod code_file;
mod error;
mod generator;

pub mod ast;
pub mod files;
pub mod lints;
pub mod scan;

pub use code_file::CodeFile;
pub use error::{Error, Result};
pub use generator::{GenerateResult, Generator};
pub use scan::EventType;
