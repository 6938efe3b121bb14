//! TypeScript declaration-file builders.
//!
//! Statements are emitted without trailing semicolons, the style used by
//! the generated index.

mod comment;
mod exports;
mod fns;
mod imports;
mod module;

pub use comment::Comment;
pub use exports::Export;
pub use fns::{FnDecl, Param};
pub use imports::Import;
pub use module::DeclareModule;
