//! Code generation building blocks.
//!
//! - [`CodeBuilder`] - indented text buffer
//! - [`CodeFragment`] - lines and blocks produced by declaration nodes
//! - [`Renderable`] - trait for nodes that turn into fragments
//! - [`Indent`] - indent width

mod code_builder;
mod indent;
mod renderable;

pub use code_builder::CodeBuilder;
pub use indent::Indent;
pub use renderable::{CodeFragment, Renderable};
