//! Shared code generation utilities for the eventdts index generator.
//!
//! This crate provides language-agnostic abstractions used by the
//! TypeScript declaration generator (`eventdts-typescript`).
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`file`] - Writing generated files to disk (GeneratedFile)
//! - [`diagnostic`] - Warnings and errors collected while scanning inputs

pub mod builder;
pub mod diagnostic;
pub mod file;

pub use builder::{CodeBuilder, CodeFragment, Indent, Renderable};
pub use diagnostic::{Diagnostic, Severity};
pub use file::GeneratedFile;
