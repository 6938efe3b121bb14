//! Core operations.
//!
//! This module contains the business logic of the CLI,
//! separated from argument parsing and output rendering.

pub mod generate;

pub use generate::{scan, write};
