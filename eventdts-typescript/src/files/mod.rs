//! Generated file definitions.

mod index_dts;

pub use index_dts::{EVENT_MODULE, HEADER, IndexDts};
