//! CLI command implementations.

pub mod bench;
pub mod common;
pub mod devices;
pub mod run;
pub mod version;
