//! Sink implementations

pub mod memory;

pub use memory::MemorySink;

pub use crate::core::Sink;
