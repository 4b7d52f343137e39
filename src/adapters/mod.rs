//! Adapters implementing the port traits.

pub mod live;
pub mod memory;

pub use live::LiveFileSystem;
pub use memory::MemoryFileSystem;
