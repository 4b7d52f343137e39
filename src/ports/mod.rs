//! Port traits defining external boundaries.
//!
//! The core never touches the disk; fixture loading and generated-file
//! output go through [`FileSystem`]. Implementations live in `src/adapters/`.

pub mod filesystem;

pub use filesystem::FileSystem;
