//! Plain data consumed and produced by the core.
//!
//! Field names follow the JSON written by the recorder and the mock store
//! (`camelCase`), so fixtures deserialize without a translation layer.

mod bucket;
mod event;
mod mock;

pub use bucket::{ActionBucket, Buckets, GeneratedFile};
pub use event::{EventKind, LocatorCandidate, RecordedEvent};
pub use mock::{LiveRequest, MockRecord, MockRequest, MockResponse, TestCase};
