// Query cache module.
// Process-wide cache for fetched data, keyed by string tags.

pub mod cache;

pub use cache::{QueryCache, QuerySnapshot, QueryStatus, STALE_TTL};
