//! An unordered set backed by linear hashing.
//!
//! Linear hashing grows the bucket directory one split at a time: an
//! insert that lands in a full bucket triggers a split of the bucket at
//! the split pointer (which is usually a different bucket), and the
//! directory doubles in staged rounds instead of rehashing everything at
//! a load threshold. Lookups address buckets through two hash functions
//! that differ by one bit of range, so each split relocates the keys of
//! exactly one bucket.
//!
//! The set is single-threaded and stores keys by value. Iteration
//! borrows the set, and any mutation may move keys (splits rebuild the
//! directory, removal swaps slots), so references into the set never
//! outlive the next mutation.

mod bucket;
mod directory;
mod set;
mod set_proptest;

pub use set::{IntoIter, Iter, LinearHashSet};
