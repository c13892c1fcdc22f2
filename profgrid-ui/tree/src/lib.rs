//! Profiling sample tree model and traversal helpers.
//!
//! This crate is UI-agnostic. It describes the sample snapshot a profiler
//! produces on every refresh and the pre-order walk the grid view relies on:
//! - [`SampleEntry`] is one node of the sample forest (name, timings, counts);
//! - [`SampleNode`] abstracts over node types so helpers work on any tree;
//! - [`flatten_samples`] and [`count_entries`] walk the forest parent-first;
//! - [`layout_digest`] fingerprints the identity/ordering of a forest.
//!
//! # Quick Example
//!
//! ```
//! use profgrid_ui_tree::{SampleEntry, count_entries, flatten_samples};
//!
//! let tree = vec![
//!     SampleEntry::new(1, "frame")
//!         .with_children(vec![SampleEntry::new(2, "update")]),
//! ];
//!
//! assert_eq!(count_entries(&tree), 2);
//! let rows = flatten_samples(&tree);
//! assert_eq!(rows[1].depth, 1);
//! assert_eq!(rows[1].node.name, "update");
//! ```

mod digest;
mod model;

pub use digest::{LayoutDigest, layout_digest};
pub use model::{
    EntryId, FlattenedSample, SampleEntry, SampleNode, Snapshot,
    count_entries, flatten_samples,
};
