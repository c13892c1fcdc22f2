use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

/// Stable identity of a sample entry, unique within one snapshot.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct EntryId(pub u64);

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for EntryId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// One node of a profiling sample tree.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SampleEntry {
    pub id: EntryId,
    /// Display name. Starts out as a hashed placeholder and is replaced once
    /// the real name has been resolved.
    pub name: String,
    pub colour: String,
    pub ms_length: f64,
    pub ms_self: f64,
    pub call_count: u32,
    pub recurse_depth: u32,
    #[serde(default)]
    pub children: Vec<SampleEntry>,
}

impl SampleEntry {
    /// Create a leaf entry with zeroed timings.
    pub fn new(id: impl Into<EntryId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            colour: String::from("#BBBBBB"),
            ms_length: 0.0,
            ms_self: 0.0,
            call_count: 0,
            recurse_depth: 0,
            children: Vec::new(),
        }
    }

    pub fn with_colour(mut self, colour: impl Into<String>) -> Self {
        self.colour = colour.into();
        self
    }

    pub fn with_timing(mut self, ms_length: f64, ms_self: f64) -> Self {
        self.ms_length = ms_length;
        self.ms_self = ms_self;
        self
    }

    pub fn with_calls(mut self, call_count: u32, recurse_depth: u32) -> Self {
        self.call_count = call_count;
        self.recurse_depth = recurse_depth;
        self
    }

    pub fn with_children(mut self, children: Vec<SampleEntry>) -> Self {
        self.children = children;
        self
    }
}

/// Shared, immutable sample forest handed to the grid on every refresh.
///
/// Producers pass the same `Rc` again when nothing changed upstream, so
/// consumers can short-circuit on [`Rc::ptr_eq`].
pub type Snapshot = Rc<[SampleEntry]>;

/// Trait implemented by sample node types consumable by this crate.
pub trait SampleNode {
    /// Identity used to index the node's row.
    fn id(&self) -> EntryId;
    /// Display name of the node.
    fn name(&self) -> &str;
    /// Ordered children of the node.
    fn children(&self) -> &[Self]
    where
        Self: Sized;
}

impl SampleNode for SampleEntry {
    fn id(&self) -> EntryId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn children(&self) -> &[Self] {
        &self.children
    }
}

/// Flattened representation of a sample node.
pub struct FlattenedSample<'a, T: SampleNode> {
    /// Zero-based tree depth (`0` for root-level rows).
    pub depth: usize,
    /// Borrowed source node.
    pub node: &'a T,
}

/// Flatten a forest into a pre-order list: every parent comes before its
/// children, and children keep their snapshot order.
pub fn flatten_samples<'a, T: SampleNode>(
    nodes: &'a [T],
) -> Vec<FlattenedSample<'a, T>> {
    let mut entries = Vec::new();
    for node in nodes {
        push_node(node, 0, &mut entries);
    }
    entries
}

fn push_node<'a, T: SampleNode>(
    node: &'a T,
    depth: usize,
    entries: &mut Vec<FlattenedSample<'a, T>>,
) {
    entries.push(FlattenedSample { depth, node });
    for child in node.children() {
        push_node(child, depth + 1, entries);
    }
}

/// Total number of nodes in the forest, nested children included.
pub fn count_entries<T: SampleNode>(nodes: &[T]) -> usize {
    nodes
        .iter()
        .map(|node| 1 + count_entries(node.children()))
        .sum()
}
