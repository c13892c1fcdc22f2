use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::model::SampleNode;

/// Opaque fingerprint of a sample forest's layout.
///
/// Two snapshots with equal digests have the same entry identities in the
/// same order; their names and timings may still differ.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LayoutDigest(String);

impl LayoutDigest {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for LayoutDigest {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for LayoutDigest {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for LayoutDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Compute a layout digest from the pre-order `(depth, id)` sequence.
///
/// Useful when the producer does not ship its own digest. Names, colours and
/// timings are not part of the fingerprint.
pub fn layout_digest<T: SampleNode>(nodes: &[T]) -> LayoutDigest {
    let mut hasher = Sha256::new();
    hash_level(&mut hasher, nodes, 0);
    LayoutDigest(format!("sha256:{:x}", hasher.finalize()))
}

fn hash_level<T: SampleNode>(hasher: &mut Sha256, nodes: &[T], depth: u32) {
    for node in nodes {
        hasher.update(depth.to_le_bytes());
        hasher.update(node.id().0.to_le_bytes());
        hash_level(hasher, node.children(), depth + 1);
    }
}
