//! The single cryptographic primitive this crate depends on: truncated
//! SHA-256 over a pair of 32-byte nodes.

use sha2::{Digest, Sha256};

use crate::Node;

/// Hashes two sibling nodes into their parent, clearing the top two
/// bits of the last byte (the Fr32 field-element constraint).
pub fn hash_pair(left: &Node, right: &Node) -> Node {
    let mut hasher = Sha256::new();
    hasher.update(left);
    hasher.update(right);
    let digest = hasher.finalize();

    let mut node = [0u8; 32];
    node.copy_from_slice(&digest);
    node[31] &= 0x3F;
    node
}
