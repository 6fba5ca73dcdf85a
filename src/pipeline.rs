//! The per-layer Merkle reducer, wired as an owning vector of lazily
//! grown layer slots rather than a preallocated channel array — see
//! `DESIGN.md` for the rationale.

use crate::hash::hash_pair;
use crate::padding::{tower, MAX_LAYERS};
use crate::Node;

/// A chain of layer reducers. Layer 0 consumes leaves; each higher
/// layer holds at most one dangling "left twin" node awaiting a
/// partner.
#[derive(Debug)]
pub struct Pipeline {
    layers: Vec<Option<Node>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self { layers: vec![None] }
    }

    /// Pushes a leaf into layer 0.
    pub fn push_leaf(&mut self, leaf: Node) {
        self.push(0, leaf);
    }

    /// Pushes `node` into `level`, cascading upward through any chain
    /// of already-full ancestor layers exactly as far as it needs to go.
    fn push(&mut self, level: usize, node: Node) {
        let mut level = level;
        let mut node = node;
        loop {
            assert!(level < MAX_LAYERS, "piece exceeds the maximum supported layer count");
            if level >= self.layers.len() {
                self.layers.push(None);
            }
            match self.layers[level].take() {
                None => {
                    self.layers[level] = Some(node);
                    return;
                }
                Some(left) => {
                    node = hash_pair(&left, &node);
                    level += 1;
                }
            }
        }
    }

    /// Drains the pipeline, zero-padding any dangling node with the
    /// nul-padding tower at its own level and cascading the result
    /// upward (via the same `push` routine a real leaf would use)
    /// until a single root remains.
    ///
    /// # Panics
    /// Panics if no leaf was ever pushed (the caller, `CommpAccumulator`,
    /// guarantees at least one quad was absorbed before calling this).
    pub fn close(mut self) -> Node {
        let padding = tower();
        let mut level = 0;
        loop {
            let is_top = level == self.layers.len() - 1;
            match self.layers[level].take() {
                Some(node) if is_top => return node,
                Some(node) => {
                    let parent = hash_pair(&node, &padding.get(level));
                    self.push(level + 1, parent);
                    level += 1;
                }
                None => {
                    if is_top {
                        panic!("pipeline closed with no leaves ever pushed");
                    }
                    level += 1;
                }
            }
        }
    }
}
