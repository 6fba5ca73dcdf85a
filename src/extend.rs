//! Grows an existing commP from one padded size to a larger one by
//! walking the nul-padding tower.

use crate::error::Error;
use crate::hash::hash_pair;
use crate::padding::tower;
use crate::{Node, MAX_PIECE_SIZE};

/// Extends `commitment` (the digest of a piece padded to
/// `source_size` bytes) to what it would have been had the same
/// payload been zero-padded to `target_size` bytes instead.
///
/// Both sizes are powers of two, in bytes, with `128 <= source_size <=
/// target_size <= 2^36`. Returns `commitment` unchanged if
/// `source_size == target_size`.
pub fn extend_commp(commitment: &[u8], source_size: u64, target_size: u64) -> Result<Node, Error> {
    if commitment.len() != 32 {
        return Err(Error::InvalidCommpLength(commitment.len()));
    }
    if source_size.count_ones() != 1 {
        return Err(Error::NotPowerOfTwo(source_size));
    }
    if target_size.count_ones() != 1 {
        return Err(Error::NotPowerOfTwo(target_size));
    }
    if target_size < source_size {
        return Err(Error::TargetTooSmall {
            source: source_size,
            target: target_size,
        });
    }
    if source_size < 128 {
        return Err(Error::SourceBelowMinimum(source_size));
    }
    if target_size > MAX_PIECE_SIZE {
        return Err(Error::TargetAboveMaximum(target_size));
    }

    let source_level = source_size.trailing_zeros() - 5; // 32 bytes per leaf, 2^5.
    let target_level = target_size.trailing_zeros() - 5;

    let padding = tower();
    let mut node = [0u8; 32];
    node.copy_from_slice(commitment);
    for level in source_level..target_level {
        node = hash_pair(&node, &padding.get(level as usize));
    }

    Ok(node)
}
