//! A streaming calculator for Filecoin's piece commitment (commP /
//! CommD / data-commitment-v1): a 32-byte digest of an arbitrary-length
//! byte stream, produced by expanding every 127 input bytes into 128
//! bit-shifted "Fr32" bytes and folding the resulting leaf stream
//! through a truncated-SHA-256 binary Merkle tree.
//!
//! The byte-exact output is the contract: this crate reproduces the
//! commitment the Filecoin reference proofs code computes for the same
//! input bytes. CID encoding, CAR-stream handling, and SIMD SHA-256
//! acceleration are explicitly out of scope — see `SPEC_FULL.md`.
//!
//! ```
//! use commp::CommpAccumulator;
//!
//! let mut acc = CommpAccumulator::new();
//! acc.write(&[0xCCu8; 127]).unwrap();
//! let (commitment, padded_piece_size) = acc.digest().unwrap();
//! assert_eq!(padded_piece_size.bytes(), 128);
//! assert_eq!(commitment.len(), 32);
//! ```

mod accumulator;
mod error;
mod extend;
mod fr32;
mod hash;
mod padding;
mod pipeline;
mod size;

pub use accumulator::CommpAccumulator;
pub use error::Error;
pub use extend::extend_commp;
pub use fr32::QUAD_SIZE;
pub use size::PaddedPieceSize;

/// A 32-byte Merkle node: either a leaf or an interior digest, always
/// with the top two bits of byte 31 cleared.
pub type Node = [u8; 32];

/// The maximum number of Merkle layers above the leaves this crate
/// supports.
pub const MAX_LAYERS: usize = padding::MAX_LAYERS;

/// `1 << 36` bytes: the maximum padded piece size this crate supports.
pub const MAX_PIECE_SIZE: u64 = 1 << 36;

/// The maximum payload this crate will accept in a single stream:
/// `MAX_PIECE_SIZE / 128 * 127`.
pub const MAX_PIECE_PAYLOAD: u64 = MAX_PIECE_SIZE / 128 * 127;

/// The minimum payload `digest` will accept; Filecoin defines no
/// commitment for fewer than 65 payload bytes.
pub const MIN_PIECE_PAYLOAD: u64 = 65;
