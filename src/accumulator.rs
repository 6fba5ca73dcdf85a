//! The streaming hash-style façade: `write` / `digest` / `reset` / `sum`.

use tracing::{debug, warn};

use crate::error::Error;
use crate::fr32::{expand_quad, leaves, QUAD_SIZE};
use crate::pipeline::Pipeline;
use crate::size::{padded_piece_size_for_payload, PaddedPieceSize};
use crate::{Node, MAX_PIECE_PAYLOAD, MIN_PIECE_PAYLOAD};

/// Streaming Filecoin piece-commitment (commP) calculator.
///
/// A freshly constructed (or `Default::default()`'d) accumulator is
/// immediately usable. Bytes are fed in via [`Self::write`] in any
/// chunking; [`Self::digest`] closes the stream and returns the
/// 32-byte commitment together with the padded piece size, then resets
/// the accumulator so it can be reused for a new stream.
#[derive(Debug)]
pub struct CommpAccumulator {
    /// Bytes written so far that haven't yet formed a full 127-byte quad.
    carry: Vec<u8>,
    /// Total payload bytes written since the last reset/digest.
    payload_len: u64,
    /// Lazily created on the first write.
    pipeline: Option<Pipeline>,
}

impl Default for CommpAccumulator {
    fn default() -> Self {
        Self {
            carry: Vec::with_capacity(QUAD_SIZE),
            payload_len: 0,
            pipeline: None,
        }
    }
}

impl CommpAccumulator {
    /// The block size of the underlying hash-style interface: a full
    /// Fr32 quad is 127 payload bytes.
    pub const BLOCK_SIZE: usize = QUAD_SIZE;

    /// The digest size: a commP is 32 bytes.
    pub const DIGEST_SIZE: usize = 32;

    /// Creates a new, empty accumulator. Equivalent to `Default::default()`.
    pub fn new() -> Self {
        Self::default()
    }

    /// The block size of the underlying hash-style interface.
    pub fn block_size(&self) -> usize {
        Self::BLOCK_SIZE
    }

    /// The digest size.
    pub fn digest_size(&self) -> usize {
        Self::DIGEST_SIZE
    }

    /// Accumulates `bytes` into the stream. Returns the number of
    /// bytes accepted, which is always `bytes.len()` on success — a
    /// write either fully succeeds or is rejected atomically with
    /// [`Error::OverflowExceeded`] and no change to accumulator state.
    ///
    /// Behavior is identical regardless of how the input is chunked
    /// across calls.
    pub fn write(&mut self, bytes: &[u8]) -> Result<usize, Error> {
        if bytes.is_empty() {
            return Ok(0);
        }

        let new_total = self
            .payload_len
            .checked_add(bytes.len() as u64)
            .filter(|total| *total <= MAX_PIECE_PAYLOAD)
            .ok_or_else(|| {
                warn!(
                    payload_len = self.payload_len,
                    incoming = bytes.len(),
                    "write rejected: would exceed maximum piece payload"
                );
                Error::OverflowExceeded
            })?;

        if self.pipeline.is_none() {
            self.pipeline = Some(Pipeline::new());
        }

        let mut input = bytes;
        if !self.carry.is_empty() {
            let needed = QUAD_SIZE - self.carry.len();
            if input.len() < needed {
                self.carry.extend_from_slice(input);
                self.payload_len = new_total;
                debug!(bytes = bytes.len(), payload_len = self.payload_len, "write buffered");
                return Ok(bytes.len());
            }
            self.carry.extend_from_slice(&input[..needed]);
            input = &input[needed..];
            self.absorb_carry();
        }

        while input.len() >= QUAD_SIZE {
            let quad: &[u8; QUAD_SIZE] = input[..QUAD_SIZE].try_into().expect("slice has QUAD_SIZE bytes");
            self.absorb_quad(quad);
            input = &input[QUAD_SIZE..];
        }

        self.carry.extend_from_slice(input);
        self.payload_len = new_total;
        debug!(bytes = bytes.len(), payload_len = self.payload_len, "write accepted");
        Ok(bytes.len())
    }

    /// Closes the stream: zero-pads any partial trailing quad, drains
    /// the pipeline, and returns the commitment together with the
    /// padded piece size. Resets the accumulator on success.
    ///
    /// Fails with [`Error::InsufficientInput`] if fewer than
    /// [`crate::MIN_PIECE_PAYLOAD`] bytes have been written; the
    /// accumulator is left untouched in that case so the caller may
    /// write more and retry.
    pub fn digest(&mut self) -> Result<(Node, PaddedPieceSize), Error> {
        if self.payload_len < MIN_PIECE_PAYLOAD {
            warn!(payload_len = self.payload_len, "digest rejected: fewer than the minimum payload bytes written");
            return Err(Error::InsufficientInput);
        }

        if !self.carry.is_empty() {
            let mut quad = [0u8; QUAD_SIZE];
            quad[..self.carry.len()].copy_from_slice(&self.carry);
            self.absorb_quad(&quad);
            self.carry.clear();
        }

        let pipeline = self
            .pipeline
            .take()
            .expect("payload_len >= MIN_PIECE_PAYLOAD implies at least one write happened");
        let root = pipeline.close();
        let padded = padded_piece_size_for_payload(self.payload_len);

        debug!(payload_len = self.payload_len, padded_piece_size = padded.bytes(), "digest complete");
        self.payload_len = 0;
        Ok((root, padded))
    }

    /// Convenience wrapper matching the fixed-signature hash-append
    /// idiom: appends the commitment to `prefix` and returns it.
    ///
    /// # Panics
    /// Panics if [`Self::digest`] fails (e.g. fewer than 65 bytes were
    /// written) — `sum` cannot propagate an error under that interface.
    pub fn sum(&mut self, prefix: &[u8]) -> Vec<u8> {
        let (commitment, _) = self.digest().expect("sum requires a valid digest");
        let mut out = Vec::with_capacity(prefix.len() + Self::DIGEST_SIZE);
        out.extend_from_slice(prefix);
        out.extend_from_slice(&commitment);
        out
    }

    /// Discards any in-flight state, returning the accumulator to
    /// empty. Safe to call on a never-used accumulator.
    pub fn reset(&mut self) {
        debug!(payload_len = self.payload_len, "reset");
        self.carry.clear();
        self.payload_len = 0;
        self.pipeline = None;
    }

    fn absorb_carry(&mut self) {
        let quad: [u8; QUAD_SIZE] = std::mem::take(&mut self.carry)
            .try_into()
            .expect("carry holds exactly QUAD_SIZE bytes before absorb_carry is called");
        self.absorb_quad(&quad);
    }

    fn absorb_quad(&mut self, quad: &[u8; QUAD_SIZE]) {
        let expanded = expand_quad(quad);
        let pipeline = self.pipeline.as_mut().expect("pipeline created on first write");
        for leaf in leaves(&expanded) {
            pipeline.push_leaf(leaf);
        }
    }
}
