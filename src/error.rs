use thiserror::Error;

/// Error conditions surfaced by the streaming accumulator and by
/// [`crate::extend_commp`].
#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum Error {
    /// A `write` would push accumulated payload past
    /// [`crate::MAX_PIECE_PAYLOAD`]. The write is rejected atomically;
    /// no prefix of it is absorbed and accumulator state is unchanged.
    #[error("write would exceed the maximum piece payload (68182605824 bytes)")]
    OverflowExceeded,

    /// `digest` was called with fewer than [`crate::MIN_PIECE_PAYLOAD`]
    /// bytes written. The accumulator is left untouched; the caller may
    /// write more bytes and call `digest` again.
    #[error("fewer than 65 bytes were written before digest")]
    InsufficientInput,

    /// [`crate::extend_commp`] was given a commitment that is not
    /// exactly 32 bytes long.
    #[error("commitment must be exactly 32 bytes, got {0}")]
    InvalidCommpLength(usize),

    /// One of the sizes passed to [`crate::extend_commp`] has more than
    /// one bit set.
    #[error("size {0} is not a power of two")]
    NotPowerOfTwo(u64),

    /// The target size passed to [`crate::extend_commp`] is smaller
    /// than the source size.
    #[error("target size {target} is smaller than source size {source}")]
    TargetTooSmall { source: u64, target: u64 },

    /// The source size passed to [`crate::extend_commp`] is below the
    /// minimum padded piece size.
    #[error("source size {0} is below the minimum padded piece size of 128")]
    SourceBelowMinimum(u64),

    /// The target size passed to [`crate::extend_commp`] exceeds the
    /// maximum padded piece size this crate supports.
    #[error("target size {0} exceeds the maximum padded piece size of 68719476736")]
    TargetAboveMaximum(u64),
}
