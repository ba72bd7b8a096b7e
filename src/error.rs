use thiserror::Error;

/// Decoder-level error type for TIC streams.
///
/// The two variants have very different blast radii: `UnsupportedLabel` is a
/// per-line failure that the frame assembler recovers from by skipping the
/// line, while `UnknownMode` is a configuration-time failure that must reach
/// the caller before any line processing starts, since no decoding can
/// proceed without a dialect.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TicError {
    /// Label is not part of the active dialect's field registry.
    #[error("Unsupported label [{0}]")]
    UnsupportedLabel(String),
    /// Requested mode name does not match any known TIC dialect.
    #[error("Unknown TIC mode [{0}]")]
    UnknownMode(String),
}
