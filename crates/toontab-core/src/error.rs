//! Error types for TOON encoding and decoding operations.

use thiserror::Error;

/// Errors raised by the encode and decode entry points.
///
/// Every decode variant is raised at the point of detection — there is no
/// partial recovery — and carries the context needed for direct display: a
/// 1-based input line number, the block name, or the expected vs. actual
/// counts. Malformed input is a deterministic condition; none of these are
/// transient.
#[derive(Error, Debug)]
pub enum ToonError {
    /// The input string was not valid JSON (JSON entry points only).
    #[error("invalid JSON input: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// Decode was called with blank or whitespace-only text.
    #[error("empty input: nothing to decode")]
    EmptyInput,

    /// A line containing `,` ended without `;`.
    #[error("malformed keys line at line {line}: a line containing ',' must end with ';'")]
    MalformedHeader { line: usize },

    /// An object or table row supplied a different number of values than its
    /// keys line declared.
    #[error("key/value count mismatch at line {line}: {keys} keys but {values} values")]
    KeyValueCountMismatch {
        line: usize,
        keys: usize,
        values: usize,
    },

    /// Input ended before an array block reached its closing `}`.
    #[error("unclosed array block '{block}'")]
    UnclosedBlock { block: String },

    /// The number of parsed elements differs from the declared `[N]`.
    #[error("array block '{block}' declared {declared} elements but contained {actual}")]
    ArrayCountMismatch {
        block: String,
        declared: usize,
        actual: usize,
    },

    /// Input ended while an object still had keys to fill.
    #[error("unexpected end of input: missing values for object keys ({filled} of {expected} filled)")]
    UnexpectedEndOfInput { expected: usize, filled: usize },

    /// An array block header appeared where a table row was expected.
    #[error("nested array block '{block}' at line {line} is not supported inside table rows")]
    NestedBlockInRow { block: String, line: usize },
}

/// Convenience alias used throughout toontab-core.
pub type Result<T> = std::result::Result<T, ToonError>;
