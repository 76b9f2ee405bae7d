//!
//! Error types
//!

/// Result type used by this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors produced while building keys or signing digests.
///
/// A signature that fails to verify is not an error: verification returns
/// `Ok(false)` for it.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Key material is malformed or internally inconsistent.
    #[error("invalid key material: {0}")]
    Validation(&'static str),

    /// The requested key size is not one of the supported parameter sizes.
    #[error("unsupported key size: {0} bits")]
    UnsupportedKeySize(u32),

    /// The random number generator failed to produce output.
    #[error("random number generator failure")]
    Entropy,

    /// A random integer was requested from an empty range.
    #[error("empty range for random integer")]
    EmptyRange,

    /// The operation needs the private component, but the key only holds the public one.
    #[error("operation requires a private key")]
    MissingPrivateKey,

    /// The digest length doesn't match the byte length of the subgroup order q.
    #[error("invalid digest length: expected {expected} bytes, got {got}")]
    DigestLength {
        /// Expected digest length in bytes.
        expected: usize,
        /// Actual digest length in bytes.
        got: usize,
    },
}

/// Broad classification of an [`Error`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ErrorKind {
    /// Malformed or inconsistent key material. Never worth retrying.
    Validation,

    /// Key generation failed (unsupported size or entropy failure).
    Generation,

    /// The key lacks a component the operation requires.
    InvalidState,

    /// The caller passed an ill-formed input (wrong digest length, empty range).
    Input,
}

impl Error {
    /// Classify this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::UnsupportedKeySize(_) | Self::Entropy => ErrorKind::Generation,
            Self::MissingPrivateKey => ErrorKind::InvalidState,
            Self::EmptyRange | Self::DigestLength { .. } => ErrorKind::Input,
        }
    }
}

impl From<rand_core::Error> for Error {
    fn from(_: rand_core::Error) -> Self {
        Self::Entropy
    }
}

impl From<Error> for signature::Error {
    fn from(_: Error) -> Self {
        signature::Error::new()
    }
}
