//! Error types for domain-parameter generation and certification.

use thiserror::Error;

/// Reason a parameter set failed certification.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum CertificationFailure {
    #[error("p is not prime")]
    PNotPrime,
    #[error("q is not prime")]
    QNotPrime,
    #[error("q does not divide p - 1")]
    QDoesNotDividePMinusOne,
    /// `g` lies outside the open interval `(1, p)`.
    #[error("g is not in the range 1 < g < p")]
    GeneratorOutOfRange,
    #[error("g^q mod p is not 1")]
    GeneratorOrderMismatch,
    /// The parameters could not be re-derived from their DSA-style seed.
    #[error("p and q do not match the ones derived from the seed")]
    ProvenanceMismatch,
}

/// Errors raised while generating or certifying domain parameters.
///
/// Precondition violations are reported immediately and never retried.
/// `Certification` means the parameter set is unusable and must be discarded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GroupError {
    #[error("bit length of p ({len_p}) must exceed bit length of q ({len_q}), and q needs at least 2 bits")]
    InvalidBitLengths { len_p: u64, len_q: u64 },

    #[error("there are no primes of {0} bits")]
    PrimeTooSmall(u64),

    /// An input that must be prime is not.
    #[error("{0} is not prime")]
    NotPrime(&'static str),

    #[error("q does not divide p - 1")]
    OrderDoesNotDivide,

    #[error("unsupported DSA-style sizes: L = {len_p}, N = {len_q} (need 2 <= N <= 256 and L > N)")]
    UnsupportedDsaSizes { len_p: u64, len_q: u64 },

    #[error("certification failed: {0}")]
    Certification(#[from] CertificationFailure),

    /// A bounded search ran out of attempts before finding a candidate.
    #[error("no {target} found after {attempts} attempts")]
    AttemptsExhausted { target: &'static str, attempts: u64 },

    #[error("unknown parameter set `{0}`")]
    UnknownPreset(String),

    #[error("invalid integer literal `{0}`")]
    InvalidLiteral(String),
}
