//! Error types for the Schnorr signature scheme.

use thiserror::Error;

/// Errors that can occur while creating keys or signing.
///
/// A signature that fails to verify is not an error: [`crate::VerifyingKey::verify`]
/// reports it as `false`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum SchnorrError {
    /// The private scalar is outside `[1, q - 1]`.
    ///
    /// This also happens when a key created for one parameter set is used
    /// with a smaller subgroup order.
    #[error("private key must lie in [1, q - 1]")]
    InvalidPrivateKey,

    /// The message is not a field element, i.e. not below `p`.
    ///
    /// The hash reduces its inputs modulo `p`, so `m` and `m + p` would
    /// otherwise share signatures.
    #[error("message must be below p")]
    InvalidMessage,

    /// The domain parameters cannot support signing at all.
    #[error("degenerate domain parameters: {0}")]
    InvalidParameters(&'static str),
}
