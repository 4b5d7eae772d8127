/// Failure of a single unlock attempt.
///
/// Deliberately carries no cause: a wrong password, a malformed blob and a
/// tampered ciphertext all surface as this same value, so callers get no
/// verification oracle beyond what authenticated decryption already exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("the content could not be unlocked with the supplied password")]
pub struct AuthError;

/// A module-specific [Result][core::result::Result] type with a default error variant.
pub type Result<T, E = AuthError> = core::result::Result<T, E>;
