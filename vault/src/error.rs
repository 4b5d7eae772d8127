/// Error type to represent various errors that can happen while sealing or
/// opening a blob.
///
/// Callers gating UI behavior on an open failure should not branch on the
/// variant: a wrong password surfaces as [`VaultError::AesGcmError`] exactly
/// like a tampered ciphertext does.
#[derive(Debug, thiserror::Error)]
pub enum VaultError {
    #[error("The blob is too short to contain a salt, a nonce and a tag")]
    BlobTooShort,
    #[error(transparent)]
    Base64DecodeError(#[from] base64::DecodeError),
    #[error(transparent)]
    PayloadError(#[from] serde_json::Error),
    #[error("aead::Error")]
    AesGcmError,
    #[error(transparent)]
    FromUtf8Error(#[from] std::string::FromUtf8Error),
    #[error("Invalid key size, expected {expected}, got {actual}")]
    InvalidKeySize { expected: usize, actual: usize },
}

/// A specialized Result for the vault functions
pub type VaultResult<T> = Result<T, VaultError>;
