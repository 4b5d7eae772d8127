use std::fmt;

use base64::Engine as _;
use base64::prelude::BASE64_STANDARD;

use crate::{VaultError, VaultResult};

/// Length in bytes of the random salt prefixing every sealed blob.
pub const SALT_LEN: usize = 16;
/// AES-GCM standard nonce length.
pub const NONCE_LEN: usize = 12;
/// Length of the GCM authentication tag trailing the ciphertext.
pub const TAG_LEN: usize = 16;

/// A sealed blob, exactly as embedded in a page.
///
/// Internal layout:
/// - `[16 bytes of salt..., 12 bytes of nonce..., ...encrypted data + tag]`
///
/// The blob does not self-describe its KDF parameters; the sealing and the
/// opening side must agree on [`crate::KdfParams`] out of band.
#[derive(Clone, PartialEq, Eq)]
pub struct SealedBlob(Vec<u8>);

impl SealedBlob {
    /// Wraps raw blob bytes, rejecting anything too short to hold a salt,
    /// a nonce and the tag of an empty plaintext.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> VaultResult<Self> {
        let bytes = bytes.into();
        if bytes.len() < SALT_LEN + NONCE_LEN + TAG_LEN {
            return Err(VaultError::BlobTooShort);
        }
        Ok(Self(bytes))
    }

    /// Decodes a blob from its transport encoding.
    pub fn from_base64(encoded: impl AsRef<str>) -> VaultResult<Self> {
        Self::from_bytes(BASE64_STANDARD.decode(encoded.as_ref())?)
    }

    /// Encodes the blob for embedding in a page.
    pub fn to_base64(&self) -> String {
        BASE64_STANDARD.encode(&self.0)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub(crate) fn salt(&self) -> &[u8] {
        &self.0[..SALT_LEN]
    }

    pub(crate) fn nonce(&self) -> &[u8] {
        &self.0[SALT_LEN..SALT_LEN + NONCE_LEN]
    }

    pub(crate) fn ciphertext(&self) -> &[u8] {
        &self.0[SALT_LEN + NONCE_LEN..]
    }
}

impl fmt::Debug for SealedBlob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SealedBlob")
            .field(&format_args!("{} bytes", self.0.len()))
            .finish()
    }
}

impl TryFrom<&[u8]> for SealedBlob {
    type Error = VaultError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::from_bytes(bytes)
    }
}

impl AsRef<[u8]> for SealedBlob {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// The inline JSON object a page carries, holding the transport-encoded blob.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct EmbeddedPayload {
    /// Base64 of the sealed blob, as defined by [`SealedBlob`].
    pub data: String,
}

impl EmbeddedPayload {
    pub fn from_json(json: impl AsRef<str>) -> VaultResult<Self> {
        Ok(serde_json::from_str(json.as_ref())?)
    }

    pub fn to_json(&self) -> VaultResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decodes the carried blob.
    pub fn blob(&self) -> VaultResult<SealedBlob> {
        SealedBlob::from_base64(&self.data)
    }
}

impl From<&SealedBlob> for EmbeddedPayload {
    fn from(blob: &SealedBlob) -> Self {
        Self {
            data: blob.to_base64(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_blob_shorter_than_header_and_tag() {
        let bytes = vec![0u8; SALT_LEN + NONCE_LEN + TAG_LEN - 1];
        assert!(matches!(
            SealedBlob::from_bytes(bytes),
            Err(VaultError::BlobTooShort)
        ));
    }

    #[test]
    fn accepts_minimal_blob_and_splits_at_fixed_offsets() {
        let mut bytes = vec![0xAAu8; SALT_LEN];
        bytes.extend_from_slice(&[0xBB; NONCE_LEN]);
        bytes.extend_from_slice(&[0xCC; TAG_LEN]);

        let blob = SealedBlob::from_bytes(bytes).unwrap();
        assert_eq!(blob.salt(), &[0xAA; SALT_LEN]);
        assert_eq!(blob.nonce(), &[0xBB; NONCE_LEN]);
        assert_eq!(blob.ciphertext(), &[0xCC; TAG_LEN]);
    }

    #[test]
    fn base64_transport_round_trips() {
        let bytes = (0..=255u8).cycle().take(64).collect::<Vec<_>>();
        let blob = SealedBlob::from_bytes(bytes).unwrap();
        let decoded = SealedBlob::from_base64(blob.to_base64()).unwrap();
        assert_eq!(blob, decoded);
    }

    #[test]
    fn rejects_invalid_base64() {
        assert!(matches!(
            SealedBlob::from_base64("not//valid=base64!!"),
            Err(VaultError::Base64DecodeError(_))
        ));
    }

    #[test]
    fn payload_json_round_trips() {
        let blob = SealedBlob::from_bytes(vec![7u8; 48]).unwrap();
        let payload = EmbeddedPayload::from(&blob);
        let json = payload.to_json().unwrap();
        let parsed = EmbeddedPayload::from_json(&json).unwrap();
        assert_eq!(parsed, payload);
        assert_eq!(parsed.blob().unwrap(), blob);
    }

    #[test]
    fn payload_rejects_json_without_data_field() {
        assert!(EmbeddedPayload::from_json(r#"{"blob": "abc"}"#).is_err());
    }

    #[test]
    fn debug_does_not_dump_contents() {
        let blob = SealedBlob::from_bytes(vec![0x42u8; 48]).unwrap();
        let repr = format!("{blob:?}");
        assert!(repr.contains("48 bytes"));
        assert!(!repr.contains("66"));
    }
}
