use std::fmt;
use std::ops::Deref;

use sha2::{Digest as _, Sha256};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::{VaultError, VaultResult};

/// Parameters for stretching a password into a key.
///
/// Not recorded inside the blob; both sides hardcode or configure the same
/// values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KdfParams {
    /// PBKDF2-HMAC-SHA256 iteration count.
    pub iterations: u32,
}

impl KdfParams {
    pub const DEFAULT: Self = Self { iterations: 100_000 };
}

impl Default for KdfParams {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// The 256-bit key stretched from a password and a blob's salt.
///
/// Lives only for the duration of a single seal or open call.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct DerivedKey([u8; Self::LEN]);

impl DerivedKey {
    pub const LEN: usize = 32;

    /// Derives a key from `password` and `salt` with PBKDF2-HMAC-SHA256.
    ///
    /// Deterministic: the same inputs always produce the same key.
    pub fn derive(password: &str, salt: &[u8], params: KdfParams) -> Self {
        let mut key = [0u8; Self::LEN];
        pbkdf2::pbkdf2_hmac::<Sha256>(password.as_bytes(), salt, params.iterations, &mut key);
        Self(key)
    }
}

impl fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        f.write_str("DerivedKey(hash=")?;
        for x in Sha256::digest(self).as_slice().iter().take(10) {
            fmt::LowerHex::fmt(x, f)?
        }
        f.write_str("...)")
    }
}

impl AsRef<[u8]> for DerivedKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Deref for DerivedKey {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl TryFrom<&[u8]> for DerivedKey {
    type Error = VaultError;

    fn try_from(buf: &[u8]) -> VaultResult<Self> {
        if buf.len() != Self::LEN {
            Err(VaultError::InvalidKeySize {
                expected: Self::LEN,
                actual: buf.len(),
            })
        } else {
            Ok(Self(buf.try_into().unwrap()))
        }
    }
}
