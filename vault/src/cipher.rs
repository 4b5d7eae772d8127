use aes_gcm::aead::Aead as _;
use aes_gcm::{Aes256Gcm, KeyInit as _, Nonce};

use crate::blob::{NONCE_LEN, SALT_LEN};
use crate::{DerivedKey, KdfParams, SealedBlob, VaultError, VaultResult};

/// Seals `plaintext` under `password`.
///
/// A fresh random salt and nonce are drawn for every call, so sealing the
/// same plaintext twice yields two different blobs that both open with the
/// same password.
pub fn seal(plaintext: &[u8], password: &str, params: KdfParams) -> VaultResult<SealedBlob> {
    let salt: [u8; SALT_LEN] = rand::random();
    let nonce_bytes: [u8; NONCE_LEN] = rand::random();

    let key = DerivedKey::derive(password, &salt, params);
    let cipher = Aes256Gcm::new_from_slice(key.as_ref()).map_err(|_| VaultError::AesGcmError)?;

    let nonce = Nonce::from_slice(&nonce_bytes);
    let mut encrypted = cipher
        .encrypt(nonce, plaintext)
        .map_err(|_| VaultError::AesGcmError)?;

    let mut message = Vec::with_capacity(SALT_LEN + NONCE_LEN + encrypted.len());
    message.extend_from_slice(&salt);
    message.extend_from_slice(&nonce_bytes);
    message.append(&mut encrypted);

    SealedBlob::from_bytes(message)
}

/// Opens a sealed blob with `password`, verifying the authentication tag.
///
/// A wrong password and a tampered blob fail identically.
pub fn open(blob: &SealedBlob, password: &str, params: KdfParams) -> VaultResult<Vec<u8>> {
    let key = DerivedKey::derive(password, blob.salt(), params);
    let cipher = Aes256Gcm::new_from_slice(key.as_ref()).map_err(|_| VaultError::AesGcmError)?;

    let nonce = Nonce::from_slice(blob.nonce());
    cipher
        .decrypt(nonce, blob.ciphertext())
        .map_err(|_| VaultError::AesGcmError)
}

/// [`open`], then decodes the plaintext as UTF-8 markup.
pub fn open_utf8(blob: &SealedBlob, password: &str, params: KdfParams) -> VaultResult<String> {
    Ok(String::from_utf8(open(blob, password, params)?)?)
}
