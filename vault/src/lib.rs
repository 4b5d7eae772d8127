#![doc = include_str!("../README.md")]

pub mod blob;
mod cipher;
mod error;
mod kdf;

pub use self::{
    blob::{EmbeddedPayload, SealedBlob},
    cipher::{open, open_utf8, seal},
    error::{VaultError, VaultResult},
    kdf::{DerivedKey, KdfParams},
};
