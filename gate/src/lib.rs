#![doc = include_str!("../README.md")]
#![deny(missing_docs)]

/// Password wrapper with drop hygiene
pub mod credential;
/// The undifferentiated attempt error
pub mod error;
/// The gate itself and its state machine
pub mod gate;
/// Session-scoped credential storage
pub mod session;
/// The UI collaborator seam
pub mod surface;

pub use self::{
    credential::Credential,
    error::{AuthError, Result},
    gate::{ContentGate, RevealState},
    session::{InMemorySessionStore, SessionStore, CREDENTIAL_KEY},
    surface::GateSurface,
};

/// Common imports that should be useful for most uses of the crate
pub mod prelude {
    pub use content_gate_vault::{seal, EmbeddedPayload, KdfParams, SealedBlob};

    pub use crate::{
        AuthError, ContentGate, Credential, GateSurface, InMemorySessionStore, Result,
        RevealState, SessionStore, CREDENTIAL_KEY,
    };
}
