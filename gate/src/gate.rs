use std::fmt;

use content_gate_vault::{EmbeddedPayload, KdfParams, SealedBlob};

use crate::credential::Credential;
use crate::error::{AuthError, Result};
use crate::session::{SessionStore, CREDENTIAL_KEY};
use crate::surface::GateSurface;

/// Whether the protected markup is currently revealed.
#[derive(Clone, PartialEq, Eq)]
pub enum RevealState {
    /// The initial state of every page view, stored credential or not.
    Locked,
    /// Holds the decrypted markup. Terminal: nothing re-locks a page.
    Unlocked(String),
}

impl RevealState {
    /// `true` once the markup has been revealed.
    pub fn is_unlocked(&self) -> bool {
        matches!(self, Self::Unlocked(_))
    }
}

impl fmt::Debug for RevealState {
    // the markup is the very thing the gate protects; keep it out of logs
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Locked => f.write_str("Locked"),
            Self::Unlocked(_) => f.write_str("Unlocked([REDACTED])"),
        }
    }
}

/// Mediates between a locked UI and an unlocked UI, with authenticated
/// decryption as the sole gate.
///
/// Attempts are serialized by `&mut self`; there is never a second attempt
/// in flight, so a stale result can never overwrite a fresh one.
pub struct ContentGate<S: SessionStore> {
    blob: SealedBlob,
    params: KdfParams,
    store: S,
    state: RevealState,
}

impl<S: SessionStore> fmt::Debug for ContentGate<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContentGate")
            .field("blob", &self.blob)
            .field("state", &self.state)
            .finish()
    }
}

impl<S: SessionStore> ContentGate<S> {
    /// A locked gate over `blob` with the default KDF parameters.
    pub fn new(blob: SealedBlob, store: S) -> Self {
        Self::with_params(blob, KdfParams::default(), store)
    }

    /// A locked gate over `blob` with explicit KDF parameters.
    ///
    /// The parameters must match those the blob was sealed with; the blob
    /// itself does not carry them.
    pub fn with_params(blob: SealedBlob, params: KdfParams, store: S) -> Self {
        Self {
            blob,
            params,
            store,
            state: RevealState::Locked,
        }
    }

    /// A locked gate over the inline JSON payload a page embeds.
    ///
    /// A payload that cannot be parsed fails like any other bad input: with
    /// an undifferentiated [`AuthError`].
    pub fn from_payload(json: &str, store: S) -> Result<Self> {
        let blob = EmbeddedPayload::from_json(json)
            .and_then(|payload| payload.blob())
            .map_err(|_| AuthError)?;
        Ok(Self::new(blob, store))
    }

    /// The current reveal state.
    pub fn state(&self) -> &RevealState {
        &self.state
    }

    /// The revealed markup, once unlocked.
    pub fn markup(&self) -> Option<&str> {
        match &self.state {
            RevealState::Unlocked(markup) => Some(markup),
            RevealState::Locked => None,
        }
    }

    /// The one decryption pipeline both call sites share: split the blob,
    /// derive the key from `candidate`, decrypt under the tag, decode as
    /// UTF-8.
    ///
    /// Pure: no state transition, no store access. Every failure collapses
    /// into [`AuthError`].
    #[cfg_attr(not(test), tracing::instrument(skip_all))]
    pub fn attempt_unlock(&self, candidate: &str) -> Result<String> {
        content_gate_vault::open_utf8(&self.blob, candidate, self.params).map_err(|_| AuthError)
    }

    /// Runs the silent recall attempt that precedes any prompt.
    ///
    /// If a credential survives in the session store it is re-validated by
    /// a full re-derive and re-decrypt, never trusted blindly. A stale
    /// credential is deleted and no error reaches the surface: the page
    /// just shows the prompt as if nothing was remembered.
    #[cfg_attr(not(test), tracing::instrument(skip_all))]
    pub async fn initialize(&mut self, surface: &impl GateSurface) -> &RevealState {
        if self.state.is_unlocked() {
            return &self.state;
        }

        let Some(remembered) = self.store.get(CREDENTIAL_KEY).await else {
            return &self.state;
        };
        let remembered = Credential::from(remembered);

        match self.attempt_unlock(remembered.as_str()) {
            Ok(markup) => {
                tracing::debug!("remembered credential unlocked the content");
                surface.reveal(&markup);
                self.state = RevealState::Unlocked(markup);
            }
            Err(AuthError) => {
                tracing::debug!("remembered credential is stale, clearing it");
                self.store.delete(CREDENTIAL_KEY).await;
            }
        }

        &self.state
    }

    /// Handles an explicit submission of `candidate`.
    ///
    /// Success remembers the credential for the rest of the session and
    /// reveals the markup. Failure leaves the gate locked and tells the
    /// surface to reject. Submitting on an already-unlocked gate is a
    /// no-op: the page no longer shows a prompt.
    ///
    /// Remembering the raw password is an inherited trade-off: any script
    /// with session-store access on the origin can read it back. The
    /// alternative (storing a verifier) would break silent re-validation
    /// on reload, so the behavior is kept and flagged here instead.
    #[cfg_attr(not(test), tracing::instrument(skip_all))]
    pub async fn submit(
        &mut self,
        candidate: impl Into<Credential>,
        surface: &impl GateSurface,
    ) -> Result<()> {
        if self.state.is_unlocked() {
            return Ok(());
        }

        let candidate = candidate.into();
        match self.attempt_unlock(candidate.as_str()) {
            Ok(markup) => {
                tracing::debug!("submitted password unlocked the content");
                self.store.put(CREDENTIAL_KEY, candidate.as_str()).await;
                surface.reveal(&markup);
                self.state = RevealState::Unlocked(markup);
                Ok(())
            }
            Err(e) => {
                tracing::debug!("submitted password rejected");
                surface.reject();
                Err(e)
            }
        }
    }
}
