use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

/// A candidate or remembered password.
///
/// The wrapper keeps the string out of `Debug` output and zeroizes the
/// buffer on drop. The only place a credential is ever written is the
/// session-scoped store, and only after it has successfully unlocked the
/// content.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Credential(String);

impl Credential {
    /// Wraps a password string.
    pub fn new(password: impl Into<String>) -> Self {
        Self(password.into())
    }

    /// The password itself.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential([REDACTED])")
    }
}

impl From<&str> for Credential {
    fn from(password: &str) -> Self {
        Self::new(password)
    }
}

impl From<String> for Credential {
    fn from(password: String) -> Self {
        Self(password)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_never_prints_the_password() {
        let credential = Credential::new("hunter2");
        assert_eq!(format!("{credential:?}"), "Credential([REDACTED])");
    }
}
