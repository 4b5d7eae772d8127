/// The locked/unlocked UI pair the gate drives.
///
/// This is the page's side of the contract: a password input, a submit
/// affordance, an error region, and a container that receives the revealed
/// markup. The gate passes the markup through verbatim; sanitization, if
/// desired, is the implementation's responsibility.
///
/// [`reject`][GateSurface::reject] is only ever called for an explicit
/// user submission, never for the silent recall attempt at initialization.
pub trait GateSurface: std::fmt::Debug + Send + Sync {
    /// The content is unlocked: render `markup` in place of the prompt.
    fn reveal(&self, markup: &str);

    /// A user-submitted password was rejected: show the authentication
    /// error, clear the input field and return focus to it.
    fn reject(&self);
}
