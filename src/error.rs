use std::fmt;

/// Errors returned when an API key cannot be extracted from request headers.
///
/// Both kinds are surfaced to the caller as-is. Middleware is expected to
/// map either one to an authentication failure (typically `401 Unauthorized`).
///
/// # Examples
///
/// ```
/// use apikey_auth::{get_api_key, AuthError, Headers};
///
/// let headers = Headers::new();
/// assert_eq!(get_api_key(&headers).unwrap_err(), AuthError::NoAuthHeader);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    /// The request carried no `Authorization` header at all.
    NoAuthHeader,
    /// An `Authorization` header was present but not of the form `ApiKey <token>`.
    MalformedHeader,
}

impl AuthError {
    /// Returns `true` when no credential was presented.
    ///
    /// Callers that only care whether a client attempted authentication can
    /// use this instead of matching on the variants.
    pub fn is_missing(&self) -> bool {
        matches!(self, AuthError::NoAuthHeader)
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Consumers compare these strings directly; do not reword them.
        match self {
            AuthError::NoAuthHeader => f.write_str("no authorization header included"),
            AuthError::MalformedHeader => f.write_str("malformed authorization header"),
        }
    }
}

impl std::error::Error for AuthError {}
