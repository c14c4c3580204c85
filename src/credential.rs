use std::fmt;

/// An API key taken from an `Authorization: ApiKey <token>` header.
///
/// The token is opaque: no length or charset validation is applied. Because
/// it is a shared secret, `ApiKey` never prints its value. `Debug` and
/// `Display` both produce `[REDACTED]`, so the key can sit inside request
/// structs that get logged without leaking.
///
/// # Examples
///
/// ```
/// use apikey_auth::{get_api_key, Headers};
///
/// let mut headers = Headers::new();
/// headers.set("Authorization", "ApiKey sk-1234567890");
///
/// let key = get_api_key(&headers).unwrap();
/// assert_eq!(format!("{:?}", key), "[REDACTED]");
/// assert_eq!(key.expose_secret(), "sk-1234567890");
/// ```
// Do NOT derive Clone, Debug or PartialEq: each would either duplicate the
// secret carelessly or print/compare it in a non-obvious way.
pub struct ApiKey {
    inner: String,
}

impl ApiKey {
    pub(crate) fn new(token: impl Into<String>) -> Self {
        Self {
            inner: token.into(),
        }
    }

    /// Returns the raw token.
    ///
    /// The long name is deliberate: every call site reads as a place where
    /// secret material leaves its wrapper. Do not log the result.
    pub fn expose_secret(&self) -> &str {
        &self.inner
    }

    /// Consumes the key and returns the raw token.
    pub fn into_inner(self) -> String {
        self.inner
    }

    /// Length of the token in bytes.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` for an empty token.
    ///
    /// The default extractor can yield an empty token for a header such as
    /// `"ApiKey   abc123"`; see [`TokenSplit`](crate::TokenSplit).
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}
