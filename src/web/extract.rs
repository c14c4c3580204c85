//! API key extraction from the `Authorization` header.
//!
//! The accepted shape is `Authorization: ApiKey <token>`. The scheme is
//! matched case-sensitively and nothing about the token itself is validated;
//! checking the key against a store is the caller's job.

use crate::credential::ApiKey;
use crate::error::AuthError;

use super::HeaderLookup;

/// Name of the header carrying the credential.
pub const AUTHORIZATION: &str = "Authorization";

/// The only accepted authentication scheme.
pub const API_KEY_SCHEME: &str = "ApiKey";

/// How the token is cut out of the header value.
///
/// # Examples
///
/// ```
/// use apikey_auth::{ApiKeyExtractor, Headers, TokenSplit};
///
/// let mut headers = Headers::new();
/// headers.set("Authorization", "ApiKey   abc123");
///
/// // Default: one segment per whitespace character, segment 1 is the token
/// let key = ApiKeyExtractor::new().extract(&headers).unwrap();
/// assert_eq!(key.expose_secret(), "");
///
/// // Opt-in: everything after the scheme, trimmed
/// let key = ApiKeyExtractor::new()
///     .with_split(TokenSplit::TrimmedRemainder)
///     .extract(&headers)
///     .unwrap();
/// assert_eq!(key.expose_secret(), "abc123");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TokenSplit {
    /// Split the value at every whitespace character, without collapsing
    /// runs, and return segment 1 verbatim.
    ///
    /// Repeated whitespace between scheme and token yields an empty token
    /// and no error. Deployed clients may depend on this, so it stays the
    /// default.
    #[default]
    Literal,
    /// Split once at the first whitespace character and return the trimmed
    /// remainder. An empty remainder is rejected as malformed.
    TrimmedRemainder,
}

/// Extracts an [`ApiKey`] from request headers.
///
/// Stateless and `Copy`; build one at startup and share it freely across
/// request handlers.
///
/// # Examples
///
/// ```
/// use apikey_auth::{ApiKeyExtractor, AuthError, Headers};
///
/// let extractor = ApiKeyExtractor::new();
///
/// let mut headers = Headers::new();
/// headers.set("authorization", "ApiKey abc123");
/// assert_eq!(extractor.extract(&headers).unwrap().expose_secret(), "abc123");
///
/// headers.set("Authorization", "Bearer abc123");
/// let err = extractor.extract(&headers).unwrap_err();
/// assert_eq!(err, AuthError::MalformedHeader);
/// assert_eq!(err.to_string(), "malformed authorization header");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiKeyExtractor {
    split: TokenSplit,
}

impl ApiKeyExtractor {
    /// Creates an extractor with the default [`TokenSplit::Literal`] policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the token segmentation policy.
    pub fn with_split(mut self, split: TokenSplit) -> Self {
        self.split = split;
        self
    }

    /// Returns the configured segmentation policy.
    pub fn split(&self) -> TokenSplit {
        self.split
    }

    /// Extracts the API key from `headers`.
    ///
    /// # Errors
    ///
    /// - [`AuthError::NoAuthHeader`] if there is no `Authorization` header.
    /// - [`AuthError::MalformedHeader`] if the header is present but its first
    ///   segment is not exactly `ApiKey` or no token follows. An empty header
    ///   value counts as present, and is therefore malformed.
    pub fn extract<H: HeaderLookup + ?Sized>(&self, headers: &H) -> Result<ApiKey, AuthError> {
        let Some(value) = headers.header(AUTHORIZATION) else {
            tracing::debug!(reason = "missing", "no authorization header");
            return Err(AuthError::NoAuthHeader);
        };

        let token = match self.split {
            TokenSplit::Literal => literal_token(value),
            TokenSplit::TrimmedRemainder => trimmed_token(value),
        };

        match token {
            Ok(token) => {
                tracing::debug!(token_len = token.len(), "api key extracted");
                Ok(ApiKey::new(token))
            }
            Err(reason) => {
                tracing::debug!(reason, "malformed authorization header");
                Err(AuthError::MalformedHeader)
            }
        }
    }
}

/// Extracts the API key from `headers` using the default extractor.
///
/// Shorthand for `ApiKeyExtractor::new().extract(headers)`.
///
/// # Examples
///
/// ```
/// use apikey_auth::{get_api_key, AuthError, Headers};
///
/// let mut headers = Headers::new();
/// assert_eq!(get_api_key(&headers).unwrap_err(), AuthError::NoAuthHeader);
///
/// headers.set("Authorization", "ApiKey abc123");
/// assert_eq!(get_api_key(&headers).unwrap().expose_secret(), "abc123");
/// ```
pub fn get_api_key<H: HeaderLookup + ?Sized>(headers: &H) -> Result<ApiKey, AuthError> {
    ApiKeyExtractor::new().extract(headers)
}

// Err carries the log reason.
fn literal_token(value: &str) -> Result<&str, &'static str> {
    let mut segments = value.split(char::is_whitespace);

    // split() yields at least one segment, "" for an empty value
    if segments.next() != Some(API_KEY_SCHEME) {
        return Err("scheme");
    }
    segments.next().ok_or("no_token")
}

fn trimmed_token(value: &str) -> Result<&str, &'static str> {
    let (scheme, rest) = value
        .split_once(char::is_whitespace)
        .unwrap_or((value, ""));

    if scheme != API_KEY_SCHEME {
        return Err("scheme");
    }
    match rest.trim() {
        "" => Err("no_token"),
        token => Ok(token),
    }
}
