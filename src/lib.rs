//! API key authentication for HTTP services.
//!
//! This crate extracts a shared-secret credential from a request's
//! `Authorization` header of the form `ApiKey <token>`, and classifies
//! everything else as either a missing or a malformed header.
//!
//! # Core Types
//!
//! - [`HeaderLookup`]: Case-insensitive, read-only access to request headers
//! - [`Headers`]: Owned header collection implementing [`HeaderLookup`]
//! - [`ApiKeyExtractor`]: Configurable extractor; [`get_api_key`] uses the defaults
//! - [`ApiKey`]: The extracted token, redacted in logs and output
//! - [`AuthError`]: `NoAuthHeader` or `MalformedHeader`
//!
//! Verifying the key against a credential store is left to the caller.
//!
//! # Examples
//!
//! ```
//! use apikey_auth::{get_api_key, AuthError, Headers};
//!
//! let mut headers = Headers::new();
//! headers.set("Authorization", "ApiKey abc123");
//!
//! match get_api_key(&headers) {
//!     Ok(key) => assert_eq!(key.expose_secret(), "abc123"),
//!     Err(AuthError::NoAuthHeader) => unreachable!("header is set"),
//!     Err(AuthError::MalformedHeader) => unreachable!("header is well-formed"),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod credential;
mod error;
pub mod web;

#[cfg(test)]
mod test_utils;

pub use credential::ApiKey;
pub use error::AuthError;
pub use web::{
    get_api_key, ApiKeyExtractor, HeaderLookup, Headers, TokenSplit, API_KEY_SCHEME,
    AUTHORIZATION,
};
