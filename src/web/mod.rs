//! HTTP boundary: header access and API key extraction.
//!
//! Nothing here depends on a web framework. Integrations implement
//! [`HeaderLookup`] for their request or header-map type and call
//! [`get_api_key`] (or a configured [`ApiKeyExtractor`]) from middleware.
//!
//! # Integration Flow
//!
//! ```text
//! HTTP Request
//!   ↓
//! Framework header map implements HeaderLookup
//!   ↓
//! get_api_key(&headers)
//!   ↓
//! Ok(ApiKey)            → look the key up in the credential store
//! Err(NoAuthHeader)     → 401, no credential presented
//! Err(MalformedHeader)  → 401, credential in the wrong shape
//! ```

mod extract;
mod headers;

pub use extract::{get_api_key, ApiKeyExtractor, TokenSplit, API_KEY_SCHEME, AUTHORIZATION};
pub use headers::{HeaderLookup, Headers};
