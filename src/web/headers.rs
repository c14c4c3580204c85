//! Header collections the extractor can read from.

use std::collections::HashMap;

/// Read-only, case-insensitive access to request headers by name.
///
/// This is the seam between an HTTP framework and the extractor. Framework
/// integrations implement it for their own header map type; the crate ships
/// implementations for [`Headers`] and `HashMap<String, String>`.
///
/// Implementors MUST match `name` case-insensitively and return at most one
/// value per name.
///
/// # Examples
///
/// ```
/// use apikey_auth::{get_api_key, HeaderLookup};
///
/// // A framework request type holding only the header we care about
/// struct MyFrameworkRequest {
///     authorization: Option<String>,
/// }
///
/// impl HeaderLookup for MyFrameworkRequest {
///     fn header(&self, name: &str) -> Option<&str> {
///         if name.eq_ignore_ascii_case("authorization") {
///             self.authorization.as_deref()
///         } else {
///             None
///         }
///     }
/// }
///
/// let req = MyFrameworkRequest {
///     authorization: Some("ApiKey abc123".to_string()),
/// };
/// assert_eq!(get_api_key(&req).unwrap().expose_secret(), "abc123");
/// ```
pub trait HeaderLookup {
    /// Returns the value of the header `name`, if present.
    fn header(&self, name: &str) -> Option<&str>;
}

impl<T: HeaderLookup + ?Sized> HeaderLookup for &T {
    fn header(&self, name: &str) -> Option<&str> {
        (**self).header(name)
    }
}

impl HeaderLookup for HashMap<String, String> {
    fn header(&self, name: &str) -> Option<&str> {
        if let Some(value) = self.get(name) {
            return Some(value.as_str());
        }
        self.iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// An owned header collection with case-insensitive names.
///
/// Each name holds a single value; [`set`](Self::set) replaces whatever was
/// stored under the same name in any casing. Useful in tests and for
/// integrations that copy headers out of a framework request.
///
/// # Examples
///
/// ```
/// use apikey_auth::Headers;
///
/// let mut headers = Headers::new();
/// headers.set("Authorization", "ApiKey abc123");
///
/// assert_eq!(headers.get("authorization"), Some("ApiKey abc123"));
/// assert_eq!(headers.get("AUTHORIZATION"), Some("ApiKey abc123"));
/// assert_eq!(headers.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Headers {
    // Keyed by lowercased name
    entries: HashMap<String, String>,
}

impl Headers {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `name` to `value`, replacing any existing value.
    ///
    /// An empty `value` is stored as-is: the header is then present but empty,
    /// which is not the same as absent.
    pub fn set(&mut self, name: impl AsRef<str>, value: impl Into<String>) {
        self.entries
            .insert(name.as_ref().to_ascii_lowercase(), value.into());
    }

    /// Returns the value of `name`, if present.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// Removes `name` and returns its value, if present.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.entries.remove(&name.to_ascii_lowercase())
    }

    /// Returns `true` if `name` is present, even with an empty value.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(&name.to_ascii_lowercase())
    }

    /// Number of distinct header names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no headers are set.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl HeaderLookup for Headers {
    fn header(&self, name: &str) -> Option<&str> {
        self.get(name)
    }
}

impl<K, V> FromIterator<(K, V)> for Headers
where
    K: AsRef<str>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut headers = Headers::new();
        for (name, value) in iter {
            headers.set(name, value);
        }
        headers
    }
}
