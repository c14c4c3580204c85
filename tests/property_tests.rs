//! Property tests for API key extraction through the public API.

use std::collections::HashMap;

use apikey_auth::{get_api_key, ApiKeyExtractor, AuthError, Headers, TokenSplit};
use proptest::prelude::*;

// Strategy: tokens as clients send them (no whitespace)
fn arb_token() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z0-9._~+/=-]{1,48}").unwrap()
}

// Strategy: the header name in random ASCII casing
fn arb_authorization_casing() -> impl Strategy<Value = String> {
    prop::collection::vec(any::<bool>(), 13).prop_map(|upper| {
        "authorization"
            .chars()
            .zip(upper)
            .map(|(c, up)| if up { c.to_ascii_uppercase() } else { c })
            .collect()
    })
}

// Strategy: casings of "apikey" other than the exact "ApiKey"
fn arb_miscased_scheme() -> impl Strategy<Value = String> {
    prop::collection::vec(any::<bool>(), 6)
        .prop_map(|upper| {
            "apikey"
                .chars()
                .zip(upper)
                .map(|(c, up)| if up { c.to_ascii_uppercase() } else { c })
                .collect::<String>()
        })
        .prop_filter("exact scheme is valid", |s| s != "ApiKey")
}

proptest! {
    /// Property: header name lookup is case-insensitive for both collections
    #[test]
    fn proptest_header_name_case_insensitive(name in arb_authorization_casing(), token in arb_token()) {
        let value = format!("ApiKey {}", token);

        let mut headers = Headers::new();
        headers.set(&name, value.clone());
        let key = get_api_key(&headers).expect("header set under some casing");
        prop_assert_eq!(key.expose_secret(), token.as_str());

        let mut map = HashMap::new();
        map.insert(name, value);
        let key = get_api_key(&map).expect("header set under some casing");
        prop_assert_eq!(key.expose_secret(), token.as_str());
    }

    /// Property: the scheme comparison is case-sensitive
    #[test]
    fn proptest_scheme_case_sensitive(scheme in arb_miscased_scheme(), token in arb_token()) {
        let mut headers = Headers::new();
        headers.set("Authorization", format!("{} {}", scheme, token));

        let err = get_api_key(&headers).unwrap_err();
        prop_assert_eq!(err, AuthError::MalformedHeader);
        prop_assert_eq!(err.to_string(), "malformed authorization header");
    }

    /// Property: any leading whitespace makes the header malformed
    #[test]
    fn proptest_leading_whitespace_rejected(
        lead in prop::string::string_regex("[ \\t]{1,4}").unwrap(),
        token in arb_token(),
        trimmed in any::<bool>()
    ) {
        let mut headers = Headers::new();
        headers.set("Authorization", format!("{}ApiKey {}", lead, token));

        let split = if trimmed { TokenSplit::TrimmedRemainder } else { TokenSplit::Literal };
        let err = ApiKeyExtractor::new().with_split(split).extract(&headers).unwrap_err();
        prop_assert_eq!(err, AuthError::MalformedHeader);
    }

    /// Property: without an Authorization header, extraction always reports a
    /// missing header no matter what else is present
    #[test]
    fn proptest_missing_header_regardless_of_others(
        others in prop::collection::hash_map(
            prop::string::string_regex("X-[A-Za-z]{1,10}").unwrap(),
            prop::string::string_regex("[ -~]{0,20}").unwrap(),
            0..5
        )
    ) {
        let headers: Headers = others.into_iter().collect();

        let err = get_api_key(&headers).unwrap_err();
        prop_assert_eq!(err, AuthError::NoAuthHeader);
        prop_assert!(err.is_missing());
    }

    /// Property: extraction is deterministic on the same collection, and the
    /// token never shows up in formatted output
    #[test]
    fn proptest_idempotent_and_redacted(value in prop::string::string_regex("[ -~]{0,40}").unwrap()) {
        let mut headers = Headers::new();
        headers.set("Authorization", value);

        let first = get_api_key(&headers);
        let second = get_api_key(&headers);

        match (&first, &second) {
            (Ok(a), Ok(b)) => {
                prop_assert_eq!(a.expose_secret(), b.expose_secret());
                prop_assert_eq!(format!("{:?}", a), "[REDACTED]");
                prop_assert_eq!(format!("{}", a), "[REDACTED]");
            }
            (Err(a), Err(b)) => prop_assert_eq!(a, b),
            _ => {
                return Err(TestCaseError::fail("repeated extraction disagreed"));
            }
        }
    }
}
