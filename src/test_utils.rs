//! Shared proptest strategies for unit tests.

use proptest::prelude::*;

/// A token with no whitespace, as a well-behaved client would send.
pub(crate) fn arb_token() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z0-9._~+/=-]{1,64}").unwrap()
}

/// A scheme word that is never exactly `ApiKey`.
pub(crate) fn arb_other_scheme() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z]{1,12}")
        .unwrap()
        .prop_filter("must differ from ApiKey", |s| s != "ApiKey")
}
