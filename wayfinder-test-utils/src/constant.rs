//! Test configuration constants for the ESI client setup.
//!
//! These values are placeholders used across all tests; none of them are real credentials.

/// User agent string for test ESI client requests.
pub static TEST_USER_AGENT: &str =
    "wayfinder/1.0 (contact@example.com; +https://github.com/autumn-order/wayfinder)";

/// Access token stored for characters created with a token fixture.
///
/// Mock ESI endpoints only match requests carrying this bearer token.
pub static TEST_ACCESS_TOKEN: &str = "test_access_token";

/// Default character ID used by fixtures.
pub static TEST_CHARACTER_ID: i64 = 2114794365;
