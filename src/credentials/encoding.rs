//! Percent-encoding as required for OAuth 1.0 keys and base strings.

// std
use std::borrow::Cow;
// crates.io
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Everything except the RFC 3986 unreserved set (`ALPHA DIGIT - . _ ~`).
const OAUTH_ENCODE_SET: &AsciiSet =
	&NON_ALPHANUMERIC.remove(b'-').remove(b'.').remove(b'_').remove(b'~');

/// Percent-encodes `value` per RFC 5849 section 3.6.
///
/// UTF-8 bytes outside the unreserved set become upper-case `%XX` triplets; unreserved
/// characters pass through untouched, so already-safe input is returned borrowed.
pub fn percent_encode(value: &str) -> Cow<'_, str> {
	utf8_percent_encode(value, OAUTH_ENCODE_SET).into()
}
