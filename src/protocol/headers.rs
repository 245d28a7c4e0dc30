//! Normalized authorization header map produced by the resolver.

// crates.io
use base64::{
	Engine as _, alphabet,
	engine::{
		DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig, general_purpose::STANDARD,
	},
};
// self
use crate::{_prelude::*, credentials::Secret};

/// Standard alphabet decoder that accepts payloads with or without `=` padding.
const LENIENT_STANDARD: GeneralPurpose = GeneralPurpose::new(
	&alphabet::STANDARD,
	GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Key under which the raw (or re-synthesized) `Authorization` value is stored.
pub const AUTHORIZATION: &str = "AUTHORIZATION";
/// Key holding the Basic-auth user.
pub const PHP_AUTH_USER: &str = "PHP_AUTH_USER";
/// Key holding the Basic-auth password.
pub const PHP_AUTH_PW: &str = "PHP_AUTH_PW";

/// Normalized mapping of header name to value.
///
/// Names arrive with the `HTTP_` prefix stripped (`HTTP_X_FOO` -> `X_FOO`), content metadata in
/// lower case (`content_type`), and the derived `AUTHORIZATION` / `PHP_AUTH_*` entries kept
/// mutually consistent.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthorizationHeaders(BTreeMap<String, String>);
impl AuthorizationHeaders {
	/// Returns the header value, if present.
	pub fn get(&self, name: &str) -> Option<&str> {
		self.0.get(name).map(String::as_str)
	}

	/// Returns true if the header is present.
	pub fn contains(&self, name: &str) -> bool {
		self.0.contains_key(name)
	}

	/// The `AUTHORIZATION` entry, if discovered or synthesized.
	pub fn authorization(&self) -> Option<&str> {
		self.get(AUTHORIZATION)
	}

	/// Basic-auth credentials, if `PHP_AUTH_USER` is set.
	pub fn basic_credentials(&self) -> Option<BasicCredentials> {
		let user = self.get(PHP_AUTH_USER)?;

		Some(BasicCredentials::new(user, self.get(PHP_AUTH_PW).unwrap_or_default()))
	}

	/// Iterator over `(name, value)` pairs in name order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
	}

	/// Number of headers.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns true if no headers were collected.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Consumes the wrapper, returning the underlying map.
	pub fn into_inner(self) -> BTreeMap<String, String> {
		self.0
	}

	pub(crate) fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
		self.0.insert(name.into(), value.into());
	}
}
impl Debug for AuthorizationHeaders {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		let mut map = f.debug_map();

		for (name, value) in &self.0 {
			match name.as_str() {
				AUTHORIZATION | PHP_AUTH_PW => map.entry(name, &"<redacted>"),
				_ => map.entry(name, value),
			};
		}

		map.finish()
	}
}
impl<'a> IntoIterator for &'a AuthorizationHeaders {
	type IntoIter = std::collections::btree_map::Iter<'a, String, String>;
	type Item = (&'a String, &'a String);

	fn into_iter(self) -> Self::IntoIter {
		self.0.iter()
	}
}

/// HTTP Basic credentials recovered from, or rendered into, an `Authorization` header.
#[derive(Clone, PartialEq, Eq)]
pub struct BasicCredentials {
	/// User name.
	pub user: String,
	/// Password; empty when the environment supplied none.
	pub password: Secret,
}
impl BasicCredentials {
	/// Creates credentials from a user and password.
	pub fn new(user: impl Into<String>, password: impl Into<Secret>) -> Self {
		Self { user: user.into(), password: password.into() }
	}

	/// Decodes the payload of a `Basic` header value.
	///
	/// The first six characters (`basic` plus separator) are skipped, the rest is base64
	/// decoded (padding optional), and the text must contain exactly one `:`. Any other shape
	/// yields `None`.
	pub fn decode(header: &str) -> Option<Self> {
		let scheme = header.get(..5)?;

		if !scheme.eq_ignore_ascii_case("basic") {
			return None;
		}

		let payload = header.get(6..).unwrap_or_default().trim();
		let decoded = LENIENT_STANDARD.decode(payload).ok()?;
		let decoded = String::from_utf8(decoded).ok()?;
		let mut parts = decoded.split(':');

		match (parts.next(), parts.next(), parts.next()) {
			(Some(user), Some(password), None) => Some(Self::new(user, password)),
			_ => None,
		}
	}

	/// Renders `Basic base64(user:password)`.
	pub fn to_header(&self) -> String {
		format!("Basic {}", STANDARD.encode(format!("{}:{}", self.user, self.password.expose())))
	}
}
impl Debug for BasicCredentials {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("BasicCredentials")
			.field("user", &self.user)
			.field("password", &self.password)
			.finish()
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn basic_header_round_trips() {
		let credentials = BasicCredentials::new("alice", "s3cret");

		assert_eq!(credentials.to_header(), "Basic YWxpY2U6czNjcmV0");
		assert_eq!(BasicCredentials::decode("Basic YWxpY2U6czNjcmV0"), Some(credentials));
		assert!(BasicCredentials::decode("bAsIc YWxpY2U6czNjcmV0").is_some());
	}

	#[test]
	fn unpadded_payload_decodes() {
		// "alice:pw" without the trailing `=`.
		assert_eq!(
			BasicCredentials::decode("Basic YWxpY2U6cHc"),
			Some(BasicCredentials::new("alice", "pw"))
		);
		assert_eq!(
			BasicCredentials::decode("Basic YWxpY2U6cHc="),
			Some(BasicCredentials::new("alice", "pw"))
		);
	}

	#[test]
	fn malformed_payloads_decode_to_none() {
		// "alice" (no colon) and "a:b:c" (two colons).
		assert_eq!(BasicCredentials::decode("Basic YWxpY2U="), None);
		assert_eq!(BasicCredentials::decode("Basic YTpiOmM="), None);
		assert_eq!(BasicCredentials::decode("Basic !!!"), None);
		assert_eq!(BasicCredentials::decode("Bearer YWxpY2U6czNjcmV0"), None);
		assert_eq!(BasicCredentials::decode("Basic"), None);
	}

	#[test]
	fn debug_redacts_secrets() {
		let mut headers = AuthorizationHeaders::default();

		headers.insert(AUTHORIZATION, "Basic YWxpY2U6czNjcmV0");
		headers.insert(PHP_AUTH_USER, "alice");
		headers.insert(PHP_AUTH_PW, "s3cret");

		let rendered = format!("{headers:?}");

		assert!(!rendered.contains("s3cret"));
		assert!(!rendered.contains("YWxpY2U6czNjcmV0"));
		assert!(rendered.contains("alice"));
		assert_eq!(
			headers.basic_credentials().map(|c| c.password.expose().to_owned()),
			Some("s3cret".to_owned())
		);
	}
}
