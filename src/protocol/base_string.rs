//! Signature base string canonicalization (RFC 5849 section 3.4.1).

// self
use crate::{
	_prelude::*,
	credentials::percent_encode,
	obs::{self, OperationKind, OperationOutcome, OperationSpan},
};

/// Parameter excluded from the base string because it carries the signature itself.
const SIGNATURE_PARAMETER: &str = "oauth_signature";

/// Canonical signature base string, signed verbatim by every
/// [`Signer`](crate::credentials::Signer).
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BaseString(String);
impl BaseString {
	/// Canonicalizes a request into `METHOD&encoded-uri&encoded-parameters`.
	///
	/// Parameters are the URL query pairs plus `params` (typically the `oauth_*` protocol
	/// parameters and any form body), minus `oauth_signature`. Each name and value is
	/// percent-encoded, then the pairs are sorted by name and value.
	pub fn new<I, K, V>(method: &str, url: &Url, params: I) -> Result<Self>
	where
		I: IntoIterator<Item = (K, V)>,
		K: AsRef<str>,
		V: AsRef<str>,
	{
		let _guard = OperationSpan::new(OperationKind::BaseString, "base_string").entered();

		obs::record_outcome(OperationKind::BaseString, OperationOutcome::Attempt);

		let result = canonicalize(method, url, params);
		let outcome =
			if result.is_ok() { OperationOutcome::Success } else { OperationOutcome::Failure };

		obs::record_outcome(OperationKind::BaseString, outcome);

		result.map(Self)
	}

	/// Wraps a base string that was canonicalized elsewhere. The value is not re-normalized.
	pub fn from_canonical(value: impl Into<String>) -> Result<Self> {
		let value = value.into();

		if value.is_empty() {
			return Err(Error::empty("base_string"));
		}

		Ok(Self(value))
	}

	/// Returns the canonical string.
	pub fn as_str(&self) -> &str {
		&self.0
	}
}
impl AsRef<str> for BaseString {
	fn as_ref(&self) -> &str {
		&self.0
	}
}
impl Debug for BaseString {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("BaseString").field(&self.0).finish()
	}
}
impl Display for BaseString {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(&self.0)
	}
}
impl From<BaseString> for String {
	fn from(value: BaseString) -> Self {
		value.0
	}
}

/// Normalizes the base string URI: lower-case scheme and host, non-default port only, no
/// query or fragment.
pub fn base_string_uri(url: &Url) -> Result<String> {
	let host = url
		.host_str()
		.ok_or_else(|| Error::InvalidUrl { url: url.to_string(), reason: "missing host" })?;
	let host = host.to_ascii_lowercase();
	let mut uri = format!("{}://{host}", url.scheme());

	// `Url` already drops ports that match the scheme default.
	if let Some(port) = url.port() {
		uri.push_str(&format!(":{port}"));
	}

	uri.push_str(url.path());

	Ok(uri)
}

fn canonicalize<I, K, V>(method: &str, url: &Url, params: I) -> Result<String>
where
	I: IntoIterator<Item = (K, V)>,
	K: AsRef<str>,
	V: AsRef<str>,
{
	let method = method.trim();

	if method.is_empty() {
		return Err(Error::empty("method"));
	}

	let uri = base_string_uri(url)?;
	let mut pairs = url
		.query_pairs()
		.map(|(k, v)| (percent_encode(&k).into_owned(), percent_encode(&v).into_owned()))
		.chain(params.into_iter().map(|(k, v)| {
			(percent_encode(k.as_ref()).into_owned(), percent_encode(v.as_ref()).into_owned())
		}))
		.filter(|(k, _)| k != SIGNATURE_PARAMETER)
		.collect::<Vec<_>>();

	pairs.sort();

	let normalized =
		pairs.iter().map(|(k, v)| format!("{k}={v}")).collect::<Vec<_>>().join("&");

	Ok(format!(
		"{}&{}&{}",
		percent_encode(&method.to_ascii_uppercase()),
		percent_encode(&uri),
		percent_encode(&normalized)
	))
}
