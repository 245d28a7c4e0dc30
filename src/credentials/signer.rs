//! The message signing contract shared by every OAuth 1.0 signature method.

// crates.io
use subtle::ConstantTimeEq;
// self
use crate::{
	_prelude::*,
	credentials::{HmacSha1Signer, HmacSha256Signer, PlaintextSigner, percent_encode},
};

/// Calculates OAuth message signatures over a normalized base string.
///
/// Implementations are stateless: identical inputs always yield identical output, and no
/// secret is retained after the call returns. The base string is consumed verbatim and the
/// returned [`Signature`] is not URL-encoded.
pub trait Signer
where
	Self: Send + Sync,
{
	/// The `oauth_signature_method` implemented by this signer.
	fn method(&self) -> SignatureMethod;

	/// Calculates the signature for `base_string`.
	///
	/// Empty secrets are valid. An empty base string fails with
	/// [`Error::InvalidArgument`] before any cryptographic work happens.
	fn sign(
		&self,
		base_string: &str,
		client_secret: &str,
		credential_secret: &str,
	) -> Result<Signature>;

	/// Recomputes the signature and compares it to `candidate` in constant time.
	fn verify(
		&self,
		base_string: &str,
		client_secret: &str,
		credential_secret: &str,
		candidate: &str,
	) -> Result<bool> {
		let expected = self.sign(base_string, client_secret, credential_secret)?;

		Ok(expected.as_str().as_bytes().ct_eq(candidate.as_bytes()).into())
	}
}

/// Signature methods with a built-in [`Signer`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SignatureMethod {
	/// `HMAC-SHA1` (RFC 5849 section 3.4.2).
	#[serde(rename = "HMAC-SHA1")]
	HmacSha1,
	/// `HMAC-SHA256`, the SHA-2 variant of the HMAC method.
	#[serde(rename = "HMAC-SHA256")]
	HmacSha256,
	/// `PLAINTEXT` (RFC 5849 section 3.4.4).
	#[serde(rename = "PLAINTEXT")]
	Plaintext,
}
impl SignatureMethod {
	/// Returns the protocol label sent as `oauth_signature_method`.
	pub const fn as_str(self) -> &'static str {
		match self {
			SignatureMethod::HmacSha1 => "HMAC-SHA1",
			SignatureMethod::HmacSha256 => "HMAC-SHA256",
			SignatureMethod::Plaintext => "PLAINTEXT",
		}
	}

	/// Returns a boxed signer implementing this method.
	pub fn signer(self) -> Box<dyn Signer> {
		match self {
			SignatureMethod::HmacSha1 => Box::new(HmacSha1Signer),
			SignatureMethod::HmacSha256 => Box::new(HmacSha256Signer),
			SignatureMethod::Plaintext => Box::new(PlaintextSigner),
		}
	}
}
impl Display for SignatureMethod {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
impl FromStr for SignatureMethod {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_uppercase().as_str() {
			"HMAC-SHA1" => Ok(Self::HmacSha1),
			"HMAC-SHA256" => Ok(Self::HmacSha256),
			"PLAINTEXT" => Ok(Self::Plaintext),
			_ => Err(Error::UnsupportedSignatureMethod { method: s.to_owned() }),
		}
	}
}

/// Algorithm-specific signature output (base64 for the HMAC methods).
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Signature(String);
impl Signature {
	/// Wraps an already-encoded signature string.
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Returns the encoded signature.
	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Consumes the wrapper, returning the encoded signature.
	pub fn into_inner(self) -> String {
		self.0
	}
}
impl AsRef<str> for Signature {
	fn as_ref(&self) -> &str {
		&self.0
	}
}
impl Debug for Signature {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("Signature").field(&self.0).finish()
	}
}
impl Display for Signature {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(&self.0)
	}
}
impl From<Signature> for String {
	fn from(value: Signature) -> Self {
		value.0
	}
}

/// Builds the `encode(client_secret) & encode(credential_secret)` signing key.
pub fn signing_key(client_secret: &str, credential_secret: &str) -> String {
	format!("{}&{}", percent_encode(client_secret), percent_encode(credential_secret))
}

pub(crate) fn ensure_base_string(base_string: &str) -> Result<()> {
	if base_string.is_empty() {
		return Err(Error::empty("base_string"));
	}

	Ok(())
}
