//! HMAC signature methods keyed by `encode(client_secret)&encode(credential_secret)`.

// crates.io
use base64::{Engine as _, engine::general_purpose::STANDARD};
use hmac::{Hmac, Mac, digest::KeyInit};
use sha1::Sha1;
use sha2::Sha256;
// self
use crate::{
	_prelude::*,
	credentials::{Signature, SignatureMethod, Signer, signer},
	obs::{self, OperationKind, OperationOutcome, OperationSpan},
};

type HmacSha1 = Hmac<Sha1>;
type HmacSha256 = Hmac<Sha256>;

/// `HMAC-SHA1` signer: `base64(HMAC-SHA1(key, base_string))`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HmacSha1Signer;
impl Signer for HmacSha1Signer {
	fn method(&self) -> SignatureMethod {
		SignatureMethod::HmacSha1
	}

	fn sign(
		&self,
		base_string: &str,
		client_secret: &str,
		credential_secret: &str,
	) -> Result<Signature> {
		sign_with_mac::<HmacSha1>("hmac_sha1", base_string, client_secret, credential_secret)
	}
}

/// `HMAC-SHA256` signer: `base64(HMAC-SHA256(key, base_string))`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HmacSha256Signer;
impl Signer for HmacSha256Signer {
	fn method(&self) -> SignatureMethod {
		SignatureMethod::HmacSha256
	}

	fn sign(
		&self,
		base_string: &str,
		client_secret: &str,
		credential_secret: &str,
	) -> Result<Signature> {
		sign_with_mac::<HmacSha256>("hmac_sha256", base_string, client_secret, credential_secret)
	}
}

fn sign_with_mac<M>(
	stage: &'static str,
	base_string: &str,
	client_secret: &str,
	credential_secret: &str,
) -> Result<Signature>
where
	M: Mac + KeyInit,
{
	let _guard = OperationSpan::new(OperationKind::Sign, stage).entered();

	obs::record_outcome(OperationKind::Sign, OperationOutcome::Attempt);

	if let Err(e) = signer::ensure_base_string(base_string) {
		obs::record_outcome(OperationKind::Sign, OperationOutcome::Failure);

		return Err(e);
	}

	let key = signer::signing_key(client_secret, credential_secret);
	// HMAC accepts keys of any length; the error arm only guards the trait contract.
	let mut mac = <M as KeyInit>::new_from_slice(key.as_bytes()).map_err(|_| {
		obs::record_outcome(OperationKind::Sign, OperationOutcome::Failure);

		Error::InvalidArgument { argument: "signing_key", reason: "key rejected by HMAC" }
	})?;

	mac.update(base_string.as_bytes());

	let signature = Signature::new(STANDARD.encode(mac.finalize().into_bytes()));

	obs::record_outcome(OperationKind::Sign, OperationOutcome::Success);

	Ok(signature)
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	const BASE: &str = "GET&http%3A%2F%2Fexample.com%2F&a%3D1";

	#[test]
	fn empty_secrets_are_valid_and_key_sensitive() {
		let empty = HmacSha1Signer.sign(BASE, "", "").expect("Empty secrets should sign.");
		let client = HmacSha1Signer.sign(BASE, "a", "").expect("Client secret should sign.");
		let credential =
			HmacSha1Signer.sign(BASE, "", "a").expect("Credential secret should sign.");

		assert_ne!(empty, client);
		assert_ne!(client, credential, "Secrets must not be interchangeable.");
	}

	#[test]
	fn empty_base_string_is_rejected() {
		let err = HmacSha256Signer.sign("", "a", "b").expect_err("Empty base string must fail.");

		assert_eq!(err, Error::empty("base_string"));
	}

	#[test]
	fn digests_have_expected_lengths() {
		let sha1 = HmacSha1Signer.sign(BASE, "k", "t").expect("SHA1 signing should succeed.");
		let sha256 =
			HmacSha256Signer.sign(BASE, "k", "t").expect("SHA256 signing should succeed.");

		assert_eq!(STANDARD.decode(sha1.as_str()).map(|b| b.len()), Ok(20));
		assert_eq!(STANDARD.decode(sha256.as_str()).map(|b| b.len()), Ok(32));
	}
}
