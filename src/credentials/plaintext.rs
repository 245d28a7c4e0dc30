//! `PLAINTEXT` signature method.

// self
use crate::{
	_prelude::*,
	credentials::{Signature, SignatureMethod, Signer, signer},
	obs::{self, OperationKind, OperationOutcome, OperationSpan},
};

/// `PLAINTEXT` signer: the signature is the signing key itself.
///
/// The base string is still validated so callers get the same argument checks regardless of
/// the negotiated method, but its contents do not influence the result.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlaintextSigner;
impl Signer for PlaintextSigner {
	fn method(&self) -> SignatureMethod {
		SignatureMethod::Plaintext
	}

	fn sign(
		&self,
		base_string: &str,
		client_secret: &str,
		credential_secret: &str,
	) -> Result<Signature> {
		let _guard = OperationSpan::new(OperationKind::Sign, "plaintext").entered();

		obs::record_outcome(OperationKind::Sign, OperationOutcome::Attempt);

		if let Err(e) = signer::ensure_base_string(base_string) {
			obs::record_outcome(OperationKind::Sign, OperationOutcome::Failure);

			return Err(e);
		}

		obs::record_outcome(OperationKind::Sign, OperationOutcome::Success);

		Ok(Signature::new(signer::signing_key(client_secret, credential_secret)))
	}
}
