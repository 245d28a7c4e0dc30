//! Owned signing inputs for callers whose arguments may be absent.

// self
use crate::{
	_prelude::*,
	credentials::{Secret, Signature, Signer},
};

/// Fully specified signing inputs: a base string plus both secrets.
///
/// Secrets are held in [`Secret`] so the value can be logged or debugged safely.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SigningInput {
	/// Canonical base string, consumed verbatim.
	pub base_string: String,
	/// Consumer (client) secret; may be empty.
	pub client_secret: Secret,
	/// Token (credential) secret; may be empty.
	pub credential_secret: Secret,
}
impl SigningInput {
	/// Creates a builder with every field unset.
	pub fn builder() -> SigningInputBuilder {
		SigningInputBuilder::default()
	}

	/// Signs the inputs with the provided signer.
	pub fn sign_with(&self, signer: &dyn Signer) -> Result<Signature> {
		signer.sign(&self.base_string, self.client_secret.expose(), self.credential_secret.expose())
	}

	/// Verifies `candidate` against the inputs with the provided signer.
	pub fn verify_with(&self, signer: &dyn Signer, candidate: &str) -> Result<bool> {
		signer.verify(
			&self.base_string,
			self.client_secret.expose(),
			self.credential_secret.expose(),
			candidate,
		)
	}
}

/// Builder for [`SigningInput`] values.
///
/// Absent fields are never coerced to empty strings; [`build`](Self::build) rejects them.
#[derive(Clone, Debug, Default)]
pub struct SigningInputBuilder {
	/// Canonical base string.
	pub base_string: Option<String>,
	/// Consumer (client) secret.
	pub client_secret: Option<Secret>,
	/// Token (credential) secret.
	pub credential_secret: Option<Secret>,
}
impl SigningInputBuilder {
	/// Sets the base string.
	pub fn base_string(mut self, value: impl Into<String>) -> Self {
		self.base_string = Some(value.into());

		self
	}

	/// Sets the client secret.
	pub fn client_secret(mut self, value: impl Into<Secret>) -> Self {
		self.client_secret = Some(value.into());

		self
	}

	/// Sets the credential secret.
	pub fn credential_secret(mut self, value: impl Into<Secret>) -> Self {
		self.credential_secret = Some(value.into());

		self
	}

	/// Consumes the builder, failing with [`Error::InvalidArgument`] for any absent field or an
	/// empty base string.
	pub fn build(self) -> Result<SigningInput> {
		let base_string = self.base_string.ok_or(Error::missing("base_string"))?;

		if base_string.is_empty() {
			return Err(Error::empty("base_string"));
		}

		let client_secret = self.client_secret.ok_or(Error::missing("client_secret"))?;
		let credential_secret =
			self.credential_secret.ok_or(Error::missing("credential_secret"))?;

		Ok(SigningInput { base_string, client_secret, credential_secret })
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::credentials::HmacSha1Signer;

	#[test]
	fn absent_fields_are_rejected_in_order() {
		assert_eq!(SigningInput::builder().build(), Err(Error::missing("base_string")));
		assert_eq!(
			SigningInput::builder().base_string("GET&a&b").build(),
			Err(Error::missing("client_secret"))
		);
		assert_eq!(
			SigningInput::builder().base_string("GET&a&b").client_secret("").build(),
			Err(Error::missing("credential_secret"))
		);
	}

	#[test]
	fn empty_secrets_build_and_sign() {
		let input = SigningInput::builder()
			.base_string("GET&a&b")
			.client_secret("")
			.credential_secret("")
			.build()
			.expect("Empty secrets are valid signing inputs.");
		let signature = input.sign_with(&HmacSha1Signer).expect("Signing should succeed.");

		assert!(input.verify_with(&HmacSha1Signer, signature.as_str()).expect("Verify works."));
		assert!(!input.verify_with(&HmacSha1Signer, "bogus").expect("Verify works."));
	}
}
