//! Resolver configuration.

// self
use crate::{_prelude::*, protocol::ReservedParameters};

/// Settings consumed by [`HeaderResolver`](crate::protocol::HeaderResolver).
///
/// Deserializes from any serde format; missing fields fall back to [`Default`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResolverConfig {
	/// Reserved OAuth keywords probed as `HTTP_OAUTH_<KEYWORD>` variables.
	pub reserved_parameters: ReservedParameters,
	/// Enables the `HTTP_AUTH_USER` and `HTTP_USER` discovery fallbacks.
	pub legacy_fallbacks: bool,
}
impl ResolverConfig {
	/// Replaces the reserved keyword list after validating it.
	pub fn with_reserved_parameters<I, S>(mut self, keywords: I) -> Result<Self>
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.reserved_parameters = ReservedParameters::new(keywords)?;

		Ok(self)
	}

	/// Toggles the legacy discovery fallbacks.
	pub fn with_legacy_fallbacks(mut self, enabled: bool) -> Self {
		self.legacy_fallbacks = enabled;

		self
	}
}
impl Default for ResolverConfig {
	fn default() -> Self {
		Self { reserved_parameters: ReservedParameters::default(), legacy_fallbacks: true }
	}
}
