//! Reserved OAuth parameter keywords.

// std
use std::slice::Iter;
// self
use crate::_prelude::*;

/// Protocol keywords (without the `oauth_` prefix) defined by OAuth 1.0.
pub const DEFAULT_RESERVED_PARAMETERS: [&str; 9] = [
	"callback",
	"consumer_key",
	"nonce",
	"signature",
	"signature_method",
	"timestamp",
	"token",
	"verifier",
	"version",
];

/// Ordered, de-duplicated list of reserved OAuth parameter keywords.
///
/// The resolver probes `HTTP_OAUTH_<KEYWORD>` for every entry, in order.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct ReservedParameters(Vec<String>);
impl ReservedParameters {
	/// Creates a validated keyword list, keeping first occurrences only.
	pub fn new<I, S>(keywords: I) -> Result<Self, ConfigError>
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let mut list: Vec<String> = Vec::new();

		for keyword in keywords {
			let owned: String = keyword.into();

			if owned.is_empty() {
				return Err(ConfigError::EmptyReservedParameter);
			}
			if owned.chars().any(char::is_whitespace) {
				return Err(ConfigError::ReservedParameterWhitespace { keyword: owned });
			}
			if !list.contains(&owned) {
				list.push(owned);
			}
		}

		Ok(Self(list))
	}

	/// Number of keywords.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns true if no keywords are configured.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Iterator over keywords in configured order.
	pub fn iter(&self) -> Iter<'_, String> {
		self.0.iter()
	}

	/// Environment variable names (`HTTP_OAUTH_<KEYWORD>`) probed for overrides.
	pub fn environment_names(&self) -> impl Iterator<Item = String> + '_ {
		self.0.iter().map(|keyword| format!("HTTP_OAUTH_{}", keyword.to_ascii_uppercase()))
	}
}
impl Default for ReservedParameters {
	fn default() -> Self {
		Self(DEFAULT_RESERVED_PARAMETERS.iter().map(|s| (*s).to_owned()).collect())
	}
}
impl Debug for ReservedParameters {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("ReservedParameters").field(&self.0).finish()
	}
}
impl TryFrom<Vec<String>> for ReservedParameters {
	type Error = ConfigError;

	fn try_from(value: Vec<String>) -> Result<Self, Self::Error> {
		Self::new(value)
	}
}
impl From<ReservedParameters> for Vec<String> {
	fn from(value: ReservedParameters) -> Self {
		value.0
	}
}
impl<'a> IntoIterator for &'a ReservedParameters {
	type IntoIter = Iter<'a, String>;
	type Item = &'a String;

	fn into_iter(self) -> Self::IntoIter {
		self.0.iter()
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn keywords_deduplicate_in_order() {
		let params = ReservedParameters::new(["token", "nonce", "token"])
			.expect("Keyword list should be valid.");

		assert_eq!(params.iter().map(String::as_str).collect::<Vec<_>>(), ["token", "nonce"]);
		assert_eq!(
			params.environment_names().collect::<Vec<_>>(),
			["HTTP_OAUTH_TOKEN", "HTTP_OAUTH_NONCE"]
		);
	}

	#[test]
	fn invalid_keywords_error() {
		assert_eq!(ReservedParameters::new([""]), Err(ConfigError::EmptyReservedParameter));
		assert!(matches!(
			ReservedParameters::new(["consumer key"]),
			Err(ConfigError::ReservedParameterWhitespace { .. })
		));
	}

	#[test]
	fn serde_round_trip_enforces_validation() {
		let params: ReservedParameters = serde_json::from_str("[\"token\",\"version\"]")
			.expect("Keyword list should deserialize.");

		assert_eq!(params.len(), 2);
		assert!(serde_json::from_str::<ReservedParameters>("[\"\"]").is_err());
		assert_eq!(ReservedParameters::default().len(), DEFAULT_RESERVED_PARAMETERS.len());
	}
}
