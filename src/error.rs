//! Crate-level error types shared by signers, resolvers, and configuration.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Canonical error exposed by public APIs.
///
/// Header absence is never reported through this type; resolvers return `None` instead.
#[derive(Debug, PartialEq, Eq, ThisError)]
pub enum Error {
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),

	/// Signing inputs are structurally invalid (missing or empty where forbidden).
	#[error("Invalid argument `{argument}`: {reason}.")]
	InvalidArgument {
		/// Name of the offending argument.
		argument: &'static str,
		/// Human-readable description of the violation.
		reason: &'static str,
	},
	/// The requested `oauth_signature_method` has no signer in this crate.
	#[error("Signature method `{method}` is not supported.")]
	UnsupportedSignatureMethod {
		/// Label supplied by the caller.
		method: String,
	},
	/// The request URL cannot be turned into a base string URI.
	#[error("URL `{url}` cannot be used in a base string: {reason}.")]
	InvalidUrl {
		/// Offending URL.
		url: String,
		/// Human-readable description of the violation.
		reason: &'static str,
	},
}
impl Error {
	/// Builds an [`Error::InvalidArgument`] for a required input that was not supplied.
	pub const fn missing(argument: &'static str) -> Self {
		Self::InvalidArgument { argument, reason: "value is required" }
	}

	/// Builds an [`Error::InvalidArgument`] for a required input that was empty.
	pub const fn empty(argument: &'static str) -> Self {
		Self::InvalidArgument { argument, reason: "value cannot be empty" }
	}
}

/// Configuration and validation failures.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
pub enum ConfigError {
	/// Reserved parameter keywords cannot be empty.
	#[error("Reserved parameter keywords cannot be empty.")]
	EmptyReservedParameter,
	/// Reserved parameter keywords cannot contain whitespace.
	#[error("Reserved parameter `{keyword}` contains whitespace.")]
	ReservedParameterWhitespace {
		/// The offending keyword.
		keyword: String,
	},
}
