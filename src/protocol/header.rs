//! Authorization header discovery and normalization across request environments.
//!
//! Hosts disagree on where credentials end up: some expose the raw headers natively, some
//! only set `HTTP_AUTHORIZATION`, proxies and rewrite rules move it to
//! `REDIRECT_HTTP_AUTHORIZATION`, and CGI front ends may decode Basic auth into
//! `PHP_AUTH_USER` / `PHP_AUTH_PW` and hide the header entirely. [`HeaderResolver`] reconciles
//! these sources in a fixed precedence order.

// self
use crate::{
	_prelude::*,
	config::ResolverConfig,
	obs::{self, OperationKind, OperationOutcome, OperationSpan},
	protocol::{
		AUTHORIZATION, AuthorizationHeaders, BasicCredentials, NativeHeaderSource, PHP_AUTH_PW,
		PHP_AUTH_USER, RequestEnvironment, environment,
	},
};

/// Content metadata variables that CGI never prefixes with `HTTP_`.
const CONTENT_VARIABLES: [&str; 3] = ["CONTENT_LENGTH", "CONTENT_MD5", "CONTENT_TYPE"];
const MALFORMED_BASIC: &str = "malformed basic payload";

/// Discovers and normalizes OAuth / Basic-auth headers from a request environment.
///
/// The resolver holds configuration only; every call reads the snapshot it is handed and
/// returns freshly built values, so one instance can serve concurrent requests.
#[derive(Clone, Debug, Default)]
pub struct HeaderResolver {
	config: ResolverConfig,
}
impl HeaderResolver {
	/// Creates a resolver with the provided configuration.
	pub fn new(config: ResolverConfig) -> Self {
		Self { config }
	}

	/// Returns the active configuration.
	pub fn config(&self) -> &ResolverConfig {
		&self.config
	}

	/// Finds a single raw `Authorization` value, trimmed.
	///
	/// Sources are tried in order, stopping at the first non-blank value:
	///
	/// 1. the native header source (`Authorization`, exact casing), when one is supplied;
	/// 2. `HTTP_AUTHORIZATION`;
	/// 3. `HTTP_AUTH_USER` (legacy, see [`ResolverConfig::legacy_fallbacks`]);
	/// 4. `HTTP_USER` (legacy).
	///
	/// Returns `None` when nothing was found.
	pub fn fetch_authorization_header(
		&self,
		env: &RequestEnvironment,
		native: Option<&dyn NativeHeaderSource>,
	) -> Option<String> {
		let _guard =
			OperationSpan::new(OperationKind::FetchAuthorization, "fetch_authorization_header")
				.entered();

		obs::record_outcome(OperationKind::FetchAuthorization, OperationOutcome::Attempt);

		let found = native
			.and_then(|source| {
				let headers = source.request_headers();

				environment::find_header_exact(&headers, "Authorization").and_then(non_blank)
			})
			.or_else(|| env.get("HTTP_AUTHORIZATION").and_then(non_blank))
			.or_else(|| self.legacy_authorization(env));
		let outcome =
			if found.is_some() { OperationOutcome::Success } else { OperationOutcome::NotFound };

		obs::record_outcome(OperationKind::FetchAuthorization, outcome);

		found
	}

	/// Builds the normalized header map from the request environment.
	///
	/// 1. Every `HTTP_*` variable is copied with the prefix stripped; `CONTENT_LENGTH`,
	///    `CONTENT_MD5`, and `CONTENT_TYPE` are copied under their lower-case names.
	/// 2. Native `PHP_AUTH_USER` / `PHP_AUTH_PW` variables are copied when present.
	/// 3. Otherwise a raw authorization value is recovered from `HTTP_AUTHORIZATION`,
	///    `REDIRECT_HTTP_AUTHORIZATION`, or the native source (names title-cased), stored as
	///    `AUTHORIZATION`, and decoded into `PHP_AUTH_*` when it uses the Basic scheme.
	/// 4. A set `PHP_AUTH_USER` re-synthesizes `AUTHORIZATION` as a Basic header.
	/// 5. `PHP_USER` / `PHP_PW` synthesize `AUTHORIZATION` when it is still blank.
	/// 6. Each reserved keyword's `HTTP_OAUTH_<KEYWORD>` variable is stored trimmed under that
	///    name.
	///
	/// Returns `None` when the map would be empty.
	pub fn process_authorization_header(
		&self,
		env: &RequestEnvironment,
		native: Option<&dyn NativeHeaderSource>,
	) -> Option<AuthorizationHeaders> {
		let _guard =
			OperationSpan::new(OperationKind::ProcessAuthorization, "process_authorization_header")
				.entered();

		obs::record_outcome(OperationKind::ProcessAuthorization, OperationOutcome::Attempt);

		let mut headers = collect_prefixed(env);

		if let Some(user) = env.get(PHP_AUTH_USER) {
			headers.insert(PHP_AUTH_USER, user);
			headers.insert(PHP_AUTH_PW, env.get(PHP_AUTH_PW).unwrap_or_default());
		} else if let Some(raw) = recover_authorization(env, native) {
			if let Some(credentials) = BasicCredentials::decode(&raw) {
				headers.insert(PHP_AUTH_USER, credentials.user);
				headers.insert(PHP_AUTH_PW, credentials.password.expose());
			} else if is_basic(&raw) {
				obs::soft_failure(OperationKind::ProcessAuthorization, MALFORMED_BASIC);
				obs::record_soft_failure(OperationKind::ProcessAuthorization, MALFORMED_BASIC);
			}

			headers.insert(AUTHORIZATION, raw);
		}

		if let Some(credentials) = headers.basic_credentials() {
			headers.insert(AUTHORIZATION, credentials.to_header());
		}
		if headers.authorization().is_none_or(str::is_empty)
			&& let Some(credentials) = php_user_credentials(&headers, env)
		{
			headers.insert(AUTHORIZATION, credentials.to_header());
		}

		for name in self.config.reserved_parameters.environment_names() {
			if let Some(value) = env.get(&name) {
				let value = value.trim().to_owned();

				headers.insert(name, value);
			}
		}

		if headers.is_empty() {
			obs::record_outcome(OperationKind::ProcessAuthorization, OperationOutcome::NotFound);

			return None;
		}

		obs::record_outcome(OperationKind::ProcessAuthorization, OperationOutcome::Success);

		Some(headers)
	}

	fn legacy_authorization(&self, env: &RequestEnvironment) -> Option<String> {
		if !self.config.legacy_fallbacks {
			return None;
		}

		env.get("HTTP_AUTH_USER")
			.and_then(non_blank)
			.or_else(|| env.get("HTTP_USER").and_then(non_blank))
	}
}

fn collect_prefixed(env: &RequestEnvironment) -> AuthorizationHeaders {
	let mut headers = AuthorizationHeaders::default();

	for (name, value) in env.iter() {
		if let Some(stripped) = name.strip_prefix("HTTP_") {
			headers.insert(stripped, value);
		} else if CONTENT_VARIABLES.contains(&name) {
			headers.insert(name.to_ascii_lowercase(), value);
		}
	}

	headers
}

/// Recovers the raw authorization value for hosts that did not decode Basic auth.
///
/// Environment values are taken verbatim; the native value is trimmed.
fn recover_authorization(
	env: &RequestEnvironment,
	native: Option<&dyn NativeHeaderSource>,
) -> Option<String> {
	if let Some(value) =
		env.get("HTTP_AUTHORIZATION").or_else(|| env.get("REDIRECT_HTTP_AUTHORIZATION"))
	{
		return Some(value.to_owned());
	}

	// Some clients alter header capitalization, so compare on title-cased names.
	native?
		.request_headers()
		.into_iter()
		.find(|(name, _)| environment::title_case(name) == "Authorization")
		.map(|(_, value)| value.trim().to_owned())
}

fn php_user_credentials(
	headers: &AuthorizationHeaders,
	env: &RequestEnvironment,
) -> Option<BasicCredentials> {
	if let Some(user) = headers.get("PHP_USER") {
		return Some(BasicCredentials::new(user, headers.get("PHP_PW").unwrap_or_default()));
	}

	env.get("PHP_USER")
		.map(|user| BasicCredentials::new(user, env.get("PHP_PW").unwrap_or_default()))
}

fn is_basic(value: &str) -> bool {
	value.get(..5).is_some_and(|scheme| scheme.eq_ignore_ascii_case("basic"))
}

fn non_blank(value: &str) -> Option<String> {
	let trimmed = value.trim();

	(!trimmed.is_empty()).then(|| trimmed.to_owned())
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn env(pairs: &[(&str, &str)]) -> RequestEnvironment {
		pairs.iter().copied().collect()
	}

	#[test]
	fn prefixed_and_content_variables_are_collected() {
		let headers = HeaderResolver::default()
			.process_authorization_header(
				&env(&[
					("HTTP_FOO", "bar"),
					("CONTENT_TYPE", "application/json"),
					("SERVER_NAME", "ignored"),
				]),
				None,
			)
			.expect("Headers should be discovered.");

		assert_eq!(headers.get("FOO"), Some("bar"));
		assert_eq!(headers.get("content_type"), Some("application/json"));
		assert_eq!(headers.len(), 2);
	}

	#[test]
	fn non_basic_authorization_is_kept_verbatim() {
		let raw = "OAuth oauth_consumer_key=\"key\", oauth_nonce=\"n\"";
		let headers = HeaderResolver::default()
			.process_authorization_header(&env(&[("REDIRECT_HTTP_AUTHORIZATION", raw)]), None)
			.expect("Headers should be discovered.");

		assert_eq!(headers.authorization(), Some(raw));
		assert!(!headers.contains(PHP_AUTH_USER));
	}

	#[test]
	fn fetch_skips_blank_values() {
		let resolver = HeaderResolver::default();
		let snapshot = env(&[("HTTP_AUTHORIZATION", "   "), ("HTTP_USER", "u")]);
		let found = resolver.fetch_authorization_header(&snapshot, None);

		assert_eq!(found.as_deref(), Some("u"));
	}

	#[test]
	fn basic_detection_is_case_insensitive() {
		assert!(is_basic("BASIC abc"));
		assert!(is_basic("basic"));
		assert!(!is_basic("Bear"));
	}
}
