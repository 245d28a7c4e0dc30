//! Request environment snapshots and the optional native header capability.

// self
use crate::_prelude::*;

/// Snapshot of CGI-style request variables (`HTTP_*`, `CONTENT_TYPE`, `PHP_AUTH_USER`, ...).
///
/// The snapshot is owned by the request it describes; resolvers only read it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestEnvironment {
	variables: BTreeMap<String, String>,
}
impl RequestEnvironment {
	/// Creates an empty snapshot.
	pub fn new() -> Self {
		Self::default()
	}

	/// Captures the current process environment (CGI deployments expose requests this way).
	///
	/// Variables whose name or value is not valid Unicode are skipped.
	pub fn from_process_env() -> Self {
		std::env::vars_os()
			.filter_map(|(name, value)| {
				Some((name.into_string().ok()?, value.into_string().ok()?))
			})
			.collect()
	}

	/// Adds or replaces a variable.
	pub fn with_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.insert(name, value);

		self
	}

	/// Adds or replaces a variable in place.
	pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
		self.variables.insert(name.into(), value.into());
	}

	/// Returns the variable value, if present.
	pub fn get(&self, name: &str) -> Option<&str> {
		self.variables.get(name).map(String::as_str)
	}

	/// Returns true if the variable is present (even when empty).
	pub fn contains(&self, name: &str) -> bool {
		self.variables.contains_key(name)
	}

	/// Iterator over `(name, value)` pairs in name order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.variables.iter().map(|(k, v)| (k.as_str(), v.as_str()))
	}

	/// Number of variables.
	pub fn len(&self) -> usize {
		self.variables.len()
	}

	/// Returns true if the snapshot holds no variables.
	pub fn is_empty(&self) -> bool {
		self.variables.is_empty()
	}

	/// Builds a snapshot from HTTP request parts using CGI naming.
	///
	/// Header `x-foo-bar` becomes `HTTP_X_FOO_BAR`; `content-type` and `content-length` also
	/// populate the unprefixed `CONTENT_TYPE` / `CONTENT_LENGTH`, as CGI servers do. Values
	/// that are not visible ASCII are skipped. Repeated headers are joined with `", "`.
	#[cfg(feature = "http")]
	pub fn from_http_parts(parts: &http::request::Parts) -> Self {
		let mut env = Self::new();

		env.insert("REQUEST_METHOD", parts.method.as_str());

		if let Some(query) = parts.uri.query() {
			env.insert("QUERY_STRING", query);
		}

		for name in parts.headers.keys() {
			let values = parts
				.headers
				.get_all(name)
				.iter()
				.filter_map(|value| value.to_str().ok())
				.collect::<Vec<_>>();

			if values.is_empty() {
				continue;
			}

			let value = values.join(", ");
			let cgi_name = name.as_str().to_ascii_uppercase().replace('-', "_");

			if *name == http::header::CONTENT_TYPE || *name == http::header::CONTENT_LENGTH {
				env.insert(cgi_name.clone(), value.clone());
			}

			env.insert(format!("HTTP_{cgi_name}"), value);
		}

		env
	}
}
impl<K, V> FromIterator<(K, V)> for RequestEnvironment
where
	K: Into<String>,
	V: Into<String>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self { variables: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect() }
	}
}

/// Native "enumerate all request headers" capability offered by some hosts.
///
/// Implementations return a case-preserving snapshot of the raw request headers.
pub trait NativeHeaderSource
where
	Self: Send + Sync,
{
	/// Returns every request header as `(name, value)` in the host's original casing.
	fn request_headers(&self) -> Vec<(String, String)>;
}
impl NativeHeaderSource for Vec<(String, String)> {
	fn request_headers(&self) -> Vec<(String, String)> {
		self.clone()
	}
}
impl NativeHeaderSource for BTreeMap<String, String> {
	fn request_headers(&self) -> Vec<(String, String)> {
		self.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
	}
}
impl NativeHeaderSource for HashMap<String, String> {
	fn request_headers(&self) -> Vec<(String, String)> {
		self.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
	}
}
/// `http` lower-cases header names, so names are reported in canonical title case.
#[cfg(feature = "http")]
impl NativeHeaderSource for http::HeaderMap {
	fn request_headers(&self) -> Vec<(String, String)> {
		self.iter()
			.filter_map(|(name, value)| {
				value.to_str().ok().map(|value| (title_case(name.as_str()), value.to_owned()))
			})
			.collect()
	}
}

/// Looks up `name` with an exact, case-sensitive match.
pub(crate) fn find_header_exact<'a>(
	headers: &'a [(String, String)],
	name: &str,
) -> Option<&'a str> {
	headers.iter().find(|(k, _)| k == name).map(|(_, v)| v.as_str())
}

/// Converts a header name to title case per `-`/space separated word (`aUTHORIZATION` ->
/// `Authorization`, `x-oauth-token` -> `X-Oauth-Token`).
pub(crate) fn title_case(name: &str) -> String {
	let mut out = String::with_capacity(name.len());
	let mut word_start = true;

	for c in name.chars() {
		if word_start {
			out.extend(c.to_uppercase());
		} else {
			out.extend(c.to_lowercase());
		}

		word_start = c == '-' || c == ' ';
	}

	out
}
