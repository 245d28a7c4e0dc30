//! OAuth 1.0 request authentication core: pluggable message signers over canonical base strings
//! and authorization header discovery across inconsistent, CGI-style request environments.
//!
//! The crate never performs I/O, never stores secrets, and never issues tokens. Callers hand it
//! a request environment snapshot (plus an optional native header source) and get back a
//! normalized header map, or hand it a base string plus secrets and get back a signature.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod config;
pub mod credentials;
pub mod error;
pub mod obs;
pub mod protocol;

mod _prelude {
	pub use std::{
		collections::{BTreeMap, HashMap},
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		str::FromStr,
	};

	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use url::Url;

	pub use crate::error::{ConfigError, Error, Result};
}

pub use url;
#[cfg(test)] use serde_json as _;
