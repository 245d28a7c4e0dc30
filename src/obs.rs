//! Optional observability helpers for signing and header resolution.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `oauth1_request_auth.operation` with the
//!   `operation` and `stage` (call site) fields.
//! - Enable `metrics` to increment the `oauth1_request_auth_operation_total` counter for every
//!   attempt/success/not-found/failure, labeled by `operation` + `outcome`, and the
//!   `oauth1_request_auth_soft_failure_total` counter for tolerated malformed input, labeled by
//!   `operation` + `reason`.

mod metrics;
mod tracing;

pub use self::metrics::*;
pub use self::tracing::*;

// self
use crate::_prelude::*;

/// Operations observed by the crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OperationKind {
	/// Message signing through a [`Signer`](crate::credentials::Signer).
	Sign,
	/// Single raw `Authorization` header discovery.
	FetchAuthorization,
	/// Full header map normalization.
	ProcessAuthorization,
	/// Base string canonicalization.
	BaseString,
}
impl OperationKind {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			OperationKind::Sign => "sign",
			OperationKind::FetchAuthorization => "fetch_authorization",
			OperationKind::ProcessAuthorization => "process_authorization",
			OperationKind::BaseString => "base_string",
		}
	}
}
impl Display for OperationKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OperationOutcome {
	/// Entry to an operation.
	Attempt,
	/// Successful completion with a value.
	Success,
	/// Completed without discovering anything.
	NotFound,
	/// Failure propagated back to the caller.
	Failure,
}
impl OperationOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			OperationOutcome::Attempt => "attempt",
			OperationOutcome::Success => "success",
			OperationOutcome::NotFound => "not_found",
			OperationOutcome::Failure => "failure",
		}
	}
}
impl Display for OperationOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
