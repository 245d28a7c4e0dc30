// self
use crate::obs::{OperationKind, OperationOutcome};

/// Counter incremented once per outcome of signing, base string, and header discovery calls.
const OPERATION_COUNTER: &str = "oauth1_request_auth_operation_total";
/// Counter for inputs that were tolerated rather than rejected (e.g. an undecodable Basic
/// payload left in `AUTHORIZATION` without `PHP_AUTH_*` fields).
const SOFT_FAILURE_COUNTER: &str = "oauth1_request_auth_soft_failure_total";

/// Records an operation outcome via the global metrics recorder (when enabled).
pub fn record_outcome(kind: OperationKind, outcome: OperationOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			OPERATION_COUNTER,
			"operation" => kind.as_str(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (OPERATION_COUNTER, kind, outcome);
	}
}

/// Records a tolerated input problem, labeled by operation and reason.
pub fn record_soft_failure(kind: OperationKind, reason: &'static str) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(SOFT_FAILURE_COUNTER, "operation" => kind.as_str(), "reason" => reason)
			.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (SOFT_FAILURE_COUNTER, kind, reason);
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn recorders_are_noops_without_metrics() {
		record_outcome(OperationKind::ProcessAuthorization, OperationOutcome::NotFound);
		record_soft_failure(OperationKind::ProcessAuthorization, "malformed basic payload");
	}
}
