//! JSON rendering of check outcomes.
//!
//! One result document per invocation on stdout; logs go to stderr so the
//! monitoring pipeline can consume stdout directly.

use serde::Serialize;
use serde_json::json;

use uniprobe_core::CheckOutcome;

use crate::error::CliError;

/// Print the outcome as a JSON document, or convert a failure into the
/// process error path. Partial results are still printed -- the warnings
/// ride along in the document and in the logs.
pub fn emit<T: Serialize>(check: &str, outcome: CheckOutcome<T>) -> Result<(), CliError> {
    let document = match outcome {
        CheckOutcome::Complete(state) => json!({
            "check": check,
            "state": state,
        }),
        CheckOutcome::Partial(state, diagnostics) => {
            let warnings: Vec<String> = diagnostics.iter().map(ToString::to_string).collect();
            for warning in &warnings {
                tracing::warn!(check, warning = %warning, "partial result");
            }
            json!({
                "check": check,
                "state": state,
                "warnings": warnings,
            })
        }
        CheckOutcome::Skipped(reason) => {
            tracing::info!(check, %reason, "check withdrawn");
            json!({
                "check": check,
                "skipped": reason.to_string(),
            })
        }
        CheckOutcome::Failed(err) => return Err(err.into()),
    };

    println!("{}", serde_json::to_string_pretty(&document)?);
    Ok(())
}
