//! Outcome of one reconciliation pass, serialized back to the caller.

use serde::{Deserialize, Serialize};

/// Outcome of the single batched removal request.
///
/// The whole batch reports one flag: a stale-version conflict fails it
/// entirely, never per image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RemovalOutcome {
    Success,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedImage {
    pub variant_id: i64,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FailedImage {
    pub variant_id: i64,
    pub url: String,
    pub error: String,
}

/// Aggregated report for one pass. Partial success across the upload batch
/// is expected and normal, not an error state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReconciliationResult {
    pub removal_outcome: RemovalOutcome,
    pub succeeded: Vec<UploadedImage>,
    pub failed: Vec<FailedImage>,
}

impl ReconciliationResult {
    /// The no-work result: nothing configured or nothing to reconcile.
    pub fn empty() -> Self {
        Self {
            removal_outcome: RemovalOutcome::Success,
            succeeded: Vec::new(),
            failed: Vec::new(),
        }
    }
}
