use thiserror::Error;

/// Errors surfaced by the billing data layer.
#[derive(Debug, Error)]
pub enum BillingError {
    /// Any failure while fetching billing data. Rendered verbatim in the
    /// billing page's error banner.
    #[error("billing data load failure: {0}")]
    LoadFailed(String),

    /// Two stored payment methods were both flagged as the default.
    /// Caught at the data-source boundary, never left for the UI to resolve.
    #[error("payment methods {0} and {1} are both marked default")]
    ConflictingDefaults(String, String),

    /// No document store is wired up for invoice downloads yet.
    #[error("document retrieval for invoice {0} is not available")]
    DownloadUnavailable(String),
}
