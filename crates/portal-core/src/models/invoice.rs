use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Settlement state of a single invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Paid,
    Pending,
    Failed,
}

impl InvoiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Paid => "paid",
            InvoiceStatus::Pending => "pending",
            InvoiceStatus::Failed => "failed",
        }
    }

    /// Parse a wire-format status label. Unknown labels are `None` so the
    /// caller decides how to degrade.
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "paid" => Some(InvoiceStatus::Paid),
            "pending" => Some(InvoiceStatus::Pending),
            "failed" => Some(InvoiceStatus::Failed),
            _ => None,
        }
    }
}

/// A billing record for one period. Immutable once generated; the billing
/// view replaces the whole list on every load, never edits entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    pub id: String,
    pub issued_at: DateTime<Utc>,
    /// Whole amount in cents. Formatting to a currency string happens at the
    /// rendering edge.
    pub amount_cents: u64,
    pub status: InvoiceStatus,
    pub description: String,
    /// Reference to the invoice document, resolved by an external retrieval
    /// collaborator (not part of this crate).
    pub document_ref: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_labels_round_trip() {
        for status in [
            InvoiceStatus::Paid,
            InvoiceStatus::Pending,
            InvoiceStatus::Failed,
        ] {
            assert_eq!(InvoiceStatus::parse(status.as_str()), Some(status));
        }
    }

    #[test]
    fn unknown_status_label_is_rejected() {
        assert_eq!(InvoiceStatus::parse("refunded"), None);
        assert_eq!(InvoiceStatus::parse(""), None);
    }
}
