pub mod mock;

use async_trait::async_trait;
use tracing::debug;

use crate::error::BillingError;
use crate::models::{Invoice, PaymentMethod};

pub use mock::MockBillingClient;

/// Boundary to the billing service. The TUI only ever talks to this trait;
/// the shipped implementation is a mock, a network-backed client slots in
/// behind the same seam.
#[async_trait]
pub trait BillingClient: Send + Sync {
    async fn list_invoices(&self) -> Result<Vec<Invoice>, BillingError>;

    async fn list_payment_methods(&self) -> Result<Vec<PaymentMethod>, BillingError>;

    /// Hand the invoice document to an external retrieval collaborator.
    async fn download_invoice(&self, invoice_id: &str) -> Result<(), BillingError>;
}

/// Everything the billing page needs for one render generation.
#[derive(Debug, Clone)]
pub struct BillingSnapshot {
    pub invoices: Vec<Invoice>,
    pub payment_methods: Vec<PaymentMethod>,
}

/// Fetch invoices and payment methods and validate cross-record invariants.
/// Any failure collapses into the single "billing data load failure" the UI
/// knows how to show.
pub async fn load_snapshot(client: &dyn BillingClient) -> Result<BillingSnapshot, BillingError> {
    let invoices = client.list_invoices().await?;
    let payment_methods = client.list_payment_methods().await?;
    validate_payment_methods(&payment_methods)?;
    debug!(
        invoices = invoices.len(),
        payment_methods = payment_methods.len(),
        "billing snapshot loaded"
    );
    Ok(BillingSnapshot {
        invoices,
        payment_methods,
    })
}

/// At most one stored method may be flagged as the default. Checked here, at
/// the data-source boundary, so the UI never has to arbitrate.
pub fn validate_payment_methods(methods: &[PaymentMethod]) -> Result<(), BillingError> {
    let mut default_id: Option<&str> = None;
    for method in methods {
        if !method.is_default {
            continue;
        }
        match default_id {
            None => default_id = Some(&method.id),
            Some(first) => {
                return Err(BillingError::ConflictingDefaults(
                    first.to_string(),
                    method.id.clone(),
                ))
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PaymentMethodKind;

    fn method(id: &str, is_default: bool) -> PaymentMethod {
        PaymentMethod {
            id: id.to_string(),
            kind: PaymentMethodKind::Card,
            brand: "Visa".to_string(),
            last4: "4242".to_string(),
            expires: Some("01/2027".to_string()),
            is_default,
        }
    }

    #[test]
    fn single_default_is_accepted() {
        let methods = vec![method("pm-1", true), method("pm-2", false)];
        assert!(validate_payment_methods(&methods).is_ok());
    }

    #[test]
    fn no_default_is_accepted() {
        let methods = vec![method("pm-1", false), method("pm-2", false)];
        assert!(validate_payment_methods(&methods).is_ok());
    }

    #[test]
    fn conflicting_defaults_are_rejected() {
        let methods = vec![method("pm-1", true), method("pm-2", true)];
        let err = validate_payment_methods(&methods).unwrap_err();
        assert!(matches!(err, BillingError::ConflictingDefaults(a, b)
            if a == "pm-1" && b == "pm-2"));
    }

    #[tokio::test]
    async fn load_snapshot_propagates_failure_message() {
        let client = MockBillingClient::failing("relay unreachable");
        let err = load_snapshot(&client).await.unwrap_err();
        assert!(err.to_string().contains("relay unreachable"));
    }

    #[tokio::test]
    async fn load_snapshot_returns_full_data_set() {
        let client = MockBillingClient::new();
        let snapshot = load_snapshot(&client).await.unwrap();
        assert_eq!(snapshot.invoices.len(), mock::MOCK_INVOICE_COUNT);
        assert_eq!(snapshot.payment_methods.len(), 3);
        let defaults = snapshot
            .payment_methods
            .iter()
            .filter(|m| m.is_default)
            .count();
        assert_eq!(defaults, 1);
    }
}
