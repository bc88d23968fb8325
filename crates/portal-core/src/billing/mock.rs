//! Mock billing client. Generates a plausible account history locally so the
//! portal can run without a billing service behind it.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use rand::Rng;

use crate::billing::BillingClient;
use crate::error::BillingError;
use crate::models::{Invoice, InvoiceStatus, PaymentMethod, PaymentMethodKind};

/// Months of invoice history the mock produces.
pub const MOCK_INVOICE_COUNT: usize = 25;

/// Stand-in for the real billing service. `failing` builds a client whose
/// list calls fail with the given message, for exercising the error path.
#[derive(Debug, Default)]
pub struct MockBillingClient {
    fail_with: Option<String>,
}

impl MockBillingClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            fail_with: Some(message.into()),
        }
    }

    fn check_failure(&self) -> Result<(), BillingError> {
        match &self.fail_with {
            Some(message) => Err(BillingError::LoadFailed(message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl BillingClient for MockBillingClient {
    async fn list_invoices(&self) -> Result<Vec<Invoice>, BillingError> {
        self.check_failure()?;
        Ok(generate_invoices(Utc::now()))
    }

    async fn list_payment_methods(&self) -> Result<Vec<PaymentMethod>, BillingError> {
        self.check_failure()?;
        Ok(sample_payment_methods())
    }

    async fn download_invoice(&self, invoice_id: &str) -> Result<(), BillingError> {
        // The mock has no document store behind it.
        Err(BillingError::DownloadUnavailable(invoice_id.to_string()))
    }
}

/// One invoice per 30-day period, newest first: entry `i` is dated
/// `now - i * 30 days`. Amounts are whole dollars in [100, 600), statuses
/// uniform over the three settlement states.
pub fn generate_invoices(now: DateTime<Utc>) -> Vec<Invoice> {
    let mut rng = rand::thread_rng();
    (0..MOCK_INVOICE_COUNT)
        .map(|i| {
            let issued_at = now - Duration::days(30 * i as i64);
            let id = format!("INV-{:04}", MOCK_INVOICE_COUNT - i);
            let amount_cents = rng.gen_range(100u64..600) * 100;
            let status = match rng.gen_range(0u8..3) {
                0 => InvoiceStatus::Paid,
                1 => InvoiceStatus::Pending,
                _ => InvoiceStatus::Failed,
            };
            let document_ref = format!("/billing/invoices/{id}/document");
            Invoice {
                description: format!("Enterprise subscription, {}", issued_at.format("%B %Y")),
                id,
                issued_at,
                amount_cents,
                status,
                document_ref,
            }
        })
        .collect()
}

/// Two cards and a bank account, exactly one flagged default.
pub fn sample_payment_methods() -> Vec<PaymentMethod> {
    vec![
        PaymentMethod {
            id: "pm-001".to_string(),
            kind: PaymentMethodKind::Card,
            brand: "Visa".to_string(),
            last4: "4242".to_string(),
            expires: Some("11/2027".to_string()),
            is_default: true,
        },
        PaymentMethod {
            id: "pm-002".to_string(),
            kind: PaymentMethodKind::Card,
            brand: "Mastercard".to_string(),
            last4: "8210".to_string(),
            expires: Some("03/2026".to_string()),
            is_default: false,
        },
        PaymentMethod {
            id: "pm-003".to_string(),
            kind: PaymentMethodKind::Bank,
            brand: "First National Checking".to_string(),
            last4: "6789".to_string(),
            expires: None,
            is_default: false,
        },
    ]
}
