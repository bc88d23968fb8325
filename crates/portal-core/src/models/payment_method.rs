use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethodKind {
    Card,
    Bank,
}

/// A stored card or bank account usable for charges.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentMethod {
    pub id: String,
    pub kind: PaymentMethodKind,
    /// Issuer or institution name ("Visa", "First National Checking").
    pub brand: String,
    pub last4: String,
    /// "MM/YYYY" for cards; bank accounts have no expiry.
    pub expires: Option<String>,
    /// At most one method per account may be flagged default. Enforced by
    /// `billing::validate_payment_methods` at the data-source boundary.
    pub is_default: bool,
}

impl PaymentMethod {
    pub fn expires_display(&self) -> &str {
        self.expires.as_deref().unwrap_or("N/A")
    }
}
