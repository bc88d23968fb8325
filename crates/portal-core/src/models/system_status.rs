use serde::{Deserialize, Serialize};

/// Platform health reported in the application footer. Closed set; there is
/// deliberately no fallback variant, so display mappings stay exhaustive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SystemStatus {
    #[default]
    Healthy,
    Degraded,
    Critical,
}

impl SystemStatus {
    /// Headline shown in the footer status tag. Fixed table.
    pub fn headline(&self) -> &'static str {
        match self {
            SystemStatus::Healthy => "All Systems Operational",
            SystemStatus::Degraded => "Degraded Performance",
            SystemStatus::Critical => "Major Outage",
        }
    }
}
