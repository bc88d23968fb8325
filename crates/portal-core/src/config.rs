use crate::models::SystemStatus;
use crate::pagination::DEFAULT_PAGE_SIZE;

#[derive(Debug, Clone)]
pub struct PortalConfig {
    /// Invoices shown per page when the billing view first opens.
    pub default_page_size: usize,
    /// Platform status reported in the footer.
    pub system_status: SystemStatus,
    /// Build timestamp shown next to the version, when known.
    pub build_time: Option<String>,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
            system_status: SystemStatus::Healthy,
            build_time: None,
        }
    }
}
