pub mod invoice;
pub mod module;
pub mod payment_method;
pub mod system_status;

pub use invoice::{Invoice, InvoiceStatus};
pub use module::{module_label, ModuleEntry, MODULES};
pub use payment_method::{PaymentMethod, PaymentMethodKind};
pub use system_status::SystemStatus;
