pub mod billing;
pub mod placeholder;

pub use billing::render_billing;
pub use placeholder::render_placeholder;
