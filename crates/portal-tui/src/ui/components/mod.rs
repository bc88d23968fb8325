pub mod footer;
pub mod sidebar;

pub use footer::render_footer;
pub use sidebar::render_sidebar;
