//! Dashboard routes - Statistics panel

pub mod api;
pub mod page;

pub use api::api_stats;
pub use page::page_dashboard;
