//! Route modules for the API server
//!
//! - dashboard: Statistics panel
//! - transactions: Transaction list, filter, search, pagination
//! - settings: Settings page
//!
//! Each module follows a consistent structure:
//! - mod.rs: Module declaration and exports
//! - api.rs: JSON API endpoints and HTMX fragments
//! - page.rs: HTMX page rendering

pub mod dashboard;
pub mod settings;
pub mod transactions;
