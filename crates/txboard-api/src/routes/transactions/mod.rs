//! Transaction routes - Transaction list, type filter, search, pagination
//!
//! Every fragment route applies one state transition to the shared list
//! and returns the re-rendered list container.
//!
//! Structure:
//! - api.rs: JSON API and HTMX endpoints
//! - page.rs: Full page rendering

pub mod api;
pub mod page;

pub use api::{
    api_transactions,
    htmx_transactions_filter,
    htmx_transactions_list,
    htmx_transactions_next,
    htmx_transactions_page,
    htmx_transactions_per_page,
    htmx_transactions_prev,
    htmx_transactions_search,
};

pub use page::page_transactions;
