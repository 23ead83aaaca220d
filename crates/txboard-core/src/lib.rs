//! Core transaction list processing and business logic

pub mod error;
pub mod models;
pub mod pipeline;
pub mod source;
pub mod stats;
pub mod time;
pub mod types;

pub use error::{CoreError, CoreResult, ErrorSeverity};
pub use models::TransactionRecord;
pub use pipeline::{
    build_view, filter_records, matches_search, page_bounds, pagination_strip, query_view,
    results_summary, total_pages, ListQuery, ListState, ListView, PageItem, PaginationView,
    RowView, TransactionList, TypeFilter, ALL_TYPES, MAX_VISIBLE_PAGES,
};
pub use source::{
    build_source, load_records, parse_transactions_body, MockSource, RemoteSource,
    RemoteTransaction, SourceRef, TransactionSource,
};
pub use stats::{CategoryCount, TokenVolume, TransactionStats};
pub use time::relative_age;
pub use types::{Chain, Token, TxStatus, TxType, BNB_CHAIN_ID};
