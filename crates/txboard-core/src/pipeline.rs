//! Transaction list pipeline - filter, search, paginate, render
//!
//! The filtered view is recomputed from the full record set in a single
//! order-preserving pass whenever the type filter, search query or record
//! set changes. All derivations are free functions over an explicit
//! [`ListState`]; [`TransactionList`] owns one state and keeps the
//! filtered index list in sync with it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::models::TransactionRecord;
use crate::types::TxType;

/// Strips longer than this are windowed with ellipses
pub const MAX_VISIBLE_PAGES: usize = 5;

/// Sentinel accepted by the type filter to match every type
pub const ALL_TYPES: &str = "all";

// ==================== State ====================

/// Active type constraint
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TypeFilter {
    /// No constraint
    #[default]
    All,
    /// Only records of this type
    Only(TxType),
    /// A filter value naming no known type; matches nothing
    Unrecognized(String),
}

impl TypeFilter {
    /// Parse a filter value: "all", an exact type label, or anything else
    pub fn parse(value: &str) -> Self {
        if value == ALL_TYPES {
            return TypeFilter::All;
        }
        match TxType::ALL.iter().find(|t| t.label() == value) {
            Some(tx_type) => TypeFilter::Only(*tx_type),
            None => TypeFilter::Unrecognized(value.to_string()),
        }
    }

    pub fn matches(&self, tx_type: TxType) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Only(t) => *t == tx_type,
            TypeFilter::Unrecognized(_) => false,
        }
    }
}

impl std::fmt::Display for TypeFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TypeFilter::All => write!(f, "{}", ALL_TYPES),
            TypeFilter::Only(t) => write!(f, "{}", t.label()),
            TypeFilter::Unrecognized(raw) => write!(f, "{}", raw),
        }
    }
}

/// Filter, search and pagination state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListState {
    pub type_filter: TypeFilter,
    pub search_query: String,
    /// Always positive
    pub page_size: usize,
    /// 1-based, within `[1, total_pages]`
    pub current_page: usize,
}

impl ListState {
    pub fn new(page_size: usize) -> CoreResult<Self> {
        if page_size == 0 {
            return Err(CoreError::InvalidPageSize { size: page_size });
        }
        Ok(Self {
            type_filter: TypeFilter::All,
            search_query: String::new(),
            page_size,
            current_page: 1,
        })
    }
}

/// Query parameters for a stateless list request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    #[serde(rename = "type")]
    pub type_filter: Option<String>,
    pub q: Option<String>,
    pub page: Option<usize>,
    pub per_page: Option<usize>,
}

impl ListQuery {
    /// Build a state from the query; the page is resolved later against the filtered count
    pub fn to_state(&self, default_page_size: usize) -> CoreResult<ListState> {
        let mut state = ListState::new(self.per_page.unwrap_or(default_page_size))?;
        if let Some(ref filter) = self.type_filter {
            state.type_filter = TypeFilter::parse(filter);
        }
        if let Some(ref q) = self.q {
            state.search_query = q.clone();
        }
        state.current_page = self.page.unwrap_or(1);
        Ok(state)
    }
}

// ==================== Pure derivations ====================

/// Check a record against an already lower-cased query
pub fn matches_search(record: &TransactionRecord, query_lower: &str) -> bool {
    if query_lower.is_empty() {
        return true;
    }
    record.short_hash.to_lowercase().contains(query_lower)
        || record.full_hash.to_lowercase().contains(query_lower)
        || record.tx_type.label().to_lowercase().contains(query_lower)
        || record.amount_search_text().contains(query_lower)
        || record.token.code().to_lowercase().contains(query_lower)
        || record.chain.name().to_lowercase().contains(query_lower)
}

/// Indices of matching records, in record-set order
pub fn filter_records(records: &[TransactionRecord], type_filter: &TypeFilter, query: &str) -> Vec<usize> {
    let query_lower = query.to_lowercase();
    records
        .iter()
        .enumerate()
        .filter(|(_, r)| type_filter.matches(r.tx_type) && matches_search(r, &query_lower))
        .map(|(i, _)| i)
        .collect()
}

/// Number of pages, never less than 1
pub fn total_pages(filtered_count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    filtered_count.div_ceil(page_size).max(1)
}

/// Half-open index range `[start, end)` of a page within the filtered view
pub fn page_bounds(filtered_count: usize, page: usize, page_size: usize) -> (usize, usize) {
    let start = page.saturating_sub(1).saturating_mul(page_size).min(filtered_count);
    let end = start.saturating_add(page_size).min(filtered_count);
    (start, end)
}

/// "start-end of total", or "0 of 0" for an empty view
pub fn results_summary(filtered_count: usize, page: usize, page_size: usize) -> String {
    if filtered_count == 0 {
        return "0 of 0".to_string();
    }
    let (start, end) = page_bounds(filtered_count, page, page_size);
    format!("{}-{} of {}", start + 1, end, filtered_count)
}

/// One entry of the pagination strip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "number")]
pub enum PageItem {
    Page(usize),
    Ellipsis,
}

/// Page numbers to show, windowed around `current` when there are many pages
pub fn pagination_strip(current: usize, total: usize) -> Vec<PageItem> {
    use PageItem::{Ellipsis, Page};

    if total <= MAX_VISIBLE_PAGES {
        return (1..=total).map(Page).collect();
    }

    if current <= 3 {
        vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(total)]
    } else if current >= total - 2 {
        vec![
            Page(1),
            Ellipsis,
            Page(total - 3),
            Page(total - 2),
            Page(total - 1),
            Page(total),
        ]
    } else {
        vec![
            Page(1),
            Ellipsis,
            Page(current - 1),
            Page(current),
            Page(current + 1),
            Ellipsis,
            Page(total),
        ]
    }
}

// ==================== Views ====================

/// A record prepared for display
#[derive(Debug, Clone, Serialize)]
pub struct RowView {
    #[serde(flatten)]
    pub record: TransactionRecord,
    pub relative_age: String,
}

/// Pagination control description
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationView {
    pub items: Vec<PageItem>,
    pub current_page: usize,
    pub total_pages: usize,
    pub prev_enabled: bool,
    pub next_enabled: bool,
}

/// Rendered list output
#[derive(Debug, Clone, Serialize)]
pub struct ListView {
    pub rows: Vec<RowView>,
    pub summary: String,
    pub pagination: PaginationView,
    pub filtered_count: usize,
    pub total_records: usize,
    pub type_filter: String,
    pub search_query: String,
    pub page_size: usize,
}

impl ListView {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Render a state against an already filtered index list
pub fn build_view(
    records: &[TransactionRecord],
    filtered: &[usize],
    state: &ListState,
    now: DateTime<Utc>,
) -> ListView {
    let filtered_count = filtered.len();
    let total = total_pages(filtered_count, state.page_size);
    let current = state.current_page.clamp(1, total);
    let (start, end) = page_bounds(filtered_count, current, state.page_size);

    let rows = filtered[start..end]
        .iter()
        .map(|&i| {
            let record = records[i].clone();
            let relative_age = record.relative_age(now);
            RowView { record, relative_age }
        })
        .collect();

    ListView {
        rows,
        summary: results_summary(filtered_count, current, state.page_size),
        pagination: PaginationView {
            items: pagination_strip(current, total),
            current_page: current,
            total_pages: total,
            prev_enabled: current > 1,
            next_enabled: current < total,
        },
        filtered_count,
        total_records: records.len(),
        type_filter: state.type_filter.to_string(),
        search_query: state.search_query.clone(),
        page_size: state.page_size,
    }
}

/// Render a stateless query; pages outside `[1, total_pages]` fall back to page 1
pub fn query_view(
    records: &[TransactionRecord],
    query: &ListQuery,
    default_page_size: usize,
    now: DateTime<Utc>,
) -> CoreResult<ListView> {
    let mut state = query.to_state(default_page_size)?;
    let filtered = filter_records(records, &state.type_filter, &state.search_query);
    let total = total_pages(filtered.len(), state.page_size);
    if state.current_page < 1 || state.current_page > total {
        state.current_page = 1;
    }
    Ok(build_view(records, &filtered, &state, now))
}

// ==================== Stateful component ====================

/// Record set plus a live filtered, paginated projection of it
#[derive(Debug, Clone)]
pub struct TransactionList {
    records: Vec<TransactionRecord>,
    state: ListState,
    filtered: Vec<usize>,
}

impl TransactionList {
    pub fn new(records: Vec<TransactionRecord>, page_size: usize) -> CoreResult<Self> {
        let state = ListState::new(page_size)?;
        let filtered = (0..records.len()).collect();
        Ok(Self { records, state, filtered })
    }

    pub fn records(&self) -> &[TransactionRecord] {
        &self.records
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    pub fn filtered_count(&self) -> usize {
        self.filtered.len()
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered.len(), self.state.page_size)
    }

    fn refilter(&mut self) {
        self.filtered = filter_records(&self.records, &self.state.type_filter, &self.state.search_query);
        self.state.current_page = 1;
    }

    /// Constrain to one type, or lift the constraint with "all"
    pub fn set_type_filter(&mut self, value: &str) {
        self.state.type_filter = TypeFilter::parse(value);
        self.refilter();
    }

    pub fn set_search_query(&mut self, text: &str) {
        self.state.search_query = text.to_string();
        self.refilter();
    }

    pub fn set_page_size(&mut self, size: usize) -> CoreResult<()> {
        if size == 0 {
            return Err(CoreError::InvalidPageSize { size });
        }
        self.state.page_size = size;
        self.state.current_page = 1;
        Ok(())
    }

    /// Move to `page` if it exists; returns whether the cursor moved
    pub fn go_to_page(&mut self, page: usize) -> bool {
        if page < 1 || page > self.total_pages() {
            return false;
        }
        let moved = self.state.current_page != page;
        self.state.current_page = page;
        moved
    }

    pub fn next_page(&mut self) -> bool {
        self.go_to_page(self.state.current_page + 1)
    }

    pub fn previous_page(&mut self) -> bool {
        match self.state.current_page.checked_sub(1) {
            Some(page) => self.go_to_page(page),
            None => false,
        }
    }

    /// Swap in a new record set, keeping the filter and search
    pub fn replace_records(&mut self, records: Vec<TransactionRecord>) {
        self.records = records;
        self.refilter();
    }

    pub fn render(&self) -> ListView {
        self.render_at(Utc::now())
    }

    pub fn render_at(&self, now: DateTime<Utc>) -> ListView {
        build_view(&self.records, &self.filtered, &self.state, now)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::types::{Chain, Token, TxStatus};
    use chrono::{Duration, TimeZone};
    use rust_decimal::Decimal;

    pub(crate) fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap()
    }

    pub(crate) fn record(i: usize, tx_type: TxType, token: Token, cents: i64) -> TransactionRecord {
        let full_hash = format!("0x{:064x}", i + 0xabc000);
        TransactionRecord {
            short_hash: TransactionRecord::shorten_hash(&full_hash),
            full_hash,
            tx_type,
            amount: Decimal::new(cents, 2),
            token,
            chain: if i % 2 == 0 { Chain::BnbChain } else { Chain::OpBnb },
            status: TxStatus::Success,
            timestamp: fixed_now() - Duration::minutes(3 * i as i64),
        }
    }

    /// 100 records cycling through types and tokens
    pub(crate) fn sample_records() -> Vec<TransactionRecord> {
        (0..100)
            .map(|i| {
                let tx_type = TxType::ALL[i % 3];
                let token = Token::KNOWN[i % 4].clone();
                record(i, tx_type, token, 1000 + i as i64 * 7)
            })
            .collect()
    }

    fn page_numbers(items: &[PageItem]) -> Vec<Option<usize>> {
        items
            .iter()
            .map(|item| match item {
                PageItem::Page(n) => Some(*n),
                PageItem::Ellipsis => None,
            })
            .collect()
    }

    #[test]
    fn test_type_filter_parse() {
        assert_eq!(TypeFilter::parse("all"), TypeFilter::All);
        assert_eq!(TypeFilter::parse("Subscription"), TypeFilter::Only(TxType::Subscription));
        assert_eq!(TypeFilter::parse("402Pay"), TypeFilter::Only(TxType::MeteredRequest));
        assert_eq!(TypeFilter::parse("Refund"), TypeFilter::Unrecognized("Refund".to_string()));
        assert_eq!(TypeFilter::parse("402Pay").to_string(), "402Pay");
    }

    #[test]
    fn test_type_filter_requires_exact_label() {
        assert_eq!(TypeFilter::parse("payment"), TypeFilter::Unrecognized("payment".to_string()));
        assert_eq!(TypeFilter::parse("402pay"), TypeFilter::Unrecognized("402pay".to_string()));
        assert_eq!(TypeFilter::parse("metered"), TypeFilter::Unrecognized("metered".to_string()));
        assert_eq!(TypeFilter::parse("ALL"), TypeFilter::Unrecognized("ALL".to_string()));

        let mut list = TransactionList::new(sample_records(), 10).unwrap();
        list.set_type_filter("payment");
        assert_eq!(list.filtered_count(), 0);
        list.set_type_filter("Payment");
        assert_eq!(list.filtered_count(), 34);
    }

    #[test]
    fn test_filter_never_grows_and_respects_predicate() {
        let records = sample_records();
        for filter in ["all", "Payment", "402Pay", "Subscription", "Nope"] {
            for query in ["", "usdc", "bnb", "0x", "zzz", "12"] {
                let type_filter = TypeFilter::parse(filter);
                let filtered = filter_records(&records, &type_filter, query);
                assert!(filtered.len() <= records.len());
                for &i in &filtered {
                    assert!(type_filter.matches(records[i].tx_type));
                    assert!(matches_search(&records[i], &query.to_lowercase()));
                }
                assert!(filtered.windows(2).all(|w| w[0] < w[1]));
            }
        }
    }

    #[test]
    fn test_unrecognized_filter_is_empty() {
        let mut list = TransactionList::new(sample_records(), 10).unwrap();
        list.set_type_filter("Refund");
        assert_eq!(list.filtered_count(), 0);
        let view = list.render_at(fixed_now());
        assert!(view.is_empty());
        assert_eq!(view.summary, "0 of 0");
    }

    #[test]
    fn test_search_fields() {
        let records = sample_records();
        let r = &records[5];
        let q = |s: &str| matches_search(r, &s.to_lowercase());
        assert!(q(&r.full_hash[10..20]));
        assert!(q(&r.short_hash));
        assert!(q(r.tx_type.label()));
        assert!(q(r.token.code()));
        assert!(q(r.chain.name()));
        assert!(q(&r.amount_search_text()));
        assert!(q(""));
    }

    #[test]
    fn test_search_amount_uses_normalised_text() {
        let r = record(0, TxType::Payment, Token::Usdt, 1250);
        assert!(matches_search(&r, "12.5"));
        assert!(!matches_search(&r, "12.50"));
    }

    #[test]
    fn test_search_case_insensitive() {
        let records = sample_records();
        let lower = filter_records(&records, &TypeFilter::All, "usdc");
        let upper = filter_records(&records, &TypeFilter::All, "USDC");
        assert!(!lower.is_empty());
        assert_eq!(lower, upper);
    }

    #[test]
    fn test_filter_and_search_commute() {
        let records = sample_records();

        let mut a = TransactionList::new(records.clone(), 10).unwrap();
        a.set_type_filter("Payment");
        a.set_search_query("bnb");

        let mut b = TransactionList::new(records, 10).unwrap();
        b.set_search_query("bnb");
        b.set_type_filter("Payment");
        b.set_type_filter("Payment");

        assert_eq!(a.filtered, b.filtered);
        assert!(a
            .filtered
            .iter()
            .all(|&i| a.records()[i].tx_type == TxType::Payment));
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(100, 10), 10);
        assert_eq!(total_pages(100, 25), 4);
        assert_eq!(total_pages(7, 1), 7);
        for count in 0..50 {
            for size in 1..12 {
                let expected = std::cmp::max(1, (count + size - 1) / size);
                assert_eq!(total_pages(count, size), expected);
            }
        }
    }

    #[test]
    fn test_results_summary() {
        assert_eq!(results_summary(0, 1, 10), "0 of 0");
        assert_eq!(results_summary(100, 1, 10), "1-10 of 100");
        assert_eq!(results_summary(95, 10, 10), "91-95 of 95");
        assert_eq!(results_summary(3, 1, 25), "1-3 of 3");
    }

    #[test]
    fn test_pagination_strip_short() {
        assert_eq!(page_numbers(&pagination_strip(1, 1)), vec![Some(1)]);
        assert_eq!(
            page_numbers(&pagination_strip(2, 5)),
            vec![Some(1), Some(2), Some(3), Some(4), Some(5)]
        );
    }

    #[test]
    fn test_pagination_strip_windows() {
        assert_eq!(
            page_numbers(&pagination_strip(1, 10)),
            vec![Some(1), Some(2), Some(3), Some(4), None, Some(10)]
        );
        assert_eq!(
            page_numbers(&pagination_strip(3, 10)),
            vec![Some(1), Some(2), Some(3), Some(4), None, Some(10)]
        );
        assert_eq!(
            page_numbers(&pagination_strip(5, 10)),
            vec![Some(1), None, Some(4), Some(5), Some(6), None, Some(10)]
        );
        assert_eq!(
            page_numbers(&pagination_strip(8, 10)),
            vec![Some(1), None, Some(7), Some(8), Some(9), Some(10)]
        );
        assert_eq!(
            page_numbers(&pagination_strip(10, 10)),
            vec![Some(1), None, Some(7), Some(8), Some(9), Some(10)]
        );
    }

    #[test]
    fn test_pagination_strip_always_has_first_and_last() {
        for total in 1..30 {
            for current in 1..=total {
                let items = pagination_strip(current, total);
                assert_eq!(items.first(), Some(&PageItem::Page(1)));
                assert_eq!(items.last(), Some(&PageItem::Page(total)));
                assert!(items.contains(&PageItem::Page(current)));
            }
        }
    }

    #[test]
    fn test_first_page_of_hundred() {
        let records = sample_records();
        let list = TransactionList::new(records.clone(), 10).unwrap();
        let view = list.render_at(fixed_now());

        assert_eq!(view.rows.len(), 10);
        for (row, expected) in view.rows.iter().zip(&records[0..10]) {
            assert_eq!(&row.record, expected);
        }
        assert_eq!(view.summary, "1-10 of 100");
        assert_eq!(
            page_numbers(&view.pagination.items),
            vec![Some(1), Some(2), Some(3), Some(4), None, Some(10)]
        );
        assert!(!view.pagination.prev_enabled);
        assert!(view.pagination.next_enabled);
        assert_eq!(view.rows[1].relative_age, "3m ago");
    }

    #[test]
    fn test_filter_and_search_reset_page() {
        let mut list = TransactionList::new(sample_records(), 10).unwrap();
        assert!(list.go_to_page(4));
        list.set_type_filter("all");
        assert_eq!(list.state().current_page, 1);

        assert!(list.go_to_page(3));
        list.set_search_query("");
        assert_eq!(list.state().current_page, 1);
    }

    #[test]
    fn test_go_to_page_idempotent() {
        let mut list = TransactionList::new(sample_records(), 10).unwrap();
        assert!(list.go_to_page(6));
        let first = list.render_at(fixed_now());
        assert!(!list.go_to_page(6));
        let second = list.render_at(fixed_now());
        assert_eq!(first.summary, second.summary);
        assert_eq!(first.summary, "51-60 of 100");
        let a: Vec<_> = first.rows.iter().map(|r| r.record.full_hash.clone()).collect();
        let b: Vec<_> = second.rows.iter().map(|r| r.record.full_hash.clone()).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_go_to_page_out_of_range_is_noop() {
        let mut list = TransactionList::new(sample_records(), 10).unwrap();
        assert!(list.go_to_page(2));
        assert!(!list.go_to_page(0));
        assert_eq!(list.state().current_page, 2);
        assert!(!list.go_to_page(list.total_pages() + 1));
        assert_eq!(list.state().current_page, 2);
    }

    #[test]
    fn test_next_and_previous_at_bounds() {
        let mut list = TransactionList::new(sample_records(), 50).unwrap();
        assert!(!list.previous_page());
        assert_eq!(list.state().current_page, 1);
        assert!(list.next_page());
        assert_eq!(list.state().current_page, 2);
        assert!(!list.next_page());
        assert_eq!(list.state().current_page, 2);
        assert!(list.previous_page());
        assert_eq!(list.state().current_page, 1);
    }

    #[test]
    fn test_page_size_change_keeps_cursor_in_range() {
        let mut list = TransactionList::new(sample_records(), 10).unwrap();
        assert!(list.go_to_page(10));
        list.set_page_size(100).unwrap();
        assert_eq!(list.total_pages(), 1);
        assert!(list.state().current_page <= list.total_pages());
        let view = list.render_at(fixed_now());
        assert_eq!(view.rows.len(), 100);
        assert_eq!(view.summary, "1-100 of 100");
    }

    #[test]
    fn test_page_size_zero_rejected() {
        let mut list = TransactionList::new(sample_records(), 10).unwrap();
        assert!(matches!(list.set_page_size(0), Err(CoreError::InvalidPageSize { size: 0 })));
        assert_eq!(list.state().page_size, 10);
        assert!(TransactionList::new(vec![], 0).is_err());
    }

    #[test]
    fn test_subscription_with_unmatched_query() {
        let mut list = TransactionList::new(sample_records(), 10).unwrap();
        list.set_type_filter("Subscription");
        list.set_search_query("no-such-hash");
        let view = list.render_at(fixed_now());
        assert!(view.rows.is_empty());
        assert_eq!(view.summary, "0 of 0");
        assert_eq!(view.pagination.total_pages, 1);
        assert_eq!(view.pagination.current_page, 1);
        assert!(!view.pagination.prev_enabled);
        assert!(!view.pagination.next_enabled);
        assert_eq!(page_numbers(&view.pagination.items), vec![Some(1)]);
    }

    #[test]
    fn test_empty_record_set() {
        let list = TransactionList::new(vec![], 10).unwrap();
        let view = list.render_at(fixed_now());
        assert_eq!(view.summary, "0 of 0");
        assert_eq!(view.total_records, 0);
        assert_eq!(view.pagination.total_pages, 1);
    }

    #[test]
    fn test_last_partial_page() {
        let mut list = TransactionList::new(sample_records(), 25).unwrap();
        list.set_type_filter("Payment");
        // indices 0, 3, 6, ... 99 -> 34 payments
        assert_eq!(list.filtered_count(), 34);
        assert!(list.go_to_page(2));
        let view = list.render_at(fixed_now());
        assert_eq!(view.rows.len(), 9);
        assert_eq!(view.summary, "26-34 of 34");
        assert!(!view.pagination.next_enabled);
        assert!(view.pagination.prev_enabled);
    }

    #[test]
    fn test_replace_records_reapplies_filter() {
        let mut list = TransactionList::new(sample_records(), 10).unwrap();
        list.set_type_filter("402Pay");
        assert!(list.go_to_page(2));

        let fresh: Vec<_> = sample_records().into_iter().take(9).collect();
        list.replace_records(fresh);
        assert_eq!(list.state().current_page, 1);
        assert_eq!(list.state().type_filter, TypeFilter::Only(TxType::MeteredRequest));
        assert_eq!(list.filtered_count(), 3);
    }

    #[test]
    fn test_query_view() {
        let records = sample_records();
        let query = ListQuery {
            type_filter: Some("Subscription".to_string()),
            q: None,
            page: Some(2),
            per_page: Some(10),
        };
        let view = query_view(&records, &query, 25, fixed_now()).unwrap();
        assert_eq!(view.filtered_count, 33);
        assert_eq!(view.summary, "11-20 of 33");
        assert_eq!(view.type_filter, "Subscription");

        let out_of_range = ListQuery { page: Some(99), ..query.clone() };
        let view = query_view(&records, &out_of_range, 25, fixed_now()).unwrap();
        assert_eq!(view.pagination.current_page, 1);

        let defaults = query_view(&records, &ListQuery::default(), 25, fixed_now()).unwrap();
        assert_eq!(defaults.page_size, 25);
        assert_eq!(defaults.summary, "1-25 of 100");

        let zero = ListQuery { per_page: Some(0), ..ListQuery::default() };
        assert!(query_view(&records, &zero, 25, fixed_now()).is_err());
    }
}
