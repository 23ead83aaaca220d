//! Transactions API endpoints - JSON API and HTMX partial responses
//!
//! Endpoints:
//! - api_transactions: Stateless filtered page (JSON)
//! - htmx_transactions_list: Current list state (HTML fragment)
//! - htmx_transactions_search: Set search query (HTML fragment)
//! - htmx_transactions_filter: Set type filter (HTML fragment)
//! - htmx_transactions_per_page: Set page size (HTML fragment)
//! - htmx_transactions_page / next / prev: Move the page cursor (HTML fragment)

use crate::{ApiError, AppState};
use axum::extract::{Path, Query};
use axum::response::Html;
use chrono::Utc;
use std::collections::HashMap;
use txboard_core::{query_view, ListQuery, ListView, PageItem, PaginationView, RowView, TxType, ALL_TYPES};
use txboard_utils::{escape_html, format_number};

/// Target element swapped by every list fragment
const LIST_TARGET: &str = "#transactions-content";

/// Get one filtered page without touching the shared list state (JSON API)
pub async fn api_transactions(
    state: axum::extract::State<AppState>,
    params: Query<ListQuery>,
) -> Result<axum::Json<ListView>, ApiError> {
    let list = state.list.read().await;
    let view = query_view(
        list.records(),
        &params,
        state.config.pagination.default_page_size,
        Utc::now(),
    )?;
    Ok(axum::Json(view))
}

/// HTMX: Render the current list state
pub async fn htmx_transactions_list(state: axum::extract::State<AppState>) -> Html<String> {
    let list = state.list.read().await;
    Html(render_list(&list.render()))
}

/// HTMX: Set the search query and return to page 1
pub async fn htmx_transactions_search(
    state: axum::extract::State<AppState>,
    params: Query<HashMap<String, String>>,
) -> Html<String> {
    let query = params.get("q").map(|s| s.as_str()).unwrap_or("");
    let mut list = state.list.write().await;
    list.set_search_query(query);
    log::debug!("Search query set to {:?}, {} matches", query, list.filtered_count());
    Html(render_list(&list.render()))
}

/// HTMX: Set the type filter and return to page 1
pub async fn htmx_transactions_filter(
    state: axum::extract::State<AppState>,
    params: Query<HashMap<String, String>>,
) -> Html<String> {
    let filter = params.get("type").map(|s| s.as_str()).unwrap_or(ALL_TYPES);
    let mut list = state.list.write().await;
    list.set_type_filter(filter);
    log::debug!("Type filter set to {}, {} matches", list.state().type_filter, list.filtered_count());
    Html(render_list(&list.render()))
}

/// HTMX: Change the page size to one of the configured options
pub async fn htmx_transactions_per_page(
    state: axum::extract::State<AppState>,
    params: Query<HashMap<String, String>>,
) -> Result<Html<String>, ApiError> {
    let options = &state.config.pagination;
    let size = match params.get("limit").and_then(|s| s.parse::<usize>().ok()) {
        Some(n) if options.is_allowed(n) => n,
        _ => {
            return Err(ApiError::BadRequest {
                message: format!("limit must be one of {:?}", options.page_size_options),
            })
        }
    };

    let mut list = state.list.write().await;
    list.set_page_size(size)?;
    Ok(Html(render_list(&list.render())))
}

/// HTMX: Jump to a page; out-of-range pages leave the cursor where it is
pub async fn htmx_transactions_page(
    state: axum::extract::State<AppState>,
    path: Path<usize>,
) -> Html<String> {
    let mut list = state.list.write().await;
    if !list.go_to_page(path.0) {
        log::debug!("Page {} ignored, {} pages available", path.0, list.total_pages());
    }
    Html(render_list(&list.render()))
}

/// HTMX: Next page
pub async fn htmx_transactions_next(state: axum::extract::State<AppState>) -> Html<String> {
    let mut list = state.list.write().await;
    list.next_page();
    Html(render_list(&list.render()))
}

/// HTMX: Previous page
pub async fn htmx_transactions_prev(state: axum::extract::State<AppState>) -> Html<String> {
    let mut list = state.list.write().await;
    list.previous_page();
    Html(render_list(&list.render()))
}

// ==================== Fragment Rendering ====================

/// Render the list container: type filter buttons, table, summary and pagination
pub fn render_list(view: &ListView) -> String {
    let body = if view.is_empty() {
        render_empty_state()
    } else {
        render_table(&view.rows)
    };

    format!(
        r#"<div id='tx-list' class='space-y-4'>
            {}
            {}
            <div class='flex items-center justify-between pt-4 border-t'>
                <p id='results-summary' class='text-sm text-gray-500'>Showing {}</p>
                {}
            </div>
        </div>"#,
        render_type_filter(&view.type_filter),
        body,
        escape_html(&view.summary),
        render_pagination(&view.pagination)
    )
}

fn render_type_filter(active: &str) -> String {
    let mut html = String::from("<div class='flex gap-2'>");
    for value in std::iter::once(ALL_TYPES).chain(TxType::ALL.iter().map(TxType::label)) {
        let label = if value == ALL_TYPES { "All" } else { value };
        let class = if value == active {
            "bg-amber-500 text-white"
        } else {
            "bg-gray-100 text-gray-700 hover:bg-gray-200"
        };
        html.push_str(&format!(
            r#"<button class='filter-btn px-3 py-1.5 rounded-lg text-sm {}' hx-get='/transactions/filter?type={}' hx-target='{}'>{}</button>"#,
            class,
            urlencoding::encode(value),
            LIST_TARGET,
            label
        ));
    }
    html.push_str("</div>");
    html
}

fn render_table(rows: &[RowView]) -> String {
    let mut html = String::from(
        r#"<div class='overflow-x-auto'><table class='w-full'>
            <thead><tr class='text-left text-xs uppercase text-gray-500 border-b'>
                <th class='py-3 px-4'>Hash</th>
                <th class='py-3 px-4'>Type</th>
                <th class='py-3 px-4 text-right'>Amount</th>
                <th class='py-3 px-4'>Chain</th>
                <th class='py-3 px-4'>Status</th>
                <th class='py-3 px-4'>Time</th>
            </tr></thead><tbody>"#,
    );
    for row in rows {
        html.push_str(&render_row(row));
    }
    html.push_str("</tbody></table></div>");
    html
}

fn render_row(row: &RowView) -> String {
    let r = &row.record;
    format!(
        r#"<tr class='tx-row border-b hover:bg-gray-50'>
            <td class='py-3 px-4 font-mono text-sm' title='{}'>{}</td>
            <td class='py-3 px-4'><span class='px-2 py-1 rounded-full text-xs {}'>{}</span></td>
            <td class='py-3 px-4 text-right font-medium'>{} <span class='text-gray-500'>{}</span></td>
            <td class='py-3 px-4 text-sm'>{}</td>
            <td class='py-3 px-4'><span class='px-2 py-1 rounded-full text-xs {}'>{}</span></td>
            <td class='py-3 px-4 text-sm text-gray-500'>{}</td>
        </tr>"#,
        escape_html(&r.full_hash),
        escape_html(&r.short_hash),
        r.tx_type.badge_class(),
        r.tx_type.label(),
        format_number(r.amount_display()),
        escape_html(r.token.code()),
        escape_html(r.chain.name()),
        r.status.badge_class(),
        r.status.label(),
        escape_html(&row.relative_age)
    )
}

fn render_empty_state() -> String {
    r#"<div id='empty-state' class='text-center py-12 text-gray-500'>
            <p class='text-lg font-medium'>No transactions found</p>
            <p class='text-sm'>Try a different search or filter</p>
        </div>"#
        .to_string()
}

fn render_pagination(pagination: &PaginationView) -> String {
    let nav_button = |href: &str, label: &str, enabled: bool| {
        if enabled {
            format!(
                r#"<button class='px-3 py-1.5 rounded-lg text-sm hover:bg-gray-100' hx-get='{}' hx-target='{}'>{}</button>"#,
                href, LIST_TARGET, label
            )
        } else {
            format!(
                r#"<button class='px-3 py-1.5 rounded-lg text-sm text-gray-300 cursor-not-allowed' disabled>{}</button>"#,
                label
            )
        }
    };

    let mut html = String::from("<div id='pagination' class='flex items-center gap-1'>");
    html.push_str(&nav_button("/transactions/prev", "Prev", pagination.prev_enabled));
    for item in &pagination.items {
        match item {
            PageItem::Page(n) if *n == pagination.current_page => html.push_str(&format!(
                r#"<button class='page-btn px-3 py-1.5 rounded-lg text-sm bg-amber-500 text-white' aria-current='page'>{}</button>"#,
                n
            )),
            PageItem::Page(n) => html.push_str(&format!(
                r#"<button class='page-btn px-3 py-1.5 rounded-lg text-sm hover:bg-gray-100' hx-get='/transactions/page/{}' hx-target='{}'>{}</button>"#,
                n, LIST_TARGET, n
            )),
            PageItem::Ellipsis => html.push_str("<span class='px-2 text-gray-400'>…</span>"),
        }
    }
    html.push_str(&nav_button("/transactions/next", "Next", pagination.next_enabled));
    html.push_str("</div>");
    html
}

#[cfg(test)]
mod tests {
    use crate::tests::{get, test_state};
    use crate::{create_router, AppState};
    use axum::http::StatusCode;
    use chrono::Utc;
    use std::sync::Arc;
    use txboard_config::Config;
    use txboard_core::{MockSource, Token, TransactionList};

    fn row_count(body: &str) -> usize {
        body.matches("tx-row").count()
    }

    #[tokio::test]
    async fn test_list_first_page() {
        let app = create_router(test_state(100));
        let (status, body) = get(&app, "/transactions/list").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(row_count(&body), 10);
        assert!(body.contains("Showing 1-10 of 100"));
        assert!(body.contains("hx-get='/transactions/page/4'"));
        assert!(body.contains("hx-get='/transactions/page/10'"));
        assert!(!body.contains("hx-get='/transactions/page/5'"));
        assert!(body.contains("…"));
        assert!(!body.contains("hx-get='/transactions/prev'"));
        assert!(body.contains("hx-get='/transactions/next'"));
    }

    #[tokio::test]
    async fn test_next_and_prev() {
        let app = create_router(test_state(100));
        let (_, body) = get(&app, "/transactions/next").await;
        assert!(body.contains("11-20 of 100"));
        let (_, body) = get(&app, "/transactions/prev").await;
        assert!(body.contains("1-10 of 100"));
        let (_, body) = get(&app, "/transactions/prev").await;
        assert!(body.contains("1-10 of 100"));
    }

    #[tokio::test]
    async fn test_go_to_page_out_of_range_is_ignored() {
        let app = create_router(test_state(100));
        let (_, body) = get(&app, "/transactions/page/6").await;
        assert!(body.contains("51-60 of 100"));
        assert!(body.contains("hx-get='/transactions/page/5'"));
        assert!(body.contains("hx-get='/transactions/page/7'"));

        let (_, body) = get(&app, "/transactions/page/11").await;
        assert!(body.contains("51-60 of 100"));
        let (_, body) = get(&app, "/transactions/page/0").await;
        assert!(body.contains("51-60 of 100"));
    }

    #[tokio::test]
    async fn test_per_page() {
        let app = create_router(test_state(100));
        let (_, _) = get(&app, "/transactions/page/3").await;

        let (status, body) = get(&app, "/transactions/per-page?limit=25").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(row_count(&body), 25);
        assert!(body.contains("1-25 of 100"));

        let (status, _) = get(&app, "/transactions/per-page?limit=7").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let (status, _) = get(&app, "/transactions/per-page?limit=abc").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let (status, _) = get(&app, "/transactions/per-page").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (_, body) = get(&app, "/transactions/list").await;
        assert!(body.contains("1-25 of 100"));
    }

    #[tokio::test]
    async fn test_search_resets_page() {
        let state = test_state(100);
        let app = create_router(state.clone());
        let (_, _) = get(&app, "/transactions/page/4").await;

        let (status, body) = get(&app, "/transactions/search?q=usdc").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(state.list.read().await.state().current_page, 1);
        let count = state.list.read().await.filtered_count();
        assert!(count > 0);
        assert!(body.contains(&format!("of {}", count)));
    }

    #[tokio::test]
    async fn test_filter_with_unmatched_search() {
        let app = create_router(test_state(100));
        let (_, _) = get(&app, "/transactions/filter?type=Subscription").await;
        let (_, body) = get(&app, "/transactions/search?q=no-such-hash").await;
        assert!(body.contains("No transactions found"));
        assert!(body.contains("Showing 0 of 0"));
        assert_eq!(row_count(&body), 0);
        assert!(!body.contains("hx-get='/transactions/next'"));
    }

    #[tokio::test]
    async fn test_filter_by_type() {
        let state = test_state(100);
        let app = create_router(state.clone());
        let (_, body) = get(&app, "/transactions/filter?type=402Pay").await;
        let list = state.list.read().await;
        let expected = list
            .records()
            .iter()
            .filter(|r| r.tx_type == txboard_core::TxType::MeteredRequest)
            .count();
        assert_eq!(list.filtered_count(), expected);
        assert!(body.contains("class='filter-btn px-3 py-1.5 rounded-lg text-sm bg-amber-500 text-white' hx-get='/transactions/filter?type=402Pay'"));
    }

    #[tokio::test]
    async fn test_filter_is_case_sensitive() {
        let app = create_router(test_state(100));
        let (status, body) = get(&app, "/transactions/filter?type=payment").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Showing 0 of 0"));
        assert!(!body.contains("bg-amber-500 text-white' hx-get='/transactions/filter?type=Payment'"));

        let (_, body) = get(&app, "/api/transactions?type=SUBSCRIPTION").await;
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["filtered_count"], 0);
    }

    #[tokio::test]
    async fn test_unknown_filter_is_empty() {
        let app = create_router(test_state(100));
        let (status, body) = get(&app, "/transactions/filter?type=Refund").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("No transactions found"));
        assert!(body.contains("Showing 0 of 0"));
    }

    #[tokio::test]
    async fn test_record_text_is_escaped() {
        let mut records = MockSource::new(3, Some(9)).generate_at(Utc::now());
        records[0].token = Token::Other("<b>x</b>".to_string());
        records[0].full_hash = "0x'onmouseover".to_string();
        let list = TransactionList::new(records, 10).unwrap();
        let state = AppState::new(list, Arc::new(MockSource::new(3, Some(9))), Config::default());
        let app = create_router(state);

        let (_, body) = get(&app, "/transactions/list").await;
        assert!(body.contains("&lt;b&gt;x&lt;/b&gt;"));
        assert!(!body.contains("<b>x</b>"));
        assert!(body.contains("title='0x&#39;onmouseover'"));
    }

    #[tokio::test]
    async fn test_api_transactions_is_stateless() {
        let app = create_router(test_state(100));

        let (status, body) = get(&app, "/api/transactions?per_page=25&page=2").await;
        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["summary"], "26-50 of 100");
        assert_eq!(json["rows"].as_array().unwrap().len(), 25);
        assert_eq!(json["pagination"]["total_pages"], 4);

        let (_, body) = get(&app, "/transactions/list").await;
        assert!(body.contains("1-10 of 100"));
    }

    #[tokio::test]
    async fn test_api_transactions_filters() {
        let app = create_router(test_state(100));

        let (_, body) = get(&app, "/api/transactions?type=Payment&per_page=100").await;
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        let rows = json["rows"].as_array().unwrap();
        assert!(rows.iter().all(|r| r["tx_type"] == "Payment"));
        assert_eq!(json["type_filter"], "Payment");

        let (_, lower) = get(&app, "/api/transactions?q=usdc").await;
        let (_, upper) = get(&app, "/api/transactions?q=USDC").await;
        let lower: serde_json::Value = serde_json::from_str(&lower).unwrap();
        let upper: serde_json::Value = serde_json::from_str(&upper).unwrap();
        assert_eq!(lower["filtered_count"], upper["filtered_count"]);
        assert_eq!(lower["summary"], upper["summary"]);
    }

    #[tokio::test]
    async fn test_api_transactions_page_fallback_and_errors() {
        let app = create_router(test_state(100));

        let (_, body) = get(&app, "/api/transactions?page=99").await;
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["summary"], "1-10 of 100");
        assert_eq!(json["pagination"]["current_page"], 1);

        let (status, _) = get(&app, "/api/transactions?per_page=0").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
