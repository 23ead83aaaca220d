//! Transactions page rendering - Full page endpoint
//!
//! The page holds the search box, per-page selector and stat cards; the
//! list itself is loaded into `#transactions-content` by the fragment routes.

use crate::AppState;
use txboard_core::TransactionStats;
use txboard_utils::{escape_html, format_number};

/// Transactions page - Main page with search, filter and pagination controls
pub async fn page_transactions(
    state: axum::extract::State<AppState>,
    headers: axum::http::HeaderMap,
) -> axum::response::Html<String> {
    let list = state.list.read().await;
    let stats = TransactionStats::from_records(list.records());
    let list_state = list.state();

    let page_size_options: String = state
        .config
        .pagination
        .page_size_options
        .iter()
        .map(|n| {
            let selected = if *n == list_state.page_size { " selected" } else { "" };
            format!("<option value='{}'{}>{} / page</option>", n, selected, n)
        })
        .collect();

    let inner_content = format!(
        r#"<div class='flex items-center justify-between mb-4'>
            <h2 class='text-2xl font-bold'>Transactions</h2>
            <div class='flex gap-2'>
                <button onclick='reloadRecords()' class='px-4 py-2 bg-gray-100 text-gray-700 rounded-lg hover:bg-gray-200' title='Reload records'>
                    Reload
                </button>
                <input type='search' name='q' value='{}' placeholder='Search hash, type, amount, token...'
                    hx-get='/transactions/search' hx-target='#transactions-content' hx-trigger='keyup changed delay:300ms, search'
                    class='px-4 py-2 border rounded-lg w-72'>
                <select name='limit' hx-get='/transactions/per-page' hx-target='#transactions-content' hx-trigger='change'
                    class='px-4 py-2 border rounded-lg'>
                    {}
                </select>
            </div>
        </div>
        <div class='grid grid-cols-2 md:grid-cols-4 gap-3 mb-4'>
            <div class='bg-amber-50 p-3 rounded-lg border border-amber-100'><p class='text-xs text-amber-600'>Transactions</p><p class='text-xl font-bold'>{}</p></div>
            <div class='bg-green-50 p-3 rounded-lg border border-green-100'><p class='text-xs text-green-600'>Success rate</p><p class='text-xl font-bold'>{}%</p></div>
            <div class='bg-yellow-50 p-3 rounded-lg border border-yellow-100'><p class='text-xs text-yellow-600'>Pending</p><p class='text-xl font-bold'>{}</p></div>
            <div class='bg-red-50 p-3 rounded-lg border border-red-100'><p class='text-xs text-red-600'>Failed</p><p class='text-xl font-bold'>{}</p></div>
        </div>
        <div id='transactions-content' hx-get='/transactions/list' hx-trigger='load' class='bg-white rounded-xl shadow-sm p-6'>
            <p class='text-gray-500 text-center'>Loading...</p>
        </div>
        <script>
        function reloadRecords() {{
            fetch('/api/reload', {{method: 'POST'}})
                .then(r => r.json())
                .then(data => {{
                    if (data.success) {{
                        htmx.ajax('GET', '/transactions/list', '#transactions-content');
                    }} else {{
                        alert('Reload failed: ' + data.message);
                    }}
                }})
                .catch(e => alert('Reload failed: ' + e));
        }}
        </script>"#,
        escape_html(&list_state.search_query),
        page_size_options,
        format_number(stats.total_transactions),
        format!("{:.1}", stats.success_rate),
        stats.status_count("Pending"),
        stats.status_count("Failed")
    );

    axum::response::Html(crate::page_response(&headers, "Transactions", "/transactions", &inner_content))
}
