//! Dashboard page rendering - Statistics panel

use crate::AppState;
use txboard_core::TransactionStats;
use txboard_utils::{escape_html, format_number};

/// Dashboard page - headline figures plus statistics computed from the record set
pub async fn page_dashboard(
    state: axum::extract::State<AppState>,
    headers: axum::http::HeaderMap,
) -> axum::response::Html<String> {
    let list = state.list.read().await;
    let stats = TransactionStats::from_records(list.records());

    let headline: Vec<String> = state.config.stats.headline.iter().map(|entry| {
        format!(
            "<div class='stat-card bg-white p-4 rounded-lg border'><p class='text-2xl font-bold text-amber-500'>{}</p><p class='text-sm text-gray-500'>{}</p></div>",
            escape_html(&entry.value),
            escape_html(&entry.label)
        )
    }).collect();

    let by_type: Vec<String> = stats.by_type.iter().map(|c| {
        format!("<div class='flex justify-between py-2 border-b'><span>{}</span><span class='font-medium'>{}</span></div>", c.label, format_number(c.count))
    }).collect();

    let volumes: Vec<String> = stats.volume_by_token.iter().map(|v| {
        format!(
            "<div class='flex justify-between py-2 border-b'><span>{}</span><span class='font-medium'>{}</span></div>",
            escape_html(&v.token),
            format_number(format!("{:.2}", v.volume.round_dp(2)))
        )
    }).collect();

    let inner_content = format!(
        r#"<div class='mb-6'><h2 class='text-2xl font-bold'>Dashboard</h2></div>
        <div class='grid grid-cols-2 lg:grid-cols-4 gap-4 mb-6'>{}</div>
        <div class='grid grid-cols-1 lg:grid-cols-3 gap-6'>
            <div class='bg-white rounded-xl shadow-sm p-6'>
                <h3 class='text-lg font-semibold mb-4'>Overview</h3>
                <div class='grid grid-cols-2 gap-4'>
                    <div class='text-center p-4 bg-gray-50 rounded-lg'><p class='text-sm text-gray-600'>Transactions</p><p class='text-xl font-bold'>{}</p></div>
                    <div class='text-center p-4 bg-gray-50 rounded-lg'><p class='text-sm text-gray-600'>Success rate</p><p class='text-xl font-bold text-green-600'>{}%</p></div>
                    <div class='text-center p-4 bg-gray-50 rounded-lg'><p class='text-sm text-gray-600'>Pending</p><p class='text-xl font-bold text-yellow-600'>{}</p></div>
                    <div class='text-center p-4 bg-gray-50 rounded-lg'><p class='text-sm text-gray-600'>Failed</p><p class='text-xl font-bold text-red-600'>{}</p></div>
                </div>
            </div>
            <div class='bg-white rounded-xl shadow-sm p-6'>
                <h3 class='text-lg font-semibold mb-4'>By type</h3>
                <div class='space-y-1'>{}</div>
            </div>
            <div class='bg-white rounded-xl shadow-sm p-6'>
                <h3 class='text-lg font-semibold mb-4'>Volume by token</h3>
                <div class='space-y-1'>{}</div>
            </div>
        </div>
        <div class='mt-6 text-right'><a href='/transactions' class='text-amber-600 hover:underline'>View all transactions</a></div>"#,
        headline.join(""),
        format_number(stats.total_transactions),
        format!("{:.1}", stats.success_rate),
        stats.status_count("Pending"),
        stats.status_count("Failed"),
        by_type.join(""),
        volumes.join("")
    );

    axum::response::Html(crate::page_response(&headers, "Dashboard", "/dashboard", &inner_content))
}
