//! Settings page rendering - Full page endpoints

use crate::AppState;
use txboard_config::SourceKind;
use txboard_utils::escape_html;

pub async fn page_settings(
    state: axum::extract::State<AppState>,
    headers: axum::http::HeaderMap,
) -> axum::response::Html<String> {
    let config = &state.config;

    let source_details = match config.data.source {
        SourceKind::Mock => format!(
            r#"<div><p class='text-sm text-gray-500'>Mock records</p><p class='font-medium'>{}</p></div>
                <div><p class='text-sm text-gray-500'>Seed</p><p class='font-medium'>{}</p></div>"#,
            config.data.mock.count,
            config.data.mock.seed.map(|s| s.to_string()).unwrap_or_else(|| "random".to_string())
        ),
        SourceKind::Remote => format!(
            r#"<div><p class='text-sm text-gray-500'>Base URL</p><p class='font-medium'>{}</p></div>
                <div><p class='text-sm text-gray-500'>Timeout</p><p class='font-medium'>{}s</p></div>"#,
            escape_html(&config.data.remote.base_url),
            config.data.remote.timeout_secs
        ),
    };

    let refresh = match config.refresh_interval() {
        Some(period) => format!("every {}s", period.as_secs()),
        None => "disabled".to_string(),
    };

    let options: Vec<String> = config.pagination.page_size_options.iter().map(|n| n.to_string()).collect();

    let inner_content = format!(
        r#"<div class='mb-6'><h2 class='text-2xl font-bold'>Settings</h2></div>
        <div class='bg-white rounded-xl shadow-sm p-6 mb-6'>
            <h3 class='text-lg font-semibold mb-4'>Server</h3>
            <div class='grid grid-cols-2 gap-4 mb-4'>
                <div><p class='text-sm text-gray-500'>Host</p><p class='font-medium'>{}</p></div>
                <div><p class='text-sm text-gray-500'>Port</p><p class='font-medium'>{}</p></div>
            </div>
        </div>
        <div class='bg-white rounded-xl shadow-sm p-6 mb-6'>
            <h3 class='text-lg font-semibold mb-4'>Data</h3>
            <div class='grid grid-cols-2 gap-4 mb-4'>
                <div><p class='text-sm text-gray-500'>Source</p><p class='font-medium'>{}</p></div>
                <div><p class='text-sm text-gray-500'>Refresh</p><p class='font-medium'>{}</p></div>
                {}
            </div>
        </div>
        <div class='bg-white rounded-xl shadow-sm p-6 mb-6'>
            <h3 class='text-lg font-semibold mb-4'>Pagination</h3>
            <div class='grid grid-cols-2 gap-4'>
                <div><p class='text-sm text-gray-500'>Default page size</p><p class='font-medium'>{}</p></div>
                <div><p class='text-sm text-gray-500'>Page size options</p><p class='font-medium'>{}</p></div>
            </div>
        </div>
        <div class='bg-white rounded-xl shadow-sm p-6'>
            <h3 class='text-lg font-semibold mb-4'>Logging</h3>
            <div><p class='text-sm text-gray-500'>Level</p><p class='font-medium'>{}</p></div>
        </div>"#,
        escape_html(&config.server.host),
        config.server.port,
        config.data.source,
        refresh,
        source_details,
        config.pagination.default_page_size,
        options.join(", "),
        escape_html(&config.logging.level)
    );

    axum::response::Html(crate::page_response(&headers, "Settings", "/settings", &inner_content))
}
