//! Dashboard API endpoints - JSON API

use crate::AppState;
use txboard_core::TransactionStats;

/// Statistics over the full record set
pub async fn api_stats(state: axum::extract::State<AppState>) -> axum::Json<TransactionStats> {
    let list = state.list.read().await;
    axum::Json(TransactionStats::from_records(list.records()))
}
