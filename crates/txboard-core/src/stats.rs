//! Statistics derived from the record set

use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::models::TransactionRecord;
use crate::types::{TxStatus, TxType};

/// Count of records in one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub label: String,
    pub count: usize,
}

/// Summed amount for one token
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenVolume {
    pub token: String,
    pub volume: Decimal,
}

/// Transaction statistics for the stats panel
#[derive(Debug, Clone, Serialize)]
pub struct TransactionStats {
    pub total_transactions: usize,
    pub by_type: Vec<CategoryCount>,
    pub by_status: Vec<CategoryCount>,
    /// Percentage of successful records, 0 for an empty set
    pub success_rate: Decimal,
    pub volume_by_token: Vec<TokenVolume>,
}

impl TransactionStats {
    pub fn from_records(records: &[TransactionRecord]) -> Self {
        let total = records.len();

        let by_type = TxType::ALL
            .iter()
            .map(|t| CategoryCount {
                label: t.label().to_string(),
                count: records.iter().filter(|r| r.tx_type == *t).count(),
            })
            .collect();

        let by_status: Vec<CategoryCount> = TxStatus::ALL
            .iter()
            .map(|s| CategoryCount {
                label: s.label().to_string(),
                count: records.iter().filter(|r| r.status == *s).count(),
            })
            .collect();

        let successes = records.iter().filter(|r| r.status == TxStatus::Success).count();
        let success_rate = if total == 0 {
            Decimal::ZERO
        } else {
            (Decimal::from(successes) * Decimal::ONE_HUNDRED / Decimal::from(total)).round_dp(1)
        };

        let mut volumes: BTreeMap<String, Decimal> = BTreeMap::new();
        for r in records {
            *volumes.entry(r.token.code().to_string()).or_insert(Decimal::ZERO) += r.amount;
        }
        let volume_by_token = volumes
            .into_iter()
            .map(|(token, volume)| TokenVolume { token, volume })
            .collect();

        Self {
            total_transactions: total,
            by_type,
            by_status,
            success_rate,
            volume_by_token,
        }
    }

    /// Count for a type label, 0 if absent
    pub fn type_count(&self, label: &str) -> usize {
        self.by_type
            .iter()
            .find(|c| c.label == label)
            .map(|c| c.count)
            .unwrap_or(0)
    }

    /// Count for a status label, 0 if absent
    pub fn status_count(&self, label: &str) -> usize {
        self.by_status
            .iter()
            .find(|c| c.label == label)
            .map(|c| c.count)
            .unwrap_or(0)
    }
}
