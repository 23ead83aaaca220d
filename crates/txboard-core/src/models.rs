//! Core data models for transaction records

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::time::relative_age;
use super::types::{Chain, Token, TxStatus, TxType};

/// One logical transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Display-truncated hash (e.g., "0x1a2b...9f0e")
    pub short_hash: String,
    /// Full transaction hash
    pub full_hash: String,
    /// Transaction type
    pub tx_type: TxType,
    /// Non-negative amount
    pub amount: Decimal,
    /// Currency code
    pub token: Token,
    /// Network name
    pub chain: Chain,
    /// Transaction status
    pub status: TxStatus,
    /// Time the transaction occurred
    pub timestamp: DateTime<Utc>,
}

impl TransactionRecord {
    /// Build the short display form of a hash: first 6 and last 4 characters
    pub fn shorten_hash(full_hash: &str) -> String {
        let chars: Vec<char> = full_hash.chars().collect();
        if chars.len() <= 10 {
            return full_hash.to_string();
        }
        let head: String = chars[..6].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}...{}", head, tail)
    }

    /// Amount as matched by search: normalised, without trailing zeros ("12.5")
    pub fn amount_search_text(&self) -> String {
        self.amount.normalize().to_string()
    }

    /// Amount with two decimals for display
    pub fn amount_display(&self) -> String {
        format!("{:.2}", self.amount.round_dp(2))
    }

    /// Human-readable age relative to `now`
    pub fn relative_age(&self, now: DateTime<Utc>) -> String {
        relative_age(self.timestamp, now)
    }
}
