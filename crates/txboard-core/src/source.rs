//! Record sources - generated mock data or a remote transactions endpoint

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::str::FromStr;
use std::sync::Arc;
use txboard_config::{Config, SourceKind};

use crate::error::{CoreError, CoreResult, DefaultErrorLogger, ErrorContext, ErrorLogger};
use crate::models::TransactionRecord;
use crate::types::{Chain, Token, TxStatus, TxType};

/// Source reference type
pub type SourceRef = Arc<dyn TransactionSource>;

/// Trait for record sources
#[async_trait]
pub trait TransactionSource: Send + Sync {
    /// Short name for logs
    fn name(&self) -> &str;

    /// Fetch the full record set
    async fn fetch(&self) -> CoreResult<Vec<TransactionRecord>>;
}

/// Fetch records, mapping any failure to an empty set plus a logged diagnostic
pub async fn load_records(source: &dyn TransactionSource) -> Vec<TransactionRecord> {
    match source.fetch().await {
        Ok(records) => {
            log::info!("Loaded {} transactions from {} source", records.len(), source.name());
            records
        }
        Err(e) => {
            let context = ErrorContext::new("load_records".to_string())
                .with_source(source.name().to_string());
            DefaultErrorLogger.log_error(&e, &context);
            Vec::new()
        }
    }
}

/// Build the source selected by the configuration
pub fn build_source(config: &Config) -> CoreResult<SourceRef> {
    match config.data.source {
        SourceKind::Mock => Ok(Arc::new(MockSource::new(
            config.data.mock.count,
            config.data.mock.seed,
        ))),
        SourceKind::Remote => Ok(Arc::new(RemoteSource::new(
            config.data.remote.base_url.clone(),
            std::time::Duration::from_secs(config.data.remote.timeout_secs),
        )?)),
    }
}

// ==================== Mock Source ====================

/// Records at indices below this are successful
const MOCK_SUCCESS_CUTOFF: usize = 95;
/// Records at indices below this (and above the success cutoff) are pending
const MOCK_PENDING_CUTOFF: usize = 98;

/// Random but plausible transactions, newest first
#[derive(Debug, Clone)]
pub struct MockSource {
    count: usize,
    seed: Option<u64>,
}

impl MockSource {
    pub fn new(count: usize, seed: Option<u64>) -> Self {
        Self { count, seed }
    }

    /// Generate records with timestamps relative to `now`
    pub fn generate_at(&self, now: DateTime<Utc>) -> Vec<TransactionRecord> {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        (0..self.count)
            .map(|i| {
                let tx_type = TxType::ALL[rng.gen_range(0..TxType::ALL.len())];
                let token = Token::KNOWN[rng.gen_range(0..Token::KNOWN.len())].clone();
                let chain = Chain::KNOWN[rng.gen_range(0..Chain::KNOWN.len())].clone();
                let status = if i < MOCK_SUCCESS_CUTOFF {
                    TxStatus::Success
                } else if i < MOCK_PENDING_CUTOFF {
                    TxStatus::Pending
                } else {
                    TxStatus::Failed
                };

                let cents: i64 = match tx_type {
                    TxType::MeteredRequest => rng.gen_range(10..510),
                    TxType::Subscription => rng.gen_range(999..5999),
                    TxType::Payment => rng.gen_range(500..50500),
                };

                let minutes_ago = (i * 3 + rng.gen_range(0..3)) as i64;
                let hash_bytes: [u8; 32] = rng.gen();
                let full_hash = format!("0x{}", hex::encode(hash_bytes));

                TransactionRecord {
                    short_hash: TransactionRecord::shorten_hash(&full_hash),
                    full_hash,
                    tx_type,
                    amount: Decimal::new(cents, 2),
                    token,
                    chain,
                    status,
                    timestamp: now - Duration::minutes(minutes_ago),
                }
            })
            .collect()
    }
}

#[async_trait]
impl TransactionSource for MockSource {
    fn name(&self) -> &str {
        "mock"
    }

    async fn fetch(&self) -> CoreResult<Vec<TransactionRecord>> {
        Ok(self.generate_at(Utc::now()))
    }
}

// ==================== Remote Source ====================

/// Response body of `GET /api/transactions`
#[derive(Debug, Deserialize)]
struct TransactionsEnvelope {
    /// Decoded one by one so a malformed entry only drops itself
    transactions: Vec<serde_json::Value>,
}

/// One transaction as returned by the remote endpoint
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteTransaction {
    pub hash: String,
    #[serde(rename = "type")]
    pub tx_type: String,
    /// Number or decimal string
    pub amount: serde_json::Value,
    pub token: String,
    pub chain_id: u64,
    pub status: String,
    /// Milliseconds since the Unix epoch
    pub timestamp: i64,
}

impl RemoteTransaction {
    pub fn into_record(self) -> CoreResult<TransactionRecord> {
        let tx_type = TxType::from_str(&self.tx_type).map_err(|reason| CoreError::InvalidRecord {
            field: "type".to_string(),
            reason,
        })?;
        let status = TxStatus::from_str(&self.status).map_err(|reason| CoreError::InvalidRecord {
            field: "status".to_string(),
            reason,
        })?;
        let amount = parse_amount(&self.amount)?;
        let timestamp = DateTime::<Utc>::from_timestamp_millis(self.timestamp).ok_or_else(|| {
            CoreError::InvalidRecord {
                field: "timestamp".to_string(),
                reason: format!("out of range: {}", self.timestamp),
            }
        })?;

        Ok(TransactionRecord {
            short_hash: TransactionRecord::shorten_hash(&self.hash),
            full_hash: self.hash,
            tx_type,
            amount,
            token: Token::from(self.token),
            chain: Chain::from_chain_id(self.chain_id),
            status,
            timestamp,
        })
    }
}

fn parse_amount(value: &serde_json::Value) -> CoreResult<Decimal> {
    let text = match value {
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::String(s) => s.trim().to_string(),
        other => {
            return Err(CoreError::InvalidRecord {
                field: "amount".to_string(),
                reason: format!("expected number or string, got {}", other),
            })
        }
    };
    let amount = Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .map_err(|e| CoreError::InvalidRecord {
            field: "amount".to_string(),
            reason: format!("{}: {}", text, e),
        })?;
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(CoreError::InvalidRecord {
            field: "amount".to_string(),
            reason: format!("negative amount {}", text),
        });
    }
    Ok(amount)
}

fn decode_entry(entry: serde_json::Value) -> CoreResult<TransactionRecord> {
    let tx: RemoteTransaction = serde_json::from_value(entry).map_err(|e| CoreError::InvalidRecord {
        field: "entry".to_string(),
        reason: e.to_string(),
    })?;
    tx.into_record()
}

/// Decode a response body, skipping entries that do not map to a record
pub fn parse_transactions_body(body: &str) -> CoreResult<Vec<TransactionRecord>> {
    let envelope: TransactionsEnvelope = serde_json::from_str(body)
        .map_err(|e| CoreError::InvalidResponse { message: e.to_string() })?;

    let context = ErrorContext::new("parse_transactions_body".to_string())
        .with_source("remote".to_string());
    let records = envelope
        .transactions
        .into_iter()
        .filter_map(|entry| {
            let hash = entry
                .get("hash")
                .and_then(serde_json::Value::as_str)
                .unwrap_or("<no hash>")
                .to_string();
            match decode_entry(entry) {
                Ok(record) => Some(record),
                Err(e) => {
                    DefaultErrorLogger.log_warning(&format!("Skipping transaction {}: {}", hash, e), &context);
                    None
                }
            }
        })
        .collect();
    Ok(records)
}

/// Transactions fetched from `{base_url}/api/transactions`
pub struct RemoteSource {
    http_client: reqwest::Client,
    base_url: String,
}

impl RemoteSource {
    pub fn new(base_url: String, timeout: std::time::Duration) -> CoreResult<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CoreError::ConfigError { message: e.to_string() })?;
        Ok(Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn endpoint(&self) -> String {
        format!("{}/api/transactions", self.base_url)
    }
}

#[async_trait]
impl TransactionSource for RemoteSource {
    fn name(&self) -> &str {
        "remote"
    }

    async fn fetch(&self) -> CoreResult<Vec<TransactionRecord>> {
        let url = self.endpoint();
        log::debug!("Fetching transactions from {}", url);

        let response = self.http_client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CoreError::FetchFailed {
                message: format!("{} returned HTTP {}", url, status),
            });
        }

        let body = response.text().await?;
        parse_transactions_body(&body)
    }
}
