//! Basic enumerations for transaction records

use serde::{Deserialize, Serialize};

/// Transaction type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TxType {
    /// One-off payment
    Payment,
    /// HTTP 402 style pay-per-request charge
    #[serde(rename = "402Pay")]
    MeteredRequest,
    /// Recurring subscription charge
    Subscription,
}

impl TxType {
    pub const ALL: [TxType; 3] = [TxType::Payment, TxType::MeteredRequest, TxType::Subscription];

    /// Display label, also the value matched by search and accepted by the type filter
    pub fn label(&self) -> &'static str {
        match self {
            TxType::Payment => "Payment",
            TxType::MeteredRequest => "402Pay",
            TxType::Subscription => "Subscription",
        }
    }

    /// Badge classes for the list view
    pub fn badge_class(&self) -> &'static str {
        match self {
            TxType::MeteredRequest => "bg-purple-500/10 text-purple-400",
            TxType::Payment => "bg-blue-500/10 text-blue-400",
            TxType::Subscription => "bg-orange-500/10 text-orange-400",
        }
    }
}

/// Lenient parse used when decoding remote bodies; the list filter matches labels exactly
impl std::str::FromStr for TxType {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "payment" => Ok(TxType::Payment),
            "402pay" | "metered" | "metered_request" => Ok(TxType::MeteredRequest),
            "subscription" => Ok(TxType::Subscription),
            _ => Err(format!("Invalid transaction type: {}", s)),
        }
    }
}

impl std::fmt::Display for TxType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Transaction status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TxStatus {
    Success,
    Pending,
    Failed,
}

impl TxStatus {
    pub const ALL: [TxStatus; 3] = [TxStatus::Success, TxStatus::Pending, TxStatus::Failed];

    pub fn label(&self) -> &'static str {
        match self {
            TxStatus::Success => "Success",
            TxStatus::Pending => "Pending",
            TxStatus::Failed => "Failed",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            TxStatus::Success => "bg-green-500/10 text-green-400",
            TxStatus::Pending => "bg-yellow-500/10 text-yellow-400",
            TxStatus::Failed => "bg-red-500/10 text-red-400",
        }
    }
}

impl std::str::FromStr for TxStatus {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "success" => Ok(TxStatus::Success),
            "pending" => Ok(TxStatus::Pending),
            "failed" => Ok(TxStatus::Failed),
            _ => Err(format!("Invalid transaction status: {}", s)),
        }
    }
}

impl std::fmt::Display for TxStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Currency code
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Token {
    Usdt,
    Usdc,
    Bnb,
    Fdusd,
    Other(String),
}

impl Token {
    pub const KNOWN: [Token; 4] = [Token::Usdt, Token::Usdc, Token::Bnb, Token::Fdusd];

    pub fn code(&self) -> &str {
        match self {
            Token::Usdt => "USDT",
            Token::Usdc => "USDC",
            Token::Bnb => "BNB",
            Token::Fdusd => "FDUSD",
            Token::Other(code) => code,
        }
    }
}

impl From<&str> for Token {
    fn from(s: &str) -> Self {
        match s.to_uppercase().as_str() {
            "USDT" => Token::Usdt,
            "USDC" => Token::Usdc,
            "BNB" => Token::Bnb,
            "FDUSD" => Token::Fdusd,
            _ => Token::Other(s.to_string()),
        }
    }
}

impl From<String> for Token {
    fn from(s: String) -> Self {
        Token::from(s.as_str())
    }
}

impl From<Token> for String {
    fn from(token: Token) -> Self {
        token.code().to_string()
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Network name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Chain {
    BnbChain,
    OpBnb,
    Other(String),
}

/// Chain id of BNB Smart Chain mainnet
pub const BNB_CHAIN_ID: u64 = 56;

impl Chain {
    pub const KNOWN: [Chain; 2] = [Chain::BnbChain, Chain::OpBnb];

    pub fn name(&self) -> &str {
        match self {
            Chain::BnbChain => "BNB Chain",
            Chain::OpBnb => "opBNB",
            Chain::Other(name) => name,
        }
    }

    /// Map a numeric chain id; everything that is not BNB Chain is treated as opBNB
    pub fn from_chain_id(id: u64) -> Self {
        if id == BNB_CHAIN_ID {
            Chain::BnbChain
        } else {
            Chain::OpBnb
        }
    }
}

impl From<&str> for Chain {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "bnb chain" | "bsc" => Chain::BnbChain,
            "opbnb" => Chain::OpBnb,
            _ => Chain::Other(s.to_string()),
        }
    }
}

impl From<String> for Chain {
    fn from(s: String) -> Self {
        Chain::from(s.as_str())
    }
}

impl From<Chain> for String {
    fn from(chain: Chain) -> Self {
        chain.name().to_string()
    }
}

impl std::fmt::Display for Chain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
