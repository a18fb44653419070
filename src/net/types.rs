//! Payload types shared with the InvestAI REST API.
//!
//! The server speaks camelCase JSON; everything here maps that convention
//! onto Rust field names via serde so the rest of the crate never sees the
//! wire spelling.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Access/refresh token pair returned by login and refresh.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

/// Response of the email-verification endpoint. The tokens are only present
/// when the server decides to mint a session directly from the link.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifiedTokens {
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
}

/// Account role as reported by the server.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

impl Role {
    /// Wire/form value of this role.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
        }
    }
}

/// Profile of the signed-in user (also the row shape of the admin user list).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    pub role: Role,
    pub first_name: String,
    pub last_name: String,
    pub mfa_enabled: bool,
}

impl UserProfile {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Portfolio summary row for the dashboard.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub id: String,
    pub name: String,
    pub platform: String,
    pub current_value: f64,
    pub total_invested: f64,
}

impl PortfolioSummary {
    pub fn gain(&self) -> f64 {
        self.current_value - self.total_invested
    }
}

/// One point of a portfolio valuation curve.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuationPoint {
    pub date: String,
    pub value: f64,
}

/// Transaction kinds understood by the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Buy,
    Sell,
    Dividend,
    Deposit,
    Withdrawal,
}

impl TransactionKind {
    /// All kinds, in the order the UI lists them.
    pub const ALL: [Self; 5] = [
        Self::Buy,
        Self::Sell,
        Self::Dividend,
        Self::Deposit,
        Self::Withdrawal,
    ];

    /// Parse the wire/form value ("buy", "sell", ...).
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "buy" => Some(Self::Buy),
            "sell" => Some(Self::Sell),
            "dividend" => Some(Self::Dividend),
            "deposit" => Some(Self::Deposit),
            "withdrawal" => Some(Self::Withdrawal),
            _ => None,
        }
    }

    /// Wire/form value of this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Buy => "buy",
            Self::Sell => "sell",
            Self::Dividend => "dividend",
            Self::Deposit => "deposit",
            Self::Withdrawal => "withdrawal",
        }
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Buy => "Achat",
            Self::Sell => "Vente",
            Self::Dividend => "Dividende",
            Self::Deposit => "Dépôt",
            Self::Withdrawal => "Retrait",
        }
    }
}

/// A logged transaction.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub portfolio_id: String,
    pub kind: TransactionKind,
    pub asset: String,
    pub quantity: f64,
    pub unit_price: f64,
    pub fees: f64,
    pub executed_at: String,
}

/// Transaction creation payload.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    pub portfolio_id: String,
    pub kind: TransactionKind,
    pub asset: String,
    pub quantity: f64,
    pub unit_price: f64,
    pub fees: f64,
    pub executed_at: String,
}

/// Result of a CSV import. Platform auto-detection happens server-side; the
/// client only displays what was decided.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportReport {
    pub platform: String,
    pub imported: u32,
    pub skipped: u32,
    #[serde(default)]
    pub errors: Vec<String>,
}

/// A notification entry.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub body: String,
    pub read: bool,
    pub created_at: String,
}
