//! Typed views of wallet RPC results

use serde::{Deserialize, Serialize};

/// Which outputs `incoming_transfers` should list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransferType {
    #[default]
    All,
    Available,
    Unavailable,
}

impl AsRef<str> for TransferType {
    fn as_ref(&self) -> &str {
        match self {
            TransferType::All => "all",
            TransferType::Available => "available",
            TransferType::Unavailable => "unavailable",
        }
    }
}

/// Which secret `query_key` should return.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyType {
    #[default]
    Mnemonic,
    ViewKey,
}

impl AsRef<str> for KeyType {
    fn as_ref(&self) -> &str {
        match self {
            KeyType::Mnemonic => "mnemonic",
            KeyType::ViewKey => "view_key",
        }
    }
}

/// Amounts are in atomic units (1e-12 XMR).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Balance {
    pub balance: u64,
    pub unlocked_balance: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Address {
    pub address: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Height {
    pub height: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Payment {
    pub payment_id: String,
    pub tx_hash: String,
    pub amount: u64,
    pub block_height: u64,
    #[serde(default)]
    pub unlock_time: u64,
}

/// Result of `get_payments` and `get_bulk_payments`.
///
/// The daemon leaves out `payments` entirely when nothing matched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Payments {
    #[serde(default)]
    pub payments: Vec<Payment>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IncomingTransfer {
    pub amount: u64,
    pub global_index: u64,
    pub spent: bool,
    pub tx_hash: String,
    #[serde(default)]
    pub tx_size: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct IncomingTransfers {
    #[serde(default)]
    pub transfers: Vec<IncomingTransfer>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QueriedKey {
    pub key: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IntegratedAddress {
    pub integrated_address: String,
    pub payment_id: String,
}
