//! Monero Wallet Client Library
//!
//! Typed calls to a `monero-wallet-rpc` daemon over JSON-RPC/HTTP.
//!
//! ```no_run
//! use monerowallet::{Height, MoneroWallet};
//!
//! let wallet = MoneroWallet::new()?;
//! let height: Height = wallet.getheight()?.decode()?;
//! println!("wallet is at block {}", height.height);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod protocol;
pub mod types;

pub use client::MoneroWallet;
pub use config::{Protocol, WalletConfig};
pub use error::{Error, Result};
pub use protocol::{RemoteError, Request, Response};
pub use types::*;
