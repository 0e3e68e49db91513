//! Blocking client for the wallet RPC server

use crate::config::WalletConfig;
use crate::protocol::{Request, Response, METHOD_NOT_FOUND};
use crate::{Error, Result};
use reqwest::header::CONTENT_TYPE;
use serde_json::{json, Value};

/// Monero wallet RPC client
///
/// Every method performs one blocking POST and returns the whole response
/// envelope; use [`Response::decode`] to get a typed result.
#[derive(Debug, Clone)]
pub struct MoneroWallet {
    config: WalletConfig,
    http: reqwest::blocking::Client,
}

impl MoneroWallet {
    /// Create a client for a wallet daemon on `http://127.0.0.1:18082/json_rpc`
    pub fn new() -> Result<Self> {
        Self::with_config(WalletConfig::default())
    }

    /// Create a client from explicit settings.
    ///
    /// Calls never time out: `store` or `sweep_dust` on a large wallet can
    /// take longer than any fixed limit.
    pub fn with_config(config: WalletConfig) -> Result<Self> {
        config.validate()?;
        let http = reqwest::blocking::Client::builder().timeout(None).build()?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &WalletConfig {
        &self.config
    }

    /// Send a request and classify the reply
    fn send(&self, request: Request) -> Result<Response> {
        let body = serde_json::to_string(&request)?;
        let url = self.config.url();
        tracing::debug!(method = %request.method, url = %url, "Sending wallet RPC request");

        let http_response = self
            .http
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .body(body.clone())
            .send()?;
        let http_status = http_response.status().as_u16();
        let text = http_response.text()?;

        let response = Response::from_body(&text, http_status)?;
        // Results can hold key material, so only the status is logged.
        tracing::debug!(method = %request.method, status = response.status, "Wallet RPC response");

        if let Some(error) = &response.error {
            if error.message == METHOD_NOT_FOUND {
                tracing::warn!(method = %request.method, "Wallet RPC method not found");
                return Err(Error::MethodNotFound { request: body });
            }

            tracing::warn!(method = %request.method, "Wallet RPC error: {}", error.message);
            return Err(Error::Remote {
                message: error.message.clone(),
                response: Box::new(response),
            });
        }

        if response.status != 200 {
            tracing::warn!(method = %request.method, status = response.status, "Unexpected wallet RPC status");
            return Err(Error::StatusCode(Box::new(response)));
        }

        Ok(response)
    }

    /// Call any wallet RPC method by name
    pub fn call(&self, method: impl Into<String>, params: Option<Value>) -> Result<Response> {
        self.send(Request::new(method, params))
    }

    // Wallet state

    /// Get the wallet balance
    pub fn getbalance(&self) -> Result<Response> {
        self.call("getbalance", None)
    }

    /// Get the wallet's primary address
    pub fn getaddress(&self) -> Result<Response> {
        self.call("getaddress", None)
    }

    /// Get the wallet's current block height
    pub fn getheight(&self) -> Result<Response> {
        self.call("getheight", None)
    }

    /// Save the wallet file
    pub fn store(&self) -> Result<Response> {
        self.call("store", None)
    }

    /// Store the wallet state and shut the daemon down
    pub fn stop_wallet(&self) -> Result<Response> {
        self.call("stop_wallet", None)
    }

    /// Send all dust outputs back to the wallet
    pub fn sweep_dust(&self) -> Result<Response> {
        self.call("sweep_dust", None)
    }

    // Payments

    /// List incoming payments for one payment id
    pub fn get_payments(&self, payment_id: &str) -> Result<Response> {
        self.call(
            "get_payments",
            Some(json!({
                "payment_id": payment_id,
            })),
        )
    }

    /// List incoming payments for several payment ids, starting at a block height
    pub fn get_bulk_payments<S: AsRef<str>>(
        &self,
        payment_ids: &[S],
        min_block_height: u64,
    ) -> Result<Response> {
        let payment_ids: Vec<&str> = payment_ids.iter().map(AsRef::as_ref).collect();
        self.call(
            "get_bulk_payments",
            Some(json!({
                "payment_ids": payment_ids,
                "min_block_height": min_block_height,
            })),
        )
    }

    /// List incoming transfers.
    ///
    /// Takes a [`TransferType`](crate::TransferType) or a raw string; the
    /// daemon rejects anything other than "all", "available" or "unavailable".
    pub fn incoming_transfers(&self, transfer_type: impl AsRef<str>) -> Result<Response> {
        self.call(
            "incoming_transfers",
            Some(json!({
                "transfer_type": transfer_type.as_ref(),
            })),
        )
    }

    // Keys and addresses

    /// Return the mnemonic seed or the private view key
    pub fn query_key(&self, key_type: impl AsRef<str>) -> Result<Response> {
        self.call(
            "query_key",
            Some(json!({
                "key_type": key_type.as_ref(),
            })),
        )
    }

    /// Build an integrated address. With no payment id the daemon picks a random one.
    pub fn make_integrated_address(&self, payment_id: Option<&str>) -> Result<Response> {
        self.call(
            "make_integrated_address",
            Some(json!({
                "payment_id": payment_id.unwrap_or_default(),
            })),
        )
    }
}
