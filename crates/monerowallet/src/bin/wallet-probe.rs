//! Wallet probe
//!
//! Runs the read-only wallet calls against a live `monero-wallet-rpc` and
//! prints what comes back.

use anyhow::Result;
use clap::Parser;
use monerowallet::{
    Address, Balance, Height, IncomingTransfers, MoneroWallet, Protocol, TransferType,
    WalletConfig,
};

#[derive(Parser, Debug)]
#[command(name = "wallet-probe")]
#[command(about = "Check that a Monero wallet RPC server answers", long_about = None)]
struct Args {
    /// Protocol (http or https)
    #[arg(long, default_value = "http")]
    protocol: String,

    /// Wallet RPC host
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Wallet RPC port
    #[arg(short, long, default_value_t = 18082)]
    port: u16,

    /// JSON-RPC path
    #[arg(long, default_value = "/json_rpc")]
    path: String,

    /// Payment id to look up with get_payments
    #[arg(long)]
    payment_id: Option<String>,

    /// Log level
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(&args.log_level)
        .with_writer(std::io::stderr)
        .init();

    let config = WalletConfig {
        protocol: args.protocol.parse::<Protocol>()?,
        host: args.host,
        port: args.port,
        path: args.path,
    };
    tracing::info!("Probing wallet at {}", config.url());
    let wallet = MoneroWallet::with_config(config)?;

    println!("=== Monero Wallet Probe ===\n");

    println!("1. Address...");
    let address: Address = wallet.getaddress()?.decode()?;
    println!("   ✓ {}", address.address);

    println!("2. Height...");
    let height: Height = wallet.getheight()?.decode()?;
    println!("   ✓ {}", height.height);

    println!("3. Balance...");
    let balance: Balance = wallet.getbalance()?.decode()?;
    println!(
        "   ✓ balance {} / unlocked {}",
        balance.balance, balance.unlocked_balance
    );

    println!("4. Incoming transfers...");
    match wallet.incoming_transfers(TransferType::Available) {
        Ok(response) => {
            let transfers: IncomingTransfers = response.decode()?;
            println!("   ✓ {} available outputs", transfers.transfers.len());
        }
        Err(e) => println!("   ✗ Failed: {}", e),
    }

    if let Some(payment_id) = args.payment_id {
        println!("5. Payments for {}...", payment_id);
        match wallet.get_payments(&payment_id) {
            Ok(response) => println!("   ✓ {}", response.result()),
            Err(e) => println!("   ✗ Failed: {}", e),
        }
    }

    println!("\n=== Done ===");
    Ok(())
}
