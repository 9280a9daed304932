mod client;
mod config;
mod defines;
mod errors;
mod executor;
mod impls;
mod logging;
mod types;
mod util;
mod validator;

use clap::Parser;
use std::path::Path;

use client::BinanceFuturesClient;
use config::Credentials;
use defines::*;
use errors::Error;
use executor::{Confirm, OrderExecutor, PromptConfirmer};
use types::*;
use util::*;

fn main() {
    // parse arguments via clap; --help and --version also come through as Err
    let cmd_args = match CommandlineArgs::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            let status = if e.use_stderr() { StatusCode::ErrorUsage } else { StatusCode::Success };
            std::process::exit(status as i32);
        }
    };

    if let Err(e) = logging::init(Path::new(&cmd_args.log_file), cmd_args.verbose) {
        println!("❌ Cannot open log file {}: {}", cmd_args.log_file, e);
        std::process::exit(StatusCode::ErrorGeneric as i32);
    }
    tracing::info!("Invoked with {:?}", cmd_args);

    print_configuration_check();

    let mut start = std::time::Instant::now();
    measure_start(&mut start);

    let mut confirmer = PromptConfirmer::stdio();
    let status = match run(&cmd_args, |name| std::env::var(name).ok(), &mut confirmer) {
        Ok(result) => {
            tracing::info!("Result: {}", result);
            print_success(&cmd_args, &result);
            measure_end(&start, cmd_args.verbose);
            StatusCode::Success
        }
        Err(e) => {
            match &e {
                Error::UserAbort => tracing::warn!("Result: {}", OrderResult::from(&e)),
                _ => tracing::error!("Result: {}", OrderResult::from(&e)),
            }
            print_error_if_necessary(&e);
            e.status_code()
        }
    };

    std::process::exit(status as i32);
}

/// Load credentials through `lookup`, validate the order and execute it in
/// the requested mode.
fn run<L, F>(args: &CommandlineArgs, lookup: L, confirmer: &mut F) -> Result<OrderResult, Error>
where
    L: Fn(&str) -> Option<String>,
    F: Confirm,
{
    let credentials = Credentials::from_lookup(lookup)?;
    let order = validator::validate(&OrderParams::from(args))?;

    let network = Network::from_mainnet_flag(args.mainnet);
    if network == Network::Mainnet {
        println!("⚠️  WARNING: Using MAINNET - this could place real orders with real money!");
        if !confirmer.confirm("Mainnet selected.")? {
            return Err(Error::UserAbort);
        }
    }

    let client = BinanceFuturesClient::new(TradingContext::new(credentials, network))?;
    let executor = OrderExecutor::new(client, ExecutionMode::from_live_flag(args.live));

    print_order_summary(&order, executor.mode());
    if executor.mode() == ExecutionMode::Live {
        println!("⚠️  WARNING: --live flag detected!");
    }

    executor.execute(&order, confirmer)
}

fn print_configuration_check() {
    println!("🔧 Configuration Check:");
    match config::load_dotenv() {
        Some(path) => println!("   ✅ .env file found: {}", path.display()),
        None => println!("   ⚠️  .env file not found, using system environment variables"),
    }
    for name in [API_KEY_ENV, API_SECRET_ENV] {
        if config::is_set(name) {
            println!("   ✅ {}: Set", name);
        } else {
            println!("   ❌ {}: Missing", name);
        }
    }
    println!();
}

fn print_order_summary(order: &OrderRequest, mode: ExecutionMode) {
    let verb = match mode {
        ExecutionMode::Test => "Testing",
        ExecutionMode::Live => "Placing",
    };
    println!("🚀 {} {} order:", verb, order.order_type.as_api_str().to_lowercase());
    println!("   Symbol: {}", order.symbol);
    println!("   Side: {}", order.side);
    println!("   Quantity: {}", order.quantity);
    if let Some(price) = order.price {
        println!("   Price: ${}", price);
        println!("   Time in force: {}", order.time_in_force);
    }
    if order.reduce_only {
        println!("   Reduce only: yes");
    }
    println!("   Type: {}", order.order_type);
    println!("   Mode: {}", mode);
    println!();
}

fn print_success(args: &CommandlineArgs, result: &OrderResult) {
    println!("✅ Success!");
    if args.verbose {
        println!("   Full result: {}", result);
    } else if !args.live {
        match args.order_type {
            OrderType::Limit => println!(
                "   Limit order parameters validated successfully: {} {} {} @ ${}",
                args.symbol.trim().to_uppercase(),
                args.side.trim().to_uppercase(),
                args.quantity.trim(),
                args.price.as_deref().unwrap_or_default().trim()
            ),
            OrderType::Market => println!("   Market order parameters validated successfully"),
        }
    } else {
        match result.order_id {
            Some(id) => println!("   Order ID: {}", id),
            None => println!("   Order ID: Unknown"),
        }
    }
}
