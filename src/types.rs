use clap::Parser;
use rust_decimal::Decimal;

#[derive(Debug, Parser)]
#[clap(name="run_test_order")]
#[clap(about="Test market and limit orders on Binance Futures Testnet", long_about=None)]
#[clap(allow_negative_numbers=true)]
#[clap(after_help="Examples:\n  run_test_order BTCUSDT BUY 0.001\n  run_test_order BTCUSDT BUY 0.001 --type limit --price 60000")]
pub struct CommandlineArgs {
    /// Trading pair symbol (e.g., BTCUSDT)
    pub symbol: String,

    /// Order side, BUY or SELL (case-insensitive)
    pub side: String,

    /// Order quantity in contracts
    // Hyphen values are let through so that a negative quantity is reported
    // by the validator instead of being mistaken for a flag.
    #[clap(allow_hyphen_values=true)]
    pub quantity: String,

    /// Order type
    #[clap(long="type", arg_enum, default_value="market")]
    pub order_type: OrderType,

    /// Limit price (required for limit orders)
    #[clap(long, allow_hyphen_values=true)]
    pub price: Option<String>,

    /// Time in force of a limit order
    #[clap(long, arg_enum, default_value="gtc")]
    pub time_in_force: TimeInForce,

    /// Mark order as reduce-only (position closing)
    #[clap(long)]
    pub reduce_only: bool,

    /// Place REAL order instead of test (dangerous!)
    #[clap(long)]
    pub live: bool,

    /// Use mainnet instead of testnet (VERY dangerous!)
    #[clap(long)]
    pub mainnet: bool,

    /// File to append log lines to
    #[clap(long, default_value_t=crate::defines::DEFAULT_LOG_FILE.to_string())]
    pub log_file: String,

    /// Enable detailed logging
    #[clap(short, long)]
    pub verbose: bool,
}

/// Status code the process exits with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    Success=0,
    ErrorGeneric,
    ErrorUsage,
    ErrorConfiguration,
    ErrorValidation,
    ErrorExecution,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderSide {
    Buy,
    Sell,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ArgEnum)]
pub enum OrderType {
    Market,
    Limit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ArgEnum)]
pub enum TimeInForce {
    /// Good till cancel
    Gtc,
    /// Immediate or cancel
    Ioc,
    /// Fill or kill
    Fok,
}

/// Whether the order is only validated by the exchange or really placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionMode {
    Test,
    Live,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Network {
    Testnet,
    Mainnet,
}

/// Order parameters exactly as received from the command line.
#[derive(Debug, Clone)]
pub struct OrderParams {
    pub symbol: String,
    pub side: String,
    pub quantity: String,
    pub order_type: OrderType,
    pub price: Option<String>,
    pub time_in_force: TimeInForce,
    pub reduce_only: bool,
}

/// Validated and normalized order.
/// Only `validator::validate()` builds one, so `price` is `Some` iff
/// `order_type` is `OrderType::Limit`, and all amounts are positive.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderRequest {
    pub symbol: String,
    pub side: OrderSide,
    pub quantity: Decimal,
    pub order_type: OrderType,
    pub price: Option<Decimal>,
    pub time_in_force: TimeInForce,
    pub reduce_only: bool,
}

/// Outcome of a single invocation, used for display and logging.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderResult {
    pub success: bool,

    /// Only set for orders placed in live mode
    pub order_id: Option<i64>,

    pub outcome: Outcome,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Raw JSON body returned by the exchange
    Response(serde_json::Value),
    Error(String),
}

/// `TradingContext` contains information the exchange client needs to sign
/// and route requests.
#[derive(Debug, Clone)]
pub struct TradingContext {
    /// Set environment variable with name BINANCE_API_KEY
    pub api_key: String,

    /// Set environment variable with name BINANCE_API_SECRET
    pub api_secret: String,

    /// Which environment to execute API against
    pub network: Network,

    /// recvWindow sent along with every signed request
    pub recv_window: u64,
}

/// Error body returned by Binance on rejected requests.
// https://binance-docs.github.io/apidocs/futures/en/#error-codes
#[derive(Debug, serde::Deserialize, serde::Serialize)]
pub struct BinanceErrorResponse {
    pub code: i64,
    pub msg: String,
}
