/// Base url of Binance USDT-M Futures testnet
pub const TESTNET_BASE_URL: &str = "https://testnet.binancefuture.com";

/// Base url of Binance USDT-M Futures mainnet
pub const MAINNET_BASE_URL: &str = "https://fapi.binance.com";

/// Validates order parameters without sending it to the matching engine
pub const TEST_ORDER_ENDPOINT: &str = "/fapi/v1/order/test";

/// Places a real order
pub const ORDER_ENDPOINT: &str = "/fapi/v1/order";

pub const API_KEY_HEADER: &str = "X-MBX-APIKEY";

pub const API_KEY_ENV: &str = "BINANCE_API_KEY";
pub const API_SECRET_ENV: &str = "BINANCE_API_SECRET";

/// Values shipped in the sample `.env` which must be replaced before use
pub const PLACEHOLDER_API_KEYS: [&str; 2] = ["your_testnet_api_key_here", "your_api_key"];
pub const PLACEHOLDER_API_SECRETS: [&str; 2] = ["your_testnet_api_secret_here", "your_api_secret"];

/// Milliseconds after `timestamp` the request stays valid on the server
pub const DEFAULT_RECV_WINDOW: u64 = 5000;

pub const DEFAULT_LOG_FILE: &str = "run_test_order.log";

/// Where to get testnet api keys from
pub const TESTNET_KEYS_URL: &str = "https://testnet.binancefuture.com/";
