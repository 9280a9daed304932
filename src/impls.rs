use crate::config::Credentials;
use crate::defines::*;
use crate::errors::Error;
use crate::types::*;

use std::fmt;
use std::str::FromStr;

impl OrderSide {
    /// Value of `side` parameter as Binance expects it
    pub fn as_api_str(&self) -> &'static str {
        match self {
            OrderSide::Buy => "BUY",
            OrderSide::Sell => "SELL",
        }
    }
}

impl FromStr for OrderSide {
    type Err = ();

    /// Case-insensitive, surrounding whitespaces are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("BUY") {
            Ok(OrderSide::Buy)
        } else if s.eq_ignore_ascii_case("SELL") {
            Ok(OrderSide::Sell)
        } else {
            Err(())
        }
    }
}

impl fmt::Display for OrderSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_api_str())
    }
}

impl OrderType {
    pub fn as_api_str(&self) -> &'static str {
        match self {
            OrderType::Market => "MARKET",
            OrderType::Limit => "LIMIT",
        }
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_api_str())
    }
}

impl TimeInForce {
    pub fn as_api_str(&self) -> &'static str {
        match self {
            TimeInForce::Gtc => "GTC",
            TimeInForce::Ioc => "IOC",
            TimeInForce::Fok => "FOK",
        }
    }
}

impl fmt::Display for TimeInForce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_api_str())
    }
}

impl ExecutionMode {
    pub fn from_live_flag(live: bool) -> ExecutionMode {
        if live { ExecutionMode::Live } else { ExecutionMode::Test }
    }
}

impl fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExecutionMode::Test => f.write_str("TEST (validation only)"),
            ExecutionMode::Live => f.write_str("LIVE (real order)"),
        }
    }
}

impl Network {
    pub fn from_mainnet_flag(mainnet: bool) -> Network {
        if mainnet { Network::Mainnet } else { Network::Testnet }
    }

    pub fn base_url(&self) -> &'static str {
        match self {
            Network::Testnet => TESTNET_BASE_URL,
            Network::Mainnet => MAINNET_BASE_URL,
        }
    }
}

impl From<&CommandlineArgs> for OrderParams {
    fn from(args: &CommandlineArgs) -> OrderParams {
        OrderParams {
            symbol: args.symbol.clone(),
            side: args.side.clone(),
            quantity: args.quantity.clone(),
            order_type: args.order_type,
            price: args.price.clone(),
            time_in_force: args.time_in_force,
            reduce_only: args.reduce_only,
        }
    }
}

impl TradingContext {
    pub fn new(credentials: Credentials, network: Network) -> TradingContext {
        TradingContext {
            api_key: credentials.api_key,
            api_secret: credentials.api_secret,
            network,
            recv_window: DEFAULT_RECV_WINDOW,
        }
    }
}

impl OrderResult {
    /// Successful result out of a raw exchange response.
    /// `orderId` is picked up when the exchange returned one.
    pub fn from_response(response: serde_json::Value) -> OrderResult {
        OrderResult {
            success: true,
            order_id: response.get("orderId").and_then(serde_json::Value::as_i64),
            outcome: Outcome::Response(response),
        }
    }
}

impl From<&Error> for OrderResult {
    fn from(e: &Error) -> OrderResult {
        OrderResult {
            success: false,
            order_id: None,
            outcome: Outcome::Error(e.to_string()),
        }
    }
}

impl fmt::Display for OrderResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "success={}", self.success)?;
        if let Some(order_id) = self.order_id {
            write!(f, " order_id={}", order_id)?;
        }
        match &self.outcome {
            Outcome::Response(v) => write!(f, " response={}", v),
            Outcome::Error(msg) => write!(f, " error=\"{}\"", msg),
        }
    }
}
