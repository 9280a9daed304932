//! Signed REST client for Binance USDT-M Futures.

use crate::defines::*;
use crate::errors::ExecutionError;
use crate::types::*;
use crate::util::{hex_encode, timestamp_ms};

use isahc::{AsyncReadResponseExt, Request, RequestExt};
use ring::hmac;
use serde_json::Value;
use url::{form_urlencoded, Url};

/// Operations the executor needs from an exchange.
pub trait ExchangeClient {
    /// Ask the exchange to validate `order` without placing it.
    fn test_order(&self, order: &OrderRequest) -> Result<Value, ExecutionError>;

    /// Place `order` for real.
    fn place_order(&self, order: &OrderRequest) -> Result<Value, ExecutionError>;
}

pub struct BinanceFuturesClient {
    context: TradingContext,
    base_url: Url,
}

impl BinanceFuturesClient {
    pub fn new(context: TradingContext) -> Result<BinanceFuturesClient, ExecutionError> {
        let base_url = Url::parse(context.network.base_url())?;
        match context.network {
            Network::Testnet => tracing::info!("Configured client for Binance Futures Testnet"),
            Network::Mainnet => tracing::warn!("Using MAINNET - ensure this is intentional!"),
        }
        Ok(BinanceFuturesClient { context, base_url })
    }

    /// Sign and POST `order` to `endpoint`, returning the decoded response body.
    fn send_signed(&self, endpoint: &str, order: &OrderRequest) -> Result<Value, ExecutionError> {
        let url = self.base_url.join(endpoint)?;
        let query = order_query(order, self.context.recv_window, timestamp_ms());
        tracing::debug!("POST {} {}", url, query);

        let signature = sign(&self.context.api_secret, &query);
        let body = format!("{}&signature={}", query, signature);

        let request = Request::post(url.as_str())
            .header(API_KEY_HEADER, self.context.api_key.as_str())
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body)?;

        let (status, text) = futures::executor::block_on(async {
            let mut response = request.send_async().await?;
            let status = response.status().as_u16();
            let text = response.text().await?;
            Ok::<_, ExecutionError>((status, text))
        })?;
        tracing::debug!("HTTP {} {}", status, text);

        decode_response(status, &text)
    }
}

impl ExchangeClient for BinanceFuturesClient {
    fn test_order(&self, order: &OrderRequest) -> Result<Value, ExecutionError> {
        self.send_signed(TEST_ORDER_ENDPOINT, order)
    }

    fn place_order(&self, order: &OrderRequest) -> Result<Value, ExecutionError> {
        self.send_signed(ORDER_ENDPOINT, order)
    }
}

/// Build urlencoded order parameters, `recvWindow` and `timestamp` included.
/// The result is the exact payload to be signed.
pub fn order_query(order: &OrderRequest, recv_window: u64, timestamp: u64) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    query
        .append_pair("symbol", &order.symbol)
        .append_pair("side", order.side.as_api_str())
        .append_pair("type", order.order_type.as_api_str());

    if let Some(price) = order.price {
        query
            .append_pair("timeInForce", order.time_in_force.as_api_str())
            .append_pair("quantity", &order.quantity.to_string())
            .append_pair("price", &price.to_string());
    } else {
        query.append_pair("quantity", &order.quantity.to_string());
    }

    if order.reduce_only {
        query.append_pair("reduceOnly", "true");
    }

    query
        .append_pair("recvWindow", &recv_window.to_string())
        .append_pair("timestamp", &timestamp.to_string())
        .finish()
}

/// HMAC-SHA256 of `payload` keyed with `secret`, hex encoded.
pub fn sign(secret: &str, payload: &str) -> String {
    let key = hmac::Key::new(hmac::HMAC_SHA256, secret.as_bytes());
    hex_encode(hmac::sign(&key, payload.as_bytes()).as_ref())
}

/// Map HTTP status and body into a JSON value, or into the error Binance reported.
pub fn decode_response(status: u16, body: &str) -> Result<Value, ExecutionError> {
    if (200..300).contains(&status) {
        if body.trim().is_empty() {
            return Ok(Value::Object(Default::default()));
        }
        return Ok(serde_json::from_str(body)?);
    }

    match serde_json::from_str::<BinanceErrorResponse>(body) {
        Ok(err) => Err(ExecutionError::Api { status, code: err.code, msg: err.msg }),
        Err(_) => Err(ExecutionError::Http { status, body: body.to_string() }),
    }
}
