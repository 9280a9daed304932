//! Test/live execution of a validated order.

use crate::client::ExchangeClient;
use crate::errors::Error;
use crate::types::*;

use std::io::{self, BufRead, Write};

/// Asks the user to approve an action.
pub trait Confirm {
    /// Returns `true` only if the user explicitly agreed.
    fn confirm(&mut self, prompt: &str) -> io::Result<bool>;
}

/// Prompts on `output` and waits for a line on `input`.
/// Only `yes` (any case) counts as agreement.
pub struct PromptConfirmer<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> PromptConfirmer<R, W> {
    pub fn new(input: R, output: W) -> PromptConfirmer<R, W> {
        PromptConfirmer { input, output }
    }
}

impl PromptConfirmer<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        PromptConfirmer::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Confirm for PromptConfirmer<R, W> {
    fn confirm(&mut self, prompt: &str) -> io::Result<bool> {
        write!(self.output, "   {} Type 'yes' to continue: ", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(line.trim().eq_ignore_ascii_case("yes"))
    }
}

pub struct OrderExecutor<C> {
    client: C,
    mode: ExecutionMode,
}

impl<C: ExchangeClient> OrderExecutor<C> {
    pub fn new(client: C, mode: ExecutionMode) -> OrderExecutor<C> {
        OrderExecutor { client, mode }
    }

    pub fn mode(&self) -> ExecutionMode {
        self.mode
    }

    /// Execute `order` once according to the mode.
    ///
    /// In test mode the exchange only validates the order and no order id is
    /// returned. In live mode `confirmer` must approve first, otherwise
    /// `Error::UserAbort` is returned and the exchange is never contacted.
    pub fn execute<F: Confirm>(&self, order: &OrderRequest, confirmer: &mut F) -> Result<OrderResult, Error> {
        let span = tracing::info_span!("execute",
            symbol = %order.symbol,
            side = %order.side,
            order_type = %order.order_type,
            mode = ?self.mode);
        let _enter = span.enter();

        match self.mode {
            ExecutionMode::Test => {
                tracing::info!("🧪 Testing {} order: {} {} {}{}",
                    order.order_type, order.symbol, order.side, order.quantity, price_suffix(order));
                let response = self.client.test_order(order).map_err(|e| {
                    tracing::error!("❌ Test order validation failed: {}", e);
                    e
                })?;
                tracing::info!("✅ Test order validation successful");
                Ok(OrderResult { order_id: None, ..OrderResult::from_response(response) })
            }
            ExecutionMode::Live => {
                if !confirmer.confirm("This will place a REAL order!")? {
                    tracing::warn!("Live order declined by user");
                    return Err(Error::UserAbort);
                }
                tracing::info!("🚀 Placing {} order: {} {} {}{}",
                    order.order_type, order.symbol, order.side, order.quantity, price_suffix(order));
                let response = self.client.place_order(order).map_err(|e| {
                    tracing::error!("❌ Order placement failed: {}", e);
                    e
                })?;
                let result = OrderResult::from_response(response);
                match result.order_id {
                    Some(id) => tracing::info!("✅ Order placed successfully: Order ID {}", id),
                    None => tracing::warn!("Order accepted but response carried no orderId"),
                }
                Ok(result)
            }
        }
    }
}

fn price_suffix(order: &OrderRequest) -> String {
    match order.price {
        Some(p) => format!(" @ ${}", p),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ExecutionError;
    use crate::validator::validate;

    use serde_json::{json, Value};
    use std::cell::RefCell;

    /// Records calls and answers with a canned response.
    struct MockClient {
        calls: RefCell<Vec<&'static str>>,
        response: fn() -> Result<Value, ExecutionError>,
    }

    impl MockClient {
        fn answering(response: fn() -> Result<Value, ExecutionError>) -> MockClient {
            MockClient { calls: RefCell::new(Vec::new()), response }
        }
    }

    impl ExchangeClient for &MockClient {
        fn test_order(&self, _order: &OrderRequest) -> Result<Value, ExecutionError> {
            self.calls.borrow_mut().push("test_order");
            (self.response)()
        }

        fn place_order(&self, _order: &OrderRequest) -> Result<Value, ExecutionError> {
            self.calls.borrow_mut().push("place_order");
            (self.response)()
        }
    }

    fn order(symbol: &str, side: &str, qty: &str, order_type: OrderType, price: Option<&str>) -> OrderRequest {
        validate(&OrderParams {
            symbol: symbol.to_string(),
            side: side.to_string(),
            quantity: qty.to_string(),
            order_type,
            price: price.map(str::to_string),
            time_in_force: TimeInForce::Gtc,
            reduce_only: false,
        })
        .unwrap()
    }

    fn answer(input: &str) -> PromptConfirmer<&[u8], Vec<u8>> {
        PromptConfirmer::new(input.as_bytes(), Vec::new())
    }

    #[test]
    fn test_mode_succeeds_without_order_id() {
        let client = MockClient::answering(|| Ok(json!({})));
        let executor = OrderExecutor::new(&client, ExecutionMode::Test);
        // nothing on stdin, test mode must not ask
        let mut confirmer = answer("");

        let result = executor
            .execute(&order("BTCUSDT", "BUY", "0.001", OrderType::Market, None), &mut confirmer)
            .unwrap();
        assert!(result.success);
        assert_eq!(result.order_id, None);
        assert_eq!(*client.calls.borrow(), vec!["test_order"]);
        assert!(confirmer.output.is_empty());
    }

    #[test]
    fn test_mode_validates_limit_order() {
        let client = MockClient::answering(|| Ok(json!({})));
        let executor = OrderExecutor::new(&client, ExecutionMode::Test);

        let result = executor
            .execute(&order("ETHUSDT", "SELL", "0.01", OrderType::Limit, Some("3500")), &mut answer(""))
            .unwrap();
        assert!(result.success);
        assert_eq!(result.order_id, None);
    }

    #[test]
    fn test_mode_drops_order_id_from_response() {
        let client = MockClient::answering(|| Ok(json!({"orderId": 7})));
        let executor = OrderExecutor::new(&client, ExecutionMode::Test);

        let result = executor
            .execute(&order("BTCUSDT", "BUY", "0.001", OrderType::Market, None), &mut answer("yes\n"))
            .unwrap();
        assert_eq!(result.order_id, None);
        assert_eq!(result.outcome, Outcome::Response(json!({"orderId": 7})));
    }

    #[test]
    fn test_live_without_yes_aborts() {
        for input in ["", "no\n", "y\n", "yess\n"] {
            let client = MockClient::answering(|| Ok(json!({"orderId": 1})));
            let executor = OrderExecutor::new(&client, ExecutionMode::Live);

            let res = executor.execute(&order("BTCUSDT", "BUY", "0.001", OrderType::Market, None), &mut answer(input));
            assert!(matches!(res, Err(Error::UserAbort)), "input {:?}", input);
            assert!(client.calls.borrow().is_empty(), "input {:?}", input);
        }
    }

    #[test]
    fn test_live_with_yes_places_order() {
        let client = MockClient::answering(|| Ok(json!({"orderId": 3978524, "status": "NEW"})));
        let executor = OrderExecutor::new(&client, ExecutionMode::Live);
        let mut confirmer = answer("YES\n");

        let result = executor
            .execute(&order("BTCUSDT", "BUY", "0.001", OrderType::Market, None), &mut confirmer)
            .unwrap();
        assert!(result.success);
        assert_eq!(result.order_id, Some(3978524));
        assert_eq!(*client.calls.borrow(), vec!["place_order"]);

        let prompt = String::from_utf8(confirmer.output).unwrap();
        assert!(prompt.contains("Type 'yes' to continue"));
    }

    #[test]
    fn test_exchange_error_propagates() {
        let client = MockClient::answering(|| {
            Err(ExecutionError::Api { status: 401, code: -2015, msg: "Invalid API-key".to_string() })
        });
        let executor = OrderExecutor::new(&client, ExecutionMode::Test);

        let res = executor.execute(&order("BTCUSDT", "BUY", "0.001", OrderType::Market, None), &mut answer(""));
        assert!(matches!(res, Err(Error::Execution(ExecutionError::Api { code: -2015, .. }))));
        // single attempt
        assert_eq!(client.calls.borrow().len(), 1);
    }
}
