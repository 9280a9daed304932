//! Order parameter validation.
//!
//! Nothing in here touches the network; a request which passes `validate()`
//! is well-formed, though the exchange may still reject it (unknown symbol,
//! lot size, price filters and so on).

use crate::errors::ValidationError;
use crate::types::*;

use rust_decimal::Decimal;
use std::str::FromStr;

/// Validate and normalize raw order parameters.
pub fn validate(params: &OrderParams) -> Result<OrderRequest, ValidationError> {
    let symbol = validate_symbol(&params.symbol)?;
    let side = OrderSide::from_str(&params.side)
        .map_err(|_| ValidationError::InvalidSide(params.side.trim().to_uppercase()))?;
    let quantity = validate_quantity(&params.quantity)?;

    let price = match params.order_type {
        OrderType::Limit => {
            let raw = params.price.as_deref().ok_or(ValidationError::MissingPrice)?;
            Some(validate_price(raw)?)
        }
        OrderType::Market => {
            if let Some(raw) = &params.price {
                tracing::warn!("Ignoring price {} for MARKET order", raw);
            }
            None
        }
    };

    Ok(OrderRequest {
        symbol,
        side,
        quantity,
        order_type: params.order_type,
        price,
        time_in_force: params.time_in_force,
        reduce_only: params.reduce_only,
    })
}

fn validate_symbol(raw: &str) -> Result<String, ValidationError> {
    let symbol = raw.trim().to_uppercase();
    if symbol.is_empty() {
        return Err(ValidationError::EmptySymbol);
    }

    if !symbol.bytes().all(|b| b.is_ascii_uppercase() || b.is_ascii_digit()) {
        return Err(ValidationError::InvalidSymbol(symbol));
    }

    if !symbol.ends_with("USDT") || symbol.len() < 5 {
        tracing::warn!("Symbol {} may not be valid for USDT-M Futures", symbol);
    }

    Ok(symbol)
}

/// Whether `raw` is written as an optionally signed plain decimal, e.g. `-0.5`.
/// `Decimal::from_str` alone would also take `1_000` and `1e3`.
fn is_plain_decimal(raw: &str) -> bool {
    let digits = raw.strip_prefix(|c: char| c == '-' || c == '+').unwrap_or(raw);
    digits.bytes().any(|b| b.is_ascii_digit())
        && digits.bytes().all(|b| b.is_ascii_digit() || b == b'.')
        && digits.bytes().filter(|b| *b == b'.').count() <= 1
}

fn parse_decimal(raw: &str) -> Option<Decimal> {
    if !is_plain_decimal(raw) {
        return None;
    }
    Decimal::from_str(raw).ok()
}

fn validate_quantity(raw: &str) -> Result<Decimal, ValidationError> {
    let raw = raw.trim();
    let qty = parse_decimal(raw).ok_or_else(|| ValidationError::InvalidQuantity(raw.to_string()))?;
    if qty <= Decimal::ZERO {
        return Err(ValidationError::NonPositiveQuantity(raw.to_string()));
    }
    Ok(qty)
}

fn validate_price(raw: &str) -> Result<Decimal, ValidationError> {
    let raw = raw.trim();
    let price = parse_decimal(raw).ok_or_else(|| ValidationError::InvalidPrice(raw.to_string()))?;
    if price <= Decimal::ZERO {
        return Err(ValidationError::NonPositivePrice(raw.to_string()));
    }
    Ok(price)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn market(symbol: &str, side: &str, qty: &str) -> OrderParams {
        OrderParams {
            symbol: symbol.to_string(),
            side: side.to_string(),
            quantity: qty.to_string(),
            order_type: OrderType::Market,
            price: None,
            time_in_force: TimeInForce::Gtc,
            reduce_only: false,
        }
    }

    fn limit(symbol: &str, side: &str, qty: &str, price: Option<&str>) -> OrderParams {
        OrderParams {
            order_type: OrderType::Limit,
            price: price.map(str::to_string),
            ..market(symbol, side, qty)
        }
    }

    #[test]
    fn test_market_order_is_normalized() {
        let req = validate(&market(" btcusdt ", "buy", "0.001")).unwrap();
        assert_eq!(req.symbol, "BTCUSDT");
        assert_eq!(req.side, OrderSide::Buy);
        assert_eq!(req.quantity, Decimal::from_str("0.001").unwrap());
        assert_eq!(req.order_type, OrderType::Market);
        assert_eq!(req.price, None);
    }

    #[test]
    fn test_non_positive_quantity_fails() {
        for qty in ["0", "0.0", "-0.001", "-5"] {
            assert_eq!(
                validate(&market("BTCUSDT", "BUY", qty)),
                Err(ValidationError::NonPositiveQuantity(qty.to_string())),
                "quantity {}", qty
            );
        }
    }

    #[test]
    fn test_unparsable_quantity_fails() {
        assert_eq!(
            validate(&market("BTCUSDT", "BUY", "lots")),
            Err(ValidationError::InvalidQuantity("lots".to_string()))
        );
        assert!(matches!(
            validate(&market("BTCUSDT", "BUY", "")),
            Err(ValidationError::InvalidQuantity(_))
        ));
    }

    #[test]
    fn test_only_plain_decimals_are_accepted() {
        for qty in ["1_000", "1e3", "0x10", "1.2.3", ".", "+", "99999999999999999999999999999999"] {
            assert_eq!(
                validate(&market("BTCUSDT", "BUY", qty)),
                Err(ValidationError::InvalidQuantity(qty.to_string())),
                "quantity {}", qty
            );
        }
        assert_eq!(
            validate(&limit("BTCUSDT", "BUY", "1", Some("60_000"))),
            Err(ValidationError::InvalidPrice("60_000".to_string()))
        );
        assert_eq!(validate(&market("BTCUSDT", "BUY", "1000")).unwrap().quantity, Decimal::from(1000));
    }

    #[test]
    fn test_side_must_be_buy_or_sell() {
        assert_eq!(validate(&market("BTCUSDT", "Sell", "1")).unwrap().side, OrderSide::Sell);
        assert_eq!(
            validate(&market("BTCUSDT", "hold", "1")),
            Err(ValidationError::InvalidSide("HOLD".to_string()))
        );
    }

    #[test]
    fn test_symbol_format() {
        assert_eq!(validate(&market("  ", "BUY", "1")), Err(ValidationError::EmptySymbol));
        assert_eq!(
            validate(&market("BTC/USDT", "BUY", "1")),
            Err(ValidationError::InvalidSymbol("BTC/USDT".to_string()))
        );
        assert_eq!(
            validate(&market("btc-usdt", "BUY", "1")),
            Err(ValidationError::InvalidSymbol("BTC-USDT".to_string()))
        );
        // accepted with a warning only
        assert_eq!(validate(&market("ETHBTC", "BUY", "1")).unwrap().symbol, "ETHBTC");
    }

    #[test]
    fn test_limit_order_requires_positive_price() {
        assert_eq!(
            validate(&limit("BTCUSDT", "BUY", "0.001", None)),
            Err(ValidationError::MissingPrice)
        );
        for price in ["0", "-60000"] {
            assert_eq!(
                validate(&limit("BTCUSDT", "BUY", "0.001", Some(price))),
                Err(ValidationError::NonPositivePrice(price.to_string()))
            );
        }
        assert_eq!(
            validate(&limit("BTCUSDT", "BUY", "0.001", Some("cheap"))),
            Err(ValidationError::InvalidPrice("cheap".to_string()))
        );
    }

    #[test]
    fn test_limit_sell_validates() {
        let req = validate(&limit("ETHUSDT", "SELL", "0.01", Some("3500"))).unwrap();
        assert_eq!(req.symbol, "ETHUSDT");
        assert_eq!(req.side, OrderSide::Sell);
        assert_eq!(req.quantity, Decimal::from_str("0.01").unwrap());
        assert_eq!(req.order_type, OrderType::Limit);
        assert_eq!(req.price, Some(Decimal::from(3500)));
    }

    #[test]
    fn test_market_order_ignores_price() {
        let params = OrderParams { price: Some("-1".to_string()), ..market("BTCUSDT", "BUY", "1") };
        assert_eq!(validate(&params).unwrap().price, None);
    }

    #[test]
    fn test_quantity_checked_before_price() {
        assert_eq!(
            validate(&limit("BTCUSDT", "BUY", "0", None)),
            Err(ValidationError::NonPositiveQuantity("0".to_string()))
        );
    }
}
