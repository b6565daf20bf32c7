//! # Checkout
//!
//! Turns a cart into an order. The price summary is pure; [`place_order`]
//! sends one create request to the order actor and only hands back a cleared
//! cart once the actor has accepted the order.

use crate::cart::{CartLine, CartState};
use crate::clients::OrderClient;
use crate::model::{OrderCreate, OrderId, OrderLine, ShippingAddress, ShippingMethod, UserId};
use crate::order_actor::OrderError;
use serde::Serialize;
use thiserror::Error;
use tracing::{info, instrument, warn};

#[derive(Debug, Error, PartialEq)]
pub enum CheckoutError {
    #[error("Cart is empty")]
    EmptyCart,

    #[error(transparent)]
    Order(#[from] OrderError),
}

impl From<&CartLine> for OrderLine {
    fn from(line: &CartLine) -> Self {
        Self {
            product_id: line.product.id,
            product_name: line.product.name.clone(),
            price: line.product.price,
            quantity: line.quantity,
        }
    }
}

/// The amounts shown next to the "Place Order" button.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CheckoutSummary {
    pub item_count: u32,
    pub subtotal: f64,
    pub tax: f64,
    pub shipping: f64,
    pub total: f64,
    pub shipping_method: ShippingMethod,
}

impl CheckoutSummary {
    pub fn compute(cart: &CartState, shipping_method: ShippingMethod, tax_rate: f64) -> Self {
        let subtotal = cart.total();
        let tax = subtotal * tax_rate;
        let shipping = shipping_method.price();
        Self {
            item_count: cart.item_count(),
            subtotal,
            tax,
            shipping,
            total: subtotal + tax + shipping,
            shipping_method,
        }
    }
}

/// Formats an amount the way the storefront displays it, e.g. `$1,299.99`.
pub fn format_price(amount: f64) -> String {
    let cents = (amount * 100.0).round() as i64;
    let (sign, cents) = if cents < 0 { ("-", -cents) } else { ("", cents) };
    let dollars = (cents / 100).to_string();
    let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
    for (i, digit) in dollars.chars().enumerate() {
        if i > 0 && (dollars.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    format!("{sign}${grouped}.{:02}", cents % 100)
}

#[derive(Debug, Clone)]
pub struct CheckoutRequest {
    pub user_id: UserId,
    pub shipping_address: ShippingAddress,
    pub shipping_method: ShippingMethod,
}

#[derive(Debug, Clone)]
pub struct CheckoutReceipt {
    pub order_id: OrderId,
    pub summary: CheckoutSummary,
    /// The cart to show after a successful order.
    pub cart: CartState,
}

/// Places an order for everything in `cart`.
///
/// The caller's cart is borrowed, so on error it is still intact.
#[instrument(skip_all, fields(user_id = %request.user_id, items = cart.item_count()))]
pub async fn place_order(
    orders: &OrderClient,
    cart: &CartState,
    request: &CheckoutRequest,
    tax_rate: f64,
) -> Result<CheckoutReceipt, CheckoutError> {
    if cart.is_empty() {
        warn!("Checkout attempted with an empty cart");
        return Err(CheckoutError::EmptyCart);
    }

    let summary = CheckoutSummary::compute(cart, request.shipping_method, tax_rate);
    let params = OrderCreate {
        user_id: request.user_id,
        lines: cart.items().iter().map(OrderLine::from).collect(),
        subtotal: summary.subtotal,
        tax: summary.tax,
        shipping: summary.shipping,
        total: summary.total,
        shipping_method: request.shipping_method,
        shipping_address: request.shipping_address.clone(),
    };

    let order_id = orders.create_order(params).await?;
    info!(order_id = %order_id, total = %format_price(summary.total), "Order placed");
    Ok(CheckoutReceipt {
        order_id,
        summary,
        cart: cart.clone().clear(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed::seed_products;

    #[test]
    fn test_summary_adds_tax_and_shipping() {
        let products = seed_products();
        let cart = CartState::new()
            .add_item(&products[0])
            .add_item(&products[5]);

        let summary = CheckoutSummary::compute(&cart, ShippingMethod::Express, 0.08);
        let subtotal = 299.99 + 29.99;
        assert!((summary.subtotal - subtotal).abs() < 1e-9);
        assert!((summary.tax - subtotal * 0.08).abs() < 1e-9);
        assert_eq!(summary.shipping, 15.99);
        assert!((summary.total - (subtotal * 1.08 + 15.99)).abs() < 1e-9);
        assert_eq!(summary.item_count, 2);
    }

    #[test]
    fn test_summary_for_empty_cart() {
        let summary = CheckoutSummary::compute(&CartState::new(), ShippingMethod::Standard, 0.08);
        assert_eq!(summary.total, 0.0);
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(0.0), "$0.00");
        assert_eq!(format_price(29.99), "$29.99");
        assert_eq!(format_price(1299.999), "$1,300.00");
        assert_eq!(format_price(1234567.5), "$1,234,567.50");
        assert_eq!(format_price(-5.25), "-$5.25");
    }

    #[test]
    fn test_order_line_captures_name_and_price() {
        let products = seed_products();
        let cart = CartState::new().add_item(&products[2]).add_item(&products[2]);
        let line = OrderLine::from(&cart.items()[0]);
        assert_eq!(line.product_name, "Designer Leather Jacket");
        assert_eq!(line.quantity, 2);
        assert!((line.line_total() - 899.98).abs() < 1e-9);
    }
}
