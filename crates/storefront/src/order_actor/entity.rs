//! [`ActorEntity`] implementation for [`Order`].

use super::error::OrderError;
use crate::clients::{ProductClient, UserClient};
use crate::model::{Order, OrderCreate, OrderId, OrderStatus, OrderUpdate};
use crate::product_actor::ProductError;
use async_trait::async_trait;
use chrono::Utc;
use store_actor::{ActorClient, ActorEntity};
use tracing::debug;

#[async_trait]
impl ActorEntity for Order {
    const KIND: &'static str = "Order";

    type Id = OrderId;
    type Create = OrderCreate;
    type Update = OrderUpdate;
    type Action = ();
    type ActionResult = ();
    type Context = (UserClient, ProductClient);
    type Error = OrderError;

    /// Checks the payload on its own. Cross-actor checks happen in `on_create`.
    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, OrderError> {
        if params.lines.is_empty() {
            return Err(OrderError::Validation("Order has no items".into()));
        }
        if let Some(line) = params.lines.iter().find(|line| line.quantity == 0) {
            return Err(OrderError::Validation(format!(
                "Quantity for {} must be positive",
                line.product_id
            )));
        }
        let missing = params.shipping_address.missing_fields();
        if !missing.is_empty() {
            return Err(OrderError::Validation(format!(
                "Missing shipping fields: {}",
                missing.join(", ")
            )));
        }

        Ok(Order {
            id,
            user_id: params.user_id,
            lines: params.lines,
            subtotal: params.subtotal,
            tax: params.tax,
            shipping: params.shipping,
            total: params.total,
            shipping_method: params.shipping_method,
            shipping_address: params.shipping_address,
            status: OrderStatus::Pending,
            created_at: Utc::now(),
        })
    }

    /// The buyer must exist and every line must be orderable.
    async fn on_create(&mut self, ctx: &Self::Context) -> Result<(), OrderError> {
        let (user_client, product_client) = ctx;
        debug!(order_id = %self.id, user_id = %self.user_id, "Validating order");

        let user = user_client
            .get(self.user_id)
            .await
            .map_err(|e| OrderError::ActorCommunication(e.to_string()))?;
        if user.is_none() {
            return Err(OrderError::InvalidUser(self.user_id.to_string()));
        }

        for line in &self.lines {
            debug!(product_id = %line.product_id, quantity = line.quantity, "Checking stock");
            match product_client.check_stock(line.product_id).await {
                Ok(true) => {}
                Ok(false) => return Err(OrderError::OutOfStock(line.product_name.clone())),
                Err(ProductError::NotFound(id)) => return Err(OrderError::InvalidProduct(id)),
                Err(e) => return Err(OrderError::ActorCommunication(e.to_string())),
            }
        }
        Ok(())
    }

    async fn on_update(&mut self, update: OrderUpdate, _ctx: &Self::Context) -> Result<(), OrderError> {
        if let Some(status) = update.status {
            self.status = status;
        }
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &Self::Context) -> Result<(), OrderError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{OrderLine, ProductId, ShippingAddress, ShippingMethod, UserId};

    fn address() -> ShippingAddress {
        ShippingAddress {
            first_name: "John".into(),
            last_name: "Doe".into(),
            address: "1 Main St".into(),
            city: "Springfield".into(),
            state: "IL".into(),
            zip_code: "62701".into(),
        }
    }

    fn params(lines: Vec<OrderLine>) -> OrderCreate {
        OrderCreate {
            user_id: UserId(2),
            lines,
            subtotal: 20.0,
            tax: 1.6,
            shipping: 0.0,
            total: 21.6,
            shipping_method: ShippingMethod::Standard,
            shipping_address: address(),
        }
    }

    fn line(quantity: u32) -> OrderLine {
        OrderLine {
            product_id: ProductId(6),
            product_name: "Bestselling Novel Collection".into(),
            price: 10.0,
            quantity,
        }
    }

    #[test]
    fn test_new_order_is_pending() {
        let order = Order::from_create_params(OrderId(1), params(vec![line(2)])).unwrap();
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.item_count(), 2);
        assert_eq!(order.id.to_string(), "ORD-000001");
    }

    #[test]
    fn test_rejects_empty_and_zero_quantity() {
        assert!(matches!(
            Order::from_create_params(OrderId(1), params(vec![])),
            Err(OrderError::Validation(_))
        ));
        assert!(matches!(
            Order::from_create_params(OrderId(1), params(vec![line(1), line(0)])),
            Err(OrderError::Validation(_))
        ));
    }

    #[test]
    fn test_rejects_incomplete_address() {
        let mut p = params(vec![line(1)]);
        p.shipping_address.city = " ".into();
        p.shipping_address.zip_code.clear();
        let err = Order::from_create_params(OrderId(1), p).unwrap_err();
        assert_eq!(
            err,
            OrderError::Validation("Missing shipping fields: city, zip_code".into())
        );
    }
}
