//! Demo walk-through of a shopping session against the in-memory store.

use storefront::cart::CartState;
use storefront::catalog::{ProductFilter, SortBy};
use storefront::checkout::{self, format_price, CheckoutRequest, CheckoutSummary};
use storefront::clients::AdminClient;
use storefront::config::Config;
use storefront::lifecycle::StoreSystem;
use storefront::model::{ShippingAddress, ShippingMethod};
use storefront::telemetry::setup_tracing;
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    let _ = dotenvy::dotenv();
    setup_tracing();

    let config = Config::from_env().map_err(|e| e.to_string())?;
    info!(?config, "Starting storefront demo");
    let system = StoreSystem::start(&config).await.map_err(|e| e.to_string())?;

    let span = tracing::info_span!("browse");
    let products = async {
        let filter = ProductFilter::default()
            .with_category("electronics")
            .with_sort(SortBy::PriceLow)
            .in_stock_only(true);
        system.product_client.browse(&filter).await
    }
    .instrument(span)
    .await
    .map_err(|e| e.to_string())?;

    for product in &products {
        info!(id = %product.id, price = %format_price(product.price), "{}", product.name);
    }

    let cart = products
        .iter()
        .take(2)
        .fold(CartState::new(), |cart, product| cart.add_item(product));
    let cart = match products.first() {
        Some(cheapest) => cart.add_item(cheapest),
        None => cart,
    };
    info!(
        lines = cart.items().len(),
        items = cart.item_count(),
        total = %format_price(cart.total()),
        "Cart ready"
    );

    let session = system
        .user_client
        .login("user@example.com", "user123")
        .await
        .map_err(|e| e.to_string())?;
    info!(user = %session.user.full_name(), "Logged in");

    let request = CheckoutRequest {
        user_id: session.user.id,
        shipping_address: ShippingAddress {
            first_name: session.user.first_name.clone(),
            last_name: session.user.last_name.clone(),
            address: "123 Market Street".into(),
            city: "San Francisco".into(),
            state: "CA".into(),
            zip_code: "94103".into(),
        },
        shipping_method: ShippingMethod::Express,
    };
    let preview = CheckoutSummary::compute(&cart, request.shipping_method, config.tax_rate);
    info!(
        subtotal = %format_price(preview.subtotal),
        tax = %format_price(preview.tax),
        shipping = %format_price(preview.shipping),
        total = %format_price(preview.total),
        "Checkout summary"
    );

    let span = tracing::info_span!("checkout");
    let cart = match checkout::place_order(&system.order_client, &cart, &request, config.tax_rate)
        .instrument(span)
        .await
    {
        Ok(receipt) => {
            info!(order_id = %receipt.order_id, "Order placed");
            receipt.cart
        }
        Err(e) => {
            error!(error = %e, "Checkout failed");
            cart
        }
    };
    info!(items = cart.item_count(), "Cart after checkout");

    let orders = system
        .order_client
        .orders_for_user(session.user.id)
        .await
        .map_err(|e| e.to_string())?;
    for order in &orders {
        info!(order_id = %order.id, status = ?order.status, total = %format_price(order.total), "Order");
    }

    let admin_session = system
        .user_client
        .login("admin@elitestore.com", "admin123")
        .await
        .map_err(|e| e.to_string())?;
    let admin = AdminClient::authorize(&admin_session, system.product_client.clone())
        .map_err(|e| e.to_string())?;
    let stats = admin.stats().await.map_err(|e| e.to_string())?;
    info!(?stats, "Dashboard");
    drop(admin);

    system.shutdown().await.map_err(|e| e.to_string())?;
    info!("Demo completed");
    Ok(())
}
