//! # Storefront
//!
//! An in-memory storefront: a catalog, mock accounts and orders, each owned
//! by a [`store_actor::ResourceActor`], plus the pure pieces the shopper
//! interacts with directly.
//!
//! - [`cart`]: the cart state engine (immutable transitions, derived totals)
//! - [`catalog`]: filter/sort composition, search, seed data, stats
//! - [`clients`]: typed clients for each actor and the admin facade
//! - [`checkout`]: price summary and order placement
//! - [`lifecycle`]: [`StoreSystem`](lifecycle::StoreSystem) start and shutdown
//!
//! See [`store_actor::mock`] for testing clients without spawning actors.

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod clients;
pub mod config;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod product_actor;
pub mod telemetry;
pub mod user_actor;
