//! # Cart State Engine
//!
//! Pure and synchronous: no actor, no I/O, no logging. The presentation layer
//! owns a [`CartState`] and replaces it with the result of each transition.
//!
//! ```rust
//! use storefront::cart::{CartAction, CartState};
//! use storefront::catalog::seed::seed_products;
//!
//! let products = seed_products();
//! let cart = CartState::new()
//!     .add_item(&products[0])
//!     .add_item(&products[0])
//!     .reduce(CartAction::AddItem(products[1].clone()));
//!
//! assert_eq!(cart.item_count(), 3);
//! assert_eq!(cart.items().len(), 2);
//! ```

pub mod action;
pub mod state;

pub use action::{reduce, CartAction};
pub use state::{CartLine, CartState};
