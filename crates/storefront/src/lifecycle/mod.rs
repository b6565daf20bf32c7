//! # System Lifecycle
//!
//! [`StoreSystem`] creates the three actors without dependencies, then
//! injects the user and product clients into the order actor through
//! `run(context)`. The dependency graph is acyclic, so dropping the system's
//! clients is enough to stop everything: the order actor stops first and
//! releases the clients it held.

pub mod store_system;

pub use store_system::*;
