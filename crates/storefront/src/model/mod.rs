//! Plain data types. The ones owned by actors implement
//! [`ActorEntity`](store_actor::ActorEntity) in their actor module.

pub mod category;
pub mod order;
pub mod product;
pub mod user;

pub use category::*;
pub use order::*;
pub use product::*;
pub use user::*;
