//! Store abstractions consumed by the HTTP layer.
//!
//! Each store is a trait object so the router only sees `Arc<dyn ...>`;
//! the SeaORM implementations own the connection they were built with.

pub mod rider;
pub mod motorcycle;

pub use motorcycle::{MotorcycleStore, SeaOrmMotorcycleStore};
pub use rider::{RiderStore, SeaOrmRiderStore};
