//! Service layer providing the championship's store operations on top of models.
//! - `db`: plain async functions over a `DatabaseConnection`, one per storage call.
//! - `store`: the Rider Store and Motorcycle Store traits handed to the HTTP layer.
//! - Errors collapse into `ServiceError` (validation vs storage failure).

pub mod errors;
pub mod db;
pub mod store;
#[cfg(test)]
pub mod test_support;
