//! Persistence entities for the championship: riders and their motorcycles.
//!
//! Each entity module carries its SeaORM definition plus the field
//! validation and insert helpers used by the store layer.

pub mod errors;
pub mod db;
pub mod numeric;
pub mod score;
pub mod rider;
pub mod motorcycle;

#[cfg(test)]
mod tests;
