//! One function per storage call, taking the connection explicitly.

pub mod rider_service;
pub mod motorcycle_service;
