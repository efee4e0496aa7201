//! Analysis history: persistence, dashboard filters and aggregation.

pub mod aggregation;
pub mod export;
pub mod filter;
pub mod store;
