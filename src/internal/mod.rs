pub mod aggregator;
pub mod error;
pub mod models;
pub mod ranker;
