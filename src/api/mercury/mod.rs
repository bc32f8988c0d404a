pub mod client;
pub mod models;

pub use client::MercuryClient;
pub use models::{ApiError, ListTransactionsParams};
