pub mod config;
pub mod error;
pub mod export;
pub mod handlers;
pub mod reference;
pub mod reporting;
pub mod routes;
pub mod seed;
pub mod storage;
pub mod submission;
pub mod templates;

pub use storage::Database;
