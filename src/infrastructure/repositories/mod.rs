// src/infrastructure/repositories/mod.rs
mod error;
pub mod memory;
mod postgres;
mod timeout;

pub use memory::MemoryClientStore;
pub use postgres::PostgresClientStore;
pub use timeout::TimeoutClientStore;
