// src/domain/mod.rs
pub mod client;
pub mod errors;
