// src/lib.rs
pub mod config;
pub mod domain;
pub mod infrastructure;
