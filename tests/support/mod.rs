// tests/support/mod.rs
// Shared by several integration test binaries; each one uses only part of it.
#[allow(dead_code, unused_imports)]
pub mod builders;


#[allow(dead_code)]
pub mod postgres;

#[allow(unused_imports)]
pub use builders::*;
