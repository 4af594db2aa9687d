// --- File: crates/meetline_scheduling/src/lib.rs ---
// Declare modules within this crate
pub mod doc;
pub mod handlers;
pub mod logic;
#[cfg(test)]
mod logic_proptest;
pub mod memory;
pub mod resolver;
pub mod routes;
pub mod service;
