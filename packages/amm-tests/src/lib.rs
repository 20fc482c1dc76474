//! Multitest harness with minimal constant product pair and factory contracts.

pub mod builder;
pub mod mock_factory;
pub mod mock_pair;
