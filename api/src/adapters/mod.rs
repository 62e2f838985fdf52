//! Adapters layer
//!
//! Concrete implementations of the domain ports.

pub mod graph;

pub use graph::GraphClientImpl;
