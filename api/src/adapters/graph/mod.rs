//! Graph API adapter

pub mod client;

pub use client::GraphClientImpl;
