//! Network operations
//!
//! JSON API client used by the directory provider.

pub mod client;

pub use client::ApiClient;
