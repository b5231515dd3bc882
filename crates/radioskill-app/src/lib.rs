//! Radioskill App Services
//!
//! Station directory provider, preset catalog, resolution chain, and the
//! skill that turns a spoken phrase into a playing stream.
//! Depends on the `radioskill` engine crate.

pub mod config;
pub mod data;
pub mod error;
pub mod network;
pub mod presets;
pub mod providers;
pub mod resolver;
pub mod skill;
