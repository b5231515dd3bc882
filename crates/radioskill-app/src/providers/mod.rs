//! Station directory providers

pub mod radio_browser;
pub mod traits;

pub use radio_browser::RadioBrowserProvider;
pub use traits::StationDirectory;

#[cfg(test)]
pub(crate) mod mock;
