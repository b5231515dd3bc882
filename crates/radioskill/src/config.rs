//! Configuration constants for the radioskill engine

/// Network-related configuration
pub mod network {
    /// User agent for HTTP requests
    pub const USER_AGENT: &str = concat!("Radioskill/", env!("CARGO_PKG_VERSION"));

    /// Connection timeout in seconds
    pub const CONNECT_TIMEOUT_SECS: u64 = 10;

    /// Read timeout in seconds
    pub const READ_TIMEOUT_SECS: u64 = 30;
}

/// Background download configuration
pub mod download {
    /// External program used to fetch the stream
    pub const DEFAULT_PROGRAM: &str = "curl";

    /// Follow redirects
    pub const FOLLOW_REDIRECTS_FLAG: &str = "-L";

    /// No progress meter or error output
    pub const SILENT_FLAG: &str = "-s";

    /// Output file flag (followed by the conduit path)
    pub const OUTPUT_FLAG: &str = "-o";
}

/// Conduit (named pipe) configuration
pub mod conduit {
    /// File name of the conduit inside the cache directory
    pub const FILE_NAME: &str = "stream";

    /// Permission bits for a freshly created conduit
    pub const MODE: u32 = 0o600;

    /// Mime type announced to the playback engine
    pub const MIME_TYPE: &str = "audio/mpeg";

    /// URI scheme prefix handed to the playback engine
    pub const URI_SCHEME: &str = "file://";
}
