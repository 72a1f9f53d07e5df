pub const HOST: &str = "api.vimeo.com";

/// Pinned API version, sent with every request.
pub const ACCEPT: &str = "application/vnd.vimeo.*+json;version=3.4";

/// Default byte range sent per chunk PUT. Small enough that a failed send
/// is cheap to redo, large enough to keep round trips down.
pub const DEFAULT_CHUNK_SIZE: u64 = 1024 * 1024;

/// Transient failures tolerated per chunk before the upload gives up.
pub const MAX_CHUNK_RETRIES: u32 = 5;
