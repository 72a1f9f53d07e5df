use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("upload ticket refused: {0}")]
    TicketAcquisition(String),
    #[error("chunk transfer rejected, status: {0}")]
    Transfer(u16),
    #[error("upload verification failed: {0}")]
    Verification(String),
    #[error("retry budget exhausted, verified bytes: {bytes_written}")]
    TransferExhausted { bytes_written: u64 },
    #[error("read out of range, offset: {offset}, length: {length}")]
    OutOfRange { offset: u64, length: u64 },
    #[error("unexpected resp")]
    UnexpectedResp,
    #[error("api err, code: {0}, msg: {1}")]
    Api(u16, String),
    #[error("reqwest err: {0}")]
    Reqwest(#[from] reqwest::Error),
    #[error("io error: {0}")]
    IO(#[from] std::io::Error),
}

/// Statuses the api answers with when a request is worth repeating as-is.
const RETRYABLE_STATUS: [u16; 6] = [408, 429, 500, 502, 503, 504];

impl Error {
    /// Whether retrying the same call with the same ticket can still
    /// succeed. Classification is by status code and transport error kind,
    /// never by matching on error message text.
    pub fn is_transient(&self) -> bool {
        match self {
            Error::Transfer(status) | Error::Api(status, _) => {
                RETRYABLE_STATUS.contains(status)
            }
            Error::Reqwest(e) => e.is_timeout() || e.is_connect() || e.is_body(),
            Error::IO(_) => true,
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
