use thiserror::Error;

/// Error returned when a MAC address cannot be constructed
///
/// The variant records which constructor rejected the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidAddress {
    /// Text did not match `OO:OO:OO:OO:OO:OO`
    #[error("Invalid MAC address: \"{0}\"")]
    Text(String),

    /// Integer outside of [0, 0xFFFFFFFFFFFF]
    #[error("Invalid MAC address: {0}")]
    Integer(i128),

    /// Integer too wide for `i128`, kept as written
    #[error("Invalid MAC address: {0}")]
    WideInteger(String),

    /// Input that is neither text nor an integer
    #[error("Invalid MAC address: {0}")]
    Unsupported(String),
}

impl InvalidAddress {
    /// Short label of the constructor path that failed
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Integer(_) | Self::WideInteger(_) => "integer",
            Self::Unsupported(_) => "unsupported",
        }
    }
}
