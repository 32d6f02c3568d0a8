/// Errors that can occur while parsing or mutating a URI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UriError {
    /// Text after the host/port separator was not a non-negative integer
    MalformedPort,
    /// Path shape conflicts with the presence or absence of an authority
    InvalidPath,
    /// Domain or TLD mutation attempted while the host is an IP address
    HostIsAddress,
    /// A `%` escape ended before two hex digits were read
    IncompleteEscape,
    /// Query argument lookup for a key that was never set
    UnknownQueryKey,
}

impl core::fmt::Display for UriError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            Self::MalformedPort => "Malformed port",
            Self::InvalidPath => "Invalid path",
            Self::HostIsAddress => "Host is an IP address, not a domain",
            Self::IncompleteEscape => "Incomplete percent escape",
            Self::UnknownQueryKey => "Unknown query key",
        };
        f.write_str(msg)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for UriError {}

/// Result type for URI operations
pub type Result<T> = core::result::Result<T, UriError>;
