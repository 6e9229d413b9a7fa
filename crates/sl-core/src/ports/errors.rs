use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppDirsError {
    #[error("system data directory unavailable")]
    DataDirUnavailable,

    #[error("system config directory unavailable")]
    ConfigDirUnavailable,
}

#[derive(Debug, Error)]
pub enum StorageError {
    /// Storage is switched off or cannot be opened at all.
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("storage io error: {0}")]
    Io(String),

    /// A stored value could not be decoded.
    #[error("corrupt record '{key}': {reason}")]
    Corrupt { key: String, reason: String },
}

/// Failure talking to the remote API.
///
/// `Display` is the inline message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RemoteError {
    /// Non-2xx response. `detail` is the server's message when it sent one.
    #[error("{detail}")]
    Rejected { status: u16, detail: String },

    #[error("Network error. Please check your connection and try again.")]
    Network(String),

    #[error("Unexpected response from server")]
    Decode(String),
}

impl RemoteError {
    /// Build a rejection, falling back to the generic status message when
    /// the server gave no detail.
    pub fn rejected(status: u16, detail: Option<String>) -> Self {
        let detail = detail
            .filter(|d| !d.trim().is_empty())
            .unwrap_or_else(|| format!("Request failed with status {status}"));
        RemoteError::Rejected { status, detail }
    }
}
