#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("scan.image_empty")]
    ImageEmpty,
    #[error("scan.image_invalid")]
    ImageInvalid,
    #[error("scan.in_progress")]
    InProgress,
    /// The session was ended while the scan was in flight.
    #[error("scan.session_ended")]
    SessionEnded,
    /// The analysis provider could not produce a response. `reason` is for logs only.
    #[error("scan.provider_failed")]
    Provider { reason: String },
    /// The provider response was not a JSON object. `reason` is for logs only.
    #[error("scan.parse_failed")]
    Parse { reason: String },
    #[error("scan.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}

impl ScanError {
    pub fn provider(reason: impl Into<String>) -> Self {
        ScanError::Provider {
            reason: reason.into(),
        }
    }

    pub fn parse(reason: impl Into<String>) -> Self {
        ScanError::Parse {
            reason: reason.into(),
        }
    }

    /// Message with the internal cause attached, for diagnostics.
    pub fn diagnostic(&self) -> String {
        match self {
            ScanError::Provider { reason } | ScanError::Parse { reason } => {
                format!("{self}: {reason}")
            }
            ScanError::Repository(inner) => format!("{self}: {inner}"),
            other => other.to_string(),
        }
    }
}
