/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.capacity_exceeded")]
    CapacityExceeded,
}

impl RepositoryError {
    pub fn capacity_exceeded() -> Self {
        RepositoryError::CapacityExceeded
    }
}
