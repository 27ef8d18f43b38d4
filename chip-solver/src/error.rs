/// Library errors. The search itself never fails; these come from the
/// boundaries around it.
#[derive(Debug, thiserror::Error)]
pub enum ChainError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("chain has {indices} indices but {flips} orientation flags")]
    LengthMismatch { indices: usize, flips: usize },
    #[error("chain refers to chip #{index} but only {chip_count} chips were supplied")]
    IndexOutOfRange { index: usize, chip_count: usize },
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Parse(#[from] serde_json::Error),
}

impl ChainError {
    /// True for the two reconstruction failures, which only arise when a chain
    /// is paired with a chip list it did not come from.
    pub fn is_reconstruction_inconsistency(&self) -> bool {
        matches!(
            self,
            ChainError::LengthMismatch { .. } | ChainError::IndexOutOfRange { .. }
        )
    }
}
