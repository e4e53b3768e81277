#[derive(Debug, thiserror::Error)]
pub enum TransferError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
