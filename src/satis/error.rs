use thiserror::Error;

#[derive(Debug, Error)]
pub enum SatisError {
    #[error("repo not found: {0}")]
    RepoNotFound(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("satis build failed ({status}): {stderr}")]
    Build { status: String, stderr: String },
    #[error("job processor stopped")]
    ProcessorStopped,
}
