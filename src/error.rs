use thiserror::Error;

#[derive(Error, Debug)]
pub enum TeaError {
    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("profile parse error: {0}")]
    ProfileParse(String),

    #[error("invalid descriptor table: {0}")]
    DescriptorTable(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TeaError>;
