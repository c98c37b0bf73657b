use thiserror::Error;

#[derive(Error, Debug)]
pub enum CreditError {
    #[error("application file not found: {0}")]
    ApplicationNotFound(String),

    #[error("application parse error: {0}")]
    ApplicationParse(String),

    #[error("no application files given")]
    NoApplicationFiles,

    #[error("directory does not exist: {0}")]
    DirectoryNotFound(String),

    #[error("refusing to overwrite existing file: {0}")]
    TemplateExists(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CreditError>;
