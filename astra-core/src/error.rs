use thiserror::Error;

#[derive(Error, Debug)]
pub enum AstraError {
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Store error: {0}")]
    Store(#[from] crate::store::StoreError),

    #[error("Generation error: {0}")]
    Generate(#[from] crate::generate::GenerateError),
}
