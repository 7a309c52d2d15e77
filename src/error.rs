use thiserror::Error;

#[derive(Error, Debug)]
pub enum EvolutionError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

pub type Result<T> = std::result::Result<T, EvolutionError>;
