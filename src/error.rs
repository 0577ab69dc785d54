use thiserror::Error;

#[derive(Debug, Error)]
pub enum UiError {
    #[error("Invalid style: {0}")]
    InvalidStyle(&'static str),
}

pub type Result<T> = std::result::Result<T, UiError>;
