use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid argument '{0}': {1}")]
    InvalidArgument(&'static str, String),

    #[error("Cannot represent {0} as JSON")]
    Unrepresentable(&'static str),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn code(&self) -> &'static str {
        match self {
            Error::InvalidArgument(..) => "INVALID_ARGUMENT",
            Error::Unrepresentable(_) => "UNREPRESENTABLE",
            Error::Json(_) => "JSON_ERROR",
        }
    }
}
