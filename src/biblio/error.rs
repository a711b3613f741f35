use thiserror::Error;

#[derive(Error, Debug)]
pub enum BiblioError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Already exists: {0}")]
    DuplicateKey(String),

    #[error("No copies available for ISBN {0}")]
    NoCopiesAvailable(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Corrupt record: {0}")]
    CorruptRecord(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Password hashing error: {0}")]
    Hash(#[from] bcrypt::BcryptError),
}

impl From<csv::Error> for BiblioError {
    fn from(err: csv::Error) -> Self {
        // Plain IO faults stay IO errors; everything else means a bad row.
        let message = err.to_string();
        match err.into_kind() {
            csv::ErrorKind::Io(io) => BiblioError::Io(io),
            _ => BiblioError::CorruptRecord(message),
        }
    }
}

pub type Result<T> = std::result::Result<T, BiblioError>;
