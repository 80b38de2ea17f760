use thiserror::Error;

#[derive(Debug, Error)]
pub enum WordlistError {
    /// The name does not match the wordlist name pattern.
    #[error("Not a valid wordlist name: {0}")]
    InvalidName(String),
    /// Reading a wordlist or scanning the wordlists directory failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, WordlistError>;
