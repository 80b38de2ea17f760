// Library interface for the diceware wordlist tools
// Integration tests and the binary go through these modules

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod name;
pub mod wordlist;

pub use config::Config;
pub use error::{Result, WordlistError};
pub use name::{WORDLIST_NAME_PATTERN, WordlistName, is_valid_wordlist_name};
pub use wordlist::{
    Wordlists, WordlistSummary, get_wordlist, get_wordlist_names, get_wordlist_path,
};
