use crate::error::Result;
use crate::wordlist::Wordlists;
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;

/// Inspect the wordlists used for diceware passphrases
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory containing `wordlist_<name>.txt` files
    #[arg(long = "wordlists-dir", global = true)]
    pub wordlists_dir: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// List the names of all available wordlists
    List,
    /// Print the file path a wordlist name resolves to
    Path { name: String },
    /// Show the size and the first words of a wordlist
    Show {
        name: String,
        /// Number of words to print
        #[arg(long, default_value_t = 10)]
        head: usize,
    },
    /// Load every wordlist and report empty or unreadable ones
    Check,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Execute `command` against `wordlists`, writing results to `out`.
///
/// Returns `Ok(false)` when `check` found a broken wordlist.
pub fn run<W: Write>(command: &Command, wordlists: &Wordlists, out: &mut W) -> Result<bool> {
    match command {
        Command::List => {
            for name in wordlists.names()? {
                writeln!(out, "{name}")?;
            }
            Ok(true)
        }
        Command::Path { name } => {
            writeln!(out, "{}", wordlists.path(name)?.display())?;
            Ok(true)
        }
        Command::Show { name, head } => {
            let words = wordlists.load(name)?;
            writeln!(out, "{name}: {} words", words.len())?;
            for word in words.iter().take(*head) {
                writeln!(out, "{word}")?;
            }
            if words.len() > *head {
                writeln!(out, "...and {} more", words.len() - head)?;
            }
            Ok(true)
        }
        Command::Check => check_all(wordlists, out),
    }
}

fn check_all<W: Write>(wordlists: &Wordlists, out: &mut W) -> Result<bool> {
    let names = wordlists.names()?;
    if names.is_empty() {
        writeln!(out, "No wordlists found in {}", wordlists.dir().display())?;
        return Ok(true);
    }

    let mut all_ok = true;
    for name in &names {
        match wordlists.summarize(name) {
            Ok(summary) if summary.words == 0 => {
                all_ok = false;
                writeln!(out, "{name}: empty ({})", summary.path.display())?;
            }
            Ok(summary) => {
                writeln!(
                    out,
                    "{name}: {} words ({} duplicates)",
                    summary.words, summary.duplicates
                )?;
            }
            Err(e) => {
                all_ok = false;
                log::warn!("Failed to load wordlist '{name}': {e}");
                writeln!(out, "{name}: error: {e}")?;
            }
        }
    }
    Ok(all_ok)
}
