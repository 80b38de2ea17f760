use crate::config::bundled_wordlists_dir;
use crate::debug_log;
use crate::error::Result;
use crate::name::{WordlistName, is_valid_wordlist_name};
use std::collections::HashSet;
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

pub const WORDLIST_PREFIX: &str = "wordlist_";
pub const WORDLIST_SUFFIX: &str = ".txt";

/// Build the path of wordlist `name` inside `dir`.
///
/// The name is validated first; the file itself may or may not exist.
pub fn get_wordlist_path<P: AsRef<Path>>(dir: P, name: &str) -> Result<PathBuf> {
    let name = WordlistName::new(name)?;
    Ok(dir
        .as_ref()
        .join(format!("{WORDLIST_PREFIX}{name}{WORDLIST_SUFFIX}")))
}

/// Names of all wordlist files directly inside `dir`, sorted and unique.
///
/// A missing directory yields no names.
pub fn get_wordlist_names<P: AsRef<Path>>(dir: P) -> Result<Vec<String>> {
    let dir = dir.as_ref();
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::warn!("Wordlists directory '{}' does not exist", dir.display());
            return Ok(Vec::new());
        }
        Err(e) => return Err(e.into()),
    };

    let mut names = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if !path.is_file() {
            debug_log!("Skipping non-file entry {}", path.display());
            continue;
        }
        let Some(file_name) = path.file_name().and_then(|f| f.to_str()) else {
            debug_log!("Skipping {}: file name is not valid UTF-8", path.display());
            continue;
        };
        match name_from_file_name(file_name) {
            Some(name) => names.push(name.to_owned()),
            None => debug_log!("Skipping {file_name}: not a wordlist file name"),
        }
    }
    // `wordlist_en.txt` and `mywordlist_en.txt` both name `en`
    names.sort();
    names.dedup();
    Ok(names)
}

// `mywordlist_en_8k.txt` -> `en_8k`
fn name_from_file_name(file_name: &str) -> Option<&str> {
    let stem = file_name.strip_suffix(WORDLIST_SUFFIX)?;
    let (_, name) = stem.split_once('_')?;
    is_valid_wordlist_name(name).then_some(name)
}

/// Read all words from `resource`, one per line.
///
/// Exactly-empty lines are dropped; anything else, whitespace included, is
/// kept in file order. `resource` is consumed and dropped before this returns,
/// so a file handle is closed whether reading succeeds or fails.
pub fn get_wordlist<R: Read>(resource: R) -> Result<Vec<String>> {
    let reader = BufReader::new(resource);
    let mut words = Vec::new();
    for line in reader.lines() {
        let word = line?;
        if !word.is_empty() {
            words.push(word);
        }
    }
    Ok(words)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordlistSummary {
    pub name: String,
    pub path: PathBuf,
    pub words: usize,
    pub duplicates: usize,
}

/// Access to the wordlists stored in one directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wordlists {
    dir: PathBuf,
}

impl Wordlists {
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        Self { dir: dir.into() }
    }

    /// The wordlists shipped with this crate.
    #[must_use]
    pub fn bundled() -> Self {
        Self::new(bundled_wordlists_dir())
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path(&self, name: &str) -> Result<PathBuf> {
        get_wordlist_path(&self.dir, name)
    }

    pub fn names(&self) -> Result<Vec<String>> {
        get_wordlist_names(&self.dir)
    }

    /// Resolve, open and read wordlist `name`.
    pub fn load(&self, name: &str) -> Result<Vec<String>> {
        let path = self.path(name)?;
        let file = File::open(&path)?;
        let words = get_wordlist(file)?;
        log::info!("Loaded {} words from {}", words.len(), path.display());
        Ok(words)
    }

    pub fn summarize(&self, name: &str) -> Result<WordlistSummary> {
        let path = self.path(name)?;
        let words = get_wordlist(File::open(&path)?)?;
        let unique: HashSet<&str> = words.iter().map(String::as_str).collect();
        Ok(WordlistSummary {
            name: name.to_owned(),
            duplicates: words.len() - unique.len(),
            words: words.len(),
            path,
        })
    }
}

impl Default for Wordlists {
    fn default() -> Self {
        Self::bundled()
    }
}
