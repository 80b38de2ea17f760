use crate::wordlist::Wordlists;
use std::env;
use std::path::{Path, PathBuf};

/// Environment variable overriding the wordlists directory.
pub const WORDLISTS_DIR_ENV: &str = "DICEWARE_WORDLISTS_DIR";

/// Directory holding the wordlists shipped with the program.
///
/// A `wordlists/` directory next to the executable is used when present,
/// so an installed binary does not depend on the source tree it was built from.
#[must_use]
pub fn bundled_wordlists_dir() -> PathBuf {
    let exe_dir = env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf));
    bundled_wordlists_dir_from(exe_dir.as_deref())
}

pub fn bundled_wordlists_dir_from(exe_dir: Option<&Path>) -> PathBuf {
    exe_dir
        .map(|dir| dir.join("wordlists"))
        .filter(|dir| dir.is_dir())
        .unwrap_or_else(|| Path::new(env!("CARGO_MANIFEST_DIR")).join("wordlists"))
}

/// `<data dir>/diceware/wordlists`, e.g. `~/.local/share/diceware/wordlists`.
#[must_use]
pub fn user_wordlists_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("diceware").join("wordlists"))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub wordlists_dir: PathBuf,
}

impl Config {
    /// Resolve the configuration from an optional command line override,
    /// the environment and the user's data directory.
    pub fn load(wordlists_dir: Option<PathBuf>) -> Self {
        let user_dir = user_wordlists_dir().filter(|dir| dir.is_dir());
        let wordlists_dir =
            resolve_wordlists_dir(wordlists_dir, env::var(WORDLISTS_DIR_ENV).ok(), user_dir);
        log::debug!("Using wordlists directory {}", wordlists_dir.display());
        Self { wordlists_dir }
    }

    #[must_use]
    pub fn wordlists(&self) -> Wordlists {
        Wordlists::new(&self.wordlists_dir)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            wordlists_dir: bundled_wordlists_dir(),
        }
    }
}

/// Pick the wordlists directory: explicit override, then environment value,
/// then user directory, then the bundled one. Blank values are ignored.
pub fn resolve_wordlists_dir(
    explicit: Option<PathBuf>,
    env_value: Option<String>,
    user_dir: Option<PathBuf>,
) -> PathBuf {
    explicit
        .filter(|dir| !dir.as_os_str().is_empty())
        .or_else(|| {
            env_value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
        })
        .or(user_dir)
        .unwrap_or_else(bundled_wordlists_dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_dir_wins() {
        let dir = resolve_wordlists_dir(
            Some(PathBuf::from("/flag")),
            Some("/env".to_string()),
            Some(PathBuf::from("/user")),
        );
        assert_eq!(dir, PathBuf::from("/flag"));
    }

    #[test]
    fn test_env_before_user_dir() {
        let dir = resolve_wordlists_dir(
            None,
            Some("/env".to_string()),
            Some(PathBuf::from("/user")),
        );
        assert_eq!(dir, PathBuf::from("/env"));
    }

    #[test]
    fn test_blank_env_ignored() {
        let dir = resolve_wordlists_dir(None, Some("   ".to_string()), Some(PathBuf::from("/user")));
        assert_eq!(dir, PathBuf::from("/user"));
    }

    #[test]
    fn test_falls_back_to_bundled() {
        let dir = resolve_wordlists_dir(Some(PathBuf::new()), None, None);
        assert_eq!(dir, bundled_wordlists_dir());
        assert!(dir.join("wordlist_en_8k.txt").is_file());
    }

    #[test]
    fn test_bundled_dir_next_to_executable() {
        let install = tempfile::tempdir().unwrap();
        std::fs::create_dir(install.path().join("wordlists")).unwrap();
        assert_eq!(
            bundled_wordlists_dir_from(Some(install.path())),
            install.path().join("wordlists")
        );
    }

    #[test]
    fn test_bundled_dir_falls_back_to_source_tree() {
        let install = tempfile::tempdir().unwrap();
        let source = Path::new(env!("CARGO_MANIFEST_DIR")).join("wordlists");
        assert_eq!(bundled_wordlists_dir_from(Some(install.path())), source);
        assert_eq!(bundled_wordlists_dir_from(None), source);
    }

    #[test]
    fn test_default_config_uses_bundled_wordlists() {
        let config = Config::default();
        assert_eq!(config.wordlists().dir(), bundled_wordlists_dir().as_path());
        assert!(config.wordlists().names().unwrap().contains(&"en_8k".to_string()));
    }

    #[test]
    fn test_load_honours_explicit_dir() {
        let config = Config::load(Some(PathBuf::from("/tmp/my-lists")));
        assert_eq!(config.wordlists_dir, PathBuf::from("/tmp/my-lists"));
    }
}
