use std::env;
use std::path::PathBuf;

pub const DEFAULT_DB_PATH: &str = "./db.sqlite";

/// Overrides the store location.
pub const ENV_SQLITE_FILE: &str = "SQLITE_FILE";

/// Forces debug logging on when set to exactly `"true"`.
pub const ENV_DEBUG: &str = "DEBUG";

#[derive(Debug, Clone)]
pub struct Config {
    pub db_path: PathBuf,
    pub debug: bool,
}

impl Config {
    /// Resolves configuration from the CLI flag and the process
    /// environment. The environment can only turn debug on, never off.
    pub fn resolve(cli_debug: bool) -> Self {
        Self::resolve_with(cli_debug, |key| env::var(key).ok())
    }

    fn resolve_with(cli_debug: bool, get: impl Fn(&str) -> Option<String>) -> Self {
        let db_path = get(ENV_SQLITE_FILE)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_PATH));

        let debug = cli_debug || get(ENV_DEBUG).as_deref() == Some("true");

        Self { db_path, debug }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env_of<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn test_defaults() {
        let config = Config::resolve_with(false, env_of(&[]));

        assert_eq!(config.db_path, PathBuf::from(DEFAULT_DB_PATH));
        assert!(!config.debug);
    }

    #[test]
    fn test_db_path_from_env() {
        let config = Config::resolve_with(false, env_of(&[("SQLITE_FILE", "/tmp/tlds.sqlite")]));

        assert_eq!(config.db_path, PathBuf::from("/tmp/tlds.sqlite"));
    }

    #[test]
    fn test_empty_db_path_falls_back_to_default() {
        let config = Config::resolve_with(false, env_of(&[("SQLITE_FILE", "")]));

        assert_eq!(config.db_path, PathBuf::from(DEFAULT_DB_PATH));
    }

    #[test]
    fn test_debug_env_must_be_exactly_true() {
        assert!(Config::resolve_with(false, env_of(&[("DEBUG", "true")])).debug);
        assert!(!Config::resolve_with(false, env_of(&[("DEBUG", "1")])).debug);
        assert!(!Config::resolve_with(false, env_of(&[("DEBUG", "TRUE")])).debug);
    }

    #[test]
    fn test_cli_flag_wins_even_without_env() {
        assert!(Config::resolve_with(true, env_of(&[])).debug);
        // The env cannot turn the flag back off.
        assert!(Config::resolve_with(true, env_of(&[("DEBUG", "false")])).debug);
    }
}
