use std::path::PathBuf;

use crate::listing::TieBreak;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    /// Root of the listing data set; holds `cities/` and `divisions/`.
    pub data_dir: PathBuf,
    /// Optional YAML taxonomy overriding the built-in city table.
    pub taxonomy_path: Option<PathBuf>,
    pub log_level: String,
    /// Secondary ordering for listings with equal combined scores.
    pub tie_break: TieBreak,
}
