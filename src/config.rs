use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::Result;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub factorial: FactorialConfig,
    pub demo: DemoConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FactorialConfig {
    /// Maximum recursion depth for the recursive algorithm.
    /// The iterative algorithm ignores this.
    pub recursion_limit: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Values the demo reverses and prints
    pub reverse_samples: Vec<String>,
    /// Inputs the demo runs both factorial algorithms over
    pub factorial_samples: Vec<i64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            factorial: FactorialConfig {
                recursion_limit: crate::factorial::DEFAULT_RECURSION_LIMIT,
            },
            demo: DemoConfig {
                reverse_samples: vec![
                    "hello".into(),
                    "".into(),
                    "A".into(),
                    "racecar".into(),
                    "12345".into(),
                ],
                factorial_samples: vec![0, 1, 5, 10],
            },
        }
    }
}

/// Returns the default global config path: ~/.kata/kata.toml
pub fn global_config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".kata")
        .join("kata.toml")
}

/// Ensures the global config file exists, creating it with defaults on first launch.
/// Does nothing if the file already exists.
pub fn ensure_global_config(path: &Path) -> Result<()> {
    if path.exists() {
        return Ok(());
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, DEFAULT_GLOBAL_CONFIG)?;
    Ok(())
}

const DEFAULT_GLOBAL_CONFIG: &str = r#"# kata global configuration
# This file was created automatically. Edit as needed.

[factorial]
recursion_limit = 10000   # depth cap for the recursive algorithm

[demo]
reverse_samples = ["hello", "", "A", "racecar", "12345"]
factorial_samples = [0, 1, 5, 10]
"#;

/// Load configuration using figment's layered system:
/// 1. Built-in Rust defaults (AppConfig::default)
/// 2. Global config file (~/.kata/kata.toml) — silently ignored if missing
/// 3. Environment variables prefixed with KATA_ (nested with __)
///    e.g. KATA_FACTORIAL__RECURSION_LIMIT=500
pub fn load(global_config: &Path) -> Result<AppConfig> {
    let config = Figment::from(Serialized::defaults(AppConfig::default()))
        .merge(Toml::file(global_config))
        .merge(Env::prefixed("KATA_").split("__"))
        .extract()?;

    Ok(config)
}
