use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::credential::PasswordConfig;
use crate::errors::{PassCodecError, Result};

/// Password settings, loaded from `.passcodec.toml` and the environment.
///
/// Every field has a default matching `PasswordConfig::default()`, so
/// passcodec works without any config file at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Algorithm tag for new passwords (default: "pbkdf2-sha256").
    #[serde(default = "default_password_algorithm")]
    pub password_algorithm: String,

    /// PBKDF2 iteration count (default: 12 000).
    #[serde(default = "default_password_iterations")]
    pub password_iterations: u32,

    /// PBKDF2 salt size in bytes (default: 6).
    #[serde(default = "default_password_salt_size")]
    pub password_salt_size: usize,

    /// bcrypt cost factor (default: 10).
    #[serde(default = "default_password_cost")]
    pub password_cost: u32,
}

// ── Serde default helpers ────────────────────────────────────────────

fn default_password_algorithm() -> String {
    "pbkdf2-sha256".to_string()
}

fn default_password_iterations() -> u32 {
    12_000
}

fn default_password_salt_size() -> usize {
    6
}

fn default_password_cost() -> u32 {
    10
}

// ── Implementation ───────────────────────────────────────────────────

impl Default for Settings {
    fn default() -> Self {
        Self {
            password_algorithm: default_password_algorithm(),
            password_iterations: default_password_iterations(),
            password_salt_size: default_password_salt_size(),
            password_cost: default_password_cost(),
        }
    }
}

impl Settings {
    /// Name of the config file we look for in the config directory.
    const FILE_NAME: &'static str = ".passcodec.toml";

    /// Prefix of the environment variables that override file values.
    const ENV_PREFIX: &'static str = "PASSCODEC_";

    /// Load settings from `<config_dir>/.passcodec.toml`, then apply
    /// `PASSCODEC_*` environment overrides.
    ///
    /// If the file does not exist, defaults are used.
    /// If the file exists but cannot be parsed, an error is returned.
    pub fn load(config_dir: &Path) -> Result<Self> {
        let mut settings = Self::load_file(config_dir)?;
        settings.apply_overrides(|name| std::env::var(name).ok())?;
        Ok(settings)
    }

    /// Load only the TOML file, without environment overrides.
    pub fn load_file(config_dir: &Path) -> Result<Self> {
        let config_path = config_dir.join(Self::FILE_NAME);

        if !config_path.exists() {
            log::debug!("no {} found, using defaults", config_path.display());
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)?;

        let settings: Settings = toml::from_str(&contents).map_err(|e| {
            PassCodecError::ConfigError(format!("Failed to parse {}: {e}", config_path.display()))
        })?;

        log::debug!("loaded settings from {}", config_path.display());
        Ok(settings)
    }

    /// Apply overrides looked up by variable name, e.g.
    /// `PASSCODEC_PASSWORD_ITERATIONS`.  Empty values are ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| {
            let name = format!("{}{key}", Self::ENV_PREFIX);
            lookup(&name)
                .filter(|v| !v.trim().is_empty())
                .map(|v| (name, v.trim().to_string()))
        };

        if let Some((_, value)) = var("PASSWORD_ALGORITHM") {
            self.password_algorithm = value;
        }
        if let Some((name, value)) = var("PASSWORD_ITERATIONS") {
            self.password_iterations = parse_number(&name, &value)?;
        }
        if let Some((name, value)) = var("PASSWORD_SALT_SIZE") {
            self.password_salt_size = parse_number(&name, &value)?;
        }
        if let Some((name, value)) = var("PASSWORD_COST") {
            self.password_cost = parse_number(&name, &value)?;
        }

        Ok(())
    }

    /// Convert into a validated crypto-layer config.
    ///
    /// An unknown algorithm or a bad work factor is a configuration
    /// error; callers should refuse to start.
    pub fn password_config(&self) -> Result<PasswordConfig> {
        let config = PasswordConfig {
            algorithm: self.password_algorithm.parse()?,
            iterations: self.password_iterations,
            salt_size: self.password_salt_size,
            cost: self.password_cost,
        };
        config.validate()?;
        Ok(config)
    }
}

fn parse_number<T: std::str::FromStr>(name: &str, value: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| PassCodecError::ConfigError(format!("{name} must be a number (got '{value}')")))
}

// ── Tests ────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::fs;
    use tempfile::TempDir;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn default_settings_are_sensible() {
        let s = Settings::default();
        assert_eq!(s.password_algorithm, "pbkdf2-sha256");
        assert_eq!(s.password_iterations, 12_000);
        assert_eq!(s.password_salt_size, 6);
        assert_eq!(s.password_cost, 10);
    }

    #[test]
    fn load_returns_defaults_when_no_config_file() {
        let tmp = TempDir::new().unwrap();
        let settings = Settings::load_file(tmp.path()).unwrap();
        assert_eq!(settings.password_algorithm, "pbkdf2-sha256");
    }

    #[test]
    fn load_parses_toml_file() {
        let tmp = TempDir::new().unwrap();
        let config = r#"
password_algorithm = "pbkdf2-sha512"
password_iterations = 50000
password_salt_size = 16
password_cost = 12
"#;
        fs::write(tmp.path().join(".passcodec.toml"), config).unwrap();

        let settings = Settings::load_file(tmp.path()).unwrap();
        assert_eq!(settings.password_algorithm, "pbkdf2-sha512");
        assert_eq!(settings.password_iterations, 50_000);
        assert_eq!(settings.password_salt_size, 16);
        assert_eq!(settings.password_cost, 12);
    }

    #[test]
    fn load_uses_defaults_for_missing_fields() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(".passcodec.toml"),
            "password_algorithm = \"bcrypt\"\n",
        )
        .unwrap();

        let settings = Settings::load_file(tmp.path()).unwrap();
        assert_eq!(settings.password_algorithm, "bcrypt");
        // Rest should be defaults
        assert_eq!(settings.password_iterations, 12_000);
        assert_eq!(settings.password_cost, 10);
    }

    #[test]
    fn load_errors_on_invalid_toml() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(".passcodec.toml"), "not valid {{toml").unwrap();

        let err = Settings::load_file(tmp.path()).unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn load_errors_on_negative_iterations() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(".passcodec.toml"),
            "password_iterations = -5\n",
        )
        .unwrap();

        assert!(Settings::load_file(tmp.path()).is_err());
    }

    #[test]
    fn overrides_replace_file_values() {
        let mut s = Settings::default();
        s.apply_overrides(env(&[
            ("PASSCODEC_PASSWORD_ALGORITHM", "bcrypt"),
            ("PASSCODEC_PASSWORD_COST", "12"),
            ("PASSCODEC_PASSWORD_ITERATIONS", " 30000 "),
            ("PASSCODEC_PASSWORD_SALT_SIZE", ""),
        ]))
        .unwrap();

        assert_eq!(s.password_algorithm, "bcrypt");
        assert_eq!(s.password_cost, 12);
        assert_eq!(s.password_iterations, 30_000);
        assert_eq!(s.password_salt_size, 6);
    }

    #[test]
    fn non_numeric_override_is_config_error() {
        let mut s = Settings::default();
        let err = s
            .apply_overrides(env(&[("PASSCODEC_PASSWORD_COST", "ten")]))
            .unwrap_err();
        assert!(err.is_configuration());
        assert!(err.to_string().contains("PASSCODEC_PASSWORD_COST"));
    }

    #[test]
    fn password_config_rejects_unsupported_algorithm() {
        let s = Settings {
            password_algorithm: "md5".to_string(),
            ..Settings::default()
        };
        let err = s.password_config().unwrap_err();
        assert!(matches!(err, PassCodecError::UnsupportedAlgorithm(_)));
    }

    #[test]
    fn password_config_rejects_bad_work_factor() {
        let s = Settings {
            password_algorithm: "bcrypt".to_string(),
            password_cost: 40,
            ..Settings::default()
        };
        assert!(s.password_config().unwrap_err().is_configuration());
    }

    #[test]
    fn password_config_carries_values() {
        let s = Settings {
            password_algorithm: "pbkdf2-sha384".to_string(),
            password_iterations: 777,
            ..Settings::default()
        };
        let c = s.password_config().unwrap();
        assert_eq!(c.algorithm.tag(), "pbkdf2-sha384");
        assert_eq!(c.iterations, 777);
        assert_eq!(c.salt_size, 6);
    }
}
