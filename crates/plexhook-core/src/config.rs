//! Configuration module
//!
//! Settings are read from the environment (after loading an optional `.env`
//! file). Every setting has a default, so an empty environment reproduces the
//! receiver's fixed behaviour: port 8090, thumbnails written into the working
//! directory, and a 10 MiB in-memory multipart budget.

use std::env;
use std::path::PathBuf;

const SERVER_PORT: u16 = 8090;
const MAX_FORM_MEMORY_MB: usize = 10;

/// Receiver configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub server_port: u16,
    pub upload_dir: PathBuf,
    pub max_form_memory_bytes: usize,
    pub strict_filenames: bool,
    pub environment: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server_port: SERVER_PORT,
            upload_dir: PathBuf::from("."),
            max_form_memory_bytes: MAX_FORM_MEMORY_MB << 20,
            strict_filenames: false,
            environment: "development".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let environment = env::var("ENVIRONMENT")
            .or_else(|_| env::var("APP_ENV"))
            .unwrap_or_else(|_| "development".to_string());

        let max_form_memory_mb = env::var("MAX_FORM_MEMORY_MB")
            .unwrap_or_else(|_| MAX_FORM_MEMORY_MB.to_string())
            .parse::<usize>()
            .unwrap_or(MAX_FORM_MEMORY_MB);

        let config = Config {
            server_port: env::var("PORT")
                .unwrap_or_else(|_| SERVER_PORT.to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number"))?,
            upload_dir: env::var("UPLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".")),
            max_form_memory_bytes: max_form_memory_mb << 20,
            strict_filenames: env::var("STRICT_FILENAMES")
                .map(|v| parse_bool(&v))
                .unwrap_or(false),
            environment,
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.server_port == 0 {
            return Err(anyhow::anyhow!("PORT must be greater than 0"));
        }

        if self.max_form_memory_bytes == 0 {
            return Err(anyhow::anyhow!(
                "MAX_FORM_MEMORY_MB must be greater than 0"
            ));
        }

        if self.upload_dir.as_os_str().is_empty() {
            return Err(anyhow::anyhow!("UPLOAD_DIR must not be empty"));
        }

        Ok(())
    }

    pub fn server_port(&self) -> u16 {
        self.server_port
    }

    pub fn upload_dir(&self) -> &PathBuf {
        &self.upload_dir
    }

    pub fn max_form_memory_bytes(&self) -> usize {
        self.max_form_memory_bytes
    }

    pub fn strict_filenames(&self) -> bool {
        self.strict_filenames
    }

    pub fn environment(&self) -> &str {
        &self.environment
    }
}

fn parse_bool(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_fixed_behaviour() {
        let config = Config::default();
        assert_eq!(config.server_port(), 8090);
        assert_eq!(config.upload_dir(), &PathBuf::from("."));
        assert_eq!(config.max_form_memory_bytes(), 10 * 1024 * 1024);
        assert!(!config.strict_filenames());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_budget() {
        let config = Config {
            max_form_memory_bytes: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_upload_dir() {
        let config = Config {
            upload_dir: PathBuf::new(),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_parse_bool() {
        assert!(parse_bool("true"));
        assert!(parse_bool(" 1 "));
        assert!(parse_bool("YES"));
        assert!(!parse_bool("false"));
        assert!(!parse_bool(""));
    }
}
