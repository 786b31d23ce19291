// Runtime configuration: endpoint, data directory and API token, taken from
// CLI flags or environment variables (a `.env` file is loaded first).

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000/api/v1/products";
pub const DEFAULT_DATA_DIR: &str = "json";
/// Token file looked up in the home directory when no token is passed.
pub const TOKEN_FILE_NAME: &str = ".product_seed_token";

#[derive(Parser, Debug, Clone)]
#[command(name = "product-seed", about = "Upload product JSON files to the product API")]
pub struct Cli {
    /// Products endpoint every record is POSTed to.
    #[arg(long, env = "PRODUCT_API_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Directory holding the category JSON files.
    #[arg(long, env = "PRODUCT_DATA_DIR", default_value = DEFAULT_DATA_DIR)]
    pub data_dir: PathBuf,

    /// Bearer token. Falls back to ~/.product_seed_token.
    #[arg(long, env = "PRODUCT_API_TOKEN", hide_env_values = true)]
    pub token: Option<String>,
}

/// Resolved settings handed to the loader and API client.
#[derive(Debug, Clone)]
pub struct Config {
    pub endpoint: String,
    pub data_dir: PathBuf,
    pub token: String,
}

impl Config {
    pub fn from_cli(cli: Cli) -> Result<Self> {
        let token_file = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(TOKEN_FILE_NAME);
        Self::resolve(cli, &token_file)
    }

    /// Like `from_cli` but with an explicit token file location.
    pub fn resolve(cli: Cli, token_file: &Path) -> Result<Self> {
        let token = match cli.token.filter(|t| !t.trim().is_empty()) {
            Some(t) => t.trim().to_string(),
            None => load_token(token_file)?,
        };
        Ok(Config {
            endpoint: cli.endpoint,
            data_dir: cli.data_dir,
            token,
        })
    }
}

/// Read a token persisted on disk.
fn load_token(path: &Path) -> Result<String> {
    if !path.exists() {
        bail!(
            "No API token: pass --token, set PRODUCT_API_TOKEN or create {}",
            path.display()
        );
    }
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read token file {}", path.display()))?;
    let token = data.trim();
    if token.is_empty() {
        bail!("Token file {} is empty", path.display());
    }
    Ok(token.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("product-seed").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn flag_token_wins_over_file() {
        let dir = tempdir().unwrap();
        let file = dir.path().join(TOKEN_FILE_NAME);
        std::fs::write(&file, "from-file").unwrap();

        let config = Config::resolve(cli(&["--token", "from-flag", "--endpoint", "http://api.test/p"]), &file).unwrap();
        assert_eq!(config.token, "from-flag");
        assert_eq!(config.endpoint, "http://api.test/p");
    }

    #[test]
    fn falls_back_to_token_file() {
        let dir = tempdir().unwrap();
        let file = dir.path().join(TOKEN_FILE_NAME);
        std::fs::write(&file, "  saved-token\n").unwrap();

        let mut args = cli(&[]);
        args.token = None;
        let config = Config::resolve(args, &file).unwrap();
        assert_eq!(config.token, "saved-token");
    }

    #[test]
    fn missing_token_is_an_error() {
        let dir = tempdir().unwrap();
        let mut args = cli(&[]);
        args.token = None;
        let err = Config::resolve(args, &dir.path().join(TOKEN_FILE_NAME)).unwrap_err();
        assert!(err.to_string().contains("No API token"));
    }

    #[test]
    fn data_dir_flag() {
        let args = cli(&["--data-dir", "seed/json", "--token", "t"]);
        assert_eq!(args.data_dir, PathBuf::from("seed/json"));
    }
}
