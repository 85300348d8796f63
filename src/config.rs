//! `create-flask-app` configuration
use error::{Result, ResultExt};
use std::fs;
use std::path::Path;
use toml;

/// The sample API document fetched into `docs/swagger.json`.
pub const DEFAULT_API_DOC_URL: &'static str = "https://petstore.swagger.io/v2/swagger.json";

/// External tools and fixed values used while generating a project.
///
/// Every key is optional in the TOML file, missing keys keep their defaults.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Interpreter used to create the virtual environment.
    pub python: String,
    /// The `git` binary.
    pub git: String,
    /// The `curl` binary.
    pub curl: String,
    /// Where the sample API document is fetched from.
    pub api_doc_url: String,
    /// Message of the initial commit.
    pub commit_message: String,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            python: "python".to_string(),
            git: "git".to_string(),
            curl: "curl".to_string(),
            api_doc_url: DEFAULT_API_DOC_URL.to_string(),
            commit_message: "Initial commit".to_string(),
        }
    }
}

impl Config {
    /// Read a configuration file.
    pub fn from_path(path: &Path) -> Result<Config> {
        let raw = fs::read_to_string(path)
            .chain_err(|| format!("Unable to read config file '{}'", path.display()))?;
        Config::from_toml(&raw)
            .chain_err(|| format!("Invalid config file '{}'", path.display()))
    }

    /// Parse a configuration from TOML text.
    pub fn from_toml(raw: &str) -> Result<Config> {
        Ok(toml::from_str(raw)?)
    }
}
