//! Process configuration read from the CI environment.
//!
//! Variables:
//! 1. `GITHUB_REPOSITORY` - `owner/name` of the repository (required)
//! 2. `GITHUB_TOKEN` - API token, falling back to `GH_TOKEN` (required)
//! 3. `GITHUB_API_URL` - API base URI for GitHub Enterprise (optional)

use std::env;

use crate::error::ConfigError;

const REPOSITORY_VAR: &str = "GITHUB_REPOSITORY";
const TOKEN_VARS: [&str; 2] = ["GITHUB_TOKEN", "GH_TOKEN"];
const API_URL_VAR: &str = "GITHUB_API_URL";

/// A GitHub repository identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    pub owner: String,
    pub name: String,
}

impl std::str::FromStr for Repository {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().split_once('/') {
            Some((owner, name))
                if !owner.is_empty() && !name.is_empty() && !name.contains('/') =>
            {
                Ok(Self {
                    owner: owner.to_string(),
                    name: name.to_string(),
                })
            }
            _ => Err(ConfigError::InvalidRepository(s.to_string())),
        }
    }
}

impl std::fmt::Display for Repository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Everything a release run needs from its environment.
#[derive(Clone)]
pub struct Config {
    pub repository: Repository,
    pub token: String,
    pub api_url: Option<String>,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("repository", &self.repository)
            .field("token", &"<redacted>")
            .field("api_url", &self.api_url)
            .finish()
    }
}

impl Config {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Read the configuration through `lookup`. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.is_empty());

        let repository = get(REPOSITORY_VAR)
            .ok_or(ConfigError::MissingVar(REPOSITORY_VAR))?
            .parse::<Repository>()?;

        let token = TOKEN_VARS
            .iter()
            .find_map(|name| get(*name))
            .ok_or(ConfigError::MissingVar(TOKEN_VARS[0]))?;

        Ok(Self {
            repository,
            token,
            api_url: get(API_URL_VAR),
        })
    }
}
