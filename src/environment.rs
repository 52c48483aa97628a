use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

/// Name of the environment variable that overrides the API base URL.
pub const API_URL_ENV_VAR: &str = "RESTAURANT_API_URL";

/// Represents the restaurant API deployment the viewer talks to.
#[derive(Clone, Default, PartialEq, Eq)]
pub enum Environment {
    /// API running on the local machine.
    #[default]
    Local,
    /// Any other deployment, addressed by its base URL.
    Custom { api_url: String },
}

impl Environment {
    /// Returns the API base URL associated with the environment.
    pub fn api_url(&self) -> String {
        match self {
            Environment::Local => "http://localhost:8000".to_string(),
            Environment::Custom { api_url } => api_url.trim_end_matches('/').to_string(),
        }
    }

    /// Resolves the environment from the first URL that is set, in order of precedence.
    pub fn resolve(
        cli_url: Option<&str>,
        env_url: Option<&str>,
        config_url: Option<&str>,
    ) -> Environment {
        [cli_url, env_url, config_url]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|url| !url.is_empty())
            .and_then(|url| url.parse().ok())
            .unwrap_or_default()
    }
}

impl FromStr for Environment {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "" => Err(()),
            "local" => Ok(Environment::Local),
            _ => Ok(Environment::Custom {
                api_url: s.to_string(),
            }),
        }
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Local => write!(f, "Local"),
            Environment::Custom { .. } => write!(f, "Custom"),
        }
    }
}

impl Debug for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Environment::{}, URL: {}", self, self.api_url())
    }
}
