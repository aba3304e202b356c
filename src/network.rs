//! Environment registry — the only place API and OAuth hosts are defined.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BoletoError;

/// Billing API base URL for the sandbox (homologation) environment.
pub const SANDBOX_API_URL: &str = "https://api.hm.bb.com.br/cobrancas/v2";

/// OAuth base URL for the sandbox (homologation) environment.
pub const SANDBOX_OAUTH_URL: &str = "https://oauth.sandbox.bb.com.br";

/// Billing API base URL for production.
pub const PRODUCTION_API_URL: &str = "https://api.bb.com.br/cobrancas/v2";

/// OAuth base URL for production.
pub const PRODUCTION_OAUTH_URL: &str = "https://oauth.bb.com.br";

/// Operating environment of a client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Sandbox,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sandbox => "sandbox",
            Self::Production => "production",
        }
    }

    pub fn endpoints(&self) -> Endpoints {
        resolve(*self)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Environment {
    type Err = BoletoError;

    /// Accepts `sandbox`, `homologation` (legacy name of the sandbox) and
    /// `production`, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sandbox" | "homologation" => Ok(Self::Sandbox),
            "production" => Ok(Self::Production),
            other => Err(BoletoError::Configuration(format!(
                "Invalid environment {:?}. Valid options: 'sandbox', 'production'",
                other
            ))),
        }
    }
}

/// Base URLs for one environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoints {
    pub api_base_url: &'static str,
    pub oauth_base_url: &'static str,
}

impl Endpoints {
    pub fn token_url(&self) -> String {
        format!("{}/oauth/token", self.oauth_base_url)
    }

    pub fn tickets_url(&self) -> String {
        format!("{}/boletos", self.api_base_url)
    }

    pub fn ticket_url(&self, ticket_id: &str) -> String {
        format!("{}/boletos/{}", self.api_base_url, ticket_id)
    }

    pub fn cancel_url(&self, ticket_id: &str) -> String {
        format!("{}/boletos/{}/baixar", self.api_base_url, ticket_id)
    }
}

/// Look up the base URLs of an environment.
pub fn resolve(environment: Environment) -> Endpoints {
    match environment {
        Environment::Sandbox => Endpoints {
            api_base_url: SANDBOX_API_URL,
            oauth_base_url: SANDBOX_OAUTH_URL,
        },
        Environment::Production => Endpoints {
            api_base_url: PRODUCTION_API_URL,
            oauth_base_url: PRODUCTION_OAUTH_URL,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_sandbox() {
        let endpoints = resolve(Environment::Sandbox);
        assert_eq!(endpoints.api_base_url, "https://api.hm.bb.com.br/cobrancas/v2");
        assert_eq!(endpoints.oauth_base_url, "https://oauth.sandbox.bb.com.br");
        assert_eq!(
            endpoints.token_url(),
            "https://oauth.sandbox.bb.com.br/oauth/token"
        );
    }

    #[test]
    fn test_resolve_production() {
        let endpoints = Environment::Production.endpoints();
        assert_eq!(endpoints.api_base_url, "https://api.bb.com.br/cobrancas/v2");
        assert_eq!(endpoints.oauth_base_url, "https://oauth.bb.com.br");
        assert_eq!(
            endpoints.cancel_url("00031285570000003337"),
            "https://api.bb.com.br/cobrancas/v2/boletos/00031285570000003337/baixar"
        );
    }

    #[test]
    fn test_environment_from_str() {
        assert_eq!("sandbox".parse::<Environment>().unwrap(), Environment::Sandbox);
        assert_eq!(
            "Homologation".parse::<Environment>().unwrap(),
            Environment::Sandbox
        );
        assert_eq!(
            " PRODUCTION ".parse::<Environment>().unwrap(),
            Environment::Production
        );
    }

    #[test]
    fn test_environment_from_str_rejects_unknown() {
        let err = "staging".parse::<Environment>().unwrap_err();
        assert!(matches!(err, BoletoError::Configuration(_)));
    }

    #[test]
    fn test_default_is_sandbox() {
        assert_eq!(Environment::default(), Environment::Sandbox);
    }
}
