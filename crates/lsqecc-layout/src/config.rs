//! Router configuration.
//!
//! Supports loading configuration from:
//! 1. Configuration files (YAML)
//! 2. Environment variables (with `LSQECC_` prefix)
//!
//! Configuration precedence (highest to lowest):
//! 1. Environment variables
//! 2. Configuration file
//! 3. Default values
//!
//! Invalid combinations are rejected by [`RouterConfig::validate`] before a
//! router is built, so misconfiguration surfaces at setup time rather than
//! mid-compilation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, warn};

use crate::cached::CachedRouter;
use crate::direct::DirectRouter;
use crate::error::RouteResult;
use crate::router::{GraphSearchProvider, Router};

/// Which router implementation to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouterKind {
    /// Search on every query.
    Direct,
    /// Memoize routes per (source face, target face).
    #[default]
    Cached,
}

impl fmt::Display for RouterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouterKind::Direct => f.write_str("direct"),
            RouterKind::Cached => f.write_str("cached"),
        }
    }
}

impl FromStr for RouterKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "direct" => Ok(RouterKind::Direct),
            "cached" => Ok(RouterKind::Cached),
            other => Err(ConfigError::ValidationError(format!(
                "Unknown router kind: {other}"
            ))),
        }
    }
}

/// Complete router configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouterConfig {
    /// Router implementation
    #[serde(default)]
    pub router: RouterKind,

    /// Graph search strategy
    #[serde(default)]
    pub graph_search: GraphSearchProvider,

    /// Enable extended (EDPC) routing
    #[serde(default)]
    pub edpc: bool,
}

impl RouterConfig {
    /// Parse configuration from a YAML string.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: RouterConfig =
            serde_yaml_ng::from_str(yaml).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::IoError(e.to_string()))?;
        Self::from_yaml_str(&contents)
    }

    /// Load configuration from environment variables over the defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().merge_env()
    }

    /// Load configuration with the following precedence:
    /// 1. Load from file if provided
    /// 2. Apply environment variable overrides
    pub fn load(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match config_file {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.merge_env()
    }

    /// Merge environment variables into this configuration.
    ///
    /// Only variables that are set override the current values.
    fn merge_env(self) -> Result<Self, ConfigError> {
        self.merge_vars(|key| std::env::var(key).ok())
    }

    fn merge_vars(mut self, var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        if let Some(v) = var("LSQECC_ROUTER") {
            self.router = v.parse()?;
        }
        if let Some(v) = var("LSQECC_GRAPH_SEARCH") {
            self.graph_search = v.parse()?;
        }
        if let Some(v) = var("LSQECC_EDPC") {
            self.edpc = parse_flag(&v)?;
        }
        self.validate()?;
        Ok(self)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.edpc && self.router == RouterKind::Cached {
            return Err(ConfigError::ValidationError(
                "EDPC cannot be combined with the cached router".to_string(),
            ));
        }
        if self.edpc && !self.graph_search.supports_edpc() {
            return Err(ConfigError::ValidationError(format!(
                "EDPC is not implemented for graph search provider '{}'",
                self.graph_search
            )));
        }
        Ok(())
    }

    /// Build the configured router.
    pub fn build(&self) -> RouteResult<Box<dyn Router>> {
        self.validate()?;
        debug!(
            router = %self.router,
            graph_search = %self.graph_search,
            edpc = self.edpc,
            "Building router"
        );

        let mut router: Box<dyn Router> = match self.router {
            RouterKind::Direct => Box::new(DirectRouter::with_provider(self.graph_search)),
            RouterKind::Cached => Box::new(CachedRouter::with_provider(self.graph_search)),
        };
        if self.edpc {
            router.set_edpc()?;
        }
        Ok(router)
    }
}

fn parse_flag(value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => {
            warn!("Unrecognised boolean value '{other}' for LSQECC_EDPC");
            Err(ConfigError::ValidationError(format!(
                "Invalid boolean value: {other}"
            )))
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),
}
