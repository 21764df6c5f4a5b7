//! Error types
//!
//! Errors raised while loading the runtime configuration, building the
//! route table and bootstrapping the application.

use thiserror::Error;

/// Errors that can occur while fetching the runtime configuration
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The request never produced a response
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-success status
    #[error("HTTP {status}: {status_text}")]
    Status { status: u16, status_text: String },

    /// The body was not valid JSON
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Errors raised by the route table and the router
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RouterError {
    /// Two route definitions share a name
    #[error("Duplicate route name: {0}")]
    DuplicateName(String),

    /// Named navigation to a route that does not exist
    #[error("Unknown route name: {0}")]
    UnknownName(String),

    /// Named navigation without a value for one of the path params
    #[error("Route {route} requires param :{param}")]
    MissingParam { route: String, param: String },

    /// No route matches the path
    #[error("No route matches {0}")]
    NoMatch(String),
}

/// Errors that abort application bootstrap
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BootstrapError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Router error: {0}")]
    Router(#[from] RouterError),

    /// The mount element is not present in the document
    #[error("Mount point #{0} not found")]
    MountPointMissing(String),

    /// Any other DOM failure while mounting
    #[error("DOM error: {0}")]
    Dom(String),
}

/// Result type alias for bootstrap operations
pub type BootstrapResult<T> = Result<T, BootstrapError>;
