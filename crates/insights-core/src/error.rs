use thiserror::Error;

/// Errors raised while loading a profile document.
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("failed to read profile file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse profile JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to parse profile YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The document root must be a mapping; this carries the kind found instead.
    #[error("profile document must be an object, got {0}")]
    NotAnObject(&'static str),

    #[error("unsupported profile format for '{0}'; expected .json, .yaml or .yml")]
    UnsupportedFormat(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
