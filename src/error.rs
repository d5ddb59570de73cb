use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    #[error("invalid color value {0:?}")]
    InvalidColor(String),

    #[error("unknown color path {0:?}")]
    UnknownPath(String),

    #[error("invalid theme mode {0:?}")]
    InvalidMode(String),

    #[error("failed to access {}: {source}", path.display())]
    Storage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to encode TOML: {0}")]
    TomlEncode(#[from] toml::ser::Error),

    #[error("failed to parse TOML: {0}")]
    TomlDecode(#[from] toml::de::Error),
}
