use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum FolioError {
    #[error("i/o error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("preferences format error: {0}")]
    PreferenceFormat(#[from] serde_json::Error),

    #[error("unknown accent color '{0}'")]
    UnknownAccent(String),

    #[error("unknown view '{0}' (expected home, about, philosophy, experience, projects or skills)")]
    UnknownView(String),

    #[error("unknown theme mode '{0}' (expected light, dark or system)")]
    UnknownMode(String),
}

impl FolioError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
