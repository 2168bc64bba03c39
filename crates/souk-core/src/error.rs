use thiserror::Error;

#[derive(Debug, Error)]
pub enum SoukError {
    #[error("unknown kind '{0}': expected plugin, agent, command, or hook")]
    UnknownKind(String),

    #[error("unknown category '{0}': expected all, plugins, agents, commands, or hooks")]
    UnknownCategory(String),

    #[error("unknown sort key '{0}': expected none, name, or category")]
    UnknownSortKey(String),

    #[error("invalid selection key '{0}': expected kind:id")]
    InvalidSelectionKey(String),

    #[error("{kind} '{id}' not found in registry")]
    ItemNotFound { kind: crate::types::Kind, id: String },

    #[error("home directory not found")]
    HomeNotFound,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Http(#[from] Box<ureq::Error>),
}

pub type Result<T> = std::result::Result<T, SoukError>;
