use std::fmt;

use thiserror::Error;

/// Stable names for the ways a configuration load can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    DuplicateKey,
    UnknownIdentifier,
    UnresolvedObjectType,
    MissingAsset,
    EmptySequence,
    MalformedLevelDescriptor,
    IncompleteRegistry,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::DuplicateKey => "DuplicateKey",
            ErrorKind::UnknownIdentifier => "UnknownIdentifier",
            ErrorKind::UnresolvedObjectType => "UnresolvedObjectType",
            ErrorKind::MissingAsset => "MissingAsset",
            ErrorKind::EmptySequence => "EmptySequence",
            ErrorKind::MalformedLevelDescriptor => "MalformedLevelDescriptor",
            ErrorKind::IncompleteRegistry => "IncompleteRegistry",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Load-time failures. Any one of them aborts startup; nothing is retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("duplicate key '{key}' in {table} table")]
    DuplicateKey { table: &'static str, key: String },
    #[error("unknown identifier '{name}' referenced by {context}")]
    UnknownIdentifier { name: String, context: String },
    #[error("object '{id}' does not resolve to an engine object type")]
    UnresolvedObjectType { id: String },
    #[error("audio track '{track}' references missing asset '{asset}'")]
    MissingAsset { track: String, asset: String },
    #[error("level sequence contains no playable levels")]
    EmptySequence,
    #[error("malformed level descriptor in {slot}: {reason}")]
    MalformedLevelDescriptor { slot: String, reason: String },
    #[error("cannot publish before the {table} table is registered")]
    IncompleteRegistry { table: &'static str },
}

impl ConfigError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConfigError::DuplicateKey { .. } => ErrorKind::DuplicateKey,
            ConfigError::UnknownIdentifier { .. } => ErrorKind::UnknownIdentifier,
            ConfigError::UnresolvedObjectType { .. } => ErrorKind::UnresolvedObjectType,
            ConfigError::MissingAsset { .. } => ErrorKind::MissingAsset,
            ConfigError::EmptySequence => ErrorKind::EmptySequence,
            ConfigError::MalformedLevelDescriptor { .. } => ErrorKind::MalformedLevelDescriptor,
            ConfigError::IncompleteRegistry { .. } => ErrorKind::IncompleteRegistry,
        }
    }

    /// The key or identifier the engine should name when reporting the failure.
    pub fn offending_key(&self) -> Option<&str> {
        match self {
            ConfigError::DuplicateKey { key, .. } => Some(key),
            ConfigError::UnknownIdentifier { name, .. } => Some(name),
            ConfigError::UnresolvedObjectType { id } => Some(id),
            ConfigError::MissingAsset { asset, .. } => Some(asset),
            ConfigError::MalformedLevelDescriptor { slot, .. } => Some(slot),
            ConfigError::IncompleteRegistry { table } => Some(table),
            ConfigError::EmptySequence => None,
        }
    }
}

pub type Result<T, E = ConfigError> = std::result::Result<T, E>;
