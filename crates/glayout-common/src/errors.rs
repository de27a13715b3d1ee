use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// Failures raised while wiring the engine into a host.
///
/// The tiling engine itself never produces these; only startup and
/// host-facing lookups do.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("invalid keybind '{binding}': {reason}")]
    InvalidKeybind { binding: String, reason: String },

    #[error("unknown workspace: {0}")]
    UnknownWorkspace(u32),

    #[error("host error: {0}")]
    Other(String),
}

#[derive(Debug, thiserror::Error)]
pub enum GlayoutError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Host(#[from] HostError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
