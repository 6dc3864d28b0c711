#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    MissingEnv(&'static str),

    #[error("invalid environment variable {name}: {reason}")]
    InvalidEnv { name: &'static str, reason: String },
}

#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("screen error: {0}")]
    ScreenError(String),

    #[error("dialog error: {0}")]
    DialogError(String),

    #[error("not supported: {0}")]
    NotSupported(String),
}

#[derive(Debug, thiserror::Error)]
pub enum SensordeckError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Platform(#[from] PlatformError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}
