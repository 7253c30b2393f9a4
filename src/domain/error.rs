//! Domain error types.

/// Top-level error type for tsmom.
#[derive(Debug, thiserror::Error)]
pub enum TsmomError {
    #[error("malformed series at index {index}: {reason}")]
    MalformedSeries { index: usize, reason: String },

    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter { name: String, reason: String },

    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("missing config key [{section}] {key}")]
    ConfigMissing { section: String, key: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error("data error: {reason}")]
    Data { reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&TsmomError> for std::process::ExitCode {
    fn from(err: &TsmomError) -> Self {
        let code: u8 = match err {
            TsmomError::Io(_) => 1,
            TsmomError::ConfigParse { .. }
            | TsmomError::ConfigMissing { .. }
            | TsmomError::ConfigInvalid { .. } => 2,
            TsmomError::Data { .. } => 3,
            TsmomError::MalformedSeries { .. } | TsmomError::InvalidParameter { .. } => 4,
        };
        std::process::ExitCode::from(code)
    }
}
