pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid color specification: {spec}")]
    InvalidColor { spec: String },

    #[error("invalid slice specification: {message}")]
    InvalidSlice { message: String },

    #[error("invalid document: {message}")]
    Format { message: String },

    #[error("no parse function for chart type '{chart_type}'")]
    UnknownChartType { chart_type: String },

    #[error("invalid value for '{name}': {message}")]
    InvalidParameter { name: &'static str, message: String },

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn invalid_color(spec: impl std::fmt::Display) -> Self {
        Self::InvalidColor {
            spec: spec.to_string(),
        }
    }

    pub(crate) fn invalid_slice(message: impl Into<String>) -> Self {
        Self::InvalidSlice {
            message: message.into(),
        }
    }

    pub(crate) fn format(message: impl Into<String>) -> Self {
        Self::Format {
            message: message.into(),
        }
    }

    pub(crate) fn invalid_parameter(name: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            message: message.into(),
        }
    }
}
