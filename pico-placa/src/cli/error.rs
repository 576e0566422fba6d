use thiserror::Error;

use crate::calendar::CalendarError;
use crate::config::ConfigError;
use crate::domain::InputError;
use crate::holidays_api::HolidayApiError;
use crate::restriction::OracleError;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error("no {field} given")]
    MissingInput { field: &'static str },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Calendar(#[from] CalendarError),

    #[error("holiday provider: {0}")]
    Provider(#[from] HolidayApiError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<OracleError> for CliError {
    fn from(e: OracleError) -> Self {
        match e {
            OracleError::Calendar(e) => Self::Calendar(e),
            OracleError::Api(e) => Self::Provider(e),
        }
    }
}

impl CliError {
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Input(_) | Self::MissingInput { .. } | Self::Config(_) => 2,
            Self::Provider(HolidayApiError::Unauthorized | HolidayApiError::NotConfigured(_)) => 3,
            Self::Provider(_) => 4,
            Self::Calendar(_) => 5,
            Self::Io(_) => 10,
        }
    }
}
