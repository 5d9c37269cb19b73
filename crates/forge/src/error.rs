use galaxy::ConfigError;
use spatial::SpatialError;
use thiserror::Error;

/// Failures of the public facade.
///
/// Validation errors mean the request itself was wrong; `NotFound` means the
/// request was well formed but generation produced nothing at that address.
/// Neither is transient: the same request always fails the same way.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ForgeError {
    #[error("malformed address {address:?}: {reason}")]
    MalformedAddress {
        address: String,
        reason: &'static str,
    },

    #[error(transparent)]
    Validation(#[from] SpatialError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// `component` names the missing level: body, star, planet or moon.
    #[error("{component} not found at {address}")]
    NotFound {
        address: String,
        component: &'static str,
    },
}

impl ForgeError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ForgeError::NotFound { .. })
    }

    /// True for errors caused by malformed or out-of-range input.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ForgeError::MalformedAddress { .. } | ForgeError::Validation(_)
        )
    }

    pub(crate) fn not_found(address: impl ToString, component: &'static str) -> Self {
        ForgeError::NotFound {
            address: address.to_string(),
            component,
        }
    }
}

pub type ForgeResult<T> = Result<T, ForgeError>;
