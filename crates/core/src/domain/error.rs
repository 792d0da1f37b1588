// Domain Error Types

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("No device classes configured")]
    NoDeviceClasses,

    #[error("Removal template must contain the {placeholder} placeholder: {template}")]
    MissingPlaceholder {
        template: String,
        placeholder: &'static str,
    },

    #[error("Validation error: {0}")]
    ValidationError(String),
}
