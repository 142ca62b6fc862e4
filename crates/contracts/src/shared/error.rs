use thiserror::Error;

/// Errors of the registry seam.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("{resource} '{id}' not found")]
    NotFound { resource: &'static str, id: String },

    #[error("{resource} is read-only, '{action}' is not available")]
    ReadOnly {
        resource: &'static str,
        action: &'static str,
    },
}
