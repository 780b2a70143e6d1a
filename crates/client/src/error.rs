use petcare_core::types::DbId;
use petcare_core::validation::FieldErrors;

use crate::api::ApiError;

/// Failure of a dashboard action, handed back to the dialog that triggered it.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The backend call failed; local state was left unchanged.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The form did not pass validation; nothing was sent.
    #[error("Validation failed: {}", .0.summary())]
    Invalid(FieldErrors),

    /// The action targeted a pet that is not in the local list.
    #[error("Pet {0} is not in the list")]
    UnknownPet(DbId),
}

impl ClientError {
    /// Message suitable for a notification or a form-level error line.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Api(err) => err.user_message(),
            ClientError::Invalid(_) => "Please fix the highlighted fields".to_string(),
            ClientError::UnknownPet(_) => {
                "That pet is no longer in the list. Refresh and try again.".to_string()
            }
        }
    }
}
