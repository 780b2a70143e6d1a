//! Delete confirmation flow.

use petcare_core::types::DbId;

use crate::api::PetApi;
use crate::dashboard::PetDashboard;
use crate::error::ClientError;
use crate::record::PetRecord;

/// Confirmation dialog for deleting one pet.
///
/// Nothing is deleted until [`confirm`](Self::confirm) is called. The
/// dialog closes only when the delete succeeds.
#[derive(Debug, Clone)]
pub struct DeleteConfirmation {
    target_id: DbId,
    target_name: String,
    open: bool,
    deleting: bool,
    error: Option<String>,
}

impl DeleteConfirmation {
    pub fn new(target: &PetRecord) -> Self {
        Self {
            target_id: target.id,
            target_name: target.name.clone(),
            open: true,
            deleting: false,
            error: None,
        }
    }

    pub fn target_id(&self) -> DbId {
        self.target_id
    }

    /// Question shown to the user.
    pub fn prompt(&self) -> String {
        format!(
            "Are you sure you want to delete {}? This cannot be undone.",
            self.target_name
        )
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn deleting(&self) -> bool {
        self.deleting
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The user confirmed: delete through the dashboard.
    pub async fn confirm<A: PetApi>(
        &mut self,
        dashboard: &mut PetDashboard<A>,
    ) -> Result<(), ClientError> {
        self.deleting = true;
        let result = dashboard.delete_pet(self.target_id).await;
        self.deleting = false;

        match result {
            Ok(()) => {
                self.error = None;
                self.open = false;
                Ok(())
            }
            Err(err) => {
                self.error = Some(err.user_message());
                Err(err)
            }
        }
    }

    /// The user backed out; nothing is sent.
    pub fn cancel(&mut self) {
        self.open = false;
        self.error = None;
    }
}
