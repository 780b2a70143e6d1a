//! View-state controller for the pets dashboard page.
//!
//! [`PetDashboard`] owns the in-memory pet list together with the loading
//! flag, the page-level error, which dialog is open and the current
//! notification. Local state changes only after the matching API call has
//! succeeded; on failure the list is left untouched, an error notification
//! is raised and the error is returned so the calling dialog can stay open.

use petcare_core::pet::{HealthStatus, NewPet, Species};
use petcare_core::types::DbId;

use crate::api::PetApi;
use crate::config::ClientConfig;
use crate::demo::demo_pets;
use crate::error::ClientError;
use crate::record::PetRecord;

// ---------------------------------------------------------------------------
// Notification
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Info,
    Warning,
    Error,
}

/// Transient snackbar message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
}

impl Notification {
    fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity,
        }
    }
}

// ---------------------------------------------------------------------------
// Dialogs and stats
// ---------------------------------------------------------------------------

/// Which dialog, if any, the page shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogState {
    Closed,
    Create,
    Edit(DbId),
    Delete(DbId),
}

/// Counts for the dashboard stats panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PetStats {
    pub total: usize,
    pub dogs: usize,
    pub cats: usize,
    pub healthy: usize,
    pub needs_attention: usize,
}

// ---------------------------------------------------------------------------
// Controller
// ---------------------------------------------------------------------------

pub struct PetDashboard<A> {
    api: A,
    demo_fallback: bool,
    pets: Vec<PetRecord>,
    loading: bool,
    error: Option<String>,
    dialog: DialogState,
    notification: Option<Notification>,
}

impl<A: PetApi> PetDashboard<A> {
    pub fn new(api: A, config: &ClientConfig) -> Self {
        Self {
            api,
            demo_fallback: config.demo_fallback,
            pets: Vec::new(),
            loading: false,
            error: None,
            dialog: DialogState::Closed,
            notification: None,
        }
    }

    // ---- accessors ----

    pub fn pets(&self) -> &[PetRecord] {
        &self.pets
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn dialog(&self) -> DialogState {
        self.dialog
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn find(&self, id: DbId) -> Option<&PetRecord> {
        self.pets.iter().find(|p| p.id == id)
    }

    /// Pets of one species, or all pets when `species` is `None`.
    pub fn filtered(&self, species: Option<Species>) -> Vec<&PetRecord> {
        self.pets
            .iter()
            .filter(|p| species.map_or(true, |s| p.species == s))
            .collect()
    }

    pub fn stats(&self) -> PetStats {
        self.pets.iter().fold(PetStats::default(), |mut stats, pet| {
            stats.total += 1;
            match pet.species {
                Species::Dog => stats.dogs += 1,
                Species::Cat => stats.cats += 1,
            }
            match pet.health_status {
                HealthStatus::Healthy => stats.healthy += 1,
                HealthStatus::NeedsAttention => stats.needs_attention += 1,
            }
            stats
        })
    }

    // ---- dialogs / notifications ----

    pub fn open_create(&mut self) {
        self.dialog = DialogState::Create;
    }

    /// Open the edit dialog. Returns `false` if the pet is not in the list.
    pub fn open_edit(&mut self, id: DbId) -> bool {
        if self.find(id).is_none() {
            return false;
        }
        self.dialog = DialogState::Edit(id);
        true
    }

    /// Open the delete confirmation. Returns `false` if the pet is not in the list.
    pub fn open_delete(&mut self, id: DbId) -> bool {
        if self.find(id).is_none() {
            return false;
        }
        self.dialog = DialogState::Delete(id);
        true
    }

    pub fn close_dialog(&mut self) {
        self.dialog = DialogState::Closed;
    }

    pub fn dismiss_notification(&mut self) {
        self.notification = None;
    }

    // ---- remote operations ----

    /// Fetch the full list from the API.
    ///
    /// On failure, shows the demo data set when demo fallback is enabled,
    /// otherwise records a page-level error and leaves the list empty.
    pub async fn load(&mut self) {
        self.loading = true;
        self.error = None;

        match self.api.list_pets().await {
            Ok(pets) => {
                tracing::debug!(count = pets.len(), "Loaded pets");
                self.pets = pets;
            }
            Err(err) if self.demo_fallback => {
                tracing::info!(error = %err, "Pet list unavailable, showing demo data");
                self.pets = demo_pets();
                self.notification = Some(Notification::new(
                    Severity::Info,
                    "Server unavailable: showing demo data",
                ));
            }
            Err(err) => {
                tracing::warn!(error = %err, "Failed to load pets");
                self.pets.clear();
                self.error = Some(format!("Failed to load pets: {}", err.user_message()));
            }
        }

        self.loading = false;
    }

    /// Create a pet and append it to the list.
    pub async fn create_pet(&mut self, pet: &NewPet) -> Result<PetRecord, ClientError> {
        match self.api.create_pet(pet).await {
            Ok(created) => {
                tracing::info!(pet_id = %created.id, "Pet created");
                self.pets.push(created.clone());
                self.succeed(format!("{} was added", created.name));
                Ok(created)
            }
            Err(err) => Err(self.fail("add pet", err.into())),
        }
    }

    /// Update a pet and replace the matching record.
    pub async fn update_pet(&mut self, id: DbId, pet: &NewPet) -> Result<PetRecord, ClientError> {
        if self.find(id).is_none() {
            return Err(self.fail("update pet", ClientError::UnknownPet(id)));
        }

        match self.api.update_pet(id, pet).await {
            Ok(updated) => {
                tracing::info!(pet_id = %id, "Pet updated");
                if let Some(slot) = self.pets.iter_mut().find(|p| p.id == id) {
                    *slot = updated.clone();
                }
                self.succeed(format!("{} was updated", updated.name));
                Ok(updated)
            }
            Err(err) => Err(self.fail("update pet", err.into())),
        }
    }

    /// Delete a pet and remove it from the list.
    pub async fn delete_pet(&mut self, id: DbId) -> Result<(), ClientError> {
        let Some(name) = self.find(id).map(|p| p.name.clone()) else {
            return Err(self.fail("delete pet", ClientError::UnknownPet(id)));
        };

        match self.api.delete_pet(id).await {
            Ok(()) => {
                tracing::info!(pet_id = %id, "Pet deleted");
                self.pets.retain(|p| p.id != id);
                self.succeed(format!("{name} was removed"));
                Ok(())
            }
            Err(err) => Err(self.fail("delete pet", err.into())),
        }
    }

    fn succeed(&mut self, message: String) {
        self.dialog = DialogState::Closed;
        self.notification = Some(Notification::new(Severity::Success, message));
    }

    /// Raise an error notification and hand the error back to the caller.
    fn fail(&mut self, action: &str, err: ClientError) -> ClientError {
        tracing::warn!(error = %err, action, "Pet action failed");
        self.notification = Some(Notification::new(
            Severity::Error,
            format!("Failed to {action}: {}", err.user_message()),
        ));
        err
    }
}
