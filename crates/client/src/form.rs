//! Create / edit form state.
//!
//! The form owns the draft being edited and its error state. Submission
//! validates locally first; persistence is only attempted when the draft
//! has no field errors.

use petcare_core::pet::DEFAULT_HEALTH_ISSUES;
use petcare_core::types::DbId;
use petcare_core::validation::{FieldErrors, PetDraft, PetField};

use crate::api::PetApi;
use crate::dashboard::PetDashboard;
use crate::error::ClientError;
use crate::record::PetRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(DbId),
}

#[derive(Debug, Clone)]
pub struct PetForm {
    mode: FormMode,
    draft: PetDraft,
    field_errors: FieldErrors,
    submit_error: Option<String>,
    submitting: bool,
    open: bool,
}

impl PetForm {
    /// Empty form for a new pet.
    pub fn create() -> Self {
        let draft = PetDraft {
            health_issues: DEFAULT_HEALTH_ISSUES.to_string(),
            ..Default::default()
        };
        Self::with_draft(FormMode::Create, draft)
    }

    /// Form pre-filled from an existing record.
    pub fn edit(record: &PetRecord) -> Self {
        Self::with_draft(FormMode::Edit(record.id), record.to_draft())
    }

    fn with_draft(mode: FormMode, draft: PetDraft) -> Self {
        Self {
            mode,
            draft,
            field_errors: FieldErrors::new(),
            submit_error: None,
            submitting: false,
            open: true,
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn draft(&self) -> &PetDraft {
        &self.draft
    }

    /// Mutable access for input handlers.
    pub fn draft_mut(&mut self) -> &mut PetDraft {
        &mut self.draft
    }

    pub fn field_errors(&self) -> &FieldErrors {
        &self.field_errors
    }

    pub fn field_error(&self, field: PetField) -> Option<&str> {
        self.field_errors.get(field)
    }

    pub fn submit_error(&self) -> Option<&str> {
        self.submit_error.as_deref()
    }

    pub fn submitting(&self) -> bool {
        self.submitting
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Re-run validation and store the result. Returns `true` when valid.
    pub fn validate(&mut self) -> bool {
        self.field_errors = self.draft.field_errors();
        self.field_errors.is_empty()
    }

    /// Validate and persist through the dashboard.
    ///
    /// Closes the form on success. On failure the form stays open: local
    /// validation failures populate the field errors, persistence failures
    /// populate the submit error (plus any field errors the server sent).
    pub async fn submit<A: PetApi>(
        &mut self,
        dashboard: &mut PetDashboard<A>,
    ) -> Result<PetRecord, ClientError> {
        let new_pet = match self.draft.clone().into_new_pet() {
            Ok(pet) => pet,
            Err(errors) => {
                self.field_errors = errors.clone();
                return Err(ClientError::Invalid(errors));
            }
        };
        self.field_errors = FieldErrors::new();

        self.submitting = true;
        let result = match self.mode {
            FormMode::Create => dashboard.create_pet(&new_pet).await,
            FormMode::Edit(id) => dashboard.update_pet(id, &new_pet).await,
        };
        self.submitting = false;

        match result {
            Ok(record) => {
                self.submit_error = None;
                self.open = false;
                Ok(record)
            }
            Err(err) => {
                if let ClientError::Api(api_err) = &err {
                    if let Some(fields) = api_err.field_errors() {
                        self.field_errors = fields.clone();
                    }
                }
                self.submit_error = Some(err.user_message());
                Err(err)
            }
        }
    }

    /// Close without saving.
    pub fn cancel(&mut self) {
        self.open = false;
        self.submit_error = None;
        self.field_errors = FieldErrors::new();
    }
}
