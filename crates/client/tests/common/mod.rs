#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use petcare_client::api::{ApiError, PetApi};
use petcare_client::config::ClientConfig;
use petcare_client::dashboard::PetDashboard;
use petcare_client::record::PetRecord;
use petcare_core::pet::{ActivityLevel, NewPet, Species};
use petcare_core::types::DbId;
use petcare_core::validation::{FieldErrors, PetDraft};
use uuid::Uuid;

/// In-memory stand-in for the HTTP API with failure injection.
#[derive(Default)]
pub struct FakePetApi {
    pets: Mutex<Vec<PetRecord>>,
    failure: Mutex<Option<(u16, String, FieldErrors)>>,
    calls: AtomicUsize,
}

impl FakePetApi {
    pub fn with_pets(pets: Vec<PetRecord>) -> Self {
        Self {
            pets: Mutex::new(pets),
            ..Default::default()
        }
    }

    /// Make every following call fail with `status` until [`recover`](Self::recover).
    pub fn fail_with(&self, status: u16, message: &str) {
        self.fail_with_fields(status, message, FieldErrors::new());
    }

    pub fn fail_with_fields(&self, status: u16, message: &str, fields: FieldErrors) {
        *self.failure.lock().unwrap() = Some((status, message.to_string(), fields));
    }

    pub fn recover(&self) {
        *self.failure.lock().unwrap() = None;
    }

    /// Number of API calls made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn stored(&self) -> Vec<PetRecord> {
        self.pets.lock().unwrap().clone()
    }

    fn begin_call(&self) -> Result<(), ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.failure.lock().unwrap().clone() {
            Some((status, message, fields)) => Err(ApiError::Status {
                status,
                code: None,
                message,
                fields,
            }),
            None => Ok(()),
        }
    }

    fn not_found(id: DbId) -> ApiError {
        ApiError::Status {
            status: 404,
            code: Some("NOT_FOUND".into()),
            message: format!("Pet with id {id} not found"),
            fields: FieldErrors::new(),
        }
    }
}

#[async_trait]
impl PetApi for FakePetApi {
    async fn list_pets(&self) -> Result<Vec<PetRecord>, ApiError> {
        self.begin_call()?;
        Ok(self.stored())
    }

    async fn create_pet(&self, pet: &NewPet) -> Result<PetRecord, ApiError> {
        self.begin_call()?;
        let record = PetRecord::from_new(Uuid::new_v4(), pet);
        self.pets.lock().unwrap().push(record.clone());
        Ok(record)
    }

    async fn update_pet(&self, id: DbId, pet: &NewPet) -> Result<PetRecord, ApiError> {
        self.begin_call()?;
        let mut pets = self.pets.lock().unwrap();
        let slot = pets
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| Self::not_found(id))?;
        *slot = PetRecord::from_new(id, pet);
        Ok(slot.clone())
    }

    async fn delete_pet(&self, id: DbId) -> Result<(), ApiError> {
        self.begin_call()?;
        let mut pets = self.pets.lock().unwrap();
        let before = pets.len();
        pets.retain(|p| p.id != id);
        if pets.len() == before {
            return Err(Self::not_found(id));
        }
        Ok(())
    }
}

/// `{name:"Rex", type:"dog", breed:"Lab", age:2, weight:20, activityLevel:"high"}`
pub fn rex_draft() -> PetDraft {
    PetDraft {
        name: "Rex".into(),
        species: "dog".into(),
        breed: "Lab".into(),
        age: 2.0,
        weight: 20.0,
        activity_level: "high".into(),
        health_issues: "None".into(),
        ..Default::default()
    }
}

pub fn new_pet(name: &str, species: Species, health_issues: &str) -> NewPet {
    NewPet {
        name: name.to_string(),
        species,
        breed: "Mixed".to_string(),
        age: 4.0,
        weight: 10.0,
        activity_level: ActivityLevel::Moderate,
        health_issues: health_issues.to_string(),
        image_url: None,
        desexed: false,
    }
}

pub fn record(name: &str, species: Species, health_issues: &str) -> PetRecord {
    PetRecord::from_new(Uuid::new_v4(), &new_pet(name, species, health_issues))
}

/// A dashboard over a fake seeded with `pets`, already loaded.
pub async fn loaded_dashboard(pets: Vec<PetRecord>) -> PetDashboard<FakePetApi> {
    let mut dashboard = PetDashboard::new(
        FakePetApi::with_pets(pets),
        &ClientConfig::new("http://fake"),
    );
    dashboard.load().await;
    assert!(dashboard.error().is_none());
    dashboard
}
