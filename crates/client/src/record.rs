//! In-memory pet record shape.
//!
//! [`PetPayload`] is the JSON shape the server returns; [`PetRecord`] is
//! what the dashboard keeps in its list, with health status derived once
//! at mapping time.

use petcare_core::pet::{ActivityLevel, HealthStatus, NewPet, Species, DEFAULT_HEALTH_ISSUES};
use petcare_core::types::{DbId, Timestamp};
use petcare_core::validation::PetDraft;
use serde::Deserialize;

/// A pet as returned by the HTTP API.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PetPayload {
    pub id: DbId,
    pub name: String,
    #[serde(rename = "type")]
    pub species: Species,
    pub breed: String,
    pub age: f64,
    pub weight: f64,
    pub activity_level: ActivityLevel,
    #[serde(default = "default_health_issues")]
    pub health_issues: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub desexed: bool,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
}

fn default_health_issues() -> String {
    DEFAULT_HEALTH_ISSUES.to_string()
}

/// A pet held in the dashboard's list.
#[derive(Debug, Clone, PartialEq)]
pub struct PetRecord {
    pub id: DbId,
    pub name: String,
    pub species: Species,
    pub breed: String,
    pub age: f64,
    pub weight: f64,
    pub activity_level: ActivityLevel,
    pub health_issues: String,
    pub image_url: Option<String>,
    pub desexed: bool,
    pub health_status: HealthStatus,
    pub created_at: Option<Timestamp>,
}

impl PetRecord {
    /// Build a record for `id` from a validated submission.
    pub fn from_new(id: DbId, pet: &NewPet) -> Self {
        Self {
            id,
            name: pet.name.clone(),
            species: pet.species,
            breed: pet.breed.clone(),
            age: pet.age,
            weight: pet.weight,
            activity_level: pet.activity_level,
            health_issues: pet.health_issues.clone(),
            image_url: pet.image_url.clone(),
            desexed: pet.desexed,
            health_status: pet.health_status(),
            created_at: None,
        }
    }

    /// Pre-fill a form draft from this record.
    pub fn to_draft(&self) -> PetDraft {
        PetDraft {
            name: self.name.clone(),
            species: self.species.as_str().to_string(),
            breed: self.breed.clone(),
            age: self.age,
            weight: self.weight,
            activity_level: self.activity_level.as_str().to_string(),
            health_issues: self.health_issues.clone(),
            image_url: self.image_url.clone(),
            desexed: self.desexed,
        }
    }
}

impl From<PetPayload> for PetRecord {
    fn from(payload: PetPayload) -> Self {
        let health_status = HealthStatus::from_issues(&payload.health_issues);
        Self {
            id: payload.id,
            name: payload.name,
            species: payload.species,
            breed: payload.breed,
            age: payload.age,
            weight: payload.weight,
            activity_level: payload.activity_level,
            health_issues: payload.health_issues,
            image_url: payload.image_url,
            desexed: payload.desexed,
            health_status,
            created_at: payload.created_at,
        }
    }
}
