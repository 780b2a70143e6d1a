//! Pet entity model and DTOs.
//!
//! Creation and full replacement take a validated
//! [`NewPet`](petcare_core::pet::NewPet) from the core crate; partial updates
//! use [`UpdatePet`].

use petcare_core::pet::{normalize_health_issues, ActivityLevel, HealthStatus, Species};
use petcare_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `pets` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    pub id: DbId,
    pub name: String,
    #[serde(rename = "type")]
    #[sqlx(try_from = "String")]
    pub species: Species,
    pub breed: String,
    pub age: f64,
    pub weight: f64,
    #[sqlx(try_from = "String")]
    pub activity_level: ActivityLevel,
    pub health_issues: String,
    pub image_url: Option<String>,
    pub desexed: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Pet {
    pub fn health_status(&self) -> HealthStatus {
        HealthStatus::from_issues(&self.health_issues)
    }
}

/// DTO for a partial update. Absent fields keep their stored value.
///
/// An empty `imageUrl` clears the image reference.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePet {
    #[validate(custom(function = "petcare_core::validation::not_blank"))]
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub species: Option<Species>,
    #[validate(custom(function = "petcare_core::validation::not_blank"))]
    pub breed: Option<String>,
    #[validate(
        range(exclusive_min = 0.0, message = "Age must be greater than 0"),
        custom(function = "petcare_core::validation::finite_number")
    )]
    pub age: Option<f64>,
    #[validate(
        range(exclusive_min = 0.0, message = "Weight must be greater than 0"),
        custom(function = "petcare_core::validation::finite_number")
    )]
    pub weight: Option<f64>,
    pub activity_level: Option<ActivityLevel>,
    pub health_issues: Option<String>,
    #[validate(custom(function = "petcare_core::validation::optional_url"))]
    pub image_url: Option<String>,
    pub desexed: Option<bool>,
}

impl UpdatePet {
    /// Trim text fields and turn blank health issues into `"None"`.
    pub fn normalized(self) -> Self {
        Self {
            name: self.name.map(|s| s.trim().to_string()),
            breed: self.breed.map(|s| s.trim().to_string()),
            health_issues: self.health_issues.as_deref().map(normalize_health_issues),
            image_url: self.image_url.map(|s| s.trim().to_string()),
            ..self
        }
    }
}

/// Query parameters for listing pets.
#[derive(Debug, Default, Deserialize)]
pub struct PetListParams {
    #[serde(rename = "type")]
    pub species: Option<Species>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
