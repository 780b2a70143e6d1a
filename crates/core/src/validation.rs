//! Pet form validation.
//!
//! [`PetDraft`] is the raw candidate record as a user types it (or as a
//! client posts it). Validation produces a [`FieldErrors`] map from field to
//! human-readable message; a draft is submittable only when that map is
//! empty. The same rules run in the client before a request is sent and in
//! the server before a row is written.

use std::borrow::Cow;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidateUrl, ValidationError, ValidationErrors};

use crate::pet::{normalize_health_issues, ActivityLevel, NewPet, Species};

// ---------------------------------------------------------------------------
// Field keys
// ---------------------------------------------------------------------------

/// A validated pet field, keyed by its wire name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PetField {
    Name,
    Type,
    Breed,
    Age,
    Weight,
    ActivityLevel,
    HealthIssues,
    ImageUrl,
}

impl PetField {
    /// Wire (JSON) name of the field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Type => "type",
            Self::Breed => "breed",
            Self::Age => "age",
            Self::Weight => "weight",
            Self::ActivityLevel => "activityLevel",
            Self::HealthIssues => "healthIssues",
            Self::ImageUrl => "imageUrl",
        }
    }

    /// Human label used when building default messages.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Type => "Pet type",
            Self::Breed => "Breed",
            Self::Age => "Age",
            Self::Weight => "Weight",
            Self::ActivityLevel => "Activity level",
            Self::HealthIssues => "Health issues",
            Self::ImageUrl => "Image URL",
        }
    }

    /// Map a field name reported by `validator` to a key. Accepts both the
    /// Rust field name and the serde-renamed wire name.
    fn from_struct_field(name: &str) -> Option<Self> {
        match name {
            "name" => Some(Self::Name),
            "species" | "type" => Some(Self::Type),
            "breed" => Some(Self::Breed),
            "age" => Some(Self::Age),
            "weight" => Some(Self::Weight),
            "activity_level" | "activityLevel" => Some(Self::ActivityLevel),
            "health_issues" | "healthIssues" => Some(Self::HealthIssues),
            "image_url" | "imageUrl" => Some(Self::ImageUrl),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Field errors
// ---------------------------------------------------------------------------

/// Mapping from invalid field to message. Empty means valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<PetField, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message for `field`. The first message for a field wins.
    pub fn insert(&mut self, field: PetField, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: PetField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: PetField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (PetField, &str)> {
        self.0.iter().map(|(field, msg)| (*field, msg.as_str()))
    }

    /// One-line rendering, e.g. `age: Age must be greater than 0`.
    pub fn summary(&self) -> String {
        self.iter()
            .map(|(field, msg)| format!("{}: {msg}", field.as_str()))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl From<ValidationErrors> for FieldErrors {
    fn from(errors: ValidationErrors) -> Self {
        let mut out = FieldErrors::new();
        for (name, field_errors) in errors.field_errors() {
            let Some(field) = PetField::from_struct_field(&name) else {
                continue;
            };
            let Some(first) = field_errors.first() else {
                continue;
            };
            let message = match &first.message {
                Some(msg) => msg.to_string(),
                None => default_message(field, &first.code),
            };
            out.insert(field, message);
        }
        out
    }
}

fn default_message(field: PetField, code: &str) -> String {
    match code {
        "required" => format!("{} is required", field.label()),
        "range" => format!("{} must be greater than 0", field.label()),
        "url" => format!("{} must be a valid URL", field.label()),
        "finite" => format!("{} must be a finite number", field.label()),
        _ => format!("{} is invalid", field.label()),
    }
}

// ---------------------------------------------------------------------------
// Custom rules (shared with the partial-update DTO)
// ---------------------------------------------------------------------------

/// Reject text that is empty after trimming.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

/// Require a non-blank, recognised species.
pub fn known_species(value: &str) -> Result<(), ValidationError> {
    not_blank(value)?;
    value
        .parse::<Species>()
        .map(|_| ())
        .map_err(|_| ValidationError::new("choice").with_message(Cow::Borrowed("Pet type must be dog or cat")))
}

/// Require a non-blank, recognised activity level.
pub fn known_activity_level(value: &str) -> Result<(), ValidationError> {
    not_blank(value)?;
    value.parse::<ActivityLevel>().map(|_| ()).map_err(|_| {
        ValidationError::new("choice")
            .with_message(Cow::Borrowed("Activity level must be low, moderate or high"))
    })
}

/// Reject infinite measurements. NaN is already caught by the range check.
pub fn finite_number(value: f64) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::new("finite"))
    }
}

/// Accept blank input (no image) or a well-formed URL.
pub fn optional_url(value: &str) -> Result<(), ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.validate_url() {
        Ok(())
    } else {
        Err(ValidationError::new("url"))
    }
}

// ---------------------------------------------------------------------------
// Draft
// ---------------------------------------------------------------------------

/// Candidate pet record as collected by the create/edit form.
///
/// Every field defaults, so a partially filled JSON body still deserializes
/// and is then rejected field by field instead of with an opaque parse
/// error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct PetDraft {
    #[validate(custom(function = "not_blank"))]
    pub name: String,
    #[serde(rename = "type")]
    #[validate(custom(function = "known_species"))]
    pub species: String,
    #[validate(custom(function = "not_blank"))]
    pub breed: String,
    #[validate(
        range(exclusive_min = 0.0, message = "Age must be greater than 0"),
        custom(function = "finite_number")
    )]
    pub age: f64,
    #[validate(
        range(exclusive_min = 0.0, message = "Weight must be greater than 0"),
        custom(function = "finite_number")
    )]
    pub weight: f64,
    #[validate(custom(function = "known_activity_level"))]
    pub activity_level: String,
    pub health_issues: String,
    #[validate(custom(function = "optional_url"))]
    pub image_url: Option<String>,
    pub desexed: bool,
}

impl PetDraft {
    /// Validate the draft, returning the per-field error map.
    pub fn field_errors(&self) -> FieldErrors {
        match self.validate() {
            Ok(()) => FieldErrors::new(),
            Err(errors) => FieldErrors::from(errors),
        }
    }

    /// Validate and convert into a typed, trimmed [`NewPet`].
    pub fn into_new_pet(self) -> Result<NewPet, FieldErrors> {
        let errors = self.field_errors();
        if !errors.is_empty() {
            return Err(errors);
        }

        let mut errors = FieldErrors::new();
        let species = self.species.parse::<Species>().map_err(|e| {
            errors.insert(PetField::Type, e.to_string());
        });
        let activity_level = self.activity_level.parse::<ActivityLevel>().map_err(|e| {
            errors.insert(PetField::ActivityLevel, e.to_string());
        });
        let (Ok(species), Ok(activity_level)) = (species, activity_level) else {
            return Err(errors);
        };

        Ok(NewPet {
            name: self.name.trim().to_string(),
            species,
            breed: self.breed.trim().to_string(),
            age: self.age,
            weight: self.weight,
            activity_level,
            health_issues: normalize_health_issues(&self.health_issues),
            image_url: self
                .image_url
                .map(|url| url.trim().to_string())
                .filter(|url| !url.is_empty()),
            desexed: self.desexed,
        })
    }
}

impl From<&NewPet> for PetDraft {
    fn from(pet: &NewPet) -> Self {
        Self {
            name: pet.name.clone(),
            species: pet.species.as_str().to_string(),
            breed: pet.breed.clone(),
            age: pet.age,
            weight: pet.weight,
            activity_level: pet.activity_level.as_str().to_string(),
            health_issues: pet.health_issues.clone(),
            image_url: pet.image_url.clone(),
            desexed: pet.desexed,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pet::HealthStatus;

    fn rex() -> PetDraft {
        PetDraft {
            name: "Rex".into(),
            species: "dog".into(),
            breed: "Lab".into(),
            age: 2.0,
            weight: 20.0,
            activity_level: "high".into(),
            ..Default::default()
        }
    }

    #[test]
    fn complete_draft_is_valid() {
        let pet = rex().into_new_pet().expect("Rex should validate");
        assert_eq!(pet.species, Species::Dog);
        assert_eq!(pet.activity_level, ActivityLevel::High);
        assert_eq!(pet.health_issues, "None");
        assert_eq!(pet.health_status(), HealthStatus::Healthy);
    }

    #[test]
    fn zero_age_is_rejected_on_age() {
        let draft = PetDraft { age: 0.0, ..rex() };
        let errors = draft.into_new_pet().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(PetField::Age), Some("Age must be greater than 0"));
    }

    #[test]
    fn negative_weight_is_rejected_on_weight() {
        let draft = PetDraft { weight: -1.5, ..rex() };
        let errors = draft.field_errors();
        assert!(errors.contains(PetField::Weight));
        assert!(!errors.contains(PetField::Age));
    }

    #[test]
    fn infinite_measurements_are_rejected() {
        let draft = PetDraft {
            age: f64::INFINITY,
            weight: f64::INFINITY,
            ..rex()
        };
        let errors = draft.into_new_pet().unwrap_err();
        assert_eq!(errors.get(PetField::Age), Some("Age must be a finite number"));
        assert_eq!(errors.get(PetField::Weight), Some("Weight must be a finite number"));
    }

    #[test]
    fn nan_age_is_rejected() {
        let draft = PetDraft { age: f64::NAN, ..rex() };
        assert!(draft.field_errors().contains(PetField::Age));
    }

    #[test]
    fn whitespace_only_text_fields_are_required() {
        let draft = PetDraft {
            name: "   ".into(),
            breed: "\t".into(),
            ..rex()
        };
        let errors = draft.field_errors();
        assert_eq!(errors.get(PetField::Name), Some("Name is required"));
        assert_eq!(errors.get(PetField::Breed), Some("Breed is required"));
    }

    #[test]
    fn empty_draft_reports_every_required_field() {
        let errors = PetDraft::default().field_errors();
        for field in [
            PetField::Name,
            PetField::Type,
            PetField::Breed,
            PetField::Age,
            PetField::Weight,
            PetField::ActivityLevel,
        ] {
            assert!(errors.contains(field), "{} should be flagged", field.as_str());
        }
        assert!(!errors.contains(PetField::HealthIssues));
        assert!(!errors.contains(PetField::ImageUrl));
    }

    #[test]
    fn unknown_species_is_rejected_on_type() {
        let draft = PetDraft {
            species: "parrot".into(),
            ..rex()
        };
        let errors = draft.field_errors();
        assert_eq!(errors.get(PetField::Type), Some("Pet type must be dog or cat"));
    }

    #[test]
    fn blank_image_url_is_dropped() {
        let draft = PetDraft {
            image_url: Some("  ".into()),
            ..rex()
        };
        assert_eq!(draft.into_new_pet().unwrap().image_url, None);
    }

    #[test]
    fn malformed_image_url_is_rejected() {
        let draft = PetDraft {
            image_url: Some("not a url".into()),
            ..rex()
        };
        assert!(draft.field_errors().contains(PetField::ImageUrl));
    }

    #[test]
    fn text_fields_are_trimmed() {
        let draft = PetDraft {
            name: "  Rex ".into(),
            health_issues: " Allergies ".into(),
            ..rex()
        };
        let pet = draft.into_new_pet().unwrap();
        assert_eq!(pet.name, "Rex");
        assert_eq!(pet.health_issues, "Allergies");
        assert_eq!(pet.health_status(), HealthStatus::NeedsAttention);
    }

    #[test]
    fn draft_deserializes_from_camel_case_json() {
        let draft: PetDraft = serde_json::from_value(serde_json::json!({
            "name": "Rex",
            "type": "dog",
            "breed": "Lab",
            "age": 2,
            "weight": 20,
            "activityLevel": "high"
        }))
        .unwrap();
        assert_eq!(draft, rex());
    }

    #[test]
    fn field_errors_serialize_with_wire_keys() {
        let mut errors = FieldErrors::new();
        errors.insert(PetField::ActivityLevel, "Activity level is required");
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json["activityLevel"], "Activity level is required");
    }

    #[test]
    fn first_message_per_field_wins() {
        let mut errors = FieldErrors::new();
        errors.insert(PetField::Name, "first");
        errors.insert(PetField::Name, "second");
        assert_eq!(errors.get(PetField::Name), Some("first"));
    }
}
