//! Pet enumerations and derived attributes.
//!
//! Species and activity level are stored as lowercase text in the `pets`
//! table (guarded by CHECK constraints) and travel as the same lowercase
//! strings on the wire. Health status is never stored; it is derived from
//! the free-text health issues field.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Value stored in `health_issues` when the owner reports nothing.
pub const DEFAULT_HEALTH_ISSUES: &str = "None";

// ---------------------------------------------------------------------------
// Species
// ---------------------------------------------------------------------------

/// The kind of animal a pet record describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    Dog,
    Cat,
}

impl Species {
    pub const ALL: [Species; 2] = [Species::Dog, Species::Cat];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dog => "dog",
            Self::Cat => "cat",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Species {
    type Err = CoreError;

    /// Parse a species, ignoring surrounding whitespace and case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dog" => Ok(Self::Dog),
            "cat" => Ok(Self::Cat),
            _ => Err(CoreError::Validation(format!(
                "Unknown pet type '{s}'. Must be one of: dog, cat"
            ))),
        }
    }
}

impl TryFrom<String> for Species {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

// ---------------------------------------------------------------------------
// Activity level
// ---------------------------------------------------------------------------

/// How much daily exercise a pet needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    Low,
    Moderate,
    High,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 3] = [
        ActivityLevel::Low,
        ActivityLevel::Moderate,
        ActivityLevel::High,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityLevel {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "moderate" => Ok(Self::Moderate),
            "high" => Ok(Self::High),
            _ => Err(CoreError::Validation(format!(
                "Unknown activity level '{s}'. Must be one of: low, moderate, high"
            ))),
        }
    }
}

impl TryFrom<String> for ActivityLevel {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

// ---------------------------------------------------------------------------
// Health status
// ---------------------------------------------------------------------------

/// Derived classification shown on pet cards and in the dashboard stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HealthStatus {
    Healthy,
    NeedsAttention,
}

impl HealthStatus {
    /// Classify a health-issues string.
    ///
    /// Blank text and `"None"` (any case) mean healthy; anything else means
    /// the pet needs attention.
    pub fn from_issues(health_issues: &str) -> Self {
        let trimmed = health_issues.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(DEFAULT_HEALTH_ISSUES) {
            Self::Healthy
        } else {
            Self::NeedsAttention
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Healthy => "healthy",
            Self::NeedsAttention => "needs-attention",
        }
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalise user-entered health issues: blank input becomes `"None"`.
pub fn normalize_health_issues(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        DEFAULT_HEALTH_ISSUES.to_string()
    } else {
        trimmed.to_string()
    }
}

// ---------------------------------------------------------------------------
// Validated submission
// ---------------------------------------------------------------------------

/// A pet record that passed validation and is ready to be persisted.
///
/// Produced by [`PetDraft::into_new_pet`](crate::validation::PetDraft::into_new_pet).
/// Serializes to the same camelCase shape the HTTP API accepts.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPet {
    pub name: String,
    #[serde(rename = "type")]
    pub species: Species,
    pub breed: String,
    pub age: f64,
    pub weight: f64,
    pub activity_level: ActivityLevel,
    pub health_issues: String,
    pub image_url: Option<String>,
    pub desexed: bool,
}

impl NewPet {
    pub fn health_status(&self) -> HealthStatus {
        HealthStatus::from_issues(&self.health_issues)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
