//! Fixed demo data shown when the initial load fails and demo fallback is on.

use petcare_core::pet::{ActivityLevel, NewPet, Species};
use uuid::Uuid;

use crate::record::PetRecord;

/// `(id, name, species, breed, age, weight, activity, health issues, desexed)`
type DemoRow = (u128, &'static str, Species, &'static str, f64, f64, ActivityLevel, &'static str, bool);

const DEMO_ROWS: &[DemoRow] = &[
    (0xd0_0001, "Buddy", Species::Dog, "Golden Retriever", 3.0, 30.0, ActivityLevel::High, "None", true),
    (0xd0_0002, "Whiskers", Species::Cat, "Siamese", 5.0, 4.5, ActivityLevel::Low, "None", true),
    (0xd0_0003, "Max", Species::Dog, "German Shepherd", 7.0, 35.0, ActivityLevel::Moderate, "Hip dysplasia", false),
    (0xd0_0004, "Luna", Species::Cat, "Maine Coon", 2.0, 6.8, ActivityLevel::Moderate, "Seasonal allergies", false),
];

/// The demo data set. Ids are stable so repeated loads compare equal.
pub fn demo_pets() -> Vec<PetRecord> {
    DEMO_ROWS
        .iter()
        .map(|&(id, name, species, breed, age, weight, activity_level, health_issues, desexed)| {
            let pet = NewPet {
                name: name.to_string(),
                species,
                breed: breed.to_string(),
                age,
                weight,
                activity_level,
                health_issues: health_issues.to_string(),
                image_url: None,
                desexed,
            };
            PetRecord::from_new(Uuid::from_u128(id), &pet)
        })
        .collect()
}
