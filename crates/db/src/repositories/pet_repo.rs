//! Repository for the `pets` table.

use petcare_core::pet::{NewPet, Species};
use petcare_core::types::DbId;
use sqlx::PgPool;

use crate::models::pet::{Pet, UpdatePet};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "\
    id, name, species, breed, age, weight, activity_level, \
    health_issues, image_url, desexed, created_at, updated_at";

/// Provides CRUD operations for pets.
pub struct PetRepo;

impl PetRepo {
    /// Insert a new pet with a freshly generated id, returning the created row.
    pub async fn create(pool: &PgPool, input: &NewPet) -> Result<Pet, sqlx::Error> {
        let query = format!(
            "INSERT INTO pets \
                (id, name, species, breed, age, weight, activity_level, \
                 health_issues, image_url, desexed) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Pet>(&query)
            .bind(uuid::Uuid::new_v4())
            .bind(&input.name)
            .bind(input.species.as_str())
            .bind(&input.breed)
            .bind(input.age)
            .bind(input.weight)
            .bind(input.activity_level.as_str())
            .bind(&input.health_issues)
            .bind(&input.image_url)
            .bind(input.desexed)
            .fetch_one(pool)
            .await
    }

    /// Find a pet by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Pet>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM pets WHERE id = $1");
        sqlx::query_as::<_, Pet>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List pets in creation order, optionally restricted to one species.
    ///
    /// A `None` limit returns every matching row.
    pub async fn list(
        pool: &PgPool,
        species: Option<Species>,
        limit: Option<i64>,
        offset: i64,
    ) -> Result<Vec<Pet>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM pets \
             WHERE ($1::text IS NULL OR species = $1) \
             ORDER BY created_at ASC, id ASC \
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Pet>(&query)
            .bind(species.map(|s| s.as_str()))
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Overwrite every editable column of a pet.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn replace(
        pool: &PgPool,
        id: DbId,
        input: &NewPet,
    ) -> Result<Option<Pet>, sqlx::Error> {
        let query = format!(
            "UPDATE pets SET
                name = $2,
                species = $3,
                breed = $4,
                age = $5,
                weight = $6,
                activity_level = $7,
                health_issues = $8,
                image_url = $9,
                desexed = $10,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Pet>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.species.as_str())
            .bind(&input.breed)
            .bind(input.age)
            .bind(input.weight)
            .bind(input.activity_level.as_str())
            .bind(&input.health_issues)
            .bind(&input.image_url)
            .bind(input.desexed)
            .fetch_optional(pool)
            .await
    }

    /// Update a pet. Only non-`None` fields in `input` are applied; an empty
    /// `image_url` clears the column.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePet,
    ) -> Result<Option<Pet>, sqlx::Error> {
        let query = format!(
            "UPDATE pets SET
                name = COALESCE($2, name),
                species = COALESCE($3, species),
                breed = COALESCE($4, breed),
                age = COALESCE($5, age),
                weight = COALESCE($6, weight),
                activity_level = COALESCE($7, activity_level),
                health_issues = COALESCE($8, health_issues),
                image_url = CASE WHEN $9::text IS NULL THEN image_url ELSE NULLIF($9, '') END,
                desexed = COALESCE($10, desexed),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Pet>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.species.map(|s| s.as_str()))
            .bind(&input.breed)
            .bind(input.age)
            .bind(input.weight)
            .bind(input.activity_level.map(|a| a.as_str()))
            .bind(&input.health_issues)
            .bind(&input.image_url)
            .bind(input.desexed)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a pet by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM pets WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count all stored pets.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM pets")
            .fetch_one(pool)
            .await
    }
}
