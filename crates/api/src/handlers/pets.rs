//! Handlers for the `/pets` resource.
//!
//! `POST` and `PUT` accept a full pet draft and run the shared form
//! validation before touching the database; `PATCH` validates only the
//! fields present in the body.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use petcare_core::error::CoreError;
use petcare_core::pagination::{clamp_limit, clamp_offset, DEFAULT_LIMIT, MAX_LIMIT};
use petcare_core::types::DbId;
use petcare_core::validation::{FieldErrors, PetDraft};
use petcare_db::models::pet::{Pet, PetListParams, UpdatePet};
use petcare_db::repositories::PetRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Pet", id })
}

// ---------------------------------------------------------------------------
// GET /pets
// ---------------------------------------------------------------------------

/// List pets in creation order, optionally filtered by `?type=`.
///
/// Without `?limit=` the whole collection is returned; paging only applies
/// when the caller asks for it.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PetListParams>,
) -> AppResult<Json<DataResponse<Vec<Pet>>>> {
    let limit = params
        .limit
        .map(|limit| clamp_limit(Some(limit), DEFAULT_LIMIT, MAX_LIMIT));
    let offset = clamp_offset(params.offset);

    let pets = PetRepo::list(&state.pool, params.species, limit, offset).await?;
    Ok(Json(DataResponse { data: pets }))
}

// ---------------------------------------------------------------------------
// POST /pets
// ---------------------------------------------------------------------------

/// Validate a draft and create a pet. Answers `201` with the stored record.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<PetDraft>,
) -> AppResult<(StatusCode, Json<DataResponse<Pet>>)> {
    let new_pet = input.into_new_pet().map_err(CoreError::from)?;

    let pet = PetRepo::create(&state.pool, &new_pet).await?;

    tracing::info!(pet_id = %pet.id, species = %pet.species, "Pet created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: pet })))
}

// ---------------------------------------------------------------------------
// GET /pets/{id}
// ---------------------------------------------------------------------------

pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Pet>>> {
    let pet = PetRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: pet }))
}

// ---------------------------------------------------------------------------
// PUT /pets/{id}
// ---------------------------------------------------------------------------

/// Replace every editable field of a pet with a validated draft.
pub async fn replace(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<PetDraft>,
) -> AppResult<Json<DataResponse<Pet>>> {
    let new_pet = input.into_new_pet().map_err(CoreError::from)?;

    let pet = PetRepo::replace(&state.pool, id, &new_pet)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(pet_id = %id, "Pet replaced");

    Ok(Json(DataResponse { data: pet }))
}

// ---------------------------------------------------------------------------
// PATCH /pets/{id}
// ---------------------------------------------------------------------------

/// Apply the fields present in the body.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePet>,
) -> AppResult<Json<DataResponse<Pet>>> {
    input
        .validate()
        .map_err(|e| CoreError::from(FieldErrors::from(e)))?;

    let pet = PetRepo::update(&state.pool, id, &input.normalized())
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(pet_id = %id, "Pet updated");

    Ok(Json(DataResponse { data: pet }))
}

// ---------------------------------------------------------------------------
// DELETE /pets/{id}
// ---------------------------------------------------------------------------

pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if PetRepo::delete(&state.pool, id).await? {
        tracing::info!(pet_id = %id, "Pet deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
