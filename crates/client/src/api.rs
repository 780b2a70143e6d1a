//! REST client for the PetCare HTTP API.
//!
//! [`PetApi`] is the seam the dashboard talks to; [`HttpPetApi`] is the
//! production implementation over [`reqwest`]. Tests substitute an
//! in-memory fake.

use async_trait::async_trait;
use petcare_core::pet::NewPet;
use petcare_core::types::DbId;
use petcare_core::validation::FieldErrors;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::config::ClientConfig;
use crate::record::{PetPayload, PetRecord};

/// Errors from the API transport layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The HTTP request itself failed (network, DNS, TLS, body decoding).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-2xx status code.
    #[error("API error ({status}): {message}")]
    Status {
        status: u16,
        /// Machine-readable code from the error body, when present.
        code: Option<String>,
        message: String,
        /// Per-field validation messages, when the server sent any.
        fields: FieldErrors,
    },
}

impl ApiError {
    /// Build a [`ApiError::Status`] from a status code and raw body text.
    ///
    /// Understands the server's `{ "error", "code", "fields" }` body and
    /// falls back to the raw text otherwise.
    pub fn from_body(status: u16, body: &str) -> Self {
        #[derive(Deserialize)]
        struct ErrorBody {
            error: Option<String>,
            code: Option<String>,
            #[serde(default)]
            fields: FieldErrors,
        }

        match serde_json::from_str::<ErrorBody>(body) {
            Ok(parsed) => ApiError::Status {
                status,
                code: parsed.code,
                message: parsed
                    .error
                    .unwrap_or_else(|| format!("Request failed with status {status}")),
                fields: parsed.fields,
            },
            Err(_) => {
                let text = body.trim();
                ApiError::Status {
                    status,
                    code: None,
                    message: if text.is_empty() {
                        format!("Request failed with status {status}")
                    } else {
                        text.to_string()
                    },
                    fields: FieldErrors::new(),
                }
            }
        }
    }

    /// Message suitable for a notification.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Request(_) => {
                "Could not reach the server. Check your connection and try again.".to_string()
            }
            ApiError::Status { message, .. } => message.clone(),
        }
    }

    /// Field-level messages carried by a validation rejection.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            ApiError::Status { fields, .. } if !fields.is_empty() => Some(fields),
            _ => None,
        }
    }
}

/// Operations the dashboard needs from the backend.
#[async_trait]
pub trait PetApi: Send + Sync {
    /// `GET /pets`
    async fn list_pets(&self) -> Result<Vec<PetRecord>, ApiError>;

    /// `POST /pets`
    async fn create_pet(&self, pet: &NewPet) -> Result<PetRecord, ApiError>;

    /// `PUT /pets/{id}`
    async fn update_pet(&self, id: DbId, pet: &NewPet) -> Result<PetRecord, ApiError>;

    /// `DELETE /pets/{id}`
    async fn delete_pet(&self, id: DbId) -> Result<(), ApiError>;
}

/// `{ "data": T }` response envelope.
#[derive(Deserialize)]
struct DataEnvelope<T> {
    data: T,
}

/// HTTP client for a PetCare server.
pub struct HttpPetApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpPetApi {
    /// Create a client for `base_url`, e.g. `http://localhost:3000/api/v1`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.api_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn pets_url(&self) -> String {
        format!("{}/pets", self.base_url)
    }

    fn pet_url(&self, id: DbId) -> String {
        format!("{}/pets/{id}", self.base_url)
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code, converting the body
    /// of a failure into [`ApiError::Status`].
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::from_body(status.as_u16(), &body))
    }

    /// Check the status and unwrap the `data` envelope.
    async fn parse_data<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let response = Self::ensure_success(response).await?;
        let envelope = response.json::<DataEnvelope<T>>().await?;
        Ok(envelope.data)
    }
}

#[async_trait]
impl PetApi for HttpPetApi {
    async fn list_pets(&self) -> Result<Vec<PetRecord>, ApiError> {
        let response = self.client.get(self.pets_url()).send().await?;
        let pets: Vec<PetPayload> = Self::parse_data(response).await?;
        Ok(pets.into_iter().map(PetRecord::from).collect())
    }

    async fn create_pet(&self, pet: &NewPet) -> Result<PetRecord, ApiError> {
        let response = self.client.post(self.pets_url()).json(pet).send().await?;
        let created: PetPayload = Self::parse_data(response).await?;
        Ok(created.into())
    }

    async fn update_pet(&self, id: DbId, pet: &NewPet) -> Result<PetRecord, ApiError> {
        let response = self.client.put(self.pet_url(id)).json(pet).send().await?;
        let updated: PetPayload = Self::parse_data(response).await?;
        Ok(updated.into())
    }

    async fn delete_pet(&self, id: DbId) -> Result<(), ApiError> {
        let response = self.client.delete(self.pet_url(id)).send().await?;
        Self::ensure_success(response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use petcare_core::validation::PetField;

    #[test]
    fn error_body_with_fields_is_parsed() {
        let err = ApiError::from_body(
            400,
            r#"{"error":"Validation failed: age: Age must be greater than 0","code":"VALIDATION_ERROR","fields":{"age":"Age must be greater than 0"}}"#,
        );
        let fields = err.field_errors().expect("fields should be present");
        assert_eq!(fields.get(PetField::Age), Some("Age must be greater than 0"));
        assert!(err.user_message().starts_with("Validation failed"));
    }

    #[test]
    fn plain_text_body_becomes_message() {
        let err = ApiError::from_body(422, "Failed to deserialize the JSON body");
        assert_eq!(err.user_message(), "Failed to deserialize the JSON body");
        assert!(err.field_errors().is_none());
    }

    #[test]
    fn empty_body_falls_back_to_status() {
        let err = ApiError::from_body(503, "");
        assert_eq!(err.user_message(), "Request failed with status 503");
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let api = HttpPetApi::new("http://localhost:3000/api/v1/");
        assert_eq!(api.base_url(), "http://localhost:3000/api/v1");
        assert_eq!(api.pets_url(), "http://localhost:3000/api/v1/pets");
        assert_eq!(
            api.pet_url(uuid::Uuid::nil()),
            "http://localhost:3000/api/v1/pets/00000000-0000-0000-0000-000000000000"
        );
    }
}
