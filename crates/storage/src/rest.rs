//! REST access to the catalog API.
//!
//! The HTTP transport sits behind the [`SendRequest`] seam so that the
//! request layer can be exercised against a mock transport in tests.

use std::time::Duration;

use ironlog_domain as domain;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

#[derive(thiserror::Error, Debug)]
pub enum TransportError {
    #[error("connection failed: {0}")]
    Connection(String),
}

#[allow(async_fn_in_trait)]
pub trait SendRequest {
    async fn send_request(
        &self,
        url: &str,
        bearer: Option<&str>,
    ) -> Result<HttpResponse, TransportError>;
}

#[derive(Default)]
pub struct ReqwestSendRequest;

impl SendRequest for ReqwestSendRequest {
    async fn send_request(
        &self,
        url: &str,
        bearer: Option<&str>,
    ) -> Result<HttpResponse, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|err| TransportError::Connection(err.to_string()))?;
        let mut request = client.get(url).header("accept", "application/json");
        if let Some(token) = bearer {
            request = request.bearer_auth(token);
        }
        let response = request
            .send()
            .await
            .map_err(|err| TransportError::Connection(err.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|err| TransportError::Connection(err.to_string()))?;
        Ok(HttpResponse { status, body })
    }
}

pub struct Rest<S> {
    base_url: String,
    sender: S,
    token: Option<String>,
}

impl Rest<ReqwestSendRequest> {
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self::with_sender(base_url, ReqwestSendRequest)
    }
}

impl<S: SendRequest> Rest<S> {
    pub fn with_sender(base_url: &str, sender: S) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            sender,
            token: None,
        }
    }

    #[must_use]
    pub fn with_token(mut self, token: &str) -> Self {
        self.token = Some(token.to_string());
        self
    }

    async fn get(&self, path_and_query: &str) -> Result<HttpResponse, domain::StorageError> {
        let url = format!("{}{path_and_query}", self.base_url);
        self.sender
            .send_request(&url, self.token.as_deref())
            .await
            .map_err(|err| {
                log::warn!("request to {url} failed: {err}");
                domain::StorageError::NoConnection
            })
    }
}

impl<S: SendRequest> domain::ExerciseRepository for Rest<S> {
    async fn read_exercises(
        &self,
        filter: &domain::ExerciseFilter,
    ) -> Result<domain::ExercisePage, domain::ReadError> {
        let response = self
            .get(&format!("/api/exercises?{}", filter.signature()))
            .await?;
        match response.status {
            200 => serde_json::from_str::<ExercisesResponse>(&response.body)
                .map_err(|err| domain::ReadError::Deserialization(err.to_string()))?
                .try_into(),
            status => Err(error_from_status(status, &response.body)),
        }
    }

    async fn read_exercise(
        &self,
        id: domain::ExerciseID,
    ) -> Result<domain::Exercise, domain::ReadError> {
        let response = self.get(&format!("/api/exercises/{}", *id)).await?;
        match response.status {
            200 => serde_json::from_str::<Exercise>(&response.body)
                .map_err(|err| domain::ReadError::Deserialization(err.to_string()))?
                .try_into(),
            status => Err(error_from_status(status, &response.body)),
        }
    }
}

fn error_from_status(status: u16, body: &str) -> domain::ReadError {
    let message = error_message(body).unwrap_or_else(|| format!("status {status}"));
    match status {
        400 => domain::ReadError::InvalidRequest(message),
        401 => domain::StorageError::NoSession.into(),
        404 => domain::ReadError::NotFound,
        _ => domain::StorageError::Upstream(message).into(),
    }
}

fn error_message(body: &str) -> Option<String> {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()?
        .get("error")?
        .as_str()
        .map(ToString::to_string)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub equipment: String,
    pub muscles: Vec<String>,
    pub body_parts: Vec<String>,
    pub difficulty: u8,
    pub is_compound: bool,
    pub requires_spotter: bool,
    pub is_active: bool,
}

impl TryFrom<Exercise> for domain::Exercise {
    type Error = domain::ReadError;

    fn try_from(value: Exercise) -> Result<Self, Self::Error> {
        Ok(domain::Exercise {
            id: value.id.into(),
            name: domain::Name::new(&value.name)
                .map_err(|err| domain::ReadError::Deserialization(err.to_string()))?,
            category: value.category,
            equipment: value.equipment,
            muscles: value.muscles,
            body_parts: value.body_parts,
            difficulty: domain::Difficulty::new(value.difficulty)
                .map_err(|err| domain::ReadError::Deserialization(err.to_string()))?,
            is_compound: value.is_compound,
            requires_spotter: value.requires_spotter,
            is_active: value.is_active,
        })
    }
}

impl From<domain::Exercise> for Exercise {
    fn from(value: domain::Exercise) -> Self {
        Exercise {
            id: *value.id,
            name: value.name.as_ref().to_string(),
            category: value.category,
            equipment: value.equipment,
            muscles: value.muscles,
            body_parts: value.body_parts,
            difficulty: *value.difficulty,
            is_compound: value.is_compound,
            requires_spotter: value.requires_spotter,
            is_active: value.is_active,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExercisesResponse {
    pub exercises: Vec<Exercise>,
    pub total: u64,
}

impl TryFrom<ExercisesResponse> for domain::ExercisePage {
    type Error = domain::ReadError;

    fn try_from(value: ExercisesResponse) -> Result<Self, Self::Error> {
        Ok(domain::ExercisePage {
            exercises: value
                .exercises
                .into_iter()
                .map(TryInto::try_into)
                .collect::<Result<_, _>>()?,
            total: value.total,
        })
    }
}

impl From<domain::ExercisePage> for ExercisesResponse {
    fn from(value: domain::ExercisePage) -> Self {
        ExercisesResponse {
            exercises: value.exercises.into_iter().map(Into::into).collect(),
            total: value.total,
        }
    }
}
