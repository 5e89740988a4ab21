use axum::Json;
use axum::extract::{Path, RawQuery, State};
use ironlog_domain as domain;
use ironlog_domain::{Catalog, CatalogQuery, ExerciseFilter};
use serde::Serialize;
use uuid::Uuid;

use crate::session::CurrentUser;
use crate::{ApiError, AppState};

pub(crate) async fn read_exercises<C: Catalog>(
    State(state): State<AppState<C>>,
    _user: CurrentUser,
    RawQuery(query): RawQuery,
) -> Result<Json<ExercisesResponse>, ApiError> {
    let filter = ExerciseFilter::from_query(query.as_deref().unwrap_or(""))
        .map_err(|err| ApiError::BadRequest(err.to_string()))?;
    let page = state.catalog.search(&CatalogQuery::from(&filter)).await?;
    Ok(Json(page.into()))
}

pub(crate) async fn read_exercise<C: Catalog>(
    State(state): State<AppState<C>>,
    _user: CurrentUser,
    Path(id): Path<String>,
) -> Result<Json<ExerciseBody>, ApiError> {
    let id = Uuid::parse_str(&id)
        .map(domain::ExerciseID::from)
        .map_err(|_| ApiError::BadRequest(format!("Invalid exercise ID: {id:?}")))?;
    match state.catalog.find(id).await? {
        Some(exercise) => Ok(Json(exercise.into())),
        None => Err(ApiError::NotFound),
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ExerciseBody {
    id: Uuid,
    name: String,
    category: String,
    equipment: String,
    muscles: Vec<String>,
    body_parts: Vec<String>,
    difficulty: u8,
    is_compound: bool,
    requires_spotter: bool,
    is_active: bool,
}

impl From<domain::Exercise> for ExerciseBody {
    fn from(value: domain::Exercise) -> Self {
        ExerciseBody {
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

#[derive(Serialize)]
pub(crate) struct ExercisesResponse {
    exercises: Vec<ExerciseBody>,
    total: u64,
}

impl From<domain::ExercisePage> for ExercisesResponse {
    fn from(value: domain::ExercisePage) -> Self {
        ExercisesResponse {
            exercises: value.exercises.into_iter().map(Into::into).collect(),
            total: value.total,
        }
    }
}
