use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::{
    satis::{RepoStore, SatisError},
    types::Repo,
};

use super::{
    models::{ErrorResponse, HealthResponse, UpdatePackageQuery},
    ApiError, AppState, ResourceSettings,
};

pub async fn health<S: RepoStore + Clone + Send + Sync + 'static>(
    State(state): State<AppState<S>>,
) -> impl IntoResponse {
    let uptime_secs = state.started_at.elapsed().map(|d| d.as_secs()).unwrap_or(0);
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "ok".to_string(),
            uptime_secs,
        }),
    )
}

pub async fn add_repo<S: RepoStore + Clone + Send + Sync + 'static>(
    State(state): State<AppState<S>>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let input = decode_repo(&body)?;
    let repo = Repo::new(input.repo_type, input.url);

    match state.store.find_repo(&repo.id).await {
        Ok(_) => {
            log::warn!("Repo {} already exists", repo.id);
            return Err(ApiError::Conflict);
        }
        Err(SatisError::RepoNotFound(_)) => {}
        Err(err) => return Err(ApiError::internal("looking up repo", err)),
    }

    let created = upsert_repo(&state.store, repo).await?;
    let location = format!(
        "{}/api/repo/{}",
        state.settings.host.trim_end_matches('/'),
        created.id
    );
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(created),
    )
        .into_response())
}

pub async fn save_repo<S: RepoStore + Clone + Send + Sync + 'static>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let input = decode_repo(&body)?;
    if !input.id.is_empty() && input.id != id {
        log::warn!("Repo id mismatch: path {} body {}", id, input.id);
        return Err(ApiError::BadRequest);
    }

    let mut existing = state
        .store
        .find_repo(&id)
        .await
        .map_err(|err| ApiError::from_store("loading repo", err))?;
    existing.repo_type = input.repo_type;
    existing.url = input.url;

    let updated = upsert_repo(&state.store, existing).await?;
    Ok((StatusCode::OK, Json(updated)).into_response())
}

pub async fn find_repo<S: RepoStore + Clone + Send + Sync + 'static>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> Result<Json<Repo>, ApiError> {
    state
        .store
        .find_repo(&id)
        .await
        .map(Json)
        .map_err(|err| ApiError::from_store("loading repo", err))
}

pub async fn find_all_repos<S: RepoStore + Clone + Send + Sync + 'static>(
    State(state): State<AppState<S>>,
) -> Result<Json<Vec<Repo>>, ApiError> {
    state
        .store
        .find_all_repos()
        .await
        .map(Json)
        .map_err(|err| ApiError::internal("listing repos", err))
}

pub async fn delete_repo<S: RepoStore + Clone + Send + Sync + 'static>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state
        .store
        .delete_repo(&id, true)
        .await
        .map_err(|err| ApiError::from_store("deleting repo", err))?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn generate_static_web<S: RepoStore + Clone + Send + Sync + 'static>(
    State(state): State<AppState<S>>,
) -> Result<StatusCode, ApiError> {
    state
        .store
        .generate_static_web()
        .await
        .map_err(|err| ApiError::internal("generating static web", err))?;
    Ok(StatusCode::CREATED)
}

pub async fn update_package<S: RepoStore + Clone + Send + Sync + 'static>(
    State(state): State<AppState<S>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<StatusCode, ApiError> {
    let query = UpdatePackageQuery::from_pairs(pairs);
    if !is_authorized(&state.settings, &query) {
        log::warn!("Rejected update-package call with bad credentials");
        return Err(ApiError::Unauthorized);
    }
    state
        .store
        .generate_static_web()
        .await
        .map_err(|err| ApiError::internal("generating static web", err))?;
    Ok(StatusCode::ACCEPTED)
}

pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            message: "endpoint not found".to_string(),
        }),
    )
}

/// Persists `repo` with regeneration, then answers with the stored record.
async fn upsert_repo<S: RepoStore>(store: &S, repo: Repo) -> Result<Repo, ApiError> {
    let id = repo.id.clone();
    store
        .save_repo(repo, true)
        .await
        .map_err(|err| ApiError::internal("saving repo", err))?;
    store
        .find_repo(&id)
        .await
        .map_err(|err| ApiError::internal("reloading saved repo", err))
}

fn decode_repo(body: &[u8]) -> Result<Repo, ApiError> {
    serde_json::from_slice(body).map_err(|err| {
        log::warn!("Invalid repo payload: {}", err);
        ApiError::BadRequest
    })
}

fn is_authorized(settings: &ResourceSettings, query: &UpdatePackageQuery) -> bool {
    if settings.username.is_empty() || settings.api_token.is_empty() {
        return true;
    }
    query.username.as_deref() == Some(settings.username.as_str())
        && query.api_token.as_deref() == Some(settings.api_token.as_str())
}
