//! HTTP route handlers.

use std::path::Path as FsPath;

use askama::Template;
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Response},
    routing::{get, put},
};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use crate::domain::{Station, StationPatch, StationType};
use crate::filter::{filter_by_text, filter_by_type, reset};
use crate::map::MapSession;
use crate::store::{self, StationStore, StoreError};

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: impl AsRef<FsPath>) -> Router {
    Router::new()
        .route("/", get(map_page))
        .route("/admin", get(admin_page))
        .route("/health", get(health))
        .route("/api/stations", get(list_stations))
        .route("/api/stations/search", get(search_stations))
        .route("/api/stations/type/:kind", get(stations_by_type))
        .route("/api/marker-style/:kind", get(marker_style))
        .route(
            "/api/cache/stations",
            get(cached_stations).post(create_cached_station),
        )
        .route(
            "/api/cache/stations/:name",
            put(update_cached_station).delete(delete_cached_station),
        )
        .nest_service("/static", ServeDir::new(static_dir))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Map page.
///
/// `q` runs a name search, otherwise `type` filters by category, otherwise
/// everything is shown. `q` is used as given, so an empty query lists every
/// station focused on the first. `selected` opens an info window.
async fn map_page(
    State(state): State<AppState>,
    Query(req): Query<MapPageRequest>,
) -> Result<Html<String>, AppError> {
    let query = req.q.as_deref();
    let kind = req.kind.as_deref().filter(|k| !k.is_empty());

    let mut session = MapSession::new(state.stations.clone());
    if let Some(query) = query {
        session.search(query);
    } else if let Some(kind) = kind {
        session.filter_type(&StationType::from(kind));
    } else {
        session.show_all();
    }
    if let Some(name) = req.selected.as_deref() {
        session.select_marker(name);
    }

    let selected_type = if query.is_none() { kind } else { None };
    let page = MapTemplate::from_session(
        &session,
        query.unwrap_or_default(),
        selected_type,
        &state.widget,
    )
    .map_err(|e| AppError::Internal {
        message: format!("View serialization error: {}", e),
    })?
    .with_load_error(state.load_error.as_deref());
    render(&page)
}

/// Admin page over the cached copy.
async fn admin_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let stations = with_store(&state, store::current).await?;
    render(&AdminTemplate::new(&stations))
}

/// Every station, unfiltered.
async fn list_stations(State(state): State<AppState>) -> Json<FilterResponse> {
    Json(FilterResponse::from_result(&reset(&state.stations)))
}

/// Search stations by name.
async fn search_stations(
    State(state): State<AppState>,
    Query(req): Query<StationSearchRequest>,
) -> Json<FilterResponse> {
    Json(FilterResponse::from_result(&filter_by_text(
        &state.stations,
        &req.q,
    )))
}

/// Stations of one category.
async fn stations_by_type(
    State(state): State<AppState>,
    Path(kind): Path<String>,
) -> Json<FilterResponse> {
    let kind = StationType::from(kind);
    Json(FilterResponse::from_result(&filter_by_type(
        &state.stations,
        &kind,
    )))
}

/// Marker style for a category.
async fn marker_style(Path(kind): Path<String>) -> Json<StyleResponse> {
    Json(StyleResponse::for_type(&StationType::from(kind)))
}

/// The cached copy of the dataset.
async fn cached_stations(State(state): State<AppState>) -> Result<Json<CacheResponse>, AppError> {
    let stations = with_store(&state, store::current).await?;
    Ok(Json(CacheResponse { stations }))
}

/// Add a station to the dataset and cache the result.
async fn create_cached_station(
    State(state): State<AppState>,
    Json(station): Json<Station>,
) -> Result<(StatusCode, Json<CacheResponse>), AppError> {
    let _guard = state.write_lock.lock().await;
    let stations = with_store(&state, move |cache, dataset| {
        store::create_station(cache, dataset, station)
    })
    .await?;
    Ok((StatusCode::CREATED, Json(CacheResponse { stations })))
}

/// Update a station in the dataset and cache the result.
async fn update_cached_station(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(patch): Json<StationPatch>,
) -> Result<Json<CacheResponse>, AppError> {
    let _guard = state.write_lock.lock().await;
    let stations = with_store(&state, move |cache, dataset| {
        store::update_station(cache, dataset, &name, &patch)
    })
    .await?;
    Ok(Json(CacheResponse { stations }))
}

/// Remove a station from the dataset and cache the result.
async fn delete_cached_station(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<CacheResponse>, AppError> {
    let _guard = state.write_lock.lock().await;
    let stations = with_store(&state, move |cache, dataset| {
        store::delete_station(cache, dataset, &name)
    })
    .await?;
    Ok(Json(CacheResponse { stations }))
}

/// Run a store operation on the blocking thread pool.
///
/// Store implementations may do file I/O.
async fn with_store<T, F>(state: &AppState, op: F) -> Result<T, AppError>
where
    T: Send + 'static,
    F: FnOnce(&dyn StationStore, &[Station]) -> Result<T, StoreError> + Send + 'static,
{
    let store = state.store.clone();
    let dataset = state.stations.clone();
    tokio::task::spawn_blocking(move || op(store.as_ref(), &dataset))
        .await
        .map_err(|e| AppError::Internal {
            message: format!("store task failed: {}", e),
        })?
        .map_err(AppError::from)
}

/// Fallback for unknown paths.
async fn not_found(uri: Uri) -> Response {
    let page = NotFoundTemplate {
        path: uri.path().to_string(),
    };
    match render(&page) {
        Ok(html) => (StatusCode::NOT_FOUND, html).into_response(),
        Err(e) => e.into_response(),
    }
}

fn render(template: &impl Template) -> Result<Html<String>, AppError> {
    template.render().map(Html).map_err(|e| AppError::Internal {
        message: format!("Template error: {}", e),
    })
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Internal { message: String },
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Invalid(_) => AppError::BadRequest {
                message: e.to_string(),
            },
            StoreError::Cache { .. } => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, %message, "request failed");
        } else {
            warn!(%status, %message, "request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
