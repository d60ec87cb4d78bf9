//! HTTP surface: the placeholder route and the language context API.

use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::{Path, Query, Request, State};
use axum::http::{header, StatusCode, Uri};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use crate::context::ServiceContext;
use crate::error::AppError;
use crate::language::LanguageContext;
use crate::locale::{LocaleInfo, TextDirection};
use crate::placeholder::{Placeholder, CACHE_CONTROL, CONTENT_TYPE};

/// State shared by all handlers.
#[derive(Clone)]
struct AppState {
    ctx: Arc<ServiceContext>,
    verbose: bool,
}

/// Language context as seen by API clients.
#[derive(Debug, Serialize)]
struct LanguageBody {
    language: String,
    direction: TextDirection,
    supported: Vec<LocaleInfo>,
}

impl LanguageBody {
    fn from_context(language: &LanguageContext) -> Self {
        Self {
            language: language.language().to_string(),
            direction: language.direction(),
            supported: language.supported(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct SetLanguage {
    code: String,
}

#[derive(Debug, Serialize)]
struct TranslationBody {
    key: String,
    language: String,
    value: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}

/// Build the application router around a service context.
pub fn router(ctx: ServiceContext, verbose: bool) -> Router {
    let state = AppState { ctx: Arc::new(ctx), verbose };

    Router::new()
        .route("/placeholder", get(placeholder_default))
        .route("/placeholder/", get(placeholder_default))
        .route("/placeholder/{*segments}", get(placeholder))
        .route("/api/language", get(get_language).put(put_language))
        .route("/api/translate/{key}", get(translate))
        .route("/healthz", get(|| async { "ok" }))
        .layer(middleware::from_fn_with_state(state.clone(), log_request))
        .with_state(state)
}

/// Bind `addr` and serve until Ctrl-C.
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails.
pub async fn serve(ctx: ServiceContext, addr: &str, verbose: bool) -> Result<(), AppError> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind {addr}: {e}")))?;
    eprintln!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router(ctx, verbose)).with_graceful_shutdown(shutdown_signal()).await?;
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        // No signal handler; run until the process is killed.
        std::future::pending::<()>().await;
    }
    eprintln!("Shutting down");
}

async fn log_request(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let response = next.run(request).await;
    if state.verbose {
        eprintln!("{method} {uri} -> {}", response.status().as_u16());
    }
    response
}

fn svg_response(placeholder: &Placeholder) -> Response {
    (
        [(header::CONTENT_TYPE, CONTENT_TYPE), (header::CACHE_CONTROL, CACHE_CONTROL)],
        placeholder.render(),
    )
        .into_response()
}

async fn placeholder_default() -> Response {
    svg_response(&Placeholder::default())
}

/// Reads the raw path so an encoded `/` stays inside its segment.
async fn placeholder(uri: Uri) -> Response {
    let tail = uri.path().strip_prefix("/placeholder").unwrap_or_default();
    svg_response(&Placeholder::from_path(tail))
}

async fn get_language(State(state): State<AppState>) -> Result<Json<LanguageBody>, AppError> {
    state.ctx.with_language(|language| Ok(Json(LanguageBody::from_context(language))))
}

async fn put_language(
    State(state): State<AppState>,
    Json(body): Json<SetLanguage>,
) -> Result<Json<LanguageBody>, AppError> {
    state.ctx.with_language(|language| {
        language.set_language(&body.code)?;
        if state.verbose && !language.is_supported() {
            eprintln!("Accepted unsupported language '{}'", body.code);
        }
        Ok(Json(LanguageBody::from_context(language)))
    })
}

async fn translate(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<TranslationBody>, AppError> {
    state.ctx.with_language(|language| {
        Ok(Json(TranslationBody {
            value: language.translate_with(&key, &params),
            language: language.language().to_string(),
            key: key.clone(),
        }))
    })
}
