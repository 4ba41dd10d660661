//! @acp:module "HTTP API"
//! @acp:summary "Pass-through HTTP routes over the generator"
//! @acp:domain server
//! @acp:layer handler

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::archetype::Archetype;
use crate::config::Config;
use crate::generator::Generator;
use crate::network::{self, Network};

/// Shared state handed to every handler
#[derive(Debug, Clone)]
pub struct AppState {
    pub generator: Generator,
}

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub prompt: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct HealthBody {
    pub status: &'static str,
    pub version: &'static str,
}

#[derive(Debug, Serialize)]
pub struct TemplateInfo {
    #[serde(rename = "type")]
    pub archetype: Archetype,
    pub label: &'static str,
    pub placeholders: Vec<&'static str>,
}

/// Build the API router; `static_dir` is served at `/` when given
pub fn build_router(state: AppState, static_dir: Option<PathBuf>) -> Router {
    let router = Router::new()
        .route("/api/health", get(health_check))
        .route("/api/generate", post(generate_contract))
        .route("/api/networks", get(list_networks))
        .route("/api/templates", get(list_templates));

    let router = match static_dir {
        Some(dir) => router.fallback_service(ServeDir::new(dir)),
        None => router,
    };

    router
        .layer(
            ServiceBuilder::new().layer(TraceLayer::new_for_http()).layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            ),
        )
        .with_state(state)
}

/// Bind and serve until the process is stopped
pub async fn serve(config: &Config, generator: Generator) -> anyhow::Result<()> {
    let state = AppState { generator };
    let app = build_router(state, config.server.static_dir.clone());

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("MantleForge API listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}

async fn health_check() -> Json<HealthBody> {
    Json(HealthBody {
        status: "ok",
        version: crate::VERSION,
    })
}

async fn generate_contract(
    State(state): State<AppState>,
    request: Result<Json<GenerateRequest>, JsonRejection>,
) -> Response {
    let prompt = match request {
        Ok(Json(GenerateRequest { prompt: Some(p) })) if !p.is_empty() => p,
        Err(rejection) => {
            tracing::debug!("Rejected generate request body: {}", rejection.body_text());
            return prompt_required();
        }
        Ok(_) => return prompt_required(),
    };

    Json(state.generator.generate(&prompt)).into_response()
}

fn prompt_required() -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorBody {
            error: "Prompt is required".to_string(),
        }),
    )
        .into_response()
}

async fn list_networks() -> Json<BTreeMap<&'static str, Network>> {
    Json(network::all())
}

async fn list_templates(State(state): State<AppState>) -> Json<Vec<TemplateInfo>> {
    let store = state.generator.store();
    let templates = store
        .archetypes()
        .map(|archetype| TemplateInfo {
            archetype,
            label: archetype.label(),
            placeholders: store
                .placeholders(archetype)
                .iter()
                .map(|p| p.token)
                .collect(),
        })
        .collect();
    Json(templates)
}
