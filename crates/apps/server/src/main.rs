use std::sync::Arc;

use axum::Router;
use axum::extract::State;
use axum::http::{Method, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use figure::{MapFigure, render_embed};
use formats::load_district_sources;

mod config;
mod pages;

use config::ServerConfig;

#[derive(Clone)]
struct AppState {
    config: Arc<ServerConfig>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!("configuration error: {err}");
            std::process::exit(1);
        }
    };

    let addr = config.listen_addr;
    let app = router(config);

    info!("district map server listening on http://{addr}");
    axum::serve(tokio::net::TcpListener::bind(addr).await.unwrap(), app)
        .await
        .unwrap();
}

fn router(config: ServerConfig) -> Router {
    let state = AppState {
        config: Arc::new(config),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_headers(Any)
        .allow_methods([Method::GET]);

    Router::new()
        .route("/", get(get_index))
        .route("/map", get(get_map))
        .route("/embed", get(get_embed))
        .nest_service("/assets", ServeDir::new(state.config.data_root.clone()))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn get_index(State(state): State<AppState>) -> Html<String> {
    Html(pages::render_index(&state.config))
}

async fn get_map(State(state): State<AppState>) -> Html<String> {
    Html(pages::render_map(&state.config))
}

/// Builds the embeddable figure fragment. Query arguments are accepted and
/// ignored; both collections are re-read from disk on every request.
async fn get_embed(State(state): State<AppState>) -> Response {
    let paths = state.config.source_paths();
    let loaded = tokio::task::spawn_blocking(move || load_district_sources(&paths)).await;

    let sources = match loaded {
        Ok(Ok(sources)) => sources,
        Ok(Err(err)) => {
            error!("district sources unavailable: {err}");
            return (StatusCode::INTERNAL_SERVER_ERROR, "district sources unavailable")
                .into_response();
        }
        Err(err) => {
            error!("source load task failed: {err}");
            return (StatusCode::INTERNAL_SERVER_ERROR, "district sources unavailable")
                .into_response();
        }
    };

    let components = render_embed(&MapFigure::wisconsin(), &sources);
    Html(pages::render_embed_fragment(&components)).into_response()
}
