//! Shared setup for router tests

#![allow(dead_code)]

use axum::{body::Body, http::Request, response::Response};
use cropmon::{
    AppState,
    config::{AgendaConfig, Config, ObservabilityConfig, ServerConfig},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
        },
        observability: ObservabilityConfig::default(),
        agenda: AgendaConfig::default(),
    }
}

pub fn test_app(config: Config) -> anyhow::Result<axum::Router> {
    Ok(cropmon::server::app(AppState::new(config)?))
}

pub async fn get(app: axum::Router, uri: &str) -> anyhow::Result<Response> {
    Ok(app
        .oneshot(Request::builder().uri(uri).body(Body::empty())?)
        .await?)
}

pub async fn twinspark_get(app: axum::Router, uri: &str) -> anyhow::Result<Response> {
    Ok(app
        .oneshot(
            Request::builder()
                .uri(uri)
                .header("ts-request", "true")
                .body(Body::empty())?,
        )
        .await?)
}

pub async fn body_string(response: Response) -> anyhow::Result<String> {
    let bytes = response.into_body().collect().await?.to_bytes();
    Ok(String::from_utf8(bytes.to_vec())?)
}

/// Day ids of the controls rendered with the `active` class.
pub fn active_controls(html: &str) -> Vec<String> {
    html.match_indices(r#"class="agenda-control active""#)
        .filter_map(|(pos, _)| {
            let id_start = html[..pos].rfind(r#"id=""#)? + 4;
            let id_end = html[id_start..].find('"')? + id_start;
            Some(html[id_start..id_end].to_owned())
        })
        .collect()
}
