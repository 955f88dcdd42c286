use std::sync::Arc;

use axum::{
    Router,
    response::{IntoResponse, Redirect},
    routing::get,
};
use cropmon_agenda::{AgendaSelector, AgendaTable};

use crate::{template::Template, widget::WidgetHost};

mod agenda;
mod assets;
mod health;

pub use assets::AssetsService;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub table: Arc<AgendaTable>,
}

impl AppState {
    /// Loads the agenda table and checks that a widget can host it.
    pub fn new(config: crate::config::Config) -> anyhow::Result<Self> {
        let table = match &config.agenda.fragments_dir {
            Some(dir) => {
                tracing::info!(dir = %dir.display(), "Loading agenda fragments");
                AgendaTable::from_dir(dir)?
            }
            _ => AgendaTable::embedded(),
        };

        AgendaSelector::initialize(&table, WidgetHost::new(), config.agenda.default_day)?;

        Ok(Self {
            config,
            table: Arc::new(table),
        })
    }
}

pub async fn fallback(template: Template) -> impl IntoResponse {
    template.not_found()
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/", get(|| async { Redirect::to("/agenda") }))
        .route("/agenda", get(agenda::page))
        .route("/agenda/{day}", get(agenda::select))
        .nest_service("/static", AssetsService::new())
        .fallback(fallback)
        .with_state(app_state)
}
