use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{Html, IntoResponse, Response},
};
use std::convert::Infallible;

pub const SERVER_ERROR_MESSAGE: &str = "Something went wrong, please retry later";

/// Per-request renderer carrying the configured page title.
pub struct Template {
    pub title: String,
}

impl Template {
    pub fn render<T: askama::Template>(&self, template: T) -> Response {
        match template.render() {
            Ok(html) => Html(html).into_response(),
            Err(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to render template. Error: {err}"),
            )
                .into_response(),
        }
    }

    pub fn not_found(&self) -> Response {
        (
            StatusCode::NOT_FOUND,
            self.render(NotFoundTemplate {
                title: self.title.to_owned(),
            }),
        )
            .into_response()
    }

    pub fn server_error(&self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            self.render(ServerTemplate {
                title: self.title.to_owned(),
                message: SERVER_ERROR_MESSAGE,
            }),
        )
            .into_response()
    }
}

impl FromRequestParts<crate::routes::AppState> for Template {
    type Rejection = Infallible;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &crate::routes::AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(Template {
            title: state.config.agenda.title.to_owned(),
        })
    }
}

#[derive(askama::Template)]
#[template(path = "404.html")]
pub struct NotFoundTemplate {
    pub title: String,
}

#[derive(askama::Template)]
#[template(path = "500.html")]
pub struct ServerTemplate {
    pub title: String,
    pub message: &'static str,
}

#[macro_export]
macro_rules! try_page_response {
    (sync: $result:expr, $template:expr) => {
        match $result {
            Ok(r) => r,
            Err(err) => {
                tracing::error!("{err}");

                return $template.server_error();
            }
        }
    };
}
