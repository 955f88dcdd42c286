use axum::{
    extract::{Path, State},
    http::HeaderMap,
    response::{IntoResponse, Response},
};
use cropmon_agenda::{AgendaSelector, DayId, Event};

use crate::{
    routes::AppState,
    template::Template,
    widget::{Control, WidgetHost},
};

/// Header twinspark adds to every request it issues.
const TS_REQUEST: &str = "ts-request";

#[derive(askama::Template)]
#[template(path = "agenda.html")]
pub struct AgendaTemplate {
    pub title: String,
    pub controls: Vec<Control>,
    pub content: String,
}

#[derive(askama::Template)]
#[template(path = "partials/agenda-widget.html")]
pub struct AgendaWidgetTemplate {
    pub controls: Vec<Control>,
    pub content: String,
}

#[tracing::instrument(skip_all)]
pub async fn page(template: Template, State(app): State<AppState>) -> impl IntoResponse {
    render(&template, &app, app.config.agenda.default_day, false)
}

#[tracing::instrument(skip_all, fields(day = %day))]
pub async fn select(
    template: Template,
    State(app): State<AppState>,
    headers: HeaderMap,
    Path(day): Path<String>,
) -> impl IntoResponse {
    let Ok(day) = DayId::parse(&day) else {
        return template.not_found();
    };

    render(&template, &app, day, headers.contains_key(TS_REQUEST))
}

fn render(template: &Template, app: &AppState, day: DayId, partial: bool) -> Response {
    let mut selector = crate::try_page_response!(
        sync: AgendaSelector::initialize(
            &app.table,
            WidgetHost::new(),
            app.config.agenda.default_day
        ),
        template
    );
    selector.dispatch(Event::Select(day));

    let (controls, content) = selector.into_host().into_parts();

    if partial {
        return template.render(AgendaWidgetTemplate { controls, content });
    }

    template.render(AgendaTemplate {
        title: template.title.to_owned(),
        controls,
        content,
    })
}
