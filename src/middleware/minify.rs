use axum::{
    body::{Body, to_bytes},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
cfg_if::cfg_if! {
    if #[cfg(not(debug_assertions))] {
        use std::sync::LazyLock;

        static MINIFY_CFG: LazyLock<minify_html::Cfg> = LazyLock::new(|| minify_html::Cfg {
            keep_closing_tags: true,
            keep_html_and_head_opening_tags: true,
            minify_doctype: false,
            minify_css: true,
            ..Default::default()
        });
    }
}

/// Minifies `text/html` responses in release builds.
pub async fn minify_html_middleware(response: Response<Body>) -> Response<Body> {
    #[cfg(not(debug_assertions))]
    let response = minify_html_response(response, &MINIFY_CFG).await;

    response
}

#[cfg_attr(debug_assertions, allow(dead_code))]
async fn minify_html_response(response: Response<Body>, cfg: &minify_html::Cfg) -> Response<Body> {
    let is_html = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|h| h.to_str().ok())
        .is_some_and(|content_type| content_type.contains("text/html"));

    if !is_html {
        return response;
    }

    let (parts, body) = response.into_parts();
    match to_bytes(body, usize::MAX).await {
        Ok(bytes) => Response::from_parts(parts, Body::from(minify_html::minify(&bytes, cfg))),
        Err(err) => {
            tracing::error!("Failed to read HTML body for minification: {err}");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
