//! Static file fallback for the SSR server
//!
//! Requests that match a file under the site root are served as-is; anything
//! else is rendered by the Leptos app, which shows its own not-found view.

use axum::{
    body::Body,
    extract::State,
    http::{Request, Response, StatusCode, Uri},
    response::{IntoResponse, Response as AxumResponse},
};
use leptos::LeptosOptions;
use tower::ServiceExt;
use tower_http::services::ServeDir;
use crate::app::App;

pub async fn file_and_error_handler(
    uri: Uri,
    State(options): State<LeptosOptions>,
    req: Request<Body>,
) -> AxumResponse {
    let root = options.site_root.clone();

    match serve_static(uri, &root).await {
        Ok(res) if res.status() == StatusCode::OK => res.into_response(),
        Ok(_) => {
            let handler = leptos_axum::render_app_to_stream(options, App);
            handler(req).await.into_response()
        }
        Err((status, message)) => {
            tracing::error!(%status, %message, "Static file lookup failed");
            (status, message).into_response()
        }
    }
}

async fn serve_static(uri: Uri, root: &str) -> Result<Response<Body>, (StatusCode, String)> {
    let req = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .map_err(|e| (StatusCode::BAD_REQUEST, format!("Invalid request: {}", e)))?;

    match ServeDir::new(root).oneshot(req).await {
        Ok(res) => Ok(res.map(Body::new)),
        Err(e) => Err((StatusCode::INTERNAL_SERVER_ERROR, format!("Something went wrong: {}", e))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_serves_existing_asset() {
        let res = serve_static("/robots.txt".parse().unwrap(), "assets").await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_missing_file_is_not_found() {
        let res = serve_static("/analyzer".parse().unwrap(), "assets").await.unwrap();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }
}
