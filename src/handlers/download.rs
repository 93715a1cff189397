use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, HeaderValue, Request, StatusCode},
    response::Response,
};
use tower::ServiceExt;
use tower_http::services::ServeDir;

use crate::errors::{AppError, AppResult};
use crate::middleware::Caller;
use crate::services::Catalog;
use crate::AppState;

pub async fn download(
    State(state): State<AppState>,
    caller: Caller,
    Path(file): Path<String>,
) -> AppResult<Response> {
    let catalog = Catalog::load(&state.config.storage.projects_file).await?;

    // Unknown files and forbidden files get the same redirect
    let Some(project) = catalog.project_for_file(&file) else {
        tracing::info!("Download of uncatalogued file refused: {}", file);
        return Err(AppError::Unauthorized);
    };

    if !caller.can_download(project) {
        tracing::info!(
            "Download of {} refused for role {:?} (requires {})",
            file, caller.role, project.role
        );
        return Err(AppError::Unauthorized);
    }

    tracing::info!("Serving {} to {}", file, caller.username().unwrap_or_default());
    serve_file(&state.config.storage.download_dir, &file).await
}

// ServeDir rejects any path that would leave `dir`.
async fn serve_file(dir: &str, file: &str) -> AppResult<Response> {
    let request = Request::builder()
        .uri(format!("/{}", urlencoding::encode(file)))
        .body(Body::empty())
        .map_err(|e| AppError::File(std::io::Error::new(std::io::ErrorKind::InvalidInput, e)))?;

    let response = ServeDir::new(dir)
        .oneshot(request)
        .await
        .map_err(|never| -> AppError { match never {} })?;

    if response.status() == StatusCode::NOT_FOUND {
        tracing::warn!("Download file missing from {}: {}", dir, file);
        return Err(AppError::File(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("{} not found", file),
        )));
    }

    let mut response = response.map(Body::new);
    if response.status().is_success() {
        let value = HeaderValue::from_str(&format!("attachment; filename=\"{}\"", file))
            .unwrap_or_else(|_| {
                tracing::debug!("Filename not usable in Content-Disposition: {}", file);
                HeaderValue::from_static("attachment")
            });
        response.headers_mut().insert(header::CONTENT_DISPOSITION, value);
    }
    Ok(response)
}
