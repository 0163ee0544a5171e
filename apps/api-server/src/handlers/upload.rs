//! Upload handlers - images and videos referenced by blog posts.

use actix_multipart::{Field, Multipart};
use actix_web::{HttpResponse, web};
use futures::TryStreamExt;

use blog_core::domain::{MediaKind, timestamped_file_name};
use blog_shared::dto::UploadResponse;

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/upload/image
pub async fn upload_image(
    state: web::Data<AppState>,
    payload: Multipart,
) -> AppResult<HttpResponse> {
    upload(&state, payload, MediaKind::Image).await
}

/// POST /api/upload/video
pub async fn upload_video(
    state: web::Data<AppState>,
    payload: Multipart,
) -> AppResult<HttpResponse> {
    upload(&state, payload, MediaKind::Video).await
}

async fn upload(state: &AppState, mut payload: Multipart, kind: MediaKind) -> AppResult<HttpResponse> {
    while let Some(mut field) = payload.try_next().await? {
        if field.name() != Some(kind.field_name()) {
            drain(&mut field).await?;
            continue;
        }

        let mime = field
            .content_type()
            .map(|m| m.essence_str().to_string())
            .unwrap_or_default();
        if !kind.accepts(&mime) {
            tracing::debug!(mime = %mime, kind = kind.label(), "Rejected upload type");
            return Err(AppError::BadRequest(format!(
                "Invalid file type. Only {} are allowed",
                kind.allowed_types().join(", ")
            )));
        }

        let original = field
            .content_disposition()
            .and_then(|cd| cd.get_filename())
            .map(str::to_string);
        let bytes = read_limited(&mut field, state.max_upload_bytes).await?;
        let file_name = timestamped_file_name(original.as_deref(), &mime, chrono::Utc::now());

        let stored = state.media.store(kind, &file_name, &bytes).await?;

        tracing::info!(
            file = %stored.file_name,
            size = bytes.len(),
            kind = kind.label(),
            "Media uploaded"
        );

        return Ok(HttpResponse::Ok().json(UploadResponse {
            message: format!("{} uploaded successfully", kind.label()),
            url: stored.url,
            file_name: stored.file_name,
        }));
    }

    Err(AppError::BadRequest(format!(
        "No {} file uploaded",
        kind.field_name()
    )))
}

async fn read_limited(field: &mut Field, limit: usize) -> AppResult<Vec<u8>> {
    let mut bytes = Vec::new();
    while let Some(chunk) = field.try_next().await? {
        if bytes.len() + chunk.len() > limit {
            return Err(AppError::PayloadTooLarge(format!(
                "File exceeds the {limit} byte upload limit"
            )));
        }
        bytes.extend_from_slice(&chunk);
    }
    Ok(bytes)
}

async fn drain(field: &mut Field) -> AppResult<()> {
    while field.try_next().await?.is_some() {}
    Ok(())
}
