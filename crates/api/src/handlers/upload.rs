//! Handler for `POST /upload`: multipart file upload to the media host.

use axum::extract::multipart::MultipartError;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use blockcopy_core::file_kind::FILE_TYPE_FILE;
use blockcopy_core::provider::MediaUpload;
use blockcopy_core::types::DbId;
use blockcopy_db::models::file::CreateFile;
use blockcopy_db::repositories::FileRepo;

use crate::error::{AppError, AppResult};
use crate::extract::MultipartForm;
use crate::handlers::file::{destroy_remote_assets, FileResponse};
use crate::handlers::owned_project;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

const DEFAULT_MIME: &str = "application/octet-stream";

/// A file part read from the form.
struct FilePart {
    name: String,
    mime_type: String,
    bytes: Vec<u8>,
}

/// POST /api/v1/upload
///
/// Form parts: `file` (the bytes) and `projectId`. The asset is stored under
/// `projects/{projectId}` and recorded as a `file` entry of the project.
pub async fn upload(
    State(state): State<AppState>,
    auth: AuthUser,
    MultipartForm(mut multipart): MultipartForm,
) -> AppResult<(StatusCode, Json<FileResponse>)> {
    let media = state.media()?.clone();

    let mut file: Option<FilePart> = None;
    let mut project_id: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(multipart_error)?
    {
        let part_name = field.name().map(str::to_string);
        match part_name.as_deref() {
            Some("file") => {
                let name = field.file_name().unwrap_or("upload").to_string();
                let mime_type = field.content_type().unwrap_or(DEFAULT_MIME).to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(multipart_error)?;
                file = Some(FilePart {
                    name,
                    mime_type,
                    bytes: bytes.to_vec(),
                });
            }
            Some("projectId") => {
                let text = field
                    .text()
                    .await
                    .map_err(multipart_error)?;
                project_id = Some(text);
            }
            _ => {}
        }
    }

    let file = file.ok_or_else(|| AppError::BadRequest("No file provided".into()))?;
    let project_id = parse_project_id(project_id.as_deref())?;
    let project = owned_project(&state, project_id, auth.id()).await?;

    let size = file.bytes.len() as i64;
    let stored = media
        .upload(MediaUpload {
            file_name: file.name.clone(),
            mime_type: file.mime_type.clone(),
            bytes: file.bytes,
            folder: format!("projects/{}", project.id),
        })
        .await?;

    let public_id = stored.public_id.clone();
    let created = FileRepo::create(
        &state.pool,
        project.id,
        &CreateFile {
            url: Some(stored.secure_url),
            public_id: Some(stored.public_id),
            name: file.name,
            size: Some(size),
            mime_type: Some(file.mime_type),
            file_type: Some(FILE_TYPE_FILE.to_string()),
            content: None,
        },
    )
    .await;
    let record = match created {
        Ok(record) => record,
        Err(e) => {
            tracing::warn!(%public_id, error = %e, "Upload not recorded, removing stored asset");
            destroy_remote_assets(&state, &[public_id]).await;
            return Err(e.into());
        }
    };
    tracing::info!(
        project_id = project.id,
        file_id = record.id,
        size,
        "Upload stored"
    );

    Ok((StatusCode::CREATED, Json(FileResponse { file: record })))
}

/// A broken form is a 400, except a part cut off by the body limit.
fn multipart_error(err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(err.body_text())
    } else {
        AppError::BadRequest(err.body_text())
    }
}

fn parse_project_id(raw: Option<&str>) -> AppResult<DbId> {
    let raw = raw
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::BadRequest("Project ID is required".into()))?;
    raw.parse()
        .map_err(|_| AppError::BadRequest(format!("Invalid project ID '{raw}'")))
}
