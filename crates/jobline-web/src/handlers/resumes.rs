//! Resume upload and the public view-by-link endpoint.

use std::{io, path::PathBuf};

use axum::{
  body::Body,
  extract::{Multipart, Path, State},
  http::{HeaderValue, Request, header},
  response::{Html, Response},
};
use axum_extra::extract::WithRejection;
use jobline_core::{
  resume::{self, NewResume, Resume},
  store::BoardStore,
};
use tower::ServiceExt;
use tower_http::services::ServeFile;

use crate::{
  AppState,
  error::Error,
  handlers::MultipartForm,
  pages::{ResumeUploadPage, ResumeUploadedPage, render},
  session::CurrentCandidate,
  uploads,
};

/// How a resume file is handed to the browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
  Inline,
  /// Saved as `resume_{id}.<ext>`.
  Attachment,
}

pub async fn upload_form(
  CurrentCandidate(_): CurrentCandidate,
) -> Result<Html<String>, Error> {
  render(&ResumeUploadPage {})
}

/// Store an uploaded resume under the signed-in candidate and show its
/// shareable link.
pub async fn upload<S>(
  State(state): State<AppState<S>>,
  CurrentCandidate(account): CurrentCandidate,
  multipart: Multipart,
) -> Result<Html<String>, Error>
where
  S: BoardStore + Clone + 'static,
{
  let mut form = MultipartForm::read(multipart).await?;
  let title = form.text("title")?.trim().to_owned();
  if title.is_empty() {
    return Err(Error::BadRequest("A resume title is required".into()));
  }
  let file = form
    .file("file")
    .ok_or_else(|| Error::BadRequest("missing form field `file`".into()))?;

  let file_path = state.uploads.save(&file.file_name, &file.bytes).await?;
  let resume = state
    .store
    .add_resume(account.account_id, NewResume { title, file_path })
    .await
    .map_err(Error::store)?;

  tracing::info!(
    candidate_id = account.account_id,
    resume_id = resume.resume_id,
    size = file.bytes.len(),
    "resume uploaded"
  );

  let link = resume::view_link(&state.config.base_url, resume.resume_id);
  render(&ResumeUploadedPage { title: &resume.title, resume_link: &link })
}

/// Anyone holding the link may fetch the file. Nothing is recorded.
pub async fn view<S>(
  State(state): State<AppState<S>>,
  WithRejection(Path(resume_id), _): WithRejection<Path<i64>, Error>,
) -> Result<Response, Error>
where
  S: BoardStore + Clone + 'static,
{
  let (resume, path) = locate_file(&state, resume_id).await?;
  serve_file(&resume, path, Disposition::Inline).await
}

/// Look up a resume and find its file, 404ing if either is missing.
pub async fn locate_file<S>(
  state: &AppState<S>,
  resume_id: i64,
) -> Result<(Resume, PathBuf), Error>
where
  S: BoardStore + Clone + 'static,
{
  let resume = state
    .store
    .get_resume(resume_id)
    .await
    .map_err(Error::store)?
    .ok_or_else(|| Error::NotFound("Resume not found".into()))?;

  match state.uploads.locate(&resume.file_path).await {
    Ok(path) => Ok((resume, path)),
    Err(e) if e.kind() == io::ErrorKind::NotFound => {
      tracing::warn!(resume_id, file = %resume.file_path, "resume file missing from disk");
      Err(Error::NotFound("Resume file not found".into()))
    }
    Err(e) => Err(e.into()),
  }
}

/// Stream the file the same way `/uploads` does, then set how the browser
/// should present it.
pub async fn serve_file(
  resume: &Resume,
  path: PathBuf,
  disposition: Disposition,
) -> Result<Response, Error> {
  let Ok(served) = ServeFile::new(path).oneshot(Request::new(Body::empty())).await;

  if !served.status().is_success() {
    tracing::warn!(resume_id = resume.resume_id, status = %served.status(), "resume file not served");
    return Err(Error::NotFound("Resume file not found".into()));
  }

  let content_disposition = match disposition {
    Disposition::Inline     => HeaderValue::from_static("inline"),
    Disposition::Attachment => {
      HeaderValue::try_from(format!("attachment; filename=\"{}\"", download_name(resume)))
        .map_err(|e| Error::Upload(io::Error::new(io::ErrorKind::InvalidData, e)))?
    }
  };

  let mut response = served.map(Body::new);
  response.headers_mut().insert(header::CONTENT_DISPOSITION, content_disposition);
  Ok(response)
}

/// `resume_{id}` plus the stored file's extension, if any.
pub fn download_name(resume: &Resume) -> String {
  match uploads::extension(&resume.file_path) {
    Some(ext) => format!("resume_{}.{ext}", resume.resume_id),
    None      => format!("resume_{}", resume.resume_id),
  }
}
