//! HTTP layer for Jobline.
//!
//! Exposes an axum [`Router`] serving the job board's HTML pages, backed by
//! any [`BoardStore`].

pub mod auth;
pub mod error;
pub mod handlers;
pub mod pages;
pub mod session;
pub mod uploads;

pub use error::Error;

use std::{path::PathBuf, sync::Arc};

use axum::{
  Router,
  extract::{DefaultBodyLimit, FromRef},
  routing::{get, post},
};
use axum_extra::extract::cookie::Key;
use jobline_core::store::BoardStore;
use serde::Deserialize;
use tower_http::services::ServeDir;

use handlers::{accounts, interactions, jobs, profile, resumes};
use uploads::UploadDir;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and
/// `JOBLINE_*` environment variables.
#[derive(Deserialize, Clone)]
pub struct ServerConfig {
  pub host:           String,
  pub port:           u16,
  /// Public origin used to build shareable resume links.
  pub base_url:       String,
  pub store_path:     PathBuf,
  pub upload_dir:     PathBuf,
  pub static_dir:     PathBuf,
  /// Hex-encoded cookie signing secret, at least 64 bytes.
  pub session_secret: String,
}

#[derive(Debug, thiserror::Error)]
pub enum SecretError {
  #[error("session_secret is not valid hex: {0}")]
  NotHex(#[from] hex::FromHexError),
  #[error("session_secret must decode to at least 64 bytes, got {0}")]
  TooShort(usize),
}

impl ServerConfig {
  /// Decode `session_secret` into a cookie signing key.
  pub fn session_key(&self) -> Result<Key, SecretError> {
    let bytes = hex::decode(self.session_secret.trim())?;
    Key::try_from(bytes.as_slice()).map_err(|_| SecretError::TooShort(bytes.len()))
  }
}

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers.
#[derive(Clone)]
pub struct AppState<S: BoardStore> {
  pub store:   Arc<S>,
  pub config:  Arc<ServerConfig>,
  pub uploads: Arc<UploadDir>,
  pub key:     Key,
}

impl<S: BoardStore> FromRef<AppState<S>> for Key {
  fn from_ref(state: &AppState<S>) -> Self { state.key.clone() }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the axum [`Router`] for the job board.
pub fn router<S>(state: AppState<S>) -> Router
where
  S: BoardStore + Clone + 'static,
{
  let static_files = ServeDir::new(&state.config.static_dir);
  let uploaded_files = ServeDir::new(state.uploads.root());

  Router::new()
    .route("/",                             get(accounts::index))
    .route("/candidate",                    get(accounts::candidate_login_page))
    .route("/candidate/signup",             get(accounts::candidate_signup_page).post(accounts::candidate_signup::<S>))
    .route("/candidate/login",              post(accounts::candidate_login::<S>))
    .route("/recruiter",                    get(accounts::recruiter_login_page))
    .route("/recruiter/signup",             get(accounts::recruiter_signup_page).post(accounts::recruiter_signup::<S>))
    .route("/recruiter/login",              post(accounts::recruiter_login::<S>))
    .route("/dashboard",                    get(accounts::dashboard::<S>))
    .route("/logout",                       get(accounts::logout))
    .route("/profile",                      get(profile::view::<S>))
    .route("/profile/update",               post(profile::update::<S>))
    .route("/resume",                       get(resumes::upload_form))
    .route("/resume/upload",                post(resumes::upload::<S>))
    .route("/resume/view/{resume_id}",      get(resumes::view::<S>))
    .route("/jobs",                         get(jobs::list::<S>))
    .route("/apply/{job_id}",               get(jobs::apply_form::<S>))
    .route("/submit-application/{job_id}",  post(jobs::submit_application::<S>))
    .route("/job_post",                     get(jobs::post_form))
    .route("/job-post",                     post(jobs::create::<S>))
    .route("/applications",                 get(jobs::applications::<S>))
    .route("/resume_interaction",           post(interactions::record::<S>))
    .route("/resume_insights",              get(interactions::insights::<S>))
    .nest_service("/static",                static_files)
    .nest_service("/uploads",               uploaded_files)
    .layer(DefaultBodyLimit::disable())
    .with_state(state)
}
